use serde::Serialize;

use super::reading::read_string;
use crate::keyfile::KeyFile;

pub(crate) const SECTION: &str = "path";

/// Directories last used by the scan log file dialogs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogPathsConfig {
    /// Directory of the last opened log.
    pub log_open: String,

    /// Directory of the last saved log.
    pub log_save: String,

    /// Directory of the last exported log.
    pub log_export: String,
}

impl LogPathsConfig {
    pub(crate) fn read_from(document: &KeyFile) -> Self {
        Self {
            log_open: read_string(document, SECTION, "log_open", ""),
            log_save: read_string(document, SECTION, "log_save", ""),
            log_export: read_string(document, SECTION, "log_export", ""),
        }
    }

    pub(crate) fn write_to(&self, document: &mut KeyFile) {
        document.set_string(SECTION, "log_open", &self.log_open);
        document.set_string(SECTION, "log_save", &self.log_save);
        document.set_string(SECTION, "log_export", &self.log_export);
    }
}
