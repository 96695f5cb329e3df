use serde::Serialize;

use super::reading::{read_boolean, read_integer, read_string};
use crate::keyfile::KeyFile;

pub(crate) const SECTION: &str = "preferences";

/// Settings edited in the preferences dialog.
///
/// The blacklist and highlightlist are stored in the same section but are
/// kept in [`AddressList`](super::AddressList) values of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreferencesConfig {
    /// Toolbar icon size in pixels.
    pub icon_size: i32,

    /// Column used by the interactive search.
    pub search_column: i32,

    /// Show the latitude/longitude columns.
    pub latlon_column: bool,

    /// Show the azimuth column.
    pub azimuth_column: bool,

    /// Record per-network signal samples.
    pub signals: bool,

    /// Host running gpsd.
    pub gps_hostname: String,

    /// TCP port of gpsd.
    pub gps_tcp_port: i32,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            icon_size: 18,
            search_column: 1,
            latlon_column: false,
            azimuth_column: false,
            signals: true,
            gps_hostname: "localhost".to_string(),
            gps_tcp_port: 2947,
        }
    }
}

impl PreferencesConfig {
    pub(crate) fn read_from(document: &KeyFile) -> Self {
        let defaults = Self::default();

        Self {
            icon_size: read_integer(document, SECTION, "icon_size", defaults.icon_size),
            search_column: read_integer(document, SECTION, "search_column", defaults.search_column),
            latlon_column: read_boolean(document, SECTION, "latlon_column", defaults.latlon_column),
            azimuth_column: read_boolean(
                document,
                SECTION,
                "azimuth_column",
                defaults.azimuth_column,
            ),
            signals: read_boolean(document, SECTION, "signals", defaults.signals),
            gps_hostname: read_string(document, SECTION, "gps_hostname", &defaults.gps_hostname),
            gps_tcp_port: read_integer(document, SECTION, "gps_tcp_port", defaults.gps_tcp_port),
        }
    }

    pub(crate) fn write_to(&self, document: &mut KeyFile) {
        document.set_integer(SECTION, "icon_size", self.icon_size);
        document.set_integer(SECTION, "search_column", self.search_column);
        document.set_boolean(SECTION, "latlon_column", self.latlon_column);
        document.set_boolean(SECTION, "azimuth_column", self.azimuth_column);
        document.set_boolean(SECTION, "signals", self.signals);
        document.set_string(SECTION, "gps_hostname", &self.gps_hostname);
        document.set_integer(SECTION, "gps_tcp_port", self.gps_tcp_port);
    }
}
