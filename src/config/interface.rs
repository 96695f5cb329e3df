use serde::Serialize;

use super::reading::{read_boolean, read_integer};
use crate::keyfile::KeyFile;

pub(crate) const SECTION: &str = "interface";

/// Toggles exposed on the main toolbar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceConfig {
    /// Play a sound when a new network shows up.
    pub sound: bool,

    /// Use the dark theme variant.
    pub dark_mode: bool,

    /// Poll the GPS daemon for positions.
    pub gps: bool,

    /// Index of the profile used last, `-1` when none.
    pub last_profile: i32,
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self {
            sound: false,
            dark_mode: false,
            gps: false,
            last_profile: -1,
        }
    }
}

impl InterfaceConfig {
    pub(crate) fn read_from(document: &KeyFile) -> Self {
        let defaults = Self::default();

        Self {
            sound: read_boolean(document, SECTION, "sound", defaults.sound),
            dark_mode: read_boolean(document, SECTION, "dark_mode", defaults.dark_mode),
            gps: read_boolean(document, SECTION, "gps", defaults.gps),
            last_profile: read_integer(document, SECTION, "last_profile", defaults.last_profile),
        }
    }

    pub(crate) fn write_to(&self, document: &mut KeyFile) {
        document.set_boolean(SECTION, "sound", self.sound);
        document.set_boolean(SECTION, "dark_mode", self.dark_mode);
        document.set_boolean(SECTION, "gps", self.gps);
        document.set_integer(SECTION, "last_profile", self.last_profile);
    }
}
