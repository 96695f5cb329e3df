//! Configuration schema and defaults.
//!
//! Defines every section of the MTscan configuration file together with the
//! value each setting takes when it is absent or malformed. Reading never
//! fails: a document that lacks everything still yields a complete
//! [`Config`].

mod address_list;
mod interface;
mod log_paths;
mod paths;
mod preferences;
mod profile;
mod reading;
mod settings;
mod window;


pub use address_list::AddressList;
pub use interface::InterfaceConfig;
pub use log_paths::LogPathsConfig;
pub use paths::ConfigPaths;
pub use preferences::PreferencesConfig;
pub use profile::{PROFILE_GROUP_PREFIX, Profile, is_profile_group};
pub use settings::{SETTINGS, Setting, SettingKind, SettingValue};
pub use window::WindowConfig;

use serde::Serialize;

use crate::keyfile::KeyFile;

const BLACKLIST_KEY: &str = "blacklist";
const HIGHLIGHTLIST_KEY: &str = "highlightlist";

/// The complete in-memory configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Config {
    /// `[window]` section.
    pub window: WindowConfig,

    /// `[interface]` section.
    pub interface: InterfaceConfig,

    /// `[profile_N]` sections in display order.
    pub profiles: Vec<Profile>,

    /// `[path]` section.
    #[serde(rename = "path")]
    pub log_paths: LogPathsConfig,

    /// `[preferences]` section, except the address lists.
    pub preferences: PreferencesConfig,

    /// Addresses hidden from scan results.
    pub blacklist: AddressList,

    /// Addresses emphasized in scan results.
    pub highlightlist: AddressList,
}

impl Config {
    /// Builds a configuration from a document, defaulting what is missing.
    pub fn read_from(document: &KeyFile) -> Self {
        Self {
            window: WindowConfig::read_from(document),
            interface: InterfaceConfig::read_from(document),
            profiles: profile::read_profiles(document),
            log_paths: LogPathsConfig::read_from(document),
            preferences: PreferencesConfig::read_from(document),
            blacklist: AddressList::read_from(document, preferences::SECTION, BLACKLIST_KEY),
            highlightlist: AddressList::read_from(
                document,
                preferences::SECTION,
                HIGHLIGHTLIST_KEY,
            ),
        }
    }

    /// Writes every setting into the document.
    ///
    /// Existing profile groups are replaced by freshly numbered ones. Groups
    /// and keys this crate does not know about are left alone.
    pub fn write_to(&self, document: &mut KeyFile) {
        self.window.write_to(document);
        self.interface.write_to(document);
        profile::write_profiles(document, &self.profiles);
        self.log_paths.write_to(document);
        self.preferences.write_to(document);
        self.blacklist
            .write_to(document, preferences::SECTION, BLACKLIST_KEY);
        self.highlightlist
            .write_to(document, preferences::SECTION, HIGHLIGHTLIST_KEY);
    }

    /// Removes the profile groups from a document after they were loaded.
    pub(crate) fn strip_profiles(document: &mut KeyFile) {
        profile::strip_profile_groups(document);
    }
}
