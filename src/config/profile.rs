use serde::Serialize;

use super::reading::{read_boolean, read_integer, read_string};
use crate::keyfile::KeyFile;

/// Prefix shared by every profile group, followed by a numeric index.
pub const PROFILE_GROUP_PREFIX: &str = "profile_";

/// A saved connection preset for a scan target.
///
/// Names are not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    /// Display name.
    pub name: String,

    /// Router host name or address.
    pub host: String,

    /// SSH port.
    pub port: i32,

    /// Login user.
    pub login: String,

    /// Login password.
    #[serde(skip_serializing)]
    pub password: String,

    /// Wireless interface to scan with.
    pub interface: String,

    /// Scan duration in seconds, used when `duration` is set.
    pub duration_time: i32,

    /// Stop scanning after `duration_time`.
    pub duration: bool,

    /// Run the scan on the router without streaming the UI.
    pub remote: bool,

    /// Use background scan mode.
    pub background: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "unnamed".to_string(),
            host: String::new(),
            port: 22,
            login: "admin".to_string(),
            password: String::new(),
            interface: "wlan1".to_string(),
            duration_time: 10,
            duration: false,
            remote: false,
            background: false,
        }
    }
}

impl Profile {
    /// Creates a profile with default settings and the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub(crate) fn read_from(document: &KeyFile, group: &str) -> Self {
        let defaults = Self::default();

        Self {
            name: read_string(document, group, "name", &defaults.name),
            host: read_string(document, group, "host", &defaults.host),
            port: read_integer(document, group, "port", defaults.port),
            login: read_string(document, group, "login", &defaults.login),
            password: read_string(document, group, "password", &defaults.password),
            interface: read_string(document, group, "interface", &defaults.interface),
            duration_time: read_integer(document, group, "duration_time", defaults.duration_time),
            duration: read_boolean(document, group, "duration", defaults.duration),
            remote: read_boolean(document, group, "remote", defaults.remote),
            background: read_boolean(document, group, "background", defaults.background),
        }
    }

    pub(crate) fn write_to(&self, document: &mut KeyFile, group: &str) {
        document.set_string(group, "name", &self.name);
        document.set_string(group, "host", &self.host);
        document.set_integer(group, "port", self.port);
        document.set_string(group, "login", &self.login);
        document.set_string(group, "password", &self.password);
        document.set_string(group, "interface", &self.interface);
        document.set_integer(group, "duration_time", self.duration_time);
        document.set_boolean(group, "duration", self.duration);
        document.set_boolean(group, "remote", self.remote);
        document.set_boolean(group, "background", self.background);
    }
}

/// Whether a group name denotes a stored profile.
pub fn is_profile_group(name: &str) -> bool {
    name.starts_with(PROFILE_GROUP_PREFIX)
}

/// Loads every profile group in document order.
///
/// Indices are not interpreted, so gaps and unordered numbering are fine.
pub(crate) fn read_profiles(document: &KeyFile) -> Vec<Profile> {
    document
        .groups()
        .filter(|name| is_profile_group(name))
        .map(|group| Profile::read_from(document, group))
        .collect()
}

/// Replaces all profile groups with `profile_0..N-1` in slice order.
pub(crate) fn write_profiles(document: &mut KeyFile, profiles: &[Profile]) {
    strip_profile_groups(document);

    for (index, profile) in profiles.iter().enumerate() {
        profile.write_to(document, &format!("{PROFILE_GROUP_PREFIX}{index}"));
    }
}

pub(crate) fn strip_profile_groups(document: &mut KeyFile) {
    document.retain_groups(|name| !is_profile_group(name));
}
