use std::fmt;

use serde::Serialize;

use crate::keyfile::{KeyFile, KeyFileError};

/// Value type of a scalar setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    /// 32-bit signed integer
    Integer,
    /// `true` or `false`
    Boolean,
    /// Free-form text
    String,
}

impl SettingKind {
    /// Human-readable type name.
    pub fn name(self) -> &'static str {
        match self {
            SettingKind::Integer => "integer",
            SettingKind::Boolean => "boolean",
            SettingKind::String => "string",
        }
    }

    /// Parses user input as a value of this kind.
    pub fn parse(self, input: &str) -> Option<SettingValue> {
        match self {
            SettingKind::Integer => input.trim().parse().ok().map(SettingValue::Integer),
            SettingKind::Boolean => match input.trim() {
                "true" | "1" => Some(SettingValue::Boolean(true)),
                "false" | "0" => Some(SettingValue::Boolean(false)),
                _ => None,
            },
            SettingKind::String => Some(SettingValue::String(input.to_string())),
        }
    }
}

/// A typed setting value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// Integer value
    Integer(i32),
    /// Boolean value
    Boolean(bool),
    /// String value
    String(String),
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Integer(value) => write!(f, "{value}"),
            SettingValue::Boolean(value) => write!(f, "{value}"),
            SettingValue::String(value) => write!(f, "{value:?}"),
        }
    }
}

/// A named scalar stored under a section of the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Setting {
    /// Section (group) name
    pub section: &'static str,
    /// Key inside the section
    pub key: &'static str,
    /// Value type
    pub kind: SettingKind,
}

const fn setting(section: &'static str, key: &'static str, kind: SettingKind) -> Setting {
    Setting { section, key, kind }
}

/// Every scalar setting outside of profile groups.
pub const SETTINGS: &[Setting] = &[
    setting("window", "x", SettingKind::Integer),
    setting("window", "y", SettingKind::Integer),
    setting("window", "width", SettingKind::Integer),
    setting("window", "height", SettingKind::Integer),
    setting("window", "maximized", SettingKind::Boolean),
    setting("interface", "sound", SettingKind::Boolean),
    setting("interface", "dark_mode", SettingKind::Boolean),
    setting("interface", "gps", SettingKind::Boolean),
    setting("interface", "last_profile", SettingKind::Integer),
    setting("path", "log_open", SettingKind::String),
    setting("path", "log_save", SettingKind::String),
    setting("path", "log_export", SettingKind::String),
    setting("preferences", "icon_size", SettingKind::Integer),
    setting("preferences", "search_column", SettingKind::Integer),
    setting("preferences", "latlon_column", SettingKind::Boolean),
    setting("preferences", "azimuth_column", SettingKind::Boolean),
    setting("preferences", "signals", SettingKind::Boolean),
    setting("preferences", "gps_hostname", SettingKind::String),
    setting("preferences", "gps_tcp_port", SettingKind::Integer),
    setting("preferences", "blacklist_enabled", SettingKind::Boolean),
    setting("preferences", "blacklist_inverted", SettingKind::Boolean),
    setting("preferences", "highlightlist_enabled", SettingKind::Boolean),
    setting("preferences", "highlightlist_inverted", SettingKind::Boolean),
];

impl Setting {
    /// Finds a setting by its `section.key` path.
    pub fn lookup(path: &str) -> Option<&'static Setting> {
        let (section, key) = path.split_once('.')?;
        SETTINGS
            .iter()
            .find(|setting| setting.section == section && setting.key == key)
    }

    /// The `section.key` path of this setting.
    pub fn path(&self) -> String {
        format!("{}.{}", self.section, self.key)
    }

    pub(crate) fn read(&self, document: &KeyFile) -> Result<SettingValue, KeyFileError> {
        Ok(match self.kind {
            SettingKind::Integer => {
                SettingValue::Integer(document.get_integer(self.section, self.key)?)
            }
            SettingKind::Boolean => {
                SettingValue::Boolean(document.get_boolean(self.section, self.key)?)
            }
            SettingKind::String => {
                SettingValue::String(document.get_string(self.section, self.key)?)
            }
        })
    }

    pub(crate) fn write(&self, document: &mut KeyFile, value: &SettingValue) {
        match value {
            SettingValue::Integer(value) => document.set_integer(self.section, self.key, *value),
            SettingValue::Boolean(value) => document.set_boolean(self.section, self.key, *value),
            SettingValue::String(value) => document.set_string(self.section, self.key, value),
        }
    }
}
