//! INI-style key file document.
//!
//! A key file is a sequence of `[group]` sections holding `key=value` lines.
//! The document keeps groups, keys, and comments in their original order so
//! that values written by this crate can be merged into a file that also
//! carries foreign entries without losing them.
//!
//! ```text
//! # comment attached to the group below
//! [window]
//! width=1000
//! maximized=false
//!
//! [preferences]
//! blacklist=00:11:22:33:44:55;66:77:88:99:AA:BB;
//! ```

mod error;
mod escape;
mod parse;

#[cfg(test)]
mod tests;

use std::str::FromStr;

pub use error::KeyFileError;
use escape::{LIST_SEPARATOR, escape_value, split_list, unescape_value};

/// An ordered key file document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyFile {
    groups: Vec<Group>,
    trailing_comments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Group {
    name: String,
    comments: Vec<String>,
    entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    key: String,
    value: String,
    comments: Vec<String>,
}

impl KeyFile {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a document from its textual form.
    ///
    /// # Errors
    /// Returns `KeyFileError::Parse` for the first line that is neither a
    /// comment, a group header, nor a `key=value` pair inside a group.
    pub fn parse(text: &str) -> Result<Self, KeyFileError> {
        parse::parse_document(text)
    }

    /// Returns the group names in document order.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|group| group.name.as_str())
    }

    /// Returns the keys of a group in document order.
    pub fn keys(&self, group: &str) -> impl Iterator<Item = &str> {
        self.group(group)
            .into_iter()
            .flat_map(|group| group.entries.iter().map(|entry| entry.key.as_str()))
    }

    /// Whether the document contains the named group.
    pub fn has_group(&self, group: &str) -> bool {
        self.group(group).is_some()
    }

    /// Whether the named group contains the key.
    pub fn has_key(&self, group: &str, key: &str) -> bool {
        self.get_value(group, key).is_ok()
    }

    /// Removes a group and everything in it. Returns whether it existed.
    pub fn remove_group(&mut self, group: &str) -> bool {
        let before = self.groups.len();
        self.groups.retain(|candidate| candidate.name != group);
        self.groups.len() != before
    }

    /// Keeps only the groups whose name satisfies the predicate.
    pub fn retain_groups<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str) -> bool,
    {
        self.groups.retain(|group| keep(&group.name));
    }

    /// Removes a key from a group. Returns whether it existed.
    pub fn remove_key(&mut self, group: &str, key: &str) -> bool {
        let Some(group) = self.group_mut(group) else {
            return false;
        };

        let before = group.entries.len();
        group.entries.retain(|entry| entry.key != key);
        group.entries.len() != before
    }

    /// Returns the raw, still escaped value of a key.
    ///
    /// # Errors
    /// Returns `GroupNotFound` or `KeyNotFound` when the value is absent.
    pub fn get_value(&self, group: &str, key: &str) -> Result<&str, KeyFileError> {
        let found = self.group(group).ok_or_else(|| KeyFileError::GroupNotFound {
            group: group.to_string(),
        })?;

        found
            .entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
            .ok_or_else(|| KeyFileError::KeyNotFound {
                group: group.to_string(),
                key: key.to_string(),
            })
    }

    /// Reads a string value, decoding escape sequences.
    ///
    /// # Errors
    /// Returns an error when the key is absent or contains an unknown escape.
    pub fn get_string(&self, group: &str, key: &str) -> Result<String, KeyFileError> {
        let raw = self.get_value(group, key)?;
        unescape_value(raw, false).map_err(|_| invalid_value(group, key, "string", raw))
    }

    /// Reads a 32-bit signed integer value.
    ///
    /// # Errors
    /// Returns an error when the key is absent or the value is not an integer
    /// in range.
    pub fn get_integer(&self, group: &str, key: &str) -> Result<i32, KeyFileError> {
        let raw = self.get_value(group, key)?;
        i32::from_str(raw).map_err(|_| invalid_value(group, key, "integer", raw))
    }

    /// Reads a boolean value. Accepts `true`, `false`, `1`, and `0`.
    ///
    /// # Errors
    /// Returns an error when the key is absent or the value is not a boolean.
    pub fn get_boolean(&self, group: &str, key: &str) -> Result<bool, KeyFileError> {
        let raw = self.get_value(group, key)?;
        match raw {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(invalid_value(group, key, "boolean", raw)),
        }
    }

    /// Reads a `;`-separated string list.
    ///
    /// # Errors
    /// Returns an error when the key is absent or an item contains an unknown
    /// escape.
    pub fn get_string_list(&self, group: &str, key: &str) -> Result<Vec<String>, KeyFileError> {
        let raw = self.get_value(group, key)?;
        split_list(raw)
            .iter()
            .map(|item| {
                unescape_value(item, true).map_err(|_| invalid_value(group, key, "string list", raw))
            })
            .collect()
    }

    /// Stores a string value, escaping it as needed.
    pub fn set_string(&mut self, group: &str, key: &str, value: &str) {
        self.set_value(group, key, escape_value(value, false));
    }

    /// Stores an integer value.
    pub fn set_integer(&mut self, group: &str, key: &str, value: i32) {
        self.set_value(group, key, value.to_string());
    }

    /// Stores a boolean value as `true` or `false`.
    pub fn set_boolean(&mut self, group: &str, key: &str, value: bool) {
        self.set_value(group, key, value.to_string());
    }

    /// Stores a string list. Every item is followed by the separator.
    pub fn set_string_list<I, S>(&mut self, group: &str, key: &str, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut raw = String::new();
        for item in items {
            raw.push_str(&escape_value(item.as_ref(), true));
            raw.push(LIST_SEPARATOR);
        }
        self.set_value(group, key, raw);
    }

    /// Renders the document to text.
    ///
    /// # Errors
    /// Returns `KeyFileError::InvalidName` when a group name or key cannot be
    /// written without changing the meaning of the document.
    pub fn to_data(&self) -> Result<String, KeyFileError> {
        let mut data = String::new();

        for (index, group) in self.groups.iter().enumerate() {
            validate_group_name(&group.name)?;

            if index > 0 {
                data.push('\n');
            }
            push_comments(&mut data, &group.comments);
            data.push('[');
            data.push_str(&group.name);
            data.push_str("]\n");

            for entry in &group.entries {
                validate_key(&entry.key)?;
                push_comments(&mut data, &entry.comments);
                data.push_str(&entry.key);
                data.push('=');
                data.push_str(&entry.value);
                data.push('\n');
            }
        }

        if !self.trailing_comments.is_empty() {
            if !data.is_empty() {
                data.push('\n');
            }
            push_comments(&mut data, &self.trailing_comments);
        }

        Ok(data)
    }

    fn set_value(&mut self, group: &str, key: &str, value: String) {
        let index = self.group_index_or_insert(group);
        self.groups[index].upsert(key, value, Vec::new());
    }

    fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.name == name)
    }

    fn group_mut(&mut self, name: &str) -> Option<&mut Group> {
        self.groups.iter_mut().find(|group| group.name == name)
    }

    fn group_index_or_insert(&mut self, name: &str) -> usize {
        match self.groups.iter().position(|group| group.name == name) {
            Some(index) => index,
            None => {
                self.groups.push(Group::new(name));
                self.groups.len() - 1
            }
        }
    }
}

impl FromStr for KeyFile {
    type Err = KeyFileError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

fn invalid_value(group: &str, key: &str, expected: &'static str, raw: &str) -> KeyFileError {
    KeyFileError::InvalidValue {
        group: group.to_string(),
        key: key.to_string(),
        expected,
        value: raw.to_string(),
    }
}

fn push_comments(data: &mut String, comments: &[String]) {
    for comment in comments {
        data.push_str(comment);
        data.push('\n');
    }
}

fn validate_group_name(name: &str) -> Result<(), KeyFileError> {
    let representable =
        !name.is_empty() && name.trim() == name && !name.contains(['[', ']', '\n', '\r']);

    if representable {
        Ok(())
    } else {
        Err(KeyFileError::InvalidName {
            name: name.to_string(),
        })
    }
}

fn validate_key(key: &str) -> Result<(), KeyFileError> {
    let representable = !key.is_empty()
        && key.trim() == key
        && !key.starts_with(['#', '['])
        && !key.contains(['=', '\n', '\r']);

    if representable {
        Ok(())
    } else {
        Err(KeyFileError::InvalidName {
            name: key.to_string(),
        })
    }
}
