//! Value escaping for the key file format.
//!
//! Strings are stored with `\s`, `\n`, `\t`, `\r` and `\\` escapes. List items
//! additionally escape the `;` separator as `\;`.

use std::mem;

pub(super) const LIST_SEPARATOR: char = ';';

/// Escapes a string so that it survives a write/parse cycle unchanged.
pub(super) fn escape_value(value: &str, escape_separator: bool) -> String {
    let mut escaped = String::with_capacity(value.len());
    let last = value.chars().count().saturating_sub(1);

    for (index, c) in value.chars().enumerate() {
        match c {
            ' ' if index == 0 || index == last => escaped.push_str("\\s"),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            LIST_SEPARATOR if escape_separator => escaped.push_str("\\;"),
            c => escaped.push(c),
        }
    }

    escaped
}

/// Decodes escape sequences in a raw value.
///
/// Returns the offending sequence when an unknown escape is found.
pub(super) fn unescape_value(raw: &str, allow_separator: bool) -> Result<String, String> {
    let mut value = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }

        match chars.next() {
            Some('s') => value.push(' '),
            Some('n') => value.push('\n'),
            Some('t') => value.push('\t'),
            Some('r') => value.push('\r'),
            Some('\\') => value.push('\\'),
            Some(LIST_SEPARATOR) if allow_separator => value.push(LIST_SEPARATOR),
            Some(other) => return Err(format!("\\{other}")),
            None => return Err("\\".to_string()),
        }
    }

    Ok(value)
}

/// Splits a raw list value on unescaped separators, keeping escapes intact.
///
/// A trailing separator does not produce an empty final item.
pub(super) fn split_list(raw: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                current.push(c);
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            LIST_SEPARATOR => items.push(mem::take(&mut current)),
            c => current.push(c),
        }
    }

    if !current.is_empty() {
        items.push(current);
    }

    items
}
