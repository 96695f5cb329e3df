use super::{Entry, Group, KeyFile, KeyFileError};

/// Parses key file text into a document.
///
/// Comment lines are attached to the group header or key that follows them.
/// Comments after the last entry become trailing comments of the document.
pub(super) fn parse_document(text: &str) -> Result<KeyFile, KeyFileError> {
    let mut document = KeyFile::new();
    let mut pending_comments = Vec::new();
    let mut current_group: Option<usize> = None;

    for (index, raw_line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();

        if line.is_empty() {
            continue;
        }

        if line.starts_with('#') {
            pending_comments.push(line.to_string());
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let name = parse_group_header(header, line_number)?;
            let group_index = document.group_index_or_insert(name);
            document.groups[group_index]
                .comments
                .append(&mut pending_comments);
            current_group = Some(group_index);
            continue;
        }

        let (key, value) = line.split_once('=').ok_or_else(|| KeyFileError::Parse {
            line: line_number,
            reason: "expected a group header, a comment, or key=value".to_string(),
        })?;

        let key = key.trim();
        if key.is_empty() {
            return Err(KeyFileError::Parse {
                line: line_number,
                reason: "empty key".to_string(),
            });
        }

        let group_index = current_group.ok_or_else(|| KeyFileError::Parse {
            line: line_number,
            reason: format!("key '{key}' appears before any group"),
        })?;

        let comments = std::mem::take(&mut pending_comments);
        document.groups[group_index].upsert(key, value.trim().to_string(), comments);
    }

    document.trailing_comments = pending_comments;
    Ok(document)
}

fn parse_group_header(header: &str, line: usize) -> Result<&str, KeyFileError> {
    let name = header.strip_suffix(']').ok_or_else(|| KeyFileError::Parse {
        line,
        reason: "unterminated group header".to_string(),
    })?;
    let name = name.trim();

    if name.is_empty() || name.contains(['[', ']']) {
        return Err(KeyFileError::Parse {
            line,
            reason: format!("invalid group name '{name}'"),
        });
    }

    Ok(name)
}

impl Group {
    pub(super) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            comments: Vec::new(),
            entries: Vec::new(),
        }
    }

    /// Replaces the value of an existing key in place, or appends a new entry.
    pub(super) fn upsert(&mut self, key: &str, value: String, mut comments: Vec<String>) {
        match self.entries.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => {
                entry.value = value;
                entry.comments.append(&mut comments);
            }
            None => self.entries.push(Entry {
                key: key.to_string(),
                value,
                comments,
            }),
        }
    }
}
