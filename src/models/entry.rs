//! Diary entry model and the request bodies that create or change entries.

use serde::{Deserialize, Serialize};

/// A single diary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: u64,
    pub title: String,
    pub content: String,
    /// Creation time, `YYYY-MM-DD HH:MM:SS`
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_private: bool,
}

impl Entry {
    /// Case-insensitive exact match against any of the entry's tags.
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }

    /// Case-insensitive substring match against title or content.
    pub fn matches_text(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query) || self.content.to_lowercase().contains(&query)
    }

    /// Overwrite the mutable fields. Id and date never change.
    pub fn apply(&mut self, changes: EntryChanges) {
        self.title = changes.title;
        self.content = changes.content;
        self.tags = changes.tags;
        self.is_private = changes.is_private;
    }
}

/// Data for an entry that has not been assigned an id yet.
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub title: String,
    pub content: String,
    /// Defaults to the current time when `None`
    pub date: Option<String>,
    pub tags: Vec<String>,
    pub is_private: bool,
}

/// Replacement values for the mutable fields of an entry.
#[derive(Debug, Clone, Default)]
pub struct EntryChanges {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub is_private: bool,
}

/// Form body for creating or editing an entry.
#[derive(Debug, Clone, Deserialize)]
pub struct EntryForm {
    pub title: String,
    pub content: String,
    /// Comma-separated tag list
    #[serde(default)]
    pub tags: String,
    /// Checkbox: any value means checked
    #[serde(default)]
    pub is_private: Option<String>,
}

impl EntryForm {
    pub fn into_new_entry(self) -> NewEntry {
        let changes = self.into_changes();
        NewEntry {
            title: changes.title,
            content: changes.content,
            date: None,
            tags: changes.tags,
            is_private: changes.is_private,
        }
    }

    pub fn into_changes(self) -> EntryChanges {
        EntryChanges {
            tags: parse_tags(&self.tags),
            is_private: self.is_private.is_some(),
            title: self.title,
            content: self.content,
        }
    }
}

/// Split comma-separated tag text, trimming each tag and dropping empty ones.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(tags: &[&str]) -> Entry {
        Entry {
            id: 1,
            title: "Morning Walk".to_string(),
            content: "Saw a heron by the river".to_string(),
            date: "2024-05-01 07:30:00".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            is_private: false,
        }
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags(" work, ,life ,"), vec!["work", "life"]);
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ").is_empty());
    }

    #[test]
    fn test_has_tag_is_case_insensitive_exact() {
        let e = entry(&["Nature", "walks"]);
        assert!(e.has_tag("nature"));
        assert!(e.has_tag("WALKS"));
        assert!(!e.has_tag("walk"));
    }

    #[test]
    fn test_matches_text() {
        let e = entry(&[]);
        assert!(e.matches_text("morning"));
        assert!(e.matches_text("HERON"));
        assert!(e.matches_text(""));
        assert!(!e.matches_text("sunset"));
    }

    #[test]
    fn test_form_conversion() {
        let form = EntryForm {
            title: "t".to_string(),
            content: "c".to_string(),
            tags: "a, b".to_string(),
            is_private: Some("on".to_string()),
        };
        let new_entry = form.into_new_entry();
        assert_eq!(new_entry.tags, vec!["a", "b"]);
        assert!(new_entry.is_private);
        assert!(new_entry.date.is_none());
    }

    #[test]
    fn test_entry_defaults_when_fields_absent() {
        let e: Entry = serde_json::from_str(
            r#"{"id": 4, "title": "t", "content": "c", "date": "2024-01-01 00:00:00"}"#,
        )
        .unwrap();
        assert!(e.tags.is_empty());
        assert!(!e.is_private);
    }
}
