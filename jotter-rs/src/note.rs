//! Note representation.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Format of the `created` timestamp: local time, second precision, no offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single text note with its creation timestamp.
///
/// Notes are never edited in place. They are appended to the store or
/// removed from it as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Note body, stored exactly as entered.
    pub text: String,

    /// Creation time, formatted with [`TIMESTAMP_FORMAT`].
    pub created: String,
}

impl Note {
    /// Create a note stamped with the current local time.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_created(text, Local::now().naive_local())
    }

    /// Create a note with an explicit creation time.
    pub fn with_created(text: impl Into<String>, created: NaiveDateTime) -> Self {
        Self {
            text: text.into(),
            created: created.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Single-line form: `[index] created - text`.
    pub fn format(&self, index: usize) -> String {
        format!("[{}] {} - {}", index, self.created, self.text)
    }

    /// Case-insensitive substring match against the note text.
    pub fn matches(&self, keyword_lower: &str) -> bool {
        self.text.to_lowercase().contains(keyword_lower)
    }
}
