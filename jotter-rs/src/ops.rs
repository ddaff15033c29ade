//! Note lifecycle operations on top of [`NoteStore`].
//!
//! Users address notes by display number: the 1-based position in the
//! store. Numbers are positional, so deleting a note renumbers every note
//! after it.

use crate::error::{JotterError, Result};
use crate::note::Note;
use crate::store::NoteStore;
use log::info;
use serde::Serialize;

/// A note paired with its display number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberedNote<'a> {
    pub number: usize,
    #[serde(flatten)]
    pub note: &'a Note,
}

impl NumberedNote<'_> {
    /// Single-line form, see [`Note::format`].
    pub fn format(&self) -> String {
        self.note.format(self.number)
    }
}

/// Result of listing the store.
#[derive(Debug, PartialEq, Eq)]
pub enum Listing<'a> {
    Empty,
    Notes(Vec<NumberedNote<'a>>),
}

impl Listing<'_> {
    pub fn total(&self) -> usize {
        match self {
            Listing::Empty => 0,
            Listing::Notes(notes) => notes.len(),
        }
    }
}

/// Create a note stamped with the current time.
pub fn create(text: &str) -> Note {
    Note::new(text)
}

/// Validate `text` and append it as a new note.
///
/// Whitespace-only text is rejected. Otherwise the text is stored as given,
/// untrimmed. Returns the display number of the new note.
pub fn add_note(store: &mut NoteStore, text: &str) -> Result<usize> {
    if text.trim().is_empty() {
        return Err(JotterError::EmptyText);
    }

    store.add(create(text));
    let number = store.count();
    info!("Added note #{}", number);
    Ok(number)
}

/// Every note with its display number, in store order.
pub fn list_all(store: &NoteStore) -> Listing<'_> {
    if store.is_empty() {
        return Listing::Empty;
    }
    Listing::Notes(numbered(store.get_all()).collect())
}

/// Delete the note shown as `number`.
///
/// Numbers below 1 or past the end are reported as not found.
pub fn delete_by_number(store: &mut NoteStore, number: i64) -> Result<i64> {
    let removed = number
        .checked_sub(1)
        .and_then(|index| usize::try_from(index).ok())
        .is_some_and(|index| store.remove(index));

    if !removed {
        return Err(JotterError::NoteNotFound(number));
    }
    info!("Deleted note #{}", number);
    Ok(number)
}

/// Parse a display number typed by the user.
pub fn parse_number(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| JotterError::InvalidNumber(trimmed.to_string()))
}

/// Reject empty or whitespace-only search keywords.
///
/// [`search`] itself accepts anything; an empty keyword matches every note.
pub fn validate_keyword(keyword: &str) -> Result<&str> {
    let trimmed = keyword.trim();
    if trimmed.is_empty() {
        return Err(JotterError::EmptyKeyword);
    }
    Ok(trimmed)
}

/// Notes whose text contains `keyword`, ignoring case, in store order.
pub fn search<'a>(store: &'a NoteStore, keyword: &str) -> Vec<NumberedNote<'a>> {
    let keyword_lower = keyword.to_lowercase();
    numbered(store.get_all())
        .filter(|hit| hit.note.matches(&keyword_lower))
        .collect()
}

/// Single-line form of `note` shown as `index`.
pub fn format(note: &Note, index: usize) -> String {
    note.format(index)
}

fn numbered(notes: &[Note]) -> impl Iterator<Item = NumberedNote<'_>> {
    notes
        .iter()
        .enumerate()
        .map(|(i, note)| NumberedNote { number: i + 1, note })
}
