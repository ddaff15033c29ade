//! Human-readable rendering shared by the menu and the one-shot commands.

use crate::ops::{Listing, NumberedNote};

const RULE_WIDTH: usize = 60;

pub const EMPTY_LIST: &str = "The note list is empty.";
pub const NOTHING_FOUND: &str = "Nothing found.";

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn push_block(out: &mut String, title: &str, notes: &[NumberedNote<'_>]) {
    out.push_str(&rule());
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&rule());
    out.push('\n');
    for hit in notes {
        out.push_str(&format!("\n[{}] {}\n    {}\n", hit.number, hit.note.created, hit.note.text));
    }
    out.push('\n');
    out.push_str(&rule());
}

/// Full listing with a trailing total, or the empty-state message.
pub fn listing(listing: &Listing<'_>) -> String {
    match listing {
        Listing::Empty => EMPTY_LIST.to_string(),
        Listing::Notes(notes) => {
            let mut out = String::new();
            push_block(&mut out, "NOTES", notes);
            out.push_str(&format!("\nTotal notes: {}", notes.len()));
            out
        }
    }
}

/// Search hits, or the nothing-found message.
pub fn search_results(hits: &[NumberedNote<'_>]) -> String {
    if hits.is_empty() {
        return NOTHING_FOUND.to_string();
    }
    let mut out = String::new();
    push_block(&mut out, &format!("SEARCH RESULTS (found: {})", hits.len()), hits);
    out
}

pub fn added(number: usize) -> String {
    format!("Note #{} added.", number)
}

pub fn deleted(number: i64) -> String {
    format!("Note #{} deleted.", number)
}
