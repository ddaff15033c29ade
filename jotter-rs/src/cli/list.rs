//! List and count command implementations.

use crate::cli::output::Output;
use crate::cli::render;
use crate::error::Result;
use crate::ops::{self, Listing, NumberedNote};
use crate::store::NoteStore;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ListResponse<'a> {
    pub notes: Vec<NumberedNote<'a>>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub total: usize,
}

pub fn run(store: &NoteStore, output: &Output) -> Result<()> {
    let listing = ops::list_all(store);
    let text = render::listing(&listing);

    let total = listing.total();
    let notes = match listing {
        Listing::Empty => Vec::new(),
        Listing::Notes(notes) => notes,
    };
    let response = ListResponse { notes, total };
    output.emit(&response, &text)
}

pub fn count(store: &NoteStore, output: &Output) -> Result<()> {
    let total = store.count();
    output.emit(&CountResponse { total }, &total.to_string())
}
