//! Search command implementation.

use crate::cli::args::SearchArgs;
use crate::cli::output::Output;
use crate::cli::render;
use crate::error::Result;
use crate::ops::{self, NumberedNote};
use crate::store::NoteStore;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SearchResponse<'a> {
    pub keyword: String,
    pub results: Vec<NumberedNote<'a>>,
    pub total: usize,
}

pub fn run(store: &NoteStore, args: &SearchArgs, output: &Output) -> Result<()> {
    let keyword = ops::validate_keyword(&args.keyword)?;
    let results = ops::search(store, keyword);
    let text = render::search_results(&results);

    let response = SearchResponse {
        keyword: keyword.to_string(),
        total: results.len(),
        results,
    };
    output.emit(&response, &text)
}
