//! Add command implementation.

use crate::cli::args::AddArgs;
use crate::cli::output::Output;
use crate::cli::render;
use crate::error::Result;
use crate::note::Note;
use crate::ops;
use crate::store::NoteStore;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AddResponse<'a> {
    pub number: usize,
    pub note: &'a Note,
    pub message: String,
}

pub fn run(store: &mut NoteStore, args: &AddArgs, output: &Output) -> Result<()> {
    let number = ops::add_note(store, &args.text)?;
    let message = render::added(number);

    let response = AddResponse {
        number,
        note: &store.get_all()[number - 1],
        message: message.clone(),
    };
    output.emit(&response, &message)
}
