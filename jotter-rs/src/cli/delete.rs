//! Delete command implementation.

use crate::cli::args::DeleteArgs;
use crate::cli::output::{MessageResponse, Output};
use crate::cli::render;
use crate::error::Result;
use crate::ops;
use crate::store::NoteStore;

pub fn run(store: &mut NoteStore, args: &DeleteArgs, output: &Output) -> Result<()> {
    let number = ops::parse_number(&args.number)?;
    ops::delete_by_number(store, number)?;

    let message = render::deleted(number);
    let response = MessageResponse::new(message.clone()).with_number(number);
    output.emit(&response, &message)
}
