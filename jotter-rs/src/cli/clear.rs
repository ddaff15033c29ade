//! Clear command implementation.

use crate::cli::args::ClearArgs;
use crate::cli::output::{MessageResponse, Output};
use crate::error::{JotterError, Result};
use crate::store::NoteStore;
use log::info;

pub fn run(store: &mut NoteStore, args: &ClearArgs, output: &Output) -> Result<()> {
    let removed = store.count();
    if removed == 0 {
        let message = "No notes to delete.";
        return output.emit(&MessageResponse::new(message), message);
    }
    if !args.yes {
        return Err(JotterError::Other(format!(
            "Refusing to delete {} notes without --yes",
            removed
        )));
    }

    store.clear();
    info!("Cleared {} notes", removed);

    let message = format!("Deleted {} notes.", removed);
    output.emit(&MessageResponse::new(message.clone()), &message)
}
