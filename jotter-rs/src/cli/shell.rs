//! Interactive menu loop.
//!
//! The shell reads choices line by line from any [`BufRead`] and writes to
//! any [`Write`], so it runs the same against a terminal or a script.
//! End of input at the menu exits like choosing `0`; end of input inside
//! an action cancels that action.

use crate::cli::render;
use crate::error::{JotterError, Result};
use crate::ops;
use crate::store::NoteStore;
use log::error;
use std::io::{BufRead, Write};

pub const FAREWELL: &str = "Goodbye!";
pub const CANCELLED: &str = "Operation cancelled.";

const MENU: &str = "\
1. Add note
2. Show all notes
3. Delete note
4. Search notes
0. Exit";

/// What the menu loop should do after handling a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu-driven front end over a [`NoteStore`].
pub struct Shell<'s, R, W> {
    store: &'s mut NoteStore,
    input: R,
    output: W,
}

impl<'s, R: BufRead, W: Write> Shell<'s, R, W> {
    pub fn new(store: &'s mut NoteStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Run until the user exits or input ends.
    ///
    /// Only failures to talk to the terminal itself are returned; errors
    /// inside a menu action are reported and the loop goes on.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "\nWelcome to Jotter!")?;
        writeln!(self.output, "Notes loaded: {}", self.store.count())?;

        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("\nChoose an action (0-4): ")? else {
                writeln!(self.output, "\n{}", FAREWELL)?;
                return Ok(());
            };

            match self.dispatch(&choice) {
                Ok(Flow::Exit) => {
                    writeln!(self.output, "\n{}\n", FAREWELL)?;
                    return Ok(());
                }
                Ok(Flow::Continue) => {}
                Err(e) if e.is_validation() => {
                    writeln!(self.output, "\n✗ {}", e)?;
                }
                Err(e) => {
                    error!("Menu action '{}' failed: {}", choice, e);
                    writeln!(self.output, "\n⚠ An error occurred: {}", e)?;
                }
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        let rule = "=".repeat(60);
        writeln!(self.output, "\n{}\nJOTTER\n{}\n{}\n{}", rule, rule, MENU, rule)?;
        Ok(())
    }

    fn dispatch(&mut self, choice: &str) -> Result<Flow> {
        match choice {
            "1" => self.add()?,
            "2" => self.show_all()?,
            "3" => self.delete()?,
            "4" => self.search()?,
            "0" => return Ok(Flow::Exit),
            _ => writeln!(
                self.output,
                "\n✗ Invalid choice! Please choose from 0 to 4."
            )?,
        }
        Ok(Flow::Continue)
    }

    fn add(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Add note ---")?;
        let Some(text) = self.prompt("Enter note text: ")? else {
            return self.cancelled();
        };
        let number = ops::add_note(self.store, &text)?;
        writeln!(self.output, "\n✓ {}", render::added(number))?;
        Ok(())
    }

    fn show_all(&mut self) -> Result<()> {
        let rendered = render::listing(&ops::list_all(self.store));
        writeln!(self.output, "\n{}", rendered)?;
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        self.show_all()?;
        if self.store.is_empty() {
            return Ok(());
        }

        let Some(input) = self.prompt("\nEnter the number of the note to delete: ")? else {
            return self.cancelled();
        };
        let number = ops::parse_number(&input)?;
        ops::delete_by_number(self.store, number)?;
        writeln!(self.output, "\n✓ {}", render::deleted(number))?;
        Ok(())
    }

    fn search(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Search notes ---")?;
        let Some(input) = self.prompt("Enter a keyword: ")? else {
            return self.cancelled();
        };
        let keyword = ops::validate_keyword(&input)?;
        let hits = ops::search(self.store, keyword);
        writeln!(self.output, "\n{}", render::search_results(&hits))?;
        Ok(())
    }

    fn cancelled(&mut self) -> Result<()> {
        writeln!(self.output, "\n\n✗ {}", CANCELLED)?;
        Ok(())
    }

    /// Print `label` and read one trimmed line. `None` means end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(JotterError::from)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
