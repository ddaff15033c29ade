//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jotter")]
#[command(author, version, about = "Keep short text notes in a JSON file", long_about = None)]
pub struct Cli {
    /// Notes file to use (overrides config)
    #[arg(long, short = 'f', global = true)]
    pub file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, conflicts_with = "yaml")]
    pub json: bool,

    /// Output as YAML
    #[arg(long, global = true, conflicts_with = "json")]
    pub yaml: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (can be repeated)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Without a subcommand the interactive menu starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.yaml {
            OutputFormat::Yaml
        } else {
            OutputFormat::Text
        }
    }

    /// Log level implied by `-v` flags, if any were given.
    pub fn verbosity_level(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive menu
    Shell,

    /// Add a note
    Add(AddArgs),

    /// Show all notes
    List,

    /// Delete a note by its number
    Delete(DeleteArgs),

    /// Find notes containing a keyword
    Search(SearchArgs),

    /// Delete every note
    Clear(ClearArgs),

    /// Print the number of notes
    Count,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Note text
    pub text: String,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Note number as shown by `list`
    #[arg(allow_hyphen_values = true)]
    pub number: String,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Keyword to look for (case-insensitive)
    pub keyword: String,
}

#[derive(Args, Debug)]
pub struct ClearArgs {
    /// Confirm deleting every note
    #[arg(long)]
    pub yes: bool,
}
