//! CLI command implementations.

pub mod args;
pub mod output;
pub mod render;
pub mod shell;

pub mod add;
pub mod clear;
pub mod delete;
pub mod list;
pub mod search;

pub use args::{Cli, Commands};
pub use output::Output;
pub use shell::Shell;
