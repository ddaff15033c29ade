//! Error types and exit codes for Jotter.

use thiserror::Error;

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOTE_NOT_FOUND: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
}

/// Main error type for Jotter operations.
#[derive(Error, Debug)]
pub enum JotterError {
    #[error("Note text cannot be empty")]
    EmptyText,

    #[error("Search keyword cannot be empty")]
    EmptyKeyword,

    #[error("Not a valid note number: '{0}'")]
    InvalidNumber(String),

    #[error("Note #{0} not found")]
    NoteNotFound(i64),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl JotterError {
    /// Returns the CLI exit code for this error.
    pub fn exit_kind(&self) -> ExitCode {
        match self {
            JotterError::NoteNotFound(_) => ExitCode::NoteNotFound,
            JotterError::EmptyText
            | JotterError::EmptyKeyword
            | JotterError::InvalidNumber(_) => ExitCode::InvalidInput,
            _ => ExitCode::GeneralError,
        }
    }

    /// True for errors caused by what the user typed, as opposed to
    /// failures of the program or its environment.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            JotterError::EmptyText
                | JotterError::EmptyKeyword
                | JotterError::InvalidNumber(_)
                | JotterError::NoteNotFound(_)
        )
    }
}

/// Result type alias for Jotter operations.
pub type Result<T> = std::result::Result<T, JotterError>;

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success,
    GeneralError,
    NoteNotFound,
    InvalidInput,
}

impl ExitCode {
    /// Convert to exit code integer.
    pub fn code(self) -> i32 {
        match self {
            ExitCode::Success => exit_code::SUCCESS,
            ExitCode::GeneralError => exit_code::GENERAL_ERROR,
            ExitCode::NoteNotFound => exit_code::NOTE_NOT_FOUND,
            ExitCode::InvalidInput => exit_code::INVALID_INPUT,
        }
    }
}
