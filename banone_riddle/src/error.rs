// Error type for the riddle front end: configuration, dictionary loading,
// logger setup, and word lookups from the command line.

use std::path::PathBuf;

use banone_lang::LangError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RiddleError {
    #[error(transparent)]
    Lang(#[from] LangError),

    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("word {0:?} is not in the dictionary")]
    UnknownWord(String),

    #[error("logging setup failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, RiddleError>;
