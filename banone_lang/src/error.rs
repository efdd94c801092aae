// Error type for dictionary data that violates the phoneme alphabet or the
// part-of-speech stemming rules.
//
// A failed merge is not an error: `merge.rs` reports it as `None` or as a
// `Rejection` value. Everything here is raised while building `Word`s or
// loading a `Lexicon`, so malformed data is caught before any merge runs.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building words or loading a lexicon.
#[derive(Debug, Error)]
pub enum LangError {
    /// A transcription contains a character that starts no inventory symbol.
    #[error("unknown phoneme {symbol:?} at position {position} in /{transcription}/")]
    UnknownPhoneme {
        transcription: String,
        position: usize,
        symbol: char,
    },

    /// A verb whose transcription does not end in /n/ (-en or -n).
    #[error("{orthography:?} /{transcription}/ is not a verb: no final -en or -n")]
    VerbStem {
        orthography: String,
        transcription: String,
    },

    /// Not a single sound of the transcription could be matched to the spelling.
    #[error("no sound of /{transcription}/ aligns with {orthography:?}")]
    Unaligned {
        orthography: String,
        transcription: String,
    },

    /// Two dictionary entries share the same orthography.
    #[error("duplicate dictionary entry {0:?}")]
    DuplicateEntry(String),

    #[error("malformed lexicon JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read lexicon {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
