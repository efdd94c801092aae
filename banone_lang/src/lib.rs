// Phonetic pun-compound engine for German words.
//
// Given two dictionary words, each an orthographic spelling plus a phonemic
// transcription, decides whether the second can be spliced into the first as
// a plausible portmanteau and produces the blended spelling ("Banane" +
// "Schwan" -> "Schwanane"). Used by `banone_riddle` to build joke riddles.
//
// Architecture (leaf to root):
// - `phoneme.rs`: Closed phoneme inventory, grapheme tables, tokenizer
// - `align.rs`: Greedy table-driven grapheme aligner producing `Sound`s
// - `types.rs`: `PartOfSpeech`, `Sound`, `WordMeta`, `LexEntry`
// - `word.rs`: `Word` (immutable, aligned) and `WordCursor` (per-attempt state)
// - `distance.rs`: Fixed phonetic distance table
// - `merge.rs`: The merge decision procedure
// - `error.rs`: `LangError` for alphabet violations and bad dictionary data
// - `lib.rs` (this file): `Lexicon` struct; loads and validates the JSON dictionary
//   and answers lookups
//
// The lexicon is loaded from `data/de_lexicon.json` via `Lexicon::from_json()`.
// Every entry is aligned and validated at load time, so a malformed entry
// fails the load instead of surfacing mid-batch. `default_lexicon()` embeds
// the default dictionary at compile time with `include_str!`.
//
// Words are immutable after construction; merging never mutates its inputs.

pub mod align;
pub mod distance;
pub mod error;
pub mod merge;
pub mod phoneme;
pub mod types;
pub mod word;

use std::collections::BTreeMap;
use std::path::Path;

// Re-export key types at crate root for convenience.
pub use error::LangError;
pub use merge::{Compound, Rejection, capitalize, merge, merge_detailed};
pub use phoneme::Phoneme;
pub use types::{LexEntry, PartOfSpeech, Sound, WordMeta};
pub use word::{Word, WordCursor};

/// The top-level JSON structure for the lexicon file.
#[derive(Debug, serde::Deserialize)]
struct LexiconFile {
    words: Vec<LexEntry>,
}

/// A loaded, validated dictionary.
///
/// Preserves entry order from the JSON file so batch output is reproducible.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: Vec<Word>,
    index: BTreeMap<String, usize>,
}

impl Lexicon {
    /// Parse and validate a lexicon from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LangError> {
        let file: LexiconFile = serde_json::from_str(json)?;
        Self::from_entries(file.words)
    }

    /// Read a lexicon file from disk.
    pub fn load(path: &Path) -> Result<Self, LangError> {
        let json = std::fs::read_to_string(path).map_err(|source| LangError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::from_json(&json)?;
        log::info!(
            "event=lexicon_loaded path={} words={}",
            path.display(),
            lexicon.len()
        );
        Ok(lexicon)
    }

    /// Build a lexicon from entries, aligning each one.
    ///
    /// Fails on the first entry that violates the phoneme alphabet or the
    /// stemming rules, and on duplicate spellings.
    pub fn from_entries(entries: impl IntoIterator<Item = LexEntry>) -> Result<Self, LangError> {
        let mut lexicon = Lexicon::default();
        for entry in entries {
            if lexicon.index.contains_key(&entry.orth) {
                return Err(LangError::DuplicateEntry(entry.orth));
            }
            let word = entry.to_word()?;
            log::trace!(
                "event=word_aligned orth={} sounds={}",
                word.orthography(),
                word.sounds().len()
            );
            lexicon.index.insert(entry.orth, lexicon.words.len());
            lexicon.words.push(word);
        }
        Ok(lexicon)
    }

    /// All words in the lexicon, in file order.
    pub fn all(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look up a word by its exact spelling.
    pub fn lookup(&self, orth: &str) -> Option<&Word> {
        self.index.get(orth).map(|&i| &self.words[i])
    }

    /// Filter words by part of speech.
    pub fn by_pos(&self, pos: PartOfSpeech) -> Vec<&Word> {
        self.words.iter().filter(|w| w.pos() == pos).collect()
    }

    /// The nouns, in file order. Only nouns can host a compound.
    pub fn nouns(&self) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(|w| w.pos() == PartOfSpeech::Noun)
    }
}

/// Load the default German lexicon embedded at compile time.
///
/// Uses `include_str!` to embed `data/de_lexicon.json`. Panics if the
/// embedded data is malformed (should never happen in a released build).
pub fn default_lexicon() -> Lexicon {
    let json = include_str!("../../data/de_lexicon.json");
    Lexicon::from_json(json).expect("embedded de_lexicon.json is malformed")
}
