// Core data types: part of speech, aligned sounds, and dictionary records.
//
// The type hierarchy is:
// - `PartOfSpeech`: noun, verb, or anything else; selects the stemming rule
// - `Sound`: one aligned phoneme with its spelling offset, syllable, stress
// - `WordMeta`: grammatical and descriptive metadata carried by a `Word`
// - `LexEntry`: a JSON-loadable dictionary record with owned Strings
//
// `Word` itself lives in `word.rs`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LangError;
use crate::phoneme::Phoneme;
use crate::word::Word;

/// Part of speech of a dictionary entry.
///
/// Only nouns and verbs have a stemming rule. Every other tag found in a
/// dictionary (adjectives, adverbs, ...) deserializes to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    #[serde(alias = "NN")]
    Noun,
    #[serde(alias = "VB")]
    Verb,
    #[default]
    #[serde(other)]
    Other,
}

impl PartOfSpeech {
    pub fn as_str(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Other => "other",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A phoneme aligned to a position in a word's spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sound {
    pub phone: Phoneme,
    /// Character offset into the orthography where this sound's spelling starts.
    pub start_char: usize,
    /// 1-based syllable index.
    pub syllable: usize,
    /// Whether this is the stressed vowel of the word.
    pub stressed: bool,
}

impl Sound {
    /// An unstressed sound in the first syllable. Handy for tests and tables.
    pub fn new(phone: Phoneme, start_char: usize) -> Self {
        Sound {
            phone,
            start_char,
            syllable: 1,
            stressed: false,
        }
    }

    pub fn is_full_vowel(&self) -> bool {
        self.phone.is_full_vowel()
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.stressed {
            write!(f, "'{}", self.phone)
        } else {
            write!(f, "{}", self.phone)
        }
    }
}

/// Grammatical and descriptive metadata of a word.
///
/// The descriptive tags feed riddle questions downstream; the merge
/// algorithm only reads `pos`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordMeta {
    pub pos: PartOfSpeech,
    /// Indefinite article used in answers ("ein", "eine").
    pub determiner: Option<String>,
    pub color: Option<String>,
    pub property: Option<String>,
    pub action: Option<String>,
}

impl WordMeta {
    pub fn noun() -> Self {
        WordMeta {
            pos: PartOfSpeech::Noun,
            ..Default::default()
        }
    }

    pub fn verb() -> Self {
        WordMeta {
            pos: PartOfSpeech::Verb,
            ..Default::default()
        }
    }
}

/// A JSON-loadable dictionary entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexEntry {
    /// Spelling, capitalized as in running text.
    pub orth: String,
    /// Transcription. Defaults to the lower-cased spelling when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phon: Option<String>,
    #[serde(default)]
    pub pos: PartOfSpeech,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub determiner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl LexEntry {
    /// The transcription, falling back to the lower-cased spelling.
    pub fn transcription(&self) -> String {
        self.phon.clone().unwrap_or_else(|| self.orth.to_lowercase())
    }

    pub fn meta(&self) -> WordMeta {
        WordMeta {
            pos: self.pos,
            determiner: self.determiner.clone(),
            color: self.color.clone(),
            property: self.property.clone(),
            action: self.action.clone(),
        }
    }

    /// Align and validate this entry.
    pub fn to_word(&self) -> Result<Word, LangError> {
        Word::new(self.orth.clone(), self.transcription(), self.meta())
    }
}
