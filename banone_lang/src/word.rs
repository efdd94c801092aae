// `Word`: an aligned dictionary entry, and `WordCursor`, the per-attempt
// traversal state used by the merge algorithm.
//
// A `Word` is built once per dictionary entry and never mutated afterwards,
// so a lexicon can be shared freely across threads. Everything a merge
// attempt changes (the position in the sound sequence and whether the
// inflectional ending is ignored) lives in a `WordCursor` that borrows the
// word for the duration of one attempt and is dropped with it.
//
// Stemming: with `ignore_trailing_unstressed` set, a noun drops a final
// schwa ("Fahne" -> "Fahn") and a verb drops a final /n/ plus a schwa before
// it ("spannen" -> "spann", "zappeln" -> "zappel"). Dropping a schwa also
// removes that syllable from the count.

use crate::align::align;
use crate::error::LangError;
use crate::phoneme::{Phoneme, SYLLABLE_BOUNDARY, tokenize};
use crate::types::{PartOfSpeech, Sound, WordMeta};

/// A dictionary word with its aligned sound sequence.
#[derive(Debug, Clone)]
pub struct Word {
    orthography: String,
    transcription: String,
    meta: WordMeta,
    sounds: Vec<Sound>,
    syllables: Vec<String>,
}

/// How much of the ending a stem drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Ending {
    sounds: usize,
    syllable_dropped: bool,
}

impl Word {
    /// Tokenize, align, and validate a word.
    ///
    /// Fails on symbols outside the phoneme inventory, on spellings that
    /// align to no sound at all, and on verbs that do not end in /n/.
    pub fn new(
        orthography: impl Into<String>,
        transcription: impl Into<String>,
        meta: WordMeta,
    ) -> Result<Word, LangError> {
        let orthography = orthography.into();
        let transcription = transcription.into();

        let tokens = tokenize(&transcription)?;
        let sounds = align(&orthography, &tokens);
        if sounds.is_empty() {
            return Err(LangError::Unaligned {
                orthography,
                transcription,
            });
        }
        if meta.pos == PartOfSpeech::Verb && sounds.last().map(|s| s.phone) != Some(Phoneme::N) {
            return Err(LangError::VerbStem {
                orthography,
                transcription,
            });
        }

        let syllables = transcription
            .split(SYLLABLE_BOUNDARY)
            .map(str::to_string)
            .collect();

        Ok(Word {
            orthography,
            transcription,
            meta,
            sounds,
            syllables,
        })
    }

    pub fn orthography(&self) -> &str {
        &self.orthography
    }

    pub fn transcription(&self) -> &str {
        &self.transcription
    }

    pub fn meta(&self) -> &WordMeta {
        &self.meta
    }

    pub fn pos(&self) -> PartOfSpeech {
        self.meta.pos
    }

    pub fn sounds(&self) -> &[Sound] {
        &self.sounds
    }

    /// Transcription split at syllable boundaries, markers kept.
    pub fn syllables(&self) -> &[String] {
        &self.syllables
    }

    fn ending(&self) -> Ending {
        let phones: Vec<Phoneme> = self.sounds.iter().rev().take(2).map(|s| s.phone).collect();
        match self.meta.pos {
            PartOfSpeech::Noun => match phones.as_slice() {
                [Phoneme::Schwa, ..] => Ending {
                    sounds: 1,
                    syllable_dropped: true,
                },
                _ => Ending::default(),
            },
            PartOfSpeech::Verb => match phones.as_slice() {
                [Phoneme::N, Phoneme::Schwa] => Ending {
                    sounds: 2,
                    syllable_dropped: true,
                },
                [Phoneme::N, ..] => Ending {
                    sounds: 1,
                    syllable_dropped: false,
                },
                _ => Ending::default(),
            },
            PartOfSpeech::Other => Ending::default(),
        }
    }

    /// Number of sounds, minus the inflectional ending when it is ignored.
    pub fn effective_length(&self, ignore_trailing_unstressed: bool) -> usize {
        if ignore_trailing_unstressed {
            self.sounds.len() - self.ending().sounds
        } else {
            self.sounds.len()
        }
    }

    /// Whether ignoring the ending removes a whole syllable.
    pub fn trailing_ignored(&self, ignore_trailing_unstressed: bool) -> bool {
        ignore_trailing_unstressed && self.ending().syllable_dropped
    }

    /// Number of syllables, minus one if the trailing syllable is ignored.
    pub fn syllable_count(&self, ignore_trailing_unstressed: bool) -> usize {
        let count = self.syllables.len();
        if self.trailing_ignored(ignore_trailing_unstressed) {
            count.saturating_sub(1)
        } else {
            count
        }
    }

    pub fn ends_with_schwa(&self) -> bool {
        self.sounds.last().map(|s| s.phone) == Some(Phoneme::Schwa)
    }

    /// Index of the first full vowel, i.e. the length of the first onset.
    pub fn first_full_vowel(&self) -> Option<usize> {
        self.sounds.iter().position(Sound::is_full_vowel)
    }

    /// Spelling from character `start` to the end.
    pub fn orthography_from(&self, start: usize) -> String {
        self.orthography.chars().skip(start).collect()
    }

    /// The spelling of the stem: the orthography cut where the ignored
    /// ending begins ("Fahne" -> "Fahn", "spannen" -> "spann").
    pub fn stem_orthography(&self) -> String {
        match self.sounds.get(self.effective_length(true)) {
            Some(first_dropped) => self
                .orthography
                .chars()
                .take(first_dropped.start_char)
                .collect(),
            None => self.orthography.clone(),
        }
    }
}

/// Traversal state over one word for the duration of a merge attempt.
///
/// Invariant: `index` stays within `[0, effective_length()]`.
#[derive(Debug, Clone)]
pub struct WordCursor<'a> {
    word: &'a Word,
    index: usize,
    ignore_trailing_unstressed: bool,
}

impl<'a> WordCursor<'a> {
    pub fn new(word: &'a Word, ignore_trailing_unstressed: bool) -> Self {
        WordCursor {
            word,
            index: 0,
            ignore_trailing_unstressed,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn ignores_trailing_unstressed(&self) -> bool {
        self.ignore_trailing_unstressed
    }

    pub fn effective_length(&self) -> usize {
        self.word.effective_length(self.ignore_trailing_unstressed)
    }

    pub fn syllable_count(&self) -> usize {
        self.word.syllable_count(self.ignore_trailing_unstressed)
    }

    /// Skip the onset of the first syllable.
    ///
    /// Moves to the first full vowel, or to the end if the (effective) word
    /// has none.
    pub fn advance_to_first_full_vowel(&mut self) {
        let end = self.effective_length();
        self.index = self.word.first_full_vowel().map_or(end, |i| i.min(end));
    }

    /// The sound under the cursor, if the cursor is not at the end.
    pub fn current(&self) -> Option<&'a Sound> {
        if self.is_exhausted() {
            None
        } else {
            self.word.sounds.get(self.index)
        }
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1).min(self.effective_length());
    }

    pub fn is_exhausted(&self) -> bool {
        self.index >= self.effective_length()
    }

    /// Rewind to the first sound so the cursor can be reused.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noun(orth: &str, phon: &str) -> Word {
        Word::new(orth, phon, WordMeta::noun()).unwrap()
    }

    fn verb(orth: &str, phon: &str) -> Word {
        Word::new(orth, phon, WordMeta::verb()).unwrap()
    }

    fn other(orth: &str, phon: &str) -> Word {
        Word::new(orth, phon, WordMeta::default()).unwrap()
    }

    #[test]
    fn test_new_keeps_metadata() {
        let meta = WordMeta {
            pos: PartOfSpeech::Noun,
            determiner: Some("eine".to_string()),
            color: Some("orange".to_string()),
            property: Some("rund".to_string()),
            action: None,
        };
        let word = Word::new("Apfelsine", "ap-f@l-'zi:-n@", meta.clone()).unwrap();
        assert_eq!(word.orthography(), "Apfelsine");
        assert_eq!(word.transcription(), "ap-f@l-'zi:-n@");
        assert_eq!(word.meta(), &meta);
        assert_eq!(word.syllables(), ["ap", "f@l", "'zi:", "n@"]);
    }

    #[test]
    fn test_new_rejects_unknown_symbol() {
        // Lower-case r is a letter, the uvular r is written `R`.
        let err = Word::new("rot", "ro:t", WordMeta::noun()).unwrap_err();
        assert!(
            matches!(err, LangError::UnknownPhoneme { position: 0, symbol: 'r', .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn test_new_rejects_verb_without_n() {
        let err = Word::new("keinverb", "kaInvERp", WordMeta::verb()).unwrap_err();
        assert!(matches!(err, LangError::VerbStem { .. }), "got {err:?}");
    }

    #[test]
    fn test_new_rejects_unaligned_word() {
        let err = Word::new("xyz", "ma:", WordMeta::noun()).unwrap_err();
        assert!(matches!(err, LangError::Unaligned { .. }), "got {err:?}");
    }

    #[test]
    fn test_noun_stem() {
        let fahne = noun("Fahne", "fa:-n@");
        assert_eq!(fahne.effective_length(false), 4);
        assert_eq!(fahne.effective_length(true), 3);
        assert_eq!(fahne.syllable_count(false), 2);
        assert_eq!(fahne.syllable_count(true), 1);
        assert_eq!(fahne.stem_orthography(), "Fahn");
    }

    #[test]
    fn test_noun_without_schwa_keeps_everything() {
        let haus = noun("Haus", "haUs");
        assert_eq!(haus.effective_length(true), 3);
        assert_eq!(haus.syllable_count(true), 1);
        assert_eq!(haus.stem_orthography(), "Haus");

        let magie = noun("Magie", "ma-'gi:");
        assert_eq!(magie.stem_orthography(), "Magie");
    }

    #[test]
    fn test_verb_stem_en() {
        let bauen = verb("bauen", "baU-@n");
        assert_eq!(bauen.effective_length(true), 2);
        assert_eq!(bauen.syllable_count(true), 1);
        assert_eq!(bauen.stem_orthography(), "bau");

        let spannen = verb("spannen", "Spa-n@n");
        assert_eq!(spannen.effective_length(true), 4);
        assert_eq!(spannen.stem_orthography(), "spann");
    }

    #[test]
    fn test_verb_stem_n() {
        let zappeln = verb("zappeln", "tsa-p@ln");
        assert_eq!(zappeln.effective_length(true), 5);
        assert_eq!(zappeln.syllable_count(true), 2);
        assert_eq!(zappeln.stem_orthography(), "zappel");
    }

    #[test]
    fn test_other_stem_is_whole_word() {
        let toll = other("toll", "tOl");
        assert_eq!(toll.effective_length(true), 3);
        assert_eq!(toll.stem_orthography(), "toll");
    }

    #[test]
    fn test_first_full_vowel() {
        assert_eq!(other("Ananas", "a-na-nas").first_full_vowel(), Some(0));
        assert_eq!(noun("Banane", "ba-'na:-n@").first_full_vowel(), Some(1));
        assert_eq!(noun("blau", "blaU").first_full_vowel(), Some(2));
        assert_eq!(noun("b", "b").first_full_vowel(), None);
    }

    #[test]
    fn test_cursor_advance_to_first_full_vowel() {
        let banane = noun("Banane", "ba-'na:-n@");
        let mut cursor = WordCursor::new(&banane, false);
        cursor.advance_to_first_full_vowel();
        assert_eq!(cursor.index(), 1);
        assert_eq!(cursor.current().map(|s| s.phone), Some(Phoneme::A));

        let b = noun("b", "b");
        let mut cursor = WordCursor::new(&b, false);
        cursor.advance_to_first_full_vowel();
        assert_eq!(cursor.index(), 1);
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn test_cursor_stops_at_effective_length() {
        let fahne = noun("Fahne", "fa:-n@");
        let mut cursor = WordCursor::new(&fahne, true);
        assert_eq!(cursor.effective_length(), 3);
        for _ in 0..10 {
            cursor.advance();
        }
        assert_eq!(cursor.index(), 3);
        assert!(cursor.is_exhausted());
        // The schwa is beyond the effective end and never surfaces.
        assert_eq!(cursor.current(), None);

        cursor.reset();
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.current().map(|s| s.phone), Some(Phoneme::F));
    }

    #[test]
    fn test_cursor_syllable_count_follows_flag() {
        let fahne = noun("Fahne", "fa:-n@");
        assert_eq!(WordCursor::new(&fahne, false).syllable_count(), 2);
        assert_eq!(WordCursor::new(&fahne, true).syllable_count(), 1);
    }

    #[test]
    fn test_cursor_reports_its_flag() {
        let spannen = verb("spannen", "Spa-n@n");
        let host = WordCursor::new(&spannen, false);
        let donor = WordCursor::new(&spannen, true);
        assert!(!host.ignores_trailing_unstressed());
        assert!(donor.ignores_trailing_unstressed());
        assert_eq!(host.effective_length(), 6);
        assert_eq!(donor.effective_length(), 4);
    }

    #[test]
    fn test_orthography_from_counts_chars() {
        let word = noun("Möhre", "'m2:-R@");
        assert_eq!(word.orthography_from(2), "hre");
    }
}
