// Pun-compound merging: splice the stem of a donor word into a host word.
//
// The donor (`extra`) is stripped of its inflectional ending and of the
// onset of its first syllable; what remains must match, sound by sound, the
// host (`base`) starting at the host's first full vowel. If it does, the
// compound is the donor's stem spelling followed by whatever the host's
// spelling has left after the matched sounds:
//
//   base "Banane" /ba-'na:-n@/, extra "Schwan" /Sva:n/
//   host after onset:  a  n  a: n @
//   donor after onset: a: n
//   compound: "Schwan" + "ane" = "Schwanane"
//
// Most pairs do not merge. A rejection is an ordinary `Rejection` value
// (or `None` from `merge`), never an error.
//
// Both words are borrowed immutably; the traversal state lives in two
// `WordCursor`s local to the call, so concurrent merges over a shared
// lexicon are safe and repeated calls are deterministic.

use std::fmt;

use crate::distance::{LENGTH_VARIANT, SIMILAR_CONSONANT, distance};
use crate::phoneme::Phoneme;
use crate::word::{Word, WordCursor};

/// A successful merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compound {
    /// The capitalized compound spelling.
    pub text: String,
    /// The donor's stem spelling that opens the compound.
    pub stem: String,
    /// The host's unconsumed spelling that closes the compound.
    pub tail: String,
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Why a pair of words did not merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The host has fewer than two syllables.
    BaseTooShort { syllables: usize },
    /// The host has two syllables, the second a bare schwa ending ("Fahne").
    BaseSchwaDisyllable,
    /// The donor stem has more syllables than the host.
    DonorTooLong { donor: usize, base: usize },
    /// The donor stem has no full vowel to anchor the match.
    NoFullVowel,
    /// Two aligned sounds are too far apart.
    Mismatch {
        base: Phoneme,
        extra: Phoneme,
        distance: u32,
    },
    /// The host ran out of sounds before the donor stem was matched.
    HostExhausted,
    /// The donor stem matched the whole rest of the host, leaving nothing to
    /// append. The result would be the bare donor stem, which is not a pun.
    NoTail,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::BaseTooShort { syllables } => {
                write!(f, "base has only {syllables} syllable(s)")
            }
            Rejection::BaseSchwaDisyllable => {
                write!(f, "base is two syllables ending in schwa")
            }
            Rejection::DonorTooLong { donor, base } => {
                write!(f, "donor stem has {donor} syllables, base only {base}")
            }
            Rejection::NoFullVowel => write!(f, "donor stem has no full vowel"),
            Rejection::Mismatch {
                base,
                extra,
                distance,
            } => write!(f, "/{base}/ vs /{extra}/ at distance {distance}"),
            Rejection::HostExhausted => write!(f, "base is shorter than the donor stem"),
            Rejection::NoTail => write!(f, "donor stem consumes the whole base"),
        }
    }
}

/// Merge `extra` into `base`, returning the compound spelling.
pub fn merge(base: &Word, extra: &Word) -> Option<String> {
    match merge_detailed(base, extra) {
        Ok(compound) => Some(compound.text),
        Err(rejection) => {
            log::trace!(
                "event=merge_rejected base={} extra={} reason=\"{}\"",
                base.orthography(),
                extra.orthography(),
                rejection
            );
            None
        }
    }
}

/// Merge `extra` into `base`, reporting which rule rejected the pair.
pub fn merge_detailed(base: &Word, extra: &Word) -> Result<Compound, Rejection> {
    let mut host = WordCursor::new(base, false);
    let mut donor = WordCursor::new(extra, true);

    let base_syllables = host.syllable_count();
    if base_syllables < 2 {
        return Err(Rejection::BaseTooShort {
            syllables: base_syllables,
        });
    }
    if base_syllables == 2 && base.ends_with_schwa() {
        return Err(Rejection::BaseSchwaDisyllable);
    }
    let donor_syllables = donor.syllable_count();
    if donor_syllables > base_syllables {
        return Err(Rejection::DonorTooLong {
            donor: donor_syllables,
            base: base_syllables,
        });
    }

    host.advance_to_first_full_vowel();
    donor.advance_to_first_full_vowel();
    if donor.is_exhausted() {
        return Err(Rejection::NoFullVowel);
    }

    // Longer hosts hide a looser consonant substitution better.
    let max_distance = if base_syllables > 2 {
        SIMILAR_CONSONANT
    } else {
        LENGTH_VARIANT
    };

    while let Some(extra_sound) = donor.current() {
        let Some(base_sound) = host.current() else {
            return Err(Rejection::HostExhausted);
        };
        let d = distance(base_sound, extra_sound);
        if d > max_distance {
            return Err(Rejection::Mismatch {
                base: base_sound.phone,
                extra: extra_sound.phone,
                distance: d,
            });
        }
        host.advance();
        donor.advance();
    }

    let Some(first_unconsumed) = host.current() else {
        return Err(Rejection::NoTail);
    };
    let stem = extra.stem_orthography();
    let tail = base.orthography_from(first_unconsumed.start_char);
    let text = capitalize(&format!("{stem}{tail}"));

    Ok(Compound { text, stem, tail })
}

/// Capitalize the first character of a string.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => {
            let upper: String = c.to_uppercase().collect();
            format!("{}{}", upper, chars.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WordMeta;

    fn noun(orth: &str, phon: &str) -> Word {
        Word::new(orth, phon, WordMeta::noun()).unwrap()
    }

    fn verb(orth: &str, phon: &str) -> Word {
        Word::new(orth, phon, WordMeta::verb()).unwrap()
    }

    fn banane() -> Word {
        noun("Banane", "ba-'na:-n@")
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("spannane"), "Spannane");
        assert_eq!(capitalize("über"), "Über");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("A"), "A");
    }

    #[test]
    fn test_merge_noun_into_trisyllable() {
        let compound = merge_detailed(&banane(), &noun("Schwan", "Sva:n")).unwrap();
        assert_eq!(compound.text, "Schwanane");
        assert_eq!(compound.stem, "Schwan");
        assert_eq!(compound.tail, "ane");
    }

    #[test]
    fn test_merge_strips_noun_schwa() {
        assert_eq!(merge(&banane(), &noun("Fahne", "fa:-n@")).as_deref(), Some("Fahnane"));
    }

    #[test]
    fn test_merge_strips_verb_ending() {
        assert_eq!(merge(&banane(), &verb("spannen", "Spa-n@n")).as_deref(), Some("Spannane"));
    }

    #[test]
    fn test_merge_similar_consonant_needs_long_base() {
        // /m/ for /n/ is tolerated by a three-syllable host...
        assert_eq!(merge(&banane(), &noun("Schwamm", "Svam")).as_deref(), Some("Schwammane"));
        // ...but not by a two-syllable one.
        let kamin = noun("Kamin", "ka-'mi:n");
        assert_eq!(
            merge_detailed(&kamin, &noun("Schwan", "Sva:n")),
            Err(Rejection::Mismatch {
                base: Phoneme::M,
                extra: Phoneme::N,
                distance: SIMILAR_CONSONANT,
            })
        );
    }

    #[test]
    fn test_merge_stressed_short_vowel_blocks_long_donor() {
        let unstressed = noun("Mantel", "man-t@l");
        let stressed = noun("Mantel", "'man-t@l");
        let schwan = noun("Schwan", "Sva:n");

        assert_eq!(merge(&unstressed, &schwan).as_deref(), Some("Schwantel"));
        assert!(matches!(
            merge_detailed(&stressed, &schwan),
            Err(Rejection::Mismatch { .. })
        ));
    }

    #[test]
    fn test_reject_monosyllabic_base() {
        assert_eq!(
            merge_detailed(&noun("Schwan", "Sva:n"), &banane()),
            Err(Rejection::BaseTooShort { syllables: 1 })
        );
    }

    #[test]
    fn test_reject_schwa_disyllable_base() {
        let fahne = noun("Fahne", "fa:-n@");
        for extra in [noun("Schwan", "Sva:n"), verb("spannen", "Spa-n@n"), banane()] {
            assert_eq!(merge_detailed(&fahne, &extra), Err(Rejection::BaseSchwaDisyllable));
        }
    }

    #[test]
    fn test_reject_donor_longer_than_base() {
        let kamin = noun("Kamin", "ka-'mi:n");
        let ananas = noun("Ananas", "a-na-nas");
        assert_eq!(
            merge_detailed(&kamin, &ananas),
            Err(Rejection::DonorTooLong { donor: 3, base: 2 })
        );
    }

    #[test]
    fn test_reject_pudel_nudelauflauf() {
        let pudel = noun("Pudel", "'pu:-d@l");
        let auflauf = noun("Nudelauflauf", "'nu:-d@l-aUf-laUf");
        assert!(matches!(
            merge_detailed(&pudel, &auflauf),
            Err(Rejection::DonorTooLong { .. })
        ));
    }

    #[test]
    fn test_reject_host_exhausted() {
        let kanu = noun("Kanu", "ka-nu:");
        let kanus = noun("Kanus", "ka-nu:s");
        assert_eq!(merge_detailed(&kanu, &kanus), Err(Rejection::HostExhausted));
    }

    #[test]
    fn test_merge_keeps_host_tail_after_long_vowel() {
        let lama = noun("Lama", "la:-ma");
        let dame = noun("Dame", "da:-m@");
        assert_eq!(merge(&lama, &dame).as_deref(), Some("Dama"));
    }

    #[test]
    fn test_reject_no_tail() {
        let kino = noun("Kino", "ki:-no:");
        let tino = noun("Tino", "ti:-no:");
        assert_eq!(merge_detailed(&kino, &tino), Err(Rejection::NoTail));
    }

    #[test]
    fn test_reject_donor_without_full_vowel() {
        let hmm = Word::new("hm", "hm", WordMeta::default()).unwrap();
        assert_eq!(merge_detailed(&banane(), &hmm), Err(Rejection::NoFullVowel));
    }

    #[test]
    fn test_merge_is_repeatable() {
        let base = banane();
        let extra = noun("Schwan", "Sva:n");
        let first = merge(&base, &extra);
        for _ in 0..3 {
            assert_eq!(merge(&base, &extra), first);
        }
        // A rejected attempt in between leaves nothing behind.
        assert_eq!(merge(&extra, &base), None);
        assert_eq!(merge(&base, &extra), first);
    }

    #[test]
    fn test_rejection_display() {
        let r = Rejection::Mismatch {
            base: Phoneme::M,
            extra: Phoneme::N,
            distance: 2,
        };
        assert_eq!(r.to_string(), "/m/ vs /n/ at distance 2");
        assert_eq!(
            Rejection::BaseTooShort { syllables: 1 }.to_string(),
            "base has only 1 syllable(s)"
        );
    }
}
