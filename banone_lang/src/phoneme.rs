// German phoneme inventory, grapheme tables, and transcription tokenizer.
//
// The inventory is closed: every symbol a dictionary transcription may use
// appears in `PHONEME_TABLE`, together with the ordered list of spellings the
// aligner tries for it. Transcriptions use a SAMPA-like ASCII notation
// (`a:` long a, `@` schwa, `6` vocalic r, `S` for "sch", `C` for the ich-laut)
// plus two markers that are not sounds: `-` separates syllables and `'`
// precedes the stressed syllable.
//
// `PHONEME_TABLE` is indexed by `Phoneme as usize`, so its order must match
// the enum declaration order. A test enforces this.
//
// Consumed by `align.rs` (grapheme matching), `distance.rs` (long/short vowel
// pairs), and `word.rs` (full-vowel and schwa queries).

use std::fmt;

use crate::error::LangError;

/// Marker separating two syllables in a transcription.
pub const SYLLABLE_BOUNDARY: char = '-';

/// Marker placed before the stressed syllable in a transcription.
pub const STRESS_MARK: char = '\'';

/// A phoneme from the fixed German inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phoneme {
    // Affricates
    Pf,
    Ts,
    Tsch,
    Dsch,
    // Plosives
    P,
    B,
    T,
    D,
    K,
    G,
    // Fricatives
    F,
    V,
    S,
    Z,
    Sch,
    Zh,
    Ich,
    J,
    Ach,
    H,
    // Sonorants
    M,
    N,
    Ng,
    L,
    R,
    // Diphthongs
    Ai,
    Au,
    Oy,
    // Vowels that have a long counterpart
    I,
    E,
    Ae,
    A,
    O,
    U,
    Y,
    Oe,
    ILong,
    ELong,
    AeLong,
    ALong,
    OLong,
    ULong,
    YLong,
    OeLong,
    // Vowels that are always short
    ILax,
    OLax,
    ULax,
    YLax,
    OeLax,
    // Reduced vowels
    Schwa,
    VocalicR,
}

/// Broad phonetic class of a phoneme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhonemeClass {
    Affricate,
    Plosive,
    Fricative,
    Sonorant,
    Diphthong,
    /// Full (non-reduced) monophthong.
    Vowel,
    /// Schwa and vocalic r.
    Reduced,
}

/// One row of the phoneme table.
#[derive(Debug, Clone)]
pub struct PhonemeDef {
    pub phoneme: Phoneme,
    /// Transcription symbol.
    pub symbol: &'static str,
    pub class: PhonemeClass,
    /// Candidate spellings in priority order, lower-case.
    pub graphemes: &'static [&'static str],
}

macro_rules! def {
    ($phoneme:ident, $symbol:literal, $class:ident, [$($g:literal),+ $(,)?]) => {
        PhonemeDef {
            phoneme: Phoneme::$phoneme,
            symbol: $symbol,
            class: PhonemeClass::$class,
            graphemes: &[$($g),+],
        }
    };
}

/// The full inventory, in `Phoneme` declaration order.
pub const PHONEME_TABLE: &[PhonemeDef] = &[
    def!(Pf, "pf", Affricate, ["pf"]),
    def!(Ts, "ts", Affricate, ["tz", "z"]),
    def!(Tsch, "tS", Affricate, ["tsch"]),
    def!(Dsch, "dZ", Affricate, ["dsch", "j"]),
    def!(P, "p", Plosive, ["pp", "p", "b"]),
    def!(B, "b", Plosive, ["bb", "b"]),
    def!(T, "t", Plosive, ["tt", "dt", "t", "d"]),
    def!(D, "d", Plosive, ["dd", "d"]),
    def!(K, "k", Plosive, ["ck", "kk", "k", "g"]),
    def!(G, "g", Plosive, ["gg", "g"]),
    def!(F, "f", Fricative, ["f", "v"]),
    def!(V, "v", Fricative, ["v", "w"]),
    def!(S, "s", Fricative, ["ss", "ß", "s"]),
    def!(Z, "z", Fricative, ["s"]),
    def!(Sch, "S", Fricative, ["sch", "s"]),
    def!(Zh, "Z", Fricative, ["g"]),
    def!(Ich, "C", Fricative, ["ch"]),
    def!(J, "j", Fricative, ["j", "i"]),
    def!(Ach, "x", Fricative, ["ch"]),
    def!(H, "h", Fricative, ["h"]),
    def!(M, "m", Sonorant, ["mm", "m"]),
    def!(N, "n", Sonorant, ["nn", "n"]),
    def!(Ng, "N", Sonorant, ["ng", "n"]),
    def!(L, "l", Sonorant, ["ll", "l"]),
    def!(R, "R", Sonorant, ["rr", "r"]),
    def!(Ai, "aI", Diphthong, ["ai", "ei"]),
    def!(Au, "aU", Diphthong, ["au"]),
    def!(Oy, "OY", Diphthong, ["äu", "eu", "oi"]),
    def!(I, "i", Vowel, ["i"]),
    def!(E, "e", Vowel, ["e"]),
    def!(Ae, "E", Vowel, ["e", "ä"]),
    def!(A, "a", Vowel, ["a"]),
    def!(O, "o", Vowel, ["o"]),
    def!(U, "u", Vowel, ["u"]),
    def!(Y, "y", Vowel, ["ü", "y"]),
    def!(Oe, "2", Vowel, ["ö"]),
    def!(ILong, "i:", Vowel, ["ieh", "ie", "i"]),
    def!(ELong, "e:", Vowel, ["eh", "ee", "e"]),
    def!(AeLong, "E:", Vowel, ["äh", "ä"]),
    def!(ALong, "a:", Vowel, ["ah", "aa", "a"]),
    def!(OLong, "o:", Vowel, ["oh", "oo", "o"]),
    def!(ULong, "u:", Vowel, ["uh", "u"]),
    def!(YLong, "y:", Vowel, ["üh", "ü"]),
    def!(OeLong, "2:", Vowel, ["öh", "ö"]),
    def!(ILax, "I", Vowel, ["i"]),
    def!(OLax, "O", Vowel, ["o"]),
    def!(ULax, "U", Vowel, ["u"]),
    def!(YLax, "Y", Vowel, ["ü"]),
    def!(OeLax, "9", Vowel, ["ö"]),
    def!(Schwa, "@", Reduced, ["e"]),
    def!(VocalicR, "6", Reduced, ["er", "r"]),
];

impl Phoneme {
    fn def(self) -> &'static PhonemeDef {
        &PHONEME_TABLE[self as usize]
    }

    /// Iterate over the whole inventory.
    pub fn all() -> impl Iterator<Item = Phoneme> {
        PHONEME_TABLE.iter().map(|def| def.phoneme)
    }

    /// Look up a phoneme by its exact transcription symbol.
    pub fn from_symbol(symbol: &str) -> Option<Phoneme> {
        PHONEME_TABLE
            .iter()
            .find(|def| def.symbol == symbol)
            .map(|def| def.phoneme)
    }

    pub fn symbol(self) -> &'static str {
        self.def().symbol
    }

    pub fn class(self) -> PhonemeClass {
        self.def().class
    }

    /// Candidate spellings, most specific first.
    pub fn graphemes(self) -> &'static [&'static str] {
        self.def().graphemes
    }

    /// True for every vowel, including schwa and vocalic r.
    pub fn is_vowel(self) -> bool {
        matches!(
            self.class(),
            PhonemeClass::Vowel | PhonemeClass::Diphthong | PhonemeClass::Reduced
        )
    }

    /// True for vowels other than schwa and vocalic r. Diphthongs count.
    pub fn is_full_vowel(self) -> bool {
        matches!(self.class(), PhonemeClass::Vowel | PhonemeClass::Diphthong)
    }

    /// The lengthened form of a short vowel, if it has one.
    pub fn long_form(self) -> Option<Phoneme> {
        use Phoneme::*;
        match self {
            I => Some(ILong),
            E => Some(ELong),
            Ae => Some(AeLong),
            A => Some(ALong),
            O => Some(OLong),
            U => Some(ULong),
            Y => Some(YLong),
            Oe => Some(OeLong),
            _ => None,
        }
    }

    /// The short form of a long vowel, if it has one.
    pub fn short_form(self) -> Option<Phoneme> {
        use Phoneme::*;
        match self {
            ILong => Some(I),
            ELong => Some(E),
            AeLong => Some(Ae),
            ALong => Some(A),
            OLong => Some(O),
            ULong => Some(U),
            YLong => Some(Y),
            OeLong => Some(Oe),
            _ => None,
        }
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A recognized unit of a transcription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Phone(Phoneme),
    SyllableBoundary,
    Stress,
}

/// Split a transcription into tokens, longest symbol first.
///
/// Fails on the first character that does not start any inventory symbol.
/// `position` in the error is a character offset.
pub fn tokenize(transcription: &str) -> Result<Vec<Token>, LangError> {
    let mut tokens = Vec::with_capacity(transcription.len());
    let mut rest = transcription;
    let mut position = 0;

    while let Some(c) = rest.chars().next() {
        let (token, len) = match c {
            SYLLABLE_BOUNDARY => (Token::SyllableBoundary, 1),
            STRESS_MARK => (Token::Stress, 1),
            _ => match longest_symbol_at(rest) {
                Some(def) => (Token::Phone(def.phoneme), def.symbol.len()),
                None => {
                    return Err(LangError::UnknownPhoneme {
                        transcription: transcription.to_string(),
                        position,
                        symbol: c,
                    });
                }
            },
        };
        tokens.push(token);
        // All symbols and markers are ASCII, so byte and char counts agree.
        rest = &rest[len..];
        position += len;
    }

    Ok(tokens)
}

fn longest_symbol_at(rest: &str) -> Option<&'static PhonemeDef> {
    PHONEME_TABLE
        .iter()
        .filter(|def| rest.starts_with(def.symbol))
        .max_by_key(|def| def.symbol.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phones(transcription: &str) -> Vec<&'static str> {
        tokenize(transcription)
            .unwrap()
            .into_iter()
            .filter_map(|t| match t {
                Token::Phone(p) => Some(p.symbol()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_table_matches_enum_order() {
        for (i, def) in PHONEME_TABLE.iter().enumerate() {
            assert_eq!(def.phoneme as usize, i, "row for {:?} is out of order", def.phoneme);
        }
        assert_eq!(PHONEME_TABLE.len(), Phoneme::VocalicR as usize + 1);
    }

    #[test]
    fn test_symbols_are_unique() {
        let mut symbols: Vec<&str> = PHONEME_TABLE.iter().map(|d| d.symbol).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), PHONEME_TABLE.len());
    }

    #[test]
    fn test_every_phoneme_has_graphemes() {
        for p in Phoneme::all() {
            assert!(!p.graphemes().is_empty(), "{p} has no graphemes");
            for g in p.graphemes() {
                assert_eq!(*g, g.to_lowercase(), "grapheme {g:?} of {p} is not lower-case");
            }
        }
    }

    #[test]
    fn test_from_symbol() {
        assert_eq!(Phoneme::from_symbol("a:"), Some(Phoneme::ALong));
        assert_eq!(Phoneme::from_symbol("tS"), Some(Phoneme::Tsch));
        assert_eq!(Phoneme::from_symbol("@"), Some(Phoneme::Schwa));
        assert_eq!(Phoneme::from_symbol("q"), None);
    }

    #[test]
    fn test_is_full_vowel() {
        assert!(Phoneme::ALong.is_full_vowel());
        assert!(Phoneme::ULax.is_full_vowel());
        assert!(Phoneme::Au.is_full_vowel());
        assert!(!Phoneme::Schwa.is_full_vowel());
        assert!(!Phoneme::VocalicR.is_full_vowel());
        assert!(!Phoneme::B.is_full_vowel());
        assert!(!Phoneme::G.is_full_vowel());
    }

    #[test]
    fn test_reduced_vowels_are_vowels() {
        assert!(Phoneme::Schwa.is_vowel());
        assert!(Phoneme::VocalicR.is_vowel());
        assert!(!Phoneme::N.is_vowel());
    }

    #[test]
    fn test_long_short_pairs_are_inverse() {
        for p in Phoneme::all() {
            if let Some(long) = p.long_form() {
                assert_eq!(long.short_form(), Some(p));
                assert_eq!(long.symbol(), format!("{}:", p.symbol()));
            }
        }
        assert_eq!(Phoneme::ILax.long_form(), None);
        assert_eq!(Phoneme::Au.long_form(), None);
    }

    #[test]
    fn test_tokenize_prefers_affricates_and_diphthongs() {
        assert_eq!(phones("pfa:l"), ["pf", "a:", "l"]);
        assert_eq!(phones("tsa:l"), ["ts", "a:", "l"]);
        assert_eq!(phones("dOYtS"), ["d", "OY", "tS"]);
        assert_eq!(phones("dZUN@l"), ["dZ", "U", "N", "@", "l"]);
        assert_eq!(phones("haUs"), ["h", "aU", "s"]);
    }

    #[test]
    fn test_tokenize_markers() {
        let tokens = tokenize("ba-'na:-n@").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Phone(Phoneme::B),
                Token::Phone(Phoneme::A),
                Token::SyllableBoundary,
                Token::Stress,
                Token::Phone(Phoneme::N),
                Token::Phone(Phoneme::ALong),
                Token::SyllableBoundary,
                Token::Phone(Phoneme::N),
                Token::Phone(Phoneme::Schwa),
            ]
        );
    }

    #[test]
    fn test_tokenize_unknown_symbol() {
        let err = tokenize("ba-qa").unwrap_err();
        match err {
            LangError::UnknownPhoneme {
                position, symbol, ..
            } => {
                assert_eq!(position, 3);
                assert_eq!(symbol, 'q');
            }
            other => panic!("expected UnknownPhoneme, got {other:?}"),
        }
    }

    #[test]
    fn test_tokenize_rejects_orthographic_letters() {
        // Lower-case r is spelling, not a transcription symbol.
        assert!(tokenize("ro:t").is_err());
        assert!(tokenize("sü").is_err());
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").unwrap().is_empty());
    }
}
