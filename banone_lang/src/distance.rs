// Phonetic distance between two aligned sounds.
//
// Fixed cost table. Identical phonemes cost 0 and a long vowel against its
// short counterpart costs 1, unless the short one carries the word stress.
// The pairs in `SIMILAR_CONSONANTS` cost 2. Anything else is `NO_MATCH`.

use crate::phoneme::Phoneme;
use crate::types::Sound;

pub const IDENTICAL: u32 = 0;
pub const LENGTH_VARIANT: u32 = 1;
pub const SIMILAR_CONSONANT: u32 = 2;
pub const NO_MATCH: u32 = 100;

/// Consonant pairs that pass as similar, in either order.
pub const SIMILAR_CONSONANTS: &[(Phoneme, Phoneme)] = &[
    (Phoneme::M, Phoneme::N),
    (Phoneme::L, Phoneme::R),
    (Phoneme::Pf, Phoneme::P),
];

/// Distance between two sounds. Symmetric.
pub fn distance(a: &Sound, b: &Sound) -> u32 {
    if a.phone == b.phone {
        IDENTICAL
    } else if is_length_variant(a, b) || is_length_variant(b, a) {
        LENGTH_VARIANT
    } else if is_similar_consonant(a.phone, b.phone) {
        SIMILAR_CONSONANT
    } else {
        NO_MATCH
    }
}

/// `long` is the lengthened form of `short`, and `short` is unstressed.
/// A stressed short vowel is heard as distinct from its long counterpart.
fn is_length_variant(long: &Sound, short: &Sound) -> bool {
    short.phone.long_form() == Some(long.phone) && !short.stressed
}

fn is_similar_consonant(a: Phoneme, b: Phoneme) -> bool {
    SIMILAR_CONSONANTS
        .iter()
        .any(|&(x, y)| (a == x && b == y) || (a == y && b == x))
}
