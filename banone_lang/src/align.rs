// Grapheme aligner: maps a tokenized transcription onto its spelling.
//
// Each recognized phoneme tries its candidate graphemes (see
// `phoneme::PHONEME_TABLE`) in priority order against the rest of the
// lower-cased orthography. The first prefix match is consumed and the new
// `Sound` records the character offset where it started. A phoneme with no
// matching grapheme produces no `Sound` and does not move the orthographic
// cursor; this happens for silent letters and loose transcriptions and is
// not an error.
//
// Stress: a stress marker arms a pending flag that the next full vowel
// consumes. Only the first marker in a word counts, so a word carries at most
// one stressed sound.
//
// The merge algorithm cuts spellings at the offsets produced here.

use crate::phoneme::{Phoneme, Token};
use crate::types::Sound;

/// Align `tokens` against `orthography`, producing sounds in order.
pub fn align(orthography: &str, tokens: &[Token]) -> Vec<Sound> {
    let spelling: Vec<char> = orthography.to_lowercase().chars().collect();
    let mut sounds = Vec::with_capacity(tokens.len());
    let mut offset = 0;
    let mut syllable = 1;
    let mut pending_stress = false;
    let mut stress_assigned = false;

    for token in tokens {
        let phone = match *token {
            Token::SyllableBoundary => {
                syllable += 1;
                continue;
            }
            Token::Stress => {
                pending_stress = !stress_assigned;
                continue;
            }
            Token::Phone(phone) => phone,
        };

        let stressed = pending_stress && phone.is_full_vowel();
        if stressed {
            pending_stress = false;
            stress_assigned = true;
        }

        let Some(len) = match_grapheme(&spelling[offset..], phone) else {
            continue;
        };
        sounds.push(Sound {
            phone,
            start_char: offset,
            syllable,
            stressed,
        });
        offset += len;
    }

    sounds
}

/// Length in chars of the first grapheme of `phone` that prefixes `rest`.
fn match_grapheme(rest: &[char], phone: Phoneme) -> Option<usize> {
    phone.graphemes().iter().find_map(|grapheme| {
        let len = grapheme.chars().count();
        let matches = rest.len() >= len
            && rest
                .iter()
                .copied()
                .zip(grapheme.chars())
                .all(|(a, b)| a == b);
        matches.then_some(len)
    })
}
