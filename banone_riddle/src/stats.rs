// Per-part-of-speech word counts for a loaded lexicon.

use std::cmp::Reverse;
use std::fmt;

use banone_lang::{Lexicon, PartOfSpeech};

const RULE_HEAVY: &str = "========================";
const RULE_LIGHT: &str = "------------------------";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryStats {
    /// Most common first; equal counts keep noun, verb, other order.
    pub counts: Vec<(PartOfSpeech, usize)>,
    pub total: usize,
}

impl DictionaryStats {
    pub fn collect(lexicon: &Lexicon) -> Self {
        let mut counts: Vec<(PartOfSpeech, usize)> =
            [PartOfSpeech::Noun, PartOfSpeech::Verb, PartOfSpeech::Other]
                .into_iter()
                .map(|pos| (pos, lexicon.by_pos(pos).len()))
                .filter(|&(_, n)| n > 0)
                .collect();
        // Stable sort keeps the declaration order for ties.
        counts.sort_by_key(|&(_, n)| Reverse(n));

        DictionaryStats {
            counts,
            total: lexicon.len(),
        }
    }
}

impl fmt::Display for DictionaryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE_HEAVY}")?;
        writeln!(f, "Dictionary stats")?;
        writeln!(f, "{RULE_LIGHT}")?;
        for (pos, count) in &self.counts {
            writeln!(f, "{pos}:\t{count:>10}")?;
        }
        writeln!(f, "{RULE_LIGHT}")?;
        writeln!(f, "Total:\t{:>10}", self.total)?;
        write!(f, "{RULE_HEAVY}")
    }
}
