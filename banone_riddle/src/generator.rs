// Batch riddle generation over a whole lexicon.
//
// Every word may donate (`extra`); only nouns may host (`base`). A word is
// never merged with itself. Output order is extra-major in lexicon order,
// then base in lexicon order, whether or not the batch runs in parallel:
// the parallel path evaluates one donor per rayon task and `collect()` on an
// indexed parallel iterator keeps the input order.

use banone_lang::{Lexicon, Word};
use rayon::prelude::*;

use crate::riddle::{Riddle, generate_riddle};

/// All riddles the lexicon can produce.
pub fn generate_all(lexicon: &Lexicon, parallel: bool) -> Vec<Riddle> {
    let bases: Vec<&Word> = lexicon.nouns().collect();
    let riddles: Vec<Riddle> = if parallel {
        lexicon
            .all()
            .par_iter()
            .map(|extra| riddles_for_extra(extra, &bases))
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    } else {
        lexicon
            .all()
            .iter()
            .flat_map(|extra| riddles_for_extra(extra, &bases))
            .collect()
    };

    log::info!(
        "event=batch_done words={} bases={} riddles={} parallel={}",
        lexicon.len(),
        bases.len(),
        riddles.len(),
        parallel
    );
    riddles
}

fn riddles_for_extra(extra: &Word, bases: &[&Word]) -> Vec<Riddle> {
    bases
        .iter()
        .filter(|base| base.orthography() != extra.orthography())
        .filter_map(|base| generate_riddle(base, extra))
        .collect()
}
