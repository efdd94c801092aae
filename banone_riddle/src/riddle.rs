// Riddle assembly: turns a successful merge into a question and an answer.
//
// The question lists the descriptive tags of both words ("Was ist weiß,
// krumm und schwimmt auf dem See?"); the answer names the compound with the
// host word's article ("Eine Schwanane."). A color is mentioned first,
// preferring the donor's over the host's. Adjective-like tags (color,
// property) are introduced with the copula "ist"; actions are verb phrases
// and stand on their own.
//
// Every successful merge yields a riddle. A host without an article gets no
// answer line, and words with fewer than two tags get a shorter question.

use std::fmt;

use banone_lang::{Word, capitalize, merge};

/// Asked when neither word carries a descriptive tag.
const BARE_QUESTION: &str = "Was ist das?";

/// A riddle for one (base, extra) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Riddle {
    /// Spelling of the host word.
    pub base: String,
    /// Spelling of the donor word.
    pub extra: String,
    pub compound: String,
    pub question: String,
    /// `None` when the host has no determiner.
    pub answer: Option<String>,
}

impl fmt::Display for Riddle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.question)?;
        if let Some(answer) = &self.answer {
            write!(f, "\n{answer}")?;
        }
        Ok(())
    }
}

/// Build the question for merging `extra` into `base`.
///
/// Two or more tags read "Was ist a, b und c?". A single tag reads
/// "Was ist a?" (or "Was a?" for an action), and no tags at all fall back
/// to "Was ist das?".
pub fn generate_question(base: &Word, extra: &Word) -> String {
    let (b, e) = (base.meta(), extra.meta());

    let color = e.color.as_ref().or(b.color.as_ref());
    let properties: Vec<&str> = [color, b.property.as_ref(), e.property.as_ref()]
        .into_iter()
        .flatten()
        .map(String::as_str)
        .collect();
    let actions = [b.action.as_ref(), e.action.as_ref()]
        .into_iter()
        .flatten()
        .map(String::as_str);

    let mut descriptors: Vec<&str> = properties.iter().copied().chain(actions).collect();
    let Some(last) = descriptors.pop() else {
        return BARE_QUESTION.to_string();
    };
    let copula = if properties.is_empty() { "" } else { "ist " };

    if descriptors.is_empty() {
        format!("Was {copula}{last}?")
    } else {
        format!("Was {copula}{} und {last}?", descriptors.join(", "))
    }
}

/// Build the answer naming `compound` with the article of `base`.
///
/// Returns `None` when `base` has no determiner.
pub fn generate_answer(base: &Word, compound: &str) -> Option<String> {
    let determiner = base.meta().determiner.as_deref()?;
    Some(format!("{} {}.", capitalize(determiner), compound))
}

/// Merge `extra` into `base` and, if that works, build the riddle.
pub fn generate_riddle(base: &Word, extra: &Word) -> Option<Riddle> {
    let compound = merge(base, extra)?;
    let question = generate_question(base, extra);
    let answer = generate_answer(base, &compound);
    if answer.is_none() {
        log::debug!(
            "event=answer_omitted base={} compound={} reason=no_determiner",
            base.orthography(),
            compound
        );
    }

    Some(Riddle {
        base: base.orthography().to_string(),
        extra: extra.orthography().to_string(),
        compound,
        question,
        answer,
    })
}
