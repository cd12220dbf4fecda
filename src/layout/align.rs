//! Line-to-word alignment.
//!
//! Pre-wrapped display lines are split on whitespace and each token consumes the next entry
//! of the flat word array. When counts disagree the walk still completes:
//!
//! - tokens left over after the words run out are kept as plain, untimed text;
//! - words left over after the lines run out are dropped and counted.

use crate::model::state::Word;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlignedToken<'a> {
    /// Text as it appears on the display line.
    pub text: &'a str,
    /// Timing for this token, `None` when the word array ran out.
    pub word: Option<&'a Word>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlignedLine<'a> {
    pub tokens: Vec<AlignedToken<'a>>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct AlignmentReport {
    /// Line tokens with no word to time them.
    pub untimed_tokens: usize,
    /// Words with no line token to display them.
    pub dropped_words: usize,
}

impl AlignmentReport {
    pub fn is_exact(&self) -> bool {
        self.untimed_tokens == 0 && self.dropped_words == 0
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Alignment<'a> {
    pub lines: Vec<AlignedLine<'a>>,
    pub report: AlignmentReport,
}

impl<'a> Alignment<'a> {
    /// Every timed word in display order.
    pub fn timed_words(&self) -> impl Iterator<Item = &'a Word> + '_ {
        self.lines
            .iter()
            .flat_map(|l| l.tokens.iter())
            .filter_map(|t| t.word)
    }
}

/// Walk `lines` and `words` with a single word pointer.
///
/// With no lines at all, the words themselves form one line.
pub fn align_lines<'a>(lines: &[&'a str], words: &'a [Word]) -> Alignment<'a> {
    if lines.is_empty() {
        let tokens = words
            .iter()
            .map(|w| AlignedToken {
                text: w.word.as_str(),
                word: Some(w),
            })
            .collect();
        return Alignment {
            lines: vec![AlignedLine { tokens }],
            report: AlignmentReport::default(),
        };
    }

    let mut next_word = 0usize;
    let mut report = AlignmentReport::default();
    let mut out = Vec::with_capacity(lines.len());

    for &line in lines {
        let mut tokens = Vec::new();
        for text in line.split_whitespace() {
            let word = words.get(next_word);
            if word.is_some() {
                next_word += 1;
            } else {
                report.untimed_tokens += 1;
            }
            tokens.push(AlignedToken { text, word });
        }
        out.push(AlignedLine { tokens });
    }
    report.dropped_words = words.len().saturating_sub(next_word);

    Alignment { lines: out, report }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/align.rs"]
mod tests;
