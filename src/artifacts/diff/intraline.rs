//! Character-level similarity between a removed and an added line.
//!
//! The aligner only pairs a removed line with an added one when their
//! similarity ratio reaches [`SIMILARITY_CUTOFF`]. The ratio is `2 * M / T`,
//! where `M` counts the characters of the longest common subsequence of both
//! lines and `T` is the total number of characters in both lines.

use crate::artifacts::diff::myers::{DiffAlgorithm, MyersDiff, OpTag, opcodes};
use std::collections::HashMap;

pub const SIMILARITY_CUTOFF: f64 = 0.75;

/// A line pre-split into characters, with a histogram for the cheap upper bound.
#[derive(Debug, Clone)]
pub struct CharProfile<'l> {
    text: &'l str,
    chars: Vec<char>,
    histogram: HashMap<char, usize>,
}

impl<'l> CharProfile<'l> {
    pub fn new(text: &'l str) -> Self {
        let chars = text.chars().collect::<Vec<_>>();
        let mut histogram = HashMap::new();
        for c in &chars {
            *histogram.entry(*c).or_insert(0) += 1;
        }

        Self {
            text,
            chars,
            histogram,
        }
    }

    pub fn text(&self) -> &'l str {
        self.text
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Upper bound on [`ratio`](Self::ratio) using only both lengths.
    pub fn real_quick_ratio(&self, other: &CharProfile) -> f64 {
        ratio_of(self.len().min(other.len()), self.len() + other.len())
    }

    /// Upper bound on [`ratio`](Self::ratio) ignoring character order.
    pub fn quick_ratio(&self, other: &CharProfile) -> f64 {
        let matches = self
            .histogram
            .iter()
            .map(|(c, count)| (*count).min(other.histogram.get(c).copied().unwrap_or(0)))
            .sum();

        ratio_of(matches, self.len() + other.len())
    }

    pub fn ratio(&self, other: &CharProfile) -> f64 {
        let matches = MyersDiff::new(&self.chars, &other.chars)
            .diff()
            .iter()
            .filter(|edit| edit.is_equal())
            .count();

        ratio_of(matches, self.len() + other.len())
    }

    /// Renders the marker line placed under `self` when it is replaced by `other`.
    ///
    /// `^` marks a replaced character, `-` a deleted one and a space an
    /// unchanged one, except that unchanged tabs are copied as tabs;
    /// insertions leave no mark on this side. Trailing
    /// whitespace is trimmed, so a pure insertion yields an empty guide.
    pub fn guide(&self, other: &CharProfile) -> String {
        let edits = MyersDiff::new(&self.chars, &other.chars).diff();
        let mut guide = String::with_capacity(self.len());

        for op in opcodes(&edits) {
            let mark = match op.tag {
                OpTag::Replace => '^',
                OpTag::Delete => '-',
                OpTag::Insert => continue,
                OpTag::Equal => {
                    // tabs survive so the marks stay under their characters
                    let kept = self.chars[op.a.clone()].iter();
                    guide.extend(kept.map(|&c| if c == '\t' { '\t' } else { ' ' }));
                    continue;
                }
            };
            guide.extend(std::iter::repeat_n(mark, op.a.len()));
        }

        guide.trim_end().to_string()
    }
}

fn ratio_of(matches: usize, length: usize) -> f64 {
    if length == 0 {
        1.0
    } else {
        2.0 * matches as f64 / length as f64
    }
}
