use crate::artifacts::diff::intraline::{CharProfile, SIMILARITY_CUTOFF};
use crate::artifacts::diff::myers::{DiffAlgorithm, MyersDiff, OpTag, opcodes};
use crate::artifacts::text::line_set::LineSet;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlignmentRecord {
    Common(String),
    Removed(String),
    Added(String),
    /// Marker line describing how the preceding removed line was edited.
    Hint(String),
}

impl AlignmentRecord {
    pub fn payload(&self) -> &str {
        match self {
            AlignmentRecord::Common(payload)
            | AlignmentRecord::Removed(payload)
            | AlignmentRecord::Added(payload)
            | AlignmentRecord::Hint(payload) => payload,
        }
    }

    pub fn marker(&self) -> char {
        match self {
            AlignmentRecord::Common(_) => ' ',
            AlignmentRecord::Removed(_) => '-',
            AlignmentRecord::Added(_) => '+',
            AlignmentRecord::Hint(_) => '?',
        }
    }
}

impl Display for AlignmentRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.marker(), self.payload())
    }
}

#[derive(Debug, Clone, Copy)]
struct BestPair {
    old: usize,
    new: usize,
    ratio: f64,
}

/// Aligns two line sequences into an ordered list of [`AlignmentRecord`]s.
///
/// Common lines come from a Myers shortest edit script. Inside a block of
/// removed and added lines, the most similar (removed, added) pair is
/// emitted as `Removed`, `Hint`, `Added` and the lines around it are
/// resolved recursively. A block without a pair reaching the cutoff is
/// emitted side by side, the shorter side first and removed lines first on a
/// tie.
#[derive(Debug, Clone)]
pub struct LineAligner<'d> {
    a: Vec<&'d str>,
    b: Vec<&'d str>,
    cutoff: f64,
}

impl<'d> LineAligner<'d> {
    pub fn new<S: AsRef<str>>(a: &'d [S], b: &'d [S]) -> Self {
        Self {
            a: a.iter().map(|line| line.as_ref()).collect(),
            b: b.iter().map(|line| line.as_ref()).collect(),
            cutoff: SIMILARITY_CUTOFF,
        }
    }

    pub fn from_line_sets(a: &'d LineSet, b: &'d LineSet) -> Self {
        Self {
            a: a.contents().collect(),
            b: b.contents().collect(),
            cutoff: SIMILARITY_CUTOFF,
        }
    }

    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    pub fn align(&self) -> Vec<AlignmentRecord> {
        let edits = MyersDiff::new(&self.a, &self.b).diff();
        let mut records = Vec::with_capacity(edits.len());

        for op in opcodes(&edits) {
            match op.tag {
                OpTag::Equal => records.extend(
                    self.a[op.a]
                        .iter()
                        .map(|line| AlignmentRecord::Common(line.to_string())),
                ),
                OpTag::Delete => dump_removed(&self.a[op.a], &mut records),
                OpTag::Insert => dump_added(&self.b[op.b], &mut records),
                OpTag::Replace => {
                    let old = self.a[op.a]
                        .iter()
                        .copied()
                        .map(CharProfile::new)
                        .collect::<Vec<_>>();
                    let new = self.b[op.b]
                        .iter()
                        .copied()
                        .map(CharProfile::new)
                        .collect::<Vec<_>>();
                    self.replace_block(&old, &new, &mut records);
                }
            }
        }

        records
    }

    fn replace_block(
        &self,
        old: &[CharProfile],
        new: &[CharProfile],
        records: &mut Vec<AlignmentRecord>,
    ) {
        let Some(best) = self.best_pair(old, new) else {
            // the shorter side goes first
            if new.len() < old.len() {
                dump_added(new.iter().map(CharProfile::text), records);
                dump_removed(old.iter().map(CharProfile::text), records);
            } else {
                dump_removed(old.iter().map(CharProfile::text), records);
                dump_added(new.iter().map(CharProfile::text), records);
            }
            return;
        };

        self.resolve(&old[..best.old], &new[..best.new], records);

        let (removed, added) = (&old[best.old], &new[best.new]);
        records.push(AlignmentRecord::Removed(removed.text().to_string()));
        let guide = removed.guide(added);
        if !guide.is_empty() {
            records.push(AlignmentRecord::Hint(guide));
        }
        records.push(AlignmentRecord::Added(added.text().to_string()));

        self.resolve(&old[best.old + 1..], &new[best.new + 1..], records);
    }

    fn resolve(
        &self,
        old: &[CharProfile],
        new: &[CharProfile],
        records: &mut Vec<AlignmentRecord>,
    ) {
        match (old.is_empty(), new.is_empty()) {
            (false, false) => self.replace_block(old, new, records),
            (false, true) => dump_removed(old.iter().map(CharProfile::text), records),
            (true, false) => dump_added(new.iter().map(CharProfile::text), records),
            (true, true) => {}
        }
    }

    fn best_pair(&self, old: &[CharProfile], new: &[CharProfile]) -> Option<BestPair> {
        let mut best: Option<BestPair> = None;
        let beats = |ratio: f64, best: &Option<BestPair>| match best {
            Some(pair) => ratio > pair.ratio,
            None => ratio >= self.cutoff,
        };

        for (j, added) in new.iter().enumerate() {
            for (i, removed) in old.iter().enumerate() {
                if !beats(removed.real_quick_ratio(added), &best)
                    || !beats(removed.quick_ratio(added), &best)
                {
                    continue;
                }

                let ratio = removed.ratio(added);
                if beats(ratio, &best) {
                    best = Some(BestPair {
                        old: i,
                        new: j,
                        ratio,
                    });
                }
            }
        }

        best
    }
}

fn dump_removed<S: AsRef<str>>(
    lines: impl IntoIterator<Item = S>,
    records: &mut Vec<AlignmentRecord>,
) {
    records.extend(
        lines
            .into_iter()
            .map(|line| AlignmentRecord::Removed(line.as_ref().to_string())),
    );
}

fn dump_added<S: AsRef<str>>(
    lines: impl IntoIterator<Item = S>,
    records: &mut Vec<AlignmentRecord>,
) {
    records.extend(
        lines
            .into_iter()
            .map(|line| AlignmentRecord::Added(line.as_ref().to_string())),
    );
}

/// Aligns two line sets with the default similarity cutoff.
pub fn align(lines1: &LineSet, lines2: &LineSet) -> Vec<AlignmentRecord> {
    LineAligner::from_line_sets(lines1, lines2).align()
}
