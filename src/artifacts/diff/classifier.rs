use crate::artifacts::diff::aligner::AlignmentRecord;
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    Removed,
    Added,
    Changed,
    ChangedContent,
}

impl From<&DiffKind> for &str {
    fn from(kind: &DiffKind) -> Self {
        match kind {
            DiffKind::Removed => "removed",
            DiffKind::Added => "added",
            DiffKind::Changed => "changed",
            DiffKind::ChangedContent => "changed to",
        }
    }
}

impl Display for DiffKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffRecord {
    Removed { line: usize, content: String },
    Added { line: usize, content: String },
    /// A removed line whose edit is described by the `ChangedContent` that follows it.
    Changed { line: usize, content: String },
    ChangedContent { content: String },
}

impl DiffRecord {
    pub fn kind(&self) -> DiffKind {
        match self {
            DiffRecord::Removed { .. } => DiffKind::Removed,
            DiffRecord::Added { .. } => DiffKind::Added,
            DiffRecord::Changed { .. } => DiffKind::Changed,
            DiffRecord::ChangedContent { .. } => DiffKind::ChangedContent,
        }
    }

    /// 1-based line number in the first file; `None` for `ChangedContent`.
    pub fn line(&self) -> Option<usize> {
        match self {
            DiffRecord::Removed { line, .. }
            | DiffRecord::Added { line, .. }
            | DiffRecord::Changed { line, .. } => Some(*line),
            DiffRecord::ChangedContent { .. } => None,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            DiffRecord::Removed { content, .. }
            | DiffRecord::Added { content, .. }
            | DiffRecord::Changed { content, .. }
            | DiffRecord::ChangedContent { content } => content,
        }
    }
}

/// Folds alignment records into [`DiffRecord`]s in a single forward pass.
///
/// The cursor counts first-file lines consumed so far. Common and added
/// records advance it; removed records are numbered at the current position
/// without advancing it. A hint promotes the removed record right before it
/// to `Changed` and is kept as the following `ChangedContent`.
#[derive(Debug, Default)]
pub struct Classifier {
    line_cursor: usize,
    records: Vec<DiffRecord>,
}

impl Classifier {
    pub fn push(&mut self, record: &AlignmentRecord) {
        match record {
            AlignmentRecord::Common(_) => self.line_cursor += 1,
            AlignmentRecord::Removed(content) => self.records.push(DiffRecord::Removed {
                line: self.line_cursor + 1,
                content: content.clone(),
            }),
            AlignmentRecord::Added(content) => {
                self.records.push(DiffRecord::Added {
                    line: self.line_cursor + 1,
                    content: content.clone(),
                });
                self.line_cursor += 1;
            }
            AlignmentRecord::Hint(content) => self.promote_last_removed(content),
        }
    }

    fn promote_last_removed(&mut self, hint: &str) {
        match self.records.pop() {
            Some(DiffRecord::Removed { line, content }) => {
                self.records.push(DiffRecord::Changed { line, content });
                self.records.push(DiffRecord::ChangedContent {
                    content: hint.to_string(),
                });
            }
            Some(other) => self.records.push(other),
            None => {}
        }
    }

    pub fn line_cursor(&self) -> usize {
        self.line_cursor
    }

    pub fn records(&self) -> &[DiffRecord] {
        &self.records
    }

    pub fn finish(self) -> Vec<DiffRecord> {
        self.records
    }
}

pub fn classify(alignment: &[AlignmentRecord]) -> Vec<DiffRecord> {
    let mut classifier = Classifier::default();
    alignment.iter().for_each(|record| classifier.push(record));
    classifier.finish()
}
