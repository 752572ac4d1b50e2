use crate::artifacts::diff::classifier::DiffRecord;
use crate::artifacts::pairs::file_pair::FilePair;
use crate::artifacts::text::encoding::TextEncoding;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PairStatus {
    Identical,
    Different,
    Error(String),
}

/// The result of comparing one file pair. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonOutcome {
    pair: FilePair,
    status: PairStatus,
    differences: Vec<DiffRecord>,
    first_lines: usize,
    second_lines: usize,
    encoding: Option<TextEncoding>,
}

impl ComparisonOutcome {
    pub fn compared(
        pair: FilePair,
        first_lines: usize,
        second_lines: usize,
        encoding: TextEncoding,
        differences: Vec<DiffRecord>,
    ) -> Self {
        let status = if differences.is_empty() {
            PairStatus::Identical
        } else {
            PairStatus::Different
        };

        Self {
            pair,
            status,
            differences,
            first_lines,
            second_lines,
            encoding: Some(encoding),
        }
    }

    pub fn failed(pair: FilePair, message: impl Into<String>) -> Self {
        Self {
            pair,
            status: PairStatus::Error(message.into()),
            differences: Vec::new(),
            first_lines: 0,
            second_lines: 0,
            encoding: None,
        }
    }

    pub fn pair(&self) -> &FilePair {
        &self.pair
    }

    pub fn status(&self) -> &PairStatus {
        &self.status
    }

    pub fn differences(&self) -> &[DiffRecord] {
        &self.differences
    }

    /// Number of difference records, `None` when the pair could not be compared.
    pub fn difference_count(&self) -> Option<usize> {
        match self.status {
            PairStatus::Error(_) => None,
            _ => Some(self.differences.len()),
        }
    }

    pub fn line_counts(&self) -> (usize, usize) {
        (self.first_lines, self.second_lines)
    }

    pub fn encoding(&self) -> Option<TextEncoding> {
        self.encoding
    }

    pub fn is_identical(&self) -> bool {
        self.status == PairStatus::Identical
    }
}
