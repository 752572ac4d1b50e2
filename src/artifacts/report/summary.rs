use crate::artifacts::pairs::file_pair::PairCategory;
use crate::artifacts::pairs::pairing_rule::PairingRule;
use crate::artifacts::report::outcome::{ComparisonOutcome, PairStatus};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairDetail {
    pub folder: String,
    pub file1: String,
    pub file2: String,
    pub category: PairCategory,
    pub status: PairStatus,
    /// `None` when the pair could not be compared.
    pub differences: Option<usize>,
}

impl From<&ComparisonOutcome> for PairDetail {
    fn from(outcome: &ComparisonOutcome) -> Self {
        let pair = outcome.pair();

        Self {
            folder: pair.folder.clone(),
            file1: pair.first_name(),
            file2: pair.second_name(),
            category: pair.category.clone(),
            status: outcome.status().clone(),
            differences: outcome.difference_count(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub started_at: DateTime<Local>,
    pub root: PathBuf,
    pub rule: PairingRule,
    pub total_folders: usize,
    pub compared_pairs: usize,
    pub identical_pairs: usize,
    pub different_pairs: usize,
    pub error_pairs: usize,
    pub total_differences: usize,
    pub details: Vec<PairDetail>,
    pub elapsed_secs: f64,
    pub log_file: Option<PathBuf>,
}

impl RunSummary {
    pub fn new(
        started_at: DateTime<Local>,
        root: &Path,
        rule: PairingRule,
        total_folders: usize,
    ) -> Self {
        Self {
            started_at,
            root: root.to_path_buf(),
            rule,
            total_folders,
            compared_pairs: 0,
            identical_pairs: 0,
            different_pairs: 0,
            error_pairs: 0,
            total_differences: 0,
            details: Vec::new(),
            elapsed_secs: 0.0,
            log_file: None,
        }
    }

    pub fn record(&mut self, outcome: &ComparisonOutcome) {
        self.compared_pairs += 1;

        match outcome.status() {
            PairStatus::Identical => self.identical_pairs += 1,
            PairStatus::Different => {
                self.different_pairs += 1;
                self.total_differences += outcome.differences().len();
            }
            PairStatus::Error(_) => self.error_pairs += 1,
        }

        self.details.push(PairDetail::from(outcome));
    }

    pub fn finish(&mut self, elapsed: Duration, log_file: Option<&Path>) {
        self.elapsed_secs = elapsed.as_secs_f64();
        self.log_file = log_file.map(Path::to_path_buf);
    }

    pub fn different(&self) -> impl Iterator<Item = &PairDetail> {
        self.details
            .iter()
            .filter(|detail| detail.status == PairStatus::Different)
    }
}
