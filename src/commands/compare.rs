use crate::areas::comparator::BatchComparator;
use crate::artifacts::diff::aligner::align;
use crate::artifacts::diff::classifier::classify;
use crate::artifacts::pairs::file_pair::{FilePair, FolderSelection};
use crate::artifacts::report::outcome::ComparisonOutcome;
use crate::artifacts::report::summary::RunSummary;
use chrono::Local;
use std::path::Path;
use std::time::Instant;

impl BatchComparator {
    /// Compares every discovered pair and returns the run summary.
    ///
    /// Returns `Ok(None)` after logging an error when the root has no
    /// sub-folders or no folder yields a pair. A failing pair is recorded as
    /// an error outcome and does not stop the run.
    pub fn run(&self) -> anyhow::Result<Option<RunSummary>> {
        let started_at = Local::now();
        let clock = Instant::now();

        self.log_header(&started_at)?;

        let folders = self.workspace().list_folders()?;
        if folders.is_empty() {
            self.log().error(format!(
                "No sub-folders found in {}",
                self.root().display()
            ))?;
            return Ok(None);
        }

        let selections = folders
            .iter()
            .map(|folder| self.select(folder))
            .collect::<anyhow::Result<Vec<_>>>()?;
        self.log_folder_listing(&selections)?;

        if !selections.iter().any(FolderSelection::has_pairs) {
            for selection in &selections {
                self.log_missing(selection)?;
            }
            self.log().error(format!(
                "No valid file pairs found in {}",
                self.root().display()
            ))?;
            return Ok(None);
        }

        let mut summary = RunSummary::new(
            started_at,
            self.root(),
            self.rule().clone(),
            folders.len(),
        );

        for selection in &selections {
            self.log_folder_header(selection)?;
            self.log_missing(selection)?;

            for pair in &selection.pairs {
                let outcome = self.compare_pair(pair);
                self.report_outcome(&outcome)?;
                summary.record(&outcome);
            }
        }

        let log_file = self.log().file().map(Path::to_path_buf);
        summary.finish(clock.elapsed(), log_file.as_deref());
        self.report_summary(&summary)?;

        Ok(Some(summary))
    }

    /// Compares one pair; any failure becomes an error outcome.
    pub fn compare_pair(&self, pair: &FilePair) -> ComparisonOutcome {
        match self.try_compare_pair(pair) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::debug!("comparison of {:?} failed: {e:?}", pair);
                ComparisonOutcome::failed(pair.clone(), format!("{e:#}"))
            }
        }
    }

    fn try_compare_pair(&self, pair: &FilePair) -> anyhow::Result<ComparisonOutcome> {
        let decoded = self.workspace().read_pair(pair)?;
        log::debug!(
            "read {} and {} as {}",
            pair.first.display(),
            pair.second.display(),
            decoded.encoding
        );

        let differences = classify(&align(&decoded.first, &decoded.second));

        Ok(ComparisonOutcome::compared(
            pair.clone(),
            decoded.first.len(),
            decoded.second.len(),
            decoded.encoding,
            differences,
        ))
    }

    fn select(&self, folder: &Path) -> anyhow::Result<FolderSelection> {
        let name = folder
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let files = self.workspace().list_files(folder)?;

        let selection = self.rule().select(&name, folder, &files);
        for (extension, count) in selection.counts.iter().filter(|(_, count)| *count > 2) {
            log::debug!("{name}: {count} {extension} files, only the first two are compared");
        }

        Ok(selection)
    }
}
