use crate::areas::comparator::BatchComparator;
use crate::artifacts::diff::classifier::DiffRecord;
use crate::artifacts::pairs::file_pair::FolderSelection;
use crate::artifacts::report::outcome::{ComparisonOutcome, PairStatus};
use crate::artifacts::report::summary::RunSummary;
use crate::artifacts::text::encoding::TextEncoding;
use chrono::{DateTime, Local};
use colored::Colorize;
use std::io::Write;

const WIDE_RULE: usize = 100;
const NARROW_RULE: usize = 50;

impl BatchComparator {
    pub(crate) fn log_header(&self, started_at: &DateTime<Local>) -> anyhow::Result<()> {
        let mut log = self.log();

        log.rule('=', WIDE_RULE)?;
        log.info(format!(
            "Batch comparison started at {}",
            started_at.format("%Y-%m-%d %H:%M:%S")
        ))?;
        log.info(format!("Root folder: {}", self.root().display()))?;
        log.info(format!("Pairing rule: {}", self.rule()))?;
        let file = log.file().map(|file| file.display().to_string());
        if let Some(file) = file {
            log.info(format!("Log file: {file}"))?;
        }
        log.rule('=', WIDE_RULE)?;

        Ok(())
    }

    pub(crate) fn log_folder_listing(&self, selections: &[FolderSelection]) -> anyhow::Result<()> {
        let mut log = self.log();

        log.info(format!("Found {} sub-folder(s):", selections.len()))?;
        for selection in selections {
            if selection.counts.is_empty() {
                if selection.has_pairs() {
                    log.info(format!("  - {}", selection.folder))?;
                }
            } else {
                let counts = selection
                    .counts
                    .iter()
                    .map(|(extension, count)| format!("{extension}: {count}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                log.info(format!("  - {} ({counts})", selection.folder))?;
            }
        }

        Ok(())
    }

    pub(crate) fn log_folder_header(&self, selection: &FolderSelection) -> anyhow::Result<()> {
        let mut log = self.log();

        log.rule('=', WIDE_RULE)?;
        log.info(format!("Folder: {}", selection.folder))?;
        log.info(format!("Path: {}", selection.path.display()))?;

        Ok(())
    }

    pub(crate) fn log_missing(&self, selection: &FolderSelection) -> anyhow::Result<()> {
        let mut log = self.log();

        for missing in &selection.missing {
            log.warn(format!("{}: {missing}", selection.folder))?;
        }

        Ok(())
    }

    pub(crate) fn report_outcome(&self, outcome: &ComparisonOutcome) -> anyhow::Result<()> {
        let mut log = self.log();
        let pair = outcome.pair();

        log.rule('-', NARROW_RULE)?;
        log.info(format!(
            "Comparing {}: {} <-> {}",
            pair.category,
            pair.first_name(),
            pair.second_name()
        ))?;

        match outcome.status() {
            PairStatus::Error(message) => {
                log.error(format!(
                    "Failed to compare {} and {} in {}: {message}",
                    pair.first_name(),
                    pair.second_name(),
                    pair.folder
                ))?;
                return Ok(());
            }
            PairStatus::Identical | PairStatus::Different => {}
        }

        if outcome.encoding() == Some(TextEncoding::Latin1) {
            log.warn(format!(
                "{} or {} is not valid UTF-8, both were read as {}",
                pair.first_name(),
                pair.second_name(),
                TextEncoding::Latin1
            ))?;
        }

        let (first_lines, second_lines) = outcome.line_counts();
        log.info(format!(
            "Line counts: {}: {first_lines}, {}: {second_lines}",
            pair.first_name(),
            pair.second_name()
        ))?;

        if outcome.is_identical() {
            log.info("Result: files are identical")?;
            return Ok(());
        }

        log.info(format!(
            "Result: {} differences found",
            outcome.differences().len()
        ))?;
        for (index, record) in outcome.differences().iter().enumerate() {
            log.info(describe(index + 1, record))?;
        }

        Ok(())
    }

    pub(crate) fn report_summary(&self, summary: &RunSummary) -> anyhow::Result<()> {
        let mut log = self.log();

        log.rule('=', WIDE_RULE)?;
        log.info("Summary")?;
        log.info(format!("Folders: {}", summary.total_folders))?;
        log.info(format!("Compared pairs: {}", summary.compared_pairs))?;
        log.info(format!("├─ identical: {}", summary.identical_pairs))?;
        log.info(format!("└─ different: {}", summary.different_pairs))?;
        log.info(format!("Errors: {}", summary.error_pairs))?;
        log.info(format!("Total differences: {}", summary.total_differences))?;

        for detail in summary.different() {
            log.info(format!(
                "  - {} [{}]: {} <-> {} ({} differences)",
                detail.folder,
                detail.category,
                detail.file1,
                detail.file2,
                detail.differences.unwrap_or_default()
            ))?;
        }

        log.info(format!("Elapsed: {:.2}s", summary.elapsed_secs))?;
        if let Some(file) = &summary.log_file {
            log.info(format!("Log file: {}", file.display()))?;
        }
        log.rule('=', WIDE_RULE)?;

        Ok(())
    }
}

fn describe(number: usize, record: &DiffRecord) -> String {
    match record.line() {
        Some(line) => format!(
            "Difference #{number}: {} [line: {line}] | content: {}",
            record.kind(),
            record.content()
        ),
        None => format!("    | {}: {}", record.kind(), record.content()),
    }
}

/// Prints the end-of-run summary for a terminal reader.
pub fn write_summary(writer: &mut impl Write, summary: &RunSummary) -> anyhow::Result<()> {
    writeln!(writer, "{}", "Batch comparison summary".bold())?;
    writeln!(writer, "  root:        {}", summary.root.display())?;
    writeln!(writer, "  rule:        {}", summary.rule)?;
    writeln!(writer, "  folders:     {}", summary.total_folders)?;
    writeln!(writer, "  compared:    {}", summary.compared_pairs)?;
    writeln!(
        writer,
        "  identical:   {}",
        summary.identical_pairs.to_string().green()
    )?;
    writeln!(
        writer,
        "  different:   {}",
        summary.different_pairs.to_string().yellow()
    )?;
    writeln!(writer, "  errors:      {}", summary.error_pairs.to_string().red())?;
    writeln!(writer, "  differences: {}", summary.total_differences)?;

    for detail in &summary.details {
        let status = match &detail.status {
            PairStatus::Identical => "identical".green(),
            PairStatus::Different => format!(
                "{} differences",
                detail.differences.unwrap_or_default()
            )
            .yellow(),
            PairStatus::Error(message) => format!("error: {message}").red(),
        };
        writeln!(
            writer,
            "  {}/{} <-> {}: {status}",
            detail.folder, detail.file1, detail.file2
        )?;
    }

    writeln!(writer, "  elapsed:     {:.2}s", summary.elapsed_secs)?;
    if let Some(file) = &summary.log_file {
        writeln!(writer, "  log file:    {}", file.display())?;
    }

    Ok(())
}
