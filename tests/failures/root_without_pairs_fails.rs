use crate::common::command::{Sandbox, run_batchdiff, sandbox};
use crate::common::file::{FileSpec, list_log_files, write_file};
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn root_without_pairs_fails(sandbox: Sandbox) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::text(sandbox.folder("job1").join("only.nc"), "G00\n"));
    write_file(FileSpec::text(sandbox.folder("job2").join("notes.md"), "text\n"));

    run_batchdiff(&["by-ext"], &sandbox.root())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("WARN - job1: only one .nc file: only.nc"))
        .stderr(predicate::str::contains("ERROR - No valid file pairs found in"));

    let logs = list_log_files(&sandbox.log_dir());
    assert_eq!(logs.len(), 1);
    assert!(std::fs::read_to_string(&logs[0])?.contains("No valid file pairs found"));

    Ok(())
}
