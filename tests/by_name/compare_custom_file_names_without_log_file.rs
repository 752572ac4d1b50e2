use crate::common::command::{Sandbox, run_batchdiff, sandbox};
use crate::common::file::{FileSpec, write_file};
use crate::common::stdout_of;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn compare_custom_file_names_without_log_file(
    sandbox: Sandbox,
) -> Result<(), Box<dyn std::error::Error>> {
    let folder = sandbox.folder("job");
    write_file(FileSpec::text(folder.join("left.txt"), "one\ntwo\n"));
    write_file(FileSpec::text(folder.join("right.txt"), "one\n"));
    write_file(FileSpec::text(folder.join("file1.txt"), "ignored\n"));

    let output = run_batchdiff(
        &[
            "by-name",
            "--file1",
            "left.txt",
            "--file2",
            "right.txt",
            "--no-log-file",
        ],
        &sandbox.root(),
    )
    .assert()
    .success()
    .stderr(predicate::str::contains(
        "Difference #1: removed [line: 2] | content: two",
    ))
    .stderr(predicate::str::contains("Pairing rule: by name (left.txt, right.txt)"))
    .get_output()
    .clone();

    let stdout = stdout_of(&output);
    assert!(stdout.contains("  compared:    1"));
    assert!(stdout.contains("  job/left.txt <-> right.txt: 1 differences"));
    assert!(!stdout.contains("log file"));
    assert!(!sandbox.log_dir().exists());

    Ok(())
}
