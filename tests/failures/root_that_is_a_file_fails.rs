use crate::common::command::{Sandbox, run_batchdiff, sandbox};
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn root_that_is_a_file_fails(sandbox: Sandbox) {
    let file = sandbox.dir.path().join("notes.txt");
    std::fs::write(&file, "not a folder\n").expect("Failed to write file");

    run_batchdiff(&["by-name"], &file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a folder"));

    assert!(!sandbox.log_dir().exists());
}
