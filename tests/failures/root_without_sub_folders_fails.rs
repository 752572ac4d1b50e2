use crate::common::command::{Sandbox, run_batchdiff, sandbox};
use crate::common::file::{FileSpec, write_file};
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn root_without_sub_folders_fails(sandbox: Sandbox) {
    write_file(FileSpec::text(sandbox.root().join("file1.txt"), "a\n"));
    write_file(FileSpec::text(sandbox.root().join("file2.txt"), "b\n"));

    run_batchdiff(&["by-name", "--no-log-file"], &sandbox.root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("ERROR - No sub-folders found in"))
        .stderr(predicate::str::contains("Nothing was compared"));
}
