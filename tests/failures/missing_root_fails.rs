use crate::common::command::{Sandbox, run_batchdiff, sandbox};
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn missing_root_fails(sandbox: Sandbox) {
    let missing = sandbox.dir.path().join("does_not_exist");

    run_batchdiff(&["by-name"], &missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));

    assert!(!sandbox.log_dir().exists());
}
