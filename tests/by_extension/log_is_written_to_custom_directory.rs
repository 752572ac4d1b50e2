use crate::common::command::{Sandbox, run_batchdiff, sandbox};
use crate::common::file::{list_log_files, write_identical_pair};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn log_is_written_to_custom_directory(sandbox: Sandbox) -> Result<(), Box<dyn std::error::Error>> {
    write_identical_pair(&sandbox.folder("job"), "first.dat", "second.dat");
    let custom = sandbox.dir.path().join("custom_logs");

    run_batchdiff(
        &[
            "by-ext",
            "-e",
            ".DAT",
            "--log-dir",
            &custom.display().to_string(),
        ],
        &sandbox.root(),
    )
    .assert()
    .success();

    let logs = list_log_files(&custom);
    assert_eq!(logs.len(), 1);
    assert!(!sandbox.log_dir().exists());

    let log = std::fs::read_to_string(&logs[0])?;
    assert!(log.contains("Pairing rule: by extension (.dat)"));
    assert!(log.contains("Comparing .dat files: first.dat <-> second.dat"));
    assert!(log.contains("Result: files are identical"));
    assert!(log.contains("└─ different: 0"));

    Ok(())
}
