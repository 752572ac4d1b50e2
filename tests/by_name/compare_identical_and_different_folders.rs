use crate::common::command::{Sandbox, run_batchdiff, sandbox};
use crate::common::file::{FileSpec, list_log_files, write_file, write_identical_pair};
use crate::common::{stderr_of, stdout_of};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn compare_identical_and_different_folders(
    sandbox: Sandbox,
) -> Result<(), Box<dyn std::error::Error>> {
    write_identical_pair(&sandbox.folder("a_same"), "file1.txt", "file2.txt");
    write_file(FileSpec::text(
        sandbox.folder("b_changed").join("file1.txt"),
        "G00 Z5\nG01 X10 Y20\nM30\n",
    ));
    write_file(FileSpec::text(
        sandbox.folder("b_changed").join("file2.txt"),
        "G00 Z5\nG01 X15 Y20\nM30\n",
    ));
    write_file(FileSpec::text(
        sandbox.folder("c_incomplete").join("file1.txt"),
        "lonely\n",
    ));

    let output = run_batchdiff(&["by-name", "--json"], &sandbox.root())
        .assert()
        .success()
        .get_output()
        .clone();

    let summary: serde_json::Value = serde_json::from_str(&stdout_of(&output))?;
    assert_eq!(summary["total_folders"], 3);
    assert_eq!(summary["compared_pairs"], 2);
    assert_eq!(summary["identical_pairs"], 1);
    assert_eq!(summary["different_pairs"], 1);
    assert_eq!(summary["error_pairs"], 0);
    assert_eq!(summary["total_differences"], 3);
    assert_eq!(summary["details"][0]["status"], "identical");
    assert_eq!(summary["details"][1]["folder"], "b_changed");
    assert_eq!(summary["details"][1]["differences"], 3);

    let stderr = stderr_of(&output);
    assert!(stderr.contains("WARN - c_incomplete: missing file(s): file2.txt"));
    assert!(stderr.contains("Result: files are identical"));

    let logs = list_log_files(&sandbox.log_dir());
    assert_eq!(logs.len(), 1);
    let log_name = logs[0]
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    assert!(
        summary["log_file"]
            .as_str()
            .is_some_and(|path| path.ends_with(&log_name))
    );

    let log = std::fs::read_to_string(&logs[0])?;
    assert!(log.contains("Result: 3 differences found"));
    assert!(log.contains("Difference #1: changed [line: 2] | content: G01 X10 Y20"));
    assert!(log.contains("    | changed to:       ^"));
    assert!(log.contains("Difference #3: added [line: 2] | content: G01 X15 Y20"));
    assert!(log.contains("Elapsed: "));

    Ok(())
}
