use crate::common::command::{Sandbox, run_batchdiff, sandbox};
use crate::common::file::{FileSpec, generate_lines, write_file};
use crate::common::{stderr_of, stdout_of};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn folder_with_single_file_is_skipped(sandbox: Sandbox) -> Result<(), Box<dyn std::error::Error>> {
    let lines = generate_lines(5);
    let mut edited = lines.clone();
    edited.push("M30\n".to_string());

    write_file(FileSpec::text(sandbox.folder("job1").join("a.nc"), &lines.concat()));
    write_file(FileSpec::text(sandbox.folder("job1").join("b.nc"), &edited.concat()));
    write_file(FileSpec::text(sandbox.folder("job2").join("x.nc"), &lines.concat()));

    let output = run_batchdiff(&["by-ext", "--json", "--no-log-file"], &sandbox.root())
        .assert()
        .success()
        .get_output()
        .clone();

    let summary: serde_json::Value = serde_json::from_str(&stdout_of(&output))?;
    assert_eq!(summary["total_folders"], 2);
    assert_eq!(summary["compared_pairs"], 1);
    assert_eq!(summary["different_pairs"], 1);
    assert_eq!(summary["total_differences"], 1);
    assert_eq!(summary["details"][0]["folder"], "job1");
    assert_eq!(summary["details"][0]["category"]["extension"], ".nc");
    assert_eq!(summary["rule"]["mode"], "by_extension");

    let stderr = stderr_of(&output);
    assert!(stderr.contains("WARN - job2: only one .nc file: x.nc"));
    assert!(stderr.contains("Difference #1: added [line: 6] | content: M30"));
    assert!(stderr.contains("  - job1 (.nc: 2, .txt: 0)"));
    assert!(stderr.contains("  - job2 (.nc: 1, .txt: 0)"));

    Ok(())
}
