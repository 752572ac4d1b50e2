use crate::common::command::{Sandbox, run_batchdiff, sandbox};
use crate::common::file::{FileSpec, write_file};
use crate::common::{stderr_of, stdout_of};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn latin1_pair_is_compared_after_fallback(
    sandbox: Sandbox,
) -> Result<(), Box<dyn std::error::Error>> {
    let folder = sandbox.folder("job");
    write_file(FileSpec::new(
        folder.join("a.txt"),
        b"T1 ; caf\xe9\nM30\n".to_vec(),
    ));
    write_file(FileSpec::new(
        folder.join("b.txt"),
        b"T1 ; caf\xe9\nM30\n".to_vec(),
    ));
    write_file(FileSpec::new(
        folder.join("c.nc"),
        b"T2 ; caf\xe9\n".to_vec(),
    ));
    write_file(FileSpec::text(folder.join("d.nc"), "T2 ; café\n"));

    let output = run_batchdiff(&["by-ext", "--json", "--no-log-file"], &sandbox.root())
        .assert()
        .success()
        .get_output()
        .clone();

    let summary: serde_json::Value = serde_json::from_str(&stdout_of(&output))?;
    assert_eq!(summary["compared_pairs"], 2);
    assert_eq!(summary["error_pairs"], 0);
    assert_eq!(summary["details"][0]["category"]["extension"], ".nc");
    assert_eq!(summary["details"][0]["status"], "different");
    assert_eq!(summary["details"][1]["category"]["extension"], ".txt");
    assert_eq!(summary["details"][1]["status"], "identical");

    let stderr = stderr_of(&output);
    assert!(stderr.contains("c.nc or d.nc is not valid UTF-8, both were read as latin-1"));
    assert!(stderr.contains("a.txt or b.txt is not valid UTF-8, both were read as latin-1"));

    Ok(())
}
