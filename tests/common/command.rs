use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::{Path, PathBuf};

/// A scratch directory holding the comparison root at `<tmp>/root`, so the
/// default log directory `<tmp>/file_diff_logs` stays inside the fixture.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn root(&self) -> PathBuf {
        self.dir.path().join("root")
    }

    pub fn folder(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.dir.path().join("file_diff_logs")
    }
}

#[fixture]
pub fn sandbox() -> Sandbox {
    let dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::create_dir_all(dir.path().join("root")).expect("Failed to create root folder");

    Sandbox { dir }
}

pub fn run_batchdiff(args: &[&str], root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("batchdiff").expect("Failed to find batchdiff binary");
    cmd.env_remove("RUST_LOG");
    for arg in args {
        cmd.arg(arg);
    }
    cmd.arg(root);
    cmd
}
