use crate::artifacts::pairs::file_pair::FilePair;
use crate::artifacts::text::encoding::{DecodedPair, decode_pair};
use anyhow::Context;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File-system access below the comparison root.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Immediate sub-directories of the root, sorted by name.
    pub fn list_folders(&self) -> anyhow::Result<Vec<PathBuf>> {
        if !self.path.is_dir() {
            anyhow::bail!("The specified path is not a directory: {:?}", self.path);
        }

        Ok(WalkDir::new(&self.path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_dir())
            .map(|entry| entry.into_path())
            .collect::<Vec<_>>())
    }

    /// Names of the regular files directly inside `folder`, sorted.
    pub fn list_files(&self, folder: &Path) -> anyhow::Result<Vec<String>> {
        let mut files = WalkDir::new(folder)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect::<Vec<_>>();
        files.sort();

        Ok(files)
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Vec<u8>> {
        let file_path = self.path.join(file_path);

        std::fs::read(&file_path)
            .with_context(|| format!("Failed to read file {}", file_path.display()))
    }

    /// Reads both files of a pair once and decodes them with a shared encoding.
    pub fn read_pair(&self, pair: &FilePair) -> anyhow::Result<DecodedPair> {
        let first = self.read_file(&pair.first)?;
        let second = self.read_file(&pair.second)?;

        Ok(decode_pair(&first, &second))
    }
}
