use derive_new::new;
use serde::Serialize;
use std::fmt::Display;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PairCategory {
    Names,
    Extension(String),
}

impl Display for PairCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PairCategory::Names => write!(f, "fixed names"),
            PairCategory::Extension(extension) => write!(f, "{extension} files"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct FilePair {
    pub folder: String,
    pub category: PairCategory,
    pub first: PathBuf,
    pub second: PathBuf,
}

impl FilePair {
    pub fn first_name(&self) -> String {
        file_name(&self.first)
    }

    pub fn second_name(&self) -> String {
        file_name(&self.second)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Why a folder (or one extension inside it) produced no pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingPair {
    Names { missing: Vec<String> },
    SingleFile { extension: String, file: String },
}

impl Display for MissingPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingPair::Names { missing } => {
                write!(f, "missing file(s): {}", missing.join(", "))
            }
            MissingPair::SingleFile { extension, file } => {
                write!(f, "only one {extension} file: {file}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderSelection {
    pub folder: String,
    pub path: PathBuf,
    pub pairs: Vec<FilePair>,
    pub missing: Vec<MissingPair>,
    /// Files found per extension, in configured order; empty for name pairing.
    pub counts: Vec<(String, usize)>,
}

impl FolderSelection {
    pub fn new(folder: String, path: PathBuf) -> Self {
        Self {
            folder,
            path,
            pairs: Vec::new(),
            missing: Vec::new(),
            counts: Vec::new(),
        }
    }

    pub fn has_pairs(&self) -> bool {
        !self.pairs.is_empty()
    }
}
