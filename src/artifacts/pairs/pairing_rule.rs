use crate::artifacts::pairs::file_pair::{FilePair, FolderSelection, MissingPair, PairCategory};
use serde::Serialize;
use std::fmt::Display;
use std::path::Path;

pub const DEFAULT_FILE1: &str = "file1.txt";
pub const DEFAULT_FILE2: &str = "file2.txt";
pub const DEFAULT_EXTENSIONS: [&str; 2] = [".nc", ".txt"];

/// How the two files to compare are picked inside each sibling folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PairingRule {
    ByName { file1: String, file2: String },
    ByExtension { extensions: Vec<String> },
}

impl Default for PairingRule {
    fn default() -> Self {
        PairingRule::by_name(DEFAULT_FILE1, DEFAULT_FILE2)
    }
}

impl PairingRule {
    pub fn by_name(file1: impl Into<String>, file2: impl Into<String>) -> Self {
        PairingRule::ByName {
            file1: file1.into(),
            file2: file2.into(),
        }
    }

    /// Extensions are matched case-insensitively; a missing leading dot is added.
    pub fn by_extension<S: AsRef<str>>(extensions: impl IntoIterator<Item = S>) -> Self {
        let mut normalized: Vec<String> = Vec::new();
        for extension in extensions {
            let extension = extension.as_ref().trim().to_lowercase();
            if extension.is_empty() {
                continue;
            }

            let extension = if extension.starts_with('.') {
                extension
            } else {
                format!(".{extension}")
            };
            if !normalized.contains(&extension) {
                normalized.push(extension);
            }
        }

        PairingRule::ByExtension {
            extensions: normalized,
        }
    }

    /// Picks the file pairs of one folder from its (sorted) file names.
    pub fn select(&self, folder: &str, folder_path: &Path, files: &[String]) -> FolderSelection {
        let mut selection = FolderSelection::new(folder.to_string(), folder_path.to_path_buf());

        match self {
            PairingRule::ByName { file1, file2 } => {
                let missing = [file1, file2]
                    .into_iter()
                    .filter(|name| !files.contains(name))
                    .cloned()
                    .collect::<Vec<_>>();

                if missing.is_empty() {
                    selection.pairs.push(FilePair::new(
                        folder.to_string(),
                        PairCategory::Names,
                        folder_path.join(file1),
                        folder_path.join(file2),
                    ));
                } else {
                    selection.missing.push(MissingPair::Names { missing });
                }
            }
            PairingRule::ByExtension { extensions } => {
                let mut buckets = vec![Vec::new(); extensions.len()];
                for file in files {
                    let lowered = file.to_lowercase();
                    if let Some(idx) = extensions.iter().position(|ext| lowered.ends_with(ext)) {
                        buckets[idx].push(file.clone());
                    }
                }

                for (extension, mut bucket) in extensions.iter().zip(buckets) {
                    bucket.sort();
                    selection.counts.push((extension.clone(), bucket.len()));

                    match bucket.as_slice() {
                        [] => {}
                        [single] => selection.missing.push(MissingPair::SingleFile {
                            extension: extension.clone(),
                            file: single.clone(),
                        }),
                        [first, second, ..] => selection.pairs.push(FilePair::new(
                            folder.to_string(),
                            PairCategory::Extension(extension.clone()),
                            folder_path.join(first),
                            folder_path.join(second),
                        )),
                    }
                }
            }
        }

        selection
    }
}

impl Display for PairingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PairingRule::ByName { file1, file2 } => write!(f, "by name ({file1}, {file2})"),
            PairingRule::ByExtension { extensions } => {
                write!(f, "by extension ({})", extensions.join(", "))
            }
        }
    }
}
