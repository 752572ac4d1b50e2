use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: Vec<u8>,
}

impl FileSpec {
    pub fn text(path: PathBuf, content: &str) -> Self {
        FileSpec::new(path, content.as_bytes().to_vec())
    }
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

pub fn create_directory(path: &Path) {
    std::fs::create_dir_all(path)
        .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", path, e));
}

/// Random lines of lorem words, each ending with a newline.
pub fn generate_lines(count: usize) -> Vec<String> {
    use fake::{Fake, faker::lorem::en::Words};

    (0..count)
        .map(|_| format!("{}\n", Words(3..6).fake::<Vec<String>>().join(" ")))
        .collect::<Vec<_>>()
}

/// Writes the same random content to both files of a folder.
pub fn write_identical_pair(folder: &Path, first: &str, second: &str) -> String {
    let content = generate_lines(8).concat();

    write_file(FileSpec::text(folder.join(first), &content));
    write_file(FileSpec::text(folder.join(second), &content));

    content
}

/// Lists the run logs written below `dir`.
pub fn list_log_files(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut files = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().starts_with("batch_diff_"))
                .unwrap_or(false)
        })
        .collect::<Vec<_>>();
    files.sort();

    files
}
