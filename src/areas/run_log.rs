use anyhow::Context;
use chrono::Local;
use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const LOG_DIR_NAME: &str = "file_diff_logs";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Info => write!(f, "INFO"),
            Level::Warn => write!(f, "WARN"),
            Level::Error => write!(f, "ERROR"),
        }
    }
}

/// Append-only, timestamped report of a comparison run.
///
/// Every line goes to all sinks (typically the console and a log file). The
/// handle is created when the run starts and consumed by [`RunLog::finish`].
pub struct RunLog {
    sinks: Vec<Box<dyn Write>>,
    file: Option<PathBuf>,
}

impl RunLog {
    pub fn new(sinks: Vec<Box<dyn Write>>) -> Self {
        RunLog { sinks, file: None }
    }

    /// Adds a `batch_diff_<timestamp>.log` file inside `dir` to the sinks.
    pub fn with_file_in(mut self, dir: &Path) -> anyhow::Result<Self> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

        let file_path = dir.join(format!(
            "batch_diff_{}.log",
            Local::now().format("%Y%m%d_%H%M%S")
        ));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file_path)
            .with_context(|| format!("Failed to open log file {}", file_path.display()))?;

        self.sinks.push(Box::new(io::BufWriter::new(file)));
        self.file = Some(file_path);

        Ok(self)
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn info(&mut self, message: impl Display) -> anyhow::Result<()> {
        self.write_line(Level::Info, message)
    }

    pub fn warn(&mut self, message: impl Display) -> anyhow::Result<()> {
        self.write_line(Level::Warn, message)
    }

    pub fn error(&mut self, message: impl Display) -> anyhow::Result<()> {
        self.write_line(Level::Error, message)
    }

    pub fn rule(&mut self, ch: char, width: usize) -> anyhow::Result<()> {
        self.info(ch.to_string().repeat(width))
    }

    fn write_line(&mut self, level: Level, message: impl Display) -> anyhow::Result<()> {
        let line = format!(
            "{} - {} - {}",
            Local::now().format(TIMESTAMP_FORMAT),
            level,
            message
        );

        for sink in self.sinks.iter_mut() {
            writeln!(sink, "{line}")?;
        }

        Ok(())
    }

    pub fn finish(mut self) -> anyhow::Result<Option<PathBuf>> {
        for sink in self.sinks.iter_mut() {
            sink.flush()?;
        }

        Ok(self.file.take())
    }
}

/// In-memory sink whose contents stay readable after it is handed to a [`RunLog`].
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: std::rc::Rc<std::cell::RefCell<Vec<u8>>>,
}

#[cfg(test)]
impl MemorySink {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.borrow()).into_owned()
    }
}

#[cfg(test)]
impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
