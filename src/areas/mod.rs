//! Components that touch the outside world during a run
//!
//! - `comparator`: coordinates one run over the sub-folders of a root
//! - `run_log`: timestamped report written to the console and a log file
//! - `workspace`: folder listing and file reading below the root

pub mod comparator;
pub mod run_log;
pub mod workspace;
