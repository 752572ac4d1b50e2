//! Per-pair outcomes and the run-level summary folded from them.

pub mod outcome;
pub mod summary;
