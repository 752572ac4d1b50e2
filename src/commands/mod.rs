//! Run-level operations on a [`BatchComparator`](crate::areas::comparator::BatchComparator)
//!
//! - `compare`: folder discovery, pair selection and the per-pair comparison loop
//! - `report`: rendering of run progress into the run log and the final summary

pub mod compare;
pub mod report;
