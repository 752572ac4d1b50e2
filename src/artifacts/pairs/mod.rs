//! File pair discovery rules
//!
//! - `pairing_rule`: fixed-name or per-extension selection of the two files in a folder
//! - `file_pair`: the selected pairs and the reasons a folder yielded none

pub mod file_pair;
pub mod pairing_rule;
