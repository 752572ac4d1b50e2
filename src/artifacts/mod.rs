//! Data structures and algorithms of a comparison run
//!
//! - `diff`: line alignment (Myers' diff plus intraline hints) and difference classification
//! - `pairs`: pairing rules and the file pairs they select per folder
//! - `report`: per-pair outcomes and the run summary
//! - `text`: byte decoding and line splitting

pub mod diff;
pub mod pairs;
pub mod report;
pub mod text;
