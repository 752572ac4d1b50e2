//! Line alignment and difference classification
//!
//! - `myers`: Myers' shortest edit script over any slice, plus opcode grouping
//! - `intraline`: character-level similarity used to pair near-identical lines
//! - `aligner`: line sequences -> ordered alignment records (common/removed/added/hint)
//! - `classifier`: alignment records -> removed/added/changed differences with line numbers
//!
//! Everything here is pure: no I/O and no logging.

pub mod aligner;
pub mod classifier;
pub mod intraline;
pub mod myers;
