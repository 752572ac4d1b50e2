//! Text input: line sets and the UTF-8 / Latin-1 decoding policy.

pub mod encoding;
pub mod line_set;
