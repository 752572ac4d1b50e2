use crate::artifacts::text::line_set::LineSet;
use derive_new::new;
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextEncoding {
    #[default]
    Utf8,
    /// ISO-8859-1: every byte maps to the code point of the same value.
    Latin1,
}

impl TextEncoding {
    pub fn decode(&self, bytes: &[u8]) -> Decoded {
        match self {
            TextEncoding::Utf8 => match std::str::from_utf8(bytes) {
                Ok(text) => Decoded::Text(LineSet::parse(text)),
                Err(e) => Decoded::Malformed {
                    valid_up_to: e.valid_up_to(),
                },
            },
            TextEncoding::Latin1 => Decoded::Text(decode_latin1(bytes)),
        }
    }
}

impl Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextEncoding::Utf8 => write!(f, "utf-8"),
            TextEncoding::Latin1 => write!(f, "latin-1"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Text(LineSet),
    Malformed { valid_up_to: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DecodedPair {
    pub first: LineSet,
    pub second: LineSet,
    pub encoding: TextEncoding,
}

fn decode_latin1(bytes: &[u8]) -> LineSet {
    let text = bytes.iter().copied().map(char::from).collect::<String>();
    LineSet::parse(&text)
}

/// Decodes both files of a pair with the same encoding.
///
/// UTF-8 is tried on both; if either is malformed, both are decoded as Latin-1.
pub fn decode_pair(first: &[u8], second: &[u8]) -> DecodedPair {
    match (
        TextEncoding::Utf8.decode(first),
        TextEncoding::Utf8.decode(second),
    ) {
        (Decoded::Text(first), Decoded::Text(second)) => {
            DecodedPair::new(first, second, TextEncoding::Utf8)
        }
        _ => DecodedPair::new(
            decode_latin1(first),
            decode_latin1(second),
            TextEncoding::Latin1,
        ),
    }
}
