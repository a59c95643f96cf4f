//! Code point key type
//!
//! Every map in the index is keyed by [`CodePoint`]. Its canonical text form
//! is uppercase hexadecimal, zero-padded to at least four digits, with no
//! `U+` prefix (`0041`, `1F600`). Because the key is numeric, sources that
//! spell the same code point differently (`0041`, `41`, `0041 `) join on the
//! same entry.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A Unicode code point in the range `0..=0x10FFFF`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodePoint(u32);

impl CodePoint {
    /// Largest valid code point
    pub const MAX: u32 = 0x10FFFF;

    /// Create a code point, rejecting values above [`CodePoint::MAX`]
    #[inline]
    pub fn new(value: u32) -> Option<Self> {
        if value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Code point of a character
    #[inline]
    pub fn from_char(c: char) -> Self {
        Self(c as u32)
    }

    /// Parse bare hexadecimal text such as `"0041"` or `"1f600"`.
    ///
    /// Surrounding whitespace is ignored. Signs, prefixes and empty input are
    /// rejected.
    pub fn from_hex(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() || text.len() > 8 || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(text, 16).ok().and_then(Self::new)
    }

    /// Numeric value
    #[inline]
    pub fn value(self) -> u32 {
        self.0
    }

    /// The character this code point encodes, or `None` for surrogates
    #[inline]
    pub fn to_char(self) -> Option<char> {
        char::from_u32(self.0)
    }

    /// Canonical hex form (same as `Display`)
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// `U+XXXX` form used by the exporters
    pub fn to_prefixed(self) -> String {
        format!("U+{}", self)
    }
}

impl fmt::Display for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}

impl From<char> for CodePoint {
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}

/// Error returned when text is not a code point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCodePointError {
    /// The rejected input
    pub input: String,
}

impl fmt::Display for ParseCodePointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid code point: {:?}", self.input)
    }
}

impl std::error::Error for ParseCodePointError {}

impl FromStr for CodePoint {
    type Err = ParseCodePointError;

    /// Accepts the canonical form and the `U+` prefixed form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed
            .strip_prefix("U+")
            .or_else(|| trimmed.strip_prefix("u+"))
            .unwrap_or(trimmed);
        Self::from_hex(hex).ok_or_else(|| ParseCodePointError {
            input: s.to_string(),
        })
    }
}

impl Serialize for CodePoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CodePoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
