// Token normalization: ASCII case folding and trailing-punctuation trimming.

use std::fmt;

use serde::{Serialize, Serializer};
use wordcheck_core::character::{is_word_byte, simple_lower};

/// A token after [`normalize`]: lowercase ASCII letters, with every trailing
/// byte outside the word alphabet removed.
///
/// Bytes are kept as-is, so a normalized word is not necessarily valid
/// UTF-8. `Display` and `Serialize` render it lossily.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NormalizedWord(Vec<u8>);

impl NormalizedWord {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for NormalizedWord {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for NormalizedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl PartialEq<&str> for NormalizedWord {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl Serialize for NormalizedWord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf8_lossy(&self.0))
    }
}

/// Normalize a raw token.
///
/// Every ASCII uppercase letter becomes lowercase; all other bytes pass
/// through. Then bytes that are not letters, digits, or apostrophes are
/// dropped from the end, stopping at the last word byte. Leading and inner
/// punctuation stay. A token made only of punctuation normalizes to the
/// empty word.
///
/// The trim decision reads `raw`, not the folded copy. Folding never moves
/// a byte in or out of the word alphabet, so both give the same cut.
pub fn normalize(raw: &[u8]) -> NormalizedWord {
    let keep = raw
        .iter()
        .rposition(|&b| is_word_byte(b))
        .map_or(0, |last| last + 1);
    NormalizedWord(raw[..keep].iter().map(|&b| simple_lower(b)).collect())
}
