// Shared enums and default limits.

/// Outcome of checking a single token.
///
/// Every variant maps onto the plain correct/misspelled answer through
/// [`Verdict::is_correct`]; the variant records which rule decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The normalized token is in the dictionary.
    Known,
    /// Not in the dictionary, but the normalized token is all digits.
    Number,
    /// Not in the dictionary, but the raw token has no word bytes at all.
    Punctuation,
    /// Not in the dictionary and not otherwise accepted.
    Unknown,
    /// The normalized token holds more than one apostrophe.
    TooManyApostrophes,
    /// The raw token was empty.
    Empty,
    /// The raw token was longer than the configured maximum.
    TooLong,
}

impl Verdict {
    /// Whether the token counts as correctly spelled.
    pub fn is_correct(self) -> bool {
        matches!(self, Verdict::Known | Verdict::Number | Verdict::Punctuation)
    }

    /// Short lowercase label, used by the command line tools.
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Known => "known",
            Verdict::Number => "number",
            Verdict::Punctuation => "punctuation",
            Verdict::Unknown => "unknown",
            Verdict::TooManyApostrophes => "too-many-apostrophes",
            Verdict::Empty => "empty",
            Verdict::TooLong => "too-long",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Default limits
// ---------------------------------------------------------------------------

/// Maximum number of bytes in a token or a word-list entry.
pub const MAX_WORD_LEN: usize = 45;

/// Number of buckets in a dictionary store.
pub const HASH_SIZE: usize = 2000;

/// Maximum number of misspelled words kept by a document scan. Words past
/// this are counted but not stored.
pub const MAX_MISSPELLED: usize = 1000;

/// Size of the line buffer used while scanning a document. Longer lines are
/// processed in chunks of `LINE_BUFFER_LEN - 1` bytes.
pub const LINE_BUFFER_LEN: usize = 1024;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepting_verdicts() {
        assert!(Verdict::Known.is_correct());
        assert!(Verdict::Number.is_correct());
        assert!(Verdict::Punctuation.is_correct());
    }

    #[test]
    fn rejecting_verdicts() {
        assert!(!Verdict::Unknown.is_correct());
        assert!(!Verdict::TooManyApostrophes.is_correct());
        assert!(!Verdict::Empty.is_correct());
        assert!(!Verdict::TooLong.is_correct());
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Verdict::TooManyApostrophes.to_string(), "too-many-apostrophes");
        assert_eq!(format!("{}", Verdict::Known), "known");
    }
}
