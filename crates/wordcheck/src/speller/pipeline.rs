// Per-token spell check pipeline.

use wordcheck_core::enums::{LINE_BUFFER_LEN, MAX_MISSPELLED, MAX_WORD_LEN, Verdict};
use wordcheck_dict::WordSet;

use crate::classifier::{all_numbers, all_punctuation, count_apostrophes};
use crate::normalizer::normalize;

/// Options controlling how tokens and documents are checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    /// Tokens longer than this many bytes are rejected outright.
    pub max_word_len: usize,
    /// How many misspelled words a document scan keeps. `None` keeps all
    /// of them; with `Some(n)` later ones are only counted.
    pub misspelled_capacity: Option<usize>,
    /// Line buffer size for document scans. Lines longer than
    /// `line_buffer_len - 1` bytes are checked in chunks of that size.
    pub line_buffer_len: usize,
    /// Split document lines on any ASCII whitespace instead of only on
    /// the space byte.
    pub split_on_any_whitespace: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            max_word_len: MAX_WORD_LEN,
            misspelled_capacity: Some(MAX_MISSPELLED),
            line_buffer_len: LINE_BUFFER_LEN,
            split_on_any_whitespace: false,
        }
    }
}

/// Decide whether a raw token is correctly spelled, and why.
///
/// 1. Empty tokens and tokens longer than `max_word_len` are rejected.
/// 2. The token is normalized and looked up in `words`.
/// 3. Otherwise it is accepted if the raw token has no word bytes at all,
///    or if the normalized token is all digits.
/// 4. More than one apostrophe in the normalized token rejects it,
///    whatever the earlier steps decided, unless the raw token is all
///    punctuation.
pub fn verdict<S: WordSet + ?Sized>(token: &[u8], words: &S, options: &CheckOptions) -> Verdict {
    if token.is_empty() {
        return Verdict::Empty;
    }
    if token.len() > options.max_word_len {
        return Verdict::TooLong;
    }

    let normalized = normalize(token);
    let punctuation = all_punctuation(token);

    // A punctuation-only token normalizes to the empty word, which is also
    // vacuously all digits, so punctuation is tested first to name it.
    let verdict = if words.contains(normalized.as_bytes()) {
        Verdict::Known
    } else if punctuation {
        Verdict::Punctuation
    } else if all_numbers(normalized.as_bytes()) {
        Verdict::Number
    } else {
        Verdict::Unknown
    };

    if count_apostrophes(normalized.as_bytes()) > 1 && !punctuation {
        return Verdict::TooManyApostrophes;
    }
    verdict
}

/// `true` if `token` is correctly spelled.
pub fn check_word<S: WordSet + ?Sized>(token: &[u8], words: &S, options: &CheckOptions) -> bool {
    verdict(token, words, options).is_correct()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordcheck_dict::DictionaryStore;

    fn dict() -> DictionaryStore {
        DictionaryStore::from_words(["apple", "can't", "dogs'", "rock'n'roll", "o'clock", "42"])
    }

    fn check(token: &str) -> bool {
        check_word(token.as_bytes(), &dict(), &CheckOptions::default())
    }

    fn why(token: &str) -> Verdict {
        verdict(token.as_bytes(), &dict(), &CheckOptions::default())
    }

    #[test]
    fn known_words_are_correct() {
        assert!(check("apple"));
        assert!(check("can't"));
        assert!(check("dogs'"));
        assert_eq!(why("apple"), Verdict::Known);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(check("APPLE"), check("apple"));
        assert!(check("Apple"));
        assert!(check("CAN'T"));
    }

    #[test]
    fn trailing_punctuation_is_ignored() {
        assert_eq!(why("apple."), why("apple"));
        assert!(check("apple,"));
        assert!(check("apple?!\""));
    }

    #[test]
    fn leading_punctuation_is_not_ignored() {
        assert!(!check("(apple"));
        assert!(!check("\"apple\""));
    }

    #[test]
    fn unknown_words_are_misspelled() {
        assert!(!check("appel"));
        assert_eq!(why("appel"), Verdict::Unknown);
    }

    #[test]
    fn numbers_are_accepted() {
        assert!(check("1234"));
        assert!(check("2024."));
        assert_eq!(why("1234"), Verdict::Number);
        assert_eq!(why("42"), Verdict::Known);
        assert!(!check("12ab"));
        assert!(!check("1,000"));
    }

    #[test]
    fn punctuation_is_accepted() {
        for token in ["...", "--", "!!", "-", "?", "\u{2014}"] {
            assert!(check(token), "{token:?}");
            assert_eq!(why(token), Verdict::Punctuation);
        }
    }

    #[test]
    fn more_than_one_apostrophe_is_rejected() {
        assert!(!check("can''t"));
        assert_eq!(why("can''t"), Verdict::TooManyApostrophes);
        assert!(!check("''"));
    }

    #[test]
    fn apostrophe_rule_overrides_dictionary() {
        // in the word list, but still two apostrophes
        assert!(!check("rock'n'roll"));
        assert!(check("o'clock"));
    }

    #[test]
    fn apostrophe_rule_overrides_numbers() {
        assert!(!check("1'2'3"));
    }

    #[test]
    fn apostrophes_are_counted_after_normalization() {
        // trailing apostrophes survive normalization
        assert!(!check("dogs''"));
        // apostrophe hidden behind trailing punctuation still counts
        assert!(!check("can't'."));
    }

    #[test]
    fn empty_token_is_rejected() {
        assert!(!check(""));
        assert_eq!(why(""), Verdict::Empty);
    }

    #[test]
    fn length_limit() {
        let at_limit = "1".repeat(MAX_WORD_LEN);
        let over = "1".repeat(MAX_WORD_LEN + 1);
        assert!(check(&at_limit));
        assert!(!check(&over));
        assert_eq!(why(&over), Verdict::TooLong);
    }

    #[test]
    fn overlong_tokens_fail_even_when_known() {
        let long = "a".repeat(60);
        let words = DictionaryStore::from_words([long.as_str()]);
        let options = CheckOptions::default();
        assert!(!check_word(long.as_bytes(), &words, &options));

        let relaxed = CheckOptions {
            max_word_len: 100,
            ..CheckOptions::default()
        };
        assert!(check_word(long.as_bytes(), &words, &relaxed));
    }

    #[test]
    fn overlong_punctuation_is_rejected() {
        let dots = ".".repeat(MAX_WORD_LEN + 1);
        assert!(!check(&dots));
    }

    #[test]
    fn works_with_hash_set_backend() {
        let set: hashbrown::HashSet<Vec<u8>> = [b"apple".to_vec()].into_iter().collect();
        assert!(check_word(b"Apple.", &set, &CheckOptions::default()));
        assert!(!check_word(b"pear", &set, &CheckOptions::default()));
    }

    #[test]
    fn empty_dictionary_still_accepts_numbers_and_punctuation() {
        let empty = DictionaryStore::default();
        let options = CheckOptions::default();
        assert!(check_word(b"1234", &empty, &options));
        assert!(check_word(b"...", &empty, &options));
        assert!(!check_word(b"apple", &empty, &options));
    }
}
