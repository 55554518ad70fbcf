// Token classification independent of the dictionary.

use wordcheck_core::character::{is_apostrophe, is_digit, is_word_byte};

/// `true` if every byte is an ASCII digit. Vacuously `true` for an empty
/// word.
pub fn all_numbers(word: &[u8]) -> bool {
    word.iter().all(|&b| is_digit(b))
}

/// `true` if no byte belongs to the word alphabet (letters, digits,
/// apostrophe). Vacuously `true` for an empty word.
pub fn all_punctuation(word: &[u8]) -> bool {
    !word.iter().any(|&b| is_word_byte(b))
}

/// Number of ASCII apostrophes in `word`.
pub fn count_apostrophes(word: &[u8]) -> usize {
    word.iter().filter(|&&b| is_apostrophe(b)).count()
}
