// Byte classification over the accepted word alphabet.
//
// Tokens and dictionary words are treated as raw bytes. Only ASCII has
// meaning here: every byte outside the ranges below is "other" and never
// part of the accepted alphabet.

// ---------------------------------------------------------------------------
// Byte type classification
// ---------------------------------------------------------------------------

/// Byte type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteType {
    Upper,
    Lower,
    Digit,
    Apostrophe,
    /// Anything outside the accepted alphabet (punctuation, whitespace,
    /// control bytes, non-ASCII).
    Other,
}

/// Returns the byte type for a given byte.
pub fn get_byte_type(b: u8) -> ByteType {
    if is_upper(b) {
        ByteType::Upper
    } else if is_lower(b) {
        ByteType::Lower
    } else if is_digit(b) {
        ByteType::Digit
    } else if is_apostrophe(b) {
        ByteType::Apostrophe
    } else {
        ByteType::Other
    }
}

/// Check whether a byte is an ASCII uppercase letter (`A`-`Z`).
pub fn is_upper(b: u8) -> bool {
    b.is_ascii_uppercase()
}

/// Check whether a byte is an ASCII lowercase letter (`a`-`z`).
pub fn is_lower(b: u8) -> bool {
    b.is_ascii_lowercase()
}

/// Check whether a byte is an ASCII digit (`0`-`9`).
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Check whether a byte is the ASCII apostrophe (`'`, 0x27).
///
/// Typographic quotes such as U+2019 are multi-byte sequences and are not
/// apostrophes for this purpose.
pub fn is_apostrophe(b: u8) -> bool {
    b == b'\''
}

/// Check whether a byte belongs to the accepted word alphabet: letters of
/// either case, the apostrophe, and digits.
///
/// Everything else counts as punctuation when classifying tokens.
pub fn is_word_byte(b: u8) -> bool {
    get_byte_type(b) != ByteType::Other
}

// ---------------------------------------------------------------------------
// Case conversion
// ---------------------------------------------------------------------------

/// Map an ASCII uppercase letter to lowercase; every other byte is returned
/// unchanged.
pub fn simple_lower(b: u8) -> u8 {
    if is_upper(b) { b + 32 } else { b }
}
