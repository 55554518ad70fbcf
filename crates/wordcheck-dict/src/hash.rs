// Word-to-bucket hashing.

/// Multiplier of the polynomial rolling hash.
const HASH_MULTIPLIER: u32 = 37;

/// Polynomial rolling hash over the bytes of a word.
///
/// Arithmetic wraps, so arbitrarily long input never overflows. The value
/// depends only on the bytes, which makes it stable across runs.
pub fn word_hash(word: &[u8]) -> u32 {
    word.iter().fold(0u32, |hash, &b| {
        hash.wrapping_mul(HASH_MULTIPLIER).wrapping_add(u32::from(b))
    })
}

/// Map a word to a bucket index in `[0, bucket_count)`.
///
/// The bucket count does not need to be prime. A `bucket_count` of zero
/// returns `usize::MAX`, an index no store has; lookups against it report
/// "not found".
pub fn bucket_index(word: &[u8], bucket_count: usize) -> usize {
    if bucket_count == 0 {
        return usize::MAX;
    }
    word_hash(word) as usize % bucket_count
}
