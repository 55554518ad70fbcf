//! Dictionary storage for wordcheck.
//!
//! A dictionary is a set of known words, loaded once from a word list and
//! read-only afterwards.
//!
//! # Architecture
//!
//! - [`hash`] -- Deterministic word-to-bucket hashing
//! - [`reader`] -- Newline-delimited word-list reading with a length bound
//! - [`store`] -- The bucketed [`DictionaryStore`](store::DictionaryStore)

pub mod hash;
pub mod reader;
pub mod store;

use std::io;
use std::path::PathBuf;

pub use store::{DictionaryStore, StoreConfig, StoreStats};

/// Error type for dictionary loading.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("failed to open word list {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read word list: {0}")]
    Read(#[from] io::Error),
}

/// Membership test over a set of words.
///
/// Words are compared byte for byte; callers normalize before asking.
pub trait WordSet {
    /// Returns `true` if `word` is exactly one of the stored words.
    fn contains(&self, word: &[u8]) -> bool;
}

impl WordSet for hashbrown::HashSet<Vec<u8>> {
    fn contains(&self, word: &[u8]) -> bool {
        hashbrown::HashSet::contains(self, word)
    }
}

impl<S: WordSet + ?Sized> WordSet for &S {
    fn contains(&self, word: &[u8]) -> bool {
        (**self).contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_set_backend_matches_exact_bytes() {
        let set: hashbrown::HashSet<Vec<u8>> =
            ["apple", "can't"].iter().map(|w| w.as_bytes().to_vec()).collect();
        assert!(WordSet::contains(&set, b"apple"));
        assert!(WordSet::contains(&set, b"can't"));
        assert!(!WordSet::contains(&set, b"Apple"));
        assert!(!WordSet::contains(&set, b"appl"));
    }

    #[test]
    fn open_error_names_the_path() {
        let err = DictError::Open {
            path: PathBuf::from("/no/such/words.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/no/such/words.txt"));
    }
}
