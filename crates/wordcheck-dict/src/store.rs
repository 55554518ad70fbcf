// Bucketed dictionary store.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use wordcheck_core::enums::{HASH_SIZE, MAX_WORD_LEN};

use crate::hash::bucket_index;
use crate::reader::read_words;
use crate::{DictError, WordSet};

/// Construction parameters for a [`DictionaryStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Number of buckets. Zero is treated as one.
    pub bucket_count: usize,
    /// Word-list lines longer than this many bytes are skipped.
    pub max_word_len: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            bucket_count: HASH_SIZE,
            max_word_len: MAX_WORD_LEN,
        }
    }
}

/// Occupancy figures for a store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub words: usize,
    pub buckets: usize,
    pub occupied_buckets: usize,
    pub longest_chain: usize,
}

/// A fixed number of buckets, each owning the words that hash to it.
///
/// Words are appended to their bucket and scanned from the back, so the
/// most recently inserted entry is found first. Duplicate words are kept
/// as separate entries; membership stops at the first match so duplicates
/// never change an answer.
///
/// Every entry lives in the bucket given by [`bucket_index`] of its own
/// bytes. Once built the store is only read, so a shared reference can be
/// handed to any number of checkers.
#[derive(Debug, Clone)]
pub struct DictionaryStore {
    buckets: Vec<Vec<Box<[u8]>>>,
    len: usize,
    config: StoreConfig,
}

impl DictionaryStore {
    /// Create an empty store.
    pub fn new(config: StoreConfig) -> Self {
        let config = StoreConfig {
            bucket_count: config.bucket_count.max(1),
            ..config
        };
        Self {
            buckets: vec![Vec::new(); config.bucket_count],
            len: 0,
            config,
        }
    }

    /// Load a word list from `path` with the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictError> {
        Self::load_with(path, StoreConfig::default())
    }

    /// Load a word list from `path`.
    ///
    /// Fails only if the file cannot be opened or read. An empty file
    /// produces an empty store.
    pub fn load_with(path: impl AsRef<Path>, config: StoreConfig) -> Result<Self, DictError> {
        let file = open(path.as_ref())?;
        Self::from_reader(BufReader::new(file), config)
    }

    /// Build a store from any buffered reader holding a word list.
    pub fn from_reader<R: BufRead>(reader: R, config: StoreConfig) -> Result<Self, DictError> {
        let mut store = Self::new(config);
        let summary = read_words(reader, store.config.max_word_len, |word| store.insert(word))?;
        let stats = store.stats();
        debug!(
            "dictionary loaded: {} words ({} empty, {} overlong lines skipped), \
             {}/{} buckets occupied, longest chain {}",
            stats.words,
            summary.empty,
            summary.too_long,
            stats.occupied_buckets,
            stats.buckets,
            stats.longest_chain
        );
        Ok(store)
    }

    /// Build a store from in-memory words with the default configuration.
    pub fn from_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<[u8]>,
    {
        let mut store = Self::new(StoreConfig::default());
        for word in words {
            store.insert(word.as_ref());
        }
        store
    }

    /// Replace the contents of this store with the word list at `path`.
    ///
    /// If the file cannot be opened or read, the store is left exactly as
    /// it was.
    pub fn reload(&mut self, path: impl AsRef<Path>) -> Result<(), DictError> {
        let file = open(path.as_ref())?;
        *self = Self::from_reader(BufReader::new(file), self.config)?;
        Ok(())
    }

    /// Release every entry. The bucket array stays allocated and empty.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            *bucket = Vec::new();
        }
        self.len = 0;
    }

    fn insert(&mut self, word: &[u8]) {
        let bucket = bucket_index(word, self.buckets.len());
        self.buckets[bucket].push(word.into());
        self.len += 1;
    }

    /// Scan one bucket for an exact match.
    ///
    /// An index outside the bucket array reports `false`.
    pub fn lookup_in_bucket(&self, bucket: usize, word: &[u8]) -> bool {
        match self.buckets.get(bucket) {
            Some(entries) => entries.iter().rev().any(|entry| **entry == *word),
            None => false,
        }
    }

    /// Entries of one bucket, most recently inserted first. Empty for an
    /// out-of-range index.
    pub fn bucket_entries(&self, bucket: usize) -> impl Iterator<Item = &[u8]> {
        self.buckets
            .get(bucket)
            .into_iter()
            .flat_map(|entries| entries.iter().rev().map(|e| &**e))
    }

    /// Number of stored entries, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn config(&self) -> StoreConfig {
        self.config
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            words: self.len,
            buckets: self.buckets.len(),
            occupied_buckets: self.buckets.iter().filter(|b| !b.is_empty()).count(),
            longest_chain: self.buckets.iter().map(Vec::len).max().unwrap_or(0),
        }
    }
}

impl Default for DictionaryStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl WordSet for DictionaryStore {
    fn contains(&self, word: &[u8]) -> bool {
        self.lookup_in_bucket(bucket_index(word, self.buckets.len()), word)
    }
}

fn open(path: &Path) -> Result<File, DictError> {
    File::open(path).map_err(|source| DictError::Open {
        path: path.to_path_buf(),
        source,
    })
}
