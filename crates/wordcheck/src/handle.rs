// SpellHandle: top-level entry point for spell checking.
//
// Owns a word set and the check options, and exposes single-token checks
// and document scans. The word set is never written after construction, so
// a handle can be shared by reference between threads.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::info;
use wordcheck_core::enums::Verdict;
use wordcheck_dict::{DictError, DictionaryStore, StoreConfig, WordSet};

use crate::speller::document::{self, DocumentReport};
use crate::speller::pipeline::{self, CheckOptions};

/// Error type for SpellHandle operations.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The word list could not be loaded.
    #[error(transparent)]
    Dictionary(#[from] DictError),

    /// The document to check could not be opened.
    #[error("failed to open document {}: {source}", path.display())]
    DocumentOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading the document failed part way through.
    #[error("failed to read document: {0}")]
    DocumentRead(#[from] io::Error),
}

/// Handle owning a word set and the options used to check against it.
#[derive(Debug, Clone)]
pub struct SpellHandle<S = DictionaryStore> {
    words: S,
    options: CheckOptions,
}

impl SpellHandle<DictionaryStore> {
    /// Load the word list at `path` with default options.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CheckError> {
        Self::from_path_with(path, CheckOptions::default())
    }

    /// Load the word list at `path`.
    ///
    /// Word-list lines longer than `options.max_word_len` are skipped, as
    /// no token that long can ever be accepted.
    pub fn from_path_with(path: impl AsRef<Path>, options: CheckOptions) -> Result<Self, CheckError> {
        let path = path.as_ref();
        let config = StoreConfig {
            max_word_len: options.max_word_len,
            ..StoreConfig::default()
        };
        let words = DictionaryStore::load_with(path, config)?;
        info!("loaded {} words from {}", words.len(), path.display());
        Ok(Self { words, options })
    }
}

impl<S: WordSet> SpellHandle<S> {
    /// Wrap an already built word set.
    pub fn new(words: S, options: CheckOptions) -> Self {
        Self { words, options }
    }

    // =========================================================================
    // Checking
    // =========================================================================

    /// Check whether a token is correctly spelled.
    pub fn spell(&self, token: impl AsRef<[u8]>) -> bool {
        pipeline::check_word(token.as_ref(), &self.words, &self.options)
    }

    /// Check a token and report which rule decided it.
    pub fn verdict(&self, token: impl AsRef<[u8]>) -> Verdict {
        pipeline::verdict(token.as_ref(), &self.words, &self.options)
    }

    /// Scan a document from any buffered reader.
    pub fn check_document<R: BufRead>(&self, reader: R) -> Result<DocumentReport, CheckError> {
        Ok(document::check_document(reader, &self.words, &self.options)?)
    }

    /// Open and scan the document at `path`.
    pub fn check_path(&self, path: impl AsRef<Path>) -> Result<DocumentReport, CheckError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CheckError::DocumentOpen {
            path: path.to_path_buf(),
            source,
        })?;
        self.check_document(BufReader::new(file))
    }

    // =========================================================================
    // Accessors and option setters
    // =========================================================================

    pub fn words(&self) -> &S {
        &self.words
    }

    pub fn options(&self) -> &CheckOptions {
        &self.options
    }

    /// Set the maximum token length. Only affects checks; words already
    /// loaded stay loaded.
    pub fn set_max_word_len(&mut self, value: usize) {
        self.options.max_word_len = value;
    }

    /// Set how many misspelled words a document scan keeps (`None` keeps
    /// all).
    pub fn set_misspelled_capacity(&mut self, value: Option<usize>) {
        self.options.misspelled_capacity = value;
    }

    pub fn set_line_buffer_len(&mut self, value: usize) {
        self.options.line_buffer_len = value;
    }

    pub fn set_split_on_any_whitespace(&mut self, value: bool) {
        self.options.split_on_any_whitespace = value;
    }
}
