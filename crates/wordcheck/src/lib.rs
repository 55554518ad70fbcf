//! Dictionary-based spell checking.
//!
//! A token is normalized (ASCII case folding plus trailing punctuation
//! removal), then accepted if the dictionary knows it, if it is a number,
//! or if it is nothing but punctuation. Tokens with more than one
//! apostrophe are rejected.
//!
//! - [`normalizer`] -- Case folding and trailing-punctuation trimming
//! - [`classifier`] -- Number / punctuation / apostrophe predicates
//! - [`speller`] -- Per-token verdicts and document scanning
//! - [`handle`] -- [`SpellHandle`](handle::SpellHandle), the owning entry point

pub mod classifier;
pub mod handle;
pub mod normalizer;
pub mod speller;

pub use handle::{CheckError, SpellHandle};
pub use normalizer::{NormalizedWord, normalize};
pub use speller::document::DocumentReport;
pub use speller::pipeline::CheckOptions;
pub use wordcheck_core::enums::Verdict;
pub use wordcheck_dict::{DictError, DictionaryStore, WordSet};
