// Document scanning: split lines into tokens and collect misspellings.

use std::io::{self, BufRead};

use log::debug;
use serde::Serialize;
use wordcheck_dict::WordSet;

use crate::normalizer::{NormalizedWord, normalize};
use crate::speller::pipeline::{CheckOptions, check_word};

/// Result of scanning a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentReport {
    /// Number of misspelled tokens, including those not stored.
    pub count: usize,
    /// Normalized forms of the misspelled tokens, in document order, up to
    /// `capacity` entries.
    pub misspelled: Vec<NormalizedWord>,
    /// Storage limit in effect for the scan; `None` means unlimited.
    pub capacity: Option<usize>,
}

impl DocumentReport {
    fn new(capacity: Option<usize>) -> Self {
        Self {
            count: 0,
            misspelled: Vec::new(),
            capacity,
        }
    }

    /// Record one misspelled token. Past capacity the token is counted but
    /// not stored.
    fn record(&mut self, token: &[u8]) {
        self.count += 1;
        if self.capacity.is_none_or(|cap| self.misspelled.len() < cap) {
            self.misspelled.push(normalize(token));
        } else if Some(self.count - 1) == self.capacity {
            debug!("misspelled word capacity {} reached, counting only", self.count - 1);
        }
    }

    /// `true` if some misspelled tokens were counted but not stored.
    pub fn is_truncated(&self) -> bool {
        self.count > self.misspelled.len()
    }
}

/// Split a line into tokens, skipping empty ones.
///
/// Only the space byte separates tokens unless `any_whitespace` is set;
/// a tab, for example, is otherwise part of a token.
pub fn tokens(line: &[u8], any_whitespace: bool) -> impl Iterator<Item = &[u8]> {
    line.split(move |&b| {
        if any_whitespace {
            b.is_ascii_whitespace()
        } else {
            b == b' '
        }
    })
    .filter(|token| !token.is_empty())
}

/// Check every token of a document.
///
/// The document is read line by line; the `\n` terminator is not part of
/// any token. A line longer than the line buffer is checked in
/// consecutive chunks, so a token spanning a chunk boundary is checked as
/// two tokens. Only read errors are reported; every token-level problem
/// just counts as a misspelling.
pub fn check_document<R, S>(
    mut reader: R,
    words: &S,
    options: &CheckOptions,
) -> io::Result<DocumentReport>
where
    R: BufRead,
    S: WordSet + ?Sized,
{
    let mut report = DocumentReport::new(options.misspelled_capacity);
    let chunk_len = options.line_buffer_len.saturating_sub(1).max(1);
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        let content = line.strip_suffix(b"\n").unwrap_or(&line);

        for chunk in content.chunks(chunk_len) {
            for token in tokens(chunk, options.split_on_any_whitespace) {
                if !check_word(token, words, options) {
                    report.record(token);
                }
            }
        }
    }

    debug!(
        "document checked: {} misspelled, {} stored",
        report.count,
        report.misspelled.len()
    );
    Ok(report)
}
