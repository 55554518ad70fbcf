// Word-list reading.
//
// A word list is one word per line. Only the `\n` terminator is removed;
// any other byte, including a trailing `\r` or surrounding spaces, is part
// of the word.

use std::io::{self, BufRead};

use log::warn;

/// Counters collected while reading a word list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadSummary {
    /// Lines handed to the callback.
    pub accepted: usize,
    /// Empty lines, ignored.
    pub empty: usize,
    /// Lines longer than the length bound, ignored.
    pub too_long: usize,
}

/// Read newline-delimited words from `reader`, calling `on_word` for each.
///
/// The final line may lack a trailing newline. Lines longer than
/// `max_len` bytes are skipped with a warning rather than split into
/// fragments, and empty lines are skipped.
pub fn read_words<R, F>(mut reader: R, max_len: usize, mut on_word: F) -> io::Result<ReadSummary>
where
    R: BufRead,
    F: FnMut(&[u8]),
{
    let mut summary = ReadSummary::default();
    let mut line = Vec::new();
    let mut line_no = 0usize;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        line_no += 1;

        let word = line.strip_suffix(b"\n").unwrap_or(&line);
        if word.is_empty() {
            summary.empty += 1;
        } else if word.len() > max_len {
            warn!(
                "word list line {line_no}: {} bytes exceeds the {max_len}-byte limit, skipped",
                word.len()
            );
            summary.too_long += 1;
        } else {
            on_word(word);
            summary.accepted += 1;
        }
    }

    Ok(summary)
}
