// Spell checking of single tokens and whole documents.

pub mod document;
pub mod pipeline;
