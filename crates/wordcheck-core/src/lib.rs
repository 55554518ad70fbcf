//! Shared building blocks for the wordcheck crates.
//!
//! - [`character`] -- byte classification over the accepted word alphabet
//! - [`enums`] -- the [`Verdict`](enums::Verdict) type and the default limits

pub mod character;
pub mod enums;
