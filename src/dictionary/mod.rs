//! Dictionary Module
//!
//! Loading and holding the word→frequency mapping every query is answered
//! from.
//!
//! ## Overview
//! The dictionary is read once at service startup from a text source whose
//! format is a leading word count N followed by N whitespace-delimited
//! `(word, frequency)` token pairs. After construction the mapping is
//! immutable: there is no mutation API, so it can be shared across all
//! connection tasks without synchronization.
//!
//! ## Responsibilities
//! - **Parsing**: Turning the count-prefixed token stream into a
//!   `Dictionary`, rejecting truncated or non-numeric input.
//! - **Lookup**: Exposing per-word frequencies to the search ranker.
//!
//! ## Submodules
//! - **`loader`**: File reading and token-stream parsing.
//! - **`types`**: The `Dictionary` value itself.

pub mod loader;
pub mod types;
