//! Search Module
//!
//! The core component answering prefix queries against the loaded
//! dictionary.
//!
//! ## Overview
//! All dictionary words are kept in a lexicographically sorted index built
//! once at startup. A query locates the contiguous run of words carrying
//! the prefix with two binary searches, ranks that run by frequency, and
//! memoizes the result per prefix so repeat queries skip recomputation.
//!
//! ## Responsibilities
//! - **Range finding**: Leftmost/rightmost bounds of the matching run via
//!   independent binary searches over the immutable index.
//! - **Ranking**: Ordering matches by frequency descending with an
//!   alphabetical tie-break, truncated to the 10 best.
//! - **Caching**: Atomic check-then-insert memoization of results, shared
//!   by all concurrent connection tasks.
//!
//! ## Submodules
//! - **`bounds`**: The pure `left_bound`/`right_bound` search functions.
//! - **`cache`**: The concurrent per-prefix result cache.
//! - **`engine`**: `WordSearcher`, wiring index, ranker and cache together.

pub mod bounds;
pub mod cache;
pub mod engine;
