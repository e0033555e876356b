//! Frequent-Word Prefix Search Service Library
//!
//! This library crate defines the modules behind the search server binary
//! (`main.rs`): a TCP service that answers "most frequently used words
//! starting with prefix P" queries against a dictionary loaded once at
//! startup.
//!
//! ## Architecture Modules
//! The system is composed of three subsystems:
//!
//! - **`dictionary`**: Loading and holding the immutable word→frequency
//!   mapping. The dictionary is parsed from a count-prefixed token stream at
//!   startup and never modified afterwards.
//! - **`search`**: The core retrieval logic. Contains the sorted word index,
//!   the dual binary-search range finder, the frequency/alphabetical ranker,
//!   and the per-prefix result cache shared by all connections.
//! - **`server`**: The network layer. Accepts TCP connections and speaks a
//!   line-oriented `get <prefix>` request protocol, one task per connection.

pub mod dictionary;
pub mod search;
pub mod server;
