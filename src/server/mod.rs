//! Server Module
//!
//! The network layer in front of the search engine.
//!
//! ## Overview
//! Clients connect over TCP and issue line-oriented requests of the form
//! `get <prefix>`. Each recognized request is answered with one result word
//! per line followed by a terminating blank line; anything else is ignored
//! without a response. Connections are handled one request/response cycle
//! at a time until the client disconnects.
//!
//! ## Responsibilities
//! - **Accepting**: Binding the listener and spawning one task per
//!   connection, all sharing the same `WordSearcher`.
//! - **Framing**: Parsing request lines and writing the word-list response.
//!
//! ## Submodules
//! - **`handlers`**: The per-connection read/answer loop.
//! - **`protocol`**: Request-line parsing.
//! - **`service`**: The accept loop.

pub mod handlers;
pub mod protocol;
pub mod service;
