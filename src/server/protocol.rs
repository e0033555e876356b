//! Request-Line Protocol
//!
//! The wire format is plain text, one request per line:
//!
//! ```text
//! get <prefix>
//! ```
//!
//! The command token is matched case-insensitively; the prefix is taken
//! verbatim (case-sensitive). A bare `get` queries the empty prefix. Lines
//! of any other shape are not requests and receive no response.

/// A parsed client request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Search for words starting with the carried prefix.
    Get(String),
}

/// Parses one request line, or `None` for unrecognized input.
pub fn parse_request(line: &str) -> Option<Request> {
    let trimmed = line.trim();
    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim_start()),
        None => (trimmed, ""),
    };

    if command.eq_ignore_ascii_case("get") {
        Some(Request::Get(rest.to_string()))
    } else {
        None
    }
}
