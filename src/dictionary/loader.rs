use super::types::Dictionary;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// Reads and parses the dictionary file at `path`.
///
/// Any failure (missing file, malformed token stream) is returned as an
/// error; the caller treats it as fatal at startup.
pub async fn load_dictionary(path: &Path) -> Result<Dictionary> {
    let source = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read dictionary file {}", path.display()))?;

    parse_dictionary(&source)
        .with_context(|| format!("malformed dictionary file {}", path.display()))
}

/// Parses a count-prefixed token stream: a leading integer N followed by
/// N alternating `(word, frequency)` pairs, whitespace-delimited.
///
/// A duplicate word keeps the last frequency seen. An N of 0 yields an
/// empty dictionary, which is valid.
pub fn parse_dictionary(source: &str) -> Result<Dictionary> {
    let mut tokens = source.split_whitespace();

    let count_token = tokens.next().context("dictionary source is empty")?;
    let count: usize = count_token
        .parse()
        .with_context(|| format!("invalid word count: {:?}", count_token))?;

    let mut entries = HashMap::with_capacity(count);
    for read in 0..count {
        let word = tokens.next().with_context(|| {
            format!("dictionary ended after {} of {} entries", read, count)
        })?;
        let freq_token = tokens
            .next()
            .with_context(|| format!("missing frequency for word {:?}", word))?;
        let frequency: u64 = freq_token.parse().with_context(|| {
            format!("invalid frequency {:?} for word {:?}", freq_token, word)
        })?;

        entries.insert(word.to_string(), frequency);
    }

    Ok(Dictionary::new(entries))
}
