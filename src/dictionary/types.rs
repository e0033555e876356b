use std::collections::HashMap;

/// Immutable word→frequency mapping.
///
/// Constructed once by the loader at startup; no mutation path exists
/// afterwards, so concurrent readers need no locking.
#[derive(Debug)]
pub struct Dictionary {
    entries: HashMap<String, u64>,
}

impl Dictionary {
    pub fn new(entries: HashMap<String, u64>) -> Self {
        Self { entries }
    }

    /// Frequency recorded for `word`, or `None` for unknown words.
    pub fn frequency(&self, word: &str) -> Option<u64> {
        self.entries.get(word).copied()
    }

    /// Iterates over every word in the dictionary (unordered).
    pub fn words(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
