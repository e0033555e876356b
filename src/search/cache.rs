use dashmap::DashMap;

/// Concurrent per-prefix result cache.
///
/// Keys are the raw prefix strings, case-sensitive and unnormalized.
/// Entries are never evicted or invalidated; that is only correct because
/// the dictionary and sorted index never change for the process lifetime.
///
/// Two tasks racing on the first query for a prefix may both compute the
/// result; the loser's insert overwrites the winner's with an equal value,
/// so no reader ever observes a lost or partial write.
pub struct QueryCache {
    entries: DashMap<String, Vec<String>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Returns the stored result for `prefix`, if one exists.
    pub fn get(&self, prefix: &str) -> Option<Vec<String>> {
        self.entries.get(prefix).map(|entry| entry.value().clone())
    }

    /// Stores `result` under `prefix`, replacing any racing earlier insert.
    pub fn store(&self, prefix: &str, result: Vec<String>) {
        self.entries.insert(prefix.to_string(), result);
    }

    /// Number of distinct prefixes cached so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}
