use super::bounds::{left_bound, right_bound};
use super::cache::QueryCache;
use crate::dictionary::types::Dictionary;

/// Maximum number of words returned for any query.
pub const MAX_RESULTS: usize = 10;

/// Answers "most frequent words starting with prefix" queries.
///
/// Holds the dictionary, a lexicographically sorted index of its words
/// built once at construction, and the shared query cache. The index and
/// dictionary are read-only, so a single instance is shared by reference
/// across all concurrent connection tasks.
pub struct WordSearcher {
    sorted_words: Vec<String>,
    dictionary: Dictionary,
    cache: QueryCache,
}

impl WordSearcher {
    pub fn new(dictionary: Dictionary) -> Self {
        let mut sorted_words: Vec<String> = dictionary.words().cloned().collect();
        sorted_words.sort_unstable();

        Self {
            sorted_words,
            dictionary,
            cache: QueryCache::new(),
        }
    }

    /// Returns up to [`MAX_RESULTS`] words starting with `prefix`, ordered
    /// by frequency descending with an alphabetical tie-break.
    ///
    /// The first query for a prefix computes and caches the result; repeat
    /// queries are served from the cache. A prefix no word starts with
    /// yields an empty result, cached like any other.
    pub fn search(&self, prefix: &str) -> Vec<String> {
        if let Some(hit) = self.cache.get(prefix) {
            return hit;
        }

        let result = self.rank_matches(prefix);
        self.cache.store(prefix, result.clone());
        result
    }

    /// Number of words in the sorted index.
    pub fn word_count(&self) -> usize {
        self.sorted_words.len()
    }

    /// Number of distinct prefixes cached so far.
    pub fn cached_queries(&self) -> usize {
        self.cache.len()
    }

    fn rank_matches(&self, prefix: &str) -> Vec<String> {
        let Some(first) = left_bound(&self.sorted_words, prefix) else {
            return Vec::new();
        };
        let Some(last) = right_bound(&self.sorted_words, prefix) else {
            return Vec::new();
        };

        let mut matched: Vec<String> = self.sorted_words[first..=last].to_vec();
        matched.sort_by(|a, b| {
            // Every indexed word has a dictionary entry; 0 only covers the
            // unreachable miss without panicking.
            let freq_a = self.dictionary.frequency(a).unwrap_or(0);
            let freq_b = self.dictionary.frequency(b).unwrap_or(0);
            freq_b.cmp(&freq_a).then_with(|| a.cmp(b))
        });
        matched.truncate(MAX_RESULTS);
        matched
    }
}
