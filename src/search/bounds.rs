use std::cmp::Ordering;

/// Compares `word` against `prefix` after truncating the word to the
/// prefix length.
///
/// The word is cut to `min(word_len, prefix_len)` bytes before a byte-wise
/// comparison, so a word shorter than the prefix compares with its own
/// length and can never falsely tie a longer prefix. The empty prefix ties
/// against every word. Comparison is case-sensitive.
pub fn prefix_compare(word: &str, prefix: &str) -> Ordering {
    let word = word.as_bytes();
    let prefix = prefix.as_bytes();
    let cut = word.len().min(prefix.len());
    word[..cut].cmp(prefix)
}

/// Binary search for the leftmost word in `words` starting with `prefix`.
///
/// `words` must be sorted ascending by byte order. On a comparison tie the
/// upper bound shrinks to the midpoint and the scan continues left; the
/// index is only returned once the tie is confirmed to be the leftmost
/// occurrence. Returns `None` when no word carries the prefix.
pub fn left_bound(words: &[String], prefix: &str) -> Option<usize> {
    if words.is_empty() {
        return None;
    }

    let mut low = 0;
    let mut high = words.len() - 1;

    while low <= high {
        let mid = (low + high) / 2;
        match prefix_compare(&words[mid], prefix) {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    return None;
                }
                high = mid - 1;
            }
            Ordering::Equal => {
                if low != mid {
                    // Tied, but the range below is not fully scanned yet
                    high = mid;
                } else {
                    return Some(mid);
                }
            }
        }
    }

    None
}

/// Binary search for the rightmost word in `words` starting with `prefix`.
///
/// Symmetric to [`left_bound`]: the midpoint `(low + high + 1) / 2` biases
/// toward the upper half, and on a tie the lower bound moves up to the
/// midpoint until the rightmost occurrence is confirmed.
pub fn right_bound(words: &[String], prefix: &str) -> Option<usize> {
    if words.is_empty() {
        return None;
    }

    let mut low = 0;
    let mut high = words.len() - 1;

    while low <= high {
        let mid = (low + high + 1) / 2;
        match prefix_compare(&words[mid], prefix) {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    return None;
                }
                high = mid - 1;
            }
            Ordering::Equal => {
                if high != mid {
                    // Tied, but the range above is not fully scanned yet
                    low = mid;
                } else {
                    return Some(mid);
                }
            }
        }
    }

    None
}
