//! Anagram checking and grouping.

use std::collections::HashMap;

/// Check whether `t` is an anagram of `s`.
///
/// A single counter map is incremented for `s` and decremented for `t`; the
/// strings are anagrams exactly when every count returns to zero. Characters
/// are compared as Unicode scalar values, so inputs are not restricted to
/// `a-z`.
///
/// # Examples
///
/// ```
/// use neetkit::hashing::is_anagram;
///
/// assert!(is_anagram("anagram", "nagaram"));
/// assert!(!is_anagram("rat", "car"));
/// ```
pub fn is_anagram(s: &str, t: &str) -> bool {
    if s.chars().count() != t.chars().count() {
        return false;
    }

    let mut counts: HashMap<char, i64> = HashMap::new();
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    for c in t.chars() {
        *counts.entry(c).or_insert(0) -= 1;
    }
    counts.values().all(|&count| count == 0)
}

/// Group words that are anagrams of each other.
///
/// Groups are keyed by the sorted character sequence of each word. Groups
/// appear in first-occurrence order and members keep input order, so the
/// result is deterministic.
///
/// # Examples
///
/// ```
/// use neetkit::hashing::group_anagrams;
///
/// let groups = group_anagrams(&["eat", "tea", "tan", "ate", "nat", "bat"]);
/// assert_eq!(
///     groups,
///     vec![
///         vec!["eat", "tea", "ate"],
///         vec!["tan", "nat"],
///         vec!["bat"],
///     ]
/// );
/// ```
pub fn group_anagrams<S: AsRef<str>>(words: &[S]) -> Vec<Vec<String>> {
    let mut group_index: HashMap<Vec<char>, usize> = HashMap::new();
    let mut groups: Vec<Vec<String>> = Vec::new();

    for word in words {
        let word = word.as_ref();
        let mut key: Vec<char> = word.chars().collect();
        key.sort_unstable();

        let slot = *group_index.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(word.to_string());
    }
    groups
}
