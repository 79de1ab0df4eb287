//! Duplicate detection and frequency counting.

use std::collections::HashMap;
use std::collections::HashSet;
use std::hash::Hash;

/// Check whether any value appears more than once.
///
/// O(n) time and O(n) space via hash-set membership.
///
/// # Examples
///
/// ```
/// use neetkit::hashing::contains_duplicate;
///
/// assert!(contains_duplicate(&[1, 2, 3, 1]));
/// assert!(!contains_duplicate(&["a", "b", "c"]));
/// ```
pub fn contains_duplicate<T: Eq + Hash>(items: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// Return up to `k` of the most frequent values.
///
/// Counts frequencies, then bucket-sorts values by count and drains the
/// highest buckets first. When fewer than `k` distinct values exist, all of
/// them are returned. Tie order within one frequency bucket is unspecified.
///
/// # Examples
///
/// ```
/// use neetkit::hashing::top_k_frequent;
///
/// let mut top = top_k_frequent(&[1, 1, 1, 2, 2, 3], 2);
/// top.sort_unstable();
/// assert_eq!(top, vec![1, 2]);
/// ```
pub fn top_k_frequent(nums: &[i32], k: usize) -> Vec<i32> {
    let mut freqs: HashMap<i32, usize> = HashMap::new();
    for &num in nums {
        *freqs.entry(num).or_insert(0) += 1;
    }

    // A value can occur at most nums.len() times, so counts index directly
    // into a bucket per frequency.
    let mut buckets: Vec<Vec<i32>> = vec![Vec::new(); nums.len() + 1];
    for (num, count) in freqs {
        buckets[count].push(num);
    }

    let mut top = Vec::with_capacity(k.min(nums.len()));
    for bucket in buckets.iter().rev() {
        for &num in bucket {
            if top.len() == k {
                return top;
            }
            top.push(num);
        }
    }
    top
}
