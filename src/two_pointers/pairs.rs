//! Pair and triplet sums over sorted data.

use std::cmp::Ordering;

/// Find two positions in a non-decreasing slice whose values sum to `target`.
///
/// Cursors start at both ends and move inward, so each element is visited at
/// most once. Returns the 0-based index pair `(lo, hi)` with `lo < hi`, or
/// `None` when no pair sums to `target`.
///
/// Behavior is unspecified when `numbers` is not sorted.
///
/// # Examples
///
/// ```
/// use neetkit::two_pointers::two_sum_sorted;
///
/// assert_eq!(two_sum_sorted(&[2, 7, 11, 15], 9), Some((0, 1)));
/// assert_eq!(two_sum_sorted(&[1, 2, 3], 7), None);
/// ```
pub fn two_sum_sorted(numbers: &[i32], target: i32) -> Option<(usize, usize)> {
    if numbers.is_empty() {
        return None;
    }
    let mut lo = 0;
    let mut hi = numbers.len() - 1;

    while lo < hi {
        let sum = i64::from(numbers[lo]) + i64::from(numbers[hi]);
        match sum.cmp(&i64::from(target)) {
            Ordering::Equal => return Some((lo, hi)),
            Ordering::Less => lo += 1,
            Ordering::Greater => hi -= 1,
        }
    }
    None
}

/// Find all unique triplets of values in `nums` that sum to zero.
///
/// Sorts a working copy, fixes the smallest element of each candidate
/// triplet, and scans the remainder with two cursors. Duplicate anchors and
/// cursor values are skipped, so each triplet appears once. Every triplet is
/// non-decreasing and the triplet list is in sorted order.
///
/// # Examples
///
/// ```
/// use neetkit::two_pointers::three_sum;
///
/// assert_eq!(
///     three_sum(&[-1, 0, 1, 2, -1, -4]),
///     vec![[-1, -1, 2], [-1, 0, 1]]
/// );
/// ```
pub fn three_sum(nums: &[i32]) -> Vec<[i32; 3]> {
    if nums.len() < 3 {
        return Vec::new();
    }
    let mut nums = nums.to_vec();
    nums.sort_unstable();

    let n = nums.len();
    let mut triplets = Vec::new();

    for i in 0..n - 2 {
        if i > 0 && nums[i] == nums[i - 1] {
            continue;
        }
        let mut lo = i + 1;
        let mut hi = n - 1;

        while lo < hi {
            let sum = i64::from(nums[i]) + i64::from(nums[lo]) + i64::from(nums[hi]);
            match sum.cmp(&0) {
                Ordering::Equal => {
                    triplets.push([nums[i], nums[lo], nums[hi]]);
                    while lo < hi && nums[lo] == nums[lo + 1] {
                        lo += 1;
                    }
                    while lo < hi && nums[hi] == nums[hi - 1] {
                        hi -= 1;
                    }
                    lo += 1;
                    hi -= 1;
                }
                Ordering::Less => lo += 1,
                Ordering::Greater => hi -= 1,
            }
        }
    }
    triplets
}
