//! Longest consecutive run measurement.

use std::collections::HashSet;

/// Length of the longest run of consecutive integers present in `nums`.
///
/// All values go into a hash set; a value whose predecessor is absent starts
/// a sequence, which is then walked forward by O(1) lookups. Duplicates do
/// not extend runs. Empty input yields 0.
///
/// # Examples
///
/// ```
/// use neetkit::hashing::longest_consecutive;
///
/// assert_eq!(longest_consecutive(&[100, 4, 200, 1, 3, 2]), 4);
/// ```
pub fn longest_consecutive(nums: &[i32]) -> usize {
    let values: HashSet<i32> = nums.iter().copied().collect();
    let mut longest = 0;

    for &start in &values {
        if let Some(prev) = start.checked_sub(1) {
            if values.contains(&prev) {
                continue;
            }
        }

        let mut end = start;
        while let Some(next) = end.checked_add(1) {
            if !values.contains(&next) {
                break;
            }
            end = next;
        }
        longest = longest.max((i64::from(end) - i64::from(start)) as usize + 1);
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_consecutive() {
        assert_eq!(longest_consecutive(&[100, 4, 200, 1, 3, 2]), 4);
        assert_eq!(longest_consecutive(&[0, 3, 7, 2, 5, 8, 4, 6, 0, 1]), 9);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(longest_consecutive(&[]), 0);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(longest_consecutive(&[5]), 1);
    }

    #[test]
    fn test_duplicates_do_not_extend_runs() {
        assert_eq!(longest_consecutive(&[1, 2, 2, 3]), 3);
        assert_eq!(longest_consecutive(&[7, 7, 7]), 1);
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(longest_consecutive(&[-2, -1, 0, 1]), 4);
    }

    #[test]
    fn test_extreme_bounds() {
        assert_eq!(longest_consecutive(&[i32::MIN, i32::MAX]), 1);
        assert_eq!(longest_consecutive(&[i32::MAX - 1, i32::MAX]), 2);
    }
}
