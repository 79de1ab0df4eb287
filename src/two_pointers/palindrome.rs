//! Palindrome checking with inward-moving cursors.

/// Check whether `s` reads the same forwards and backwards, considering only
/// ASCII alphanumeric characters and ignoring ASCII case.
///
/// An empty string, or one containing no alphanumeric characters at all, is
/// a palindrome.
///
/// # Examples
///
/// ```
/// use neetkit::two_pointers::is_palindrome;
///
/// assert!(is_palindrome("A man, a plan, a canal: Panama"));
/// assert!(!is_palindrome("race a car"));
/// ```
pub fn is_palindrome(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    let mut lo = 0;
    let mut hi = chars.len();

    loop {
        while lo < hi && !chars[lo].is_ascii_alphanumeric() {
            lo += 1;
        }
        while lo < hi && !chars[hi - 1].is_ascii_alphanumeric() {
            hi -= 1;
        }
        if hi - lo < 2 {
            return true;
        }
        if !chars[lo].eq_ignore_ascii_case(&chars[hi - 1]) {
            return false;
        }
        lo += 1;
        hi -= 1;
    }
}
