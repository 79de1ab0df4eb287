//! Two-pointer exercises over strings and sorted slices.

mod pairs;
mod palindrome;

pub use pairs::{three_sum, two_sum_sorted};
pub use palindrome::is_palindrome;
