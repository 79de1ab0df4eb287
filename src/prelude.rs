//! Commonly used imports for convenience.
//!
//! This prelude module provides a convenient way to import the most commonly
//! used functions and types in the neetkit library.
//!
//! # Example
//!
//! ```
//! use neetkit::prelude::*;
//!
//! let encoded = encode(&["ab", "cde"]);
//! assert_eq!(decode(&encoded).unwrap(), vec!["ab", "cde"]);
//! ```

pub use crate::codec::{decode, encode, FormatError, DELIMITER};
pub use crate::hashing::{
    contains_duplicate, group_anagrams, is_anagram, is_valid_sudoku, longest_consecutive,
    top_k_frequent,
};
pub use crate::two_pointers::{is_palindrome, three_sum, two_sum_sorted};
