//! Hash-based array and string exercises.
//!
//! Duplicate detection, anagram checks and grouping, frequency counting,
//! consecutive-run measurement, and Sudoku validity. Every function is a
//! one-pass or bucketed procedure over its arguments.

mod anagrams;
mod consecutive;
mod counting;
mod sudoku;

pub use anagrams::{group_anagrams, is_anagram};
pub use consecutive::longest_consecutive;
pub use counting::{contains_duplicate, top_k_frequent};
pub use sudoku::is_valid_sudoku;
