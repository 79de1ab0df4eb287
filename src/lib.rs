//! Neetkit: a library of independent solutions to small algorithmic exercises.
//!
//! Each solution is a pure function with no shared state, no persistence, and
//! no I/O beyond arguments and return values. The modules group solutions by
//! technique family rather than by any runtime relationship; nothing here
//! depends on anything else here.

pub mod codec;
pub mod hashing;
pub mod prelude;
pub mod two_pointers;

// Re-export commonly used items for convenient external access.
//
// These form the public, stable surface that most consumers of the library
// will use. Re-exporting them here makes them available as `neetkit::encode`,
// `neetkit::FormatError`, etc.
pub use codec::{decode, encode, FormatError, DELIMITER};
