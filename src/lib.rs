//! Exact substring search and a reusable chained hash table.
//!
//! Three classic first-match substring searchers sharing one contract
//! (`search(text, pattern) -> Option<byte index>`):
//!
//! - [`boyer_moore`]: bad-character rule, strong on larger alphabets.
//! - [`kmp`]: failure-table scan, linear worst case, never re-reads text.
//! - [`rabin_karp`]: rolling polynomial hash as a pre-filter, every hash
//!   hit verified by direct comparison.
//!
//! All three agree on edge cases: an empty pattern matches at index 0, a
//! pattern longer than the text never matches, and only the leftmost match
//! is reported. Comparison is exact byte equality.
//!
//! [`ChainedHashTable`] is independent of the searchers: a fixed-bucket
//! separate-chaining map with upsert/get/remove, deliberately without
//! resizing so chain behavior stays predictable under load.

pub mod boyer_moore;
pub mod fixture;
pub mod hash_table;
pub mod kmp;
pub mod rabin_karp;

pub use boyer_moore::search as boyer_moore_search;
pub use hash_table::{ChainedHashTable, TableError};
pub use kmp::search as kmp_search;
pub use rabin_karp::search as rabin_karp_search;
