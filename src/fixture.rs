//! Deterministic input generation for tests and benches.
//!
//! Everything here is seeded explicitly so failures reproduce: the same
//! seed always yields the same text, keys, and patterns.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generates `words` space-separated lowercase words (2..=9 letters each).
pub fn generate_text(seed: u64, words: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = String::new();
    for i in 0..words {
        if i > 0 {
            out.push(' ');
        }
        let len = rng.gen_range(2..=9);
        for _ in 0..len {
            out.push(rng.gen_range(b'a'..=b'z') as char);
        }
    }
    out
}

/// Picks a substring of `text` of length `len` at a seeded offset, so
/// searches for it are guaranteed hits.
pub fn existing_pattern(seed: u64, text: &str, len: usize) -> String {
    assert!(len <= text.len(), "pattern longer than text");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let start = rng.gen_range(0..=text.len() - len);
    text[start..start + len].to_string()
}

/// A pattern that cannot occur in [`generate_text`] output: the generated
/// alphabet is lowercase letters and spaces, so digits never appear.
pub fn absent_pattern(len: usize) -> String {
    "0123456789".chars().cycle().take(len).collect()
}

/// Generates `n` distinct keys for hash table exercises.
pub fn generate_keys(seed: u64, n: usize) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|i| format!("{}-{i}", generate_word(&mut rng)))
        .collect()
}

fn generate_word(rng: &mut ChaCha8Rng) -> String {
    let len = rng.gen_range(3..=8);
    (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}
