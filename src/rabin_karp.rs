// Rabin-Karp keeps a polynomial hash of the current text window and rolls
// it forward one byte per shift: drop the outgoing byte's contribution
// (its value times BASE^(m-1), reduced mod MODULUS), multiply by BASE, add
// the incoming byte. The modulus is deliberately small, so distinct windows
// collide routinely; a hash hit is only ever a candidate and is confirmed
// by direct slice comparison before being reported. All arithmetic stays in
// u64 and is reduced after every step; MODULUS is added before subtracting
// the outgoing term so the residue never leaves 0..MODULUS.

/// Multiplier for the polynomial hash (one byte of alphabet).
const BASE: u64 = 256;
/// Small prime modulus; collisions are expected and verified away.
const MODULUS: u64 = 101;

fn poly_hash(s: &[u8]) -> u64 {
    s.iter().fold(0, |h, &b| (h * BASE + b as u64) % MODULUS)
}

/// Rabin-Karp substring search with a rolling polynomial hash.
///
/// Returns the byte index of the leftmost occurrence of `pattern` in
/// `text`, or `None`. An empty pattern matches at index 0.
pub fn search(text: &str, pattern: &str) -> Option<usize> {
    let text = text.as_bytes();
    let pat = pattern.as_bytes();
    let (n, m) = (text.len(), pat.len());
    if m == 0 {
        return Some(0);
    }
    if m > n {
        return None;
    }

    let pat_hash = poly_hash(pat);
    let mut win_hash = poly_hash(&text[..m]);
    // Weight of the window's leading byte: BASE^(m-1) mod MODULUS.
    let weight = (0..m - 1).fold(1u64, |w, _| (w * BASE) % MODULUS);

    for i in 0..=(n - m) {
        // Hash equality is a pre-filter; confirm before reporting.
        if win_hash == pat_hash && &text[i..i + m] == pat {
            return Some(i);
        }
        if i < n - m {
            let outgoing = (text[i] as u64 * weight) % MODULUS;
            win_hash = (win_hash + MODULUS - outgoing) % MODULUS;
            win_hash = (win_hash * BASE + text[i + m] as u64) % MODULUS;
        }
    }

    None
}
