/// Boyer-Moore substring search using the bad-character heuristic.
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

    // Last occurrence of each byte in the pattern; -1 for bytes not present.
    let mut last = [-1isize; 256];
    for (i, &b) in pat.iter().enumerate() {
        last[b as usize] = i as isize;
    }

    let mut shift = 0usize;
    while shift <= n - m {
        // Compare right-to-left at the current alignment.
        let mut j = m as isize - 1;
        while j >= 0 && pat[j as usize] == text[shift + j as usize] {
            j -= 1;
        }
        if j < 0 {
            return Some(shift);
        }

        // Bad-character rule. The max(1, ..) keeps the shift moving forward
        // when the mismatched byte's last occurrence lies at or right of j.
        let bad = last[text[shift + j as usize] as usize];
        shift += (j - bad).max(1) as usize;
    }

    None
}
