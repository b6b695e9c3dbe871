/// Failure table (LPS): `lps[i]` is the length of the longest proper prefix
/// of `pat` that is also a suffix of `pat[..=i]`.
fn failure_table(pat: &[u8]) -> Vec<usize> {
    let mut lps = vec![0usize; pat.len()];
    let mut j = 0usize;
    for i in 1..pat.len() {
        // Fall back through the table itself, never restarting from zero.
        while j > 0 && pat[i] != pat[j] {
            j = lps[j - 1];
        }
        if pat[i] == pat[j] {
            j += 1;
            lps[i] = j;
        }
    }
    lps
}

/// Knuth-Morris-Pratt substring search.
///
/// Returns the byte index of the leftmost occurrence of `pattern` in
/// `text`, or `None`. An empty pattern matches at index 0. Runs in
/// O(text + pattern): the text is scanned once and never re-read, all
/// backtracking happens through the failure table.
pub fn search(text: &str, pattern: &str) -> Option<usize> {
    let text = text.as_bytes();
    let pat = pattern.as_bytes();
    if pat.is_empty() {
        return Some(0);
    }
    if pat.len() > text.len() {
        return None;
    }

    let lps = failure_table(pat);
    let mut j = 0usize;
    for (i, &b) in text.iter().enumerate() {
        while j > 0 && b != pat[j] {
            j = lps[j - 1];
        }
        if b == pat[j] {
            j += 1;
            if j == pat.len() {
                return Some(i + 1 - pat.len());
            }
        }
    }

    None
}
