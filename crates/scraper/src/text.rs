// ABOUTME: Pure text cleanup helpers shared by the field extractors.
// ABOUTME: Substring removal, split-and-trim, and the trailing-digit rank fixup.

/// Removes every occurrence of each entry in `removals` from `text`, then
/// trims surrounding whitespace from the result.
///
/// Substrings that never occur are no-ops, so callers can pass one removal
/// list covering several page layouts.
///
/// # Arguments
/// * `text` - Raw text content pulled from a page element
/// * `removals` - Substrings to delete, typically a label prefix plus separators
pub fn remove_and_trim(text: &str, removals: &[&str]) -> String {
    let mut out = text.to_string();
    for removal in removals {
        out = out.replace(removal, "");
    }
    out.trim().to_string()
}

/// Splits `text` on `separator` and trims each piece.
///
/// Empty pieces are kept, so `"a, ,b"` yields three entries. Callers that
/// want them gone filter afterwards.
pub fn split_and_trim(text: &str, separator: &str) -> Vec<String> {
    text.split(separator)
        .map(|piece| piece.trim().to_string())
        .collect()
}

/// Drops the last decimal digit of `n`, so 312 becomes 31.
///
/// Single-digit values come back unchanged, as does anything whose
/// shortened form no longer parses (a lone minus sign, for instance).
/// This exists for one ranking-page artifact: a superscript footnote
/// digit gets fused onto the end of the rank number when the markup is
/// flattened to text.
pub fn strip_trailing_digit(n: i64) -> i64 {
    let digits = n.to_string();
    if digits.len() <= 1 {
        return n;
    }
    digits[..digits.len() - 1].parse().unwrap_or(n)
}
