//! Product code normalization.

/// Strip every character that is not an ASCII digit.
///
/// Returns `None` when nothing is left, which covers empty, whitespace-only
/// and digit-free input.
pub fn normalize_code(raw: &str) -> Option<String> {
    let clean: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    (!clean.is_empty()).then_some(clean)
}
