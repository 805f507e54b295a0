//! Code normalization.

/// Identifier substituted when normalization strips a code down to nothing.
/// Substituted verbatim - the default itself is not re-normalized.
pub const DEFAULT_CODE: &str = "demo-batch-123";

/// Normalize a raw scanned code: strip every character outside ASCII
/// alphanumerics, falling back to [`DEFAULT_CODE`] when nothing survives.
///
/// # Examples
///
/// ```
/// use leaftrace_scan::normalize_code;
///
/// assert_eq!(normalize_code(" BT-123456 "), "BT123456");
/// assert_eq!(normalize_code("!!!"), "demo-batch-123");
/// ```
pub fn normalize_code(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| c.is_ascii_alphanumeric()).collect();

    if stripped.is_empty() {
        DEFAULT_CODE.to_string()
    } else {
        stripped
    }
}
