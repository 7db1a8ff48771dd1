//! Go string literal escaping.

/// Escapes text for inclusion between double quotes in Go source.
///
/// Handles:
/// - Backslashes: `\` -> `\\`
/// - Double quotes: `"` -> `\"`
///
/// # Examples
///
/// ```
/// use enameg::escape::escape_string;
///
/// assert_eq!(escape_string("plain"), "plain");
/// assert_eq!(escape_string("A\\B"), "A\\\\B");
/// assert_eq!(escape_string("\"B\""), "\\\"B\\\"");
/// ```
#[must_use]
pub fn escape_string(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            _ => result.push(ch),
        }
    }
    result
}
