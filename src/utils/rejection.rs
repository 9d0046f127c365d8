//! Helpers for turning extractor rejections into field-level errors.

/// Extracts the name of the offending field from a deserialization message.
///
/// Recognises serde's ``missing field `name` `` wording and the
/// `path: reason` prefix axum adds for invalid values.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     offending_field("Failed to deserialize query string: missing field `size_sqm`"),
///     Some("size_sqm".to_string())
/// );
/// ```
pub fn offending_field(message: &str) -> Option<String> {
    if let Some(start) = message.find("field `") {
        let rest = &message[start + "field `".len()..];
        return rest.find('`').map(|end| rest[..end].to_string());
    }

    // "Failed to deserialize ...: <path>: <reason>"
    let mut parts = message.split(": ");
    parts.next()?;
    let path = parts.next()?;
    parts.next()?;

    let is_path = !path.is_empty()
        && path
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '[' || c == ']');

    is_path.then(|| path.to_string())
}
