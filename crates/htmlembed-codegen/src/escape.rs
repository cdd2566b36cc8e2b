//! String literal escaping
//!
//! Only backslashes and double quotes are escaped. Tabs, newlines and
//! non-ASCII text pass through as-is.

/// Quote `text` as a null-terminated source literal.
///
/// ```
/// use htmlembed_codegen::to_literal;
///
/// assert_eq!(to_literal(r#"say "hi""#), r#""say \"hi\"\0""#);
/// ```
pub fn to_literal(text: &str) -> String {
    // Backslashes first, otherwise the quote escapes get doubled
    let escaped = text.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\\0\"", escaped)
}

/// Undo [`to_literal`]. Returns `None` unless `literal` is quoted, ends in
/// `\0` and contains only `\\` and `\"` escapes.
pub fn from_literal(literal: &str) -> Option<String> {
    let body = literal.strip_prefix('"')?.strip_suffix("\\0\"")?;

    let mut text = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next()? {
                '\\' => text.push('\\'),
                '"' => text.push('"'),
                _ => return None,
            },
            '"' => return None,
            _ => text.push(c),
        }
    }
    Some(text)
}
