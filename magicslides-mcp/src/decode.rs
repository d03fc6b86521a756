//! Lenient decoding of loosely typed upstream JSON fields.
//!
//! Upstream services are inconsistent about whether counts and identifiers
//! arrive as numbers or strings. These helpers turn a raw field into a
//! well-formed value or `None`.

use serde_json::Value;

/// Non-empty trimmed strings.
pub(crate) fn decode_text(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Non-empty strings, or numbers rendered as strings.
pub(crate) fn decode_identifier(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        _ => decode_text(value),
    }
}

/// Positive integers, or strings whose leading digits form one.
pub(crate) fn decode_slide_count(value: &Value) -> Option<u32> {
    let count = match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => {
            let digits: String = s.trim().chars().take_while(char::is_ascii_digit).collect();
            digits.parse().ok()
        }
        _ => None,
    };
    count.filter(|n| *n > 0)
}
