//! Field rules for the `Todo` entity.
//!
//! Request bodies arrive as loosely-typed JSON, so the rules here operate on
//! [`serde_json::Value`] and decide what may reach the store:
//!
//! - a title is stored trimmed and is never empty or whitespace-only
//! - a present-but-non-string title is rejected, `null` included
//! - `completed` is coerced with JavaScript truthiness

use serde_json::Value;

use crate::error::CoreError;

/// Entity name used in [`CoreError::NotFound`].
pub const ENTITY: &str = "Todo";

/// Message returned when a create request has no usable title.
pub const TITLE_REQUIRED: &str = "Title is required";

/// Message returned when an update request carries an unusable title.
pub const TITLE_INVALID: &str = "Title must be a non-empty string";

/// Validate the `title` of a create request and return it trimmed.
///
/// `raw` is `None` when the key was absent from the body.
///
/// ```
/// use serde_json::json;
/// use todo_core::todo::validate_new_title;
///
/// assert_eq!(validate_new_title(Some(&json!("  Buy milk "))).unwrap(), "Buy milk");
/// assert!(validate_new_title(None).is_err());
/// ```
pub fn validate_new_title(raw: Option<&Value>) -> Result<String, CoreError> {
    raw.and_then(trimmed_title)
        .ok_or_else(|| CoreError::Validation(TITLE_REQUIRED.to_string()))
}

/// Validate the optional `title` of an update request.
///
/// Returns `Ok(None)` when the key was absent (leave the column untouched)
/// and the trimmed title when it was present and usable.
pub fn validate_title_patch(raw: Option<&Value>) -> Result<Option<String>, CoreError> {
    match raw {
        None => Ok(None),
        Some(value) => trimmed_title(value)
            .map(Some)
            .ok_or_else(|| CoreError::Validation(TITLE_INVALID.to_string())),
    }
}

/// Coerce an arbitrary JSON value into a completion flag.
///
/// Follows JavaScript truthiness: `false`, `null`, `0` and `""` are false,
/// every other value is true.
pub fn coerce_completed(raw: &Value) -> bool {
    match raw {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn trimmed_title(value: &Value) -> Option<String> {
    let trimmed = value
        .as_str()?
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
