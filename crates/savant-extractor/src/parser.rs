//! Payload normalization entry points

use crate::cleanup;
use crate::error::ExtractError;
use crate::shape::Shape;
use serde_json::Value;
use tracing::{debug, warn};

/// Maximum characters of payload carried in error diagnostics.
pub const SALVAGE_LIMIT: usize = 500;

/// Normalize a raw payload into a generic JSON value.
///
/// Runs the full cleanup pipeline: fence stripping, start search, trailing
/// prose truncation, then a JSON parse. Pure except for diagnostic logging.
pub fn extract_value(payload: Option<&str>) -> Result<Value, ExtractError> {
    let raw = payload.ok_or(ExtractError::EmptyPayload)?;
    if raw.trim().is_empty() {
        return Err(ExtractError::EmptyPayload);
    }

    let mut cleaned = cleanup::strip_code_fences(raw);

    if !cleaned.starts_with('{') && !cleaned.starts_with('[') {
        match cleanup::find_json_start(cleaned) {
            Some(start) => cleaned = &cleaned[start..],
            None => {
                warn!("no JSON start in payload of {} chars", raw.len());
                return Err(ExtractError::NoJsonStart {
                    salvaged: bounded(cleaned),
                });
            }
        }
    }

    let cleaned = cleanup::truncate_trailing_prose(cleaned).trim();

    if !cleaned.starts_with('{') && !cleaned.starts_with('[') {
        return Err(ExtractError::StillInvalid {
            salvaged: bounded(cleaned),
        });
    }

    debug!("parsing cleaned payload of {} chars", cleaned.len());
    serde_json::from_str(cleaned).map_err(|e| {
        warn!("JSON parse failed: {}", e);
        ExtractError::Parse {
            message: e.to_string(),
            snippet: bounded(cleaned),
        }
    })
}

/// Normalize a raw payload into a typed shape.
///
/// Every successful parse passes a mandatory schema step: deserialization
/// into `T` plus the shape's own field checks. Downstream code never sees a
/// value that does not match its declared shape.
pub fn extract<T: Shape>(payload: Option<&str>) -> Result<T, ExtractError> {
    let value = extract_value(payload)?;
    let shaped: T = serde_json::from_value(value).map_err(|e| ExtractError::SchemaMismatch {
        shape: T::NAME,
        detail: e.to_string(),
    })?;

    let missing = shaped.missing_fields();
    if !missing.is_empty() {
        warn!("{} payload missing fields: {}", T::NAME, missing.join(", "));
        return Err(ExtractError::SchemaMismatch {
            shape: T::NAME,
            detail: format!("missing or empty fields: {}", missing.join(", ")),
        });
    }

    Ok(shaped)
}

/// Char-safe bounded prefix for diagnostics.
fn bounded(s: &str) -> String {
    s.chars().take(SALVAGE_LIMIT).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use savant_domain::{Meal, Recipe};
    use serde_json::json;

    #[test]
    fn absent_payload_is_empty() {
        assert_eq!(extract_value(None), Err(ExtractError::EmptyPayload));
    }

    #[test]
    fn whitespace_payload_is_empty() {
        assert_eq!(extract_value(Some("   \n\t ")), Err(ExtractError::EmptyPayload));
        assert_eq!(extract_value(Some("")), Err(ExtractError::EmptyPayload));
    }

    #[test]
    fn plain_json_passes_through() {
        let value = extract_value(Some("{\"a\":1}")).unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn fenced_json_is_unwrapped() {
        let value = extract_value(Some("```json\n{\"a\":1}\n```")).unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn prose_wrapped_json_is_recovered() {
        let payload = "Sure! Here is the plan you asked for:\n{\"a\": 1}\nLet me know if you need anything else.";
        let value = extract_value(Some(payload)).unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn fence_and_prose_combined() {
        let payload = "Here you go:\n```json\n[1, 2, 3]\n```\nEnjoy!";
        // After fence handling the leading prose remains; the start search
        // and terminator truncation deal with both ends.
        let value = extract_value(Some(payload)).unwrap();
        assert_eq!(value, json!([1, 2, 3]));
    }

    #[test]
    fn trailing_text_after_object_is_cut() {
        let value = extract_value(Some("{\"a\":1} some trailing text")).unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn braces_inside_strings_do_not_confuse_truncation() {
        let value = extract_value(Some("{\"a\":\"x } y\"} trailing")).unwrap();
        assert_eq!(value, json!({"a": "x } y"}));
    }

    #[test]
    fn no_json_at_all_fails_with_salvaged_prefix() {
        let err = extract_value(Some("not json at all")).unwrap_err();
        match err {
            ExtractError::NoJsonStart { salvaged } => assert_eq!(salvaged, "not json at all"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn malformed_json_reports_parse_error_with_snippet() {
        let err = extract_value(Some("{\"a\": oops}")).unwrap_err();
        match err {
            ExtractError::Parse { snippet, .. } => assert!(snippet.starts_with("{\"a\":")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn salvaged_prefix_is_bounded() {
        let long = "x".repeat(SALVAGE_LIMIT * 3);
        let err = extract_value(Some(long.as_str())).unwrap_err();
        assert_eq!(err.salvaged().unwrap().chars().count(), SALVAGE_LIMIT);
    }

    #[test]
    fn typed_extraction_yields_shape() {
        let payload = "```json\n{\"name\":\"Omelette\",\"description\":\"Two eggs\",\"calories\":220}\n```";
        let meal: Meal = extract(Some(payload)).unwrap();
        assert_eq!(meal.name, "Omelette");
        assert_eq!(meal.calories, Some(220));
    }

    #[test]
    fn typed_extraction_rejects_wrong_shape() {
        // A meal payload is not a recipe: ingredients and steps are missing.
        let err = extract::<Recipe>(Some("{\"name\":\"Omelette\"}")).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::SchemaMismatch { shape: "Recipe", .. }
        ));
    }

    #[test]
    fn typed_extraction_rejects_empty_required_field() {
        let err = extract::<Meal>(Some("{\"name\":\"  \"}")).unwrap_err();
        match err {
            ExtractError::SchemaMismatch { detail, .. } => assert!(detail.contains("name")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
