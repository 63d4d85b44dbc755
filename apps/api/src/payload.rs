//! Body decoding shared by the analysis endpoints.
//!
//! Bodies are decoded by hand instead of through `Json<T>` so that a
//! malformed body is an internal failure (500) and field presence follows
//! truthiness: absent, `null`, `false`, `0` and `""` all count as missing.

use anyhow::{bail, Context, Result};
use bytes::Bytes;
use serde_json::Value;

/// Decodes a request body as JSON, whatever its `Content-Type`.
///
/// A literal `null` body is rejected here: it has no fields to look up.
pub fn decode_body(body: &Bytes) -> Result<Value> {
    let value: Value =
        serde_json::from_slice(body).context("request body is not valid JSON")?;
    if value.is_null() {
        bail!("request body is null");
    }
    Ok(value)
}

/// JavaScript truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Returns the named field when it is present and truthy.
/// Non-object bodies have no fields.
pub fn truthy_field<'a>(body: &'a Value, key: &str) -> Option<&'a Value> {
    body.get(key).filter(|v| is_truthy(v))
}

/// Text form of a field: strings as-is, anything else as its JSON rendering.
pub fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_body_rejects_non_json() {
        let err = decode_body(&Bytes::from_static(b"resume=foo")).unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn test_decode_body_rejects_empty_body() {
        assert!(decode_body(&Bytes::new()).is_err());
    }

    #[test]
    fn test_decode_body_rejects_null() {
        assert!(decode_body(&Bytes::from_static(b"null")).is_err());
    }

    #[test]
    fn test_decode_body_accepts_array() {
        let value = decode_body(&Bytes::from_static(b"[1, 2]")).unwrap();
        assert!(value.is_array());
    }

    #[test]
    fn test_falsy_values() {
        for v in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!is_truthy(&v), "{v} should be falsy");
        }
    }

    #[test]
    fn test_truthy_values() {
        for v in [json!(true), json!(1), json!(-2.5), json!(" "), json!([]), json!({})] {
            assert!(is_truthy(&v), "{v} should be truthy");
        }
    }

    #[test]
    fn test_truthy_field_on_non_object_is_none() {
        assert!(truthy_field(&json!("resume_text"), "resume_text").is_none());
        assert!(truthy_field(&json!([1]), "resume_text").is_none());
    }

    #[test]
    fn test_truthy_field_skips_empty_string() {
        let body = json!({"resume_text": "", "job_description": "Senior Engineer"});
        assert!(truthy_field(&body, "resume_text").is_none());
        assert!(truthy_field(&body, "job_description").is_some());
    }

    #[test]
    fn test_field_text_renders_non_strings() {
        assert_eq!(field_text(&json!("foo")), "foo");
        assert_eq!(field_text(&json!(42)), "42");
        assert_eq!(field_text(&json!({"a": 1})), "{\"a\":1}");
    }
}
