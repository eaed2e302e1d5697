//! Request validation for person create/update payloads.
//!
//! Pure functions: content type first, then JSON syntax, then field presence.
//! Length and uniqueness rules belong to the store and are reported through
//! the persistence path instead.

use serde_json::Value;

use crate::error::{ErrorDescriptor, MALFORMED_JSON, MISSING_FIELDS, UNSUPPORTED_CONTENT_TYPE};
use crate::person::PersonInput;

/// Whether `content_type` names `application/json` or an `application/*+json` type.
///
/// Parameters such as `charset` are ignored and matching is case-insensitive.
#[must_use]
pub fn is_json_media_type(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    let Some(subtype) = essence.strip_prefix("application/") else {
        return false;
    };
    subtype == "json" || subtype.strip_suffix("+json").is_some_and(|prefix| !prefix.is_empty())
}

/// Rejects requests whose declared content type is absent or not JSON.
pub fn check_content_type(content_type: Option<&str>) -> Result<(), ErrorDescriptor> {
    match content_type {
        Some(ct) if is_json_media_type(ct) => Ok(()),
        _ => Err(ErrorDescriptor::bad_request(UNSUPPORTED_CONTENT_TYPE)),
    }
}

/// Decodes a request body. An empty body decodes as an empty object.
pub fn parse_json_body(body: &[u8]) -> Result<Value, ErrorDescriptor> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "rejecting malformed JSON body");
        ErrorDescriptor::bad_request(MALFORMED_JSON)
    })
}

/// Extracts a non-empty text value. Non-zero numbers are accepted in their
/// decimal form; zero is falsy and counts as missing.
fn field_text(body: &Value, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

/// Checks that `name` and `number` are both present and non-empty.
pub fn validate_person(body: &Value) -> Result<PersonInput, ErrorDescriptor> {
    match (field_text(body, "name"), field_text(body, "number")) {
        (Some(name), Some(number)) => Ok(PersonInput { name, number }),
        _ => Err(ErrorDescriptor::bad_request(MISSING_FIELDS)),
    }
}

/// Runs the whole stage over a raw request.
pub fn validate_request(
    content_type: Option<&str>,
    body: &[u8],
) -> Result<PersonInput, ErrorDescriptor> {
    check_content_type(content_type)?;
    let value = parse_json_body(body)?;
    validate_person(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_json_media_types() {
        assert!(is_json_media_type("application/json"));
        assert!(is_json_media_type("application/json; charset=utf-8"));
        assert!(is_json_media_type("Application/JSON"));
        assert!(is_json_media_type("application/merge-patch+json"));
        assert!(is_json_media_type("application/vnd.api+json;charset=UTF-8"));
    }

    #[test]
    fn rejects_other_media_types() {
        assert!(!is_json_media_type("text/plain"));
        assert!(!is_json_media_type("application/x-www-form-urlencoded"));
        assert!(!is_json_media_type("application/+json"));
        assert!(!is_json_media_type("text/json"));
        assert!(!is_json_media_type(""));
    }

    #[test]
    fn missing_content_type_is_unsupported() {
        let err = check_content_type(None).unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.messages(), [UNSUPPORTED_CONTENT_TYPE.to_owned()]);
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = parse_json_body(br#"{"name": "Ann""#).unwrap_err();
        assert_eq!(err.messages(), [MALFORMED_JSON.to_owned()]);
    }

    #[test]
    fn empty_body_counts_as_missing_fields() {
        let err = validate_request(Some("application/json"), b"  ").unwrap_err();
        assert_eq!(err.messages(), [MISSING_FIELDS.to_owned()]);
    }

    #[test]
    fn missing_number_is_rejected() {
        let err = validate_person(&json!({"name": "Ann"})).unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.messages(), [MISSING_FIELDS.to_owned()]);
    }

    #[test]
    fn empty_strings_and_non_scalars_are_missing() {
        assert!(validate_person(&json!({"name": "", "number": "123-4567890"})).is_err());
        assert!(validate_person(&json!({"name": "Ann", "number": null})).is_err());
        assert!(validate_person(&json!({"name": ["Ann"], "number": "123-4567890"})).is_err());
        assert!(validate_person(&json!(["Ann", "123-4567890"])).is_err());
    }

    #[test]
    fn numeric_number_is_stringified() {
        let input = validate_person(&json!({"name": "Ann", "number": 1234567890})).unwrap();
        assert_eq!(input.number, "1234567890");
    }

    #[test]
    fn zero_number_is_missing() {
        for number in [json!(0), json!(0.0), json!(-0.0)] {
            let err = validate_person(&json!({"name": "Ann", "number": number})).unwrap_err();
            assert_eq!(err.status_code(), 400);
            assert_eq!(err.messages(), [MISSING_FIELDS.to_owned()]);
        }
    }

    #[test]
    fn valid_payload_passes_unchanged() {
        let input = validate_request(
            Some("application/json"),
            br#"{"name":"Ann","number":"123-4567890","extra":true}"#,
        )
        .unwrap();
        assert_eq!(input, PersonInput::new("Ann", "123-4567890"));
    }

    #[test]
    fn content_type_is_checked_before_body() {
        let err = validate_request(Some("text/plain"), b"not json").unwrap_err();
        assert_eq!(err.messages(), [UNSUPPORTED_CONTENT_TYPE.to_owned()]);
    }
}
