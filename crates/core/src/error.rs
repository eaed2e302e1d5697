//! Client-facing error value produced by validation and persistence mapping.

use std::fmt;

/// Message for a request whose `Content-Type` is not a JSON media type.
pub const UNSUPPORTED_CONTENT_TYPE: &str = "Unsupported content type";

/// Message for a body that is not syntactically valid JSON.
pub const MALFORMED_JSON: &str = "Malformatted JSON";

/// Message for a payload lacking `name` or `number`.
pub const MISSING_FIELDS: &str = "Missing name and/or number fields";

/// Message for a path identifier the store cannot parse.
pub const MALFORMED_ID: &str = "Malformed Id";

/// Message for a body exceeding the transport's size limit.
pub const PAYLOAD_TOO_LARGE: &str = "Request body too large";

/// Message returned for every server fault.
pub const INTERNAL_ERROR: &str = "Internal server error";

/// HTTP status code plus ordered human-readable messages.
///
/// Built once at the point an error is detected and rendered once by the
/// transport layer. Client errors (400/422) always carry at least one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDescriptor {
    status_code: u16,
    messages: Vec<String>,
}

impl ErrorDescriptor {
    /// 400 with a single message.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self { status_code: 400, messages: vec![message.into()] }
    }

    /// 422 carrying every collected violation message.
    ///
    /// Falls back to a generic message so the list is never empty.
    #[must_use]
    pub fn unprocessable(messages: Vec<String>) -> Self {
        let messages =
            if messages.is_empty() { vec!["Validation failed".to_owned()] } else { messages };
        Self { status_code: 422, messages }
    }

    /// 413 with the fixed client-facing message.
    #[must_use]
    pub fn payload_too_large() -> Self {
        Self { status_code: 413, messages: vec![PAYLOAD_TOO_LARGE.to_owned()] }
    }

    /// 500 with the fixed client-facing message.
    #[must_use]
    pub fn internal() -> Self {
        Self { status_code: 500, messages: vec![INTERNAL_ERROR.to_owned()] }
    }

    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }
}

impl fmt::Display for ErrorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status_code, self.messages.join("; "))
    }
}

impl std::error::Error for ErrorDescriptor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_carries_single_message() {
        let err = ErrorDescriptor::bad_request(MISSING_FIELDS);
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.messages(), [MISSING_FIELDS.to_owned()]);
        assert!(err.is_client_error());
    }

    #[test]
    fn unprocessable_keeps_order() {
        let err = ErrorDescriptor::unprocessable(vec![
            "Name already exists".to_owned(),
            "Number must be at least 8 characters long".to_owned(),
        ]);
        assert_eq!(err.status_code(), 422);
        assert_eq!(err.messages()[0], "Name already exists");
        assert_eq!(err.messages()[1], "Number must be at least 8 characters long");
    }

    #[test]
    fn unprocessable_is_never_empty() {
        let err = ErrorDescriptor::unprocessable(Vec::new());
        assert_eq!(err.messages().len(), 1);
    }

    #[test]
    fn internal_is_not_client_error() {
        let err = ErrorDescriptor::internal();
        assert_eq!(err.status_code(), 500);
        assert!(!err.is_client_error());
        assert_eq!(err.to_string(), "500: Internal server error");
    }
}
