//! Response types (Serialize)

use serde::Serialize;

use phonebook_core::ErrorDescriptor;

/// Wire shape of every error response: `{"status":"error","statusCode":n,"messages":[..]}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope<'a> {
    pub status: &'static str,
    pub status_code: u16,
    pub messages: &'a [String],
}

impl<'a> From<&'a ErrorDescriptor> for ErrorEnvelope<'a> {
    fn from(descriptor: &'a ErrorDescriptor) -> Self {
        Self {
            status: "error",
            status_code: descriptor.status_code(),
            messages: descriptor.messages(),
        }
    }
}
