use squadup_structs::Structured;
use std::fmt;

/// Id of the error served when a response cannot be encoded.
pub const ERROR_MARSHALLING_HTTP_RESPONSE: &str = "error_marshalling_http_response";

/// Details about an error that occurred while handling an endpoint.
///
/// The fallback body in [`EncodedResponse`](super::EncodedResponse) is written by hand and
/// must follow any change to these fields or their tags.
#[derive(Structured, Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    #[field(tag = "id")]
    pub id: String,
    #[field(tag = "message")]
    pub message: String,
    #[field(tag = "http_code")]
    pub http_code: u16,
}

impl ApiError {
    #[must_use]
    pub fn new(id: impl Into<String>, message: impl Into<String>, http_code: u16) -> Self {
        Self { id: id.into(), message: message.into(), http_code }
    }

    /// The error reported when the response itself could not be produced.
    #[must_use]
    pub fn marshalling() -> Self {
        Self::new(ERROR_MARSHALLING_HTTP_RESPONSE, "An internal error occurred while generating the response", 500)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}: {})", self.message, self.id, self.http_code)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_message_id_and_code() {
        let error = ApiError::new("not_found", "User not found", 404);
        assert_eq!(error.to_string(), "User not found (not_found: 404)");
    }

    #[test]
    fn serializes_with_tagged_keys() {
        let error = ApiError::new("bad_input", "Missing email", 400);
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            serde_json::json!({ "id": "bad_input", "message": "Missing email", "http_code": 400 })
        );
    }
}
