/// `Content-Type` of every encoded response.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Hand-written encoding of `{"error": ApiError::marshalling()}`.
const FALLBACK_BODY: &str = r#"{"error":{"id":"error_marshalling_http_response","message":"An internal error occurred while generating the response","http_code":500}}"#;

/// A response ready to be written: HTTP status code and JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedResponse {
    pub status: u16,
    pub body: String,
}

impl EncodedResponse {
    /// The response served when encoding an [`ApiResponse`](super::ApiResponse) fails.
    ///
    /// Built without the encoder so it cannot fail itself.
    #[must_use]
    pub fn fallback() -> Self {
        Self { status: 500, body: FALLBACK_BODY.to_owned() }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}
