use super::encoded::{EncodedResponse, JSON_CONTENT_TYPE};
use super::envelope::ApiResponse;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use squadup_structs::FieldType;
use tracing::error;

impl IntoResponse for EncodedResponse {
    fn into_response(self) -> Response {
        let status = match StatusCode::from_u16(self.status) {
            Ok(status) => status,
            Err(err) => {
                error!(status = self.status, error = %err, "Invalid HTTP status in API response");
                return fallback_response();
            }
        };

        (status, [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))], self.body).into_response()
    }
}

impl<T: FieldType + Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        match self.encode() {
            Ok(encoded) => encoded.into_response(),
            Err(err) => {
                error!(error = %err, "Failed to encode API response");
                fallback_response()
            }
        }
    }
}

fn fallback_response() -> Response {
    let fallback = EncodedResponse::fallback();
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
        fallback.body,
    )
        .into_response()
}
