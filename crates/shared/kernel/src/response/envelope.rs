use super::api_error::ApiError;
use super::encoded::EncodedResponse;
use super::error::{ResponseError, ResponseErrorExt};
use super::status::ResultStatus;
use serde::Serialize;
use squadup_structs::{FieldType, Flattener, Structured};

/// The JSON envelope returned by every endpoint.
///
/// The payload is embedded: its fields appear next to `status` and `error` rather than under
/// a key of their own. Payload keys named `status` or `error` are filed under `data`.
#[derive(Structured, Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    #[field(tag = "status")]
    pub status: ResultStatus,
    #[field(tag = "error")]
    pub error: Option<ApiError>,
    #[field(embed, tag = ",omitempty")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// A successful response carrying `data`.
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self { status: ResultStatus::Success, error: None, data: Some(data) }
    }

    /// A failed response without payload.
    #[must_use]
    pub const fn fail(error: ApiError) -> Self {
        Self { status: ResultStatus::Fail, error: Some(error), data: None }
    }

    /// Attaches an error and marks the response as failed.
    #[must_use]
    pub fn with_error(mut self, id: impl Into<String>, message: impl Into<String>, http_code: u16) -> Self {
        self.status = ResultStatus::Fail;
        self.error = Some(ApiError::new(id, message, http_code));
        self
    }

    /// HTTP status code the response is served with.
    #[must_use]
    pub fn http_code(&self) -> u16 {
        self.error.as_ref().map_or(200, |error| error.http_code)
    }

    /// Checks that the status and the error agree.
    ///
    /// # Errors
    /// * [`ResponseError::Validation`] If a `success` response carries an error or a `fail`
    ///   response carries none.
    pub fn validate(&self) -> Result<(), ResponseError> {
        match (self.status, &self.error) {
            (ResultStatus::Success, Some(_)) => Err(ResponseError::Validation {
                message: "a `success` response can not carry an error".into(),
                context: None,
            }),
            (ResultStatus::Fail, None) => Err(ResponseError::Validation {
                message: "a `fail` response must carry an error".into(),
                context: None,
            }),
            _ => Ok(()),
        }
    }
}

impl<T: FieldType + Serialize> ApiResponse<T> {
    /// Validates and encodes the response with the default recursion bound.
    ///
    /// # Errors
    /// * See [`ApiResponse::encode_with`].
    pub fn encode(&self) -> Result<EncodedResponse, ResponseError> {
        self.encode_with(&Flattener::default())
    }

    /// Validates and encodes the response.
    ///
    /// # Errors
    /// * [`ResponseError::Validation`] If status and error disagree.
    /// * [`ResponseError::Flatten`] If the payload cannot be flattened.
    /// * [`ResponseError::Encoding`] If a value fails to serialize.
    pub fn encode_with(&self, flattener: &Flattener) -> Result<EncodedResponse, ResponseError> {
        self.validate()?;

        let map = flattener.flatten(self).context("Failed to flatten response")?;
        let body = serde_json::to_string(&map).context("Failed to encode response")?;

        Ok(EncodedResponse { status: self.http_code(), body })
    }
}

impl<T> From<ApiError> for ApiResponse<T> {
    fn from(error: ApiError) -> Self {
        Self::fail(error)
    }
}
