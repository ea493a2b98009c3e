//! # Response Envelope
//!
//! Every handler answers with an [`ApiResponse`]: a [`ResultStatus`], an optional
//! [`ApiError`] and an optional payload whose fields are flattened into the envelope.
//!
//! Encoding validates the envelope first. A `success` response must not carry an error and
//! a `fail` response must carry one.

mod api_error;
mod encoded;
mod envelope;
mod error;
#[cfg(feature = "server")]
mod server;
mod status;

pub use api_error::{ApiError, ERROR_MARSHALLING_HTTP_RESPONSE};
pub use encoded::{EncodedResponse, JSON_CONTENT_TYPE};
pub use envelope::ApiResponse;
pub use error::{ResponseError, ResponseErrorExt};
pub use status::ResultStatus;
