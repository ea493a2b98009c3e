//! Kernel utilities shared by the server and its handlers.
//! Keep this crate lightweight; it holds config loading and the JSON response envelope.
//!
//! ## Responses
//! ```rust
//! use squadup_kernel::response::{ApiResponse, ResultStatus};
//! use squadup_structs::Structured;
//!
//! #[derive(Structured)]
//! struct Pong {
//!     pub message: String,
//! }
//!
//! let encoded = ApiResponse::success(Pong { message: "pong".into() }).encode().unwrap();
//! assert_eq!(encoded.status, 200);
//! assert_eq!(ResultStatus::Success.as_ref(), "success");
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use squadup_kernel::config::{AppConfig, load_config};
//! let cfg: AppConfig = load_config(Some("squadup.toml")).unwrap();
//! ```
pub mod config;
pub mod response;

pub use squadup_domain as domain;
