//! # Flatten Errors
//!
//! Both failures are structural: they depend only on the shape of the input, never on
//! timing or environment, and abort the whole call without a partial mapping.

use std::borrow::Cow;

/// Failures raised by [`Flattener::flatten`](crate::Flattener::flatten).
///
/// Each embedded level the error crosses prepends its field name to the context, so
/// [`FlattenError::context_path`] reads like `"outer > inner"`.
#[squadup_derive::squadup_error]
pub enum FlattenError {
    /// Embedded structured fields nest deeper than the configured bound.
    #[error("Recursed past level specified in recursion max of {limit}{}", format_context(.context))]
    RecursionExceeded { limit: usize, context: Option<Cow<'static, str>> },

    /// The collision bucket for an embedded field cannot be placed because its name is
    /// already a key at that level.
    #[error("Embedded field name `{name}` is already taken{}", format_context(.context))]
    NameConflict { name: &'static str, context: Option<Cow<'static, str>> },
}
