#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the workspace.
//! This crate derives the field schema consumed by the flattening serializer and
//! generates the boilerplate shared by every error enum.
//!
//! ## Usage
//! Consumers normally go through `squadup-structs`, which re-exports [`Structured`]:
//! ```toml
//! [dependencies]
//! squadup-structs = { path = "../crates/shared/structs" }
//! ```
//!
//! See each macro’s docstring for examples; they are `ignore`d to avoid compiling in this crate,
//! but should be copied into consuming crates’ tests/examples as needed.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derives the field schema of a struct for the flattening serializer.
///
/// Every named field becomes a `squadup_structs::Field`. A field is *exported* when it is
/// declared `pub`; any narrower visibility hides it from the output.
///
/// # Field attributes
///
/// * `#[field(tag = "name,omitempty")]` - Serialization tag: an override key followed by
///   comma-separated flags. `"-"` omits the field.
/// * `#[field(embed)]` - Marks the field as embedded: if its value is a structured object,
///   its fields are merged into the parent's mapping.
///
/// # Generated Items
///
/// * `squadup_structs::Structured` listing the fields in declaration order.
/// * `squadup_structs::FieldType`, treating the struct as zero when every field is zero.
/// * `serde::Serialize`, writing the flattened mapping. Do not derive `Serialize` as well.
///
/// # Errors
/// Emits a compile-time error on enums, tuple structs, unknown `#[field]` keys and
/// duplicate tags.
///
/// # Example
///
/// ```rust,ignore
/// use squadup_structs::Structured;
///
/// #[derive(Structured)]
/// pub struct Metadata {
///     #[field(tag = "created_at")]
///     pub created_at: i64,
/// }
///
/// #[derive(Structured)]
/// pub struct User {
///     #[field(embed)]
///     pub meta: Metadata,
///     #[field(tag = "first_name,omitempty")]
///     pub first_name: String,
///     password_hash: String,
/// }
/// ```
#[proc_macro_derive(Structured, attributes(field))]
pub fn derive_structured(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::structured::expand_derive(input).into()
}

/// Attribute macro for defining domain-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Context Path**: Generates a companion `...Ext` trait that adds `.context()` to any
///   `Result` convertible into this error. Context is prepended, so repeated calls build a
///   path such as `"outer > inner"`; read it back with `context_path()`.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source` field.
/// * **Internal Fallback**: Provides `From<&str>` and `From<String>` if an `Internal` variant
///   is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping external errors must include a `source: T` field or a field marked
///    with `#[source]`/`#[from]`, and a context field.
/// 4. Tuple or unit variants are rejected.
///
/// # Example
///
/// ```rust,ignore
/// use squadup_derive::squadup_error;
/// use std::borrow::Cow;
///
/// #[squadup_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn squadup_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
