use squadup_structs::FlattenError;
use std::borrow::Cow;

#[squadup_derive::squadup_error]
pub enum ResponseError {
    #[error("Response validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Response flatten error{}: {source}", format_context(.context))]
    Flatten { source: FlattenError, context: Option<Cow<'static, str>> },

    #[error("Response encoding error{}: {source}", format_context(.context))]
    Encoding { source: serde_json::Error, context: Option<Cow<'static, str>> },
}
