use squadup_derive::squadup_error;
use std::borrow::Cow;

#[squadup_error]
#[derive(Debug, thiserror::Error)]
pub enum ExplicitError {
    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err = ExplicitError::from(String::from("boom")).with_context("outer");
    assert_eq!(err.context_path(), Some("outer"));
    assert_eq!(err.to_string(), "Internal error (outer): boom");
}
