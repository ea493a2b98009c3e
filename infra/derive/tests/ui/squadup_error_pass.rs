use squadup_derive::squadup_error;
use std::borrow::Cow;

#[squadup_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err = DemoError::from("boom").with_context("inner").with_context("outer");
    assert_eq!(err.context_path(), Some("outer > inner"));
}
