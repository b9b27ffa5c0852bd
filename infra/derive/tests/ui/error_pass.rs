use foodloop_derive::foodloop_error;
use std::borrow::Cow;

#[foodloop_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read_missing() -> Result<Vec<u8>, DemoError> {
    std::fs::read("/definitely/not/here").context("Reading fixture")
}

fn lookup() -> Result<(), DemoError> {
    Err(DemoError::NotFound { message: "food".into(), context: None }).context("Loading food 7")
}

fn main() {
    let err = read_missing().unwrap_err();
    assert!(matches!(err, DemoError::Io { context: Some(_), .. }));
    assert!(err.to_string().starts_with("IO error (Reading fixture): "));

    let err = lookup().unwrap_err();
    assert_eq!(err.to_string(), "Not found (Loading food 7): food");

    let err: DemoError = "boom".into();
    assert_eq!(err.to_string(), "Internal error: boom");

    let err: DemoError = std::io::Error::other("disk").into();
    assert!(matches!(err, DemoError::Io { context: None, .. }));
}
