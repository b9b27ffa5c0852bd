use foodloop_derive::foodloop_error;
use std::borrow::Cow;

#[foodloop_error]
#[derive(Debug)]
pub enum StatusError {
    #[error("Invalid transition from {from}")]
    Transition { from: Cow<'static, str> },
}

fn main() {
    let err = StatusError::Transition { from: "claimed".into() };
    assert_eq!(err.to_string(), "Invalid transition from claimed");
}
