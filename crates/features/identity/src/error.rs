use foodloop_database::DatabaseError;
use std::borrow::Cow;

/// A specialized [`IdentityError`] enum of this crate.
#[foodloop_derive::foodloop_error]
pub enum IdentityError {
    /// Rejected input, e.g. a duplicate email.
    #[error("Identity validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Storage failures.
    #[error("Identity database error{}: {source}", format_context(.context))]
    Database { source: DatabaseError, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal identity error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
