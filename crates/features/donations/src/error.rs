use foodloop_database::DatabaseError;
use std::borrow::Cow;

pub(crate) const FOOD_NOT_FOUND: &str = "Food not found";
pub(crate) const NOT_CLAIMABLE: &str = "Food is not available for claim";

/// A specialized [`DonationsError`] enum of this crate.
#[foodloop_derive::foodloop_error]
pub enum DonationsError {
    #[error("{message}")]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// The food exists but its status is not `available`.
    #[error("{message}")]
    NotClaimable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("Donations validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("Donations database error{}: {source}", format_context(.context))]
    Database { source: DatabaseError, context: Option<Cow<'static, str>> },
    #[error("Internal donations error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl DonationsError {
    pub(crate) fn food_not_found() -> Self {
        Self::NotFound { message: FOOD_NOT_FOUND.into(), context: None }
    }

    pub(crate) fn not_claimable() -> Self {
        Self::NotClaimable { message: NOT_CLAIMABLE.into(), context: None }
    }
}
