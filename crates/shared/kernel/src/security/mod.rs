//! Bearer token issuing and verification.

#[cfg(feature = "server")]
mod bearer;
mod token;

#[cfg(feature = "server")]
pub use bearer::Caller;
pub use token::{Claims, TokenAuthority, TokenError, TokenErrorExt};
