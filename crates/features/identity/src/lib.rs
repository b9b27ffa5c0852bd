//! Identity feature slice: the registered users that bearer tokens refer to.
//!
//! Tokens carry the user's email as `sub`; handlers resolve it through
//! [`Identity::find_user`] and treat an unknown email as `404 User not found`.

mod error;
mod model;
mod repository;

pub use error::{IdentityError, IdentityErrorExt};
pub use model::User;
pub use repository::UserRepository;

use foodloop_database::{Database, Migration};
use foodloop_kernel::domain::constants::IDENTITY_SLICE;
use foodloop_kernel::domain::registry::InitializedSlice;

/// Schema owned by this slice.
pub const MIGRATIONS: &[Migration] = &[Migration::new(
    IDENTITY_SLICE,
    "0001",
    "
    DEFINE TABLE IF NOT EXISTS user SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS email ON user TYPE string;
    DEFINE FIELD IF NOT EXISTS name ON user TYPE string;
    DEFINE INDEX IF NOT EXISTS user_email ON user FIELDS email UNIQUE;
    ",
)];

/// Identity feature state
#[foodloop_derive::foodloop_slice]
pub struct Identity {
    users: UserRepository,
}

impl Identity {
    #[must_use]
    pub fn from_database(db: &Database) -> Self {
        Self::new(IdentityInner { users: UserRepository::new(db.clone()) })
    }

    #[must_use]
    pub fn users(&self) -> &UserRepository {
        &self.users
    }

    /// Resolves the user behind a token identity.
    ///
    /// # Errors
    /// Returns [`IdentityError::Database`] if the lookup fails.
    pub async fn find_user(&self, email: &str) -> Result<Option<User>, IdentityError> {
        self.users.find_by_email(email).await
    }
}

/// Initialize the identity feature.
///
/// # Errors
/// Currently infallible; the signature matches the other slices.
pub fn init(db: &Database) -> Result<InitializedSlice, IdentityError> {
    let slice = Identity::from_database(db);
    tracing::info!("Identity slice initialized");

    Ok(InitializedSlice::new(slice))
}
