use crate::error::IdentityError;
use crate::model::User;
use foodloop_database::{Database, DatabaseErrorExt};
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
pub struct UserRepository {
    db: Database,
}

impl UserRepository {
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Looks a user up by exact email.
    ///
    /// # Errors
    /// Returns [`IdentityError::Database`] if the query fails.
    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, IdentityError> {
        let user = self
            .db
            .query("SELECT email, name FROM user WHERE email = $email LIMIT 1")
            .bind(("email", email.to_owned()))
            .await
            .context("Looking up user")?
            .take::<Option<User>>(0)
            .context("Parsing user")?;

        debug!(found = user.is_some(), "User lookup");
        Ok(user)
    }

    /// Registers a user.
    ///
    /// # Errors
    /// * [`IdentityError::Validation`] if the email is empty or already taken.
    /// * [`IdentityError::Database`] if the write fails.
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn insert(&self, user: &User) -> Result<User, IdentityError> {
        if user.email.trim().is_empty() {
            return Err(IdentityError::Validation {
                message: "Email must not be empty".into(),
                context: None,
            });
        }
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(IdentityError::Validation {
                message: format!("Email {} is already registered", user.email).into(),
                context: None,
            });
        }

        let created = self
            .db
            .query("CREATE user CONTENT { email: $email, name: $name } RETURN email, name")
            .bind(("email", user.email.clone()))
            .bind(("name", user.name.clone()))
            .await
            .context("Creating user")?
            .check()
            .map_err(foodloop_database::surrealdb::Error::from)
            .context("Creating user")?
            .take::<Option<User>>(0)
            .context("Parsing created user")?;

        created.ok_or_else(|| IdentityError::Internal {
            message: "User was not returned after creation".into(),
            context: Some(user.email.clone().into()),
        })
    }
}
