use serde::{Deserialize, Serialize};
use surrealdb_types::SurrealValue;

/// A registered account. The email is the identity carried in access tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SurrealValue)]
pub struct User {
    pub email: String,
    pub name: String,
}

impl User {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self { email: email.into(), name: name.into() }
    }
}
