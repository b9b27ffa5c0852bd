//! # Database Infrastructure
//!
//! Initializes and shares a [SurrealDB](https://surrealdb.com) connection across the workspace.
//!
//! ## Key Features
//! - **Engine Agnostic**: `mem://`, `rocksdb://`, `ws://` and `http://` via the `any` engine.
//! - **Resilient Connectivity**: health checks with exponential backoff during startup.
//! - **Migrations**: feature slices hand their versioned scripts to the builder; each
//!   script is applied once, in order, and checksummed.
//!
//! ## Example
//!
//! ```rust
//! use foodloop_database::{Database, DatabaseError, Migration};
//!
//! const SCHEMA: Migration = Migration::new("demo", "0001", "DEFINE TABLE demo SCHEMALESS;");
//!
//! #[tokio::main]
//! async fn main() -> Result<(), DatabaseError> {
//!     let db = Database::builder()
//!         .url("mem://")
//!         .session("foodloop", "core")
//!         .migrations([SCHEMA])
//!         .init()
//!         .await?;
//!
//!     db.health().await?;
//!     Ok(())
//! }
//! ```

mod error;
mod migrations;

pub use error::{DatabaseError, DatabaseErrorExt};
pub use migrations::{Migration, MigrationReport};
pub use surrealdb;

use migrations::MigrationRunner;
use std::ops::Deref;
use std::sync::Arc;
use std::time::Duration;
use surrealdb::Surreal;
use surrealdb::engine::any::{Any, connect};
use surrealdb::opt::auth::Root;
use tracing::{info, instrument, warn};

const HEALTH_ATTEMPTS: u32 = 3;
const HEALTH_INITIAL_DELAY: Duration = Duration::from_millis(500);

/// Inner state of the [`Database`] wrapper.
#[derive(Debug)]
pub struct DatabaseInner {
    instance: Surreal<Any>,
    ns: String,
    db: String,
}

impl Drop for DatabaseInner {
    fn drop(&mut self) {
        info!(ns = %self.ns, db = %self.db, "SurrealDB session handle dropped");
    }
}

/// Cheaply clonable `SurrealDB` handle; derefs to the client.
#[derive(Debug, Clone)]
pub struct Database {
    inner: Arc<DatabaseInner>,
}

impl Database {
    /// Creates a new [`DatabaseBuilder`].
    pub fn builder() -> DatabaseBuilder {
        DatabaseBuilder::new()
    }

    /// Active namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.inner.ns
    }

    /// Active database name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.db
    }

    /// Applies `migrations` that have not been applied yet.
    ///
    /// # Errors
    /// * [`DatabaseError::Migration`] if an applied version's script changed.
    /// * [`DatabaseError::Surreal`] if a script fails; its transaction is rolled back.
    pub async fn migrate(&self, migrations: &[Migration]) -> Result<MigrationReport, DatabaseError> {
        MigrationRunner::new(&self.inner.instance).run(migrations).await
    }
}

impl Deref for Database {
    type Target = Surreal<Any>;

    fn deref(&self) -> &Self::Target {
        &self.inner.instance
    }
}

/// A fluent builder for configuring and establishing a `SurrealDB` connection.
#[must_use = "builders do nothing unless you call .init()"]
#[derive(Debug, Default)]
pub struct DatabaseBuilder {
    url: Option<String>,
    ns: Option<String>,
    db: Option<String>,
    auth: Option<(String, String)>,
    migrations: Vec<Migration>,
}

impl DatabaseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the connection URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the namespace and database name.
    pub fn session(mut self, namespace: impl Into<String>, database: impl Into<String>) -> Self {
        self.ns = Some(namespace.into());
        self.db = Some(database.into());
        self
    }

    /// Add root credentials to the connection.
    pub fn auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth = Some((username.into(), password.into()));
        self
    }

    /// Appends migrations to apply once the session is active.
    pub fn migrations(mut self, migrations: impl IntoIterator<Item = Migration>) -> Self {
        self.migrations.extend(migrations);
        self
    }

    /// Connects, waits for the engine to become healthy, signs in, activates the
    /// session and applies the registered migrations.
    ///
    /// # Errors
    /// * [`DatabaseError::Validation`] if URL, namespace or database are missing.
    /// * [`DatabaseError::Connection`] if the engine fails to start or stays unhealthy.
    /// * [`DatabaseError::Auth`] if the root credentials are rejected.
    /// * [`DatabaseError::Surreal`] / [`DatabaseError::Migration`] from session setup or migrations.
    #[instrument(skip(self), fields(url = self.url, ns = self.ns, db = self.db))]
    pub async fn init(self) -> Result<Database, DatabaseError> {
        let url = self.url.ok_or(DatabaseError::Validation {
            message: "URL is required".into(),
            context: None,
        })?;
        let ns = self.ns.ok_or(DatabaseError::Validation {
            message: "Namespace is required".into(),
            context: None,
        })?;
        let db = self.db.ok_or(DatabaseError::Validation {
            message: "Database is required".into(),
            context: None,
        })?;

        let instance = connect(&url).await.map_err(|e| DatabaseError::Connection {
            message: e.to_string().into(),
            context: Some("Initializing engine".into()),
        })?;

        wait_until_healthy(&instance, &url).await?;

        if let Some((username, password)) = self.auth {
            instance.signin(Root { username, password }).await.map_err(|e| {
                DatabaseError::Auth { message: e.to_string().into(), context: Some(url.into()) }
            })?;
        }

        instance.use_ns(&ns).use_db(&db).await.context("Activating session")?;

        let version =
            instance.version().await.map_or_else(|_| "unknown".to_owned(), |v| v.to_string());
        info!(namespace = %ns, database = %db, %version, "SurrealDB connection established");

        let database = Database { inner: Arc::new(DatabaseInner { instance, ns, db }) };

        let report = database.migrate(&self.migrations).await?;
        info!(
            applied = report.applied.len(),
            skipped = report.skipped.len(),
            "Database migrations applied successfully"
        );

        Ok(database)
    }
}

async fn wait_until_healthy(instance: &Surreal<Any>, url: &str) -> Result<(), DatabaseError> {
    let mut delay = HEALTH_INITIAL_DELAY;
    for attempt in 1..=HEALTH_ATTEMPTS {
        if instance.health().await.is_ok() {
            return Ok(());
        }
        if attempt == HEALTH_ATTEMPTS {
            break;
        }
        warn!(attempt, ?delay, "Database not ready, retrying...");
        tokio::time::sleep(delay).await;
        delay *= 2;
    }

    Err(DatabaseError::Connection {
        message: "Unhealthy after retries".into(),
        context: Some(url.to_owned().into()),
    })
}
