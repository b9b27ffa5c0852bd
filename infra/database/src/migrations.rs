use crate::error::{DatabaseError, DatabaseErrorExt};
use fxhash::FxHashMap;
use sha2::{Digest, Sha256};
use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use surrealdb::types::SurrealValue;
use tracing::{info, instrument, trace};

/// Bookkeeping table for applied migrations.
const BOOTSTRAP: &str = "
    DEFINE TABLE IF NOT EXISTS migration SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS slice ON migration TYPE string;
    DEFINE FIELD IF NOT EXISTS version ON migration TYPE string;
    DEFINE FIELD IF NOT EXISTS checksum ON migration TYPE string;
    DEFINE FIELD IF NOT EXISTS applied_at ON migration TYPE datetime DEFAULT time::now();
    DEFINE INDEX IF NOT EXISTS migration_key ON migration FIELDS slice, version UNIQUE;
";

/// A versioned schema script owned by one feature slice.
///
/// Scripts run inside a transaction together with their bookkeeping record,
/// so a failing script leaves no trace. Once applied, a script must never
/// change: the runner compares SHA-256 checksums on every start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Migration {
    pub slice: &'static str,
    pub version: &'static str,
    pub script: &'static str,
}

impl Migration {
    #[must_use]
    pub const fn new(slice: &'static str, version: &'static str, script: &'static str) -> Self {
        Self { slice, version, script }
    }

    #[must_use]
    pub fn checksum(&self) -> String {
        hex::encode(Sha256::digest(self.script.as_bytes()))
    }

    fn key(&self) -> String {
        format!("{}:{}", self.slice, self.version)
    }
}

/// Outcome of a migration run, as `slice:version` keys.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    pub applied: Vec<String>,
    pub skipped: Vec<String>,
}

#[derive(Debug, SurrealValue)]
struct AppliedMigration {
    slice: String,
    version: String,
    checksum: String,
}

#[derive(Debug)]
pub(crate) struct MigrationRunner<'a> {
    db: &'a Surreal<Any>,
}

impl<'a> MigrationRunner<'a> {
    pub(crate) const fn new(db: &'a Surreal<Any>) -> Self {
        Self { db }
    }

    #[instrument(skip_all, fields(count = migrations.len()))]
    pub(crate) async fn run(&self, migrations: &[Migration]) -> Result<MigrationReport, DatabaseError> {
        self.db
            .query(BOOTSTRAP)
            .await
            .context("Bootstrapping migration table")?
            .check()
            .map_err(surrealdb::Error::from)
            .context("Bootstrapping migration table")?;

        let applied = self.applied().await?;
        let mut report = MigrationReport::default();

        for migration in migrations {
            let key = migration.key();
            let checksum = migration.checksum();

            if let Some(existing) = applied.get(&key) {
                ensure_checksum_match(migration, &existing.checksum, &checksum)?;
                trace!(migration = %key, "Skipping migration");
                report.skipped.push(key);
                continue;
            }

            self.apply(migration, &checksum).await?;
            info!(migration = %key, "Applied migration");
            report.applied.push(key);
        }

        Ok(report)
    }

    async fn applied(&self) -> Result<FxHashMap<String, AppliedMigration>, DatabaseError> {
        let entries = self
            .db
            .query("SELECT slice, version, checksum FROM migration")
            .await
            .context("Loading applied migrations")?
            .take::<Vec<AppliedMigration>>(0)
            .context("Parsing applied migrations")?;

        Ok(entries
            .into_iter()
            .map(|entry| (format!("{}:{}", entry.slice, entry.version), entry))
            .collect())
    }

    async fn apply(&self, migration: &Migration, checksum: &str) -> Result<(), DatabaseError> {
        let query = format!(
            "BEGIN TRANSACTION;
            {}
            CREATE migration CONTENT {{ slice: $slice, version: $version, checksum: $checksum }};
            COMMIT TRANSACTION;",
            migration.script,
        );

        self.db
            .query(&query)
            .bind(("slice", migration.slice))
            .bind(("version", migration.version))
            .bind(("checksum", checksum.to_owned()))
            .await
            .context(format!("Sending migration {}", migration.key()))?
            .check()
            .map_err(surrealdb::Error::from)
            .context(format!("SQL execution failed at {}", migration.key()))?;

        Ok(())
    }
}

fn ensure_checksum_match(
    migration: &Migration,
    stored: &str,
    current: &str,
) -> Result<(), DatabaseError> {
    if stored == current {
        return Ok(());
    }
    Err(DatabaseError::Migration {
        message: format!(
            "Checksum mismatch for {} (applied {stored}, current {current})",
            migration.key()
        )
        .into(),
        context: Some("Migration already applied with different script".into()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_is_stable_and_script_sensitive() {
        let a = Migration::new("food", "0001", "DEFINE TABLE food;");
        let b = Migration::new("food", "0001", "DEFINE TABLE food SCHEMAFULL;");

        assert_eq!(a.checksum(), a.checksum());
        assert_eq!(a.checksum().len(), 64);
        assert_ne!(a.checksum(), b.checksum());
    }

    #[test]
    fn mismatch_is_reported() {
        let m = Migration::new("food", "0001", "DEFINE TABLE food;");
        let err = ensure_checksum_match(&m, "deadbeef", &m.checksum()).unwrap_err();
        assert!(matches!(err, DatabaseError::Migration { .. }));
        assert!(err.to_string().contains("food:0001"));
    }
}
