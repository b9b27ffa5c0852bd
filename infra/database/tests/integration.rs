use foodloop_database::*;

const NOTES_V1: Migration = Migration::new(
    "notes",
    "0001",
    "DEFINE TABLE IF NOT EXISTS note SCHEMAFULL;
     DEFINE FIELD IF NOT EXISTS body ON note TYPE string;",
);
const NOTES_V2: Migration =
    Migration::new("notes", "0002", "DEFINE INDEX IF NOT EXISTS note_body ON note FIELDS body UNIQUE;");

async fn memory_db(migrations: impl IntoIterator<Item = Migration>) -> Database {
    Database::builder()
        .url("mem://")
        .session("test_ns", "test_db")
        .migrations(migrations)
        .init()
        .await
        .expect("connect to mem://")
}

#[tokio::test]
async fn connect_in_memory_and_health_check() {
    let db = memory_db([]).await;

    db.health().await.expect("health check");
    assert_eq!(db.namespace(), "test_ns");
    assert_eq!(db.name(), "test_db");
}

#[tokio::test]
async fn missing_parameters_fail_validation() {
    let err = Database::builder().init().await.unwrap_err();
    assert!(matches!(err, DatabaseError::Validation { .. }));

    let err = Database::builder().url("mem://").init().await.unwrap_err();
    assert!(matches!(err, DatabaseError::Validation { .. }));
}

#[tokio::test]
async fn migrations_apply_once() {
    let db = memory_db([NOTES_V1]).await;

    let report = db.migrate(&[NOTES_V1, NOTES_V2]).await.expect("second run");
    assert_eq!(report.skipped, vec!["notes:0001".to_owned()]);
    assert_eq!(report.applied, vec!["notes:0002".to_owned()]);

    let report = db.migrate(&[NOTES_V1, NOTES_V2]).await.expect("third run");
    assert!(report.applied.is_empty());
    assert_eq!(report.skipped.len(), 2);
}

#[tokio::test]
async fn changed_script_is_rejected() {
    let db = memory_db([NOTES_V1]).await;

    let tampered = Migration::new("notes", "0001", "DEFINE TABLE IF NOT EXISTS note SCHEMALESS;");
    let err = db.migrate(&[tampered]).await.unwrap_err();
    assert!(matches!(err, DatabaseError::Migration { .. }));
}

#[tokio::test]
async fn failing_script_is_not_recorded() {
    let db = memory_db([]).await;

    let broken = Migration::new("broken", "0001", "THIS IS NOT SURQL;");
    assert!(db.migrate(&[broken]).await.is_err());

    let fixed = Migration::new("broken", "0001", "DEFINE TABLE IF NOT EXISTS fixed SCHEMALESS;");
    let report = db.migrate(&[fixed]).await.expect("fixed script applies");
    assert_eq!(report.applied, vec!["broken:0001".to_owned()]);
}
