use foodloop_database::Database;
use foodloop_identity::{Identity, IdentityError, MIGRATIONS, User, init};

async fn memory_db() -> Database {
    Database::builder()
        .url("mem://")
        .session("identity", "tests")
        .migrations(MIGRATIONS.iter().copied())
        .init()
        .await
        .expect("in-memory database")
}

#[tokio::test]
async fn init_creates_slice() {
    let db = memory_db().await;
    let slice = init(&db).expect("init should succeed");

    assert_eq!(slice.id, std::any::TypeId::of::<Identity>());
    assert!(slice.downcast_ref::<Identity>().is_some());
}

#[tokio::test]
async fn registered_user_is_found_by_email() {
    let identity = Identity::from_database(&memory_db().await);
    let ada = User::new("ada@example.com", "Ada");

    assert_eq!(identity.users().insert(&ada).await.unwrap(), ada);
    assert_eq!(identity.find_user("ada@example.com").await.unwrap(), Some(ada));
    assert_eq!(identity.find_user("grace@example.com").await.unwrap(), None);
}

#[tokio::test]
async fn email_lookup_is_exact() {
    let identity = Identity::from_database(&memory_db().await);
    identity.users().insert(&User::new("ada@example.com", "Ada")).await.unwrap();

    assert_eq!(identity.find_user("ADA@example.com").await.unwrap(), None);
    assert_eq!(identity.find_user("").await.unwrap(), None);
}

#[tokio::test]
async fn duplicate_or_empty_email_is_rejected() {
    let identity = Identity::from_database(&memory_db().await);
    identity.users().insert(&User::new("ada@example.com", "Ada")).await.unwrap();

    let duplicate = identity.users().insert(&User::new("ada@example.com", "Other")).await;
    assert!(matches!(duplicate, Err(IdentityError::Validation { .. })));

    let empty = identity.users().insert(&User::new("  ", "Nobody")).await;
    assert!(matches!(empty, Err(IdentityError::Validation { .. })));
}
