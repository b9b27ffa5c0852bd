use foodloop::domain::registry::InitializedSlice;
use foodloop::features::{donations::Donations, identity::Identity, is_enabled};
use foodloop_database::Database;

#[tokio::test]
async fn every_slice_is_initialized_with_its_schema() {
    let db = Database::builder()
        .url("mem://")
        .session("facade", "tests")
        .migrations(foodloop::migrations())
        .init()
        .await
        .unwrap();

    let slices = foodloop::init(&db).unwrap();
    assert_eq!(slices.len(), 2);
    assert!(slices.iter().any(|s| s.downcast_ref::<Identity>().is_some()));
    assert!(slices.iter().any(|s| s.downcast_ref::<Donations>().is_some()));
    assert!(slices.iter().all(|s: &InitializedSlice| !s.name.is_empty()));
}

#[test]
fn migrations_are_ordered_and_unique() {
    let keys: Vec<_> = foodloop::migrations().map(|m| format!("{}:{}", m.slice, m.version)).collect();
    assert_eq!(keys, ["identity:0001", "donations:0001"]);
}

#[test]
fn enabled_features() {
    assert!(is_enabled("donations"));
    assert!(!is_enabled("licensing"));
}
