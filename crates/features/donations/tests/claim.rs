use foodloop_database::Database;
use foodloop_donations::{Donations, DonationsError, MIGRATIONS, NewFood, init};
use foodloop_kernel::domain::food::{FoodId, FoodStatus};
use tokio::task::JoinSet;

async fn donations() -> (Database, Donations) {
    let db = Database::builder()
        .url("mem://")
        .session("donations", "tests")
        .migrations(MIGRATIONS.iter().copied())
        .init()
        .await
        .expect("in-memory database");
    let slice = Donations::from_database(&db);
    (db, slice)
}

fn id(raw: i64) -> FoodId {
    FoodId::new(raw).unwrap()
}

#[tokio::test]
async fn init_registers_slice() {
    let (db, _) = donations().await;
    let slice = init(&db).unwrap();
    assert!(slice.downcast_ref::<Donations>().is_some());
}

#[tokio::test]
async fn available_food_is_claimed_once() {
    let (_, donations) = donations().await;
    donations.foods().insert(&NewFood::available(id(1), "Bread")).await.unwrap();

    let claimed = donations.claim(id(1), "ada@example.com").await.unwrap();
    assert_eq!(claimed.status(), Some(FoodStatus::Claimed));
    assert_eq!(claimed.claimed_by.as_deref(), Some("ada@example.com"));

    let again = donations.claim(id(1), "grace@example.com").await;
    assert!(matches!(again, Err(DonationsError::NotClaimable { .. })));

    let stored = donations.get(id(1)).await.unwrap();
    assert_eq!(stored.claimed_by.as_deref(), Some("ada@example.com"));
}

#[tokio::test]
async fn unknown_food_is_not_found() {
    let (_, donations) = donations().await;

    let err = donations.claim(id(42), "ada@example.com").await.unwrap_err();
    assert!(matches!(err, DonationsError::NotFound { .. }));
    assert_eq!(err.to_string(), "Food not found");
}

#[tokio::test]
async fn expired_food_is_left_untouched() {
    let (_, donations) = donations().await;
    let expired = NewFood { id: id(3), name: "Milk".into(), status: FoodStatus::Expired };
    donations.foods().insert(&expired).await.unwrap();

    let err = donations.claim(id(3), "ada@example.com").await.unwrap_err();
    assert_eq!(err.to_string(), "Food is not available for claim");

    let stored = donations.get(id(3)).await.unwrap();
    assert_eq!(stored.status(), Some(FoodStatus::Expired));
    assert_eq!(stored.claimed_by, None);
}

#[tokio::test]
async fn unrecognised_status_is_never_claimable() {
    let (db, donations) = donations().await;
    db.query("CREATE food CONTENT { food_id: 4, name: 'Soup', status: 'reserved' }")
        .await
        .unwrap()
        .check()
        .unwrap();

    let food = donations.get(id(4)).await.unwrap();
    assert_eq!(food.status, "reserved");
    assert_eq!(food.status(), None);

    let err = donations.claim(id(4), "ada@example.com").await.unwrap_err();
    assert!(matches!(err, DonationsError::NotClaimable { .. }));
}

#[tokio::test]
async fn duplicate_food_id_is_rejected() {
    let (_, donations) = donations().await;
    donations.foods().insert(&NewFood::available(id(5), "Rice")).await.unwrap();

    let err = donations.foods().insert(&NewFood::available(id(5), "Beans")).await.unwrap_err();
    assert!(matches!(err, DonationsError::Validation { .. }));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_claims_have_a_single_winner() {
    let (_, donations) = donations().await;
    donations.foods().insert(&NewFood::available(id(9), "Apples")).await.unwrap();

    let mut claims = JoinSet::new();
    for n in 0..8 {
        let donations = donations.clone();
        claims.spawn(async move { donations.claim(id(9), &format!("user{n}@example.com")).await });
    }

    let mut winners = 0;
    while let Some(result) = claims.join_next().await {
        match result.unwrap() {
            Ok(_) => winners += 1,
            Err(DonationsError::NotClaimable { .. }) => {},
            Err(other) => panic!("unexpected claim error: {other}"),
        }
    }
    assert_eq!(winners, 1);
}
