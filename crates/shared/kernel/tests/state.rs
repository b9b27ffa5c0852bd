#![cfg(feature = "server")]

use foodloop_database::Database;
use foodloop_kernel::domain::config::{ApiConfig, JwtConfig};
use foodloop_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use foodloop_kernel::server::{ApiState, ApiStateError};
use std::any::Any;

#[derive(Debug)]
struct Pantry {
    shelves: usize,
}

impl FeatureSlice for Pantry {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
struct Unregistered;

impl FeatureSlice for Unregistered {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

async fn memory_db() -> Database {
    Database::builder().url("mem://").session("kernel", "state").init().await.unwrap()
}

#[tokio::test]
async fn slices_are_resolved_by_type() {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .db(memory_db().await)
        .register_slice(InitializedSlice::new(Pantry { shelves: 3 }))
        .build()
        .unwrap();

    assert_eq!(state.try_get_slice::<Pantry>().unwrap().shelves, 3);
    assert!(matches!(
        state.try_get_slice::<Unregistered>(),
        Err(ApiStateError::MissingSlice { .. })
    ));
    assert_eq!(state.slice_names().count(), 1);
}

#[tokio::test]
async fn missing_parts_fail_validation() {
    let err = ApiState::builder().config(ApiConfig::default()).build().unwrap_err();
    assert!(matches!(err, ApiStateError::Validation { .. }));
}

#[tokio::test]
async fn invalid_jwt_settings_fail_the_build() {
    let mut config = ApiConfig::default();
    config.security.jwt = JwtConfig { secret: String::new(), ..JwtConfig::default() };

    let err = ApiState::builder().config(config).db(memory_db().await).build().unwrap_err();
    assert!(matches!(err, ApiStateError::Token { .. }));
}
