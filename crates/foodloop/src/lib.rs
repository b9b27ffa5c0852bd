//! Facade crate for `FoodLoop` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Pass [`migrations`] to the database builder so every slice's schema exists.
//! - Call [`init`] to build the slices, then register them on the API state.
//! - With the `server` feature, [`server::router`] collects every slice's routes.

use foodloop_database::{Database, Migration};
pub use foodloop_domain as domain;
pub use foodloop_kernel as kernel;

/// Feature registry for runtime introspection.
pub mod features {
    pub use foodloop_donations as donations;
    pub use foodloop_identity as identity;

    /// Slices compiled into this build.
    pub const ENABLED: &[&str] = &["identity", "donations"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[cfg(feature = "server")]
pub mod server {
    use foodloop_kernel::server::ApiState;
    use utoipa_axum::router::OpenApiRouter;

    pub mod router {
        pub use foodloop_kernel::server::router::system_router;
    }

    /// System routes plus every slice's routes, still without state.
    pub fn router() -> OpenApiRouter<ApiState> {
        router::system_router().merge(super::features::donations::router())
    }
}

/// Migrations of every slice, in dependency order.
pub fn migrations() -> impl Iterator<Item = Migration> {
    features::identity::MIGRATIONS.iter().chain(features::donations::MIGRATIONS).copied()
}

/// Initialize all features.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    database: &Database,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error + Send + Sync>> {
    let slices = vec![features::identity::init(database)?, features::donations::init(database)?];

    Ok(slices)
}

