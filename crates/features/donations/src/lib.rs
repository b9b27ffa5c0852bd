//! Donations feature slice.
//!
//! Owns the `food` table and the claim workflow: a claim succeeds only while the
//! food is `available`, and the transition to `claimed` is guarded in the same
//! statement that performs it.

mod error;
#[cfg(feature = "server")]
mod handlers;
mod model;
mod repository;

pub use error::{DonationsError, DonationsErrorExt};
#[cfg(feature = "server")]
pub use handlers::router;
pub use model::{Food, FoodView, NewFood};
pub use repository::FoodRepository;

use foodloop_database::{Database, Migration};
use foodloop_kernel::domain::constants::DONATIONS_SLICE;
use foodloop_kernel::domain::food::FoodId;
use foodloop_kernel::domain::registry::InitializedSlice;
use tracing::{info, instrument, warn};

/// Schema owned by this slice.
pub const MIGRATIONS: &[Migration] = &[Migration::new(
    DONATIONS_SLICE,
    "0001",
    "
    DEFINE TABLE IF NOT EXISTS food SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS food_id ON food TYPE int ASSERT $value >= 0;
    DEFINE FIELD IF NOT EXISTS name ON food TYPE string;
    DEFINE FIELD IF NOT EXISTS status ON food TYPE string DEFAULT 'available';
    DEFINE FIELD IF NOT EXISTS claimed_by ON food TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS claimed_at ON food TYPE option<datetime>;
    DEFINE INDEX IF NOT EXISTS food_id_unique ON food FIELDS food_id UNIQUE;
    ",
)];

/// Donations feature state
#[foodloop_derive::foodloop_slice]
pub struct Donations {
    foods: FoodRepository,
}

impl Donations {
    #[must_use]
    pub fn from_database(db: &Database) -> Self {
        Self::new(DonationsInner { foods: FoodRepository::new(db.clone()) })
    }

    #[must_use]
    pub fn foods(&self) -> &FoodRepository {
        &self.foods
    }

    /// # Errors
    /// * [`DonationsError::NotFound`] if no food has this id.
    /// * [`DonationsError::Database`] if the lookup fails.
    pub async fn get(&self, id: FoodId) -> Result<Food, DonationsError> {
        self.foods.find(id).await?.ok_or_else(DonationsError::food_not_found)
    }

    /// Claims `id` for `claimant` (an email).
    ///
    /// # Errors
    /// * [`DonationsError::NotFound`] if no food has this id.
    /// * [`DonationsError::NotClaimable`] if it is not `available`, including
    ///   when a concurrent claim won. Nothing is written in that case.
    /// * [`DonationsError::Database`] for storage failures.
    #[instrument(skip(self), fields(food_id = %id))]
    pub async fn claim(&self, id: FoodId, claimant: &str) -> Result<Food, DonationsError> {
        let food = self.get(id).await?;
        if !food.is_claimable() {
            info!(status = %food.status, "Claim rejected");
            return Err(DonationsError::not_claimable());
        }

        match self.foods.claim_if_available(id, claimant).await {
            Ok(Some(claimed)) => {
                info!("Food claimed");
                Ok(claimed)
            },
            Ok(None) => {
                info!("Claim lost to a concurrent claim");
                Err(DonationsError::not_claimable())
            },
            Err(err) => {
                // A write conflict surfaces as an error; the winner is visible afterwards.
                if let Ok(current) = self.get(id).await
                    && !current.is_claimable()
                {
                    warn!(error = %err, "Claim conflicted with a concurrent claim");
                    return Err(DonationsError::not_claimable());
                }
                Err(err)
            },
        }
    }
}

/// Initialize the donations feature.
///
/// # Errors
/// Currently infallible; the signature matches the other slices.
pub fn init(db: &Database) -> Result<InitializedSlice, DonationsError> {
    let slice = Donations::from_database(db);
    info!("Donations slice initialized");

    Ok(InitializedSlice::new(slice))
}
