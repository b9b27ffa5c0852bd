use crate::error::DonationsError;
use crate::model::{Food, FoodRecord, NewFood};
use foodloop_database::{Database, DatabaseErrorExt};
use foodloop_kernel::domain::food::{FoodId, FoodStatus};
use tracing::instrument;

const FIELDS: &str = "food_id, name, status, claimed_by";

#[derive(Debug, Clone)]
pub struct FoodRepository {
    db: Database,
}

impl FoodRepository {
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// # Errors
    /// Returns [`DonationsError::Database`] if the query fails.
    #[instrument(skip(self))]
    pub async fn find(&self, id: FoodId) -> Result<Option<Food>, DonationsError> {
        let record = self
            .db
            .query(format!("SELECT {FIELDS} FROM food WHERE food_id = $food_id LIMIT 1"))
            .bind(("food_id", id.get()))
            .await
            .context("Loading food")?
            .take::<Option<FoodRecord>>(0)
            .context("Parsing food")?;

        record.map(Food::try_from).transpose()
    }

    /// # Errors
    /// * [`DonationsError::Validation`] if the id is already taken.
    /// * [`DonationsError::Database`] if the write fails.
    #[instrument(skip(self, food), fields(food_id = %food.id))]
    pub async fn insert(&self, food: &NewFood) -> Result<Food, DonationsError> {
        if self.find(food.id).await?.is_some() {
            return Err(DonationsError::Validation {
                message: format!("Food {} already exists", food.id).into(),
                context: None,
            });
        }

        let status: &'static str = food.status.into();
        let record = self
            .db
            .query(format!(
                "CREATE food CONTENT {{ food_id: $food_id, name: $name, status: $status }} RETURN {FIELDS}"
            ))
            .bind(("food_id", food.id.get()))
            .bind(("name", food.name.clone()))
            .bind(("status", status))
            .await
            .context("Creating food")?
            .take::<Option<FoodRecord>>(0)
            .context("Parsing created food")?;

        record.map(Food::try_from).transpose()?.ok_or_else(|| DonationsError::Internal {
            message: "Food was not returned after creation".into(),
            context: Some(food.id.to_string().into()),
        })
    }

    /// Marks the food claimed by `claimant` if, and only if, it is still `available`.
    ///
    /// The status check and the write are one statement, so of two concurrent
    /// callers at most one gets `Some`.
    ///
    /// # Errors
    /// Returns [`DonationsError::Database`] if the statement fails.
    #[instrument(skip(self))]
    pub async fn claim_if_available(
        &self,
        id: FoodId,
        claimant: &str,
    ) -> Result<Option<Food>, DonationsError> {
        let available: &'static str = FoodStatus::Available.into();
        let claimed: &'static str = FoodStatus::Claimed.into();

        let records = self
            .db
            .query(format!(
                "UPDATE food SET status = $claimed, claimed_by = $claimant, claimed_at = time::now() \
                 WHERE food_id = $food_id AND status = $available RETURN {FIELDS}"
            ))
            .bind(("food_id", id.get()))
            .bind(("claimant", claimant.to_owned()))
            .bind(("available", available))
            .bind(("claimed", claimed))
            .await
            .context("Claiming food")?
            .take::<Vec<FoodRecord>>(0)
            .context("Parsing claimed food")?;

        records.into_iter().next().map(Food::try_from).transpose()
    }
}
