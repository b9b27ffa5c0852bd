use crate::error::DonationsError;
use foodloop_derive::api_model;
use foodloop_kernel::domain::food::{FoodId, FoodStatus};
use surrealdb_types::SurrealValue;

/// A donated food item.
///
/// `status` keeps the stored string so that values written by other tools
/// survive a round trip; [`Food::status`] interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Food {
    pub id: FoodId,
    pub name: String,
    pub status: String,
    /// Email of the claimant once claimed.
    pub claimed_by: Option<String>,
}

impl Food {
    #[must_use]
    pub fn status(&self) -> Option<FoodStatus> {
        FoodStatus::parse(&self.status)
    }

    /// Only `available` food can be claimed; unknown statuses never can.
    #[must_use]
    pub fn is_claimable(&self) -> bool {
        self.status().is_some_and(FoodStatus::is_claimable)
    }
}

/// Input for registering a donation.
#[derive(Debug, Clone)]
pub struct NewFood {
    pub id: FoodId,
    pub name: String,
    pub status: FoodStatus,
}

impl NewFood {
    pub fn available(id: FoodId, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), status: FoodStatus::Available }
    }
}

/// Row shape of the `food` table.
#[derive(Debug, SurrealValue)]
pub(crate) struct FoodRecord {
    pub food_id: i64,
    pub name: String,
    pub status: String,
    pub claimed_by: Option<String>,
}

impl TryFrom<FoodRecord> for Food {
    type Error = DonationsError;

    fn try_from(record: FoodRecord) -> Result<Self, Self::Error> {
        let id = FoodId::new(record.food_id).ok_or_else(|| DonationsError::Internal {
            message: format!("Stored food id {} is negative", record.food_id).into(),
            context: None,
        })?;
        Ok(Self { id, name: record.name, status: record.status, claimed_by: record.claimed_by })
    }
}

#[api_model]
/// Food as exposed over HTTP
pub struct FoodView {
    /// Numeric food identifier
    pub id: i64,
    pub name: String,
    /// `available`, `claimed` or `expired`
    pub status: String,
    /// Email of the claimant, if claimed
    pub claimed_by: Option<String>,
}

impl From<Food> for FoodView {
    fn from(food: Food) -> Self {
        Self { id: food.id.get(), name: food.name, status: food.status, claimed_by: food.claimed_by }
    }
}
