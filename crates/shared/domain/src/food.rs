//! Food donation vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};

/// Lifecycle state of a food donation.
///
/// Stored as the lowercase variant name. The only allowed transition is
/// `available -> claimed`; `expired` is terminal and set outside this service.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FoodStatus {
    Available,
    Claimed,
    Expired,
}

impl FoodStatus {
    /// Parses a stored status. Unknown values yield `None` and are never claimable.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    #[must_use]
    pub const fn is_claimable(self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Public identifier of a food record, as it appears in `/foods/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodId(i64);

impl FoodId {
    /// Creates an id, rejecting negative values.
    #[must_use]
    pub const fn new(raw: i64) -> Option<Self> {
        if raw < 0 { None } else { Some(Self(raw)) }
    }

    /// Parses a path segment. Only ASCII digits that fit into `i64` are accepted,
    /// so `+7`, `-1`, ` 7` and `7a` are all rejected.
    #[must_use]
    pub fn parse(segment: &str) -> Option<Self> {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        segment.parse().ok().map(Self)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for FoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
