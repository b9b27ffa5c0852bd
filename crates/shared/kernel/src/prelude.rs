//! Common imports for feature slices.

pub use crate::domain::config::ApiConfig;
pub use crate::domain::constants::*;
pub use crate::domain::food::{FoodId, FoodStatus};
pub use crate::domain::registry::{FeatureSlice, InitializedSlice};
pub use crate::security::{TokenAuthority, TokenError};
#[cfg(feature = "server")]
pub use crate::security::Caller;
#[cfg(feature = "server")]
pub use crate::server::{ApiError, ApiState, ErrorResponse, MessageResponse};
