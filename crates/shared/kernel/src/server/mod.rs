pub mod error;
pub mod health;
pub mod router;
pub mod state;

pub use error::{ApiError, ApiErrorExt, ErrorResponse, MessageResponse};
pub use state::{ApiState, ApiStateBuilder, ApiStateError};
