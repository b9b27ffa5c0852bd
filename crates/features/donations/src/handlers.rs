use crate::Donations;
use crate::error::{DonationsError, FOOD_NOT_FOUND};
use crate::model::FoodView;
use axum::Json;
use axum::extract::{Path, State};
use foodloop_derive::api_handler;
use foodloop_identity::Identity;
use foodloop_kernel::domain::constants::DONATIONS_TAG;
use foodloop_kernel::domain::food::FoodId;
use foodloop_kernel::security::Caller;
use foodloop_kernel::server::{ApiError, ApiState, ErrorResponse, MessageResponse};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

impl From<DonationsError> for ApiError {
    fn from(err: DonationsError) -> Self {
        match err {
            DonationsError::NotFound { message, .. } => Self::not_found(message),
            DonationsError::NotClaimable { message, .. }
            | DonationsError::Validation { message, .. } => Self::bad_request(message),
            other => Self::internal(other.to_string()),
        }
    }
}

pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(claim_food)).routes(routes!(get_food))
}

/// Non-numeric ids cannot name a food.
fn food_id(raw: &str) -> Result<FoodId, ApiError> {
    FoodId::parse(raw).ok_or_else(|| ApiError::not_found(FOOD_NOT_FOUND))
}

/// Claim a food donation for the caller.
#[api_handler(
    get,
    path = "/foods/{id}/claim",
    params(("id" = i64, Path, description = "Food identifier")),
    responses(
        (status = OK, description = "Food claimed", body = MessageResponse),
        (status = BAD_REQUEST, description = "Food is not available for claim", body = ErrorResponse),
        (status = UNAUTHORIZED, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = NOT_FOUND, description = "User or food not found", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = DONATIONS_TAG,
)]
pub(crate) async fn claim_food(
    State(state): State<ApiState>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let user = state
        .try_get_slice::<Identity>()?
        .find_user(&caller.email)
        .await
        .map_err(|err| ApiError::internal(err.to_string()))?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    let id = food_id(&id)?;
    state.try_get_slice::<Donations>()?.claim(id, &user.email).await?;

    Ok(Json(MessageResponse::new("Food claimed successfully")))
}

/// Fetch a single food donation.
#[api_handler(
    get,
    path = "/foods/{id}",
    params(("id" = i64, Path, description = "Food identifier")),
    responses(
        (status = OK, description = "Food", body = FoodView),
        (status = UNAUTHORIZED, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = NOT_FOUND, description = "Food not found", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = DONATIONS_TAG,
)]
pub(crate) async fn get_food(
    State(state): State<ApiState>,
    _caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<FoodView>, ApiError> {
    let food = state.try_get_slice::<Donations>()?.get(food_id(&id)?).await?;
    Ok(Json(food.into()))
}
