use super::TokenAuthority;
use crate::server::error::ApiError;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tracing::debug;

const BEARER: &str = "Bearer";

/// The authenticated caller, taken from a valid `Authorization: Bearer <jwt>` header.
///
/// Rejects with `401 {"error": ...}` when the header is missing, malformed, or the
/// token fails verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    /// Identity claim (`sub`) of the token.
    pub email: String,
}

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
    TokenAuthority: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;

        let claims = TokenAuthority::from_ref(state).verify(token).map_err(|err| {
            debug!(error = %err, "Rejected bearer token");
            ApiError::unauthorized("Invalid or expired token")
        })?;

        Ok(Self { email: claims.sub })
    }
}

fn bearer_token(parts: &Parts) -> Result<&str, ApiError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthorized("Missing Authorization Header"))?
        .to_str()
        .map_err(|_| ApiError::unauthorized("Malformed Authorization Header"))?;

    match header.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case(BEARER) && !token.trim().is_empty() => {
            Ok(token.trim())
        },
        _ => Err(ApiError::unauthorized("Authorization Header must be 'Bearer <token>'")),
    }
}
