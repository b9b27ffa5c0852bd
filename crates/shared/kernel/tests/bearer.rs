#![cfg(feature = "server")]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::routing::get;
use foodloop_kernel::domain::config::JwtConfig;
use foodloop_kernel::security::{Caller, TokenAuthority};
use tower::ServiceExt;

fn tokens() -> TokenAuthority {
    TokenAuthority::from_config(&JwtConfig { secret: "bearer-tests".into(), ..JwtConfig::default() })
        .unwrap()
}

fn app(tokens: TokenAuthority) -> Router {
    Router::new().route("/me", get(|caller: Caller| async move { caller.email })).with_state(tokens)
}

async fn call(authorization: Option<&str>) -> (StatusCode, String) {
    let mut request = Request::get("/me");
    if let Some(value) = authorization {
        request = request.header(header::AUTHORIZATION, value);
    }
    let response = app(tokens()).oneshot(request.body(Body::empty()).unwrap()).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn valid_token_yields_caller() {
    let token = tokens().issue("ada@example.com").unwrap();
    let (status, body) = call(Some(&format!("Bearer {token}"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ada@example.com");
}

#[tokio::test]
async fn scheme_is_case_insensitive() {
    let token = tokens().issue("ada@example.com").unwrap();
    let (status, _) = call(Some(&format!("bearer {token}"))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn missing_header_is_unauthorized() {
    let (status, body) = call(None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "Missing Authorization Header");
}

#[tokio::test]
async fn wrong_scheme_and_bad_tokens_are_unauthorized() {
    let foreign = TokenAuthority::from_config(&JwtConfig::default())
        .unwrap()
        .issue("ada@example.com")
        .unwrap();

    for header in ["Basic YWRhOnB3", "Bearer", "Bearer    ", "Bearer not.a.jwt"] {
        assert_eq!(call(Some(header)).await.0, StatusCode::UNAUTHORIZED, "{header}");
    }
    assert_eq!(call(Some(&format!("Bearer {foreign}"))).await.0, StatusCode::UNAUTHORIZED);
}
