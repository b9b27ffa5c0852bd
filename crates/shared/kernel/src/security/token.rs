use foodloop_domain::config::JwtConfig;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

#[foodloop_derive::foodloop_error]
pub enum TokenError {
    #[error("Token configuration error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("Token error{}: {source}", format_context(.context))]
    Jwt { source: jsonwebtoken::errors::Error, context: Option<Cow<'static, str>> },
}

/// Registered claims carried by an access token. `sub` is the caller's email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iss: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    pub iat: u64,
    pub exp: u64,
}

struct TokenAuthorityInner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    issuer: String,
    audience: Option<String>,
    ttl_seconds: u64,
}

/// HS256 signer and verifier built from [`JwtConfig`]. Cheap to clone.
#[derive(Clone)]
pub struct TokenAuthority {
    inner: Arc<TokenAuthorityInner>,
}

impl fmt::Debug for TokenAuthority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenAuthority")
            .field("issuer", &self.inner.issuer)
            .field("audience", &self.inner.audience)
            .field("ttl_seconds", &self.inner.ttl_seconds)
            .finish_non_exhaustive()
    }
}

impl TokenAuthority {
    /// # Errors
    /// Returns [`TokenError::Config`] when the secret or issuer is empty.
    pub fn from_config(config: &JwtConfig) -> Result<Self, TokenError> {
        if config.secret.is_empty() {
            return Err(TokenError::Config {
                message: "JWT secret must not be empty".into(),
                context: Some("security.jwt.secret".into()),
            });
        }
        if config.issuer.is_empty() {
            return Err(TokenError::Config {
                message: "JWT issuer must not be empty".into(),
                context: Some("security.jwt.issuer".into()),
            });
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway_seconds;
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        match &config.audience {
            Some(audience) => validation.set_audience(&[audience.as_str()]),
            None => validation.validate_aud = false,
        }

        let secret = config.secret.as_bytes();
        Ok(Self {
            inner: Arc::new(TokenAuthorityInner {
                encoding: EncodingKey::from_secret(secret),
                decoding: DecodingKey::from_secret(secret),
                validation,
                issuer: config.issuer.clone(),
                audience: config.audience.clone(),
                ttl_seconds: config.ttl_seconds,
            }),
        })
    }

    /// Signs a token for `email`, valid for the configured TTL.
    ///
    /// # Errors
    /// Returns [`TokenError::Jwt`] if encoding fails.
    pub fn issue(&self, email: &str) -> Result<String, TokenError> {
        let now = jsonwebtoken::get_current_timestamp();
        let claims = Claims {
            sub: email.to_owned(),
            iss: self.inner.issuer.clone(),
            aud: self.inner.audience.clone(),
            iat: now,
            exp: now.saturating_add(self.inner.ttl_seconds),
        };
        self.sign(&claims)
    }

    /// Signs arbitrary claims with the configured key.
    ///
    /// # Errors
    /// Returns [`TokenError::Jwt`] if encoding fails.
    pub fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.inner.encoding)
            .context("Encoding token")
    }

    /// Checks signature, expiry (with leeway), issuer and audience.
    ///
    /// # Errors
    /// Returns [`TokenError::Jwt`] for any malformed, forged or expired token.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.inner.decoding, &self.inner.validation)
            .context("Verifying token")?;
        Ok(data.claims)
    }
}
