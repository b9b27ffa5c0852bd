//! Kernel utilities shared across slices.
//! Keep this crate lightweight: layered config loading, bearer token handling and,
//! behind the `server` feature, the HTTP state, error mapping and system routes.
//!
//! ## Config loading
//! ```rust,ignore
//! use foodloop_kernel::config::load_config;
//! use foodloop_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("server.toml"))?;
//! ```
//!
//! ## Tokens
//! ```rust
//! use foodloop_kernel::domain::config::JwtConfig;
//! use foodloop_kernel::security::TokenAuthority;
//!
//! let tokens = TokenAuthority::from_config(&JwtConfig::default()).unwrap();
//! let token = tokens.issue("ada@example.com").unwrap();
//! assert_eq!(tokens.verify(&token).unwrap().sub, "ada@example.com");
//! ```
pub mod config;
pub mod prelude;
pub mod security;
#[cfg(feature = "server")]
pub mod server;

pub use foodloop_domain as domain;
