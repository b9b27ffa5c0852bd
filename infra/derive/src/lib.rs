#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Attribute macros shared by every crate in the workspace:
//!
//! * [`foodloop_error`] turns an enum into a `thiserror` error with context support.
//! * [`foodloop_slice`] turns a struct into a cheaply clonable feature slice handle.
//! * [`api_model`] and [`api_handler`] keep DTOs and axum handlers consistent and
//!   wire them into `utoipa` when the consuming crate enables its `server` feature.
//!
//! Examples are `ignore`d here because a proc-macro crate cannot use its own macros.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Defines a domain error enum.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already present.
/// * `<Name>Ext` trait with `.context(...)` for `Result<T, Name>` and for
///   `Result<T, Source>` of every variant that wraps a source error.
/// * `From<Source>` for every variant with a `source` (or `#[source]`/`#[from]`) field.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A private `format_context` helper for use in `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants must use named fields. Variants with a source field must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[foodloop_derive::foodloop_error]
/// pub enum StoreError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal store error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read() -> Result<Vec<u8>, StoreError> {
///     std::fs::read("data.bin").context("Reading data file")
/// }
/// ```
#[proc_macro_attribute]
pub fn foodloop_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}

/// Defines a feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` wraps it in an `Arc`,
/// derefs to it and implements `FeatureSlice` so the kernel can register it.
///
/// ```rust,ignore
/// #[foodloop_derive::foodloop_slice]
/// pub struct Donations {
///     foods: FoodRepository,
/// }
///
/// let slice = Donations::new(DonationsInner { foods });
/// ```
#[proc_macro_attribute]
pub fn foodloop_slice(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand(input).into()
}

/// Defines an API data model.
///
/// Adds `Debug`, `Serialize`, `Deserialize` (when missing), `utoipa::ToSchema`
/// behind the `server` feature, `rename_all = "camelCase"` and `deny_unknown_fields`.
///
/// Both defaults can be overridden:
///
/// ```rust,ignore
/// #[api_model(rename_all = "snake_case", deny_unknown_fields = false)]
/// pub struct FoodView {
///     pub id: i64,
///     pub status: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_model(args.into(), input).into()
}

/// Defines an axum handler documented through `utoipa::path`.
///
/// Accepts the regular `utoipa::path` arguments.
///
/// ```rust,ignore
/// #[api_handler(
///     get,
///     path = "/health",
///     responses((status = OK, body = HealthResponse)),
///     tag = "System"
/// )]
/// pub async fn health_handler() -> impl IntoResponse { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_handler(args.into(), input).into()
}
