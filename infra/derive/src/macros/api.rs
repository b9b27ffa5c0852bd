use super::derived_trait_names;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Attribute, Error, Expr, ItemFn, ItemStruct, Lit, LitStr, Meta, MetaNameValue, Token};

const DEFAULT_RENAME: &str = "camelCase";

#[derive(Default)]
struct ModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<bool>,
}

/// `serde` settings already present on the struct.
#[derive(Default)]
struct ExistingSerde {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

pub fn expand_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    match model_tokens(args, &input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

pub fn expand_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}

fn model_tokens(args: TokenStream, input: &ItemStruct) -> Result<TokenStream, Error> {
    let args = parse_model_args(args)?;
    let existing = existing_serde(&input.attrs)?;
    let derives = derived_trait_names(&input.attrs);

    let mut missing = Vec::new();
    if !derives.contains("Debug") {
        missing.push(quote! { Debug });
    }
    if !derives.contains("Serialize") {
        missing.push(quote! { ::serde::Serialize });
    }
    if !derives.contains("Deserialize") {
        missing.push(quote! { ::serde::Deserialize });
    }
    let derive_attr = (!missing.is_empty()).then(|| quote! { #[derive(#(#missing),*)] });

    let schema_attr = (!derives.contains("ToSchema"))
        .then(|| quote! { #[cfg_attr(feature = "server", derive(::utoipa::ToSchema))] });

    let rename = args.rename_all.unwrap_or_else(|| LitStr::new(DEFAULT_RENAME, Span::call_site()));
    let rename_attr = match &existing.rename_all {
        Some(current) if current.value() != rename.value() => {
            return Err(Error::new_spanned(
                current,
                "Conflicting serde rename_all; remove it or pass the same value to api_model",
            ));
        },
        Some(_) => None,
        None => Some(quote! { #[serde(rename_all = #rename)] }),
    };

    let deny = args.deny_unknown_fields.unwrap_or(true);
    if existing.deny_unknown_fields && !deny {
        return Err(Error::new_spanned(
            &input.ident,
            "deny_unknown_fields is already set via serde; remove it before disabling",
        ));
    }
    let deny_attr =
        (deny && !existing.deny_unknown_fields).then(|| quote! { #[serde(deny_unknown_fields)] });

    Ok(quote! {
        #derive_attr
        #schema_attr
        #rename_attr
        #deny_attr
        #input
    })
}

fn parse_model_args(args: TokenStream) -> Result<ModelArgs, Error> {
    let metas = Punctuated::<Meta, Token![,]>::parse_terminated.parse2(args)?;
    let mut parsed = ModelArgs::default();

    for meta in metas {
        let Meta::NameValue(nv) = meta else {
            return Err(Error::new_spanned(
                meta,
                "Expected name-value arguments like `rename_all = \"...\"`",
            ));
        };

        if nv.path.is_ident("rename_all") {
            let Lit::Str(value) = literal(&nv, "rename_all must be a string literal")? else {
                return Err(Error::new_spanned(&nv.value, "rename_all must be a string literal"));
            };
            if parsed.rename_all.replace(value).is_some() {
                return Err(Error::new_spanned(&nv, "Duplicate argument"));
            }
        } else if nv.path.is_ident("deny_unknown_fields") {
            let Lit::Bool(value) = literal(&nv, "deny_unknown_fields must be a boolean literal")?
            else {
                return Err(Error::new_spanned(
                    &nv.value,
                    "deny_unknown_fields must be a boolean literal",
                ));
            };
            if parsed.deny_unknown_fields.replace(value.value).is_some() {
                return Err(Error::new_spanned(&nv, "Duplicate argument"));
            }
        } else {
            return Err(Error::new_spanned(
                &nv.path,
                "Unsupported argument; expected rename_all or deny_unknown_fields",
            ));
        }
    }

    Ok(parsed)
}

fn literal(nv: &MetaNameValue, message: &str) -> Result<Lit, Error> {
    match &nv.value {
        Expr::Lit(expr) => Ok(expr.lit.clone()),
        other => Err(Error::new_spanned(other, message)),
    }
}

fn existing_serde(attrs: &[Attribute]) -> Result<ExistingSerde, Error> {
    let mut existing = ExistingSerde::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                existing.rename_all = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("deny_unknown_fields") {
                existing.deny_unknown_fields = true;
            } else if meta.input.peek(Token![=]) {
                // Skip values of unrelated serde options (e.g. `tag = "kind"`).
                let _: Expr = meta.value()?.parse()?;
            } else if meta.input.peek(syn::token::Paren) {
                let content;
                syn::parenthesized!(content in meta.input);
                let _: TokenStream = content.parse()?;
            }
            Ok(())
        })?;
    }

    Ok(existing)
}
