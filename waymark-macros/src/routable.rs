//! `#[derive(Routable)]`.
//!
//! Implements `RoutableTarget` for a struct: the path comes from the type-level
//! `#[route(path = "...")]` attribute, and every field becomes a parameter
//! unless marked `#[route(skip)]`. Field keys default to the field name and can
//! be changed with `#[route(rename = "...")]`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Index, LitStr, Member, parse_macro_input};

/// Options from a field's `#[route(...)]` attributes.
#[derive(Default)]
struct FieldArgs {
    skip: bool,
    rename: Option<String>,
}

fn parse_type_path(input: &DeriveInput) -> syn::Result<LitStr> {
    let mut path = None;

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("route")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("path") {
                path = Some(meta.value()?.parse::<LitStr>()?);
                Ok(())
            } else {
                Err(meta.error(format!(
                    "unknown attribute: {}",
                    meta.path
                        .get_ident()
                        .map(ToString::to_string)
                        .unwrap_or_default()
                )))
            }
        })?;
    }

    path.ok_or_else(|| {
        syn::Error::new_spanned(
            &input.ident,
            "Routable requires a path: #[route(path = \"...\")]",
        )
    })
}

fn parse_field_args(attrs: &[Attribute]) -> syn::Result<FieldArgs> {
    let mut args = FieldArgs::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident("route")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                args.skip = true;
                Ok(())
            } else if meta.path.is_ident("rename") {
                let lit: LitStr = meta.value()?.parse()?;
                args.rename = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("unknown field attribute, expected `skip` or `rename`"))
            }
        })?;
    }

    Ok(args)
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let path = parse_type_path(input)?;

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(data) => {
            return Err(syn::Error::new_spanned(
                data.enum_token,
                "Routable can only be derived for structs",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "Routable can only be derived for structs",
            ));
        }
    };

    let mut inserts = Vec::new();
    for (index, field) in fields.iter().enumerate() {
        let args = parse_field_args(&field.attrs)?;
        if args.skip {
            continue;
        }

        let (member, key) = match (&field.ident, args.rename) {
            (_, Some(rename)) => {
                let member = match &field.ident {
                    Some(ident) => Member::Named(ident.clone()),
                    None => Member::Unnamed(Index::from(index)),
                };
                (member, rename)
            }
            (Some(ident), None) => {
                let key = ident.to_string();
                (Member::Named(ident.clone()), key.trim_start_matches("r#").to_string())
            }
            (None, None) => {
                return Err(syn::Error::new_spanned(
                    field,
                    "tuple fields need a key: #[route(rename = \"...\")] or #[route(skip)]",
                ));
            }
        };

        inserts.push(quote! {
            params.insert(
                #key,
                ::waymark::ParamValue::from(::core::clone::Clone::clone(&self.#member)),
            );
        });
    }

    let parameters_impl = if inserts.is_empty() || matches!(fields, Fields::Unit) {
        None
    } else {
        Some(quote! {
            fn parameters(&self) -> ::core::option::Option<::waymark::Params> {
                let mut params = ::waymark::Params::new();
                #(#inserts)*
                ::core::option::Option::Some(params)
            }
        })
    };

    Ok(quote! {
        impl #impl_generics ::waymark::RoutableTarget for #name #ty_generics #where_clause {
            fn path(&self) -> ::waymark::RoutePath {
                ::waymark::RoutePath::new(#path)
            }

            #parameters_impl
        }
    })
}

/// Implementation of `#[derive(Routable)]`.
pub fn derive_routable_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => err.to_compile_error().into(),
    }
}
