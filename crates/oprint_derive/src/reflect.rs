//! Reflect derive macro implementation.
//!
//! Generates `oprint::reflect::Reflect` implementations from struct
//! definitions: `type_name` from the ident, `fields` in declaration
//! order, and a static `schema` for member resolution.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields, Ident, Visibility};

/// Main entry point for the Reflect derive macro.
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_reflect_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_reflect_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Reflect derive does not support generic types",
        ));
    }

    let fields = named_fields(input)?;

    // Publicly readable fields only, in declaration order.
    let visible: Vec<(&Ident, &Field)> = fields
        .iter()
        .filter(|field| is_public(field) && !is_skipped(field))
        .filter_map(|field| field.ident.as_ref().map(|ident| (ident, field)))
        .collect();

    let field_refs = visible.iter().map(|(ident, _)| {
        let name_lit = ident.to_string();
        quote! { ::oprint::reflect::FieldRef::new(#name_lit, &self.#ident) }
    });

    let field_specs = visible.iter().map(|(ident, field)| {
        let name_lit = ident.to_string();
        let ty = &field.ty;
        quote! { ::oprint::reflect::FieldSpec::new::<#ty>(#name_lit) }
    });

    let type_name = name.to_string();

    Ok(quote! {
        impl ::oprint::reflect::Reflect for #name {
            fn type_name(&self) -> &'static str {
                #type_name
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            fn fields(&self) -> ::std::vec::Vec<::oprint::reflect::FieldRef<'_>> {
                ::std::vec![#(#field_refs),*]
            }

            fn schema() -> ::oprint::reflect::Schema {
                ::oprint::reflect::Schema::new(
                    #type_name,
                    ::std::vec![#(#field_specs),*],
                )
            }
        }
    })
}

/// Validate that the input is a struct with named fields, returning them.
fn named_fields(
    input: &DeriveInput,
) -> syn::Result<&syn::punctuated::Punctuated<Field, syn::token::Comma>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(&fields.named),
            _ => Err(syn::Error::new_spanned(
                input,
                "Reflect derive only supports structs with named fields",
            )),
        },
        _ => Err(syn::Error::new_spanned(
            input,
            "Reflect derive only supports structs",
        )),
    }
}

fn is_public(field: &Field) -> bool {
    matches!(field.vis, Visibility::Public(_))
}

/// Check for a `#[reflect(skip)]` attribute on the field.
fn is_skipped(field: &Field) -> bool {
    field.attrs.iter().any(|attr| {
        attr.path().is_ident("reflect")
            && attr
                .parse_args::<Ident>()
                .is_ok_and(|ident| ident == "skip")
    })
}
