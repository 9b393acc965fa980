//! Derives for the primitive predicates that need per-type opt-in.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Visibility};

/// `#[derive(EnumType)]`: only enums may claim to be enumerations.
pub fn expand_derive_enum_type(input: DeriveInput) -> TokenStream {
    if !matches!(input.data, Data::Enum(_)) {
        return syn::Error::new_spanned(&input.ident, "EnumType can only be derived for enums")
            .to_compile_error();
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::tola_concepts::EnumType for #name #ty_generics #where_clause {}
    }
}

/// `#[derive(Aggregate)]`: a struct whose every field is public, so it can be
/// built with struct-literal syntax from outside its module.
pub fn expand_derive_aggregate(input: DeriveInput) -> TokenStream {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return syn::Error::new_spanned(&input.ident, "Aggregate can only be derived for structs")
                .to_compile_error();
        }
    };

    let private = match fields {
        Fields::Named(named) => named.named.iter().find(|f| !is_public(&f.vis)),
        Fields::Unnamed(unnamed) => unnamed.unnamed.iter().find(|f| !is_public(&f.vis)),
        Fields::Unit => None,
    };
    if let Some(field) = private {
        return syn::Error::new_spanned(field, "aggregate fields must all be `pub`")
            .to_compile_error();
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::tola_concepts::Aggregate for #name #ty_generics #where_clause {}
    }
}

fn is_public(vis: &Visibility) -> bool {
    matches!(vis, Visibility::Public(_))
}
