use crate::variant::{leveled_methods, LeveledEnum};
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

pub fn traceable_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LeveledEnum);

    let enum_name = &input.name;

    let enum_variants = input.variants.iter().map(|variant| {
        let name = &variant.name;
        let message = &variant.message;
        let fields = variant.fields.iter().map(|(field, ty)| quote! { #field: #ty });

        match (variant.no_source, variant.fields.is_empty()) {
            (true, true) => quote! {
                #[error(#message)]
                #name
            },
            (true, false) => quote! {
                #[error(#message)]
                #name { #(#fields,)* }
            },
            (false, _) => quote! {
                #[error(#message)]
                #name {
                    #(#fields,)*
                    err: String
                }
            },
        }
    });

    let level_arms = input.variants.iter().map(|variant| {
        let pattern = variant.wildcard_pattern(!variant.no_source);
        let level = &variant.level;
        quote! { #pattern => #level }
    });

    // A unit variant already is its own constructor.
    let constructors = input
        .variants
        .iter()
        .filter(|variant| !(variant.no_source && variant.fields.is_empty()))
        .map(|variant| {
            let name = &variant.name;
            let params = variant
                .fields
                .iter()
                .map(|(field, ty)| quote! { #field: impl Into<#ty> });
            let assignments = variant
                .fields
                .iter()
                .map(|(field, _)| quote! { #field: #field.into() });

            if variant.no_source {
                quote! {
                    #[allow(non_snake_case)]
                    pub fn #name(#(#params),*) -> Self {
                        Self::#name { #(#assignments,)* }
                    }
                }
            } else {
                quote! {
                    #[allow(non_snake_case)]
                    pub fn #name(#(#params,)* source: impl std::fmt::Display) -> Self {
                        Self::#name {
                            #(#assignments,)*
                            err: source.to_string()
                        }
                    }
                }
            }
        });

    let methods = leveled_methods(level_arms);

    quote! {
        #[allow(dead_code)]
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum #enum_name {
            #(#enum_variants,)*
        }

        impl #enum_name {
            #methods

            #(#constructors)*
        }
    }
    .into()
}
