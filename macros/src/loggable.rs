use crate::variant::{leveled_methods, LeveledEnum};
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

pub fn loggable_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LeveledEnum);

    let enum_name = &input.name;

    let enum_variants = input.variants.iter().map(|variant| {
        let name = &variant.name;
        let message = &variant.message;
        let fields = variant.fields.iter().map(|(field, ty)| quote! { #field: #ty });

        if variant.fields.is_empty() {
            quote! {
                #[error(#message)]
                #name
            }
        } else {
            quote! {
                #[error(#message)]
                #name { #(#fields,)* }
            }
        }
    });

    let level_arms = input.variants.iter().map(|variant| {
        let pattern = variant.wildcard_pattern(false);
        let level = &variant.level;
        quote! { #pattern => #level }
    });

    let methods = leveled_methods(level_arms);

    quote! {
        #[allow(dead_code)]
        #[derive(Debug, Clone, thiserror::Error)]
        pub enum #enum_name {
            #(#enum_variants,)*
        }

        impl #enum_name {
            #methods
        }
    }
    .into()
}
