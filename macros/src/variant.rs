use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned;
use syn::{Attribute, Error, Expr, Ident, LitStr, Meta, Result, Token, Type};

pub struct LeveledEnum {
    pub name: Ident,
    pub variants: Vec<LeveledVariant>,
}

pub struct LeveledVariant {
    pub no_source: bool,
    pub message: LitStr,
    pub name: Ident,
    pub fields: Vec<(Ident, Type)>,
    pub level: Expr,
}

impl Parse for LeveledEnum {
    fn parse(input: ParseStream) -> Result<Self> {
        let name = input.parse::<Ident>()?;

        let content;
        syn::braced!(content in input);

        let mut variants = Vec::new();
        while !content.is_empty() {
            variants.push(content.parse::<LeveledVariant>()?);
            if !content.is_empty() {
                content.parse::<Token![,]>()?;
            }
        }

        Ok(Self { name, variants })
    }
}

impl Parse for LeveledVariant {
    fn parse(input: ParseStream) -> Result<Self> {
        let attributes = input.call(Attribute::parse_outer)?;

        let no_source = attributes
            .iter()
            .any(|attr| attr.path().is_ident("no_source"));

        let error_attr = attributes
            .iter()
            .find(|attr| attr.path().is_ident("error"))
            .ok_or_else(|| Error::new(input.span(), "Missing #[error(...)] attribute"))?;

        let message = match &error_attr.meta {
            Meta::List(list) => syn::parse2::<LitStr>(list.tokens.clone())?,
            _ => return Err(Error::new(error_attr.span(), "Expected #[error(\"...\")]")),
        };

        let name = input.parse::<Ident>()?;

        let mut fields = Vec::new();
        if input.peek(syn::token::Brace) {
            let field_content;
            syn::braced!(field_content in input);

            while !field_content.is_empty() {
                let field_name = field_content.parse::<Ident>()?;
                field_content.parse::<Token![:]>()?;
                let field_type = field_content.parse::<Type>()?;
                fields.push((field_name, field_type));

                if !field_content.is_empty() {
                    field_content.parse::<Token![,]>()?;
                }
            }
        }

        input.parse::<Token![=>]>()?;
        let level = input.parse::<Expr>()?;

        Ok(Self {
            no_source,
            message,
            name,
            fields,
            level,
        })
    }
}

impl LeveledVariant {
    /// Pattern that matches this variant regardless of its payload.
    pub fn wildcard_pattern(&self, has_source: bool) -> TokenStream {
        let name = &self.name;
        if self.fields.is_empty() && !has_source {
            quote! { Self::#name }
        } else {
            quote! { Self::#name { .. } }
        }
    }
}

/// `level()` and `log()` shared by every generated enum.
pub fn leveled_methods(arms: impl Iterator<Item = TokenStream>) -> TokenStream {
    quote! {
        #[allow(dead_code)]
        pub fn level(&self) -> tracing::Level {
            match self {
                #(#arms,)*
            }
        }

        #[allow(dead_code)]
        pub fn log(&self) {
            let message = self.to_string();
            match self.level() {
                tracing::Level::ERROR => tracing::error!("{}", message),
                tracing::Level::WARN => tracing::warn!("{}", message),
                tracing::Level::INFO => tracing::info!("{}", message),
                tracing::Level::DEBUG => tracing::debug!("{}", message),
                _ => tracing::trace!("{}", message),
            }
        }
    }
}
