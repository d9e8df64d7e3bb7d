use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{parse_macro_input, Expr, Token};

struct LogInput {
    entry: Expr,
    debug_info: Option<Expr>,
}

impl Parse for LogInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let entry = input.parse::<Expr>()?;

        let debug_info = if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            Some(input.parse::<Expr>()?)
        } else {
            None
        };

        Ok(LogInput { entry, debug_info })
    }
}

pub fn log_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LogInput);

    let entry = &input.entry;

    match &input.debug_info {
        None => quote! {
            (#entry).log()
        },
        Some(debug_info) => quote! {
            {
                let entry = &(#entry);
                let message = entry.to_string();
                let debug_info = #debug_info;

                match entry.level() {
                    tracing::Level::ERROR => tracing::error!(message = %message, debug = ?debug_info),
                    tracing::Level::WARN => tracing::warn!(message = %message, debug = ?debug_info),
                    tracing::Level::INFO => tracing::info!(message = %message, debug = ?debug_info),
                    tracing::Level::DEBUG => tracing::debug!(message = %message, debug = ?debug_info),
                    _ => tracing::trace!(message = %message, debug = ?debug_info),
                }
            }
        },
    }
    .into()
}
