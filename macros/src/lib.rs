mod log;
mod loggable;
mod traceable;
mod variant;

use proc_macro::TokenStream;

/// Emits a `loggable!`/`traceable!` value at its own level, optionally with a debug payload.
#[proc_macro]
pub fn log(input: TokenStream) -> TokenStream {
    log::log_impl(input)
}

/// Declares a leveled log-entry enum. Every variant is `#[no_source]`.
#[proc_macro]
pub fn loggable(input: TokenStream) -> TokenStream {
    loggable::loggable_impl(input)
}

/// Declares a leveled error enum whose variants carry the text of their source error.
#[proc_macro]
pub fn traceable(input: TokenStream) -> TokenStream {
    traceable::traceable_impl(input)
}
