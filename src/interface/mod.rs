pub mod runtime;
pub mod window;
