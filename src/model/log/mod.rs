pub mod bootstrap;
pub mod system;
