pub mod executable;
pub mod logging;
