use crate::core::system::System;
use std::process::ExitCode;

mod core;
mod interface;
mod model;
mod platform;
mod utils;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let system = System::initialize().await;
    let result = system.run().await;
    ExitCode::from(system.terminate(result).await)
}
