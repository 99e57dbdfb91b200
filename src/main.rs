//! Kodegen Bundler Pack - release pack planner for desktop applications.
//!
//! This binary validates pack options, scans the payload and reports the
//! release artifacts a pack would produce.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match kodegen_bundler_pack::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
