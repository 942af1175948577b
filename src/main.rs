//! jqawk-release - cross-compile and archive every jqawk release target.
//!
//! Exit code 0 means every target was compiled and archived; any failure
//! stops the run and exits 1.

use jqawk_release::cli;
use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            let output = cli::OutputManager::default();
            output.error(&format!("Error: {}", e));
            for suggestion in e.recovery_suggestions() {
                eprintln!("  hint: {}", suggestion);
            }
            1
        }
    };

    process::exit(exit_code);
}
