//! CLI Adapter.

use clap::Parser;

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "spritelst")]
#[command(version)]
#[command(
    about = "Regenerate src/resources/sprites.lst from the .png files in src/resources",
    long_about = None
)]
struct Cli {}

/// Entry point for the CLI.
pub fn run() {
    let _cli = Cli::parse();
    crate::app::logging::init();

    let result: Result<(), AppError> = crate::app::api::generate().map(|_| ());

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
