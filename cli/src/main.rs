mod cli;
mod error;
mod progress;
mod rewrite;
mod ui;

use clap::Parser;
use cli::Cli;
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = rewrite::execute(&cli) {
        ui::error_message(&format!("Error: {}", err.user_message()));
        process::exit(1);
    }
}
