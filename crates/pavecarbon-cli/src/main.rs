//! Pavecarbon - embodied-carbon footprint of paved surfaces
//!
//! A CLI tool that estimates and compares the kg CO₂e of layered pavement
//! compositions.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
