// this_file: crates/filigree-cli/src/main.rs

//! Filigree CLI - fancy Unicode text from the command line.

mod cli;
mod commands;
mod profiles;

use clap::Parser;
use cli::{Cli, Commands};
use filigree_core::Result;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match cli.command {
        Commands::Render(ref args) => commands::render::run(args),
        Commands::Profile(ref args) => commands::profile::run(args),
    }
}
