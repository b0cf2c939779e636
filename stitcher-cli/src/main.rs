//! `stitcher` — replay transcript fragment streams through the sentence
//! assembly engine.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

#[derive(Parser)]
#[command(
    name = "stitcher",
    version,
    about = "Assemble streaming transcript fragments into complete sentences"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Feed fragments (one per line) through a session and print sentences
    Process(commands::process::ProcessArgs),
    /// Show the rule tables loaded for a language
    Rules(commands::rules::RulesArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Process(args) => args.execute(),
        Command::Rules(args) => args.execute(),
    }
}
