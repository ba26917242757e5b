pub mod regions;

use clap::{Parser, Subcommand};

#[derive(Subcommand)]
pub enum Command {
    /// Derive promoter and flanking regions from feature annotations.
    Regions(regions::Args),
}

#[derive(Parser)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}
