//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand};

use crate::cli::commands::{check::CheckArgs, eval::EvalCommands, units::UnitsArgs};

#[derive(Parser)]
#[command(name = "mcond")]
#[command(author, version, about = "Measurement conditions for commerce orders")]
#[command(
    long_about = "Evaluates unit-aware measurement conditions (length, weight, volume, area) against order items described as plain-text YAML files."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a condition set against an item or a whole order
    #[command(subcommand)]
    Eval(EvalCommands),

    /// Validate a conditions file
    Check(CheckArgs),

    /// List supported measurement kinds and units
    Units(UnitsArgs),
}
