//! `mcond check` command - Validate a conditions file

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::helpers::load_yaml;
use crate::cli::GlobalOpts;
use crate::condition::ConditionSet;

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Conditions file to validate (YAML)
    #[arg()]
    pub path: PathBuf,
}

pub fn run(args: CheckArgs, global: &GlobalOpts) -> Result<()> {
    let conditions: ConditionSet = load_yaml(&args.path)?;
    conditions.validate().map_err(|e| miette::miette!("{}", e))?;

    if !global.quiet {
        println!(
            "{} {} condition(s) valid",
            style("✓").green(),
            conditions.len()
        );
        if conditions.is_empty() {
            println!(
                "{} empty condition set never matches",
                style("warning:").yellow()
            );
        }
    }
    Ok(())
}
