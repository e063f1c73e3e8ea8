//! `mcond eval` command - Evaluate a condition set against order data
//!
//! Exit codes: 0 when the conditions match, 1 when they do not, 2 when
//! evaluation fails (kind mismatch or other configuration inconsistency).

use clap::Subcommand;
use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::helpers::load_yaml;
use crate::cli::GlobalOpts;
use crate::condition::{ConditionError, ConditionSet};
use crate::entities::{Order, OrderItem};

#[derive(Subcommand, Debug)]
pub enum EvalCommands {
    /// Evaluate a single order item (per-item mode)
    Item(EvalItemArgs),

    /// Evaluate totals across a whole order (aggregate mode)
    Order(EvalOrderArgs),
}

#[derive(clap::Args, Debug)]
pub struct EvalItemArgs {
    /// Conditions file (YAML)
    #[arg(long, short = 'c')]
    pub conditions: PathBuf,

    /// Order item file (YAML)
    #[arg(long, short = 'i')]
    pub item: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct EvalOrderArgs {
    /// Conditions file (YAML)
    #[arg(long, short = 'c')]
    pub conditions: PathBuf,

    /// Order file (YAML)
    #[arg(long, short = 'o')]
    pub order: PathBuf,
}

pub fn run(cmd: EvalCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        EvalCommands::Item(args) => {
            let conditions = load_conditions(&args.conditions, global)?;
            let item: OrderItem = load_yaml(&args.item)?;
            finish(conditions.matches_item(&item), global)
        }
        EvalCommands::Order(args) => {
            let conditions = load_conditions(&args.conditions, global)?;
            let order: Order = load_yaml(&args.order)?;
            finish(conditions.matches_order(&order.items), global)
        }
    }
}

fn load_conditions(path: &PathBuf, global: &GlobalOpts) -> Result<ConditionSet> {
    let conditions: ConditionSet = load_yaml(path)?;
    conditions.validate().map_err(|e| miette::miette!("{}", e))?;

    if !global.quiet {
        for spec in conditions.iter() {
            println!(
                "  {} {} {} {}",
                style(&spec.field).cyan(),
                spec.operator,
                spec.value,
                style(format!("({})", spec.kind)).dim(),
            );
        }
    }
    Ok(conditions)
}

fn finish(result: Result<bool, ConditionError>, global: &GlobalOpts) -> Result<()> {
    match result {
        Ok(true) => {
            if !global.quiet {
                println!("{} matched", style("✓").green());
            }
            Ok(())
        }
        Ok(false) => {
            if !global.quiet {
                println!("{} not matched", style("✗").red());
            }
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{:?}", miette::miette!("{}", e));
            std::process::exit(2);
        }
    }
}
