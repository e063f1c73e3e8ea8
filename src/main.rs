use clap::Parser;
use miette::Result;
use mcond::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Eval(cmd) => mcond::cli::commands::eval::run(cmd, &global),
        Commands::Check(args) => mcond::cli::commands::check::run(args, &global),
        Commands::Units(args) => mcond::cli::commands::units::run(args),
    }
}
