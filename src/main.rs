use clap::Parser;
use miette::Result;
use retint::cli::{Cli, Commands};
use retint::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => retint::cli::generate::run(args, &printer)?,
        Commands::Inspect(args) => retint::cli::inspect::run(args, &printer)?,
        Commands::Init(args) => retint::cli::init::run(args, &printer)?,
        Commands::Completions(args) => retint::cli::completions::run(args)?,
    }

    Ok(())
}
