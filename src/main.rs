use clap::Parser;
use miette::Result;

use gfxgen::cli::{Cli, Commands};
use gfxgen::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => gfxgen::cli::build::run(args, &printer)?,
        Commands::Init(args) => gfxgen::cli::init::run(args, &printer)?,
        Commands::List(args) => gfxgen::cli::list::run(args, &printer)?,
        Commands::Palette(args) => gfxgen::cli::palette::run(args, &printer)?,
        Commands::Watch(args) => gfxgen::cli::watch::run(args, &printer)?,
        Commands::Completions(args) => gfxgen::cli::completions::run(args)?,
    }

    Ok(())
}
