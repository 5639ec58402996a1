use clap::Parser;
use devsprite::cli::{Cli, Commands};
use devsprite::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new(cli.quiet);

    match cli.command {
        Commands::Build(args) => devsprite::cli::build::run(args, &printer)?,
        Commands::Frame(args) => devsprite::cli::frame::run(args, &printer)?,
        Commands::List(args) => devsprite::cli::list::run(args, &printer)?,
        Commands::Palette(args) => devsprite::cli::palette::run(args, &printer)?,
        Commands::Init(args) => devsprite::cli::init::run(args, &printer)?,
        Commands::Completions(args) => devsprite::cli::completions::run(args)?,
    }

    Ok(())
}
