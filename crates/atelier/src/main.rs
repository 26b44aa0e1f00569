use anyhow::Context;
use clap::Parser;

use atelier::cli::Cli;
use atelier::commands;
use atelier::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    atelier::init_logging(cli.verbose);

    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let config = Config::load(cli.config.as_deref(), &cwd)?;

    let output = commands::run(&cli.command, &config)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
