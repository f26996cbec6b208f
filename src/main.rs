use anyhow::Result;
use clap::Parser;
use std::io;

mod cli_bin;

use cli_bin::args::{Cli, Commands};
use cli_bin::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Read(args) => commands::read_command(args, &mut out),
        Commands::Write(args) => commands::write_command(args, &mut io::stdin().lock(), &mut out),
        Commands::Stat(args) => commands::stat_command(args, &mut out),
    }
}
