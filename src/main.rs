//! Binary entry point for the `xrif` command-line tool.
//!
//! Parses argv via `clap`'s derive API and dispatches to the matching
//! subcommand handler in [`xrif::cli::run`], mirroring the reference CLI's
//! `run(args) -> i32` exit-code convention: `main` only parses and exits.

use clap::Parser;
use xrif::cli::args::Cli;
use xrif::cli::run::run;

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(cli.command, cli.verbose));
}
