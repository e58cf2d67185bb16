mod cli;
mod command;
mod config;
mod constants;
mod error;

use clap::Parser;

use self::{cli::Cli, error::CommandError};

fn main() {
    if let Err(err) = Cli::parse().run() {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}
