use std::process::ExitCode;

use clap::Parser;
use showcase_cli::Cli;

fn main() -> ExitCode {
    showcase_core::tracing::init_tracing();

    match Cli::parse().run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
