//! Binary entrypoint for the `otto` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    match otto::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
