//! Print the elimination status of every team in a division file.
//! Run with: cargo run --bin eliminate -- tests/fixtures/teams5.txt
//! Files ending in .csv or .json are read in those formats.

use division_elimination::{division_report, format_report, load_division, EliminationError};
use std::process::ExitCode;

fn run(path: &str) -> Result<(), EliminationError> {
    let standings = load_division(path)?;
    let report = division_report(&standings)?;
    print!("{}", format_report(&report));
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: eliminate <division-file>");
        return ExitCode::from(2);
    };
    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
