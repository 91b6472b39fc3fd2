//! # PrintQuote Entry Point
//!
//! ## Usage
//! ```text
//! printquote quote --product flyer --paper offset90 --quantity 1000
//! printquote quote --product poster --paper couche300 --quantity 500 --margin 15 --json
//! printquote catalog --discount 5000=0.45
//! PRINTQUOTE_CATALOG=shop.json printquote catalog --json
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

use clap::Parser;
use printquote_cli::{init_tracing, run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
