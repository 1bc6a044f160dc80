//! HoloScript - command-line tool for parsing and validating HoloScript scene code

use std::process::ExitCode;

use holoscript::cli;

fn main() -> ExitCode {
    cli::run()
}
