//! redblack - Binary Entry Point
//!
//! Builds a tree from the command line, applies scripted operations and
//! prints the breadth-first export. See [`redblack::shell`] for the syntax.

use std::io;
use std::process::ExitCode;

use redblack::shell::{self, ShellOptions};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() -> ExitCode {
    let options = match ShellOptions::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("{}", shell::USAGE);
            return ExitCode::from(2);
        }
    };

    if options.help {
        println!("{}", shell::USAGE);
        return ExitCode::SUCCESS;
    }

    if let Err(e) = TermLogger::init(
        options.log_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("warning: logger unavailable: {e}");
    }

    let stdout = io::stdout();
    match shell::run(&options, &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
