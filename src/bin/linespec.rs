//! Command-line interface for linespec
//! This binary compiles its arguments into a pattern and filters stdin
//! lines through it, printing the lines that fully match.
//!
//! Usage:
//!   linespec `<spec>`...   - words of the pattern specification, joined with single spaces

use std::io;

use clap::{Arg, Command};

use linespec::{filter_lines, CompiledPattern};

const USAGE: &str = "Specification is incorrect, should be either: %{#}, %{#G} or %{#S#}.\n\
                     All numbers must be non-negative integers.";

fn main() {
    let matches = Command::new("linespec")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Filter stdin lines against a pattern specification")
        .arg(
            Arg::new("spec")
                .help("Pattern specification text; every argument is part of the pattern")
                .num_args(0..)
                .allow_hyphen_values(true)
                .trailing_var_arg(true),
        )
        .get_matches();

    let spec = matches
        .get_many::<String>("spec")
        .map(|words| words.cloned().collect::<Vec<_>>())
        .unwrap_or_default()
        .join(" ");

    // A malformed specification ends the run before any input is read.
    let pattern = match CompiledPattern::compile(&spec) {
        Ok(pattern) => pattern,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            std::process::exit(0);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = filter_lines(&pattern, stdin.lock(), stdout.lock()) {
        eprintln!("Error reading input: {}", e);
        std::process::exit(1);
    }
}
