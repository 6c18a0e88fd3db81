#![deny(clippy::expect_used)]
//! Complex linear equation solver CLI
//!
//! Usage:
//!   csolve -in system.txt -out result.txt   # Solve a file, write the result
//!   csolve < system.txt                     # Read stdin, write stdout
//!   csolve --json -in system.txt            # JSON output

use std::env;
use std::process;

use complex_solver::pipeline::{read_source, render, solve_source, write_output};
use complex_solver::{Command, RunConfig, TRACE_ENV};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_usage() {
    println!("csolve {VERSION}");
    println!("Solve a system of linear equations with complex coefficients.");
    println!();
    println!("Usage:");
    println!("  csolve [-in <file>] [-out <file>] [--json]");
    println!();
    println!("Options:");
    println!("  -in, --input <file>     Read the system from <file> (default: stdin)");
    println!("  -out, --output <file>   Write the result to <file> (default: stdout)");
    println!("  --json                  Write the result as JSON");
    println!("  -h, --help              Show this help");
    println!("  -V, --version           Show the version");
    println!();
    println!("Input: the number of variables, the number of equations, then each");
    println!("equation's coefficients followed by its constant, whitespace separated.");
    println!("Set {TRACE_ENV}=1 to trace elimination steps (debug builds).");
}

fn run(config: &RunConfig) {
    let source = match read_source(config) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let solution = match solve_source(&source) {
        Ok(solution) => solution,
        Err(e) => {
            eprintln!("Error: {}", e);
            let context = e.format_with_context(&source);
            if !context.is_empty() {
                eprintln!("{}", context);
            }
            process::exit(1);
        }
    };

    let written = render(&solution, config.format).and_then(|text| write_output(config, &text));
    if let Err(e) = written {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn main() {
    let command = match Command::from_args(env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run 'csolve --help' for usage.");
            process::exit(1);
        }
    };

    match command {
        Command::Help => print_usage(),
        Command::Version => println!("csolve {VERSION}"),
        Command::Run(config) => run(&config),
    }
}
