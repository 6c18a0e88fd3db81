//! Pipeline from input text to rendered result.
//!
//! source text → [`parse_input`] → [`AugmentedSystem`] → [`Solution`] → output text

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use complex_solver_parser::parse_input;

use crate::config::{OutputFormat, RunConfig};
use crate::error::{SolveError, SolveResult};
use crate::system::{AugmentedSystem, Solution};
use crate::trace::trace;

/// Name used in errors when the input comes from stdin
pub const STDIN_NAME: &str = "<stdin>";
/// Name used in errors when the output goes to stdout
pub const STDOUT_NAME: &str = "<stdout>";

/// Parse `source` into an augmented system without solving it.
pub fn build_system(source: &str) -> SolveResult<AugmentedSystem> {
    let input = parse_input(source)?;
    trace!(
        "read {} equation(s) in {} variable(s)",
        input.equations,
        input.variables
    );
    AugmentedSystem::from_input(input)
}

/// Parse and solve `source`.
pub fn solve_source(source: &str) -> SolveResult<Solution> {
    let mut system = build_system(source)?;
    Ok(system.solve())
}

/// Render a solution in the requested format.
pub fn render(solution: &Solution, format: OutputFormat) -> SolveResult<String> {
    match format {
        OutputFormat::Text => Ok(solution.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(solution)?),
    }
}

/// Read the input named by `config`, or stdin.
pub fn read_source(config: &RunConfig) -> SolveResult<String> {
    match &config.input {
        Some(path) => fs::read_to_string(path).map_err(|e| SolveError::io(path, e)),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(|e| SolveError::io(STDIN_NAME, e))?;
            Ok(source)
        }
    }
}

/// Write `text` to the output named by `config`, or stdout.
///
/// No trailing newline is added.
pub fn write_output(config: &RunConfig, text: &str) -> SolveResult<()> {
    match &config.output {
        Some(path) => fs::write(path, text).map_err(|e| SolveError::io(path, e)),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| SolveError::io(STDOUT_NAME, e))
        }
    }
}

/// Solve the system in `input` and write the result to `output`.
pub fn solve_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    format: OutputFormat,
) -> SolveResult<Solution> {
    let config = RunConfig {
        input: Some(PathBuf::from(input.as_ref())),
        output: Some(PathBuf::from(output.as_ref())),
        format,
    };
    run(&config)
}

/// Run one read → solve → write cycle as described by `config`.
pub fn run(config: &RunConfig) -> SolveResult<Solution> {
    let source = read_source(config)?;
    let solution = solve_source(&source)?;
    let text = render(&solution, config.format)?;
    write_output(config, &text)?;
    Ok(solution)
}
