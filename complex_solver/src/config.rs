//! Run configuration for the `csolve` binary.
//!
//! Everything comes from the command line, except tracing which is switched
//! on through the environment (see [`TRACE_ENV`]).

use std::path::PathBuf;

use thiserror::Error;

/// Environment variable that enables elimination tracing in debug builds.
pub const TRACE_ENV: &str = "COMPLEX_SOLVER_TRACE";

/// How a solution is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One value per line, or the fixed verdict text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Where to read the system from and where to write the result.
///
/// `None` means stdin / stdout.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
}

/// What the command line asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(RunConfig),
    Help,
    Version,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing value for '{0}'")]
    MissingValue(String),
    #[error("unknown argument '{0}'")]
    UnknownArgument(String),
}

impl Command {
    /// Parse arguments (without the program name).
    ///
    /// Accepts `-in <path>` / `-out <path>` as well as the long
    /// `--input` / `--output` spellings.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = RunConfig::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "-V" | "--version" => return Ok(Command::Version),
                "--json" => config.format = OutputFormat::Json,
                "-in" | "--input" => {
                    let path = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    config.input = Some(PathBuf::from(path));
                }
                "-out" | "--output" => {
                    let path = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    config.output = Some(PathBuf::from(path));
                }
                _ => return Err(ConfigError::UnknownArgument(arg.clone())),
            }
        }

        Ok(Command::Run(config))
    }
}
