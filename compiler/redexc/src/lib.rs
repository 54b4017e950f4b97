//! Driver for the redex interpreter.
//!
//! Ties the parser and the evaluator together: `run_source` evaluates a
//! program held in memory, `run_file` one read from disk. The `redex`
//! binary is a thin layer over these plus argument parsing (`cli`).

pub mod cli;
mod driver_error;
pub mod tracing_setup;

use std::path::Path;

use redex_eval::{EvalResult, Expression, InterpreterBuilder};

pub use driver_error::DriverError;

/// Parse and evaluate `source`. `file` names it in error positions.
#[tracing::instrument(level = "debug", skip(source, builder))]
pub fn run_source(source: &str, file: &str, builder: InterpreterBuilder) -> EvalResult<Expression> {
    let program = redex_parse::parse(source, file)?;
    builder.build().eval(&program)
}

/// Read, parse and evaluate the program at `path`.
pub fn run_file(path: &Path, builder: InterpreterBuilder) -> Result<Expression, DriverError> {
    let source = read_source(path)?;
    let file = path.display().to_string();
    Ok(run_source(&source, &file, builder)?)
}

/// Read a program from `path`.
pub fn read_source(path: &Path) -> Result<String, DriverError> {
    std::fs::read_to_string(path).map_err(|source| DriverError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Read a program from standard input.
pub fn read_stdin() -> Result<String, DriverError> {
    use std::io::Read;

    let mut source = String::new();
    std::io::stdin()
        .read_to_string(&mut source)
        .map_err(|source| DriverError::Io {
            path: "<stdin>".to_string(),
            source,
        })?;
    Ok(source)
}
