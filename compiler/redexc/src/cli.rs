//! Command line parsing for `redex [OPTIONS] [FILE]`.

use std::path::PathBuf;

use redex_eval::DEFAULT_MAX_DEPTH;

pub const USAGE: &str = "\
Usage: redex [OPTIONS] [FILE]

Evaluate a redex program and print its value.
Reads standard input when FILE is absent or `-`.

Options:
  --dump-ast          Print the parsed program before evaluating it
  --max-depth=<n>     Limit on nested reductions (default: 10000)
  -h, --help          Print this help
  -V, --version       Print the version

Set RUST_LOG (e.g. RUST_LOG=redex_eval=trace) to trace evaluation on stderr.";

/// Where the program is read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

/// Options of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub input: Input,
    pub dump_ast: bool,
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            input: Input::Stdin,
            dump_ast: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(Options),
    Help,
    Version,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("invalid value for --max-depth: `{0}`")]
    InvalidDepth(String),
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
}

/// Parse arguments, without the program name.
pub fn parse_args<I>(args: I) -> Result<Command, UsageError>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut options = Options::default();
    let mut input = None;

    for arg in args {
        let arg = arg.into();
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--dump-ast" => options.dump_ast = true,
            "-" if input.is_none() => input = Some(Input::Stdin),
            _ => {
                if let Some(value) = arg.strip_prefix("--max-depth=") {
                    options.max_depth = value
                        .parse()
                        .map_err(|_| UsageError::InvalidDepth(value.to_string()))?;
                } else if arg.starts_with('-') && arg != "-" {
                    return Err(UsageError::UnknownOption(arg));
                } else if input.is_none() {
                    input = Some(Input::File(PathBuf::from(arg)));
                } else {
                    return Err(UsageError::UnexpectedArgument(arg));
                }
            }
        }
    }

    options.input = input.unwrap_or(Input::Stdin);
    Ok(Command::Run(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(options: Options) -> Result<Command, UsageError> {
        Ok(Command::Run(options))
    }

    #[test]
    fn defaults_to_stdin() {
        assert_eq!(parse_args(Vec::<String>::new()), run(Options::default()));
        assert_eq!(parse_args(["-"]), run(Options::default()));
    }

    #[test]
    fn file_and_flags() {
        let expected = Options {
            input: Input::File(PathBuf::from("prog.rdx")),
            dump_ast: true,
            max_depth: 50,
        };
        assert_eq!(
            parse_args(["--dump-ast", "prog.rdx", "--max-depth=50"]),
            run(expected)
        );
    }

    #[test]
    fn help_and_version_win() {
        assert_eq!(parse_args(["prog.rdx", "--help"]), Ok(Command::Help));
        assert_eq!(parse_args(["-V"]), Ok(Command::Version));
    }

    #[test]
    fn usage_errors() {
        assert_eq!(
            parse_args(["--max-depth=lots"]),
            Err(UsageError::InvalidDepth("lots".into()))
        );
        assert_eq!(
            parse_args(["--fast"]),
            Err(UsageError::UnknownOption("--fast".into()))
        );
        assert_eq!(
            parse_args(["a.rdx", "b.rdx"]),
            Err(UsageError::UnexpectedArgument("b.rdx".into()))
        );
    }
}
