//! The `redex` command line interface.

use std::path::Path;
use std::process::ExitCode;

use redex_eval::InterpreterBuilder;
use redexc::cli::{parse_args, Command, Input, Options, USAGE};
use redexc::{read_source, read_stdin, tracing_setup, DriverError};

fn main() -> ExitCode {
    tracing_setup::init_tracing();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Ok(Command::Version) => {
            println!("redex {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
        }
    }
}

fn run(options: &Options) -> Result<(), DriverError> {
    let (source, file) = match &options.input {
        Input::Stdin => (read_stdin()?, "<stdin>".to_string()),
        Input::File(path) => (read_source(path)?, display(path)),
    };

    let program = redex_parse::parse(&source, &file)?;
    if options.dump_ast {
        println!("{program}");
    }

    let interpreter = InterpreterBuilder::new()
        .max_depth(options.max_depth)
        .build();
    let value = interpreter.eval(&program)?;
    println!("{value}");
    Ok(())
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
