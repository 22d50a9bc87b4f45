//! The `eval` command - run a script given on the command line.

use std::process::ExitCode;

use dynarray::{ArrayOptions, Session, parse};

use crate::cli::EvalArgs;
use crate::common::error::render_to_stderr;

/// Run the eval command.
pub fn run(args: EvalArgs, options: ArrayOptions, no_color: bool) -> ExitCode {
    interpret_input(&args.script, None, &args.input, options, no_color)
}

/// Run every command of `source` against an array built from `input`,
/// printing one line per command.
///
/// Stops at the first failing command; its error goes to stderr.
pub fn interpret_input(
    source: &str,
    filename: Option<&str>,
    input: &str,
    options: ArrayOptions,
    no_color: bool,
) -> ExitCode {
    let steps = match parse(source) {
        Ok(steps) => steps,
        Err(e) => {
            render_to_stderr(&e, source, filename, no_color);
            return ExitCode::FAILURE;
        }
    };

    let mut session = Session::new(input, options);
    for step in &steps {
        match session.apply(step) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                tracing::debug!(error = %e, "Script stopped");
                render_to_stderr(&e, source, filename, no_color);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
