//! The `run` command - run a script file.

use std::process::ExitCode;

use dynarray::ArrayOptions;

use crate::cli::RunArgs;
use crate::common::input::read_input;

use super::eval::interpret_input;

/// Run the run command.
pub fn run(args: RunArgs, options: ArrayOptions, no_color: bool) -> ExitCode {
    let (content, display_name) = match read_input(&args.file) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    interpret_input(
        &content,
        Some(&display_name),
        &args.input,
        options,
        no_color,
    )
}
