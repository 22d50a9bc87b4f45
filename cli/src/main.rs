//! dynarray CLI - drive a growable array from the command line.

use std::process::ExitCode;

use clap::Parser;
use dynarray_cli::{
    cli::{Cli, Command},
    commands,
};

fn main() -> ExitCode {
    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();
    let options = cli.bounds.into();

    match cli.command {
        Command::Demo => commands::demo::run(options),
        Command::Eval(args) => commands::eval::run(args, options, cli.no_color),
        Command::Run(args) => commands::run::run(args, options, cli.no_color),
        Command::Completions(args) => {
            commands::completions::run(args);
            ExitCode::SUCCESS
        }
    }
}
