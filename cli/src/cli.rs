//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use dynarray::{ArrayOptions, BoundsPolicy};

/// dynarray - A growable array with index windows and aliasing views
#[derive(Parser, Debug)]
#[command(name = "dynarray", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Upper bound used by index checks
    #[arg(long, global = true, default_value = "capacity")]
    pub bounds: Bounds,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Walk through the container operations on a sample array
    Demo,

    /// Run a script given on the command line
    Eval(EvalArgs),

    /// Run a script file
    Run(RunArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `eval` command.
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Script to run, e.g. `add "g"; extract 2 4`
    pub script: String,

    /// Characters of the starting array
    #[arg(long, short, default_value = "")]
    pub input: String,
}

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the script file, or `-` for stdin
    pub file: String,

    /// Characters of the starting array
    #[arg(long, short, default_value = "")]
    pub input: String,
}

/// Arguments for the `completions` command.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

/// Upper bound used by index checks.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Bounds {
    /// Accept any index below the capacity
    #[default]
    Capacity,
    /// Accept only indices of populated slots
    Populated,
}

impl From<Bounds> for ArrayOptions {
    fn from(bounds: Bounds) -> Self {
        let bounds = match bounds {
            Bounds::Capacity => BoundsPolicy::Capacity,
            Bounds::Populated => BoundsPolicy::Populated,
        };
        ArrayOptions { bounds }
    }
}
