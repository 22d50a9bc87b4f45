//! Error handling utilities for the CLI.

use dynarray::{RenderConfig, ScriptError, render_error_to};

/// Render a script error to stderr.
pub fn render_to_stderr(error: &ScriptError, source: &str, filename: Option<&str>, no_color: bool) {
    let config = RenderConfig {
        color: !no_color,
        filename,
        ..Default::default()
    };
    render_error_to(error, source, &mut std::io::stderr(), &config).ok();
}
