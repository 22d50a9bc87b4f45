//! Error rendering using ariadne
//!
//! Script errors carry the span of the command or argument that failed, so
//! they are rendered as annotated snippets of the script source.

use crate::ScriptError;
use ariadne::{ColorGenerator, IndexType, Label, Report, ReportKind, Source};
use std::io::Write;

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig<'a> {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The filename to display in error messages.
    /// Defaults to "<script>" if not provided.
    pub filename: Option<&'a str>,
    /// The character set to use for rendering.
    pub charset: CharSet,
}

impl Default for RenderConfig<'_> {
    fn default() -> Self {
        RenderConfig::default()
    }
}

impl RenderConfig<'_> {
    const fn default() -> Self {
        Self {
            color: true,
            filename: None,
            charset: CharSet::Unicode,
        }
    }
}

/// Render an error to stderr using the default config.
pub fn render_error(error: &ScriptError, source: &str) {
    render_error_to(error, source, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
///
/// # Example
/// ```
/// use dynarray::{ArrayOptions, RenderConfig, Session, render_error_to};
///
/// let source = "delete 4 2";
/// let mut session = Session::new("abcdef", ArrayOptions::default());
/// let error = session.run(source).unwrap_err();
///
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false, ..Default::default() };
/// render_error_to(&error, source, &mut buf, &config).unwrap();
/// assert!(String::from_utf8_lossy(&buf).contains("invalid range"));
/// ```
pub fn render_error_to(
    error: &ScriptError,
    source: &str,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let filename = config.filename.unwrap_or("<script>");
    let span = error.span().0.clone();
    let message = error.to_string();

    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let ariadne_charset = match config.charset {
        CharSet::Unicode => ariadne::CharSet::Unicode,
        CharSet::Ascii => ariadne::CharSet::Ascii,
    };
    let ariadne_config = ariadne::Config::default()
        .with_color(config.color)
        .with_char_set(ariadne_charset)
        .with_index_type(IndexType::Byte);

    let mut report = Report::build(ReportKind::Error, (filename, span.clone()))
        .with_code(error.code())
        .with_message(&message)
        .with_config(ariadne_config)
        .with_label(
            Label::new((filename, span))
                .with_message(&message)
                .with_color(colors.next()),
        );

    if let Some(help) = error.help() {
        report = report.with_help(help);
    }

    report
        .finish()
        .write((filename, Source::from(source)), &mut *writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArrayOptions, Session, parse};

    const UNICODE_CONFIG: RenderConfig = RenderConfig {
        color: false,
        filename: Some("test.script"),
        charset: CharSet::Unicode,
    };

    const ASCII_CONFIG: RenderConfig = RenderConfig {
        color: false,
        filename: Some("test.script"),
        charset: CharSet::Ascii,
    };

    fn render_run_error(initial: &str, source: &str, config: &RenderConfig) -> String {
        let mut session = Session::new(initial, ArrayOptions::default());
        match session.run(source) {
            Err(e) => {
                let mut buf = Vec::new();
                render_error_to(&e, source, &mut buf, config).unwrap();
                String::from_utf8_lossy(&buf).into_owned()
            }
            Ok(_) => panic!("Expected an error for script: {source}"),
        }
    }

    #[test]
    fn test_out_of_range_unicode() {
        let output = render_run_error("abc", r#"add "d"; get 9"#, &UNICODE_CONFIG);
        assert!(output.contains("[A001] Error: index 9 is out of range"));
        assert!(output.contains("test.script:1:10"));
        assert!(output.contains("╭─"));
    }

    #[test]
    fn test_invalid_range_ascii_has_help() {
        let output = render_run_error("abcdef", "extract 4 2", &ASCII_CONFIG);
        assert!(output.contains("[A002] Error: invalid range: start 4 is greater than end 2"));
        assert!(output.contains(",-["));
        assert!(output.contains("Help: The end of a range is exclusive"));
    }

    #[test]
    fn test_syntax_error() {
        let source = "add g";
        let error = parse(source).unwrap_err();
        let mut buf = Vec::new();
        render_error_to(&error, source, &mut buf, &UNICODE_CONFIG).unwrap();
        let output = String::from_utf8_lossy(&buf);
        assert!(output.contains("[S001] Error: expected"));
        assert!(output.contains("quoted text"));
    }

    #[test]
    fn test_unknown_verb_lists_commands() {
        let source = "frobnicate";
        let error = parse(source).unwrap_err();
        let mut buf = Vec::new();
        render_error_to(&error, source, &mut buf, &ASCII_CONFIG).unwrap();
        let output = String::from_utf8_lossy(&buf);
        assert!(output.contains("[S002] Error: unknown command `frobnicate`"));
        assert!(output.contains("Known commands: add, set, get"));
    }

    #[test]
    fn test_charset_default_is_unicode() {
        assert_eq!(CharSet::default(), CharSet::Unicode);
    }

    #[test]
    fn test_render_config_default_charset() {
        let config = RenderConfig::default();
        assert_eq!(config.charset, CharSet::Unicode);
        assert!(config.filename.is_none());
    }
}
