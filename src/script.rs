//! Operation scripts for driving a `DynamicArray<char>`.
//!
//! A script is a `;`-separated list of commands. Each command is a verb
//! followed by index and quoted-text arguments:
//!
//! ```text
//! add "g"; add 0 "z"; extract 2 4; show
//! ```
//!
//! | Command | Operation |
//! |---------|-----------|
//! | `add "c"` | [`push`](DynamicArray::push) |
//! | `add i "c"` | [`insert_at`](DynamicArray::insert_at) |
//! | `set i "c"` / `get i` / `remove i` | indexed access |
//! | `size` / `show` | inspection |
//! | `append "text"` / `insert i "text"` | combine with a container built from `text` |
//! | `sublist a b` / `delete a b` / `extract a b` | range operations |
//! | `prefix b` / `suffix a` | [`split_prefix`](DynamicArray::split_prefix) / [`split_suffix`](DynamicArray::split_suffix) |
//!
//! Range and combining commands replace the session's container with their
//! result, so later commands act on it.

use core::ops::Range;

use dynarray_core::{ArrayError, ArrayOptions, DynamicArray};
use pest::Parser;
use pest::error::InputLocation;
use pest::iterators::Pair;
use pest_derive::Parser;
use thiserror::Error;

#[derive(Parser)]
#[grammar = "script.pest"]
struct ScriptParser;

/// Byte range of a command or argument within the script source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span(pub Range<usize>);

impl From<pest::Span<'_>> for Span {
    fn from(span: pest::Span<'_>) -> Self {
        Span(span.start()..span.end())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Push(char),
    InsertAt(usize, char),
    Set(usize, char),
    Get(usize),
    Remove(usize),
    Size,
    Show,
    Append(String),
    Insert(usize, String),
    Sublist(usize, usize),
    Delete(usize, usize),
    Extract(usize, usize),
    Prefix(usize),
    Suffix(usize),
}

/// A parsed command and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub op: Operation,
    pub span: Span,
}

const VERBS: &str = "add, set, get, remove, size, show, append, insert, sublist, delete, extract, prefix, suffix";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("{message}")]
    Syntax { message: String, span: Span },

    #[error("unknown command `{verb}`")]
    UnknownVerb { verb: String, span: Span },

    #[error("`{verb}` expects {expected}")]
    Arity {
        verb: String,
        expected: &'static str,
        span: Span,
    },

    #[error("expected {expected}")]
    UnexpectedArgument { expected: &'static str, span: Span },

    #[error("{source}")]
    Array { source: ArrayError, span: Span },
}

impl ScriptError {
    pub fn span(&self) -> &Span {
        match self {
            ScriptError::Syntax { span, .. }
            | ScriptError::UnknownVerb { span, .. }
            | ScriptError::Arity { span, .. }
            | ScriptError::UnexpectedArgument { span, .. }
            | ScriptError::Array { span, .. } => span,
        }
    }

    /// Short stable code shown next to rendered errors.
    pub fn code(&self) -> &'static str {
        match self {
            ScriptError::Syntax { .. } => "S001",
            ScriptError::UnknownVerb { .. } => "S002",
            ScriptError::Arity { .. } => "S003",
            ScriptError::UnexpectedArgument { .. } => "S004",
            ScriptError::Array {
                source: ArrayError::IndexOutOfRange { .. },
                ..
            } => "A001",
            ScriptError::Array {
                source: ArrayError::InvalidRange { .. },
                ..
            } => "A002",
        }
    }

    /// Extra hint for the reader, if there is one.
    pub fn help(&self) -> Option<String> {
        match self {
            ScriptError::UnknownVerb { .. } => Some(format!("Known commands: {VERBS}")),
            ScriptError::Array {
                source: ArrayError::InvalidRange { .. },
                ..
            } => Some("The end of a range is exclusive and may not come before its start".into()),
            _ => None,
        }
    }
}

fn syntax_error(error: pest::error::Error<Rule>) -> ScriptError {
    let error = error.renamed_rules(|rule| match rule {
        Rule::verb => "a command".into(),
        Rule::integer => "an index".into(),
        Rule::text => "quoted text".into(),
        Rule::EOI => "end of script".into(),
        other => format!("{other:?}"),
    });
    let span = match error.location {
        InputLocation::Pos(pos) => Span(pos..pos),
        InputLocation::Span((start, end)) => Span(start..end),
    };
    ScriptError::Syntax {
        message: error.variant.message().into_owned(),
        span,
    }
}

/// Parses a script into steps without running any of them.
pub fn parse(source: &str) -> Result<Vec<Step>, ScriptError> {
    let mut pairs = ScriptParser::parse(Rule::script, source).map_err(|e| {
        tracing::debug!("Pest parser failed with: {:?}", e);
        syntax_error(e)
    })?;
    let Some(script) = pairs.next() else {
        return Ok(Vec::new());
    };
    script
        .into_inner()
        .filter(|pair| pair.as_rule() == Rule::command)
        .map(parse_command)
        .collect()
}

fn parse_command(pair: Pair<Rule>) -> Result<Step, ScriptError> {
    let span = Span::from(pair.as_span());
    let mut inner = pair.into_inner();
    let Some(verb) = inner.next() else {
        return Err(ScriptError::Syntax {
            message: "expected a command".into(),
            span,
        });
    };
    let verb = verb.as_str();
    let args: Vec<Pair<Rule>> = inner.collect();
    let arity = |expected| ScriptError::Arity {
        verb: verb.into(),
        expected,
        span: span.clone(),
    };

    let op = match (verb, args.as_slice()) {
        ("add", [item]) => Operation::Push(char_arg(item)?),
        ("add", [index, item]) => Operation::InsertAt(index_arg(index)?, char_arg(item)?),
        ("add", _) => return Err(arity("an item, or an index and an item")),
        ("set", [index, item]) => Operation::Set(index_arg(index)?, char_arg(item)?),
        ("set", _) => return Err(arity("an index and an item")),
        ("get", [index]) => Operation::Get(index_arg(index)?),
        ("remove", [index]) => Operation::Remove(index_arg(index)?),
        ("get" | "remove", _) => return Err(arity("an index")),
        ("size", []) => Operation::Size,
        ("show", []) => Operation::Show,
        ("size" | "show", _) => return Err(arity("no arguments")),
        ("append", [text]) => Operation::Append(text_arg(text)?),
        ("append", _) => return Err(arity("quoted text")),
        ("insert", [index, text]) => Operation::Insert(index_arg(index)?, text_arg(text)?),
        ("insert", _) => return Err(arity("an index and quoted text")),
        ("sublist", [from, to]) => Operation::Sublist(index_arg(from)?, index_arg(to)?),
        ("delete", [from, to]) => Operation::Delete(index_arg(from)?, index_arg(to)?),
        ("extract", [from, to]) => Operation::Extract(index_arg(from)?, index_arg(to)?),
        ("sublist" | "delete" | "extract", _) => return Err(arity("a start and an end index")),
        ("prefix", [to]) => Operation::Prefix(index_arg(to)?),
        ("suffix", [from]) => Operation::Suffix(index_arg(from)?),
        ("prefix" | "suffix", _) => return Err(arity("an index")),
        _ => {
            return Err(ScriptError::UnknownVerb {
                verb: verb.into(),
                span,
            });
        }
    };
    Ok(Step { op, span })
}

fn index_arg(pair: &Pair<Rule>) -> Result<usize, ScriptError> {
    let unexpected = |expected| ScriptError::UnexpectedArgument {
        expected,
        span: pair.as_span().into(),
    };
    if pair.as_rule() != Rule::integer {
        return Err(unexpected("an index"));
    }
    pair.as_str()
        .parse()
        .map_err(|_| unexpected("an index that fits in usize"))
}

fn text_arg(pair: &Pair<Rule>) -> Result<String, ScriptError> {
    let quoted = pair.as_str();
    match (pair.as_rule(), quoted.strip_prefix('"').and_then(|s| s.strip_suffix('"'))) {
        (Rule::text, Some(text)) => Ok(text.into()),
        _ => Err(ScriptError::UnexpectedArgument {
            expected: "quoted text",
            span: pair.as_span().into(),
        }),
    }
}

fn char_arg(pair: &Pair<Rule>) -> Result<char, ScriptError> {
    let text = text_arg(pair)?;
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ScriptError::UnexpectedArgument {
            expected: "a single quoted character",
            span: pair.as_span().into(),
        }),
    }
}

/// Builds a full container from the characters of `text`.
pub fn letters(text: &str, options: ArrayOptions) -> DynamicArray<char> {
    let mut array = DynamicArray::with_options(text.chars().count(), options);
    for c in text.chars() {
        array.push(c);
    }
    array
}

fn slot(slot: Option<char>) -> char {
    slot.unwrap_or('_')
}

/// A container plus the commands applied to it so far.
pub struct Session {
    current: DynamicArray<char>,
}

impl Session {
    pub fn new(initial: &str, options: ArrayOptions) -> Self {
        Self {
            current: letters(initial, options),
        }
    }

    pub fn current(&self) -> &DynamicArray<char> {
        &self.current
    }

    /// Runs one step and returns the line to show for it.
    ///
    /// A failing step leaves the session unchanged.
    pub fn apply(&mut self, step: &Step) -> Result<String, ScriptError> {
        let at = |source| ScriptError::Array {
            source,
            span: step.span.clone(),
        };
        let options = self.current.options();
        let current = &mut self.current;

        let replacement = match &step.op {
            Operation::Push(c) => {
                current.push(*c);
                return Ok(current.to_string());
            }
            Operation::InsertAt(index, c) => {
                current.insert_at(*index, *c).map_err(at)?;
                return Ok(current.to_string());
            }
            Operation::Set(index, c) => {
                let previous = current.set(*index, *c).map_err(at)?;
                return Ok(format!("{current} (was {})", slot(previous)));
            }
            Operation::Get(index) => {
                return Ok(slot(current.get(*index).map_err(at)?).to_string());
            }
            Operation::Remove(index) => {
                let removed = current.remove(*index).map_err(at)?;
                return Ok(format!("{current} (removed {})", slot(removed)));
            }
            Operation::Size => return Ok(current.size().to_string()),
            Operation::Show => {
                return Ok(format!(
                    "{current} low={} size={} capacity={}",
                    current.low(),
                    current.size(),
                    current.capacity()
                ));
            }
            Operation::Append(text) => current.append(&letters(text, options)),
            Operation::Insert(index, text) => {
                current.insert(*index, &letters(text, options)).map_err(at)?
            }
            Operation::Sublist(from, to) => current.sublist(*from, *to).map_err(at)?,
            Operation::Delete(from, to) => current.delete(*from, *to).map_err(at)?,
            Operation::Extract(from, to) => current.extract(*from, *to).map_err(at)?,
            Operation::Prefix(to) => current.split_prefix(*to).map_err(at)?,
            Operation::Suffix(from) => current.split_suffix(*from).map_err(at)?,
        };
        *current = replacement;
        Ok(current.to_string())
    }

    /// Parses and runs a whole script, stopping at the first failure.
    pub fn run(&mut self, source: &str) -> Result<Vec<String>, ScriptError> {
        parse(source)?
            .iter()
            .map(|step| self.apply(step))
            .collect()
    }
}
