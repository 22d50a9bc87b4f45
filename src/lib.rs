//! dynarray - A growable array with index windows and aliasing views
//!
//! # Overview
//!
//! [`DynamicArray`] is an array list whose populated window `low..=high`
//! addresses a block of slots directly. It grows by exactly one slot when an
//! insert hits a full block, and offers whole-range operations that either
//! alias storage ([`sublist`](DynamicArray::sublist)) or copy it
//! ([`extract`](DynamicArray::extract), [`append`](DynamicArray::append),
//! [`insert`](DynamicArray::insert), [`delete`](DynamicArray::delete)).
//!
//! # Quick Start
//!
//! ```
//! use dynarray::DynamicArray;
//!
//! let mut a: DynamicArray<char> = "abcdef".chars().collect();
//! a.insert_at(0, 'z').unwrap();
//! assert_eq!(a.to_string(), "[z, a, b, c, d, e, f]");
//!
//! // Views share storage with their parent.
//! let mut view = a.sublist(1, 3).unwrap();
//! view.set(1, 'A').unwrap();
//! assert_eq!(a.get(1).unwrap(), Some('A'));
//!
//! // Extracted ranges keep their original indices.
//! let cd = a.extract(3, 5).unwrap();
//! assert_eq!((cd.low(), cd.to_string()), (3, "[c, d]".to_string()));
//! ```
//!
//! # Scripts
//!
//! The [`script`] module drives a `DynamicArray<char>` from a small command
//! language, and [`render_error`] shows script failures against the source:
//!
//! ```
//! use dynarray::{ArrayOptions, Session};
//!
//! let mut session = Session::new("abcdef", ArrayOptions::default());
//! let lines = session.run(r#"append "wxyz"; extract 2 4"#).unwrap();
//! assert_eq!(lines, ["[a, b, c, d, e, f, w, x, y, z]", "[c, d]"]);
//! ```

// Error rendering utilities
pub mod error_renderer;
pub use error_renderer::{CharSet, RenderConfig, render_error, render_error_to};

pub mod script;
pub use script::{Operation, ScriptError, Session, Span, Step, parse};

// Re-export the container API from dynarray_core
pub use dynarray_core::{ArrayError, ArrayOptions, BoundsPolicy, DynamicArray, Result};
