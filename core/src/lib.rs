#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! A growable array with a logical index window, aliasing views and
//! one-slot-at-a-time growth.
//!
//! The entry point is [`DynamicArray`]. Every fallible operation returns
//! [`ArrayError`], which tells an out-of-range index apart from an inverted
//! `from..to` pair.

extern crate alloc;

pub mod array;
pub mod error;
pub mod options;
mod storage;

pub use array::DynamicArray;
pub use error::{ArrayError, Result};
pub use options::{ArrayOptions, BoundsPolicy};
