//! # linespec
//!
//! Compiles a compact pattern specification into an anchored regular
//! expression and filters input lines through it.
//!
//! A specification mixes literal text with `%{...}` tokens:
//!
//! ```text
//! %{#}    one-or-more word/space characters (eager capture)
//! %{#G}   any characters, matched lazily
//! %{#S#}  a word followed by exactly # more whitespace-separated words
//! ```
//!
//! All embedded numbers must be non-negative integers. Matching is
//! whole-line: `error %{1}: %{2G}` accepts `error 404: not found` but not
//! `prefix error 404: not found`.

pub mod compiler;
pub mod filter;

pub use compiler::{CompiledPattern, SpecError};
pub use filter::filter_lines;
