#![warn(clippy::pedantic)]
#![allow(
    clippy::single_match,
    clippy::wildcard_imports,
    clippy::too_many_lines,
    clippy::enum_glob_use,
    clippy::cast_possible_truncation,
    clippy::module_name_repetitions,
    clippy::single_match_else
)]

//! Lexical analysis for unified C++ sources.
//!
//! This crate turns the byte buffer of a `.cppx` translation unit into an
//! ordered sequence of tagged [`block::CodeBlock`]s, tracking enough
//! context (container stack, brace and parenthesis depth) for the
//! splitter to route every byte to the interface or implementation
//! output.

pub mod block;
pub mod container;
pub mod cursor;
pub mod error;
pub mod lexer;

pub use block::{CodeBlock, Kind};
pub use container::{Container, ContainerKind, ContainerStack};
pub use error::{LexError, LexErrorKind, ERROR_CONTEXT_LEN};
pub use lexer::{tokenize, Lexer};
