#![warn(clippy::pedantic)]
#![allow(
    clippy::match_same_arms,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::single_match_else,
    clippy::wildcard_imports
)]

//! Splitting a unified C++ source into an interface and an
//! implementation stream.
//!
//! The heavy lifting happens in `cppx-syntax`, which produces the block
//! sequence; this crate synthesises the include guard and walks the
//! blocks a second time, routing each one to the `.h` stream, the `.cpp`
//! stream, or both.

use std::io::{self, Write};

use thiserror::Error;

mod emit;
pub mod guard;

use emit::Emitter;

/// Failure while splitting one translation unit.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error(transparent)]
    Syntax(#[from] cppx_syntax::LexError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// The two output streams of a successful split, in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOutput {
    pub header: Vec<u8>,
    pub source: Vec<u8>,
}

/// Split `src` into the given interface and implementation streams.
///
/// `stem` is the input file's stem; it names the generated `#include`
/// and contributes the tail of the include guard.
///
/// # Errors
///
/// Returns [`SplitError::Syntax`] when the lexer rejects the input and
/// [`SplitError::Io`] when either stream fails to accept writes. Output
/// already written before a failure is left as-is; callers that need
/// all-or-nothing behaviour should split into memory first.
pub fn split_source<H: Write, S: Write>(
    src: &[u8],
    stem: &str,
    header: &mut H,
    source: &mut S,
) -> Result<(), SplitError> {
    let blocks = cppx_syntax::tokenize(src)?;
    let guard = guard::synthesize(src, &blocks, stem);
    tracing::debug!(blocks = blocks.len(), %guard, "splitting translation unit");
    Emitter::new(src, &blocks, &guard, stem, header, source).run()?;
    Ok(())
}

/// Split `src` into freshly allocated buffers.
///
/// # Errors
///
/// See [`split_source`].
pub fn split_to_buffers(src: &[u8], stem: &str) -> Result<SplitOutput, SplitError> {
    let mut header = Vec::new();
    let mut source = Vec::new();
    split_source(src, stem, &mut header, &mut source)?;
    Ok(SplitOutput { header, source })
}
