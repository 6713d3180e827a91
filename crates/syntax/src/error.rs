//! Structured lexer errors.

use thiserror::Error;

/// Maximum number of source-context bytes carried by a [`LexError`].
pub const ERROR_CONTEXT_LEN: usize = 28;

/// All the fatal errors the lexer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated character literal")]
    UnterminatedCharLiteral,
    #[error("invalid escape sequence")]
    InvalidEscapeSequence,
    #[error("invalid raw string literal")]
    InvalidRawString,
    #[error("empty character literal")]
    EmptyCharLiteral,
    #[error("unbalanced '}}'")]
    UnbalancedBrace,
    #[error("unbalanced ')'")]
    UnbalancedParen,
}

/// A fatal lexer error.
///
/// Carries the 1-based line where detection occurred, the byte offset of
/// the offending position, and up to [`ERROR_CONTEXT_LEN`] bytes of source
/// context starting there, truncated at the next newline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {excerpt}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: u32,
    pub offset: usize,
    pub excerpt: String,
}

impl LexError {
    pub(crate) fn new(kind: LexErrorKind, line: u32, offset: usize, src: &[u8]) -> Self {
        let excerpt = excerpt_at(src, offset);
        tracing::trace!(?kind, line, offset, "lex error");
        Self {
            kind,
            line,
            offset,
            excerpt,
        }
    }
}

/// Up to [`ERROR_CONTEXT_LEN`] bytes starting at `offset`, truncated at the
/// next newline, rendered lossily.
fn excerpt_at(src: &[u8], offset: usize) -> String {
    let offset = offset.min(src.len());
    let tail = &src[offset..];
    let stop = tail
        .iter()
        .position(|&b| b == b'\n')
        .unwrap_or(tail.len())
        .min(ERROR_CONTEXT_LEN);
    String::from_utf8_lossy(&tail[..stop]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_truncates_at_newline() {
        assert_eq!(excerpt_at(b"/* oops\nrest", 0), "/* oops");
    }

    #[test]
    fn excerpt_caps_length() {
        let src = vec![b'x'; 100];
        assert_eq!(excerpt_at(&src, 0).len(), ERROR_CONTEXT_LEN);
    }

    #[test]
    fn excerpt_from_offset() {
        assert_eq!(excerpt_at(b"abc{def", 3), "{def");
    }
}
