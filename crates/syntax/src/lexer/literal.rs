//! Character, string and raw-string literal scanning.

use super::Lexer;
use crate::block::Kind;
use crate::error::{LexError, LexErrorKind};

/// Longest permitted raw-string delimiter.
const RAW_DELIMITER_MAX: usize = 16;

impl<'src> Lexer<'src> {
    pub(super) fn char_literal(&mut self) -> Result<(), LexError> {
        let begin = self.cursor.pos();
        let line = self.cursor.line();
        self.cursor.advance();
        match self.cursor.peek() {
            None => {
                return Err(self.err_at(LexErrorKind::UnterminatedCharLiteral, line, begin));
            }
            Some(b'\'') => {
                return Err(self.err_at(LexErrorKind::EmptyCharLiteral, line, begin));
            }
            Some(b'\\') => self.escape_sequence()?,
            Some(_) => self.cursor.advance(),
        }
        if self.cursor.peek() != Some(b'\'') {
            return Err(self.err_at(LexErrorKind::UnterminatedCharLiteral, line, begin));
        }
        self.cursor.advance();
        self.emit(Kind::CharLiteral, begin, self.cursor.pos() - 1);
        Ok(())
    }

    pub(super) fn string_literal(&mut self) -> Result<(), LexError> {
        // `R"..."` (and `u8R`, `LR`, ... which also end in `R`) is a raw
        // string.
        if self.cursor.prev() == Some(b'R') {
            return self.raw_string();
        }
        let begin = self.cursor.pos();
        let line = self.cursor.line();
        self.cursor.advance();
        loop {
            match self.cursor.peek() {
                None | Some(b'\n') => {
                    return Err(self.err_at(LexErrorKind::UnterminatedString, line, begin));
                }
                Some(b'"') => {
                    self.cursor.advance();
                    break;
                }
                Some(b'\\') => self.escape_sequence()?,
                Some(_) => self.cursor.advance(),
            }
        }
        self.emit(Kind::StringLiteral, begin, self.cursor.pos() - 1);
        Ok(())
    }

    /// Scan `"delim( ... )delim"` with the cursor on the opening quote.
    fn raw_string(&mut self) -> Result<(), LexError> {
        let begin = self.cursor.pos();
        let line = self.cursor.line();
        let src = self.cursor.src();
        self.cursor.advance();
        let delim_start = self.cursor.pos();
        loop {
            match self.cursor.peek() {
                None => return Err(self.err_at(LexErrorKind::InvalidRawString, line, begin)),
                Some(b'(') => break,
                Some(b) if b == b')' || b == b'\\' || b.is_ascii_whitespace() => {
                    return Err(self.err_at(LexErrorKind::InvalidRawString, line, begin));
                }
                Some(_) => {
                    if self.cursor.pos() - delim_start == RAW_DELIMITER_MAX {
                        return Err(self.err_at(LexErrorKind::InvalidRawString, line, begin));
                    }
                    self.cursor.advance();
                }
            }
        }
        let delim = &src[delim_start..self.cursor.pos()];
        self.cursor.advance();
        loop {
            match self.cursor.peek() {
                None => return Err(self.err_at(LexErrorKind::UnterminatedString, line, begin)),
                Some(b')')
                    if src[self.cursor.pos() + 1..].starts_with(delim)
                        && src.get(self.cursor.pos() + 1 + delim.len()) == Some(&b'"') =>
                {
                    let close = self.cursor.pos() + 1 + delim.len() + 1;
                    self.cursor.advance_to(close);
                    break;
                }
                Some(_) => self.cursor.advance(),
            }
        }
        self.emit(Kind::StringLiteral, begin, self.cursor.pos() - 1);
        Ok(())
    }

    /// Consume one escape sequence with the cursor on the backslash.
    ///
    /// Accepts the simple escapes `['"?\abfnrtv]`, octal `\ddd`, hex
    /// `\xHH...`, and the 4- and 8-digit Unicode forms.
    pub(super) fn escape_sequence(&mut self) -> Result<(), LexError> {
        let begin = self.cursor.pos();
        let line = self.cursor.line();
        self.cursor.advance();
        let Some(b) = self.cursor.peek() else {
            return Err(self.err_at(LexErrorKind::InvalidEscapeSequence, line, begin));
        };
        match b {
            b'\'' | b'"' | b'?' | b'\\' | b'a' | b'b' | b'f' | b'n' | b'r' | b't' | b'v' => {
                self.cursor.advance();
            }
            b'0'..=b'7' => {
                let mut digits = 0;
                while digits < 3 && matches!(self.cursor.peek(), Some(b'0'..=b'7')) {
                    self.cursor.advance();
                    digits += 1;
                }
            }
            b'x' => {
                self.cursor.advance();
                if !matches!(self.cursor.peek(), Some(b) if b.is_ascii_hexdigit()) {
                    return Err(self.err_at(LexErrorKind::InvalidEscapeSequence, line, begin));
                }
                self.cursor.advance_while(|b| b.is_ascii_hexdigit());
            }
            b'u' => {
                self.cursor.advance();
                self.hex_digits(4, line, begin)?;
            }
            b'U' => {
                self.cursor.advance();
                self.hex_digits(8, line, begin)?;
            }
            _ => {
                return Err(self.err_at(LexErrorKind::InvalidEscapeSequence, line, begin));
            }
        }
        Ok(())
    }

    fn hex_digits(&mut self, count: usize, line: u32, begin: usize) -> Result<(), LexError> {
        for _ in 0..count {
            if !matches!(self.cursor.peek(), Some(b) if b.is_ascii_hexdigit()) {
                return Err(self.err_at(LexErrorKind::InvalidEscapeSequence, line, begin));
            }
            self.cursor.advance();
        }
        Ok(())
    }
}
