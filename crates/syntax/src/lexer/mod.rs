//! A single-pass, context-sensitive lexer for unified C++ sources.
//!
//! The lexer turns a flat byte buffer into an ordered sequence of
//! [`CodeBlock`]s that covers every input byte exactly once. It is not a
//! compiler front-end: it recognises just enough structure (comments,
//! literals, directives, containers, function heads, initialiser lists)
//! for the splitter to route each block to the interface or the
//! implementation output.
//!
//! Context is carried by a stack of [`Container`] frames. The frame on
//! top decides how ambiguous tokens are classified: an identifier before
//! `(` is a function name at class or namespace scope but plain content
//! inside a function body, and it becomes a constructor or destructor
//! name when it matches the enclosing container's name.

mod literal;

use crate::block::{CodeBlock, Kind};
use crate::container::{Container, ContainerKind, ContainerStack};
use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind};

/// Tokenize `src` into a block sequence covering every byte.
///
/// # Errors
///
/// Returns a [`LexError`] when a literal or comment is malformed or a
/// group bracket underflows; see [`LexErrorKind`] for the full set.
#[tracing::instrument(level = tracing::Level::TRACE, skip(src), fields(len = src.len()))]
pub fn tokenize(src: &[u8]) -> Result<Vec<CodeBlock>, LexError> {
    Lexer::new(src).run()
}

/// The lexer state for one source buffer.
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    blocks: Vec<CodeBlock>,
    containers: ContainerStack<'src>,
    /// Container kind armed by an introducer keyword or a promoted
    /// function name; consumed by the next top-level `{`.
    pending: ContainerKind,
    /// First identifier seen after the introducer keyword.
    name_candidate: Option<&'src [u8]>,
    /// One past the end of the last emitted block; bytes between here and
    /// the next emission are flushed as an `Other` gap.
    emitted_end: usize,
}

impl<'src> Lexer<'src> {
    #[must_use]
    pub fn new(src: &'src [u8]) -> Self {
        Self {
            cursor: Cursor::new(src),
            blocks: Vec::new(),
            containers: ContainerStack::new(),
            pending: ContainerKind::None,
            name_candidate: None,
            emitted_end: 0,
        }
    }

    /// Run the lexer to completion.
    ///
    /// # Errors
    ///
    /// See [`tokenize`].
    pub fn run(mut self) -> Result<Vec<CodeBlock>, LexError> {
        while let Some(b) = self.cursor.peek() {
            match b {
                b'\'' => self.char_literal()?,
                b'"' => self.string_literal()?,
                b'#' => self.directive(),
                b';' => self.statement_terminator(),
                b'{' => self.begin_group(),
                b'}' => self.end_group()?,
                b'(' => self.open_paren(),
                b')' => self.close_paren()?,
                b',' => self.comma(),
                b':' => self.colon(),
                b'/' => self.slash()?,
                _ if b == b'_' || b.is_ascii_alphabetic() => self.word(),
                _ if b.is_ascii_whitespace() => self.whitespace(),
                // Anything else (numbers, operators, `~`, `<`, ...) is left
                // for the next gap flush.
                _ => self.cursor.advance(),
            }
        }
        let end = self.cursor.pos();
        self.flush_gap(end);
        Ok(self.blocks)
    }

    // region: block emission

    /// The kind actually recorded for a block emitted in the current
    /// context: everything inside an initialiser-list frame coalesces as
    /// `InitializationList`, everything inside an open parenthesis run as
    /// `ArgumentsOrParameters`.
    fn contextual(&self, kind: Kind) -> Kind {
        let top = self.containers.top();
        if top.kind == ContainerKind::InitializationList {
            Kind::InitializationList
        } else if top.parens > 0 {
            Kind::ArgumentsOrParameters
        } else {
            kind
        }
    }

    fn emit(&mut self, kind: Kind, begin: usize, end: usize) {
        self.flush_gap(begin);
        let kind = self.contextual(kind);
        self.append(CodeBlock::new(kind, begin, end));
    }

    /// Emit the unclassified bytes between the last block and `upto`.
    fn flush_gap(&mut self, upto: usize) {
        if self.emitted_end < upto {
            let kind = self.contextual(Kind::Other);
            let block = CodeBlock::new(kind, self.emitted_end, upto - 1);
            self.append(block);
        }
    }

    /// Append a block, merging with the tail where the coalescing rules
    /// allow it.
    fn append(&mut self, block: CodeBlock) {
        self.emitted_end = block.end + 1;
        let n = self.blocks.len();
        if n > 0 {
            let prev = self.blocks[n - 1];
            // Same-kind neighbours extend the previous block. Group
            // brackets are exempt: one brace per block keeps the
            // splitter's depth tracking exact.
            if prev.kind == block.kind && !matches!(block.kind, Kind::BeginGroup | Kind::EndGroup)
            {
                self.blocks[n - 1].end = block.end;
                return;
            }
            // `{` absorbs the whitespace run before it.
            if block.kind == Kind::BeginGroup && prev.kind == Kind::Empty {
                self.blocks[n - 1].kind = Kind::BeginGroup;
                self.blocks[n - 1].end = block.end;
                return;
            }
            // `a` `::` `b` collapses into one scoped identifier.
            if block.kind == Kind::Identifier && prev.kind == Kind::IdentifierScope {
                if n >= 2 && self.blocks[n - 2].kind == Kind::Identifier {
                    self.blocks[n - 2].end = block.end;
                    self.blocks.pop();
                } else {
                    self.blocks[n - 1].kind = Kind::Identifier;
                    self.blocks[n - 1].end = block.end;
                }
                return;
            }
        }
        self.blocks.push(block);
    }

    /// Extend the previous block over `[begin, end]`, used by the bracket
    /// that closes an initialiser-list fragment so contiguous material
    /// coalesces.
    fn continue_previous(&mut self, begin: usize, end: usize) {
        self.emitted_end = end + 1;
        match self.blocks.last_mut() {
            Some(prev) => prev.end = end,
            None => self.blocks.push(CodeBlock::new(Kind::Other, begin, end)),
        }
    }

    /// Index of the most recent block that is neither whitespace nor a
    /// comment.
    fn last_significant(&self) -> Option<usize> {
        self.blocks.iter().rposition(|b| b.kind.is_significant())
    }

    // endregion

    // region: errors

    fn err(&self, kind: LexErrorKind, offset: usize) -> LexError {
        LexError::new(kind, self.cursor.line(), offset, self.cursor.src())
    }

    pub(crate) fn err_at(&self, kind: LexErrorKind, line: u32, offset: usize) -> LexError {
        LexError::new(kind, line, offset, self.cursor.src())
    }

    // endregion

    // region: recognition rules

    fn directive(&mut self) {
        let begin = self.cursor.pos();
        while let Some(b) = self.cursor.peek() {
            if b == b'\n' {
                break;
            }
            // A block comment on the directive line is lexed separately.
            if b == b'/' && self.cursor.peek_ahead(1) == Some(b'*') && self.cursor.pos() > begin {
                break;
            }
            self.cursor.advance();
        }
        self.emit(Kind::Directive, begin, self.cursor.pos() - 1);
    }

    fn statement_terminator(&mut self) {
        let begin = self.cursor.pos();
        self.flush_gap(begin);
        self.cursor.advance();
        self.pending = ContainerKind::None;
        self.name_candidate = None;
        self.emit(Kind::StatementTerminator, begin, begin);
    }

    fn begin_group(&mut self) {
        let begin = self.cursor.pos();
        self.flush_gap(begin);
        self.cursor.advance();
        let top = *self.containers.top();
        if self.pending != ContainerKind::None
            && top.kind != ContainerKind::InitializationList
            && top.parens == 0
        {
            let mut frame = Container::new(self.pending, self.name_candidate.take());
            frame.braces = 1;
            self.containers.push(frame);
            self.pending = ContainerKind::None;
        } else {
            self.containers.top_mut().braces += 1;
        }
        self.emit(Kind::BeginGroup, begin, begin);
    }

    fn end_group(&mut self) -> Result<(), LexError> {
        let begin = self.cursor.pos();
        self.flush_gap(begin);
        let top = self.containers.top_mut();
        if top.braces == 0 {
            return Err(self.err(LexErrorKind::UnbalancedBrace, begin));
        }
        top.braces -= 1;
        if top.kind == ContainerKind::InitializationList {
            if top.braces == 0 && top.parens == 0 {
                self.containers.pop();
                self.cursor.advance();
                self.continue_previous(begin, begin);
                return Ok(());
            }
            self.cursor.advance();
            self.emit(Kind::EndGroup, begin, begin);
            return Ok(());
        }
        let done = top.braces == 0;
        if done {
            self.containers.pop();
        }
        self.cursor.advance();
        self.emit(Kind::EndGroup, begin, begin);
        Ok(())
    }

    fn open_paren(&mut self) {
        let begin = self.cursor.pos();
        self.flush_gap(begin);
        let top = *self.containers.top();
        if !top.kind.is_body() && top.parens == 0 {
            self.promote_function_name();
        }
        self.containers.top_mut().parens += 1;
        self.cursor.advance();
        self.emit(Kind::ArgumentsOrParameters, begin, begin);
    }

    /// An identifier immediately before `(` outside any body is a
    /// function name, or a constructor/destructor name when it matches
    /// the enclosing container's name.
    fn promote_function_name(&mut self) {
        let Some(i) = self.last_significant() else {
            return;
        };
        if self.blocks[i].kind != Kind::Identifier {
            return;
        }
        let src = self.cursor.src();
        let text = self.blocks[i].bytes(src);
        if self.containers.top().name == Some(text) {
            self.blocks[i].kind = Kind::ConstructorDestructor;
            self.pending = ContainerKind::ConstructorDestructor;
            // A directly preceding `~` belongs to the destructor name.
            if i > 0 {
                let prev = self.blocks[i - 1];
                if prev.kind == Kind::Other
                    && prev.len() == 1
                    && src[prev.begin] == b'~'
                    && prev.end + 1 == self.blocks[i].begin
                {
                    let end = self.blocks[i].end;
                    self.blocks[i - 1] = CodeBlock::new(Kind::ConstructorDestructor, prev.begin, end);
                    self.blocks.remove(i);
                }
            }
        } else {
            self.blocks[i].kind = Kind::FunctionName;
            self.pending = ContainerKind::Function;
        }
    }

    fn close_paren(&mut self) -> Result<(), LexError> {
        let begin = self.cursor.pos();
        self.flush_gap(begin);
        let top = self.containers.top_mut();
        if top.parens == 0 {
            return Err(self.err(LexErrorKind::UnbalancedParen, begin));
        }
        top.parens -= 1;
        if top.kind == ContainerKind::InitializationList && top.parens == 0 && top.braces == 0 {
            self.containers.pop();
            self.cursor.advance();
            self.continue_previous(begin, begin);
            return Ok(());
        }
        self.cursor.advance();
        self.emit(Kind::ArgumentsOrParameters, begin, begin);
        Ok(())
    }

    /// `,` continues an initialiser list when one just closed; anywhere
    /// else it is unclassified.
    fn comma(&mut self) {
        let begin = self.cursor.pos();
        self.flush_gap(begin);
        let top = *self.containers.top();
        if top.kind != ContainerKind::InitializationList && top.parens == 0 {
            if let Some(i) = self.last_significant() {
                if self.blocks[i].kind == Kind::InitializationList {
                    self.cursor.advance();
                    self.emit(Kind::InitializationList, begin, begin);
                    self.containers
                        .push(Container::new(ContainerKind::InitializationList, None));
                    return;
                }
            }
        }
        self.cursor.advance();
    }

    fn colon(&mut self) {
        let begin = self.cursor.pos();
        self.flush_gap(begin);
        if self.cursor.peek_ahead(1) == Some(b':') {
            self.cursor.advance();
            self.cursor.advance();
            self.emit(Kind::IdentifierScope, begin, begin + 1);
            return;
        }
        let top = *self.containers.top();
        if self.pending == ContainerKind::ConstructorDestructor
            && top.kind != ContainerKind::InitializationList
            && top.parens == 0
        {
            self.cursor.advance();
            self.emit(Kind::InitializationList, begin, begin);
            self.containers
                .push(Container::new(ContainerKind::InitializationList, None));
            return;
        }
        if let Some(i) = self.last_significant() {
            let b = self.blocks[i];
            if b.kind == Kind::Identifier
                && matches!(
                    b.bytes(self.cursor.src()),
                    b"public" | b"protected" | b"private"
                )
            {
                self.cursor.advance();
                self.access_modifier(i, begin);
                return;
            }
        }
        self.cursor.advance();
    }

    /// Merge the access keyword and its colon into one block, absorbing
    /// any whitespace between them.
    fn access_modifier(&mut self, keyword: usize, colon: usize) {
        self.blocks.truncate(keyword + 1);
        self.blocks[keyword].kind = Kind::AccessModifier;
        self.blocks[keyword].end = colon;
        self.emitted_end = colon + 1;
    }

    fn slash(&mut self) -> Result<(), LexError> {
        match self.cursor.peek_ahead(1) {
            Some(b'*') => self.block_comment(),
            Some(b'/') => {
                self.line_comments();
                Ok(())
            }
            // Plain `/` operator: part of the surrounding gap.
            _ => {
                self.cursor.advance();
                Ok(())
            }
        }
    }

    fn block_comment(&mut self) -> Result<(), LexError> {
        let begin = self.cursor.pos();
        let line = self.cursor.line();
        self.cursor.advance();
        self.cursor.advance();
        loop {
            match self.cursor.peek() {
                None => {
                    return Err(self.err_at(LexErrorKind::UnterminatedComment, line, begin));
                }
                Some(b'*') if self.cursor.peek_ahead(1) == Some(b'/') => {
                    self.cursor.advance();
                    self.cursor.advance();
                    break;
                }
                Some(_) => self.cursor.advance(),
            }
        }
        // Trailing whitespace and newlines travel with the comment.
        self.cursor.advance_while(|b| b.is_ascii_whitespace());
        self.emit(Kind::Comment, begin, self.cursor.pos() - 1);
        Ok(())
    }

    /// One or more adjacent `//` lines form a single comment block; the
    /// whitespace separating them is absorbed.
    fn line_comments(&mut self) {
        let begin = self.cursor.pos();
        let src = self.cursor.src();
        let mut end;
        loop {
            self.cursor.advance_while(|b| b != b'\n');
            end = self.cursor.pos() - 1;
            let mut probe = self.cursor.pos();
            while probe < src.len() && src[probe].is_ascii_whitespace() {
                probe += 1;
            }
            if src[probe..].starts_with(b"//") {
                self.cursor.advance_to(probe);
            } else {
                break;
            }
        }
        self.emit(Kind::Comment, begin, end);
    }

    fn word(&mut self) {
        let begin = self.cursor.pos();
        self.cursor
            .advance_while(|b| b == b'_' || b.is_ascii_alphanumeric());
        let end = self.cursor.pos() - 1;
        let src = self.cursor.src();
        let text = &src[begin..=end];
        // Introducer keywords arm the pending container, except inside a
        // parenthesised run where `struct`/`enum` are just parameter type
        // syntax.
        if self.containers.top().parens == 0 {
            let introducer = match text {
                b"namespace" => Some((Kind::NamespaceKeyword, ContainerKind::Namespace)),
                b"class" => Some((Kind::ClassKeyword, ContainerKind::Class)),
                b"struct" => Some((Kind::StructKeyword, ContainerKind::Struct)),
                b"enum" => Some((Kind::EnumKeyword, ContainerKind::Enum)),
                _ => None,
            };
            if let Some((kind, next)) = introducer {
                self.pending = next;
                self.name_candidate = None;
                self.emit(kind, begin, end);
                return;
            }
        }
        if self.pending != ContainerKind::None && self.name_candidate.is_none() {
            self.name_candidate = Some(text);
        }
        self.emit(Kind::Identifier, begin, end);
    }

    fn whitespace(&mut self) {
        let begin = self.cursor.pos();
        self.cursor.advance_while(|b| b.is_ascii_whitespace());
        self.emit(Kind::Empty, begin, self.cursor.pos() - 1);
    }

    // endregion
}
