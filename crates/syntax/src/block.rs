//! Code blocks: tagged byte ranges into the source buffer.

use std::fmt;

/// `Kind` classifies every block the lexer emits.
///
/// The set is closed; anything the lexer does not recognise is carried
/// through as [`Kind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    /// Bytes not classified as any structural token, carried through verbatim.
    Other,
    /// A run of whitespace.
    Empty,
    /// A `/* ... */` comment or one or more adjacent `//` lines.
    Comment,
    /// A preprocessor directive line beginning with `#`.
    Directive,
    CharLiteral,
    StringLiteral,
    /// A non-keyword word, possibly scoped (`a::b`) after merging.
    Identifier,
    /// A literal `::`.
    IdentifierScope,
    /// `public:` / `protected:` / `private:`, keyword and colon merged.
    AccessModifier,
    NamespaceKeyword,
    ClassKeyword,
    StructKeyword,
    EnumKeyword,
    /// A parenthesised run at the top level of a signature or call.
    ArgumentsOrParameters,
    /// An [`Kind::Identifier`] promoted when found immediately before `(`.
    FunctionName,
    /// A [`Kind::FunctionName`] whose text matches the enclosing class name.
    ConstructorDestructor,
    /// The `:` introducing a constructor initialiser list plus its fragments.
    InitializationList,
    /// `{`, possibly with absorbed preceding whitespace.
    BeginGroup,
    /// `}`.
    EndGroup,
    /// `;`.
    StatementTerminator,
}

impl Kind {
    /// Whether a block of this kind takes part in lookback decisions.
    ///
    /// Whitespace and comments are skipped when the lexer looks back for
    /// the most recent meaningful block.
    #[must_use]
    pub fn is_significant(self) -> bool {
        !matches!(self, Kind::Empty | Kind::Comment)
    }

    /// Whether this kind introduces a container (`namespace`, `class`, ...).
    #[must_use]
    pub fn is_container_keyword(self) -> bool {
        matches!(
            self,
            Kind::NamespaceKeyword | Kind::ClassKeyword | Kind::StructKeyword | Kind::EnumKeyword
        )
    }
}

/// A tagged byte range `[begin, end]` into the source buffer.
///
/// Both bounds are inclusive, so a single-character block has
/// `begin == end`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CodeBlock {
    pub kind: Kind,
    pub begin: usize,
    pub end: usize,
}

impl CodeBlock {
    #[must_use]
    pub fn new(kind: Kind, begin: usize, end: usize) -> Self {
        debug_assert!(begin <= end);
        Self { kind, begin, end }
    }

    /// The bytes this block covers.
    #[must_use]
    pub fn bytes<'src>(&self, src: &'src [u8]) -> &'src [u8] {
        &src[self.begin..=self.end]
    }

    /// Block length in bytes, always at least one.
    #[allow(clippy::len_without_is_empty)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.begin + 1
    }
}

impl fmt::Debug for CodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}..{}", self.kind, self.begin, self.end)
    }
}
