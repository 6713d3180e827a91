use cppx_syntax::{tokenize, Kind, LexErrorKind};
use test_case::test_case;

#[test_case("simple", include_str!("../../../testdata/valid/simple.cppx"))]
#[test_case("methods", include_str!("../../../testdata/valid/methods.cppx"))]
#[test_case("ctor_init", include_str!("../../../testdata/valid/ctor_init.cppx"))]
#[test_case("raw_string", include_str!("../../../testdata/valid/raw_string.cppx"))]
#[test_case("comments", include_str!("../../../testdata/valid/comments.cppx"))]
#[test_case("free_functions", include_str!("../../../testdata/valid/free_functions.cppx"))]
#[test_case("forward", include_str!("../../../testdata/valid/forward.cppx"))]
#[test_case("globals", include_str!("../../../testdata/valid/globals.cppx"))]
#[test_case("nested", include_str!("../../../testdata/valid/nested.cppx"))]
#[test_case("literals", include_str!("../../../testdata/valid/literals.cppx"))]
fn lex_valid(name: &str, src: &str) {
    let blocks = tokenize(src.as_bytes()).unwrap_or_else(|err| panic!("{name}: {err}"));

    // Blocks are ordered, non-overlapping, and cover every byte.
    let mut expected = 0;
    for b in &blocks {
        assert_eq!(b.begin, expected, "{name}: gap or overlap at {b:?}");
        assert!(b.end >= b.begin, "{name}: inverted range at {b:?}");
        expected = b.end + 1;
    }
    assert_eq!(expected, src.len(), "{name}: trailing bytes not covered");

    // Groups balance on well-formed input.
    let begins = blocks.iter().filter(|b| b.kind == Kind::BeginGroup).count();
    let ends = blocks.iter().filter(|b| b.kind == Kind::EndGroup).count();
    assert_eq!(begins, ends, "{name}: unbalanced groups");
}

#[test_case(
    include_str!("../../../testdata/invalid/unterminated_comment.cppx"),
    LexErrorKind::UnterminatedComment
)]
#[test_case(
    include_str!("../../../testdata/invalid/unterminated_string.cppx"),
    LexErrorKind::UnterminatedString
)]
#[test_case(
    include_str!("../../../testdata/invalid/unterminated_char.cppx"),
    LexErrorKind::UnterminatedCharLiteral
)]
#[test_case(
    include_str!("../../../testdata/invalid/empty_char.cppx"),
    LexErrorKind::EmptyCharLiteral
)]
#[test_case(
    include_str!("../../../testdata/invalid/bad_escape.cppx"),
    LexErrorKind::InvalidEscapeSequence
)]
#[test_case(
    include_str!("../../../testdata/invalid/unbalanced_brace.cppx"),
    LexErrorKind::UnbalancedBrace
)]
#[test_case(
    include_str!("../../../testdata/invalid/unbalanced_paren.cppx"),
    LexErrorKind::UnbalancedParen
)]
#[test_case(
    include_str!("../../../testdata/invalid/bad_raw_delimiter.cppx"),
    LexErrorKind::InvalidRawString
)]
fn lex_invalid(src: &str, kind: LexErrorKind) {
    let err = tokenize(src.as_bytes()).unwrap_err();
    assert_eq!(err.kind, kind);
    assert!(err.line >= 1);
    assert!(err.excerpt.len() <= cppx_syntax::ERROR_CONTEXT_LEN);
}
