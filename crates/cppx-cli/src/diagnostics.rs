//! Rendering lexer errors as terminal diagnostics.

use std::path::Path;

use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFile;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use cppx_syntax::LexError;

/// Print `error` for `path` to the error sink.
pub(crate) fn report_lex_error(colors: bool, path: &Path, src: &[u8], error: &LexError) {
    let name = path.display().to_string();
    let source = String::from_utf8_lossy(src);
    let file = SimpleFile::new(name.as_str(), source.as_ref());

    let start = error.offset.min(source.len());
    let end = (start + error.excerpt.len().max(1)).min(source.len());
    let diagnostic = Diagnostic::error()
        .with_message(format!(
            "Error at {} (line {}): {}: {}",
            name, error.line, error.kind, error.excerpt
        ))
        .with_labels(vec![
            Label::primary((), start..end).with_message(error.kind.to_string())
        ]);

    let choice = if colors {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let writer = StandardStream::stderr(choice);
    let config = term::Config::default();
    let mut lock = writer.lock();
    if let Err(error) = term::emit(&mut lock, &config, &file, &diagnostic) {
        tracing::error!(%error, "failed to render diagnostic");
    }
}
