//! Include-guard synthesis.
//!
//! The guard identifier is the chain of namespace names leading into the
//! file, followed by the file stem and `_H`, all uppercased. Only
//! namespaces contribute: class, struct and enum bodies (and any other
//! brace group) are opaque to the walk.

use cppx_syntax::{CodeBlock, Kind};

#[derive(Debug, PartialEq, Eq)]
enum Scope {
    Namespace,
    Other,
}

/// Compute the include-guard macro for a lexed translation unit.
#[must_use]
pub fn synthesize(src: &[u8], blocks: &[CodeBlock], stem: &str) -> String {
    let mut stack: Vec<Scope> = Vec::new();
    let mut guard = String::new();
    let mut i = 0;
    while i < blocks.len() {
        match blocks[i].kind {
            Kind::NamespaceKeyword if !stack.contains(&Scope::Other) => {
                // Collect the namespace name(s); a forward declaration
                // (terminated by `;`) contributes nothing.
                let mut names = String::new();
                let mut j = i + 1;
                while j < blocks.len() {
                    match blocks[j].kind {
                        Kind::Identifier => {
                            push_macro_chars(&mut names, blocks[j].bytes(src));
                            names.push('_');
                        }
                        Kind::BeginGroup => {
                            guard.push_str(&names);
                            stack.push(Scope::Namespace);
                            break;
                        }
                        Kind::StatementTerminator => break,
                        _ => {}
                    }
                    j += 1;
                }
                i = j + 1;
                continue;
            }
            Kind::BeginGroup => stack.push(Scope::Other),
            Kind::EndGroup => {
                stack.pop();
            }
            _ => {}
        }
        i += 1;
    }
    push_macro_chars(&mut guard, stem.as_bytes());
    guard.push_str("_H");
    // A macro identifier must not start with a digit.
    if guard.starts_with(|c: char| c.is_ascii_digit()) {
        guard.insert(0, '_');
    }
    guard
}

fn push_macro_chars(out: &mut String, text: &[u8]) {
    for &b in text {
        if b.is_ascii_alphanumeric() {
            out.push(b.to_ascii_uppercase() as char);
        } else {
            out.push('_');
        }
    }
}
