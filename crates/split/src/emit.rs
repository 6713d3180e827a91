//! The second walk over the block sequence: routing bytes to the
//! interface stream, the implementation stream, or both.

use std::io::{self, Write};

use cppx_syntax::{CodeBlock, Container, ContainerKind, ContainerStack, Kind};

/// Walks the lexed blocks and writes the two outputs.
///
/// Ambiguous runs (whitespace, identifiers mid-declaration) accumulate
/// in a pending buffer whose destination is decided by the next
/// structural block. The emitter keeps its own container stack so that
/// relocated function bodies can be prefixed with their qualified
/// `A::B::` scope.
pub(crate) struct Emitter<'a, H, S> {
    src: &'a [u8],
    blocks: &'a [CodeBlock],
    guard: &'a str,
    stem: &'a str,
    header: &'a mut H,
    source: &'a mut S,
    pending: Vec<u8>,
    stack: ContainerStack<'a>,
}

impl<'a, H: Write, S: Write> Emitter<'a, H, S> {
    pub(crate) fn new(
        src: &'a [u8],
        blocks: &'a [CodeBlock],
        guard: &'a str,
        stem: &'a str,
        header: &'a mut H,
        source: &'a mut S,
    ) -> Self {
        Self {
            src,
            blocks,
            guard,
            stem,
            header,
            source,
            pending: Vec::new(),
            stack: ContainerStack::new(),
        }
    }

    pub(crate) fn run(mut self) -> io::Result<()> {
        let mut i = 0;
        // A leading comment belongs to both outputs.
        if let Some(first) = self.blocks.first() {
            if first.kind == Kind::Comment {
                let bytes = first.bytes(self.src);
                self.header.write_all(bytes)?;
                self.source.write_all(bytes)?;
                if bytes.last() != Some(&b'\n') {
                    self.header.write_all(b"\n")?;
                    self.source.write_all(b"\n")?;
                }
                i = 1;
            }
        }
        write!(self.header, "#ifndef {}\n#define {}\n", self.guard, self.guard)?;
        writeln!(self.source, "#include \"{}.h\"", self.stem)?;
        while i < self.blocks.len() {
            i = self.step(i)?;
        }
        self.flush_header()?;
        write!(self.header, "\n\n#endif // {}\n", self.guard)?;
        Ok(())
    }

    fn step(&mut self, i: usize) -> io::Result<usize> {
        let b = self.blocks[i];
        match b.kind {
            Kind::Directive | Kind::AccessModifier | Kind::StatementTerminator => {
                self.flush_header()?;
                self.header.write_all(b.bytes(self.src))?;
                Ok(i + 1)
            }
            k if k.is_container_keyword() => self.container_header(i),
            Kind::FunctionName | Kind::ConstructorDestructor => self.function_head(i),
            Kind::BeginGroup => {
                self.flush_header()?;
                self.header.write_all(b.bytes(self.src))?;
                self.stack.top_mut().braces += 1;
                Ok(i + 1)
            }
            Kind::EndGroup => {
                self.flush_header()?;
                self.header.write_all(b.bytes(self.src))?;
                let top = self.stack.top_mut();
                top.braces = top.braces.saturating_sub(1);
                if top.braces == 0 {
                    self.stack.pop();
                }
                Ok(i + 1)
            }
            // Neutral run: destination decided by the next structural
            // block.
            _ => {
                self.pending.extend_from_slice(b.bytes(self.src));
                Ok(i + 1)
            }
        }
    }

    /// Buffer a container header (`namespace n`, `class C : Base`, ...)
    /// up to its `{` or, for a forward declaration, its `;`.
    fn container_header(&mut self, i: usize) -> io::Result<usize> {
        let kw = self.blocks[i];
        let kind = match kw.kind {
            Kind::NamespaceKeyword => ContainerKind::Namespace,
            Kind::ClassKeyword => ContainerKind::Class,
            Kind::StructKeyword => ContainerKind::Struct,
            _ => ContainerKind::Enum,
        };
        self.pending.extend_from_slice(kw.bytes(self.src));
        let mut name = None;
        let mut j = i + 1;
        while j < self.blocks.len() {
            let b = self.blocks[j];
            self.pending.extend_from_slice(b.bytes(self.src));
            match b.kind {
                Kind::BeginGroup => {
                    self.flush_header()?;
                    let mut frame = Container::new(kind, name);
                    frame.braces = 1;
                    self.stack.push(frame);
                    return Ok(j + 1);
                }
                Kind::StatementTerminator => {
                    self.flush_header()?;
                    return Ok(j + 1);
                }
                Kind::Identifier if name.is_none() => name = Some(b.bytes(self.src)),
                _ => {}
            }
            j += 1;
        }
        Ok(j)
    }

    /// Handle a function or constructor/destructor head: a declaration
    /// stays in the interface; a definition leaves a declaration behind
    /// and relocates the body to the implementation under its qualified
    /// scope.
    fn function_head(&mut self, i: usize) -> io::Result<usize> {
        let mut sig_end = i + 1;
        while sig_end < self.blocks.len() {
            match self.blocks[sig_end].kind {
                Kind::BeginGroup | Kind::InitializationList | Kind::StatementTerminator => break,
                _ => sig_end += 1,
            }
        }
        if sig_end == self.blocks.len() {
            // Input ends mid-signature; leave it to the final drain.
            for b in &self.blocks[i..] {
                self.pending.extend_from_slice(b.bytes(self.src));
            }
            return Ok(sig_end);
        }
        let trigger = self.blocks[sig_end];
        if trigger.kind == Kind::StatementTerminator {
            self.flush_header()?;
            for b in &self.blocks[i..=sig_end] {
                self.header.write_all(b.bytes(self.src))?;
            }
            return Ok(sig_end + 1);
        }

        self.flush_both()?;
        // The declaration left behind drops whitespace between the
        // signature and the body.
        let mut decl_end = sig_end;
        while decl_end > i + 1 && self.blocks[decl_end - 1].kind == Kind::Empty {
            decl_end -= 1;
        }
        for b in &self.blocks[i..decl_end] {
            self.header.write_all(b.bytes(self.src))?;
        }
        self.header.write_all(b";")?;
        self.write_scope_prefix()?;
        for b in &self.blocks[i..sig_end] {
            self.source.write_all(b.bytes(self.src))?;
        }
        self.source.write_all(trigger.bytes(self.src))?;
        let braces = u32::from(trigger.kind == Kind::BeginGroup);
        self.function_body(sig_end + 1, braces)
    }

    /// Route a function body to the implementation, tracking group depth
    /// until the body closes.
    fn function_body(&mut self, mut i: usize, mut braces: u32) -> io::Result<usize> {
        while i < self.blocks.len() {
            let b = self.blocks[i];
            if b.kind == Kind::EndGroup && braces == 0 {
                // Stray close before any body group; hand it back.
                return Ok(i);
            }
            self.source.write_all(b.bytes(self.src))?;
            match b.kind {
                Kind::BeginGroup => braces += 1,
                Kind::EndGroup => {
                    braces -= 1;
                    if braces == 0 {
                        return Ok(i + 1);
                    }
                }
                _ => {}
            }
            i += 1;
        }
        Ok(i)
    }

    /// `A::B::...::` composed from every named frame on the stack.
    fn write_scope_prefix(&mut self) -> io::Result<()> {
        for frame in self.stack.iter() {
            if let Some(name) = frame.name {
                self.source.write_all(name)?;
                self.source.write_all(b"::")?;
            }
        }
        Ok(())
    }

    fn flush_header(&mut self) -> io::Result<()> {
        if !self.pending.is_empty() {
            self.header.write_all(&self.pending)?;
            self.pending.clear();
        }
        Ok(())
    }

    fn flush_both(&mut self) -> io::Result<()> {
        if !self.pending.is_empty() {
            self.header.write_all(&self.pending)?;
            self.source.write_all(&self.pending)?;
            self.pending.clear();
        }
        Ok(())
    }
}
