//! The container stack: one frame per lexically open construct.

/// The construct a [`Container`] frame describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// The sentinel frame at the bottom of the stack, never popped.
    None,
    Namespace,
    Class,
    Struct,
    Enum,
    Function,
    ConstructorDestructor,
    InitializationList,
}

impl ContainerKind {
    /// Containers whose bodies suppress function-name promotion.
    #[must_use]
    pub fn is_body(self) -> bool {
        matches!(
            self,
            ContainerKind::Function
                | ContainerKind::ConstructorDestructor
                | ContainerKind::InitializationList
        )
    }
}

/// A stack frame for a currently open construct.
///
/// `name` is the first identifier seen after the introducer keyword; it is
/// used to detect constructor and destructor names and to qualify function
/// definitions during emission.
#[derive(Debug, Clone, Copy)]
pub struct Container<'src> {
    pub kind: ContainerKind,
    pub braces: u32,
    pub parens: u32,
    pub name: Option<&'src [u8]>,
}

impl<'src> Container<'src> {
    #[must_use]
    pub fn new(kind: ContainerKind, name: Option<&'src [u8]>) -> Self {
        Self {
            kind,
            braces: 0,
            parens: 0,
            name,
        }
    }
}

/// Stack of open containers. Holds at least the sentinel frame at all
/// times.
#[derive(Debug)]
pub struct ContainerStack<'src> {
    frames: Vec<Container<'src>>,
}

impl<'src> ContainerStack<'src> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            frames: vec![Container::new(ContainerKind::None, None)],
        }
    }

    #[must_use]
    pub fn top(&self) -> &Container<'src> {
        // The sentinel guarantees a frame exists.
        self.frames.last().unwrap()
    }

    pub fn top_mut(&mut self) -> &mut Container<'src> {
        self.frames.last_mut().unwrap()
    }

    pub fn push(&mut self, frame: Container<'src>) {
        self.frames.push(frame);
    }

    /// Pop the top frame. The sentinel is never removed.
    pub fn pop(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Frames from the sentinel outwards.
    pub fn iter(&self) -> impl Iterator<Item = &Container<'src>> {
        self.frames.iter()
    }
}

impl Default for ContainerStack<'_> {
    fn default() -> Self {
        Self::new()
    }
}
