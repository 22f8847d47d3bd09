use crate::frame::StackFrame;

/// Owned record of a caught error: class name, optional message, captured
/// stack frames, and an optional chained cause.
///
/// This is the raw end of every view chain. The cause is held by value
/// behind a `Box`, so a chain is acyclic by construction and is dropped as a
/// unit with its root.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorTrace {
    class_name: String,
    message: Option<String>,
    frames: Vec<StackFrame>,
    cause: Option<Box<ErrorTrace>>,
}

impl ErrorTrace {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            message: None,
            frames: Vec::new(),
            cause: None,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Appends one captured frame; frames are kept in caller-outward order,
    /// topmost call site first.
    pub fn frame(mut self, frame: StackFrame) -> Self {
        self.frames.push(frame);
        self
    }

    pub fn frames(mut self, frames: impl IntoIterator<Item = StackFrame>) -> Self {
        self.frames.extend(frames);
        self
    }

    pub fn caused_by(mut self, cause: ErrorTrace) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn message_text(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn stack_trace(&self) -> &[StackFrame] {
        &self.frames
    }

    pub fn cause(&self) -> Option<&ErrorTrace> {
        self.cause.as_deref()
    }
}
