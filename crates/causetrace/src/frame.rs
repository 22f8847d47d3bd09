use std::fmt;

/// One entry of a captured call stack.
///
/// Frames are captured once when the error is created and never mutated
/// afterwards. Equality is full-field structural equality; it is the only
/// comparison the renderer's elision walk performs, so two frames compare
/// equal iff class, method, file, and line all match exactly.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StackFrame {
    class_name: String,
    method_name: String,
    file_name: Option<String>,
    line: Option<u32>,
}

impl StackFrame {
    pub fn new(class_name: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            method_name: method_name.into(),
            file_name: None,
            line: None,
        }
    }

    /// Attaches a source file and line number to the frame.
    pub fn with_location(mut self, file_name: impl Into<String>, line: u32) -> Self {
        self.file_name = Some(file_name.into());
        self.line = Some(line);
        self
    }

    /// Attaches a source file without a known line number.
    pub fn with_file(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self.line = None;
        self
    }

    /// Fully-qualified name of the declaring class; filter predicates match
    /// against this field.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn line(&self) -> Option<u32> {
        self.line
    }
}

impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.class_name, self.method_name)?;
        match (&self.file_name, self.line) {
            (Some(file), Some(line)) => write!(f, "({file}:{line})"),
            (Some(file), None) => write!(f, "({file})"),
            (None, _) => write!(f, "(Unknown Source)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StackFrame;

    #[test]
    fn display_with_full_location() {
        let frame = StackFrame::new("com.acme.Foo", "bar").with_location("Foo.java", 42);
        assert_eq!(frame.to_string(), "com.acme.Foo.bar(Foo.java:42)");
    }

    #[test]
    fn display_without_line() {
        let frame = StackFrame::new("com.acme.Foo", "bar").with_file("Foo.java");
        assert_eq!(frame.to_string(), "com.acme.Foo.bar(Foo.java)");
    }

    #[test]
    fn display_without_location() {
        let frame = StackFrame::new("com.acme.Foo", "bar");
        assert_eq!(frame.to_string(), "com.acme.Foo.bar(Unknown Source)");
    }

    #[test]
    fn equality_requires_all_fields() {
        let frame = StackFrame::new("com.acme.Foo", "bar").with_location("Foo.java", 42);

        assert_eq!(
            frame,
            StackFrame::new("com.acme.Foo", "bar").with_location("Foo.java", 42)
        );
        assert_ne!(
            frame,
            StackFrame::new("com.acme.Foo", "bar").with_location("Foo.java", 43)
        );
        assert_ne!(
            frame,
            StackFrame::new("com.acme.Foo", "baz").with_location("Foo.java", 42)
        );
        assert_ne!(frame, StackFrame::new("com.acme.Foo", "bar"));
    }
}
