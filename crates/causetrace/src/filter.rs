use std::borrow::Cow;

use crate::frame::StackFrame;
use crate::trace::ErrorTrace;

/// Read-only view over an error, with zero or more filter stages layered on
/// top of the raw record.
///
/// Each stage wraps its origin and presents the same contract: class name,
/// message, stack trace, cause. Class name and message always pass through
/// untouched; filter stages rewrite the frame sequence and re-wrap the cause
/// so the same filtering applies at every level of the chain. Stages borrow
/// their arguments and the underlying trace, so a chain is cheap to build
/// per render and holds no state of its own.
#[derive(Debug)]
pub enum TraceView<'a> {
    /// The unfiltered error record.
    Raw(&'a ErrorTrace),
    /// Keeps only frames whose class name matches one of the arguments.
    /// An empty argument list matches nothing and yields an empty trace.
    Keep {
        origin: Box<TraceView<'a>>,
        arguments: &'a [String],
    },
    /// Drops frames whose class name matches one of the arguments.
    Strip {
        origin: Box<TraceView<'a>>,
        arguments: &'a [String],
    },
}

impl<'a> TraceView<'a> {
    pub fn raw(trace: &'a ErrorTrace) -> Self {
        TraceView::Raw(trace)
    }

    /// Layers a keep-only stage over this view.
    pub fn keep(self, arguments: &'a [String]) -> Self {
        TraceView::Keep {
            origin: Box::new(self),
            arguments,
        }
    }

    /// Layers a strip stage over this view.
    pub fn strip(self, arguments: &'a [String]) -> Self {
        TraceView::Strip {
            origin: Box::new(self),
            arguments,
        }
    }

    pub fn class_name(&self) -> &'a str {
        match self {
            TraceView::Raw(trace) => trace.class_name(),
            TraceView::Keep { origin, .. } | TraceView::Strip { origin, .. } => {
                origin.class_name()
            }
        }
    }

    pub fn message(&self) -> Option<&'a str> {
        match self {
            TraceView::Raw(trace) => trace.message_text(),
            TraceView::Keep { origin, .. } | TraceView::Strip { origin, .. } => origin.message(),
        }
    }

    /// The frame sequence after all stages have been applied, in original
    /// caller-outward order. Borrowed for a raw view, owned once any stage
    /// has rewritten it.
    pub fn stack_trace(&self) -> Cow<'a, [StackFrame]> {
        match self {
            TraceView::Raw(trace) => Cow::Borrowed(trace.stack_trace()),
            TraceView::Keep { origin, arguments } => Cow::Owned(
                origin
                    .stack_trace()
                    .iter()
                    .filter(|frame| matches_any(frame.class_name(), arguments))
                    .cloned()
                    .collect(),
            ),
            TraceView::Strip { origin, arguments } => Cow::Owned(
                origin
                    .stack_trace()
                    .iter()
                    .filter(|frame| !matches_any(frame.class_name(), arguments))
                    .cloned()
                    .collect(),
            ),
        }
    }

    /// The cause, viewed through the same stages as this level.
    ///
    /// A filter stage rebuilds itself around the origin's cause with the
    /// same arguments, so nested causes are filtered identically to the
    /// outermost error.
    pub fn cause(&self) -> Option<TraceView<'a>> {
        match self {
            TraceView::Raw(trace) => trace.cause().map(TraceView::Raw),
            TraceView::Keep { origin, arguments } => {
                origin.cause().map(|cause| cause.keep(*arguments))
            }
            TraceView::Strip { origin, arguments } => {
                origin.cause().map(|cause| cause.strip(*arguments))
            }
        }
    }
}

/// One configured filter stage. Stages are applied in configuration order,
/// innermost first.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterSpec {
    Keep(Vec<String>),
    Strip(Vec<String>),
}

impl FilterSpec {
    pub fn wrap<'a>(&'a self, view: TraceView<'a>) -> TraceView<'a> {
        match self {
            FilterSpec::Keep(arguments) => view.keep(arguments),
            FilterSpec::Strip(arguments) => view.strip(arguments),
        }
    }
}

/// Tests whether a configured package or class name matches a
/// fully-qualified class name. A package argument must end exactly at a
/// package separator: `pkg` matches `pkg.Foo` but not `pkgX.Foo`.
fn matches(class_name: &str, argument: &str) -> bool {
    class_name.starts_with(argument)
        && (class_name.len() == argument.len()
            || class_name.as_bytes()[argument.len()] == b'.')
}

fn matches_any(class_name: &str, arguments: &[String]) -> bool {
    arguments.iter().any(|argument| matches(class_name, argument))
}
