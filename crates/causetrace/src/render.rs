use std::borrow::Cow;
use std::fmt::Write as _;

use crate::TraceError;
use crate::filter::{FilterSpec, TraceView};
use crate::frame::StackFrame;
use crate::trace::ErrorTrace;

const NEW_LINE: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Upper bound on rendered cause-chain levels. Chains deeper than this are
/// cut off with a truncation line instead of exhausting the output.
pub const MAX_CAUSE_DEPTH: usize = 64;

/// Renders a view and its whole cause chain into `out`.
///
/// Frames a level shares with the tail of its immediate parent's frame list
/// are elided and summarized as `... N more`, matching conventional
/// error-trace text. The walk is iterative, so chain depth never grows the
/// call stack; past [`MAX_CAUSE_DEPTH`] levels the remaining chain is
/// dropped, a truncation line is appended, and the overflow is reported.
pub fn write_trace(view: TraceView<'_>, out: &mut String) -> Result<(), TraceError> {
    let mut parent_frames: Cow<'_, [StackFrame]> = Cow::Borrowed(&[]);
    let mut next = Some(view);
    let mut depth = 0usize;

    while let Some(current) = next.take() {
        if depth == MAX_CAUSE_DEPTH {
            out.push_str(NEW_LINE);
            let _ = write!(out, "... cause chain truncated at {MAX_CAUSE_DEPTH} levels");
            tracing::warn!(
                limit = MAX_CAUSE_DEPTH,
                "cause chain exceeded the render depth limit"
            );
            return Err(TraceError::CauseDepthExceeded {
                limit: MAX_CAUSE_DEPTH,
            });
        }
        if depth > 0 {
            out.push_str(NEW_LINE);
            out.push_str("Caused by: ");
        }

        let frames = current.stack_trace();
        let common = shared_suffix_len(&frames, &parent_frames);

        out.push_str(current.class_name());
        if let Some(message) = current.message() {
            out.push_str(": ");
            out.push_str(message);
        }

        for frame in &frames[..frames.len() - common] {
            out.push_str(NEW_LINE);
            let _ = write!(out, "\tat {frame}");
        }

        if common > 0 {
            out.push_str(NEW_LINE);
            let _ = write!(out, "\t... {common} more");
        }

        next = current.cause();
        parent_frames = frames;
        depth += 1;
    }

    Ok(())
}

/// Renders an unfiltered error. A truncated chain is already noted in the
/// returned text, so the overflow report is absorbed here.
pub fn render(trace: &ErrorTrace) -> String {
    let mut out = String::new();
    let _ = write_trace(TraceView::raw(trace), &mut out);
    out
}

/// Variant of [`render`] for structured-field sinks: no error, no field.
pub fn render_to_field(trace: Option<&ErrorTrace>) -> Option<String> {
    trace.map(render)
}

/// Number of trailing frames two traces share, walking both from the end
/// until the first structural mismatch.
fn shared_suffix_len(frames: &[StackFrame], parent: &[StackFrame]) -> usize {
    frames
        .iter()
        .rev()
        .zip(parent.iter().rev())
        .take_while(|(frame, parent_frame)| frame == parent_frame)
        .count()
}

/// A renderer configured with an ordered list of filter stages.
///
/// The view chain is rebuilt from the configured stages on every call; they are
/// stateless borrows, so this costs a few boxed enum nodes per render.
#[derive(Clone, Debug, Default)]
pub struct TraceFormatter {
    filters: Vec<FilterSpec>,
}

impl TraceFormatter {
    pub fn new(filters: Vec<FilterSpec>) -> Self {
        Self { filters }
    }

    /// A formatter with no filter stages, rendering traces as captured.
    pub fn unfiltered() -> Self {
        Self::default()
    }

    fn view<'a>(&'a self, trace: &'a ErrorTrace) -> TraceView<'a> {
        self.filters
            .iter()
            .fold(TraceView::raw(trace), |view, spec| spec.wrap(view))
    }

    pub fn write_into(&self, trace: &ErrorTrace, out: &mut String) -> Result<(), TraceError> {
        write_trace(self.view(trace), out)
    }

    pub fn render(&self, trace: &ErrorTrace) -> String {
        let mut out = String::new();
        let _ = self.write_into(trace, &mut out);
        out
    }

    pub fn render_to_field(&self, trace: Option<&ErrorTrace>) -> Option<String> {
        trace.map(|trace| self.render(trace))
    }
}
