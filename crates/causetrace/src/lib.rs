//! Rendering and filtering of caught errors and their cause chains.
//!
//! [`render`] turns an [`ErrorTrace`] into the conventional line-oriented
//! trace text, eliding frames a cause shares with its parent. Filter stages
//! ([`FilterSpec`], [`TraceView`]) reshape the reported frames before
//! rendering, uniformly across the whole cause chain.

pub mod filter;
pub mod frame;
pub mod render;
pub mod trace;

// public exports
pub use filter::{FilterSpec, TraceView};
pub use frame::StackFrame;
pub use render::{MAX_CAUSE_DEPTH, TraceFormatter, render, render_to_field, write_trace};
pub use trace::ErrorTrace;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TraceError {
    #[error("cause chain exceeded {limit} levels, remaining causes dropped")]
    CauseDepthExceeded { limit: usize },
}
