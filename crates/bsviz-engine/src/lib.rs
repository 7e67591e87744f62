#![forbid(unsafe_code)]

//! Trace engine: runs a binary-search variant over a sorted slice and
//! records every decision as an ordered [`VisualEvent`] stream.
//!
//! # Role in bsviz
//! This crate is the producer side of the event contract defined in
//! `bsviz-core`. Given a sorted slice, a target, and a [`Variant`], one call
//! to [`trace`] yields the complete, finite event sequence for that run. A
//! rendering backend applies the events in order; the engine has no
//! dependency on any renderer.
//!
//! # Primary responsibilities
//! - **TraceRecorder**: append-only event sink with exactly-once conclusion.
//! - **DiscardRange**: half-open `[low, high)` variant, `high` starts at `n`.
//! - **NarrowWindow**: closed `[low, high]` variant, `high` starts at `n-1`.
//! - **Variant / trace()**: the one-call selection surface.
//!
//! # Guarantees
//! The engine is stateless and reentrant: each run owns fresh pointer state,
//! runs single-threaded with no suspension points, and terminates in
//! O(log n) iterations. Re-running with identical inputs produces an
//! identical event sequence. No event depends on later iterations, so a
//! consumer may stop reading at any point without affecting the events
//! already emitted.
//!
//! # Preconditions
//! Input must already be sorted ascending. The engine neither verifies nor
//! sorts; results over unsorted input are unspecified. A target that is
//! absent (or out of range) is a normal miss, concluded with
//! `SearchConcluded { found: false, .. }`.

pub mod discard_range;
pub mod narrow_window;
pub mod recorder;
pub mod strategy;

pub use discard_range::DiscardRange;
pub use narrow_window::NarrowWindow;
pub use recorder::{TraceRecorder, midpoint};
pub use strategy::{SearchStrategy, Variant, VariantParseError, trace};

// Re-export the event vocabulary so consumers need only one crate.
pub use bsviz_core::{ElementColor, Pointer, StepId, VisualEvent};
