#![forbid(unsafe_code)]

//! Append-only event recorder shared by both search variants.
//!
//! [`TraceRecorder`] owns the growing event vector for one run. Each emit
//! method appends exactly one event (the bounds helper appends the Low/High
//! pair), so the stream order is the call order and nothing is deferred or
//! batched across iterations.
//!
//! # Invariants
//! 1. [`TraceRecorder::conclude`] is called exactly once per run, last
//!    (debug-asserted on both sides).
//! 2. Every `StepHighlighted` a variant emits precedes the events that step
//!    logically justifies; the recorder preserves call order verbatim.
//! 3. The Low/High pair always carries one shared `collision` flag, set when
//!    both labels land on the same element, so the renderer never receives
//!    ambiguous overlapping placements.

use bsviz_core::{ElementColor, Pointer, StepId, VisualEvent};
use tracing::trace;

/// Floor midpoint of the window bounded by `low` and `high`.
///
/// Equivalent to `floor((low + high) / 2)` for `low <= high`, written
/// overflow-safe. Both variants must use this exact convention so replayed
/// traces stay bit-identical.
#[must_use]
pub const fn midpoint(low: usize, high: usize) -> usize {
    low + (high - low) / 2
}

/// Append-only sink for the [`VisualEvent`]s of one search run.
///
/// Created fresh per run and consumed by [`into_events`](Self::into_events);
/// nothing persists across runs.
#[derive(Debug)]
pub struct TraceRecorder<T> {
    events: Vec<VisualEvent<T>>,
    concluded: bool,
}

impl<T> TraceRecorder<T> {
    /// Create an empty recorder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            events: Vec::new(),
            concluded: false,
        }
    }

    /// Number of events recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True when no events have been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Record the one-time element layout.
    pub fn elements_created(&mut self, values: &[T])
    where
        T: Clone,
    {
        trace!(n = values.len(), "elements created");
        self.push(VisualEvent::ElementsCreated {
            values: values.to_vec(),
        });
    }

    /// Highlight a narrative step, implicitly clearing the previous one.
    pub fn step(&mut self, step: StepId) {
        trace!(step = %step, "step highlighted");
        self.push(VisualEvent::StepHighlighted { step });
    }

    /// Move a single pointer. No collision offset; the Low/High pair goes
    /// through [`bounds`](Self::bounds) instead.
    pub fn pointer(&mut self, pointer: Pointer, index: usize) {
        trace!(pointer = pointer.label(), index, "pointer moved");
        self.push(VisualEvent::PointerMoved {
            pointer,
            index,
            collision: false,
        });
    }

    /// Place the Low and High labels on the window bounds.
    ///
    /// When both land on the same element the pair carries the collision
    /// flag and the renderer offsets the labels apart.
    pub fn bounds(&mut self, low: usize, high: usize) {
        let collision = low == high;
        trace!(low, high, collision, "bounds placed");
        self.push(VisualEvent::PointerMoved {
            pointer: Pointer::Low,
            index: low,
            collision,
        });
        self.push(VisualEvent::PointerMoved {
            pointer: Pointer::High,
            index: high,
            collision,
        });
    }

    /// Recolor one element (inspected, or target located).
    pub fn recolor(&mut self, index: usize, color: ElementColor) {
        self.push(VisualEvent::ElementRecolored { index, color });
    }

    /// Report the surviving window after a branch decision.
    pub fn range(&mut self, low: i64, high: i64) {
        trace!(low, high, "range narrowed");
        self.push(VisualEvent::RangeNarrowed { low, high });
    }

    /// Record the terminal event. Must be called exactly once, last.
    pub fn conclude(&mut self, found: bool, index: Option<usize>) {
        trace!(found, index, "search concluded");
        self.push(VisualEvent::SearchConcluded { found, index });
        self.concluded = true;
    }

    /// Consume the recorder, yielding the events in emission order.
    #[must_use]
    pub fn into_events(self) -> Vec<VisualEvent<T>> {
        debug_assert!(self.concluded, "trace ended without SearchConcluded");
        self.events
    }

    fn push(&mut self, event: VisualEvent<T>) {
        debug_assert!(!self.concluded, "event recorded after SearchConcluded");
        self.events.push(event);
    }
}

impl<T> Default for TraceRecorder<T> {
    fn default() -> Self {
        Self::new()
    }
}
