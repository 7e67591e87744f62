#![forbid(unsafe_code)]

//! Canonical visualization event types.
//!
//! A trace is an ordered, finite sequence of [`VisualEvent`] values produced
//! by one engine run and consumed exactly once, in emission order, by a
//! rendering backend. The contract with the backend: every event must be
//! applied in order; skipping or reordering breaks visual correctness (a
//! `PointerMoved` applied before its `StepHighlighted` misattributes the
//! narrative).
//!
//! # Design Notes
//!
//! - All events derive `Clone`, `PartialEq`, and `Eq` for use in tests and
//!   pattern matching. Replay determinism is checked with plain `==`.
//! - Element indices are positional: element `i` of
//!   [`ElementsCreated`](VisualEvent::ElementsCreated) sits at index `i`.
//! - `RangeNarrowed` bounds are signed: the closed-window variant's final
//!   narrowing may step one past either end (`high = -1` or `low = n`).
//! - Serde derives are feature-gated (`serde`), tagged on `"event"`, so
//!   downstream recorders can persist streams; the engine never serializes.

use crate::step::StepId;

// ---------------------------------------------------------------------------
// Pointer
// ---------------------------------------------------------------------------

/// Which search pointer an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Pointer {
    /// Lower bound of the active window.
    Low,
    /// Midpoint under inspection.
    Mid,
    /// Upper bound of the active window.
    High,
}

impl Pointer {
    /// Renderer-facing label for this pointer.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Pointer::Low => "L",
            Pointer::Mid => "M",
            Pointer::High => "R",
        }
    }
}

// ---------------------------------------------------------------------------
// ElementColor
// ---------------------------------------------------------------------------

/// Fill state of a rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ElementColor {
    /// Not yet inspected.
    Neutral,
    /// Inspected as a middle element and ruled out.
    Candidate,
    /// The target was located here.
    Found,
}

// ---------------------------------------------------------------------------
// VisualEvent
// ---------------------------------------------------------------------------

/// A single visualization event.
///
/// The set of variants is closed; see the crate docs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "event", rename_all = "snake_case")
)]
pub enum VisualEvent<T> {
    /// The element row was laid out. Emitted once, before the loop, for
    /// non-empty input. Element `i` of `values` sits at index `i`.
    ElementsCreated { values: Vec<T> },

    /// Focus shifted to a new narrative step, implicitly un-highlighting
    /// all others.
    StepHighlighted { step: StepId },

    /// A pointer's target index changed.
    ///
    /// `collision` is set when the Low and High labels land on the same
    /// element; the renderer must offset them apart rather than stack them.
    PointerMoved {
        pointer: Pointer,
        index: usize,
        collision: bool,
    },

    /// An element's fill changed (inspected, or target located).
    ElementRecolored { index: usize, color: ElementColor },

    /// The active window changed after a branch decision.
    ///
    /// Half-open `[low, high)` for the discard-range variant, closed
    /// `[low, high]` for the narrow-window variant. The engine reports only
    /// which indices remain active; how excluded elements look (fade, drop,
    /// bounding box) is the renderer's choice.
    RangeNarrowed { low: i64, high: i64 },

    /// Terminal event: the search is over. Emitted exactly once, always
    /// last. A miss is a normal conclusion, never a failure.
    SearchConcluded { found: bool, index: Option<usize> },
}

impl<T> VisualEvent<T> {
    /// True for the terminal [`SearchConcluded`](VisualEvent::SearchConcluded)
    /// event.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, VisualEvent::SearchConcluded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_labels() {
        assert_eq!(Pointer::Low.label(), "L");
        assert_eq!(Pointer::Mid.label(), "M");
        assert_eq!(Pointer::High.label(), "R");
    }

    #[test]
    fn only_conclusion_is_terminal() {
        let events: Vec<VisualEvent<i32>> = vec![
            VisualEvent::ElementsCreated { values: vec![1, 3] },
            VisualEvent::StepHighlighted {
                step: StepId::CheckEmpty,
            },
            VisualEvent::PointerMoved {
                pointer: Pointer::Mid,
                index: 0,
                collision: false,
            },
            VisualEvent::ElementRecolored {
                index: 0,
                color: ElementColor::Candidate,
            },
            VisualEvent::RangeNarrowed { low: 1, high: 2 },
        ];
        assert!(events.iter().all(|e| !e.is_terminal()));
        let done: VisualEvent<i32> = VisualEvent::SearchConcluded {
            found: false,
            index: None,
        };
        assert!(done.is_terminal());
    }

    #[test]
    fn events_are_clone_and_eq() {
        let event: VisualEvent<i32> = VisualEvent::SearchConcluded {
            found: true,
            index: Some(4),
        };
        assert_eq!(event, event.clone());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let events: Vec<VisualEvent<i32>> = vec![
            VisualEvent::ElementsCreated {
                values: vec![1, 3, 5],
            },
            VisualEvent::StepHighlighted {
                step: StepId::FindMiddle,
            },
            VisualEvent::PointerMoved {
                pointer: Pointer::High,
                index: 2,
                collision: true,
            },
            VisualEvent::RangeNarrowed { low: 2, high: 1 },
            VisualEvent::SearchConcluded {
                found: false,
                index: None,
            },
        ];
        let json = serde_json::to_string(&events).unwrap();
        let back: Vec<VisualEvent<i32>> = serde_json::from_str(&json).unwrap();
        assert_eq!(events, back);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_tags_on_event_field() {
        let event: VisualEvent<i32> = VisualEvent::StepHighlighted {
            step: StepId::CheckMiddle,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "step_highlighted");
        assert_eq!(json["step"], "check_middle");
    }
}
