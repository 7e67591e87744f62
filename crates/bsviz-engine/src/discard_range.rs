#![forbid(unsafe_code)]

//! [`DiscardRange`] variant: half-open `[low, high)` search window.
//!
//! The "slice and drop" narrative: once the middle element rules out a side,
//! that index range leaves the active window and the surviving bounds are
//! reported via `RangeNarrowed`. Nothing is physically removed; how the
//! excluded elements look (fade, drop) is the renderer's business.
//!
//! # Invariants
//! 1. `high` starts at `n` (one past the last index) and the loop runs while
//!    `low < high`. This convention is deliberately distinct from the
//!    closed-window variant and must not be unified with it.
//! 2. Every `CheckMiddle` is immediately preceded by `FindMiddle` and a Mid
//!    pointer move.
//! 3. The Low/High pair is re-placed only while the surviving window is
//!    non-empty; an empty half-open window has no valid High index.

use std::cmp::Ordering;

use bsviz_core::{ElementColor, Pointer, StepId};
use tracing::trace;

use crate::recorder::{TraceRecorder, midpoint};
use crate::strategy::SearchStrategy;

/// Binary search over a half-open `[low, high)` window, `high` starting
/// at `n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardRange;

impl SearchStrategy for DiscardRange {
    fn run<T: Ord + Clone>(&self, values: &[T], target: &T, rec: &mut TraceRecorder<T>) {
        let n = values.len();
        if n == 0 {
            rec.step(StepId::CheckEmpty);
            rec.conclude(false, None);
            return;
        }
        rec.elements_created(values);

        let mut low = 0usize;
        let mut high = n;

        // Initial placement: L and R on the full window, M over its midpoint.
        rec.bounds(low, high - 1);
        rec.pointer(Pointer::Mid, midpoint(low, high));

        while low < high {
            // The loop-continuation check is narrated as the empty-check line.
            rec.step(StepId::CheckEmpty);

            let mid = midpoint(low, high);
            rec.step(StepId::FindMiddle);
            rec.pointer(Pointer::Mid, mid);

            rec.step(StepId::CheckMiddle);
            match values[mid].cmp(target) {
                Ordering::Equal => {
                    rec.recolor(mid, ElementColor::Found);
                    rec.conclude(true, Some(mid));
                    return;
                }
                Ordering::Greater => {
                    rec.recolor(mid, ElementColor::Candidate);
                    rec.step(StepId::SearchLeft);
                    // Discard [mid, high).
                    high = mid;
                }
                Ordering::Less => {
                    rec.recolor(mid, ElementColor::Candidate);
                    rec.step(StepId::SearchRight);
                    // Discard [low, mid + 1).
                    low = mid + 1;
                }
            }
            trace!(low, high, "window narrowed");
            rec.range(low as i64, high as i64);
            if low < high {
                rec.bounds(low, high - 1);
            }
        }
        rec.conclude(false, None);
    }

    fn name(&self) -> &'static str {
        "DiscardRange"
    }
}
