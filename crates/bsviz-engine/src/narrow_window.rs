#![forbid(unsafe_code)]

//! [`NarrowWindow`] variant: closed `[low, high]` search window.
//!
//! No ranges are discarded; the active window shrinks in place and each
//! `RangeNarrowed` reports the new closed bounds. A renderer typically draws
//! this as a bounding highlight over the surviving elements rather than
//! removing anything (a presentation choice external to the engine).
//!
//! # Invariants
//! 1. `high` starts at `n - 1` (last valid index) and the loop runs while
//!    `low <= high`. This convention is deliberately distinct from the
//!    half-open variant and must not be unified with it.
//! 2. Bounds are tracked signed: the final narrowing may produce `high = -1`
//!    or `low = n`, and that invalid window is still reported so the
//!    renderer can show the search space collapsing.
//! 3. The Low/High pair is re-placed only while `low <= high`, with the
//!    collision offset when both land on the last remaining candidate.

use std::cmp::Ordering;

use bsviz_core::{ElementColor, Pointer, StepId};
use tracing::trace;

use crate::recorder::{TraceRecorder, midpoint};
use crate::strategy::SearchStrategy;

/// Binary search over a closed `[low, high]` window, `high` starting
/// at `n - 1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NarrowWindow;

impl SearchStrategy for NarrowWindow {
    fn run<T: Ord + Clone>(&self, values: &[T], target: &T, rec: &mut TraceRecorder<T>) {
        let n = values.len();
        if n == 0 {
            // No window exists to render.
            rec.step(StepId::CheckEmpty);
            rec.conclude(false, None);
            return;
        }
        rec.elements_created(values);

        let mut low: i64 = 0;
        let mut high: i64 = n as i64 - 1;

        // Initial placement plus the initial search-space window over the
        // whole sequence.
        rec.bounds(0, n - 1);
        rec.pointer(Pointer::Mid, midpoint(0, n - 1));
        rec.range(low, high);

        while low <= high {
            // The loop-continuation check is narrated as the empty-check line.
            rec.step(StepId::CheckEmpty);

            let mid = midpoint(low as usize, high as usize);
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
                    high = mid as i64 - 1;
                }
                Ordering::Less => {
                    rec.recolor(mid, ElementColor::Candidate);
                    rec.step(StepId::SearchRight);
                    low = mid as i64 + 1;
                }
            }
            trace!(low, high, "window narrowed");
            // Reported even when low > high: the renderer sees the space
            // collapse before the loop exits.
            rec.range(low, high);
            if low <= high {
                rec.bounds(low as usize, high as usize);
            }
        }
        rec.conclude(false, None);
    }

    fn name(&self) -> &'static str {
        "NarrowWindow"
    }
}
