#![forbid(unsafe_code)]

//! Strategy selection for the two search variants.
//!
//! # Standalone structs vs. convenience enum
//!
//! Each variant is a standalone struct ([`DiscardRange`], [`NarrowWindow`])
//! implementing [`SearchStrategy`] directly, keeping each loop's invariants
//! independently testable. For quick selection between the built-ins, use
//! [`Variant`] and the top-level [`trace`] call, which delegate to the same
//! logic.

use std::fmt;
use std::str::FromStr;

use bsviz_core::VisualEvent;
use tracing::debug;

use crate::discard_range::DiscardRange;
use crate::narrow_window::NarrowWindow;
use crate::recorder::TraceRecorder;

/// A binary-search variant that records its run into a [`TraceRecorder`].
///
/// Implementations must be stateless across runs: every call operates on a
/// fresh recorder and owns its own pointer state, and the recorded stream
/// must end with exactly one `SearchConcluded`.
pub trait SearchStrategy {
    /// Run the search over `values` (sorted ascending, unchecked) for
    /// `target`, recording every decision in emission order.
    fn run<T: Ord + Clone>(&self, values: &[T], target: &T, rec: &mut TraceRecorder<T>);

    /// Human-readable strategy name for logs.
    fn name(&self) -> &'static str;
}

/// Selects which search variant [`trace`] runs.
///
/// This is the engine's only configuration surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Half-open `[low, high)` window; inspected ranges are discarded.
    DiscardRange,
    /// Closed `[low, high]` window; the window narrows without discarding.
    NarrowWindow,
}

impl Variant {
    /// Strategy name, identical to the standalone struct's.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Variant::DiscardRange => "DiscardRange",
            Variant::NarrowWindow => "NarrowWindow",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error from parsing an unrecognized variant name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantParseError {
    name: String,
}

impl fmt::Display for VariantParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unrecognized search variant {:?} (expected \"discard-range\" or \"narrow-window\")",
            self.name
        )
    }
}

impl std::error::Error for VariantParseError {}

impl FromStr for Variant {
    type Err = VariantParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "discard-range" => Ok(Variant::DiscardRange),
            "narrow-window" => Ok(Variant::NarrowWindow),
            other => Err(VariantParseError {
                name: other.to_string(),
            }),
        }
    }
}

/// Run one search and return the full event stream.
///
/// `values` must already be sorted ascending; the engine neither verifies
/// nor sorts, and results over unsorted input are unspecified. The returned
/// stream is finite, ends with exactly one `SearchConcluded`, and is
/// byte-for-byte identical across runs with identical inputs.
#[must_use]
pub fn trace<T: Ord + Clone>(values: &[T], target: &T, variant: Variant) -> Vec<VisualEvent<T>> {
    let mut rec = TraceRecorder::new();
    match variant {
        Variant::DiscardRange => DiscardRange.run(values, target, &mut rec),
        Variant::NarrowWindow => NarrowWindow.run(values, target, &mut rec),
    }
    debug!(
        variant = variant.name(),
        n = values.len(),
        events = rec.len(),
        "trace complete"
    );
    rec.into_events()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_names_match_the_structs() {
        assert_eq!(Variant::DiscardRange.name(), DiscardRange.name());
        assert_eq!(Variant::NarrowWindow.name(), NarrowWindow.name());
    }

    #[test]
    fn parse_recognized_names() {
        assert_eq!("discard-range".parse(), Ok(Variant::DiscardRange));
        assert_eq!("narrow-window".parse(), Ok(Variant::NarrowWindow));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "bisect".parse::<Variant>().unwrap_err();
        assert!(err.to_string().contains("bisect"));
    }

    #[test]
    fn enum_delegates_to_the_same_logic() {
        let values = [1, 3, 5, 7, 9, 11, 13];

        let mut rec = TraceRecorder::new();
        DiscardRange.run(&values, &9, &mut rec);
        assert_eq!(trace(&values, &9, Variant::DiscardRange), rec.into_events());

        let mut rec = TraceRecorder::new();
        NarrowWindow.run(&values, &4, &mut rec);
        assert_eq!(trace(&values, &4, Variant::NarrowWindow), rec.into_events());
    }
}
