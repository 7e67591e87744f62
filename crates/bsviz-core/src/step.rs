#![forbid(unsafe_code)]

//! Narrated algorithm steps.
//!
//! The visualization shows the binary-search algorithm as a five-line panel
//! next to the array. [`StepId`] names one line of that panel. Exactly one
//! step is active at any moment: each
//! [`StepHighlighted`](crate::event::VisualEvent::StepHighlighted) event
//! names the new active step and implicitly clears the previous one, so no
//! "reset all, then highlight" operation exists anywhere.

use std::fmt;

/// One line of the narrated binary-search algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum StepId {
    /// `0. If array empty -> return False`
    CheckEmpty,
    /// `1. Find middle element`
    FindMiddle,
    /// `2. If middle == target -> return True`
    CheckMiddle,
    /// `3a. If target < middle -> search left`
    SearchLeft,
    /// `3b. Else -> search right`
    SearchRight,
}

impl StepId {
    /// All steps, in panel order (top to bottom).
    pub const ALL: [StepId; 5] = [
        StepId::CheckEmpty,
        StepId::FindMiddle,
        StepId::CheckMiddle,
        StepId::SearchLeft,
        StepId::SearchRight,
    ];

    /// The narrative line as shown in the algorithm panel.
    #[must_use]
    pub const fn narrative(self) -> &'static str {
        match self {
            StepId::CheckEmpty => "0. If array empty -> return False",
            StepId::FindMiddle => "1. Find middle element",
            StepId::CheckMiddle => "2. If middle == target -> return True",
            StepId::SearchLeft => "3a. If target < middle -> search left",
            StepId::SearchRight => "3b. Else -> search right",
        }
    }

    /// Zero-based row of this step in the algorithm panel.
    #[must_use]
    pub const fn row(self) -> usize {
        match self {
            StepId::CheckEmpty => 0,
            StepId::FindMiddle => 1,
            StepId::CheckMiddle => 2,
            StepId::SearchLeft => 3,
            StepId::SearchRight => 4,
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.narrative())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_row_order() {
        for (i, step) in StepId::ALL.iter().enumerate() {
            assert_eq!(step.row(), i, "panel row mismatch for {step:?}");
        }
    }

    #[test]
    fn narratives_are_distinct() {
        for a in StepId::ALL {
            for b in StepId::ALL {
                if a != b {
                    assert_ne!(a.narrative(), b.narrative());
                }
            }
        }
    }

    #[test]
    fn display_is_the_narrative_line() {
        assert_eq!(
            StepId::FindMiddle.to_string(),
            "1. Find middle element"
        );
        assert_eq!(
            StepId::CheckEmpty.to_string(),
            "0. If array empty -> return False"
        );
    }
}
