#![forbid(unsafe_code)]

//! Event vocabulary for binary-search visualization traces.
//!
//! # Role in bsviz
//! `bsviz-core` is the data-contract leaf. It defines the closed set of
//! [`VisualEvent`] variants the trace engine emits and the rendering backend
//! consumes, plus the [`StepId`] identifiers for the narrated algorithm
//! panel. No behavior lives here beyond construction and display helpers.
//!
//! # How it fits in the system
//! The engine (`bsviz-engine`) produces ordered `VisualEvent` streams; a
//! rendering backend applies them in order. Both sides depend on this crate
//! and never on each other, so the vocabulary is the only coupling point.
//!
//! The variant set is closed: a new visual behavior means a new variant
//! here, never a repurposed meaning for an existing one.

pub mod event;
pub mod step;

pub use event::{ElementColor, Pointer, VisualEvent};
pub use step::StepId;
