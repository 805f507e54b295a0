//! Leaftrace Provenance Viewer
//!
//! The state machine behind the provenance screen. A viewer is created per
//! identifier, starts loading, resolves its record through a
//! [`ProvenanceSource`](leaftrace_ledger::ProvenanceSource) after the
//! simulated fetch delay, and then serves four read-only tab views off the
//! same record. Tab selection and the per-tab selections are pure local
//! state - no view ever refetches or mutates the record.

#![warn(missing_docs)]

pub mod events;
pub mod glyph;
pub mod state;
pub mod tab;

pub use events::{EventBus, Subscription, ViewerEvent};
pub use glyph::Glyph;
pub use state::{Phase, ReportViewMode, Viewer, FETCH_DELAY};
pub use tab::Tab;
