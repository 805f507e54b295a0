//! Leaftrace Ledger
//!
//! The mock provenance source. Given a product identifier this crate
//! synthesizes the full display record locally; there is no chain, no
//! network, and no storage behind it. Simulated latency is the caller's
//! concern - generation itself is synchronous and cannot fail.

#![warn(missing_docs)]

pub mod generator;
pub mod source;

pub use generator::generate_record;
pub use source::{LookupError, MockLedger, ProvenanceSource};
