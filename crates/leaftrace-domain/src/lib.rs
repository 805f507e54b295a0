//! Leaftrace Domain Layer
//!
//! This crate contains the data model for the Leaftrace provenance
//! experience: the record a scanned product resolves to, and the small set
//! of derivation and classification rules the views depend on.
//!
//! ## Key Concepts
//!
//! - **ProductId**: the opaque identifier echoed from a scanned code
//! - **ProvenanceRecord**: the full display bundle for one lookup
//! - **TimelineStage**: one step of the supply-chain journey, in order
//! - **LabReport**: a test report whose free-text status is classified
//!   into success/error/info for display
//!
//! ## Architecture
//!
//! Pure data and rules only. Everything here is synchronous and total;
//! generation, latency simulation, and rendering live in other crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod farmer;
pub mod map;
pub mod product;
pub mod record;
pub mod report;
pub mod sustainability;
pub mod timeline;

// Re-exports for convenience
pub use farmer::FarmerProfile;
pub use map::{GeoPoint, LocationKind, MapData, TraceLocation};
pub use product::ProductId;
pub use record::{Authenticity, ProvenanceRecord};
pub use report::{LabReport, ReportKind, StatusClass};
pub use sustainability::{Certification, SustainabilityInfo, SustainabilityMetrics};
pub use timeline::{StageStatus, TimelineStage};
