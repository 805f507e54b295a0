//! Provenance record module - the full display bundle for one lookup

use crate::farmer::FarmerProfile;
use crate::map::MapData;
use crate::product::ProductId;
use crate::report::LabReport;
use crate::sustainability::SustainabilityInfo;
use crate::timeline::TimelineStage;
use serde::{Deserialize, Serialize};

/// Authenticity state displayed on the record header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Authenticity {
    /// Verified on the (mock) ledger
    Verified,

    /// Could not be verified
    Unverified,
}

impl Authenticity {
    /// Get the state name as displayed
    pub fn as_str(&self) -> &'static str {
        match self {
            Authenticity::Verified => "Verified",
            Authenticity::Unverified => "Unverified",
        }
    }
}

/// The mocked bundle of all display data for one scanned product.
///
/// A record is owned by the viewer for the lifetime of one lookup: it is
/// recreated whenever the identifier changes and discarded when the viewer
/// goes away. Nothing writes to a record after generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceRecord {
    /// The identifier this record was generated for
    pub id: ProductId,

    /// Product display name
    pub name: String,

    /// Batch number derived from the identifier
    pub batch_number: String,

    /// Manufacturer name
    pub manufacturer: String,

    /// ISO manufacture date
    pub manufacture_date: String,

    /// ISO expiry date
    pub expiry_date: String,

    /// Authenticity flag
    pub authenticity: Authenticity,

    /// Synthetic ledger transaction hash ("0x" + 40 hex characters)
    pub ledger_hash: String,

    /// Journey timeline, chronological
    pub timeline: Vec<TimelineStage>,

    /// Farmer behind the batch
    pub farmer: FarmerProfile,

    /// Lab reports, one per kind
    pub lab_reports: Vec<LabReport>,

    /// Certifications and environmental metrics
    pub sustainability: SustainabilityInfo,

    /// Journey map data
    pub map: MapData,
}
