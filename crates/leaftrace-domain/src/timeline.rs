//! Timeline module - the ordered supply-chain journey of a product

use serde::{Deserialize, Serialize};

/// Completion status of a timeline stage.
///
/// The status selects the visual variant a stage renders with; the mock
/// data currently marks every stage completed, but pending stages exist and
/// must render distinctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    /// The stage has finished
    Completed,

    /// The stage is still in progress
    Pending,
}

impl StageStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            StageStatus::Completed => "completed",
            StageStatus::Pending => "pending",
        }
    }

    /// Parse a status from a string (internal use)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "completed" => Some(StageStatus::Completed),
            "pending" => Some(StageStatus::Pending),
            _ => None,
        }
    }

    /// Human-readable label shown next to the status marker
    pub fn label(&self) -> &'static str {
        match self {
            StageStatus::Completed => "Completed",
            StageStatus::Pending => "In Progress",
        }
    }
}

/// One step in a product's journey.
///
/// Stages are stored in chronological order and must be rendered in that
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineStage {
    /// Stage name (e.g., "Harvest")
    pub stage: String,

    /// ISO date the stage occurred
    pub date: String,

    /// Where the stage took place
    pub location: String,

    /// Completion status
    pub status: StageStatus,

    /// Descriptive text for the stage
    pub details: String,
}
