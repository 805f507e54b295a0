//! Farmer profile module

use serde::{Deserialize, Serialize};

/// Profile of the farmer behind a product batch. One-to-one with a
/// provenance record; read-only in every view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmerProfile {
    /// Farmer name
    pub name: String,

    /// Farm location
    pub location: String,

    /// Experience summary (e.g., "15+ years")
    pub experience: String,

    /// Farm size (e.g., "5 acres")
    pub farm_size: String,

    /// Narrative text about the farmer
    pub story: String,

    /// Certification labels held by the farmer
    pub certifications: Vec<String>,

    /// Contact string
    pub contact: String,
}

/// A sustainable-practice entry shown on the farmer view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Practice {
    /// Practice title
    pub title: &'static str,

    /// One-line summary
    pub summary: &'static str,
}

/// A quality metric shown on the farmer view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QualityMetric {
    /// Displayed value (e.g., "98%")
    pub value: &'static str,

    /// Metric label
    pub label: &'static str,
}

/// A community-impact figure shown on the farmer view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImpactStat {
    /// Displayed figure (e.g., "50+")
    pub figure: &'static str,

    /// Caption under the figure
    pub caption: &'static str,
}

/// Fixed sustainable-practice entries accompanying every farmer profile.
pub fn sustainable_practices() -> &'static [Practice] {
    &[
        Practice {
            title: "Organic Farming",
            summary: "No synthetic pesticides or fertilizers used",
        },
        Practice {
            title: "Water Conservation",
            summary: "Drip irrigation and rainwater harvesting",
        },
        Practice {
            title: "Crop Rotation",
            summary: "Maintains soil health and prevents pests",
        },
        Practice {
            title: "Natural Composting",
            summary: "Farm waste converted to organic fertilizer",
        },
    ]
}

/// Fixed quality metrics accompanying every farmer profile.
pub fn quality_metrics() -> &'static [QualityMetric] {
    &[
        QualityMetric {
            value: "98%",
            label: "Quality Score",
        },
        QualityMetric {
            value: "5.0",
            label: "Customer Rating",
        },
        QualityMetric {
            value: "100%",
            label: "Organic Certified",
        },
    ]
}

/// Fixed community-impact figures accompanying every farmer profile.
pub fn community_impact() -> &'static [ImpactStat] {
    &[
        ImpactStat {
            figure: "50+",
            caption: "Local Jobs Created",
        },
        ImpactStat {
            figure: "15",
            caption: "Years of Fair Trade",
        },
        ImpactStat {
            figure: "25%",
            caption: "Carbon Footprint Reduced",
        },
    ]
}
