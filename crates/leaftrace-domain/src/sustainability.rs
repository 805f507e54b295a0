//! Sustainability module - certifications and environmental metrics

use serde::{Deserialize, Serialize};

/// A sustainability certification and its verification state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    /// Certification name (e.g., "USDA Organic")
    pub name: String,

    /// Whether the certification has been verified
    pub verified: bool,
}

/// Numeric environmental metrics for a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SustainabilityMetrics {
    /// Carbon footprint per unit (e.g., "2.3 kg CO2e")
    pub carbon_footprint: String,

    /// Water used in production (e.g., "145L per kg")
    pub water_usage: String,

    /// Overall sustainability score, 0-100
    pub score: u8,
}

impl SustainabilityMetrics {
    /// Letter grade derived from the score, as displayed on the metrics
    /// card.
    pub fn grade(&self) -> &'static str {
        match self.score {
            90..=100 => "A+",
            80..=89 => "A",
            70..=79 => "B",
            60..=69 => "C",
            _ => "D",
        }
    }
}

/// Certifications plus metrics for one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SustainabilityInfo {
    /// Certification badges
    pub certifications: Vec<Certification>,

    /// Environmental metrics
    pub metrics: SustainabilityMetrics,
}

impl SustainabilityInfo {
    /// Count of verified certifications.
    pub fn verified_count(&self) -> usize {
        self.certifications.iter().filter(|c| c.verified).count()
    }
}
