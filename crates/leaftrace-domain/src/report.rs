//! Lab report module - test reports and their status classification

use serde::{Deserialize, Serialize};

/// Testing method shown on every report preview.
pub const TESTING_METHOD: &str = "HPLC Analysis";

/// Laboratory accreditation shown on every report preview.
pub const ACCREDITATION: &str = "ISO 17025:2017";

/// The kind of lab report, which implies a fixed set of displayed test
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// Physical quality analysis
    Quality,

    /// Residue and contaminant screening
    Safety,

    /// Active-compound potency analysis
    Potency,
}

impl ReportKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Quality => "Quality",
            ReportKind::Safety => "Safety",
            ReportKind::Potency => "Potency",
        }
    }

    /// Parse a kind from a string (internal use)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "quality" => Some(ReportKind::Quality),
            "safety" => Some(ReportKind::Safety),
            "potency" => Some(ReportKind::Potency),
            _ => None,
        }
    }

    /// The fixed parameter table displayed for this kind of report.
    pub fn parameters(&self) -> &'static [TestParameter] {
        match self {
            ReportKind::Quality => &[
                TestParameter {
                    parameter: "Moisture Content",
                    result: "8.2%",
                    limit: "≤10%",
                    verdict: "PASS",
                },
                TestParameter {
                    parameter: "Ash Content",
                    result: "5.8%",
                    limit: "≤8%",
                    verdict: "PASS",
                },
                TestParameter {
                    parameter: "Foreign Matter",
                    result: "0.1%",
                    limit: "≤2%",
                    verdict: "PASS",
                },
            ],
            ReportKind::Safety => &[
                TestParameter {
                    parameter: "Organochlorine",
                    result: "Not Detected",
                    limit: "≤0.01 ppm",
                    verdict: "CLEAR",
                },
                TestParameter {
                    parameter: "Organophosphorus",
                    result: "Not Detected",
                    limit: "≤0.01 ppm",
                    verdict: "CLEAR",
                },
                TestParameter {
                    parameter: "Heavy Metals",
                    result: "Within Limits",
                    limit: "As per USP",
                    verdict: "CLEAR",
                },
            ],
            ReportKind::Potency => &[
                TestParameter {
                    parameter: "Curcumin Content",
                    result: "6.8%",
                    limit: "≥3%",
                    verdict: "PREMIUM",
                },
                TestParameter {
                    parameter: "Essential Oils",
                    result: "4.2%",
                    limit: "≥2%",
                    verdict: "HIGH",
                },
                TestParameter {
                    parameter: "Antioxidant Activity",
                    result: "92.5%",
                    limit: "≥80%",
                    verdict: "EXCELLENT",
                },
            ],
        }
    }
}

/// A single row of a report's displayed parameter table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TestParameter {
    /// What was measured
    pub parameter: &'static str,

    /// Measured result
    pub result: &'static str,

    /// Acceptance limit
    pub limit: &'static str,

    /// Displayed verdict for the row
    pub verdict: &'static str,
}

/// Display class a free-text report status resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusClass {
    /// The report cleared its checks
    Success,

    /// The report flagged a failure or detection
    Error,

    /// Anything else (informational)
    Info,
}

impl StatusClass {
    /// Classify a free-text report status by case-insensitive keyword
    /// match. Unrecognized statuses fall back to [`StatusClass::Info`].
    ///
    /// # Examples
    ///
    /// ```
    /// use leaftrace_domain::StatusClass;
    ///
    /// assert_eq!(StatusClass::classify("Premium Grade"), StatusClass::Success);
    /// assert_eq!(StatusClass::classify("FAILED"), StatusClass::Error);
    /// assert_eq!(StatusClass::classify("Pending Review"), StatusClass::Info);
    /// ```
    pub fn classify(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "passed" | "clear" | "premium grade" => StatusClass::Success,
            "failed" | "detected" => StatusClass::Error,
            _ => StatusClass::Info,
        }
    }

    /// Get the class name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusClass::Success => "success",
            StatusClass::Error => "error",
            StatusClass::Info => "info",
        }
    }
}

/// A laboratory test report attached to a provenance record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabReport {
    /// Report number within the record (displayed zero-padded)
    pub id: u32,

    /// Report title
    pub title: String,

    /// ISO date the report was issued
    pub date: String,

    /// Free-text status, classified via [`StatusClass::classify`]
    pub status: String,

    /// Kind of report, implying the displayed parameter table
    pub kind: ReportKind,

    /// Synthetic sample identifier shown in the preview
    pub sample_id: String,
}

impl LabReport {
    /// The display class of this report's status.
    pub fn status_class(&self) -> StatusClass {
        StatusClass::classify(&self.status)
    }

    /// Report id zero-padded to six digits, as shown on previews.
    pub fn display_id(&self) -> String {
        format!("{:06}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_success_keywords() {
        assert_eq!(StatusClass::classify("Passed"), StatusClass::Success);
        assert_eq!(StatusClass::classify("clear"), StatusClass::Success);
        assert_eq!(StatusClass::classify("Premium Grade"), StatusClass::Success);
        assert_eq!(StatusClass::classify("PREMIUM GRADE"), StatusClass::Success);
    }

    #[test]
    fn test_classify_error_keywords() {
        assert_eq!(StatusClass::classify("Failed"), StatusClass::Error);
        assert_eq!(StatusClass::classify("detected"), StatusClass::Error);
    }

    #[test]
    fn test_classify_default_is_info() {
        assert_eq!(StatusClass::classify("Pending Review"), StatusClass::Info);
        assert_eq!(StatusClass::classify(""), StatusClass::Info);
        // Keyword must match the whole status, not a substring
        assert_eq!(StatusClass::classify("not passed"), StatusClass::Info);
    }

    #[test]
    fn test_parameters_per_kind() {
        assert_eq!(ReportKind::Quality.parameters().len(), 3);
        assert_eq!(ReportKind::Safety.parameters().len(), 3);
        assert_eq!(ReportKind::Potency.parameters().len(), 3);

        assert_eq!(
            ReportKind::Potency.parameters()[0].parameter,
            "Curcumin Content"
        );
        assert_eq!(ReportKind::Safety.parameters()[2].verdict, "CLEAR");
    }

    #[test]
    fn test_display_id_zero_padded() {
        let report = LabReport {
            id: 2,
            title: "Pesticide Residue Test".to_string(),
            date: "2024-01-12".to_string(),
            status: "Clear".to_string(),
            kind: ReportKind::Safety,
            sample_id: "SAMPLE-ABC123XYZ".to_string(),
        };

        assert_eq!(report.display_id(), "000002");
        assert_eq!(report.status_class(), StatusClass::Success);
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(ReportKind::parse("quality"), Some(ReportKind::Quality));
        assert_eq!(ReportKind::parse("Potency"), Some(ReportKind::Potency));
        assert_eq!(ReportKind::parse("purity"), None);
    }
}
