//! Mock record generation.
//!
//! All content is fixed demonstration data; only the echoed identifier and
//! the cosmetic random strings (ledger hash, sample ids) vary. The rng is
//! seeded from the identifier, so repeated lookups of the same code produce
//! an identical record.

use leaftrace_domain::{
    Authenticity, Certification, FarmerProfile, GeoPoint, LabReport, LocationKind, MapData,
    ProductId, ProvenanceRecord, ReportKind, StageStatus, SustainabilityInfo,
    SustainabilityMetrics, TimelineStage, TraceLocation,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

const HEX_CHARS: &[u8] = b"0123456789abcdef";
const SAMPLE_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Synthesize the provenance record for an identifier.
///
/// Total for any non-empty identifier: the identifier only feeds the echoed
/// id, the batch number, and the rng seed. Everything else is fixed mock
/// content - six completed timeline stages, one farmer, three lab reports
/// (one per kind), one sustainability block, five map locations.
pub fn generate_record(id: &ProductId) -> ProvenanceRecord {
    let mut rng = seeded_rng(id);
    let ledger_hash = hex_string(&mut rng, 40);

    ProvenanceRecord {
        id: id.clone(),
        name: "Organic Turmeric Powder".to_string(),
        batch_number: id.batch_number(),
        manufacturer: "AyurVeda Naturals Pvt. Ltd.".to_string(),
        manufacture_date: "2024-01-15".to_string(),
        expiry_date: "2026-01-15".to_string(),
        authenticity: Authenticity::Verified,
        ledger_hash: format!("0x{}", ledger_hash),
        timeline: timeline(),
        farmer: farmer(),
        lab_reports: lab_reports(&mut rng),
        sustainability: sustainability(),
        map: map_data(),
    }
}

fn seeded_rng(id: &ProductId) -> StdRng {
    let mut hasher = DefaultHasher::new();
    id.as_str().hash(&mut hasher);
    StdRng::seed_from_u64(hasher.finish())
}

fn hex_string(rng: &mut StdRng, len: usize) -> String {
    (0..len)
        .map(|_| HEX_CHARS[rng.gen_range(0..HEX_CHARS.len())] as char)
        .collect()
}

fn sample_id(rng: &mut StdRng) -> String {
    let tail: String = (0..9)
        .map(|_| SAMPLE_CHARS[rng.gen_range(0..SAMPLE_CHARS.len())] as char)
        .collect();
    format!("SAMPLE-{}", tail)
}

fn timeline() -> Vec<TimelineStage> {
    let stage = |stage: &str, date: &str, location: &str, details: &str| TimelineStage {
        stage: stage.to_string(),
        date: date.to_string(),
        location: location.to_string(),
        status: StageStatus::Completed,
        details: details.to_string(),
    };

    vec![
        stage(
            "Harvest",
            "2024-01-10",
            "Erode, Tamil Nadu, India",
            "Organic turmeric harvested from certified organic farm",
        ),
        stage(
            "Collection",
            "2024-01-11",
            "Collection Center, Erode",
            "Quality checked and collected at local center",
        ),
        stage(
            "Lab Testing",
            "2024-01-12",
            "Quality Labs, Chennai",
            "Comprehensive quality and purity tests conducted",
        ),
        stage(
            "Processing",
            "2024-01-13",
            "Processing Unit, Coimbatore",
            "Cleaned, dried, and processed under hygienic conditions",
        ),
        stage(
            "Packaging",
            "2024-01-14",
            "Packaging Unit, Coimbatore",
            "Sealed in food-grade packaging with QR code",
        ),
        stage(
            "Distribution",
            "2024-01-15",
            "Distribution Center, Mumbai",
            "Ready for shipment to retail outlets",
        ),
    ]
}

fn farmer() -> FarmerProfile {
    FarmerProfile {
        name: "Rajesh Kumar".to_string(),
        location: "Erode, Tamil Nadu".to_string(),
        experience: "15+ years".to_string(),
        farm_size: "5 acres".to_string(),
        story: "Third generation turmeric farmer committed to organic farming practices. \
                Believes in sustainable agriculture and maintaining soil health for future \
                generations."
            .to_string(),
        certifications: vec!["NPOP Organic".to_string(), "Fair Trade".to_string()],
        contact: "+91 98765 43210".to_string(),
    }
}

fn lab_reports(rng: &mut StdRng) -> Vec<LabReport> {
    let report = |id: u32, title: &str, status: &str, kind: ReportKind, sample: String| LabReport {
        id,
        title: title.to_string(),
        date: "2024-01-12".to_string(),
        status: status.to_string(),
        kind,
        sample_id: sample,
    };

    vec![
        report(
            1,
            "Purity Analysis Report",
            "Passed",
            ReportKind::Quality,
            sample_id(rng),
        ),
        report(
            2,
            "Pesticide Residue Test",
            "Clear",
            ReportKind::Safety,
            sample_id(rng),
        ),
        report(
            3,
            "Curcumin Content Analysis",
            "Premium Grade",
            ReportKind::Potency,
            sample_id(rng),
        ),
    ]
}

fn sustainability() -> SustainabilityInfo {
    let cert = |name: &str, verified: bool| Certification {
        name: name.to_string(),
        verified,
    };

    SustainabilityInfo {
        certifications: vec![
            cert("USDA Organic", true),
            cert("Fair Trade", true),
            cert("Carbon Neutral", true),
            cert("Rainforest Alliance", false),
        ],
        metrics: SustainabilityMetrics {
            carbon_footprint: "2.3 kg CO2e".to_string(),
            water_usage: "145L per kg".to_string(),
            score: 92,
        },
    }
}

fn map_data() -> MapData {
    let location = |name: &str, kind: LocationKind, lat: f64, lng: f64| TraceLocation {
        name: name.to_string(),
        kind,
        point: GeoPoint { lat, lng },
    };

    MapData {
        locations: vec![
            location("Farm Location", LocationKind::Farm, 11.3410, 77.7172),
            location("Collection Center", LocationKind::Collection, 11.3410, 77.7172),
            location("Lab Testing", LocationKind::Lab, 13.0827, 80.2707),
            location("Processing Unit", LocationKind::Processing, 11.0168, 76.9558),
            location("Distribution Center", LocationKind::Distribution, 19.0760, 72.8777),
        ],
        route: vec![
            GeoPoint {
                lat: 11.3410,
                lng: 77.7172,
            },
            GeoPoint {
                lat: 13.0827,
                lng: 80.2707,
            },
            GeoPoint {
                lat: 11.0168,
                lng: 76.9558,
            },
            GeoPoint {
                lat: 19.0760,
                lng: 72.8777,
            },
        ],
        distance_label: "~2,500 km".to_string(),
        duration_label: "6 days".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leaftrace_domain::StatusClass;

    #[test]
    fn test_record_echoes_identifier() {
        let id = ProductId::new("BT123456");
        let record = generate_record(&id);

        assert_eq!(record.id, id);
        assert_eq!(record.batch_number, "BATCH-BT123456");
    }

    #[test]
    fn test_generation_is_idempotent_per_identifier() {
        let id = ProductId::new("demobatch123");
        assert_eq!(generate_record(&id), generate_record(&id));
    }

    #[test]
    fn test_distinct_identifiers_get_distinct_hashes() {
        let a = generate_record(&ProductId::new("demobatch123"));
        let b = generate_record(&ProductId::new("camerabatch789"));
        assert_ne!(a.ledger_hash, b.ledger_hash);
    }

    #[test]
    fn test_ledger_hash_shape() {
        let record = generate_record(&ProductId::new("BT123456"));
        let hex = record.ledger_hash.strip_prefix("0x").expect("0x prefix");

        assert_eq!(hex.len(), 40);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_six_stages_all_completed() {
        let record = generate_record(&ProductId::new("BT123456"));

        assert_eq!(record.timeline.len(), 6);
        assert!(record
            .timeline
            .iter()
            .all(|s| s.status == StageStatus::Completed));
        assert_eq!(record.timeline[0].stage, "Harvest");
        assert_eq!(record.timeline[5].stage, "Distribution");
    }

    #[test]
    fn test_one_report_per_kind_all_success() {
        let record = generate_record(&ProductId::new("BT123456"));
        let kinds: Vec<ReportKind> = record.lab_reports.iter().map(|r| r.kind).collect();

        assert_eq!(
            kinds,
            vec![ReportKind::Quality, ReportKind::Safety, ReportKind::Potency]
        );
        assert!(record
            .lab_reports
            .iter()
            .all(|r| r.status_class() == StatusClass::Success));
        assert!(record
            .lab_reports
            .iter()
            .all(|r| r.sample_id.starts_with("SAMPLE-") && r.sample_id.len() == 16));
    }

    #[test]
    fn test_map_shape() {
        let record = generate_record(&ProductId::new("BT123456"));

        assert_eq!(record.map.locations.len(), 5);
        assert_eq!(record.map.route.len(), 4);
        assert_eq!(record.map.locations[0].kind, LocationKind::Farm);
        assert_eq!(record.map.locations[4].kind, LocationKind::Distribution);
    }

    #[test]
    fn test_record_serializes() {
        let record = generate_record(&ProductId::new("BT123456"));
        let json = serde_json::to_string(&record).expect("record serializes");

        assert!(json.contains("BATCH-BT123456"));
        assert!(json.contains("Organic Turmeric Powder"));
    }
}
