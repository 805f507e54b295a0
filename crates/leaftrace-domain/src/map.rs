//! Map module - journey locations and the route between them

use serde::{Deserialize, Serialize};

/// A geographic coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees
    pub lat: f64,

    /// Longitude in decimal degrees
    pub lng: f64,
}

/// The kind of a journey location, selecting its marker variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    /// Origin farm
    Farm,

    /// Collection center
    Collection,

    /// Testing laboratory
    Lab,

    /// Processing unit
    Processing,

    /// Distribution center
    Distribution,
}

impl LocationKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationKind::Farm => "farm",
            LocationKind::Collection => "collection",
            LocationKind::Lab => "lab",
            LocationKind::Processing => "processing",
            LocationKind::Distribution => "distribution",
        }
    }

    /// Parse a kind from a string (internal use)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "farm" => Some(LocationKind::Farm),
            "collection" => Some(LocationKind::Collection),
            "lab" => Some(LocationKind::Lab),
            "processing" => Some(LocationKind::Processing),
            "distribution" => Some(LocationKind::Distribution),
            _ => None,
        }
    }
}

/// A named location on the journey map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceLocation {
    /// Display name (e.g., "Collection Center")
    pub name: String,

    /// Marker kind
    pub kind: LocationKind,

    /// Coordinates
    pub point: GeoPoint,
}

/// Map data for one record: ordered locations plus the route polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapData {
    /// Journey locations in visit order
    pub locations: Vec<TraceLocation>,

    /// Route polyline through the distinct journey coordinates
    pub route: Vec<GeoPoint>,

    /// Displayed total distance (e.g., "~2,500 km")
    pub distance_label: String,

    /// Displayed total journey time (e.g., "6 days")
    pub duration_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrip() {
        for kind in [
            LocationKind::Farm,
            LocationKind::Collection,
            LocationKind::Lab,
            LocationKind::Processing,
            LocationKind::Distribution,
        ] {
            assert_eq!(LocationKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(LocationKind::parse("warehouse"), None);
    }
}
