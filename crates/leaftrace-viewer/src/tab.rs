//! Tab module - the single-selection tab state

/// The four provenance views, driven by one loaded record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    /// Journey timeline (the default tab)
    #[default]
    Timeline,

    /// Location map
    Map,

    /// Farmer profile
    Farmer,

    /// Lab reports
    Reports,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 4] = [Tab::Timeline, Tab::Map, Tab::Farmer, Tab::Reports];

    /// Get the tab name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Timeline => "timeline",
            Tab::Map => "map",
            Tab::Farmer => "farmer",
            Tab::Reports => "reports",
        }
    }

    /// Parse a tab from a string (internal use)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "timeline" => Some(Tab::Timeline),
            "map" => Some(Tab::Map),
            "farmer" => Some(Tab::Farmer),
            "reports" => Some(Tab::Reports),
            _ => None,
        }
    }

    /// Human-readable tab label
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Timeline => "Journey Timeline",
            Tab::Map => "Location Map",
            Tab::Farmer => "Farmer Profile",
            Tab::Reports => "Lab Reports",
        }
    }
}

impl std::str::FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid tab: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_timeline() {
        assert_eq!(Tab::default(), Tab::Timeline);
    }

    #[test]
    fn test_tab_roundtrip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::parse(tab.as_str()), Some(tab));
        }
        assert_eq!(Tab::parse("summary"), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Tab::Timeline.label(), "Journey Timeline");
        assert_eq!(Tab::Reports.label(), "Lab Reports");
    }
}
