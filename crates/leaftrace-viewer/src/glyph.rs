//! Glyph lookup tables.
//!
//! Every icon-per-category decision lives here as a table from the
//! category to a [`Glyph`] variant, with an explicit default arm for the
//! string-keyed lookups. Views never compare category strings themselves.

use leaftrace_domain::{LocationKind, ReportKind, StageStatus, StatusClass};

/// A visual variant selected for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// Fresh produce / harvest
    Leaf,
    /// Transport
    Truck,
    /// Lab testing
    Beaker,
    /// Protection / certification
    Shield,
    /// Paperwork
    Document,
    /// Wide distribution
    Globe,
    /// Completion marker
    Check,
    /// In-progress marker
    Clock,
    /// Attention marker
    Exclamation,
    /// Grain field
    Sheaf,
    /// Parcel
    Package,
    /// Microscope
    Microscope,
    /// Machinery
    Gear,
    /// Map marker (default for locations)
    Pin,
    /// Award
    Trophy,
    /// Potency
    Bolt,
    /// Generic report (default for report kinds)
    Clipboard,
    /// Fair-trade heart
    Heart,
    /// Rating star
    Star,
}

impl Glyph {
    /// The printable symbol for this glyph.
    pub fn symbol(&self) -> &'static str {
        match self {
            Glyph::Leaf => "🌿",
            Glyph::Truck => "🚚",
            Glyph::Beaker => "🧪",
            Glyph::Shield => "🛡",
            Glyph::Document => "📄",
            Glyph::Globe => "🌐",
            Glyph::Check => "✓",
            Glyph::Clock => "⏳",
            Glyph::Exclamation => "❗",
            Glyph::Sheaf => "🌾",
            Glyph::Package => "📦",
            Glyph::Microscope => "🔬",
            Glyph::Gear => "⚙",
            Glyph::Pin => "📍",
            Glyph::Trophy => "🏆",
            Glyph::Bolt => "⚡",
            Glyph::Clipboard => "📋",
            Glyph::Heart => "💚",
            Glyph::Star => "⭐",
        }
    }
}

/// Glyph for a timeline stage, keyed by stage name.
pub fn stage_glyph(stage: &str) -> Glyph {
    match stage.to_lowercase().as_str() {
        "harvest" => Glyph::Leaf,
        "collection" => Glyph::Truck,
        "lab testing" => Glyph::Beaker,
        "processing" => Glyph::Shield,
        "packaging" => Glyph::Document,
        "distribution" => Glyph::Globe,
        _ => Glyph::Pin,
    }
}

/// Glyph for a stage's completion status.
pub fn status_glyph(status: StageStatus) -> Glyph {
    match status {
        StageStatus::Completed => Glyph::Check,
        StageStatus::Pending => Glyph::Clock,
    }
}

/// Glyph for a map location kind.
pub fn location_glyph(kind: LocationKind) -> Glyph {
    match kind {
        LocationKind::Farm => Glyph::Sheaf,
        LocationKind::Collection => Glyph::Package,
        LocationKind::Lab => Glyph::Microscope,
        LocationKind::Processing => Glyph::Gear,
        LocationKind::Distribution => Glyph::Truck,
    }
}

/// Marker color (hex) for a map location kind.
pub fn location_color(kind: LocationKind) -> &'static str {
    match kind {
        LocationKind::Farm => "#22c55e",
        LocationKind::Collection => "#3b82f6",
        LocationKind::Lab => "#f59e0b",
        LocationKind::Processing => "#8b5cf6",
        LocationKind::Distribution => "#ef4444",
    }
}

/// Glyph for a lab-report kind.
pub fn report_kind_glyph(kind: ReportKind) -> Glyph {
    match kind {
        ReportKind::Quality => Glyph::Trophy,
        ReportKind::Safety => Glyph::Shield,
        ReportKind::Potency => Glyph::Bolt,
    }
}

/// Glyph for a classified report status.
pub fn status_class_glyph(class: StatusClass) -> Glyph {
    match class {
        StatusClass::Success => Glyph::Check,
        StatusClass::Error => Glyph::Exclamation,
        StatusClass::Info => Glyph::Beaker,
    }
}

/// Glyph for a sustainability certification badge, keyed by name.
pub fn badge_glyph(name: &str) -> Glyph {
    match name.to_lowercase().as_str() {
        "usda organic" => Glyph::Leaf,
        "fair trade" => Glyph::Heart,
        "carbon neutral" => Glyph::Globe,
        "rainforest alliance" => Glyph::Star,
        _ => Glyph::Shield,
    }
}

/// Badge color name for a certification; unverified badges are always
/// gray.
pub fn badge_color(name: &str, verified: bool) -> &'static str {
    if !verified {
        return "gray";
    }

    match name.to_lowercase().as_str() {
        "usda organic" => "green",
        "fair trade" => "blue",
        "carbon neutral" => "teal",
        "rainforest alliance" => "orange",
        _ => "green",
    }
}
