//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use leaftrace_domain::{
    farmer, FarmerProfile, LabReport, MapData, ProvenanceRecord, StatusClass, SustainabilityInfo,
    TimelineStage,
};
use leaftrace_viewer::glyph;
use leaftrace_viewer::{ReportViewMode, Tab};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Whether this formatter renders tables. Tab views are table-only;
    /// JSON and quiet output carry the whole record instead.
    pub fn is_table(&self) -> bool {
        matches!(self.format, OutputFormat::Table)
    }

    /// Format the record header block (product details, ledger hash,
    /// sustainability badges).
    pub fn format_record(&self, record: &ProvenanceRecord) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
            OutputFormat::Quiet => Ok(record.id.to_string()),
            OutputFormat::Table => Ok(self.format_record_table(record)),
        }
    }

    fn format_record_table(&self, record: &ProvenanceRecord) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        builder.push_record(["Product", &record.name]);
        builder.push_record(["Batch Number", &record.batch_number]);
        builder.push_record(["Manufacturer", &record.manufacturer]);
        builder.push_record(["Manufacture Date", &record.manufacture_date]);
        builder.push_record(["Expiry Date", &record.expiry_date]);
        builder.push_record(["Authenticity", record.authenticity.as_str()]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let badge = self.colorize(
            &format!("{} Verified Authentic", glyph::Glyph::Shield.symbol()),
            "green",
        );
        let hash_line = format!(
            "Transaction Hash: {}\n{}",
            record.ledger_hash,
            self.colorize("✓ Verified on the Leaftrace demo ledger", "green")
        );

        format!(
            "{}\n{}\n\n{}\n\n{}",
            badge,
            table,
            hash_line,
            self.format_sustainability(&record.sustainability)
        )
    }

    /// Render one tab view of a loaded record as text.
    pub fn format_tab(
        &self,
        record: &ProvenanceRecord,
        tab: Tab,
        map_selection: Option<usize>,
        report_view: ReportViewMode,
        report_selection: Option<usize>,
    ) -> String {
        let body = match tab {
            Tab::Timeline => self.format_timeline(&record.timeline),
            Tab::Map => self.format_map(&record.map, map_selection),
            Tab::Farmer => self.format_farmer(&record.farmer),
            Tab::Reports => {
                self.format_reports(&record.lab_reports, report_view, report_selection)
            }
        };

        format!("── {} ──\n{}", tab.label(), body)
    }

    fn format_timeline(&self, stages: &[TimelineStage]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["", "Stage", "Status", "Date", "Location", "Details"]);

        for stage in stages {
            let marker = glyph::stage_glyph(&stage.stage).symbol();
            let status = format!(
                "{} {}",
                glyph::status_glyph(stage.status).symbol(),
                stage.status.label()
            );
            builder.push_record([
                marker,
                &stage.stage,
                &status,
                &stage.date,
                &stage.location,
                &stage.details,
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn format_map(&self, map: &MapData, selection: Option<usize>) -> String {
        let mut builder = Builder::default();
        builder.push_record(["#", "", "Location", "Type", "Coordinates"]);

        for (index, location) in map.locations.iter().enumerate() {
            let number = if selection == Some(index) {
                format!("▸{}", index + 1)
            } else {
                format!(" {}", index + 1)
            };
            let coords = format!("{}, {}", location.point.lat, location.point.lng);
            let kind = location.kind.as_str().to_uppercase();
            builder.push_record([
                number.as_str(),
                glyph::location_glyph(location.kind).symbol(),
                &location.name,
                &kind,
                &coords,
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let details = match selection.and_then(|index| map.locations.get(index)) {
            Some(location) => self.colorize(
                &format!(
                    "{} {} — Lat: {}, Lng: {} (type 'close' to dismiss)",
                    glyph::location_glyph(location.kind).symbol(),
                    location.name,
                    location.point.lat,
                    location.point.lng
                ),
                "cyan",
            ),
            None => "Select a location card for details.".to_string(),
        };

        let stats = format!(
            "{} locations · {} traveled · {} total journey time",
            map.locations.len(),
            map.distance_label,
            map.duration_label
        );

        format!("{}\n{}\n{}", table, details, stats)
    }

    fn format_farmer(&self, profile: &FarmerProfile) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "{}  {}\n",
            profile.name.bold_if(self.color_enabled),
            self.colorize("✓ Verified Farmer", "green")
        ));
        out.push_str(&format!(
            "{} {} · {} experience · {} farm · {}\n\n",
            glyph::Glyph::Pin.symbol(),
            profile.location,
            profile.experience,
            profile.farm_size,
            profile.contact
        ));

        out.push_str("Farmer's Story\n");
        out.push_str(&format!("  {}\n\n", profile.story));

        out.push_str("Certifications\n");
        for cert in &profile.certifications {
            out.push_str(&format!(
                "  {} {}\n",
                glyph::Glyph::Shield.symbol(),
                cert
            ));
        }
        out.push('\n');

        out.push_str("Sustainable Practices\n");
        for practice in farmer::sustainable_practices() {
            out.push_str(&format!("  {} — {}\n", practice.title, practice.summary));
        }
        out.push('\n');

        out.push_str("Quality Metrics\n");
        for metric in farmer::quality_metrics() {
            out.push_str(&format!("  {:>4}  {}\n", metric.value, metric.label));
        }
        out.push('\n');

        out.push_str("Community Impact\n");
        for stat in farmer::community_impact() {
            out.push_str(&format!("  {:>4}  {}\n", stat.figure, stat.caption));
        }

        out
    }

    fn format_reports(
        &self,
        reports: &[LabReport],
        mode: ReportViewMode,
        selection: Option<usize>,
    ) -> String {
        match mode {
            ReportViewMode::List => {
                let list = self.format_report_list(reports, selection);
                match selection.and_then(|index| reports.get(index)) {
                    Some(report) => {
                        format!("{}\n\n{}", list, self.format_report_preview(report))
                    }
                    None => list,
                }
            }
            ReportViewMode::Preview => {
                let sidebar = self.format_report_list(reports, selection);
                let preview = match selection.and_then(|index| reports.get(index)) {
                    Some(report) => self.format_report_preview(report),
                    None => "Select a report to preview.".to_string(),
                };
                format!("{}\n\n{}", sidebar, preview)
            }
        }
    }

    fn format_report_list(&self, reports: &[LabReport], selection: Option<usize>) -> String {
        let mut builder = Builder::default();
        builder.push_record(["#", "", "Title", "Type", "Date", "Status"]);

        for (index, report) in reports.iter().enumerate() {
            let number = if selection == Some(index) {
                format!("▸{}", index + 1)
            } else {
                format!(" {}", index + 1)
            };
            let class = report.status_class();
            let status = self.colorize(
                &format!(
                    "{} {}",
                    glyph::status_class_glyph(class).symbol(),
                    report.status
                ),
                status_color(class),
            );
            builder.push_record([
                number.as_str(),
                glyph::report_kind_glyph(report.kind).symbol(),
                &report.title,
                report.kind.as_str(),
                &report.date,
                &status,
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn format_report_preview(&self, report: &LabReport) -> String {
        let class = report.status_class();
        let mut out = String::new();

        out.push_str(&format!("{}\n", report.title.bold_if(self.color_enabled)));
        out.push_str(&format!(
            "Report ID: {} · Date: {}\n",
            report.display_id(),
            report.date
        ));
        out.push_str(&format!(
            "Sample ID: {} · Testing Method: {} · Accreditation: {}\n",
            report.sample_id,
            leaftrace_domain::report::TESTING_METHOD,
            leaftrace_domain::report::ACCREDITATION
        ));
        out.push_str(&format!(
            "Result: {}\n\n",
            self.colorize(&report.status, status_color(class))
        ));

        let mut builder = Builder::default();
        builder.push_record(["Parameter", "Result", "Limit", "Status"]);
        for row in report.kind.parameters() {
            builder.push_record([
                row.parameter,
                row.result,
                row.limit,
                &self.colorize(row.verdict, "green"),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        out.push_str(&table.to_string());

        out.push_str(&format!(
            "\n{} Certified by Accredited Laboratory\n",
            glyph::Glyph::Shield.symbol()
        ));
        out
    }

    fn format_sustainability(&self, info: &SustainabilityInfo) -> String {
        let mut out = String::new();

        out.push_str("Sustainability Certifications\n");
        for cert in &info.certifications {
            let color = glyph::badge_color(&cert.name, cert.verified);
            let state = if cert.verified {
                self.colorize("Verified", color)
            } else {
                self.colorize("Pending", color)
            };
            out.push_str(&format!(
                "  {} {:<20} {}\n",
                glyph::badge_glyph(&cert.name).symbol(),
                cert.name,
                state
            ));
        }

        let metrics = &info.metrics;
        out.push_str("\nEnvironmental Impact\n");
        out.push_str(&format!(
            "  Carbon Footprint: {} per unit\n",
            metrics.carbon_footprint
        ));
        out.push_str(&format!("  Water Usage: {}\n", metrics.water_usage));
        out.push_str(&format!(
            "  Sustainability Score: {}/100 (Grade {})\n",
            metrics.score,
            metrics.grade()
        ));

        out
    }

    /// Stubbed download acknowledgment; performs no I/O.
    pub fn download_stub(&self, report: &LabReport) -> String {
        self.info(&format!(
            "Downloading '{}'... (demo only, no file is written)",
            report.title
        ))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" | "orange" => text.yellow().to_string(),
            "cyan" | "teal" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            "gray" => text.bright_black().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Color name for a classified report status.
fn status_color(class: StatusClass) -> &'static str {
    match class {
        StatusClass::Success => "green",
        StatusClass::Error => "red",
        StatusClass::Info => "blue",
    }
}

trait BoldIf {
    fn bold_if(&self, enabled: bool) -> String;
}

impl BoldIf for String {
    fn bold_if(&self, enabled: bool) -> String {
        if enabled {
            self.bold().to_string()
        } else {
            self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leaftrace_domain::ProductId;
    use leaftrace_ledger::generate_record;

    fn plain_formatter() -> Formatter {
        Formatter::new(OutputFormat::Table, false)
    }

    fn test_record() -> ProvenanceRecord {
        generate_record(&ProductId::new("BT123456"))
    }

    #[test]
    fn test_record_table_contains_header_fields() {
        let output = plain_formatter().format_record(&test_record()).unwrap();

        assert!(output.contains("BATCH-BT123456"));
        assert!(output.contains("AyurVeda Naturals Pvt. Ltd."));
        assert!(output.contains("Sustainability Certifications"));
        assert!(output.contains("92/100 (Grade A+)"));
    }

    #[test]
    fn test_json_format_emits_the_whole_record() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_record(&test_record()).unwrap();

        assert!(output.contains("\"batch_number\""));
        assert!(output.contains("\"timeline\""));
    }

    #[test]
    fn test_quiet_format_is_just_the_identifier() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_record(&test_record()).unwrap();

        assert_eq!(output, "BT123456");
    }

    #[test]
    fn test_timeline_tab_lists_all_stages_in_order() {
        let record = test_record();
        let output = plain_formatter().format_tab(
            &record,
            Tab::Timeline,
            None,
            ReportViewMode::List,
            None,
        );

        let harvest = output.find("Harvest").unwrap();
        let distribution = output.find("Distribution").unwrap();
        assert!(harvest < distribution);
        assert!(output.contains("Completed"));
    }

    #[test]
    fn test_map_tab_marks_the_selection() {
        let record = test_record();
        let output =
            plain_formatter().format_tab(&record, Tab::Map, Some(2), ReportViewMode::List, None);

        assert!(output.contains("▸3"));
        assert!(output.contains("Lab Testing"));
        assert!(output.contains("~2,500 km"));
    }

    #[test]
    fn test_reports_preview_placeholder_without_selection() {
        let record = test_record();
        let output = plain_formatter().format_tab(
            &record,
            Tab::Reports,
            None,
            ReportViewMode::Preview,
            None,
        );

        assert!(output.contains("Select a report to preview."));
    }

    #[test]
    fn test_report_preview_shows_parameter_table() {
        let record = test_record();
        let output = plain_formatter().format_tab(
            &record,
            Tab::Reports,
            None,
            ReportViewMode::Preview,
            Some(2),
        );

        assert!(output.contains("Curcumin Content"));
        assert!(output.contains("SAMPLE-"));
        assert!(output.contains("HPLC Analysis"));
    }

    #[test]
    fn test_farmer_tab_contains_profile_and_fixed_content() {
        let record = test_record();
        let output =
            plain_formatter().format_tab(&record, Tab::Farmer, None, ReportViewMode::List, None);

        assert!(output.contains("Rajesh Kumar"));
        assert!(output.contains("Organic Farming"));
        assert!(output.contains("Local Jobs Created"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = plain_formatter();
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.error("bad"), "✗ bad");
    }
}
