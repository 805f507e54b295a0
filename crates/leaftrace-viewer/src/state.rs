//! Viewer state machine.

use crate::events::{EventBus, Subscription, ViewerEvent};
use crate::tab::Tab;
use leaftrace_domain::{ProductId, ProvenanceRecord, TraceLocation};
use leaftrace_ledger::{LookupError, ProvenanceSource};
use std::time::Duration;
use tokio::time::sleep;

/// Simulated record-fetch delay applied before every lookup.
pub const FETCH_DELAY: Duration = Duration::from_secs(2);

/// Load phase of the viewer.
///
/// Every identifier change starts a fresh viewer in `Loading`. The mock
/// source always resolves, so `NotFound` is reachable only through a
/// source that actually misses - but it renders, and it has no retry
/// action.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Waiting out the simulated fetch delay
    Loading,

    /// Record resolved and owned by the viewer
    Loaded(ProvenanceRecord),

    /// The source had no record for the code
    NotFound,
}

/// Display mode of the reports tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportViewMode {
    /// Card list (the default)
    #[default]
    List,

    /// Sidebar plus full preview
    Preview,
}

impl ReportViewMode {
    /// Get the mode name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportViewMode::List => "list",
            ReportViewMode::Preview => "preview",
        }
    }

    /// Parse a mode from a string (internal use)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "list" => Some(ReportViewMode::List),
            "preview" => Some(ReportViewMode::Preview),
            _ => None,
        }
    }
}

/// The provenance viewer for one identifier.
///
/// Owns the record for the lifetime of one lookup. Tab selection and the
/// per-tab selections are transient local state; switching tabs discards
/// the state of the tab being left, mirroring the original screens being
/// torn down on switch.
#[derive(Debug)]
pub struct Viewer {
    product: ProductId,
    phase: Phase,
    tab: Tab,
    map_selection: Option<usize>,
    report_view: ReportViewMode,
    report_selection: Option<usize>,
    events: EventBus,
}

impl Viewer {
    /// Create a viewer for an identifier, in `Loading` with the timeline
    /// tab active.
    pub fn new(product: ProductId) -> Self {
        Self {
            product,
            phase: Phase::Loading,
            tab: Tab::default(),
            map_selection: None,
            report_view: ReportViewMode::default(),
            report_selection: None,
            events: EventBus::new(),
        }
    }

    /// The identifier this viewer was created for.
    pub fn product(&self) -> &ProductId {
        &self.product
    }

    /// Current load phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The loaded record, if any.
    pub fn record(&self) -> Option<&ProvenanceRecord> {
        match &self.phase {
            Phase::Loaded(record) => Some(record),
            _ => None,
        }
    }

    /// Currently selected tab.
    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Register a listener for viewer events; the listener lives until the
    /// returned guard is dropped.
    pub fn subscribe(&self, listener: impl Fn(&ViewerEvent) + Send + 'static) -> Subscription {
        self.events.subscribe(listener)
    }

    /// Wait out the simulated fetch delay, then resolve the record.
    ///
    /// A lookup miss transitions to `NotFound` instead of failing: the
    /// viewer recovers every error locally.
    pub async fn load<S: ProvenanceSource>(&mut self, source: &S, delay: Duration) {
        sleep(delay).await;

        self.phase = match source.lookup(&self.product) {
            Ok(record) => Phase::Loaded(record),
            Err(LookupError::NotFound { .. }) => Phase::NotFound,
        };
        self.events.emit(&ViewerEvent::PhaseChanged);
    }

    /// Select a tab. Re-selecting the active tab is a no-op; switching
    /// discards the transient state of the tab being left. Never touches
    /// the record.
    pub fn select_tab(&mut self, tab: Tab) {
        if tab == self.tab {
            return;
        }

        self.map_selection = None;
        self.report_view = ReportViewMode::default();
        self.report_selection = None;
        self.tab = tab;
        self.events.emit(&ViewerEvent::TabSelected(tab));
    }

    // --- Map tab ---

    /// Index of the selected map location, if any.
    pub fn map_selection(&self) -> Option<usize> {
        self.map_selection
    }

    /// The selected map location, if any.
    pub fn selected_location(&self) -> Option<&TraceLocation> {
        let index = self.map_selection?;
        self.record()?.map.locations.get(index)
    }

    /// Toggle selection of a map location: selecting an unselected card
    /// selects it, selecting the already-selected card clears it.
    /// Ignored (returns `false`) off the map tab, before load, and for
    /// out-of-range indices.
    pub fn toggle_location(&mut self, index: usize) -> bool {
        if self.tab != Tab::Map {
            return false;
        }
        let Some(record) = self.record() else {
            return false;
        };
        if index >= record.map.locations.len() {
            return false;
        }

        self.map_selection = if self.map_selection == Some(index) {
            None
        } else {
            Some(index)
        };
        self.events.emit(&ViewerEvent::LocationSelected(self.map_selection));
        true
    }

    /// Clear the map selection (the close control).
    pub fn clear_location(&mut self) {
        if self.map_selection.take().is_some() {
            self.events.emit(&ViewerEvent::LocationSelected(None));
        }
    }

    // --- Reports tab ---

    /// Current reports display mode.
    pub fn report_view(&self) -> ReportViewMode {
        self.report_view
    }

    /// Index of the selected report, if any.
    pub fn report_selection(&self) -> Option<usize> {
        self.report_selection
    }

    /// Switch the reports tab between list and preview display.
    /// Ignored off the reports tab.
    pub fn set_report_view(&mut self, mode: ReportViewMode) -> bool {
        if self.tab != Tab::Reports {
            return false;
        }
        if self.report_view != mode {
            self.report_view = mode;
            self.events.emit(&ViewerEvent::ViewModeChanged(mode));
        }
        true
    }

    /// Point at a report (opens the modal in list display, drives the
    /// preview pane otherwise). Ignored off the reports tab, before load,
    /// and for out-of-range indices.
    pub fn select_report(&mut self, index: usize) -> bool {
        if self.tab != Tab::Reports {
            return false;
        }
        let Some(record) = self.record() else {
            return false;
        };
        if index >= record.lab_reports.len() {
            return false;
        }

        if self.report_selection != Some(index) {
            self.report_selection = Some(index);
            self.events.emit(&ViewerEvent::ReportSelected(Some(index)));
        }
        true
    }

    /// Clear the report pointer (close the modal / empty the preview).
    pub fn clear_report(&mut self) {
        if self.report_selection.take().is_some() {
            self.events.emit(&ViewerEvent::ReportSelected(None));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leaftrace_ledger::MockLedger;

    async fn loaded_viewer(code: &str) -> Viewer {
        let mut viewer = Viewer::new(ProductId::new(code));
        viewer.load(&MockLedger::new(), Duration::ZERO).await;
        viewer
    }

    #[tokio::test]
    async fn test_starts_loading_on_timeline_tab() {
        let viewer = Viewer::new(ProductId::new("demobatch123"));

        assert_eq!(*viewer.phase(), Phase::Loading);
        assert_eq!(viewer.tab(), Tab::Timeline);
        assert!(viewer.record().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_waits_out_the_fetch_delay() {
        let mut viewer = Viewer::new(ProductId::new("demobatch123"));
        let start = tokio::time::Instant::now();

        viewer.load(&MockLedger::new(), FETCH_DELAY).await;

        assert_eq!(start.elapsed(), FETCH_DELAY);
        assert!(viewer.record().is_some());
    }

    #[tokio::test]
    async fn test_missing_record_becomes_not_found() {
        struct EmptySource;
        impl ProvenanceSource for EmptySource {
            fn lookup(&self, id: &ProductId) -> Result<ProvenanceRecord, LookupError> {
                Err(LookupError::NotFound {
                    code: id.as_str().to_string(),
                })
            }
        }

        let mut viewer = Viewer::new(ProductId::new("missing"));
        viewer.load(&EmptySource, Duration::ZERO).await;

        assert_eq!(*viewer.phase(), Phase::NotFound);
    }

    #[tokio::test]
    async fn test_tab_selection_is_idempotent_and_pure() {
        let mut viewer = loaded_viewer("BT123456").await;
        let direct = viewer.record().unwrap().lab_reports.clone();

        viewer.select_tab(Tab::Reports);
        viewer.select_tab(Tab::Timeline);
        viewer.select_tab(Tab::Reports);

        assert_eq!(viewer.record().unwrap().lab_reports, direct);
        assert_eq!(viewer.tab(), Tab::Reports);
    }

    #[tokio::test]
    async fn test_location_toggle() {
        let mut viewer = loaded_viewer("BT123456").await;
        viewer.select_tab(Tab::Map);

        assert!(viewer.toggle_location(2));
        assert_eq!(viewer.map_selection(), Some(2));
        assert_eq!(viewer.selected_location().unwrap().name, "Lab Testing");

        // Same card again deselects
        assert!(viewer.toggle_location(2));
        assert_eq!(viewer.map_selection(), None);
    }

    #[tokio::test]
    async fn test_selecting_another_location_moves_the_pointer() {
        let mut viewer = loaded_viewer("BT123456").await;
        viewer.select_tab(Tab::Map);

        viewer.toggle_location(0);
        viewer.toggle_location(3);

        assert_eq!(viewer.map_selection(), Some(3));
    }

    #[tokio::test]
    async fn test_close_clears_location_selection() {
        let mut viewer = loaded_viewer("BT123456").await;
        viewer.select_tab(Tab::Map);

        viewer.toggle_location(1);
        viewer.clear_location();

        assert_eq!(viewer.map_selection(), None);
    }

    #[tokio::test]
    async fn test_out_of_range_selection_is_ignored() {
        let mut viewer = loaded_viewer("BT123456").await;
        viewer.select_tab(Tab::Map);

        assert!(!viewer.toggle_location(99));
        assert_eq!(viewer.map_selection(), None);
    }

    #[tokio::test]
    async fn test_selection_requires_matching_tab() {
        let mut viewer = loaded_viewer("BT123456").await;

        // Timeline tab is active
        assert!(!viewer.toggle_location(0));
        assert!(!viewer.select_report(0));
        assert!(!viewer.set_report_view(ReportViewMode::Preview));
    }

    #[tokio::test]
    async fn test_report_selection_and_view_mode() {
        let mut viewer = loaded_viewer("BT123456").await;
        viewer.select_tab(Tab::Reports);

        assert_eq!(viewer.report_view(), ReportViewMode::List);
        assert!(viewer.set_report_view(ReportViewMode::Preview));
        assert!(viewer.select_report(1));
        assert_eq!(viewer.report_selection(), Some(1));

        viewer.clear_report();
        assert_eq!(viewer.report_selection(), None);
    }

    #[tokio::test]
    async fn test_tab_switch_discards_transient_state() {
        let mut viewer = loaded_viewer("BT123456").await;

        viewer.select_tab(Tab::Map);
        viewer.toggle_location(1);
        viewer.select_tab(Tab::Reports);
        viewer.set_report_view(ReportViewMode::Preview);
        viewer.select_report(0);

        viewer.select_tab(Tab::Timeline);
        viewer.select_tab(Tab::Map);
        assert_eq!(viewer.map_selection(), None);

        viewer.select_tab(Tab::Reports);
        assert_eq!(viewer.report_view(), ReportViewMode::List);
        assert_eq!(viewer.report_selection(), None);
    }

    #[tokio::test]
    async fn test_events_fire_and_subscription_scopes() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let mut viewer = loaded_viewer("BT123456").await;
        let seen = Arc::new(AtomicUsize::new(0));

        {
            let seen_in_listener = Arc::clone(&seen);
            let _sub = viewer.subscribe(move |_| {
                seen_in_listener.fetch_add(1, Ordering::SeqCst);
            });

            viewer.select_tab(Tab::Map);
            viewer.toggle_location(0);
        }

        // Guard dropped: no further deliveries
        viewer.select_tab(Tab::Farmer);
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }
}
