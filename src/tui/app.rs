//! Application state for the cloud-deps TUI.

use super::constants::STATUS_MESSAGE_SECS;
use super::state::{ListNavigation, ListState};
use super::viewmodel::{FilterState, GeographyFilter, OverlayState, StatusKind, StatusMessage};
use crate::detect::CloudDetector;
use crate::error::Result;
use crate::explorer::{AddOutcome, DependencyExplorer, DetectionRequest, RegionsExplorer};
use crate::model::{Company, ProviderId, Region};
use ratatui::layout::{Position, Rect};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Which explorer is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Dependencies,
    Regions,
}

impl ActiveView {
    pub const ALL: [Self; 2] = [Self::Dependencies, Self::Regions];

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dependencies => Self::Regions,
            Self::Regions => Self::Dependencies,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dependencies => "Cloud Dependencies",
            Self::Regions => "AWS Regions",
        }
    }
}

/// Focused panel of the dependency view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Search,
    AddUrl,
    Pills,
    #[default]
    Grid,
}

impl Focus {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Search => Self::AddUrl,
            Self::AddUrl => Self::Pills,
            Self::Pills => Self::Grid,
            Self::Grid => Self::Search,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Search => Self::Grid,
            Self::AddUrl => Self::Search,
            Self::Pills => Self::AddUrl,
            Self::Grid => Self::Pills,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::AddUrl => "add",
            Self::Pills => "pills",
            Self::Grid => "grid",
        }
    }
}

/// Result of a detection run on the worker thread.
struct DetectionMessage {
    request: DetectionRequest,
    result: Result<ProviderId>,
}

/// Screen regions recorded during render, used for mouse hit-testing.
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    pub pills: Vec<(Rect, ProviderId)>,
    pub tabs: Vec<(Rect, ActiveView)>,
    pub panels: Vec<(Rect, Focus)>,
}

impl HitAreas {
    pub fn clear(&mut self) {
        self.pills.clear();
        self.tabs.clear();
        self.panels.clear();
    }

    fn find<T: Copy>(areas: &[(Rect, T)], column: u16, row: u16) -> Option<T> {
        let pos = Position::new(column, row);
        areas
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|&(_, value)| value)
    }

    #[must_use]
    pub fn pill_at(&self, column: u16, row: u16) -> Option<ProviderId> {
        Self::find(&self.pills, column, row)
    }

    #[must_use]
    pub fn tab_at(&self, column: u16, row: u16) -> Option<ActiveView> {
        Self::find(&self.tabs, column, row)
    }

    #[must_use]
    pub fn panel_at(&self, column: u16, row: u16) -> Option<Focus> {
        Self::find(&self.panels, column, row)
    }
}

/// Main application state.
pub struct App {
    pub active_view: ActiveView,
    pub explorer: DependencyExplorer,
    pub regions: RegionsExplorer,

    pub focus: Focus,
    /// Keyboard cursor over the provider pills
    pub pill_cursor: usize,
    /// Selected card in the logo grid
    pub grid_nav: ListState,
    /// Cards per grid row, updated on render
    pub grid_columns: usize,

    pub regions_nav: ListState,
    pub geography: FilterState<GeographyFilter>,
    pub regions_search_active: bool,

    pub overlay: OverlayState,
    pub status: StatusMessage,
    pub hit_areas: HitAreas,
    pub mouse_enabled: bool,
    pub should_quit: bool,
    pub tick: u64,

    detector: Arc<dyn CloudDetector>,
    detection_tx: mpsc::Sender<DetectionMessage>,
    detection_rx: mpsc::Receiver<DetectionMessage>,
}

impl App {
    pub fn new(
        companies: Vec<Company>,
        regions: Vec<Region>,
        detector: Arc<dyn CloudDetector>,
        debounce: Duration,
    ) -> Self {
        let (detection_tx, detection_rx) = mpsc::channel();
        let explorer = DependencyExplorer::with_debounce(companies, debounce);
        let grid_total = explorer.company_count();
        let regions = RegionsExplorer::new(regions);
        let region_total = regions.regions().len();

        Self {
            active_view: ActiveView::default(),
            explorer,
            regions,
            focus: Focus::default(),
            pill_cursor: 0,
            grid_nav: ListState::with_total(grid_total),
            grid_columns: 1,
            regions_nav: ListState::with_total(region_total),
            geography: FilterState::new(),
            regions_search_active: false,
            overlay: OverlayState::new(),
            status: StatusMessage::with_auto_clear(Duration::from_secs(STATUS_MESSAGE_SECS)),
            hit_areas: HitAreas::default(),
            mouse_enabled: true,
            should_quit: false,
            tick: 0,
            detector,
            detection_tx,
            detection_rx,
        }
    }

    // ------------------------------------------------------------------
    // View switching
    // ------------------------------------------------------------------

    /// Switch to `view`. Leaving the dependency view drops any in-flight
    /// detection.
    pub fn show_view(&mut self, view: ActiveView) {
        if view == self.active_view {
            return;
        }
        if self.active_view == ActiveView::Dependencies {
            self.explorer.discard_in_flight();
            self.explorer.set_hovered(None);
        }
        tracing::debug!(view = view.title(), "switching view");
        self.active_view = view;
        self.overlay.close();
    }

    pub fn toggle_view(&mut self) {
        self.show_view(self.active_view.toggled());
    }

    // ------------------------------------------------------------------
    // Event loop hooks
    // ------------------------------------------------------------------

    /// Advance timers and apply finished detections.
    pub fn on_tick(&mut self, now: Instant) {
        self.tick = self.tick.wrapping_add(1);
        self.status.expire(now);
        self.explorer.tick(now);
        while let Ok(message) = self.detection_rx.try_recv() {
            self.apply_detection(message);
        }
    }

    fn apply_detection(&mut self, message: DetectionMessage) {
        let outcome = self
            .explorer
            .complete_add(&message.request, message.result);
        if let AddOutcome::Added(company) = outcome {
            self.status.set_kind(
                format!(
                    "Added {} ({})",
                    company.name,
                    company.provider.display_name()
                ),
                StatusKind::Success,
            );
        }
    }

    /// Submit the add-url field, or the search text when `from_search`.
    ///
    /// Detection runs on a worker thread; its result arrives on a later tick.
    pub fn submit_add(&mut self, from_search: bool) {
        let outcome = if from_search {
            self.explorer.begin_add_from_search()
        } else {
            self.explorer.begin_add()
        };

        if let AddOutcome::Pending(request) = outcome {
            let detector = Arc::clone(&self.detector);
            let tx = self.detection_tx.clone();
            thread::spawn(move || {
                let result = detector.detect(&request.url);
                // Receiver is gone when the app has quit
                let _ = tx.send(DetectionMessage { request, result });
            });
        }
    }

    // ------------------------------------------------------------------
    // Dependency view helpers
    // ------------------------------------------------------------------

    /// Keep cursors in range after the underlying lists changed.
    pub fn sync_selection(&mut self) {
        self.grid_nav
            .resize(self.explorer.displayed_companies().len());
        let pills = self.explorer.pills().len();
        if pills == 0 {
            self.pill_cursor = 0;
        } else if self.pill_cursor >= pills {
            self.pill_cursor = pills - 1;
        }
        self.regions_nav.resize(self.regions.filtered().len());
    }

    /// Company under the grid cursor.
    #[must_use]
    pub fn selected_company(&self) -> Option<Company> {
        self.explorer
            .displayed_companies()
            .get(self.grid_nav.selected())
            .map(|c| (*c).clone())
    }

    /// Provider under the pill cursor.
    #[must_use]
    pub fn pill_under_cursor(&self) -> Option<ProviderId> {
        self.explorer.pills().get(self.pill_cursor).copied()
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus == Focus::Pills && focus != Focus::Pills {
            self.explorer.set_hovered(None);
        }
        self.focus = focus;
        if focus == Focus::Pills {
            self.explorer.set_hovered(self.pill_under_cursor());
        }
    }

    /// Move the pill cursor by one and hover the pill under it.
    pub fn move_pill_cursor(&mut self, forward: bool) {
        let count = self.explorer.pills().len();
        if count == 0 {
            return;
        }
        self.pill_cursor = if forward {
            (self.pill_cursor + 1) % count
        } else {
            (self.pill_cursor + count - 1) % count
        };
        self.explorer.set_hovered(self.pill_under_cursor());
    }

    /// Toggle the provider at position `index` in [`ProviderId::ALL`].
    pub fn toggle_provider_by_index(&mut self, index: usize) {
        if let Some(&provider) = ProviderId::ALL.get(index) {
            self.explorer.toggle_selected(provider);
            self.grid_nav.go_first();
        }
    }

    // ------------------------------------------------------------------
    // Regions view helpers
    // ------------------------------------------------------------------

    pub fn cycle_geography(&mut self, forward: bool) {
        if forward {
            self.geography.next();
        } else {
            self.geography.prev();
        }
        self.regions.set_geography(self.geography.current.0);
        self.regions_nav.go_first();
        self.status
            .set(format!("Geography: {}", self.geography.display_name()));
    }

    /// Drop the geography filter.
    pub fn clear_geography(&mut self) {
        self.geography.reset();
        self.regions.set_geography(None);
        self.regions_nav.go_first();
    }

    /// Region under the table cursor.
    #[must_use]
    pub fn selected_region(&self) -> Option<&Region> {
        self.regions
            .filtered()
            .get(self.regions_nav.selected())
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Geography;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticDetector {
        provider: ProviderId,
        calls: AtomicUsize,
    }

    impl CloudDetector for StaticDetector {
        fn detect(&self, _url: &str) -> Result<ProviderId> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.provider)
        }

        fn name(&self) -> &'static str {
            "static"
        }
    }

    fn app_with(detector: Arc<StaticDetector>) -> App {
        App::new(
            vec![
                Company::new("Netflix", "NFLX", "netflix.com", ProviderId::Aws),
                Company::new("Spotify", "SPOT", "spotify.com", ProviderId::Gcp),
            ],
            vec![Region {
                code: "eu-west-1".to_string(),
                name: "Europe (Ireland)".to_string(),
                location: "Dublin".to_string(),
                geography: Geography::Europe,
                launch_year: 2007,
                availability_zones: 3,
                opt_in_required: false,
            }],
            detector,
            Duration::from_millis(500),
        )
    }

    fn detector() -> Arc<StaticDetector> {
        Arc::new(StaticDetector {
            provider: ProviderId::Azure,
            calls: AtomicUsize::new(0),
        })
    }

    fn wait_for_detection(app: &mut App) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while app.explorer.is_detecting() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
            app.on_tick(Instant::now());
        }
    }

    #[test]
    fn test_submit_runs_detection_in_background() {
        let mut app = app_with(detector());
        app.explorer.set_pending_url("https://www.stripe.com");
        app.submit_add(false);
        assert!(app.explorer.is_detecting());

        wait_for_detection(&mut app);

        assert!(!app.explorer.is_detecting());
        assert_eq!(app.explorer.company_count(), 3);
        assert_eq!(app.status.peek(), Some("Added Stripe (Azure)"));
    }

    #[test]
    fn test_double_submit_sends_one_request() {
        let detector = detector();
        let mut app = app_with(Arc::clone(&detector));
        app.explorer.set_pending_url("stripe.com");
        app.submit_add(false);
        app.submit_add(false);
        wait_for_detection(&mut app);
        assert_eq!(detector.calls.load(Ordering::SeqCst), 1);
        assert_eq!(app.explorer.company_count(), 3);
    }

    #[test]
    fn test_switching_view_discards_detection() {
        let mut app = app_with(detector());
        app.explorer.set_pending_url("stripe.com");
        app.submit_add(false);
        app.toggle_view();
        assert_eq!(app.active_view, ActiveView::Regions);
        assert!(!app.explorer.is_detecting());

        thread::sleep(Duration::from_millis(50));
        app.on_tick(Instant::now());
        assert_eq!(app.explorer.company_count(), 2);
    }

    #[test]
    fn test_pill_cursor_hovers() {
        let mut app = app_with(detector());
        app.set_focus(Focus::Pills);
        assert_eq!(app.explorer.hovered_provider(), Some(ProviderId::Aws));
        app.move_pill_cursor(true);
        assert_eq!(app.explorer.hovered_provider(), Some(ProviderId::Gcp));
        app.move_pill_cursor(true);
        assert_eq!(app.explorer.hovered_provider(), Some(ProviderId::Aws));
        app.set_focus(Focus::Grid);
        assert_eq!(app.explorer.hovered_provider(), None);
    }

    #[test]
    fn test_geography_cycle_updates_regions() {
        let mut app = app_with(detector());
        app.cycle_geography(true);
        assert_eq!(app.regions.geography(), Some(Geography::NorthAmerica));
        app.sync_selection();
        assert!(app.selected_region().is_none());

        app.cycle_geography(true);
        app.cycle_geography(true);
        assert_eq!(app.regions.geography(), Some(Geography::Europe));
        app.sync_selection();
        assert_eq!(
            app.selected_region().map(|r| r.code.as_str()),
            Some("eu-west-1")
        );
    }

    #[test]
    fn test_hit_areas() {
        let mut areas = HitAreas::default();
        areas.pills.push((Rect::new(10, 5, 8, 1), ProviderId::Gcp));
        assert_eq!(areas.pill_at(12, 5), Some(ProviderId::Gcp));
        assert_eq!(areas.pill_at(18, 5), None);
        assert_eq!(areas.pill_at(12, 6), None);
    }
}
