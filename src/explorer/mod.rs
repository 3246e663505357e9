//! Dependency Explorer state and its derived views.
//!
//! [`DependencyExplorer`] owns everything the dependency view mutates: the
//! session's added companies, the search text, the provider selection and
//! hover, the pending add-url text and the detection flag. All views
//! (filtered list, counts, pie data, title) are recomputed from that state
//! on demand, so they can never drift out of sync with it.
//!
//! # Example
//!
//! ```
//! use cloud_deps::data::builtin_companies;
//! use cloud_deps::explorer::DependencyExplorer;
//! use cloud_deps::model::ProviderId;
//!
//! let mut explorer = DependencyExplorer::new(builtin_companies());
//! explorer.toggle_selected(ProviderId::Azure);
//! assert!(explorer
//!     .filtered_companies()
//!     .iter()
//!     .all(|c| c.provider == ProviderId::Azure));
//! ```

mod add;
mod debounce;
mod domain;
pub mod regions;

pub use add::{AddOutcome, DetectionRequest, DETECT_FAILED_MESSAGE, DUPLICATE_MESSAGE};
pub use debounce::Debouncer;
pub use domain::{display_name_from_domain, looks_like_url, normalize_domain};
pub use regions::{GeographyCount, RegionsExplorer};

use crate::model::{Company, ProviderId};
use indexmap::IndexMap;
use serde::Serialize;
use std::time::{Duration, Instant};

/// Delay between the last keystroke and arming the add-url field.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// One pie chart slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieSlice {
    pub provider: ProviderId,
    pub count: usize,
    pub color: &'static str,
}

impl PieSlice {
    /// Share of `total` as a percentage, rounded to the nearest integer.
    #[must_use]
    pub fn percent_of(&self, total: usize) -> u32 {
        percent(self.count, total)
    }
}

pub(crate) fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    #[allow(clippy::cast_precision_loss)]
    let ratio = part as f64 / total as f64 * 100.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = ratio.round() as u32;
    rounded
}

/// State of the Dependency Explorer view.
#[derive(Debug, Clone)]
pub struct DependencyExplorer {
    builtin: Vec<Company>,
    added: Vec<Company>,
    search: String,
    selected: Option<ProviderId>,
    hovered: Option<ProviderId>,
    pending_url: String,
    detecting: bool,
    error: Option<String>,
    /// Bumped whenever an in-flight detection must be ignored
    generation: u64,
    debounce: Debouncer<String>,
}

impl DependencyExplorer {
    #[must_use]
    pub fn new(builtin: Vec<Company>) -> Self {
        Self::with_debounce(builtin, DEFAULT_DEBOUNCE)
    }

    #[must_use]
    pub fn with_debounce(builtin: Vec<Company>, delay: Duration) -> Self {
        Self {
            builtin,
            added: Vec::new(),
            search: String::new(),
            selected: None,
            hovered: None,
            pending_url: String::new(),
            detecting: false,
            error: None,
            generation: 0,
            debounce: Debouncer::new(delay),
        }
    }

    // ------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------

    /// Built-in companies followed by the ones added this session.
    pub fn all_companies(&self) -> impl Iterator<Item = &Company> + '_ {
        self.builtin.iter().chain(self.added.iter())
    }

    #[must_use]
    pub fn company_count(&self) -> usize {
        self.builtin.len() + self.added.len()
    }

    /// Companies added during this session, in insertion order.
    #[must_use]
    pub fn added_companies(&self) -> &[Company] {
        &self.added
    }

    /// Companies matching both the search text and the selected provider.
    #[must_use]
    pub fn filtered_companies(&self) -> Vec<&Company> {
        let query = self.search.to_lowercase();
        self.all_companies()
            .filter(|c| c.name_matches(&query))
            .filter(|c| self.selected.map_or(true, |p| c.provider == p))
            .collect()
    }

    /// Company count per provider, in first-occurrence order.
    #[must_use]
    pub fn provider_counts(&self) -> IndexMap<ProviderId, usize> {
        let mut counts = IndexMap::new();
        for company in self.all_companies() {
            *counts.entry(company.provider).or_insert(0) += 1;
        }
        counts
    }

    /// Provider counts sorted by count, largest first. Ties keep
    /// first-occurrence order.
    #[must_use]
    pub fn pie_data(&self) -> Vec<PieSlice> {
        let mut slices: Vec<PieSlice> = self
            .provider_counts()
            .into_iter()
            .map(|(provider, count)| PieSlice {
                provider,
                count,
                color: provider.color_hex(),
            })
            .collect();
        // sort_by is stable
        slices.sort_by(|a, b| b.count.cmp(&a.count));
        slices
    }

    /// Providers in pill order (same as the pie).
    #[must_use]
    pub fn pills(&self) -> Vec<ProviderId> {
        self.pie_data().into_iter().map(|s| s.provider).collect()
    }

    /// What the grid shows: every company of the hovered provider, or the
    /// filtered list when nothing is hovered.
    #[must_use]
    pub fn displayed_companies(&self) -> Vec<&Company> {
        match self.hovered {
            Some(provider) => self
                .all_companies()
                .filter(|c| c.provider == provider)
                .collect(),
            None => self.filtered_companies(),
        }
    }

    /// Percentage of all companies on AWS, Azure or GCP.
    #[must_use]
    pub fn big_three_share(&self) -> u32 {
        let big_three = self
            .all_companies()
            .filter(|c| ProviderId::BIG_THREE.contains(&c.provider))
            .count();
        percent(big_three, self.company_count())
    }

    /// Grid heading.
    #[must_use]
    pub fn display_title(&self) -> String {
        match self.hovered.or(self.selected) {
            Some(provider) => format!("{} Companies", provider.display_name()),
            None => "All Companies".to_string(),
        }
    }

    /// Whether some company already uses `domain`.
    #[must_use]
    pub fn contains_domain(&self, domain: &str) -> bool {
        self.all_companies().any(|c| c.domain == domain)
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: impl Into<String>, now: Instant) {
        self.search = text.into();
        self.on_search_changed(now);
    }

    pub fn push_search_char(&mut self, c: char, now: Instant) {
        self.search.push(c);
        self.on_search_changed(now);
    }

    pub fn pop_search_char(&mut self, now: Instant) {
        self.search.pop();
        self.on_search_changed(now);
    }

    /// Arm the add-url debounce when the search text looks like a domain no
    /// company matches; otherwise cancel it.
    fn on_search_changed(&mut self, now: Instant) {
        let query = self.search.to_lowercase();
        let unmatched = !self.all_companies().any(|c| c.name_matches(&query));
        if looks_like_url(&self.search) && unmatched {
            self.debounce.arm(self.search.clone(), now);
        } else {
            self.debounce.cancel();
        }
    }

    /// Advance timers. Returns true when the pending url was armed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debounce.poll(now) {
            Some(text) => {
                tracing::debug!(pending_url = %text, "search text armed add-url field");
                self.pending_url = text;
                true
            }
            None => false,
        }
    }

    /// Empty the search text and drop the provider selection.
    pub fn clear_search(&mut self) {
        self.search.clear();
        self.selected = None;
        self.debounce.cancel();
    }

    // ------------------------------------------------------------------
    // Provider selection and hover
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn selected_provider(&self) -> Option<ProviderId> {
        self.selected
    }

    pub fn set_selected(&mut self, provider: Option<ProviderId>) {
        self.selected = provider;
    }

    /// Select `provider`, or clear the selection if it is already selected.
    pub fn toggle_selected(&mut self, provider: ProviderId) {
        self.selected = if self.selected == Some(provider) {
            None
        } else {
            Some(provider)
        };
    }

    #[must_use]
    pub const fn hovered_provider(&self) -> Option<ProviderId> {
        self.hovered
    }

    pub fn set_hovered(&mut self, provider: Option<ProviderId>) {
        self.hovered = provider;
    }

    /// Reset both the selected and the hovered provider.
    pub fn clear_filter(&mut self) {
        self.selected = None;
        self.hovered = None;
    }

    // ------------------------------------------------------------------
    // Add-url field and detection status
    // ------------------------------------------------------------------

    #[must_use]
    pub fn pending_url(&self) -> &str {
        &self.pending_url
    }

    pub fn set_pending_url(&mut self, text: impl Into<String>) {
        self.pending_url = text.into();
    }

    pub fn push_pending_char(&mut self, c: char) {
        self.pending_url.push(c);
    }

    pub fn pop_pending_char(&mut self) {
        self.pending_url.pop();
    }

    #[must_use]
    pub const fn is_detecting(&self) -> bool {
        self.detecting
    }

    /// Last add-company error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Forget any in-flight detection. Its result will be ignored.
    pub fn discard_in_flight(&mut self) {
        if self.detecting {
            tracing::debug!("discarding in-flight detection");
        }
        self.generation += 1;
        self.detecting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Company> {
        vec![
            Company::new("Netflix", "NFLX", "netflix.com", ProviderId::Aws),
            Company::new("Microsoft", "MSFT", "microsoft.com", ProviderId::Azure),
            Company::new("Spotify", "SPOT", "spotify.com", ProviderId::Gcp),
            Company::new("Airbnb", "ABNB", "airbnb.com", ProviderId::Aws),
            Company::new("Zoom", "ZM", "zoom.us", ProviderId::Oracle),
            Company::new("Snap", "SNAP", "snap.com", ProviderId::Gcp),
        ]
    }

    #[test]
    fn test_empty_explorer_views() {
        let explorer = DependencyExplorer::new(Vec::new());
        assert_eq!(explorer.company_count(), 0);
        assert!(explorer.filtered_companies().is_empty());
        assert!(explorer.pie_data().is_empty());
        assert_eq!(explorer.big_three_share(), 0);
        assert_eq!(explorer.display_title(), "All Companies");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut explorer = DependencyExplorer::new(sample());
        explorer.set_search("NET", Instant::now());
        let names: Vec<_> = explorer
            .filtered_companies()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Netflix"]);
    }

    #[test]
    fn test_search_and_provider_filter_combine() {
        let mut explorer = DependencyExplorer::new(sample());
        explorer.set_search("n", Instant::now());
        explorer.toggle_selected(ProviderId::Aws);
        let names: Vec<_> = explorer
            .filtered_companies()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Netflix", "Airbnb"]);
    }

    #[test]
    fn test_toggle_selected_clears_on_second_press() {
        let mut explorer = DependencyExplorer::new(sample());
        explorer.toggle_selected(ProviderId::Gcp);
        assert_eq!(explorer.selected_provider(), Some(ProviderId::Gcp));
        explorer.toggle_selected(ProviderId::Gcp);
        assert_eq!(explorer.selected_provider(), None);
    }

    #[test]
    fn test_provider_counts_first_occurrence_order() {
        let explorer = DependencyExplorer::new(sample());
        let counts: Vec<_> = explorer.provider_counts().into_iter().collect();
        assert_eq!(
            counts,
            vec![
                (ProviderId::Aws, 2),
                (ProviderId::Azure, 1),
                (ProviderId::Gcp, 2),
                (ProviderId::Oracle, 1),
            ]
        );
    }

    #[test]
    fn test_pie_data_stable_sort() {
        let explorer = DependencyExplorer::new(sample());
        let order: Vec<_> = explorer.pie_data().iter().map(|s| s.provider).collect();
        assert_eq!(
            order,
            vec![
                ProviderId::Aws,
                ProviderId::Gcp,
                ProviderId::Azure,
                ProviderId::Oracle
            ]
        );
        assert_eq!(explorer.pills(), order);
        assert_eq!(explorer.pie_data()[0].color, "#ff9900");
    }

    #[test]
    fn test_big_three_share_rounds() {
        let explorer = DependencyExplorer::new(sample());
        // 5 of 6
        assert_eq!(explorer.big_three_share(), 83);
    }

    #[test]
    fn test_hover_overrides_selection_for_display_only() {
        let mut explorer = DependencyExplorer::new(sample());
        explorer.toggle_selected(ProviderId::Aws);
        explorer.set_search("net", Instant::now());
        explorer.set_hovered(Some(ProviderId::Gcp));

        let shown: Vec<_> = explorer
            .displayed_companies()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(shown, vec!["Spotify", "Snap"]);
        assert_eq!(explorer.display_title(), "Google Cloud Companies");
        assert_eq!(explorer.selected_provider(), Some(ProviderId::Aws));

        explorer.set_hovered(None);
        let shown: Vec<_> = explorer
            .displayed_companies()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(shown, vec!["Netflix"]);
        assert_eq!(explorer.display_title(), "AWS Companies");
    }

    #[test]
    fn test_clear_search_drops_selection() {
        let mut explorer = DependencyExplorer::new(sample());
        explorer.set_search("zoom", Instant::now());
        explorer.toggle_selected(ProviderId::Oracle);
        explorer.clear_search();
        assert_eq!(explorer.search(), "");
        assert_eq!(explorer.selected_provider(), None);
        assert_eq!(explorer.filtered_companies().len(), 6);
    }

    #[test]
    fn test_clear_filter_resets_hover_and_selection() {
        let mut explorer = DependencyExplorer::new(sample());
        explorer.toggle_selected(ProviderId::Aws);
        explorer.set_hovered(Some(ProviderId::Azure));
        explorer.clear_filter();
        assert_eq!(explorer.selected_provider(), None);
        assert_eq!(explorer.hovered_provider(), None);
    }

    #[test]
    fn test_debounce_arms_pending_url() {
        let start = Instant::now();
        let mut explorer = DependencyExplorer::new(sample());
        explorer.set_search("stripe.com", start);

        assert!(!explorer.tick(start + Duration::from_millis(100)));
        assert_eq!(explorer.pending_url(), "");

        assert!(explorer.tick(start + Duration::from_millis(500)));
        assert_eq!(explorer.pending_url(), "stripe.com");
    }

    #[test]
    fn test_debounce_superseded_by_later_keystroke() {
        let start = Instant::now();
        let mut explorer = DependencyExplorer::new(sample());
        explorer.set_search("stripe.co", start);
        explorer.push_search_char('m', start + Duration::from_millis(300));

        assert!(!explorer.tick(start + Duration::from_millis(600)));
        assert!(explorer.tick(start + Duration::from_millis(800)));
        assert_eq!(explorer.pending_url(), "stripe.com");
    }

    #[test]
    fn test_debounce_not_armed_for_matching_name() {
        let start = Instant::now();
        let mut explorer = DependencyExplorer::new(vec![Company::new(
            "Example.com Inc",
            "EXM",
            "example.com",
            ProviderId::Aws,
        )]);
        explorer.set_search("example.com", start);
        assert!(!explorer.tick(start + Duration::from_secs(1)));
        assert_eq!(explorer.pending_url(), "");
    }

    #[test]
    fn test_debounce_cancelled_when_text_stops_looking_like_url() {
        let start = Instant::now();
        let mut explorer = DependencyExplorer::new(sample());
        explorer.set_search("abc.de", start);
        explorer.set_search("abc", start + Duration::from_millis(100));
        assert!(!explorer.tick(start + Duration::from_secs(2)));
    }

    #[test]
    fn test_percent_of_zero_total() {
        let slice = PieSlice {
            provider: ProviderId::Aws,
            count: 3,
            color: ProviderId::Aws.color_hex(),
        };
        assert_eq!(slice.percent_of(0), 0);
        assert_eq!(slice.percent_of(4), 75);
    }
}
