//! Popup overlays drawn over the active view.

/// Popups the dashboard can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    /// Key bindings for both views
    Help,
    /// Provider color and logo legend
    Legend,
}

/// At most one overlay is open; opening another replaces it.
#[derive(Debug, Clone, Default)]
pub struct OverlayState {
    current: Option<OverlayKind>,
}

impl OverlayState {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Any key or click closes an open overlay first.
    pub fn has_overlay(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_showing(&self, kind: OverlayKind) -> bool {
        self.current == Some(kind)
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    /// Open `kind`, or close it if it is already open.
    pub fn toggle(&mut self, kind: OverlayKind) {
        self.current = (self.current != Some(kind)).then_some(kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_mutual_exclusion() {
        let mut overlay = OverlayState::new();
        assert!(!overlay.has_overlay());

        overlay.toggle(OverlayKind::Help);
        assert!(overlay.is_showing(OverlayKind::Help));

        overlay.toggle(OverlayKind::Legend);
        assert!(overlay.is_showing(OverlayKind::Legend));
        assert!(!overlay.is_showing(OverlayKind::Help));

        overlay.close();
        assert!(!overlay.has_overlay());
    }

    #[test]
    fn test_overlay_toggle_closes() {
        let mut overlay = OverlayState::new();
        overlay.toggle(OverlayKind::Help);
        overlay.toggle(OverlayKind::Help);
        assert!(!overlay.has_overlay());
    }
}
