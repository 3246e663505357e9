//! Transient footer messages.

use std::time::{Duration, Instant};

/// How a status message is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Info,
    /// A company was added
    Success,
    /// Something went wrong outside the add-company form
    Warning,
}

impl StatusKind {
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Success => "✓",
            Self::Warning => "!",
        }
    }
}

/// Footer message that replaces the key hints until it expires.
///
/// Examples: "Added Stripe (AWS)", "Theme: light".
#[derive(Debug, Clone, Default)]
pub struct StatusMessage {
    current: Option<(String, StatusKind, Instant)>,
    /// `None` keeps messages until cleared
    lifetime: Option<Duration>,
}

impl StatusMessage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages disappear `lifetime` after they were set.
    #[must_use]
    pub const fn with_auto_clear(lifetime: Duration) -> Self {
        Self {
            current: None,
            lifetime: Some(lifetime),
        }
    }

    pub fn set(&mut self, msg: impl Into<String>) {
        self.set_kind(msg, StatusKind::Info);
    }

    pub fn set_kind(&mut self, msg: impl Into<String>, kind: StatusKind) {
        self.current = Some((msg.into(), kind, Instant::now()));
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Drop the message once it has outlived its lifetime.
    pub fn expire(&mut self, now: Instant) {
        let Some(lifetime) = self.lifetime else {
            return;
        };
        if self
            .current
            .as_ref()
            .is_some_and(|(_, _, set_at)| now.duration_since(*set_at) >= lifetime)
        {
            self.current = None;
        }
    }

    #[must_use]
    pub fn peek(&self) -> Option<&str> {
        self.current.as_ref().map(|(msg, _, _)| msg.as_str())
    }

    #[must_use]
    pub fn kind(&self) -> Option<StatusKind> {
        self.current.as_ref().map(|(_, kind, _)| *kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear() {
        let mut status = StatusMessage::new();
        assert!(status.peek().is_none());

        status.set("Theme: light");
        assert_eq!(status.peek(), Some("Theme: light"));
        assert_eq!(status.kind(), Some(StatusKind::Info));

        status.set_kind("Added Stripe (AWS)", StatusKind::Success);
        assert_eq!(status.kind(), Some(StatusKind::Success));

        status.clear();
        assert!(status.peek().is_none());
        assert!(status.kind().is_none());
    }

    #[test]
    fn test_auto_clear_after_lifetime() {
        let mut status = StatusMessage::with_auto_clear(Duration::from_millis(50));

        status.set("Added Figma (Google Cloud)");
        status.expire(Instant::now());
        assert!(status.peek().is_some());

        status.expire(Instant::now() + Duration::from_millis(60));
        assert!(status.peek().is_none());
    }

    #[test]
    fn test_no_lifetime_keeps_message() {
        let mut status = StatusMessage::new();

        status.set("Geography: Europe");
        status.expire(Instant::now() + Duration::from_secs(60));
        assert!(status.peek().is_some());
    }
}
