//! Debounced assignment with a single active timer.

use std::time::{Duration, Instant};

/// Holds at most one pending value with a deadline.
///
/// Arming replaces any pending value, so a later keystroke supersedes an
/// earlier one. The owner polls on each tick; the value is released once
/// its deadline has passed.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Arm the timer with `value`, cancelling any pending one.
    pub fn arm(&mut self, value: T, now: Instant) {
        self.pending = Some((now + self.delay, value));
    }

    /// Drop the pending value, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Release the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.pending.take() {
            Some((deadline, value)) if now >= deadline => Some(value),
            still_pending => {
                self.pending = still_pending;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_delay() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        debouncer.arm("stripe.com", start);
        assert!(debouncer.poll(start + Duration::from_millis(499)).is_none());
        assert!(debouncer.is_armed());
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(500)),
            Some("stripe.com")
        );
        assert!(!debouncer.is_armed());
        assert!(debouncer.poll(start + Duration::from_secs(5)).is_none());
    }

    #[test]
    fn test_later_arm_supersedes_earlier() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        debouncer.arm("stri", start);
        debouncer.arm("stripe.c", start + Duration::from_millis(300));

        // The first deadline has passed but it was superseded
        assert!(debouncer.poll(start + Duration::from_millis(600)).is_none());
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(800)),
            Some("stripe.c")
        );
    }

    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(10));
        debouncer.arm(1, start);
        debouncer.cancel();
        assert!(debouncer.poll(start + Duration::from_secs(1)).is_none());
    }
}
