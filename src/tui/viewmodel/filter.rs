//! Cycling filters for list views.
//!
//! The regions view cycles its geography filter with `g`/`G`; the cycle
//! visits "All" and then every geography in canonical order.

use crate::model::Geography;

/// A filter value with a fixed cyclic order.
///
/// ```ignore
/// let mut state = FilterState::<GeographyFilter>::new();
/// state.next();
/// assert_eq!(state.display_name(), "North America");
/// ```
pub trait CycleFilter: Clone + Copy + Default {
    #[must_use]
    fn next(&self) -> Self;

    #[must_use]
    fn prev(&self) -> Self;

    /// Label shown in the filter bar and status line.
    fn display_name(&self) -> &str;
}

/// Current position in a filter cycle.
#[derive(Debug, Clone)]
pub struct FilterState<F: CycleFilter> {
    pub current: F,
}

impl<F: CycleFilter> Default for FilterState<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: CycleFilter> FilterState<F> {
    pub fn new() -> Self {
        Self {
            current: F::default(),
        }
    }

    pub fn next(&mut self) {
        self.current = self.current.next();
    }

    pub fn prev(&mut self) {
        self.current = self.current.prev();
    }

    /// Back to the start of the cycle.
    pub fn reset(&mut self) {
        self.current = F::default();
    }

    pub fn display_name(&self) -> &str {
        self.current.display_name()
    }
}

/// Geography filter for the regions view: all regions, or one geography.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeographyFilter(pub Option<Geography>);

impl GeographyFilter {
    fn position(self) -> Option<usize> {
        self.0
            .and_then(|g| Geography::ALL.iter().position(|&other| other == g))
    }
}

impl CycleFilter for GeographyFilter {
    fn next(&self) -> Self {
        match self.position() {
            None => Self(Geography::ALL.first().copied()),
            Some(i) => Self(Geography::ALL.get(i + 1).copied()),
        }
    }

    fn prev(&self) -> Self {
        match self.position() {
            None => Self(Geography::ALL.last().copied()),
            Some(0) => Self(None),
            Some(i) => Self(Geography::ALL.get(i - 1).copied()),
        }
    }

    fn display_name(&self) -> &str {
        self.0.map_or("All", Geography::label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geography_cycle_forward_wraps() {
        let mut state = FilterState::<GeographyFilter>::new();
        assert_eq!(state.display_name(), "All");

        state.next();
        assert_eq!(state.current.0, Some(Geography::NorthAmerica));

        for _ in 1..Geography::ALL.len() {
            state.next();
        }
        assert_eq!(state.current.0, Some(Geography::GovCloud));

        state.next();
        assert_eq!(state.current, GeographyFilter(None));
    }

    #[test]
    fn test_geography_cycle_backward() {
        let mut state = FilterState::<GeographyFilter>::new();
        state.prev();
        assert_eq!(state.display_name(), "GovCloud");

        state.reset();
        state.next();
        state.prev();
        assert_eq!(state.current, GeographyFilter(None));
    }
}
