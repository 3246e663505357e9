//! Cursor state shared by the company grid and the region table.
//!
//! Both are flat lists underneath: the grid lays items out row-major, so a
//! row step is a move by the column count.

use super::constants::PAGE_SIZE;

/// Navigation over a flat list of `total()` items.
///
/// Implementors supply the raw cursor; every provided move clamps to
/// `0..total`, and an empty list pins the cursor at 0.
pub trait ListNavigation {
    fn selected(&self) -> usize;

    fn set_selected(&mut self, idx: usize);

    fn total(&self) -> usize;

    fn set_total(&mut self, total: usize);

    /// Move the cursor by `delta` items, clamped to the list.
    fn move_by(&mut self, delta: isize) {
        let last = self.total().saturating_sub(1);
        let target = self.selected().saturating_add_signed(delta);
        self.set_selected(target.min(last));
    }

    fn select_next(&mut self) {
        self.move_by(1);
    }

    fn select_prev(&mut self) {
        self.move_by(-1);
    }

    /// One grid row down.
    fn select_forward(&mut self, columns: usize) {
        self.move_by(isize::try_from(columns).unwrap_or(isize::MAX));
    }

    /// One grid row up.
    fn select_back(&mut self, columns: usize) {
        self.move_by(-isize::try_from(columns).unwrap_or(isize::MAX));
    }

    fn page_up(&mut self) {
        self.select_back(PAGE_SIZE);
    }

    fn page_down(&mut self) {
        self.select_forward(PAGE_SIZE);
    }

    fn go_first(&mut self) {
        self.set_selected(0);
    }

    fn go_last(&mut self) {
        self.set_selected(self.total().saturating_sub(1));
    }

    /// Pull the cursor back inside the list after it shrank.
    fn clamp_selection(&mut self) {
        self.move_by(0);
    }
}

/// Cursor plus item count.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    pub selected: usize,
    pub total: usize,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_total(total: usize) -> Self {
        Self { selected: 0, total }
    }

    /// Update the item count and keep the cursor in range.
    pub fn resize(&mut self, total: usize) {
        self.set_total(total);
        self.clamp_selection();
    }

    /// First grid row to draw so the cursor's row is visible.
    #[must_use]
    pub fn first_visible_row(&self, columns: usize, visible_rows: usize) -> usize {
        let row = self.selected / columns.max(1);
        (row + 1).saturating_sub(visible_rows.max(1))
    }
}

impl ListNavigation for ListState {
    fn selected(&self) -> usize {
        self.selected
    }

    fn set_selected(&mut self, idx: usize) {
        self.selected = idx;
    }

    fn total(&self) -> usize {
        self.total
    }

    fn set_total(&mut self, total: usize) {
        self.total = total;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_steps_clamp_at_both_ends() {
        let mut state = ListState::with_total(3);
        state.select_prev();
        assert_eq!(state.selected(), 0);

        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected(), 2);

        state.go_first();
        assert_eq!(state.selected(), 0);
        state.go_last();
        assert_eq!(state.selected(), 2);
    }

    #[test]
    fn test_pages_move_by_page_size() {
        let mut state = ListState::with_total(25);
        state.page_down();
        assert_eq!(state.selected(), PAGE_SIZE);
        state.page_down();
        state.page_down();
        assert_eq!(state.selected(), 24);
        state.page_up();
        assert_eq!(state.selected(), 24 - PAGE_SIZE);
    }

    #[test]
    fn test_grid_row_steps() {
        let mut state = ListState::with_total(7);
        state.select_forward(3);
        assert_eq!(state.selected(), 3);
        state.select_forward(3);
        assert_eq!(state.selected(), 6);
        state.select_forward(3);
        assert_eq!(state.selected(), 6);
        state.select_back(4);
        assert_eq!(state.selected(), 2);
    }

    #[test]
    fn test_resize_clamps_cursor() {
        let mut state = ListState::with_total(10);
        state.selected = 9;

        state.resize(4);
        assert_eq!(state.selected(), 3);

        state.resize(0);
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn test_empty_list_stays_at_zero() {
        let mut state = ListState::new();
        state.select_next();
        state.page_down();
        state.go_last();
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn test_first_visible_row_follows_cursor() {
        let mut state = ListState::with_total(40);
        assert_eq!(state.first_visible_row(4, 3), 0);

        // Row 2 is the last fully visible row
        state.selected = 11;
        assert_eq!(state.first_visible_row(4, 3), 0);

        state.selected = 12;
        assert_eq!(state.first_visible_row(4, 3), 1);

        state.selected = 39;
        assert_eq!(state.first_visible_row(4, 3), 7);
    }
}
