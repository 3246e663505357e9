//! Event handling for the TUI.

use super::app::{ActiveView, App, Focus};
use super::state::ListNavigation;
use super::theme::toggle_theme;
use super::viewmodel::{OverlayKind, StatusKind};
use crate::config::TuiPreferences;
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Terminal events.
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
}

/// Fixed tick schedule for the reader thread.
///
/// Ticks fall due every `rate` whether or not input arrived in between, so
/// a stream of mouse motion cannot hold back timers and detection results.
#[derive(Debug, Clone, Copy)]
struct TickSchedule {
    rate: Duration,
    last: Instant,
}

impl TickSchedule {
    fn new(rate: Duration, now: Instant) -> Self {
        Self { rate, last: now }
    }

    /// How long to wait for input before the next tick is due.
    fn poll_timeout(&self, now: Instant) -> Duration {
        self.rate.saturating_sub(now.duration_since(self.last))
    }

    /// True once per elapsed period; restarts the period when it fires.
    fn take_due(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last) >= self.rate {
            self.last = now;
            true
        } else {
            false
        }
    }
}

/// Event handler.
///
/// A reader thread polls crossterm, forwards input events, and sends a
/// `Tick` each time the tick rate elapses.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
    _tx: mpsc::Sender<Event>,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let event_tx = tx.clone();
        thread::spawn(move || {
            let mut schedule = TickSchedule::new(tick_rate, Instant::now());
            loop {
                if event::poll(schedule.poll_timeout(Instant::now())).unwrap_or(false) {
                    let forwarded = match event::read() {
                        Ok(CrosstermEvent::Key(key)) => Some(Event::Key(key)),
                        Ok(CrosstermEvent::Mouse(mouse)) => Some(Event::Mouse(mouse)),
                        Ok(CrosstermEvent::Resize(w, h)) => Some(Event::Resize(w, h)),
                        _ => None,
                    };
                    if let Some(ev) = forwarded {
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                }
                if schedule.take_due(Instant::now()) && event_tx.send(Event::Tick).is_err() {
                    break;
                }
            }
        });

        Self { rx, _tx: tx }
    }

    pub fn next(&self) -> io::Result<Event> {
        self.rx.recv().map_err(io::Error::other)
    }
}

/// Handle key events.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.overlay.has_overlay() {
        app.overlay.close();
        return;
    }

    match app.active_view {
        ActiveView::Dependencies => handle_dependencies_key(app, key),
        ActiveView::Regions => handle_regions_key(app, key),
    }
}

/// Printable character typed without Ctrl/Alt.
fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

fn handle_dependencies_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab => {
            app.set_focus(app.focus.next());
            return;
        }
        KeyCode::BackTab => {
            app.set_focus(app.focus.prev());
            return;
        }
        _ => {}
    }

    match app.focus {
        Focus::Search => handle_search_key(app, key),
        Focus::AddUrl => handle_add_url_key(app, key),
        Focus::Pills => handle_pills_key(app, key),
        Focus::Grid => handle_grid_key(app, key),
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    let now = Instant::now();
    match key.code {
        KeyCode::Esc => {
            if app.explorer.search().is_empty() && app.explorer.selected_provider().is_none() {
                app.set_focus(Focus::Grid);
            } else {
                app.explorer.clear_search();
            }
        }
        KeyCode::Enter => {
            if app.explorer.search().contains('.') {
                app.submit_add(true);
            } else {
                app.set_focus(Focus::Grid);
            }
        }
        KeyCode::Down => app.set_focus(Focus::Grid),
        KeyCode::Backspace => {
            app.explorer.pop_search_char(now);
            app.grid_nav.go_first();
        }
        _ => {
            if let Some(c) = typed_char(&key) {
                app.explorer.push_search_char(c, now);
                app.grid_nav.go_first();
            }
        }
    }
}

fn handle_add_url_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.set_focus(Focus::Grid),
        KeyCode::Enter => app.submit_add(false),
        KeyCode::Backspace => app.explorer.pop_pending_char(),
        _ => {
            if let Some(c) = typed_char(&key) {
                app.explorer.push_pending_char(c);
            }
        }
    }
}

fn handle_pills_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.move_pill_cursor(false),
        KeyCode::Right | KeyCode::Char('l') => app.move_pill_cursor(true),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(provider) = app.pill_under_cursor() {
                app.explorer.toggle_selected(provider);
                app.grid_nav.go_first();
            }
        }
        KeyCode::Char('c') => {
            app.explorer.clear_filter();
            app.set_focus(Focus::Grid);
        }
        KeyCode::Esc | KeyCode::Down => app.set_focus(Focus::Grid),
        _ => {}
    }
}

fn handle_grid_key(app: &mut App, key: KeyEvent) {
    let columns = app.grid_columns.max(1);
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('r') => app.toggle_view(),
        KeyCode::Char('/') => app.set_focus(Focus::Search),
        KeyCode::Char('a') => app.set_focus(Focus::AddUrl),
        KeyCode::Char('p') => app.set_focus(Focus::Pills),
        KeyCode::Char('c') => {
            app.explorer.clear_filter();
            app.grid_nav.go_first();
        }
        KeyCode::Char('x') => app.explorer.clear_error(),
        KeyCode::Char('?') => app.overlay.toggle(OverlayKind::Help),
        KeyCode::Char('L') => app.overlay.toggle(OverlayKind::Legend),
        KeyCode::Char('T') => handle_theme_toggle(app),
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            app.toggle_provider_by_index(index);
        }
        KeyCode::Right | KeyCode::Char('l') => app.grid_nav.select_next(),
        KeyCode::Left | KeyCode::Char('h') => app.grid_nav.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.grid_nav.select_forward(columns),
        KeyCode::Up | KeyCode::Char('k') => {
            if app.grid_nav.selected() < columns {
                app.set_focus(Focus::Pills);
            } else {
                app.grid_nav.select_back(columns);
            }
        }
        KeyCode::PageDown => app.grid_nav.page_down(),
        KeyCode::PageUp => app.grid_nav.page_up(),
        KeyCode::Home | KeyCode::Char('g') => app.grid_nav.go_first(),
        KeyCode::End | KeyCode::Char('G') => app.grid_nav.go_last(),
        KeyCode::Esc => app.explorer.clear_filter(),
        _ => {}
    }
}

fn handle_regions_key(app: &mut App, key: KeyEvent) {
    if app.regions_search_active {
        match key.code {
            KeyCode::Esc => {
                app.regions.clear_search();
                app.regions_search_active = false;
            }
            KeyCode::Enter => app.regions_search_active = false,
            KeyCode::Backspace => app.regions.pop_search_char(),
            _ => {
                if let Some(c) = typed_char(&key) {
                    app.regions.push_search_char(c);
                }
            }
        }
        app.regions_nav.go_first();
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('b' | 'r') | KeyCode::Esc | KeyCode::Backspace => {
            app.show_view(ActiveView::Dependencies);
        }
        KeyCode::Char('/') => app.regions_search_active = true,
        KeyCode::Char('g' | 'f') => app.cycle_geography(true),
        KeyCode::Char('G' | 'F') => app.cycle_geography(false),
        KeyCode::Char('c') => app.clear_geography(),
        KeyCode::Char('?') => app.overlay.toggle(OverlayKind::Help),
        KeyCode::Char('L') => app.overlay.toggle(OverlayKind::Legend),
        KeyCode::Char('T') => handle_theme_toggle(app),
        KeyCode::Down | KeyCode::Char('j') => app.regions_nav.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.regions_nav.select_prev(),
        KeyCode::PageDown => app.regions_nav.page_down(),
        KeyCode::PageUp => app.regions_nav.page_up(),
        KeyCode::Home => app.regions_nav.go_first(),
        KeyCode::End => app.regions_nav.go_last(),
        _ => {}
    }
}

fn handle_theme_toggle(app: &mut App) {
    let theme_name = toggle_theme();
    let prefs = TuiPreferences {
        theme: theme_name.to_string(),
    };
    if let Err(e) = prefs.save() {
        tracing::warn!("Failed to save theme preference: {}", e);
        app.status.set_kind(
            format!("Theme: {theme_name} (not saved)"),
            StatusKind::Warning,
        );
        return;
    }
    app.status.set(format!("Theme: {theme_name}"));
}

/// Handle mouse events: hover and click on pills, clicks on tabs and panels.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if !app.mouse_enabled {
        return;
    }

    if app.overlay.has_overlay() {
        if let MouseEventKind::Down(_) = mouse.kind {
            app.overlay.close();
        }
        return;
    }

    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved => {
            if app.active_view == ActiveView::Dependencies && app.focus != Focus::Pills {
                let hovered = app.hit_areas.pill_at(column, row);
                if hovered != app.explorer.hovered_provider() {
                    app.explorer.set_hovered(hovered);
                }
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(view) = app.hit_areas.tab_at(column, row) {
                app.show_view(view);
                return;
            }
            if app.active_view != ActiveView::Dependencies {
                return;
            }
            if let Some(provider) = app.hit_areas.pill_at(column, row) {
                app.explorer.toggle_selected(provider);
                app.grid_nav.go_first();
            } else if let Some(focus) = app.hit_areas.panel_at(column, row) {
                app.set_focus(focus);
            }
        }
        MouseEventKind::ScrollDown => match app.active_view {
            ActiveView::Dependencies => app.grid_nav.select_forward(app.grid_columns.max(1)),
            ActiveView::Regions => app.regions_nav.select_next(),
        },
        MouseEventKind::ScrollUp => match app.active_view {
            ActiveView::Dependencies => app.grid_nav.select_back(app.grid_columns.max(1)),
            ActiveView::Regions => app.regions_nav.select_prev(),
        },
        _ => {}
    }
}
