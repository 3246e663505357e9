//! Terminal setup, the main loop and top-level rendering.

use super::app::{ActiveView, App};
use super::events::{handle_key_event, handle_mouse_event, Event, EventHandler};
use super::theme::{colors, render_footer_hints, set_theme, FooterHints, Styles, Theme};
use super::viewmodel::{OverlayKind, StatusKind};
use super::views;
use super::widgets::{
    self, check_terminal_size, render_mode_indicator, render_size_warning, MIN_HEIGHT, MIN_WIDTH,
};
use crate::config::{TuiConfig, TuiPreferences, DEFAULT_THEME};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Tabs},
};
use std::io::{self, stdout};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

/// Run the interactive dashboard until the user quits.
///
/// A non-default configured theme wins; otherwise the theme saved by the
/// last `T` toggle is used.
pub fn run_tui(app: &mut App, config: &TuiConfig) -> io::Result<()> {
    let has_saved_theme = TuiPreferences::config_path().is_some_and(|p| p.exists());
    let theme = if has_saved_theme && config.theme == DEFAULT_THEME {
        TuiPreferences::load().theme
    } else {
        config.theme.clone()
    };
    set_theme(Theme::from_name(&theme));
    app.mouse_enabled = config.mouse_enabled;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    if app.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(config.tick_rate());
    tracing::info!("dashboard started");

    // Main loop
    let result = loop {
        if let Err(e) = terminal.draw(|frame| render(frame, app)) {
            break Err(e);
        }

        match events.next() {
            Ok(Event::Key(key)) => handle_key_event(app, key),
            Ok(Event::Mouse(mouse)) => handle_mouse_event(app, mouse),
            Ok(Event::Resize(_, _)) => {}
            Ok(Event::Tick) => app.on_tick(Instant::now()),
            Err(e) => break Err(e),
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // Restore terminal
    disable_raw_mode()?;
    if app.mouse_enabled {
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    tracing::info!("dashboard closed");
    result
}

/// Main render function.
pub(crate) fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    app.hit_areas.clear();
    app.sync_selection();

    // Main layout: header, tabs, content, status bar, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Tabs
            Constraint::Min(10),   // Content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_tabs(frame, chunks[1], app);

    match app.active_view {
        ActiveView::Dependencies => views::render_dependencies(frame, chunks[2], app),
        ActiveView::Regions => views::render_regions(frame, chunks[2], app),
    }

    render_status_bar(frame, chunks[3], app);
    render_footer(frame, chunks[4], app);

    if app.overlay.is_showing(OverlayKind::Help) {
        views::render_help_overlay(frame, area);
    }
    if app.overlay.is_showing(OverlayKind::Legend) {
        views::render_legend_overlay(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mode = match app.active_view {
        ActiveView::Dependencies => "dependencies",
        ActiveView::Regions => "regions",
    };

    let header_line = Line::from(vec![
        Span::styled("cloud-deps", Styles::header_title()),
        Span::styled(" ", Style::default()),
        render_mode_indicator(mode),
        Span::styled(" │ ", Style::default().fg(colors().muted)),
        Span::styled(
            app.active_view.title(),
            Style::default().fg(colors().text).bold(),
        ),
    ]);

    frame.render_widget(Paragraph::new(header_line), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &mut App) {
    const DIVIDER: &str = " │ ";

    let labels: Vec<(ActiveView, String)> = ActiveView::ALL
        .iter()
        .map(|view| (*view, view.title().to_string()))
        .collect();

    let titles: Vec<Line> = labels
        .iter()
        .map(|(view, label)| {
            let style = if *view == app.active_view {
                Style::default().fg(colors().accent).bold()
            } else {
                Style::default().fg(colors().text_muted)
            };
            Line::styled(label.clone(), style)
        })
        .collect();

    let selected_idx = ActiveView::ALL
        .iter()
        .position(|v| *v == app.active_view)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(colors().border)),
        )
        .highlight_style(Style::default().fg(colors().accent))
        .select(selected_idx)
        .divider(Span::styled(DIVIDER, Style::default().fg(colors().muted)));

    frame.render_widget(tabs, area);

    // Tabs pads each title with one space on either side
    let mut x = area.x;
    for (view, label) in &labels {
        #[allow(clippy::cast_possible_truncation)]
        let width = UnicodeWidthStr::width(label.as_str()) as u16 + 2;
        app.hit_areas
            .tabs
            .push((Rect::new(x, area.y, width, 1).intersection(area), *view));
        #[allow(clippy::cast_possible_truncation)]
        let divider = UnicodeWidthStr::width(DIVIDER) as u16;
        x = x.saturating_add(width + divider);
    }
}

fn separator() -> Span<'static> {
    Span::styled(" │ ", Style::default().fg(colors().muted))
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let mut spans = Vec::new();

    match app.active_view {
        ActiveView::Dependencies => {
            let explorer = &app.explorer;
            spans.push(Span::styled(" Companies: ", Style::default().fg(scheme.text_muted)));
            spans.push(Span::styled(
                widgets::format_count(explorer.company_count()),
                Style::default().fg(scheme.primary).bold(),
            ));
            if !explorer.added_companies().is_empty() {
                spans.push(Span::styled(
                    format!(" (+{})", explorer.added_companies().len()),
                    Style::default().fg(scheme.success),
                ));
            }
            spans.push(separator());
            spans.push(Span::styled("Providers: ", Style::default().fg(scheme.text_muted)));
            spans.push(Span::styled(
                explorer.provider_counts().len().to_string(),
                Style::default().fg(scheme.primary),
            ));
            spans.push(separator());
            spans.push(Span::styled("Big three: ", Style::default().fg(scheme.text_muted)));
            spans.push(Span::styled(
                format!("{}%", explorer.big_three_share()),
                Style::default().fg(scheme.accent).bold(),
            ));

            if let Some(provider) = explorer.selected_provider() {
                spans.push(separator());
                spans.push(Span::styled("Filter: ", Style::default().fg(scheme.text_muted)));
                spans.push(Span::styled(
                    format!(" {} ", provider.display_name()),
                    Style::default()
                        .fg(scheme.provider_badge_fg(provider))
                        .bg(scheme.provider_color(provider))
                        .bold(),
                ));
            }
            if let Some(provider) = explorer.hovered_provider() {
                spans.push(separator());
                spans.push(Span::styled("Hover: ", Style::default().fg(scheme.text_muted)));
                spans.push(Span::styled(
                    provider.display_name(),
                    Style::default().fg(scheme.provider_color(provider)),
                ));
            }
            if explorer.is_detecting() {
                spans.push(separator());
                spans.push(Span::styled(
                    format!("{} detecting", widgets::spinner_frame(app.tick)),
                    Style::default().fg(scheme.accent),
                ));
            }
        }
        ActiveView::Regions => {
            let regions = &app.regions;
            spans.push(Span::styled(" Regions: ", Style::default().fg(scheme.text_muted)));
            spans.push(Span::styled(
                format!("{}/{}", regions.filtered().len(), regions.regions().len()),
                Style::default().fg(scheme.primary).bold(),
            ));
            spans.push(separator());
            spans.push(Span::styled("AZs: ", Style::default().fg(scheme.text_muted)));
            spans.push(Span::styled(
                regions.total_availability_zones().to_string(),
                Style::default().fg(scheme.primary),
            ));
            spans.push(separator());
            spans.push(Span::styled("Geography: ", Style::default().fg(scheme.text_muted)));
            spans.push(Span::styled(
                format!(" {} ", app.geography.display_name()),
                Style::default()
                    .fg(scheme.badge_fg_dark)
                    .bg(scheme.accent)
                    .bold(),
            ));
        }
    }

    let status = Paragraph::new(Line::from(spans)).style(Styles::status_bar());
    frame.render_widget(status, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    // Show status message if set, otherwise show view-specific hints
    if let Some(msg) = app.status.peek() {
        let kind = app.status.kind().unwrap_or_default();
        let color = match kind {
            StatusKind::Info => colors().accent,
            StatusKind::Success => colors().success,
            StatusKind::Warning => colors().warning,
        };
        let status_line = Line::from(vec![
            Span::styled(format!("{} ", kind.icon()), Style::default().fg(color)),
            Span::styled(msg.to_string(), Style::default().fg(color).bold()),
        ]);
        let footer = Paragraph::new(status_line).alignment(Alignment::Center);
        frame.render_widget(footer, area);
        return;
    }

    let hints = match app.active_view {
        ActiveView::Dependencies => FooterHints::for_dependencies(app.focus.label()),
        ActiveView::Regions => FooterHints::for_regions(app.regions_search_active),
    };
    let footer = Paragraph::new(Line::from(render_footer_hints(&hints)))
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors().text_muted));

    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{builtin_companies, builtin_regions};
    use crate::tui::app::Focus;
    use crate::detect::CloudDetector;
    use crate::error::Result;
    use crate::model::ProviderId;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::backend::TestBackend;
    use std::sync::Arc;
    use std::time::Duration;

    struct NoopDetector;

    impl CloudDetector for NoopDetector {
        fn detect(&self, _url: &str) -> Result<ProviderId> {
            Ok(ProviderId::Other)
        }

        fn name(&self) -> &'static str {
            "noop"
        }
    }

    fn test_app() -> App {
        App::new(
            builtin_companies(),
            builtin_regions(),
            Arc::new(NoopDetector),
            Duration::from_millis(500),
        )
    }

    fn draw(app: &mut App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_render_dependencies_records_hit_areas() {
        let mut app = test_app();
        let buf = draw(&mut app, 140, 40);
        let text = buffer_text(&buf);

        assert!(text.contains("All Companies"));
        assert!(text.contains("Market Share"));
        assert_eq!(app.hit_areas.tabs.len(), 2);
        assert!(!app.hit_areas.pills.is_empty());
        assert!(app.grid_columns >= 1);
    }

    #[test]
    fn test_legend_rows_hover_and_select_provider() {
        let mut app = test_app();
        draw(&mut app, 140, 40);
        let pill_row = app.hit_areas.pills[0].0.y;
        let (rect, provider) = app
            .hit_areas
            .pills
            .iter()
            .copied()
            .find(|(rect, provider)| rect.y > pill_row && *provider == ProviderId::Azure)
            .expect("legend row for Azure");

        let at = |kind| MouseEvent {
            kind,
            column: rect.x + 2,
            row: rect.y,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse_event(&mut app, at(MouseEventKind::Moved));
        assert_eq!(app.explorer.hovered_provider(), Some(provider));

        handle_mouse_event(&mut app, at(MouseEventKind::Down(MouseButton::Left)));
        assert_eq!(app.explorer.selected_provider(), Some(ProviderId::Azure));
    }

    #[test]
    fn test_clicking_tab_rect_switches_view() {
        let mut app = test_app();
        draw(&mut app, 140, 40);
        let (rect, view) = app.hit_areas.tabs[1];
        assert_eq!(view, ActiveView::Regions);
        assert_eq!(app.hit_areas.tab_at(rect.x + 1, rect.y), Some(ActiveView::Regions));
    }

    #[test]
    fn test_render_regions() {
        let mut app = test_app();
        app.show_view(ActiveView::Regions);
        let text = buffer_text(&draw(&mut app, 140, 40));
        assert!(text.contains("us-east-1"));
        assert!(text.contains("By Geography"));
    }

    #[test]
    fn test_small_terminal_shows_warning() {
        let mut app = test_app();
        let text = buffer_text(&draw(&mut app, 60, 20));
        assert!(text.contains("Terminal too small"));
    }

    #[test]
    fn test_pill_focus_title_follows_hover() {
        let mut app = test_app();
        app.set_focus(Focus::Pills);
        let hovered = app.explorer.hovered_provider().map(ProviderId::display_name);
        let text = buffer_text(&draw(&mut app, 140, 40));
        let expected = format!("{} Companies", hovered.unwrap_or("All"));
        assert!(text.contains(&expected));
    }
}
