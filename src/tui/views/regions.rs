//! AWS regions view: region table, detail panel and per-geography bars.

use crate::tui::app::App;
use crate::tui::state::ListNavigation;
use crate::tui::theme::{colors, count_badge, Styles};
use crate::tui::widgets::{self, HorizontalBar};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

pub fn render_regions(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(6)])
        .split(area);

    render_filter_bar(frame, chunks[0], app);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(chunks[1]);

    render_region_table(frame, main[0], app);
    render_side_panel(frame, main[1], app);
}

fn render_filter_bar(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let searching = app.regions_search_active;
    let query = app.regions.search();

    let mut spans = vec![Span::styled("Search: ", Styles::label())];
    if query.is_empty() && !searching {
        spans.push(Span::styled(
            "press / to search",
            Style::default().fg(scheme.text_muted).italic(),
        ));
    } else {
        spans.push(Span::styled(query.to_string(), Styles::text()));
    }
    if searching {
        spans.push(Span::styled("█", Style::default().fg(scheme.accent)));
    }
    spans.push(Span::styled("  │  ", Styles::separator()));
    spans.push(Span::styled("Geography: ", Styles::label()));
    spans.push(Span::styled(
        format!(" {} ", app.geography.display_name()),
        Style::default()
            .fg(scheme.badge_fg_dark)
            .bg(scheme.accent)
            .bold(),
    ));

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border(searching)),
    );
    frame.render_widget(bar, area);
}

fn render_region_table(frame: &mut Frame, area: Rect, app: &App) {
    let regions = app.regions.filtered();
    if regions.is_empty() {
        widgets::render_empty_state(
            frame,
            area,
            "No regions match",
            Some("Press Esc to clear the search or g to change geography"),
        );
        return;
    }

    let scheme = colors();
    let header = Row::new(vec!["Code", "Name", "AZs", "Since", "Opt-in"])
        .style(Style::default().fg(scheme.accent).bold())
        .bottom_margin(1);

    let rows: Vec<Row> = regions
        .iter()
        .map(|region| {
            let opt_in = if region.opt_in_required {
                Cell::from("yes").style(Style::default().fg(scheme.warning))
            } else {
                Cell::from("no").style(Styles::text_muted())
            };
            Row::new(vec![
                Cell::from(region.code.clone()).style(Styles::value()),
                Cell::from(region.name.clone()),
                Cell::from(region.availability_zones.to_string()),
                Cell::from(region.launch_year.to_string()).style(Styles::text_muted()),
                opt_in,
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(16),
        Constraint::Min(20),
        Constraint::Length(4),
        Constraint::Length(6),
        Constraint::Length(7),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(" Regions ({}) ", regions.len()))
                .title_style(Style::default().fg(scheme.accent).bold())
                .borders(Borders::ALL)
                .border_style(Styles::border(!app.regions_search_active)),
        )
        .row_highlight_style(
            Style::default()
                .bg(scheme.selection)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(app.regions_nav.selected()));
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_side_panel(frame: &mut Frame, area: Rect, app: &App) {
    let counts = app.regions.geography_counts();
    #[allow(clippy::cast_possible_truncation)]
    let bars_height = counts.len() as u16 + 4;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(bars_height)])
        .split(area);

    render_region_detail(frame, chunks[0], app);

    let block = Block::default()
        .title(" By Geography ")
        .title_style(Styles::section_title())
        .borders(Borders::ALL)
        .border_style(Styles::border(false));
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    let max = counts.iter().map(|c| c.count).max().unwrap_or(0);
    let active = app.regions.geography();
    for (i, entry) in counts.iter().enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        let y = inner.y + i as u16;
        if y >= inner.y + inner.height {
            break;
        }
        let color = if active == Some(entry.geography) {
            colors().accent
        } else {
            colors().primary
        };
        frame.render_widget(
            HorizontalBar::new(entry.geography.label(), entry.count, max).color(color),
            Rect::new(inner.x, y, inner.width, 1),
        );
    }

    #[allow(clippy::cast_possible_truncation)]
    let totals_y = inner.y + counts.len() as u16 + 1;
    if totals_y < inner.y + inner.height {
        let totals = Line::from(vec![
            count_badge(app.regions.regions().len(), colors().primary),
            Span::styled(" regions  ", Styles::text_muted()),
            count_badge(app.regions.total_availability_zones(), colors().accent),
            Span::styled(" AZs  ", Styles::text_muted()),
            count_badge(app.regions.opt_in_count(), colors().warning),
            Span::styled(" opt-in", Styles::text_muted()),
        ]);
        frame.render_widget(
            Paragraph::new(totals),
            Rect::new(inner.x, totals_y, inner.width, 1),
        );
    }
}

fn render_region_detail(frame: &mut Frame, area: Rect, app: &App) {
    let Some(region) = app.selected_region() else {
        widgets::render_detail_panel(frame, area, "Region", vec![], colors().border);
        return;
    };

    let field = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<10}"), Styles::label()),
            Span::styled(value, Styles::text()),
        ])
    };

    let mut lines = vec![
        Line::styled(region.name.clone(), Styles::value()),
        Line::from(""),
        field("Code", region.code.clone()),
        field("Location", region.location.clone()),
        field("Geography", region.geography.label().to_string()),
        field("Launched", region.launch_year.to_string()),
        field("AZs", region.availability_zones.to_string()),
    ];
    if region.opt_in_required {
        lines.push(Line::styled(
            "Opt-in required",
            Style::default().fg(colors().warning).bold(),
        ));
    }

    widgets::render_detail_panel(frame, area, "Region", lines, colors().accent);
}
