//! Dependency explorer view: inputs, provider pills, pie chart and logo grid.

use crate::model::{LogoTier, ProviderId};
use crate::tui::app::{App, Focus};
use crate::tui::constants::{CARD_HEIGHT, CARD_WIDTH};
use crate::tui::state::ListNavigation;
use crate::tui::theme::{colors, provider_badge, Styles};
use crate::tui::widgets::{self, PercentageRing, PieChart, ShareBar};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

/// Rows below which the selected-company detail panel is hidden.
const DETAIL_MIN_HEIGHT: u16 = 18;

pub fn render_dependencies(frame: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search + add url
            Constraint::Length(3), // Provider pills
            Constraint::Min(6),    // Chart + grid
        ])
        .split(area);

    render_inputs(frame, chunks[0], app);
    render_pills(frame, chunks[1], app);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(chunks[2]);

    render_chart_panel(frame, main[0], app);
    render_grid_panel(frame, main[1], app);
}

// ============================================================================
// Inputs
// ============================================================================

fn input_line(text: &str, placeholder: &str, focused: bool) -> Line<'static> {
    let scheme = colors();
    let mut spans = if text.is_empty() && !focused {
        vec![Span::styled(
            placeholder.to_string(),
            Style::default().fg(scheme.text_muted).italic(),
        )]
    } else {
        vec![Span::styled(text.to_string(), Styles::text())]
    };
    if focused {
        spans.push(Span::styled("█", Style::default().fg(scheme.accent)));
    }
    Line::from(spans)
}

fn render_inputs(frame: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let scheme = colors();
    let search_focused = app.focus == Focus::Search;
    let search = Paragraph::new(input_line(
        app.explorer.search(),
        "Search companies...",
        search_focused,
    ))
    .block(
        Block::default()
            .title(" Search ")
            .title_style(if search_focused {
                Style::default().fg(scheme.accent).bold()
            } else {
                Styles::text_muted()
            })
            .borders(Borders::ALL)
            .border_style(Styles::border(search_focused)),
    );
    frame.render_widget(search, chunks[0]);

    let add_focused = app.focus == Focus::AddUrl;
    let content = if app.explorer.is_detecting() {
        Line::from(vec![
            Span::styled(
                format!("{} ", widgets::spinner_frame(app.tick)),
                Style::default().fg(scheme.accent),
            ),
            Span::styled("Detecting cloud provider for ", Styles::text_muted()),
            Span::styled(app.explorer.pending_url().to_string(), Styles::value()),
        ])
    } else {
        input_line(app.explorer.pending_url(), "e.g. stripe.com", add_focused)
    };

    let mut block = Block::default()
        .title(" Add company by URL ")
        .title_style(if add_focused {
            Style::default().fg(scheme.accent).bold()
        } else {
            Styles::text_muted()
        })
        .borders(Borders::ALL)
        .border_style(Styles::border(add_focused));
    if let Some(error) = app.explorer.error() {
        block = block.title_bottom(Line::styled(format!(" {error} "), Styles::error()));
    }
    frame.render_widget(Paragraph::new(content).block(block), chunks[1]);

    app.hit_areas.panels.push((chunks[0], Focus::Search));
    app.hit_areas.panels.push((chunks[1], Focus::AddUrl));
}

// ============================================================================
// Provider pills
// ============================================================================

fn render_pills(frame: &mut Frame, area: Rect, app: &mut App) {
    let focused = app.focus == Focus::Pills;
    let block = Block::default()
        .title(" Providers ")
        .title_style(if focused {
            Style::default().fg(colors().accent).bold()
        } else {
            Styles::text_muted()
        })
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    app.hit_areas.panels.push((area, Focus::Pills));

    let counts = app.explorer.provider_counts();
    let selected = app.explorer.selected_provider();
    let hovered = app.explorer.hovered_provider();
    let cursor = if focused {
        app.pill_under_cursor()
    } else {
        None
    };

    let right = inner.x + inner.width;
    let mut x = inner.x;
    let mut spans = Vec::new();
    for provider in app.explorer.pills() {
        let count = counts.get(&provider).copied().unwrap_or(0);
        let active = Some(provider) == selected || Some(provider) == hovered;
        let mut pill = provider_badge(provider, count, active);
        if Some(provider) == cursor {
            pill = pill.underlined();
        }

        let width = UnicodeWidthStr::width(pill.content.as_ref()) as u16;
        if x + width > right {
            break;
        }
        app.hit_areas
            .pills
            .push((Rect::new(x, inner.y, width, 1), provider));
        spans.push(pill);
        spans.push(Span::raw(" "));
        x += width + 1;
    }

    if selected.is_some() && x + 12 <= right {
        spans.push(Span::styled("[c] clear", Styles::text_muted()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

// ============================================================================
// Pie chart and legend
// ============================================================================

fn render_chart_panel(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .title(" Market Share ")
        .title_style(Styles::section_title())
        .borders(Borders::ALL)
        .border_style(Styles::border(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let slices = app.explorer.pie_data();
    if slices.is_empty() {
        return;
    }
    let total = app.explorer.company_count();
    let active = app.explorer.hovered_provider().or(app.explorer.selected_provider());
    let scheme = colors();

    #[allow(clippy::cast_possible_truncation)]
    let legend_height = slices.len() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(legend_height),
            Constraint::Length(3),
        ])
        .split(inner);

    let segments: Vec<(usize, Color)> = slices
        .iter()
        .map(|slice| {
            let color = match active {
                Some(provider) if provider != slice.provider => scheme.dimmed,
                _ => scheme.provider_color(slice.provider),
            };
            (slice.count, color)
        })
        .collect();
    frame.render_widget(PieChart::new(segments.clone()), chunks[0]);
    frame.render_widget(ShareBar::new(segments), chunks[1]);

    let legend: Vec<Line> = slices
        .iter()
        .map(|slice| {
            let is_active = active == Some(slice.provider);
            let name_style = if is_active {
                Style::default().fg(scheme.text).bold()
            } else {
                Styles::text()
            };
            Line::from(vec![
                Span::styled(
                    " ● ",
                    Style::default().fg(scheme.provider_color(slice.provider)),
                ),
                Span::styled(format!("{:<14}", slice.provider.display_name()), name_style),
                Span::styled(format!("{:>4}", slice.count), Styles::value()),
                Span::styled(
                    format!("  {:>3}%", slice.percent_of(total)),
                    Styles::text_muted(),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(legend), chunks[2]);

    // Legend rows hover and click like the pills
    let legend_area = chunks[2];
    for (row, slice) in (legend_area.y..legend_area.bottom()).zip(&slices) {
        app.hit_areas.pills.push((
            Rect::new(legend_area.x, row, legend_area.width, 1),
            slice.provider,
        ));
    }

    frame.render_widget(
        PercentageRing::new(
            f64::from(app.explorer.big_three_share()),
            "on AWS, Azure or GCP",
        )
        .color(scheme.accent),
        chunks[3],
    );
}

// ============================================================================
// Logo grid
// ============================================================================

fn render_grid_panel(frame: &mut Frame, area: Rect, app: &mut App) {
    let show_detail = area.height >= DETAIL_MIN_HEIGHT;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(if show_detail {
            [Constraint::Min(CARD_HEIGHT + 2), Constraint::Length(7)]
        } else {
            [Constraint::Min(CARD_HEIGHT + 2), Constraint::Length(0)]
        })
        .split(area);

    render_grid(frame, chunks[0], app);
    if show_detail {
        render_company_detail(frame, chunks[1], app);
    }
}

fn render_grid(frame: &mut Frame, area: Rect, app: &mut App) {
    let focused = app.focus == Focus::Grid;
    let companies = app.explorer.displayed_companies();
    app.hit_areas.panels.push((area, Focus::Grid));

    if companies.is_empty() {
        let hint = if app.explorer.search().is_empty() {
            "Clear the provider filter with [c]"
        } else {
            "Press Enter in the search box to add it as a company"
        };
        widgets::render_empty_state(frame, area, "No companies match", Some(hint));
        return;
    }

    let block = Block::default()
        .title(format!(
            " {} ({}) ",
            app.explorer.display_title(),
            companies.len()
        ))
        .title_style(if focused {
            Style::default().fg(colors().accent).bold()
        } else {
            Styles::section_title()
        })
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = usize::from((inner.width / CARD_WIDTH).max(1));
    let visible_rows = usize::from((inner.height / CARD_HEIGHT).max(1));
    app.grid_columns = columns;

    let selected = app.grid_nav.selected().min(companies.len() - 1);
    let first_row = app.grid_nav.first_visible_row(columns, visible_rows);

    let scheme = colors();
    for (offset, company) in companies
        .iter()
        .enumerate()
        .skip(first_row * columns)
        .take(visible_rows * columns)
    {
        let row = offset / columns - first_row;
        let column = offset % columns;
        #[allow(clippy::cast_possible_truncation)]
        let card = Rect::new(
            inner.x + column as u16 * CARD_WIDTH,
            inner.y + row as u16 * CARD_HEIGHT,
            CARD_WIDTH.min(inner.width),
            CARD_HEIGHT,
        )
        .intersection(inner);

        let is_selected = offset == selected;
        let provider_color = scheme.provider_color(company.provider);
        let border = if is_selected {
            Style::default().fg(provider_color).bold()
        } else {
            Style::default().fg(scheme.border)
        };
        let name_width = usize::from(CARD_WIDTH).saturating_sub(8);

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!(" {:<2} ", company.initials()),
                    Style::default()
                        .fg(scheme.provider_badge_fg(company.provider))
                        .bg(provider_color)
                        .bold(),
                ),
                Span::raw(" "),
                Span::styled(
                    widgets::truncate_str(&company.name, name_width),
                    if is_selected {
                        Styles::selected()
                    } else {
                        Styles::text()
                    },
                ),
            ]),
            Line::from(vec![
                Span::styled(company.symbol.clone(), Styles::label()),
                Span::styled(" · ", Styles::separator()),
                Span::styled(
                    company.provider.display_name(),
                    Style::default().fg(provider_color),
                ),
            ]),
        ];

        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border),
            ),
            card,
        );
    }
}

fn render_company_detail(frame: &mut Frame, area: Rect, app: &App) {
    let Some(company) = app.selected_company() else {
        widgets::render_detail_panel(frame, area, "Company", vec![], colors().border);
        return;
    };

    let chain = company.logo_chain();
    let mut lines = vec![
        Line::from(vec![
            Span::styled(company.name.clone(), Styles::value()),
            Span::styled(format!("  ({})", company.symbol), Styles::label()),
            Span::styled("  ", Style::default()),
            Span::styled(company.domain.clone(), Styles::text_muted()),
        ]),
        Line::from(vec![
            Span::styled("Provider: ", Styles::label()),
            Span::styled(
                company.provider.display_name(),
                Style::default()
                    .fg(colors().provider_color(company.provider))
                    .bold(),
            ),
            Span::styled(
                company
                    .provider
                    .logo_url()
                    .map_or_else(String::new, |url| format!("  {url}")),
                Styles::text_muted(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Logo:     ", Styles::label()),
            Span::styled(chain.current_url(), Styles::text()),
        ]),
        Line::from(vec![
            Span::styled("Fallback: ", Styles::label()),
            Span::styled(chain.url_for(LogoTier::Favicon), Styles::text_muted()),
        ]),
    ];
    if company.is_custom() {
        lines.push(Line::styled("Added this session", Styles::success()));
    }

    let border = if company.provider == ProviderId::Other {
        colors().border
    } else {
        colors().provider_color(company.provider)
    };
    widgets::render_detail_panel(frame, area, "Company", lines, border);
}
