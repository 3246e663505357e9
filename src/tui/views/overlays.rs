//! Help and legend overlays.

use crate::model::{LogoTier, ProviderId};
use crate::tui::theme::colors;
use crate::tui::widgets;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default().fg(colors().primary).bold(),
    )])
}

fn shortcut(keys: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {keys:<15}"), Style::default().fg(colors().accent)),
        Span::styled(desc, Style::default().fg(colors().text)),
    ])
}

pub fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = widgets::centered_rect(65, 80, area);
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::styled(
            "━━━ Cloud Dependencies Help ━━━",
            Style::default().fg(colors().accent).bold(),
        ),
        Line::from(""),
        section("Dependencies"),
        shortcut("Tab / S-Tab", "Cycle search, add url, providers, grid"),
        shortcut("/", "Search companies by name"),
        shortcut("a", "Add a company by URL"),
        shortcut("p", "Focus provider pills (←→ hover, Enter select)"),
        shortcut("1-6", "Toggle provider filter"),
        shortcut("c / Esc", "Clear provider filter"),
        shortcut("x", "Dismiss detection error"),
        shortcut("Enter (search)", "Add the search text as a company URL"),
        shortcut("↑↓←→ / hjkl", "Move through the logo grid"),
        shortcut("r", "Open the AWS regions view"),
        Line::from(""),
        section("Regions"),
        shortcut("/", "Search by code, name or location"),
        shortcut("g / G", "Cycle geography filter"),
        shortcut("c", "Clear geography filter"),
        shortcut("b / Esc", "Back to dependencies"),
        Line::from(""),
        section("General"),
        shortcut("L", "Provider color legend"),
        shortcut("T", "Toggle theme (dark/light/high-contrast)"),
        shortcut("?", "Toggle this help"),
        shortcut("q / Ctrl+C", "Quit"),
        Line::from(""),
        Line::styled(
            "Press any key to close",
            Style::default().fg(colors().text_muted),
        ),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .title_style(Style::default().fg(colors().accent).bold())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors().accent)),
        )
        .style(Style::default().fg(colors().text));

    frame.render_widget(help, popup_area);
}

pub fn render_legend_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = widgets::centered_rect(50, 60, area);
    frame.render_widget(Clear, popup_area);

    let scheme = colors();
    let mut legend_text = vec![
        Line::styled(
            "━━━ Provider Legend ━━━",
            Style::default().fg(scheme.accent).bold(),
        ),
        Line::from(""),
    ];

    for (i, provider) in ProviderId::ALL.iter().enumerate() {
        legend_text.push(Line::from(vec![
            Span::styled(format!("  {} ", i + 1), Style::default().fg(scheme.accent)),
            Span::styled("■ ", Style::default().fg(scheme.provider_color(*provider))),
            Span::styled(
                format!("{:<14}", provider.display_name()),
                Style::default().fg(scheme.text),
            ),
            Span::styled(provider.color_hex(), Style::default().fg(scheme.text_muted)),
        ]));
    }

    legend_text.push(Line::from(""));
    legend_text.push(section("Logo sources"));
    let mut tier = Some(LogoTier::Clearbit);
    while let Some(current) = tier {
        legend_text.push(Line::from(vec![
            Span::styled("  → ", Style::default().fg(scheme.muted)),
            Span::styled(current.label(), Style::default().fg(scheme.text)),
        ]));
        tier = current.fallback();
    }

    legend_text.push(Line::from(""));
    legend_text.push(Line::styled(
        "Press any key to close",
        Style::default().fg(scheme.text_muted),
    ));

    let legend = Paragraph::new(legend_text).block(
        Block::default()
            .title(" Legend ")
            .title_style(Style::default().fg(scheme.accent).bold())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(scheme.accent)),
    );

    frame.render_widget(legend, popup_area);
}
