//! Centralized theme and color scheme for TUI.
//!
//! This module provides consistent styling across both explorer views.

use crate::model::ProviderId;
use ratatui::prelude::*;
use std::sync::{PoisonError, RwLock};

/// Color scheme for the TUI application.
/// Provides semantic colors for different UI elements.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // UI element colors
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub background_alt: Color,
    pub text: Color,
    pub text_muted: Color,
    pub selection: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Badge foreground colors (for text on colored backgrounds)
    pub badge_fg_dark: Color,
    pub badge_fg_light: Color,

    /// Background for the selected card or row
    pub selection_bg: Color,
    /// Slices and pills that are not the active provider
    pub dimmed: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Dark theme (default)
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            background_alt: Color::Rgb(30, 30, 40),
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::DarkGray,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,

            selection_bg: Color::Rgb(60, 60, 80),
            dimmed: Color::Rgb(70, 70, 80),
        }
    }

    /// Light theme
    pub const fn light() -> Self {
        Self {
            primary: Color::Rgb(0, 100, 150),
            accent: Color::Rgb(180, 140, 0),
            muted: Color::Rgb(150, 150, 150),
            border: Color::Rgb(180, 180, 180),
            border_focused: Color::Rgb(0, 100, 150),
            background_alt: Color::Rgb(240, 240, 245),
            text: Color::Rgb(30, 30, 30),
            text_muted: Color::Rgb(100, 100, 100),
            selection: Color::Rgb(200, 220, 240),

            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(180, 140, 0),
            error: Color::Rgb(200, 0, 0),

            // Reversed for light theme
            badge_fg_dark: Color::Rgb(30, 30, 30),
            badge_fg_light: Color::White,

            selection_bg: Color::Rgb(200, 220, 240),
            dimmed: Color::Rgb(215, 215, 220),
        }
    }

    /// High contrast theme (accessibility)
    pub const fn high_contrast() -> Self {
        Self {
            primary: Color::LightCyan,
            accent: Color::LightYellow,
            muted: Color::Gray,
            border: Color::White,
            border_focused: Color::LightCyan,
            background_alt: Color::Rgb(20, 20, 20),
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::White,

            success: Color::LightGreen,
            warning: Color::LightYellow,
            error: Color::LightRed,

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,

            selection_bg: Color::Rgb(50, 50, 80),
            dimmed: Color::Rgb(90, 90, 90),
        }
    }

    /// Brand color of a provider.
    pub fn provider_color(&self, provider: ProviderId) -> Color {
        let (r, g, b) = provider.color_rgb();
        Color::Rgb(r, g, b)
    }

    /// Foreground for text drawn on a provider-colored badge.
    pub fn provider_badge_fg(&self, provider: ProviderId) -> Color {
        match provider {
            ProviderId::Aws | ProviderId::Alibaba => self.badge_fg_dark,
            _ => self.badge_fg_light,
        }
    }
}

/// Global theme instance (runtime switchable)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub const fn dark() -> Self {
        Self {
            colors: ColorScheme::dark(),
            name: "dark",
        }
    }

    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    pub const fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Get the next theme in the rotation
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

/// Get the current theme name
pub fn current_theme_name() -> &'static str {
    THEME.read().unwrap_or_else(PoisonError::into_inner).name
}

/// Set the current theme
pub fn set_theme(theme: Theme) {
    *THEME.write().unwrap_or_else(PoisonError::into_inner) = theme;
}

/// Toggle to the next theme in rotation (dark -> light -> high-contrast -> dark)
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = theme.next();
    theme.name
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    /// Header title style
    pub fn header_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    /// Section title style
    pub fn section_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    /// Normal text style
    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    /// Muted/secondary text style
    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Label text style
    pub fn label() -> Style {
        Style::default().fg(colors().muted)
    }

    /// Value text style (for data values)
    pub fn value() -> Style {
        Style::default().fg(colors().text).bold()
    }

    /// Selection style (for selected items)
    pub fn selected() -> Style {
        Style::default()
            .bg(colors().selection_bg)
            .fg(colors().text)
            .bold()
    }

    /// Border style, highlighted when the panel has focus
    pub fn border(focused: bool) -> Style {
        if focused {
            Style::default().fg(colors().border_focused)
        } else {
            Style::default().fg(colors().border)
        }
    }

    /// Status bar background style
    pub fn status_bar() -> Style {
        Style::default().bg(colors().background_alt)
    }

    /// Keyboard shortcut style
    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    /// Shortcut description style
    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Success style
    pub fn success() -> Style {
        Style::default().fg(colors().success)
    }

    /// Error style
    pub fn error() -> Style {
        Style::default().fg(colors().error)
    }

    /// Separator between status bar segments
    pub fn separator() -> Style {
        Style::default().fg(colors().muted)
    }
}

// ============================================================================
// Badge Rendering Helpers
// ============================================================================

/// Provider pill: colored when active, outlined text otherwise.
pub fn provider_badge(provider: ProviderId, count: usize, active: bool) -> Span<'static> {
    let scheme = colors();
    let text = format!(" ● {} {} ", provider.display_name(), count);
    if active {
        Span::styled(
            text,
            Style::default()
                .fg(scheme.provider_badge_fg(provider))
                .bg(scheme.provider_color(provider))
                .bold(),
        )
    } else {
        Span::styled(text, Style::default().fg(scheme.provider_color(provider)))
    }
}

/// Render a count badge.
pub fn count_badge(count: usize, bg_color: Color) -> Span<'static> {
    Span::styled(
        format!(" {count} "),
        Style::default()
            .fg(colors().badge_fg_dark)
            .bg(bg_color)
            .bold(),
    )
}

// ============================================================================
// Footer Hints
// ============================================================================

/// View-specific footer hints
pub struct FooterHints;

impl FooterHints {
    /// Hints for the dependency view, by focused panel.
    pub fn for_dependencies(focus: &str) -> Vec<(&'static str, &'static str)> {
        match focus.to_lowercase().as_str() {
            "search" => vec![
                ("Enter", "add as company"),
                ("Esc", "clear"),
                ("Tab", "next panel"),
            ],
            "add" => vec![
                ("Enter", "detect provider"),
                ("Esc", "done"),
                ("Tab", "next panel"),
            ],
            "pills" => vec![
                ("←→", "hover"),
                ("Enter", "select"),
                ("c", "clear filter"),
                ("Esc", "done"),
            ],
            _ => {
                let mut hints = vec![
                    ("/", "search"),
                    ("a", "add"),
                    ("p", "providers"),
                    ("1-6", "filter"),
                    ("c", "clear"),
                    ("r", "regions"),
                ];
                hints.extend(Self::global());
                hints
            }
        }
    }

    /// Hints for the regions view.
    pub fn for_regions(searching: bool) -> Vec<(&'static str, &'static str)> {
        if searching {
            return vec![("Enter", "done"), ("Esc", "clear")];
        }
        let mut hints = vec![
            ("↑↓/jk", "navigate"),
            ("/", "search"),
            ("g", "geography"),
            ("b", "back"),
        ];
        hints.extend(Self::global());
        hints
    }

    /// Global hints (always shown)
    pub fn global() -> Vec<(&'static str, &'static str)> {
        vec![("T", "theme"), ("?", "help"), ("q", "quit")]
    }
}

/// Render footer hints as spans
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled((*desc).to_string(), Styles::shortcut_desc()));
    }

    spans
}
