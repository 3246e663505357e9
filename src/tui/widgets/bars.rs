//! Bar widgets for count and share display.

use super::truncate_str;
use crate::tui::theme::colors;
use ratatui::{prelude::*, widgets::Widget};

/// A simple horizontal bar chart row for displaying a count.
pub struct HorizontalBar {
    label: String,
    value: usize,
    max_value: usize,
    color: Color,
}

impl HorizontalBar {
    pub fn new(label: impl Into<String>, value: usize, max_value: usize) -> Self {
        Self {
            label: label.into(),
            value,
            max_value,
            color: colors().primary,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Widget for HorizontalBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < 1 {
            return;
        }

        let label_width = 14.min(area.width as usize / 3);
        let count_width = 5;
        let bar_width = (area.width as usize).saturating_sub(label_width + count_width + 2);

        let label = format!(
            "{:width$}",
            truncate_str(&self.label, label_width),
            width = label_width
        );
        let mut x = area.x;
        let y = area.y;
        let right = area.x + area.width;

        buf.set_stringn(x, y, &label, label_width, Style::default().fg(colors().text));
        x += label_width as u16 + 1;

        let filled = if self.max_value > 0 {
            (self.value * bar_width) / self.max_value
        } else {
            0
        };

        for i in 0..bar_width {
            if x >= right {
                break;
            }
            let (ch, style) = if i < filled {
                ('█', Style::default().fg(self.color))
            } else {
                ('░', Style::default().fg(colors().muted))
            };
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(ch).set_style(style);
            }
            x += 1;
        }

        let count_str = format!(" {:>4}", self.value);
        buf.set_stringn(
            x,
            y,
            count_str,
            right.saturating_sub(x) as usize,
            Style::default().fg(colors().primary).bold(),
        );
    }
}

/// Stacked bar showing each segment's share of the total.
pub struct ShareBar {
    segments: Vec<(usize, Color)>,
}

impl ShareBar {
    pub fn new(segments: Vec<(usize, Color)>) -> Self {
        Self { segments }
    }
}

impl Widget for ShareBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < 1 || self.segments.is_empty() {
            return;
        }

        let total: usize = self.segments.iter().map(|(count, _)| count).sum();
        if total == 0 {
            return;
        }

        let width = area.width as usize;
        let right = area.x + area.width;
        let mut x = area.x;
        let last = self.segments.len() - 1;

        for (i, (count, color)) in self.segments.iter().enumerate() {
            let segment_width = if i == last {
                // Last segment gets remaining space
                right.saturating_sub(x) as usize
            } else {
                ((count * width) / total).max(usize::from(*count > 0))
            };

            for _ in 0..segment_width {
                if x >= right {
                    break;
                }
                if let Some(cell) = buf.cell_mut((x, area.y)) {
                    cell.set_char('█').set_style(Style::default().fg(*color));
                }
                x += 1;
            }
        }
    }
}

/// Large percentage readout with a label and a progress bar above it.
pub struct PercentageRing {
    percentage: f64,
    label: String,
    color: Color,
}

impl PercentageRing {
    pub fn new(percentage: f64, label: impl Into<String>) -> Self {
        Self {
            percentage: percentage.clamp(0.0, 100.0),
            label: label.into(),
            color: colors().primary,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Widget for PercentageRing {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 8 || area.height < 3 {
            return;
        }

        let pct_str = format!("{:.0}%", self.percentage);
        let center_y = area.y + area.height / 2;

        let pct_x = area.x + area.width.saturating_sub(pct_str.len() as u16) / 2;
        buf.set_string(pct_x, center_y, &pct_str, Style::default().fg(self.color).bold());

        if center_y + 1 < area.y + area.height {
            let label = truncate_str(&self.label, area.width as usize);
            let label_width = unicode_width::UnicodeWidthStr::width(label.as_str()) as u16;
            let label_x = area.x + area.width.saturating_sub(label_width) / 2;
            buf.set_string(
                label_x,
                center_y + 1,
                &label,
                Style::default().fg(colors().text_muted),
            );
        }

        if center_y > area.y {
            let bar_width = area.width.saturating_sub(4) as usize;
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                clippy::cast_precision_loss
            )]
            let filled = (self.percentage / 100.0 * bar_width as f64) as usize;
            let bar_x = area.x + 2;

            for i in 0..bar_width {
                let (ch, color) = if i < filled {
                    ('█', self.color)
                } else {
                    ('░', colors().muted)
                };
                if let Some(cell) = buf.cell_mut((bar_x + i as u16, center_y - 1)) {
                    cell.set_char(ch).set_style(Style::default().fg(color));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_symbols(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_horizontal_bar_renders_count() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        HorizontalBar::new("Europe", 8, 16)
            .color(Color::Green)
            .render(area, &mut buf);
        let row = row_symbols(&buf, 0);
        assert!(row.starts_with("Europe"));
        assert!(row.trim_end().ends_with('8'));
        assert!(row.contains('█'));
    }

    #[test]
    fn test_share_bar_fills_width() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        ShareBar::new(vec![(3, Color::Red), (1, Color::Blue)]).render(area, &mut buf);
        let reds = buf.content().iter().filter(|c| c.fg == Color::Red).count();
        let blues = buf.content().iter().filter(|c| c.fg == Color::Blue).count();
        assert_eq!(reds, 15);
        assert_eq!(blues, 5);
    }

    #[test]
    fn test_percentage_ring_text() {
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        PercentageRing::new(83.0, "Big three").render(area, &mut buf);
        assert!(row_symbols(&buf, 2).contains("83%"));
        assert!(row_symbols(&buf, 3).contains("Big three"));
    }
}
