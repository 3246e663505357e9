//! Pie chart drawn with Braille dots on a ratatui canvas.

use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::canvas::{Canvas, Painter, Shape},
};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Fraction of the half-height used as the pie radius.
const RADIUS: f64 = 0.95;

/// A pie chart of `(value, color)` segments.
///
/// Segments are laid out clockwise starting at twelve o'clock, in the order
/// given.
pub struct PieChart {
    segments: Vec<(usize, Color)>,
}

impl PieChart {
    pub fn new(segments: Vec<(usize, Color)>) -> Self {
        Self { segments }
    }

    fn total(&self) -> usize {
        self.segments.iter().map(|(value, _)| value).sum()
    }
}

/// Index of the segment covering `fraction` of the full turn.
fn segment_at(segments: &[(usize, Color)], total: usize, fraction: f64) -> Option<usize> {
    if total == 0 {
        return None;
    }
    let mut cumulative = 0usize;
    for (i, (value, _)) in segments.iter().enumerate() {
        cumulative += value;
        #[allow(clippy::cast_precision_loss)]
        let end = cumulative as f64 / total as f64;
        if fraction < end {
            return Some(i);
        }
    }
    segments.len().checked_sub(1)
}

/// Clockwise fraction of a full turn from twelve o'clock to `(x, y)`.
fn turn_fraction(x: f64, y: f64) -> f64 {
    (FRAC_PI_2 - y.atan2(x)).rem_euclid(TAU) / TAU
}

struct PieShape<'a> {
    segments: &'a [(usize, Color)],
    total: usize,
    dots_x: usize,
    dots_y: usize,
    half_width: f64,
}

impl Shape for PieShape<'_> {
    fn draw(&self, painter: &mut Painter) {
        #[allow(clippy::cast_precision_loss)]
        let (dots_x, dots_y) = (self.dots_x as f64, self.dots_y as f64);
        for j in 0..self.dots_y {
            #[allow(clippy::cast_precision_loss)]
            let y = 1.0 - (j as f64 + 0.5) / dots_y * 2.0;
            for i in 0..self.dots_x {
                #[allow(clippy::cast_precision_loss)]
                let x = -self.half_width + (i as f64 + 0.5) / dots_x * 2.0 * self.half_width;
                if x * x + y * y > RADIUS * RADIUS {
                    continue;
                }
                let Some(idx) = segment_at(self.segments, self.total, turn_fraction(x, y)) else {
                    continue;
                };
                if let Some((px, py)) = painter.get_point(x, y) {
                    painter.paint(px, py, self.segments[idx].1);
                }
            }
        }
    }
}

impl Widget for PieChart {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let total = self.total();
        if area.width < 4 || area.height < 2 || total == 0 {
            return;
        }

        // Braille cells hold 2x4 dots, which are roughly square on screen
        let dots_x = usize::from(area.width) * 2;
        let dots_y = usize::from(area.height) * 4;
        #[allow(clippy::cast_precision_loss)]
        let half_width = dots_x as f64 / dots_y as f64;

        let shape = PieShape {
            segments: &self.segments,
            total,
            dots_x,
            dots_y,
            half_width,
        };

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-half_width, half_width])
            .y_bounds([-1.0, 1.0])
            .paint(|ctx| ctx.draw(&shape))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_fraction_quadrants() {
        assert!(turn_fraction(0.0, 1.0).abs() < 1e-9);
        assert!((turn_fraction(1.0, 0.0) - 0.25).abs() < 1e-9);
        assert!((turn_fraction(0.0, -1.0) - 0.5).abs() < 1e-9);
        assert!((turn_fraction(-1.0, 0.0) - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_segment_at() {
        let segments = [(3, Color::Red), (1, Color::Blue)];
        assert_eq!(segment_at(&segments, 4, 0.0), Some(0));
        assert_eq!(segment_at(&segments, 4, 0.74), Some(0));
        assert_eq!(segment_at(&segments, 4, 0.75), Some(1));
        assert_eq!(segment_at(&segments, 4, 0.999), Some(1));
        assert_eq!(segment_at(&[], 0, 0.5), None);
    }

    #[test]
    fn test_pie_paints_segment_colors() {
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        PieChart::new(vec![(1, Color::Red), (1, Color::Blue)]).render(area, &mut buf);

        let colors: Vec<Color> = buf.content().iter().map(|cell| cell.fg).collect();
        assert!(colors.contains(&Color::Red));
        assert!(colors.contains(&Color::Blue));
    }

    #[test]
    fn test_empty_pie_renders_nothing() {
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        PieChart::new(vec![(0, Color::Red)]).render(area, &mut buf);
        assert!(buf.content().iter().all(|cell| cell.symbol() == " "));
    }
}
