use crate::braille::BrailleCanvas;
use crate::map::geometry::{draw_circle, draw_segment, scanline_spans};
use crate::map::{Painter, Rgba};
use glam::DVec2;

/// A text label anchored at a character cell
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub col: u16,
    pub row: u16,
    pub text: String,
    pub color: Rgba,
}

/// [`Painter`] backed by a [`BrailleCanvas`].
///
/// Screen units are braille dots. Areas (fills, the ocean disc, translucent glows) tint
/// cell backgrounds; opaque strokes and dots set braille dots. Text is collected as
/// labels for the host widget to overlay.
#[derive(Debug, Clone)]
pub struct TerminalPainter {
    canvas: BrailleCanvas,
    labels: Vec<Label>,
}

impl TerminalPainter {
    /// Painter for a `cols` x `rows` character area.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            canvas: BrailleCanvas::new(cols, rows),
            labels: Vec::new(),
        }
    }

    /// Viewport size in screen units, for [`crate::map::ProjectionEngine::set_viewport`].
    pub fn viewport(&self) -> (f64, f64) {
        let (w, h) = self.canvas.pixel_size();
        (w as f64, h as f64)
    }

    pub fn canvas(&self) -> &BrailleCanvas {
        &self.canvas
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Cells whose centers fall inside `polygon`, visited row by row.
    fn for_cells_in(&mut self, polygon: &[DVec2], color: Rgba) {
        if polygon.len() < 3 {
            return;
        }
        for cy in 0..self.canvas.height() {
            let (_, y) = BrailleCanvas::cell_center(0, cy);
            for (x0, x1) in scanline_spans(polygon, y) {
                // centers are at 2*cx + 1
                let first = ((x0 - 1.0) / 2.0).ceil().max(0.0) as usize;
                let last = ((x1 - 1.0) / 2.0).floor();
                if last < 0.0 {
                    continue;
                }
                let last = (last as usize).min(self.canvas.width().saturating_sub(1));
                for cx in first..=last {
                    self.canvas.blend_cell(cx, cy, color);
                }
            }
        }
    }

    /// Blend cells within `[inner, outer]` distance of `center`.
    fn blend_annulus(&mut self, center: DVec2, inner: f64, outer: f64, color: impl Fn(f64) -> Rgba) {
        for cy in 0..self.canvas.height() {
            for cx in 0..self.canvas.width() {
                let (x, y) = BrailleCanvas::cell_center(cx, cy);
                let d = DVec2::new(x, y).distance(center);
                if d >= inner && d <= outer {
                    self.canvas.blend_cell(cx, cy, color(d));
                }
            }
        }
    }

    /// Translucent wide stroke: tint every cell the thickened path passes through once.
    fn soft_stroke(&mut self, points: &[DVec2], closed: bool, width: f64, color: Rgba) {
        let mut mask = BrailleCanvas::new(self.canvas.width(), self.canvas.height());
        stroke_dots(&mut mask, points, closed, width, color);
        for cy in 0..mask.height() {
            for cx in 0..mask.width() {
                if mask.cell(cx, cy).is_some_and(|c| c.symbol != '\u{2800}') {
                    self.canvas.blend_cell(cx, cy, color);
                }
            }
        }
    }

    fn stroke(&mut self, points: &[DVec2], closed: bool, width: f64, color: Rgba) {
        if color.a == 255 {
            stroke_dots(&mut self.canvas, points, closed, width, color);
        } else {
            self.soft_stroke(points, closed, width, color);
        }
    }
}

fn stroke_dots(canvas: &mut BrailleCanvas, points: &[DVec2], closed: bool, width: f64, color: Rgba) {
    for pair in points.windows(2) {
        draw_segment(canvas, pair[0], pair[1], width, color);
    }
    if closed && points.len() > 2 {
        if let (Some(&last), Some(&first)) = (points.last(), points.first()) {
            draw_segment(canvas, last, first, width, color);
        }
    }
}

impl Painter for TerminalPainter {
    fn fill_background(&mut self, color: Rgba) {
        self.canvas.clear(Rgba { a: 255, ..color });
        self.labels.clear();
    }

    fn fill_radial_disc(&mut self, center: DVec2, radius: f64, inner: Rgba, outer: Rgba) {
        if !(radius > 0.0) {
            return;
        }
        self.blend_annulus(center, 0.0, radius, |d| inner.lerp(outer, d / radius));
    }

    fn stroke_circle(&mut self, center: DVec2, radius: f64, width: f64, color: Rgba) {
        let half = (width / 2.0).max(1.0);
        self.blend_annulus(center, radius - half, radius + half, |_| color);
    }

    fn stroke_polyline(&mut self, points: &[DVec2], width: f64, color: Rgba) {
        self.stroke(points, false, width, color);
    }

    fn stroke_polygon(&mut self, points: &[DVec2], width: f64, color: Rgba) {
        self.stroke(points, true, width, color);
    }

    fn fill_polygon(&mut self, points: &[DVec2], color: Rgba) {
        self.for_cells_in(points, color);
    }

    fn fill_dot(&mut self, center: DVec2, radius: f64, color: Rgba) {
        if !center.is_finite() {
            return;
        }
        draw_circle(
            &mut self.canvas,
            center.x.round() as i32,
            center.y.round() as i32,
            radius.round().max(0.0) as i32,
            color,
        );
    }

    fn text(&mut self, at: DVec2, text: &str, color: Rgba) {
        if !(at.x >= 0.0 && at.y >= 0.0) {
            return;
        }
        let col = (at.x / 2.0) as usize;
        let row = (at.y / 4.0) as usize;
        if col >= self.canvas.width() || row >= self.canvas.height() {
            return;
        }
        self.labels.push(Label {
            col: col as u16,
            row: row as u16,
            text: text.to_string(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_polygon_tints_interior_cells() {
        let mut painter = TerminalPainter::new(10, 5);
        painter.fill_background(Rgba::rgb(0, 0, 0));
        let square = [
            DVec2::new(4.0, 4.0),
            DVec2::new(12.0, 4.0),
            DVec2::new(12.0, 16.0),
            DVec2::new(4.0, 16.0),
        ];
        painter.fill_polygon(&square, Rgba::rgb(0, 200, 0));

        let green = |cx, cy| painter.canvas().cell(cx, cy).map(|c| c.bg) == Some(Rgba::rgb(0, 200, 0));
        assert!(green(2, 1));
        assert!(green(5, 3));
        assert!(!green(0, 0));
        assert!(!green(7, 1));
    }

    #[test]
    fn test_opaque_stroke_sets_dots_translucent_stroke_tints() {
        let line = [DVec2::new(0.0, 2.0), DVec2::new(19.0, 2.0)];

        let mut painter = TerminalPainter::new(10, 2);
        painter.fill_background(Rgba::rgb(0, 0, 0));
        painter.stroke_polyline(&line, 1.0, Rgba::rgb(255, 255, 255));
        assert_eq!(painter.canvas().row_to_string(0), "⠤".repeat(10));

        let mut painter = TerminalPainter::new(10, 2);
        painter.fill_background(Rgba::rgb(0, 0, 0));
        painter.stroke_polyline(&line, 1.0, Rgba::rgb(255, 255, 255).with_opacity(0.5));
        let cell = painter.canvas().cell(3, 0).expect("in range");
        assert_eq!(cell.symbol, '\u{2800}');
        assert!(cell.bg.r > 100);
    }

    #[test]
    fn test_labels_are_cell_aligned_and_clipped() {
        let mut painter = TerminalPainter::new(10, 5);
        painter.text(DVec2::new(7.0, 9.0), "Lima", Rgba::rgb(255, 255, 255));
        painter.text(DVec2::new(-3.0, 9.0), "Off", Rgba::rgb(255, 255, 255));
        painter.text(DVec2::new(500.0, 9.0), "Far", Rgba::rgb(255, 255, 255));
        assert_eq!(painter.labels().len(), 1);
        assert_eq!((painter.labels()[0].col, painter.labels()[0].row), (3, 2));

        painter.fill_background(Rgba::rgb(0, 0, 0));
        assert!(painter.labels().is_empty());
    }

    #[test]
    fn test_radial_disc_shades_toward_rim() {
        let mut painter = TerminalPainter::new(20, 10);
        painter.fill_background(Rgba::rgb(0, 0, 0));
        painter.fill_radial_disc(DVec2::new(20.0, 20.0), 18.0, Rgba::rgb(0, 0, 200), Rgba::rgb(0, 0, 40));
        let center = painter.canvas().cell(9, 4).expect("in range").bg;
        let edge = painter.canvas().cell(2, 4).expect("in range").bg;
        let outside = painter.canvas().cell(19, 0).expect("in range").bg;
        assert!(center.b > edge.b && edge.b >= 40);
        assert_eq!(outside, Rgba::rgb(0, 0, 0));
    }
}
