use glam::DVec2;

/// 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same colour with alpha scaled to `opacity` (0..=1).
    pub fn with_opacity(self, opacity: f64) -> Self {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }

    pub fn opacity(self) -> f64 {
        self.a as f64 / 255.0
    }

    /// Linear blend toward `other` by `t` (0 = self, 1 = other), alpha included.
    pub fn lerp(self, other: Rgba, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Source-over compositing of `self` onto an opaque `dst`.
    pub fn over(self, dst: Rgba) -> Rgba {
        Rgba { a: 255, ..dst.lerp(Rgba { a: 255, ..self }, self.opacity()) }
    }
}

/// Draw-call sink for [`crate::map::RegionRenderer`].
///
/// Coordinates are screen units with the origin top-left, y down.
pub trait Painter {
    fn fill_background(&mut self, color: Rgba);
    /// Filled disc shaded from `inner` at the center to `outer` at the rim.
    fn fill_radial_disc(&mut self, center: DVec2, radius: f64, inner: Rgba, outer: Rgba);
    fn stroke_circle(&mut self, center: DVec2, radius: f64, width: f64, color: Rgba);
    fn stroke_polyline(&mut self, points: &[DVec2], width: f64, color: Rgba);
    /// Closed polygon outline (last point joins the first).
    fn stroke_polygon(&mut self, points: &[DVec2], width: f64, color: Rgba);
    fn fill_polygon(&mut self, points: &[DVec2], color: Rgba);
    fn fill_dot(&mut self, center: DVec2, radius: f64, color: Rgba);
    /// Text with its top-left corner at `at`.
    fn text(&mut self, at: DVec2, text: &str, color: Rgba);
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Background(Rgba),
    RadialDisc { center: DVec2, radius: f64, inner: Rgba, outer: Rgba },
    Circle { center: DVec2, radius: f64, width: f64, color: Rgba },
    Polyline { points: Vec<DVec2>, width: f64, color: Rgba },
    PolygonStroke { points: Vec<DVec2>, width: f64, color: Rgba },
    PolygonFill { points: Vec<DVec2>, color: Rgba },
    Dot { center: DVec2, radius: f64, color: Rgba },
    Text { at: DVec2, text: String, color: Rgba },
}

/// Painter that records calls instead of drawing. Useful for hosts that replay
/// frames into another backend, and for tests.
#[derive(Debug, Default)]
pub struct RecordingPainter {
    pub calls: Vec<DrawCall>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Painter for RecordingPainter {
    fn fill_background(&mut self, color: Rgba) {
        self.calls.push(DrawCall::Background(color));
    }

    fn fill_radial_disc(&mut self, center: DVec2, radius: f64, inner: Rgba, outer: Rgba) {
        self.calls.push(DrawCall::RadialDisc { center, radius, inner, outer });
    }

    fn stroke_circle(&mut self, center: DVec2, radius: f64, width: f64, color: Rgba) {
        self.calls.push(DrawCall::Circle { center, radius, width, color });
    }

    fn stroke_polyline(&mut self, points: &[DVec2], width: f64, color: Rgba) {
        self.calls.push(DrawCall::Polyline { points: points.to_vec(), width, color });
    }

    fn stroke_polygon(&mut self, points: &[DVec2], width: f64, color: Rgba) {
        self.calls.push(DrawCall::PolygonStroke { points: points.to_vec(), width, color });
    }

    fn fill_polygon(&mut self, points: &[DVec2], color: Rgba) {
        self.calls.push(DrawCall::PolygonFill { points: points.to_vec(), color });
    }

    fn fill_dot(&mut self, center: DVec2, radius: f64, color: Rgba) {
        self.calls.push(DrawCall::Dot { center, radius, color });
    }

    fn text(&mut self, at: DVec2, text: &str, color: Rgba) {
        self.calls.push(DrawCall::Text { at, text: text.to_string(), color });
    }
}
