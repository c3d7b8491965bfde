use crate::data::{City, PolygonRegion};
use crate::geo::{mean_latitude, GeoPoint};
use crate::map::altitude::AltitudeMode;
use crate::map::paint::{Painter, Rgba};
use crate::map::projection::ProjectionEngine;
use glam::DVec2;
use std::sync::Arc;

/// Latitude band used to tint land polygons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatitudeBand {
    Polar,     // above 65°
    Temperate, // 30-65°
    Arid,      // 15-30°
    Tropical,  // below 15°
}

impl LatitudeBand {
    /// Band for a representative latitude (hemisphere-symmetric)
    pub fn from_latitude(lat: f64) -> Self {
        let lat = lat.abs();
        if lat > 65.0 {
            LatitudeBand::Polar
        } else if lat >= 30.0 {
            LatitudeBand::Temperate
        } else if lat >= 15.0 {
            LatitudeBand::Arid
        } else {
            LatitudeBand::Tropical
        }
    }
}

/// Colours for every layer of a frame
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub background: Rgba,
    pub ocean_inner: Rgba,
    pub ocean_outer: Rgba,
    pub atmosphere: Rgba,
    pub grid: Rgba,
    pub border: Rgba,
    pub coast_glow: Rgba,
    pub polar: Rgba,
    pub temperate: Rgba,
    pub arid: Rgba,
    pub tropical: Rgba,
    pub capital: Rgba,
    pub city: Rgba,
    pub label: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba::rgb(6, 10, 24),
            ocean_inner: Rgba::rgb(28, 86, 140),
            ocean_outer: Rgba::rgb(10, 38, 78),
            atmosphere: Rgba::rgb(120, 190, 255),
            grid: Rgba::rgb(70, 120, 170).with_opacity(0.5),
            border: Rgba::rgb(30, 36, 28),
            coast_glow: Rgba::rgb(170, 225, 255),
            polar: Rgba::rgb(232, 240, 245),
            temperate: Rgba::rgb(88, 150, 76),
            arid: Rgba::rgb(196, 170, 104),
            tropical: Rgba::rgb(40, 128, 60),
            capital: Rgba::rgb(255, 214, 64),
            city: Rgba::rgb(245, 245, 245),
            label: Rgba::rgb(255, 255, 255),
        }
    }
}

impl Palette {
    pub fn band_color(&self, band: LatitudeBand) -> Rgba {
        match band {
            LatitudeBand::Polar => self.polar,
            LatitudeBand::Temperate => self.temperate,
            LatitudeBand::Arid => self.arid,
            LatitudeBand::Tropical => self.tropical,
        }
    }
}

/// What a frame actually drew
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub grid_segments: usize,
    pub polygons_drawn: usize,
    /// Rings skipped because no vertex was inside the visible cap
    pub polygons_culled: usize,
    pub cities_drawn: usize,
}

const CAPITAL_DOT_RADIUS: f64 = 3.0;
const CITY_DOT_RADIUS: f64 = 2.0;

/// Draws one frame of the globe, back to front, through a [`Painter`].
#[derive(Debug, Clone, Default)]
pub struct RegionRenderer {
    pub palette: Palette,
}

impl RegionRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_palette(palette: Palette) -> Self {
        Self { palette }
    }

    /// Render a full frame. `cities` are only drawn at low altitude.
    pub fn render<P: Painter + ?Sized>(
        &self,
        engine: &ProjectionEngine,
        areas: &[Arc<PolygonRegion>],
        cities: &[&City],
        painter: &mut P,
    ) -> FrameStats {
        let mut stats = FrameStats::default();
        let config = engine.config();
        let anchor = engine.anchor();
        let globe_radius = engine.globe_screen_radius();

        painter.fill_background(self.palette.background);
        painter.fill_radial_disc(anchor, globe_radius, self.palette.ocean_inner, self.palette.ocean_outer);

        let fraction = engine.altitude_fraction();
        if fraction >= config.glow_threshold {
            let width = config.atmosphere_width;
            let color = self.palette.atmosphere.with_opacity(fraction * self.palette.atmosphere.opacity());
            painter.stroke_circle(anchor, globe_radius + width / 2.0, width, color);
        }

        stats.grid_segments = self.draw_grid(engine, painter);

        let border_width = match engine.altitude_mode() {
            AltitudeMode::High => config.border_width_high,
            AltitudeMode::Low => config.border_width_low,
        };
        let mut paths = Vec::new();
        for area in areas {
            for ring in area.rings() {
                match polygon_path(engine, ring) {
                    Some(path) => {
                        let band = LatitudeBand::from_latitude(mean_latitude(ring));
                        painter.fill_polygon(&path, self.palette.band_color(band));
                        painter.stroke_polygon(&path, border_width, self.palette.border);
                        paths.push(path);
                    }
                    None => stats.polygons_culled += 1,
                }
            }
        }
        stats.polygons_drawn = paths.len();

        let glow = self.palette.coast_glow.with_opacity(config.coast_glow_alpha);
        for path in &paths {
            painter.stroke_polygon(path, config.coast_glow_width, glow);
        }

        if engine.altitude_mode() == AltitudeMode::Low {
            stats.cities_drawn = self.draw_cities(engine, cities, painter);
        }

        tracing::trace!(?stats, "rendered frame");
        stats
    }

    /// Parallels and meridians, broken wherever a sample falls past the horizon.
    fn draw_grid<P: Painter + ?Sized>(&self, engine: &ProjectionEngine, painter: &mut P) -> usize {
        let config = engine.config();
        let spacing = config.grid_spacing_deg;
        let samples = config.grid_samples.max(2);
        if !(spacing > 0.0) {
            return 0;
        }

        let mut segments = 0;
        let mut run = Vec::with_capacity(samples);
        let mut flush = |run: &mut Vec<DVec2>, painter: &mut P| {
            if run.len() >= 2 {
                painter.stroke_polyline(run, 1.0, self.palette.grid);
                segments += 1;
            }
            run.clear();
        };

        let step = |i: usize| i as f64 / (samples - 1) as f64;

        // Parallels, poles excluded
        let parallels = (90.0 / spacing).ceil() as i64;
        for k in -parallels..=parallels {
            let lat = k as f64 * spacing;
            if lat.abs() >= 90.0 {
                continue;
            }
            for i in 0..samples {
                let lon = -180.0 + 360.0 * step(i);
                match engine.project(GeoPoint::new(lon, lat)) {
                    Some(p) => run.push(p),
                    None => flush(&mut run, &mut *painter),
                }
            }
            flush(&mut run, &mut *painter);
        }

        // Meridians
        let meridians = (180.0 / spacing).ceil() as i64;
        for k in -meridians..meridians {
            let lon = k as f64 * spacing;
            if !(-180.0..180.0).contains(&lon) {
                continue;
            }
            for i in 0..samples {
                let lat = -90.0 + 180.0 * step(i);
                match engine.project(GeoPoint::new(lon, lat)) {
                    Some(p) => run.push(p),
                    None => flush(&mut run, &mut *painter),
                }
            }
            flush(&mut run, &mut *painter);
        }

        segments
    }

    fn draw_cities<P: Painter + ?Sized>(&self, engine: &ProjectionEngine, cities: &[&City], painter: &mut P) -> usize {
        let label_offset = engine.config().label_offset;
        let mut drawn = 0;
        for city in cities {
            let Some(p) = engine.project(city.location) else {
                continue;
            };
            if !engine.is_on_screen(p) {
                continue;
            }
            let (radius, color) = if city.is_capital {
                (CAPITAL_DOT_RADIUS, self.palette.capital)
            } else {
                (CITY_DOT_RADIUS, self.palette.city)
            };
            painter.fill_dot(p, radius, color);
            let label_at = DVec2::new(p.x + radius + label_offset, p.y - radius);
            painter.text(label_at, &city.name, self.palette.label);
            drawn += 1;
        }
        drawn
    }
}

/// Screen path for one ring using the clamped projection, so rings that cross the
/// horizon close along it. `None` when no vertex lies inside the visible cap.
pub fn polygon_path(engine: &ProjectionEngine, ring: &[GeoPoint]) -> Option<Vec<DVec2>> {
    let mut any_visible = false;
    let path: Vec<DVec2> = ring
        .iter()
        .map(|&vertex| {
            let clamped = engine.project_clamped(vertex);
            any_visible |= clamped.within_cap;
            clamped.screen
        })
        .collect();
    any_visible.then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::map::paint::{DrawCall, RecordingPainter};

    fn square(code: &str, lon: f64, lat: f64, size: f64) -> Arc<PolygonRegion> {
        Arc::new(
            PolygonRegion::from_outline(
                code,
                code,
                &[(lon, lat), (lon + size, lat), (lon + size, lat + size), (lon, lat + size)],
            )
            .expect("valid square"),
        )
    }

    fn engine_at(center: GeoPoint, mode: AltitudeMode) -> ProjectionEngine {
        let mut engine = ProjectionEngine::new(EngineConfig::default(), 800.0, 600.0);
        engine.set_camera_center(center);
        engine.snap_altitude(mode.fraction());
        engine
    }

    fn render(engine: &ProjectionEngine, areas: &[Arc<PolygonRegion>], cities: &[&City]) -> (RecordingPainter, FrameStats) {
        let mut painter = RecordingPainter::new();
        let stats = RegionRenderer::new().render(engine, areas, cities, &mut painter);
        (painter, stats)
    }

    fn index_of(calls: &[DrawCall], pred: impl Fn(&DrawCall) -> bool) -> Option<usize> {
        calls.iter().position(pred)
    }

    #[test]
    fn test_latitude_bands() {
        assert_eq!(LatitudeBand::from_latitude(70.0), LatitudeBand::Polar);
        assert_eq!(LatitudeBand::from_latitude(-70.0), LatitudeBand::Polar);
        assert_eq!(LatitudeBand::from_latitude(45.0), LatitudeBand::Temperate);
        assert_eq!(LatitudeBand::from_latitude(-20.0), LatitudeBand::Arid);
        assert_eq!(LatitudeBand::from_latitude(5.0), LatitudeBand::Tropical);
    }

    #[test]
    fn test_layers_are_drawn_back_to_front() {
        let engine = engine_at(GeoPoint::new(0.0, 0.0), AltitudeMode::High);
        let areas = [square("AA", 2.0, 2.0, 4.0)];
        let (painter, stats) = render(&engine, &areas, &[]);
        let calls = &painter.calls;

        assert!(matches!(calls[0], DrawCall::Background(_)));
        assert!(matches!(calls[1], DrawCall::RadialDisc { .. }));
        assert!(matches!(calls[2], DrawCall::Circle { .. }));

        let grid = index_of(calls, |c| matches!(c, DrawCall::Polyline { .. })).expect("grid drawn");
        let fill = index_of(calls, |c| matches!(c, DrawCall::PolygonFill { .. })).expect("polygon drawn");
        let last_grid = calls.iter().rposition(|c| matches!(c, DrawCall::Polyline { .. })).expect("grid");
        assert!(grid > 2 && last_grid < fill);

        // Border then glow, both after the fill
        let cfg = engine.config();
        assert_eq!(stroke_widths(calls), [cfg.border_width_high, cfg.coast_glow_width]);
        assert_eq!(stats.polygons_drawn, 1);
    }

    #[test]
    fn test_low_altitude_skips_glow_and_draws_cities() {
        let engine = engine_at(GeoPoint::new(0.0, 0.0), AltitudeMode::Low);
        let capital = City::new("Capital", "AA", 1.0, 1.0).capital();
        let town = City::new("Town", "AA", -1.0, -1.0);
        let hidden = City::new("Far", "BB", 90.0, 0.0);
        let (painter, stats) = render(&engine, &[], &[&capital, &town, &hidden]);

        assert!(!painter.calls.iter().any(|c| matches!(c, DrawCall::Circle { .. })));
        assert_eq!(stats.cities_drawn, 2);

        let dots: Vec<f64> = painter
            .calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Dot { radius, .. } => Some(*radius),
                _ => None,
            })
            .collect();
        assert_eq!(dots, [CAPITAL_DOT_RADIUS, CITY_DOT_RADIUS]);

        // Label sits clear of its dot
        let dot = engine.project(capital.location).expect("visible");
        let label = painter
            .calls
            .iter()
            .find_map(|c| match c {
                DrawCall::Text { at, text, .. } if text == "Capital" => Some(*at),
                _ => None,
            })
            .expect("label drawn");
        assert!(label.x > dot.x + CAPITAL_DOT_RADIUS);
    }

    fn stroke_widths(calls: &[DrawCall]) -> Vec<f64> {
        calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::PolygonStroke { width, .. } => Some(*width),
                _ => None,
            })
            .collect()
    }

    fn atmosphere(calls: &[DrawCall]) -> Option<Rgba> {
        calls.iter().find_map(|c| match c {
            DrawCall::Circle { color, .. } => Some(*color),
            _ => None,
        })
    }

    #[test]
    fn test_low_altitude_thickens_borders() {
        let engine = engine_at(GeoPoint::new(0.0, 0.0), AltitudeMode::Low);
        let areas = [square("AA", -1.0, -1.0, 2.0)];
        let (painter, stats) = render(&engine, &areas, &[]);
        let cfg = engine.config();
        assert_eq!(stats.polygons_drawn, 1);
        assert_eq!(stroke_widths(&painter.calls), [cfg.border_width_low, cfg.coast_glow_width]);
        assert!(cfg.border_width_low > cfg.border_width_high);
    }

    #[test]
    fn test_atmosphere_fades_with_altitude() {
        let full = engine_at(GeoPoint::new(0.0, 0.0), AltitudeMode::High);
        let (painter, _) = render(&full, &[], &[]);
        assert_eq!(atmosphere(&painter.calls).map(|c| c.a), Some(255));

        let mut half = engine_at(GeoPoint::new(0.0, 0.0), AltitudeMode::High);
        half.snap_altitude(0.5);
        let (painter, _) = render(&half, &[], &[]);
        let alpha = atmosphere(&painter.calls).expect("ring drawn at half altitude").a;
        assert!((alpha as f64 - 0.5 * 255.0).abs() <= 1.0, "alpha {alpha}");

        let mut faint = engine_at(GeoPoint::new(0.0, 0.0), AltitudeMode::High);
        faint.snap_altitude(0.04);
        assert!(faint.altitude_fraction() < faint.config().glow_threshold);
        let (painter, _) = render(&faint, &[], &[]);
        assert_eq!(atmosphere(&painter.calls), None);
    }

    #[test]
    fn test_high_altitude_hides_cities() {
        let engine = engine_at(GeoPoint::new(0.0, 0.0), AltitudeMode::High);
        let city = City::new("Capital", "AA", 1.0, 1.0).capital();
        let (painter, stats) = render(&engine, &[], &[&city]);
        assert_eq!(stats.cities_drawn, 0);
        assert!(!painter.calls.iter().any(|c| matches!(c, DrawCall::Dot { .. } | DrawCall::Text { .. })));
    }

    #[test]
    fn test_polygon_beyond_horizon_is_skipped() {
        let engine = engine_at(GeoPoint::new(0.0, 0.0), AltitudeMode::Low);
        let areas = [square("NEAR", -1.0, -1.0, 2.0), square("FAR", 120.0, 10.0, 5.0)];
        let (painter, stats) = render(&engine, &areas, &[]);
        assert_eq!(stats.polygons_drawn, 1);
        assert_eq!(stats.polygons_culled, 1);
        let fills = painter.calls.iter().filter(|c| matches!(c, DrawCall::PolygonFill { .. })).count();
        assert_eq!(fills, 1);
    }

    #[test]
    fn test_straddling_polygon_is_truncated_at_horizon() {
        let engine = engine_at(GeoPoint::new(0.0, 0.0), AltitudeMode::High);
        let ring = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(90.0, 0.0),
            GeoPoint::new(90.0, 10.0),
            GeoPoint::new(0.0, 10.0),
        ];
        let path = polygon_path(&engine, &ring).expect("one vertex is visible");
        assert_eq!(path.len(), 4);
        let limit = engine.globe_screen_radius() + 1e-6;
        assert!(path.iter().all(|p| p.distance(engine.anchor()) <= limit));
    }

    #[test]
    fn test_grid_lines_break_at_horizon() {
        let engine = engine_at(GeoPoint::new(0.0, 0.0), AltitudeMode::High);
        let (painter, stats) = render(&engine, &[], &[]);
        assert!(stats.grid_segments > 0);

        let limit = engine.globe_screen_radius() * engine.config().horizon_slack + 1e-6;
        let anchor = engine.anchor();
        for call in &painter.calls {
            if let DrawCall::Polyline { points, .. } = call {
                assert!(points.len() >= 2);
                assert!(points.iter().all(|p| p.distance(anchor) <= limit), "grid chord crosses the back side");
            }
        }
    }

    #[test]
    fn test_polygon_across_antimeridian_stays_compact() {
        let engine = engine_at(GeoPoint::new(179.9, 0.0), AltitudeMode::Low);
        let ring = [
            GeoPoint::new(179.0, -1.0),
            GeoPoint::new(-179.0, -1.0),
            GeoPoint::new(-179.0, 1.0),
            GeoPoint::new(179.0, 1.0),
        ];
        let path = polygon_path(&engine, &ring).expect("visible");
        let width = path.iter().map(|p| p.x).fold(f64::MIN, f64::max) - path.iter().map(|p| p.x).fold(f64::MAX, f64::min);
        let expected = engine.deg_to_pixels(2.0);
        assert!((width - expected).abs() < expected * 0.01, "width {width} vs {expected}");
    }
}
