use crate::config::EngineConfig;
use crate::geo::{wrap_lon, GeoPoint};
use crate::map::altitude::{AltitudeMode, Smoothed};
use glam::DVec2;

/// Below this angular distance (radians) a point is treated as the camera itself.
const EPSILON: f64 = 1e-12;

/// Host-facing camera inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub center: GeoPoint,
    /// Radians clockwise from north. Stored for the host; projection ignores it.
    pub heading: f64,
    /// Requested altitude fraction (0 = low/close, 1 = high/far)
    pub altitude: f64,
}

/// A forward projection that never culls: points past the horizon are pulled onto it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampedPoint {
    pub screen: DVec2,
    /// Whether the point lies inside the nominal (un-slacked) visible cap
    pub within_cap: bool,
}

/// Azimuthal-equidistant projection centered on a moving camera.
///
/// Owns the only mutable view state: the camera and the smoothed altitude.
/// Call [`ProjectionEngine::update`] once per tick before rendering or querying.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    config: EngineConfig,
    camera: CameraState,
    angular_radius: Smoothed,
    altitude: Smoothed,
    width: f64,
    height: f64,
}

impl ProjectionEngine {
    /// Engine at high altitude looking at (0, 0).
    ///
    /// `config` must pass [`EngineConfig::validate`]; configs loaded through
    /// [`EngineConfig::load`] already do.
    pub fn new(config: EngineConfig, width: f64, height: f64) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid engine config: {config:?}");
        let angular_radius = Smoothed::new(config.high_angular_radius);
        Self {
            config,
            camera: CameraState {
                center: GeoPoint::default(),
                heading: 0.0,
                altitude: AltitudeMode::High.fraction(),
            },
            angular_radius,
            altitude: Smoothed::new(AltitudeMode::High.fraction()),
            width,
            height,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn center(&self) -> GeoPoint {
        self.camera.center
    }

    pub fn set_camera_center(&mut self, center: GeoPoint) {
        self.camera.center = center.wrapped();
    }

    pub fn heading(&self) -> f64 {
        self.camera.heading
    }

    pub fn set_heading(&mut self, heading: f64) {
        self.camera.heading = heading.rem_euclid(std::f64::consts::TAU);
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    pub fn viewport(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Request an altitude mode. The view eases toward it over subsequent updates.
    pub fn set_altitude_mode(&mut self, mode: AltitudeMode) {
        self.set_altitude_target(mode.fraction());
    }

    /// Request a continuous altitude fraction in [0, 1]. Non-finite input is ignored.
    pub fn set_altitude_target(&mut self, fraction: f64) {
        if !fraction.is_finite() {
            return;
        }
        let fraction = fraction.clamp(0.0, 1.0);
        if AltitudeMode::from_fraction(fraction) != self.altitude_mode() {
            tracing::debug!(fraction, "altitude mode change requested");
        }
        self.camera.altitude = fraction;
        self.altitude.set_target(fraction);
        self.angular_radius.set_target(self.radius_for(fraction));
    }

    /// Jump to an altitude with no transition (new views, region switches).
    pub fn snap_altitude(&mut self, fraction: f64) {
        if !fraction.is_finite() {
            return;
        }
        let fraction = fraction.clamp(0.0, 1.0);
        self.camera.altitude = fraction;
        self.altitude.snap(fraction);
        self.angular_radius.snap(self.radius_for(fraction));
    }

    fn radius_for(&self, fraction: f64) -> f64 {
        let low = self.config.low_angular_radius;
        low + (self.config.high_angular_radius - low) * fraction
    }

    /// Advance altitude smoothing by `dt` seconds.
    pub fn update(&mut self, dt: f64) {
        let rate = self.config.smoothing_rate;
        self.angular_radius.step(dt, rate);
        self.altitude.step(dt, rate);
    }

    /// Host-requested altitude mode (not the in-flight smoothed value).
    pub fn altitude_mode(&self) -> AltitudeMode {
        AltitudeMode::from_fraction(self.camera.altitude)
    }

    /// Smoothed altitude fraction driving glow and disc size.
    pub fn altitude_fraction(&self) -> f64 {
        self.altitude.value()
    }

    /// Smoothed visible cap in radians.
    pub fn angular_radius(&self) -> f64 {
        self.angular_radius.value()
    }

    /// Whether altitude smoothing has converged.
    pub fn is_settled(&self) -> bool {
        self.angular_radius.is_settled(1e-6) && self.altitude.is_settled(1e-6)
    }

    /// Screen position of the camera.
    pub fn anchor(&self) -> DVec2 {
        let (fx, fy) = self.config.anchor_fraction;
        DVec2::new(self.width * fx, self.height * fy)
    }

    /// Disc radius bounds `(high, low)`: at high altitude the globe edge shows inside
    /// the viewport; at low altitude it overflows every corner.
    pub fn screen_radius_bounds(&self) -> (f64, f64) {
        let a = self.anchor();
        let (w, h) = (self.width, self.height);

        let nearest_edge = a.x.min(w - a.x).min(a.y).min(h - a.y);
        let high = (nearest_edge * 1.6).max(w.min(h) * 0.6);

        let farthest_corner = [DVec2::ZERO, DVec2::new(w, 0.0), DVec2::new(0.0, h), DVec2::new(w, h)]
            .into_iter()
            .map(|corner| corner.distance(a))
            .fold(0.0, f64::max);
        let low = farthest_corner * 1.1;

        (high, low)
    }

    /// On-screen globe disc radius for the current smoothed altitude.
    pub fn globe_screen_radius(&self) -> f64 {
        let (high, low) = self.screen_radius_bounds();
        high + (low - high) * (1.0 - self.altitude_fraction())
    }

    /// Screen units per radian of arc.
    pub fn scale(&self) -> f64 {
        self.globe_screen_radius() / self.angular_radius()
    }

    /// Convert degrees of arc to screen units.
    pub fn deg_to_pixels(&self, degrees: f64) -> f64 {
        degrees.to_radians() * self.scale()
    }

    /// Great-circle distance (radians) from the camera to `point`.
    pub fn angular_distance(&self, point: GeoPoint) -> f64 {
        self.camera.center.angular_distance(point)
    }

    /// Angular distance and unit planar direction (east, north) from the camera.
    fn azimuthal(&self, point: GeoPoint) -> (f64, DVec2) {
        let (lng0, lat0) = self.camera.center.to_radians();
        let (lng, lat) = point.to_radians();
        let d_lon = lng - lng0;
        let (sin_lat0, cos_lat0) = lat0.sin_cos();
        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_dlon, cos_dlon) = d_lon.sin_cos();

        let cos_c = (sin_lat0 * sin_lat + cos_lat0 * cos_lat * cos_dlon).clamp(-1.0, 1.0);

        // |(east, north)| == sin(c), so normalising divides by sin(c).
        // c = atan2(|planar|, cos c), equal to the clamped acos form
        let planar = DVec2::new(cos_lat * sin_dlon, cos_lat0 * sin_lat - sin_lat0 * cos_lat * cos_dlon);
        let sin_c = planar.length();
        let c = sin_c.atan2(cos_c);
        let direction = if sin_c > EPSILON {
            planar / sin_c
        } else {
            // Camera itself or its antipode. At the antipode every bearing is valid: pick south.
            DVec2::NEG_Y
        };
        (c, direction)
    }

    fn place(&self, c: f64, direction: DVec2) -> DVec2 {
        let anchor = self.anchor();
        if c < EPSILON {
            return anchor;
        }
        let offset = direction * (c * self.scale());
        DVec2::new(anchor.x + offset.x, anchor.y - offset.y)
    }

    /// Project a geographic point to the screen.
    /// Returns `None` past the horizon (angular radius times the configured slack).
    pub fn project(&self, point: GeoPoint) -> Option<DVec2> {
        let (c, direction) = self.azimuthal(point);
        if c > self.angular_radius() * self.config.horizon_slack {
            return None;
        }
        Some(self.place(c, direction))
    }

    /// Project without culling: beyond the cap, the point is pulled onto the horizon circle.
    pub fn project_clamped(&self, point: GeoPoint) -> ClampedPoint {
        let (c, direction) = self.azimuthal(point);
        let radius = self.angular_radius();
        ClampedPoint {
            screen: self.place(c.min(radius), direction),
            within_cap: c <= radius,
        }
    }

    /// Inverse projection: screen position back to longitude/latitude.
    /// Taps on the anchor itself return the camera center. Offsets reaching past
    /// the antipode stop there instead of wrapping round the globe.
    pub fn unproject(&self, screen: DVec2) -> GeoPoint {
        let scale = self.scale();
        if !(scale.is_finite() && scale > EPSILON) {
            return self.camera.center;
        }

        let anchor = self.anchor();
        let dx = (screen.x - anchor.x) / scale;
        let dy = (anchor.y - screen.y) / scale;
        let rho = dx.hypot(dy);
        if rho < EPSILON {
            return self.camera.center;
        }

        let (lng0, lat0) = self.camera.center.to_radians();
        let (sin_lat0, cos_lat0) = lat0.sin_cos();
        let (east, north) = (dx / rho, dy / rho);
        let (sin_c, cos_c) = rho.min(std::f64::consts::PI).sin_cos();

        let lat = (cos_c * sin_lat0 + north * sin_c * cos_lat0).clamp(-1.0, 1.0).asin();
        let lng = lng0 + (east * sin_c).atan2(cos_lat0 * cos_c - north * sin_lat0 * sin_c);

        GeoPoint::new(wrap_lon(lng.to_degrees()), lat.to_degrees())
    }

    /// Whether `point` is inside the nominal visible cap.
    pub fn is_within_cap(&self, point: GeoPoint) -> bool {
        self.angular_distance(point) <= self.angular_radius()
    }

    /// Whether a screen point falls inside the viewport, with a small margin.
    pub fn is_on_screen(&self, p: DVec2) -> bool {
        p.x >= -10.0 && p.x < self.width + 10.0 && p.y >= -10.0 && p.y < self.height + 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centered_config() -> EngineConfig {
        EngineConfig {
            anchor_fraction: (0.5, 0.5),
            ..EngineConfig::default()
        }
    }

    fn engine_at(center: GeoPoint, fraction: f64) -> ProjectionEngine {
        let mut engine = ProjectionEngine::new(EngineConfig::default(), 800.0, 600.0);
        engine.set_camera_center(center);
        engine.snap_altitude(fraction);
        engine
    }

    fn lon_diff(a: f64, b: f64) -> f64 {
        wrap_lon(a - b).abs()
    }

    fn assert_round_trip(engine: &ProjectionEngine, point: GeoPoint) {
        let screen = engine
            .project(point)
            .unwrap_or_else(|| panic!("{point:?} should be visible from {:?}", engine.center()));
        let back = engine.unproject(screen);
        assert!(
            lon_diff(back.lon, point.lon) < 1e-6 && (back.lat - point.lat).abs() < 1e-6,
            "round trip {point:?} -> {screen:?} -> {back:?} (camera {:?})",
            engine.center()
        );
    }

    #[test]
    fn test_round_trip_near_anchor_and_horizon() {
        let centers = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(-74.0, 40.7),
            GeoPoint::new(151.2, -33.9),
            GeoPoint::new(179.9, 12.0),
            GeoPoint::new(-120.0, 70.0),
            GeoPoint::new(10.0, -60.0),
        ];
        for center in centers {
            for fraction in [0.0, 0.5, 1.0] {
                let engine = engine_at(center, fraction);
                let cap = engine.angular_radius();
                for i in 0..16 {
                    let bearing = i as f64 / 16.0 * std::f64::consts::TAU;
                    for dist in [cap * 0.001, cap * 0.3, cap * 0.7, cap * 0.99] {
                        assert_round_trip(&engine, center.destination(bearing, dist));
                    }
                }
            }
        }
    }

    #[test]
    fn test_horizon_culling() {
        let engine = engine_at(GeoPoint::new(20.0, 30.0), 1.0);
        let cap = engine.angular_radius();
        let beyond = engine.center().destination(1.0, cap * 1.2);
        let inside = engine.center().destination(1.0, cap * 0.99);
        assert!(engine.project(beyond).is_none());
        assert!(engine.project(inside).is_some());

        // Slack zone: culled by the cap but still drawn
        let slack = engine.center().destination(1.0, cap * 1.03);
        assert!(engine.project(slack).is_some());
        assert!(!engine.is_within_cap(slack));
    }

    #[test]
    fn test_antimeridian_is_continuous() {
        let engine = engine_at(GeoPoint::new(179.9, 0.0), 0.0);
        let target = GeoPoint::new(-179.9, 0.0);
        let d = engine.angular_distance(target).to_degrees();
        assert!((d - 0.2).abs() < 1e-6, "distance {d}");

        let p = engine.project(target).expect("just across the antimeridian");
        let anchor = engine.anchor();
        assert!(p.x > anchor.x, "east of camera should be right of anchor");
        assert!((p.x - anchor.x - engine.deg_to_pixels(0.2)).abs() < 1e-6);
        assert_round_trip(&engine, target);
    }

    #[test]
    fn test_pole_produces_finite_values() {
        let engine = engine_at(GeoPoint::new(0.0, 89.999), 1.0);
        for lon in (-180..180).step_by(15) {
            for lat in (-90..=90).step_by(10) {
                let target = GeoPoint::new(lon as f64, lat as f64);
                if let Some(p) = engine.project(target) {
                    assert!(p.is_finite(), "{target:?} -> {p:?}");
                }
                assert!(engine.project_clamped(target).screen.is_finite());
            }
        }
        let (w, h) = (engine.viewport().x as i32, engine.viewport().y as i32);
        for x in (0..w).step_by(40) {
            for y in (0..h).step_by(40) {
                let g = engine.unproject(DVec2::new(x as f64, y as f64));
                assert!(g.lon.is_finite() && g.lat.is_finite(), "({x},{y}) -> {g:?}");
            }
        }
    }

    #[test]
    fn test_camera_at_exact_pole_and_antipode() {
        let engine = engine_at(GeoPoint::new(45.0, 90.0), 1.0);
        assert!(engine.project_clamped(GeoPoint::new(0.0, -90.0)).screen.is_finite());
        let engine = engine_at(GeoPoint::new(0.0, 0.0), 1.0);
        let antipode = engine.project_clamped(GeoPoint::new(180.0, 0.0));
        assert!(antipode.screen.is_finite());
        assert!(!antipode.within_cap);
    }

    #[test]
    fn test_smoothing_is_monotonic_and_converges() {
        let mut engine = engine_at(GeoPoint::new(0.0, 0.0), 1.0);
        let high = engine.config().high_angular_radius;
        let low = engine.config().low_angular_radius;
        assert_eq!(engine.angular_radius(), high);

        engine.set_altitude_mode(AltitudeMode::Low);
        let mut prev = engine.angular_radius();
        for _ in 0..300 {
            engine.update(1.0 / 60.0);
            let r = engine.angular_radius();
            assert!(r >= low, "overshot: {r} < {low}");
            if prev - low > 1e-12 {
                assert!(r < prev, "not strictly decreasing: {prev} -> {r}");
            }
            prev = r;
        }
        assert!((engine.angular_radius() - low).abs() < 1e-6);
        assert!(engine.altitude_fraction() < 1e-6);
        assert!(engine.is_settled());
    }

    #[test]
    fn test_altitude_visuals_move_in_lockstep() {
        let mut engine = engine_at(GeoPoint::new(0.0, 0.0), 1.0);
        engine.set_altitude_mode(AltitudeMode::Low);
        engine.update(0.1);
        let cfg = engine.config();
        let radius_progress =
            (cfg.high_angular_radius - engine.angular_radius()) / (cfg.high_angular_radius - cfg.low_angular_radius);
        let altitude_progress = 1.0 - engine.altitude_fraction();
        assert!((radius_progress - altitude_progress).abs() < 1e-12);
        assert_eq!(engine.altitude_mode(), AltitudeMode::Low);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut engine = ProjectionEngine::new(centered_config(), 800.0, 600.0);
        engine.snap_altitude(0.0);
        assert!((engine.angular_radius() - 0.18).abs() < 1e-12);

        let east = engine.project(GeoPoint::new(5.0, 0.0)).expect("5° is inside the cap");
        assert!(east.x > 400.0);
        assert!((east.y - 300.0).abs() < 1e-9);

        assert!(engine.project(GeoPoint::new(30.0, 0.0)).is_none());

        let center = engine.unproject(DVec2::new(400.0, 300.0));
        assert_eq!(center, GeoPoint::new(0.0, 0.0));
    }

    #[test]
    fn test_north_is_up() {
        let engine = engine_at(GeoPoint::new(10.0, 45.0), 1.0);
        let anchor = engine.anchor();
        let north = engine.project(GeoPoint::new(10.0, 50.0)).expect("visible");
        assert!((north.x - anchor.x).abs() < 1e-9);
        assert!(north.y < anchor.y);
    }

    #[test]
    fn test_heading_does_not_rotate_projection() {
        let mut engine = engine_at(GeoPoint::new(2.0, 48.0), 1.0);
        let target = GeoPoint::new(4.0, 50.0);
        let before = engine.project(target);
        engine.set_heading(1.3);
        assert_eq!(engine.project(target), before);
        assert!((engine.heading() - 1.3).abs() < 1e-12);
    }

    #[test]
    fn test_clamped_projection_pins_to_horizon() {
        let engine = engine_at(GeoPoint::new(0.0, 0.0), 1.0);
        let far = engine.project_clamped(GeoPoint::new(90.0, 0.0));
        assert!(!far.within_cap);
        let dist = far.screen.distance(engine.anchor());
        assert!((dist - engine.globe_screen_radius()).abs() < 1e-6);

        let near = engine.project_clamped(GeoPoint::new(1.0, 0.0));
        assert!(near.within_cap);
        assert_eq!(Some(near.screen), engine.project(GeoPoint::new(1.0, 0.0)));
    }

    #[test]
    fn test_screen_radius_bounds() {
        let engine = engine_at(GeoPoint::new(0.0, 0.0), 1.0);
        let anchor = engine.anchor();
        assert_eq!(anchor, DVec2::new(400.0, 480.0));

        let (high, low) = engine.screen_radius_bounds();
        // nearest edge is 120 below the anchor: max(192, 360)
        assert!((high - 360.0).abs() < 1e-9);
        // farthest corner is (0,0) or (800,0): sqrt(400² + 480²)
        let corner = (400.0f64 * 400.0 + 480.0 * 480.0).sqrt();
        assert!((low - corner * 1.1).abs() < 1e-9);

        assert!((engine.globe_screen_radius() - high).abs() < 1e-9);
        let low_engine = engine_at(GeoPoint::new(0.0, 0.0), 0.0);
        assert!((low_engine.globe_screen_radius() - low).abs() < 1e-9);
    }

    #[test]
    fn test_configurable_anchor() {
        let config = EngineConfig {
            anchor_fraction: (0.25, 0.75),
            ..EngineConfig::default()
        };
        let mut engine = ProjectionEngine::new(config, 800.0, 600.0);
        engine.set_camera_center(GeoPoint::new(-3.0, 40.0));
        assert_eq!(engine.anchor(), DVec2::new(200.0, 450.0));
        assert_eq!(engine.project(GeoPoint::new(-3.0, 40.0)), Some(DVec2::new(200.0, 450.0)));
        assert_eq!(engine.unproject(DVec2::new(200.0, 450.0)), GeoPoint::new(-3.0, 40.0));
    }

    #[test]
    fn test_empty_viewport_is_harmless() {
        let mut engine = engine_at(GeoPoint::new(5.0, 5.0), 1.0);
        engine.set_viewport(0.0, 0.0);
        assert_eq!(engine.unproject(DVec2::new(3.0, 3.0)), GeoPoint::new(5.0, 5.0));
        assert_eq!(engine.project(GeoPoint::new(6.0, 5.0)), Some(DVec2::ZERO));
    }

    #[test]
    fn test_non_finite_altitude_is_ignored() {
        let mut engine = engine_at(GeoPoint::new(0.0, 0.0), 1.0);
        engine.set_altitude_target(f64::NAN);
        engine.update(0.016);
        engine.snap_altitude(f64::INFINITY);
        assert_eq!(engine.altitude_mode(), AltitudeMode::High);
        assert_eq!(engine.angular_radius(), engine.config().high_angular_radius);
        let p = engine.project(GeoPoint::new(1.0, 1.0)).expect("visible");
        assert!(p.is_finite(), "{p:?}");
    }

    #[test]
    fn test_unproject_far_sky_does_not_fold_back() {
        let mut engine = ProjectionEngine::new(EngineConfig::default(), 1000.0, 100.0);
        engine.set_camera_center(GeoPoint::new(10.0, 20.0));
        let anchor = engine.anchor();
        let scale = engine.scale();

        // Past the antipode: pinned to it rather than wrapping back to the near side
        let beyond = engine.unproject(DVec2::new(anchor.x - 4.0 * scale, anchor.y));
        assert!((engine.angular_distance(beyond) - std::f64::consts::PI).abs() < 1e-6, "{beyond:?}");

        // Just short of the antipode keeps the tapped direction (west)
        let west = engine.unproject(DVec2::new(anchor.x - 3.0 * scale, anchor.y));
        let bearing = engine.center().bearing_to(west).to_degrees();
        assert!((bearing - 270.0).abs() < 1e-3, "bearing {bearing}");
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "invalid engine config")]
    fn test_invalid_config_is_caught_in_debug() {
        let config = EngineConfig {
            low_angular_radius: 0.0,
            ..EngineConfig::default()
        };
        let _ = ProjectionEngine::new(config, 800.0, 600.0);
    }

    #[test]
    fn test_camera_center_is_wrapped() {
        let mut engine = engine_at(GeoPoint::new(0.0, 0.0), 1.0);
        engine.set_camera_center(GeoPoint::new(190.0, 95.0));
        assert_eq!(engine.center(), GeoPoint::new(-170.0, 90.0));
    }
}
