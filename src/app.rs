use flyover::data::{City, GameRegion, GeoCatalog, PolygonRegion};
use flyover::geo::GeoPoint;
use flyover::map::{ProjectionEngine, RegionRenderer};
use flyover::EngineConfig;
use glam::DVec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::f64::consts::PI;
use std::sync::Arc;

/// Cruise speed in radians of arc per second at each altitude
const HIGH_SPEED: f64 = 0.12;
const LOW_SPEED: f64 = 0.03;

/// Heading change per steering key press (radians)
const STEER_STEP: f64 = PI / 18.0;

/// Application state
pub struct App {
    pub engine: ProjectionEngine,
    pub renderer: RegionRenderer,
    catalog: Arc<GeoCatalog>,
    region: GameRegion,
    /// Tapped destination; the plane turns toward it and flies a great circle
    pub waypoint: Option<GeoPoint>,
    /// Area the player is asked to fly over
    pub target: Option<Arc<PolygonRegion>>,
    pub found: u32,
    pub paused: bool,
    pub should_quit: bool,
    /// Current mouse position for cursor marker
    pub mouse_pos: Option<(u16, u16)>,
    rng: ChaCha8Rng,
}

impl App {
    pub fn new(
        catalog: Arc<GeoCatalog>,
        config: EngineConfig,
        region: GameRegion,
        seed: u64,
        width: u16,
        height: u16,
    ) -> Self {
        let mut app = Self {
            engine: ProjectionEngine::new(config, 0.0, 0.0),
            renderer: RegionRenderer::new(),
            catalog,
            region,
            waypoint: None,
            target: None,
            found: 0,
            paused: false,
            should_quit: false,
            mouse_pos: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        app.resize(width, height);
        app.set_region(region);
        app
    }

    /// Update the projection viewport when the terminal resizes
    pub fn resize(&mut self, width: u16, height: u16) {
        let (cols, rows) = map_area(width, height);
        // Braille gives 2x4 resolution per character
        self.engine.set_viewport(cols as f64 * 2.0, rows as f64 * 4.0);
    }

    pub fn region(&self) -> GameRegion {
        self.region
    }

    /// Jump to a region: recenter, reset altitude without a transition, pick a new target.
    pub fn set_region(&mut self, region: GameRegion) {
        let profile = region.profile();
        self.region = region;
        self.engine.set_camera_center(profile.center);
        self.engine.set_heading(0.0);
        self.engine.snap_altitude(profile.start_altitude.fraction());
        self.waypoint = None;
        self.pick_target();
        tracing::info!(region = region.key(), "entered region");
    }

    pub fn cycle_region(&mut self, forward: bool) {
        let next = if forward { self.region.next() } else { self.region.prev() };
        self.set_region(next);
    }

    fn pick_target(&mut self) {
        self.target = self.catalog.random_area(self.region, &mut self.rng).cloned();
        if let Some(target) = &self.target {
            tracing::debug!(code = %target.code, "new target");
        }
    }

    pub fn toggle_altitude(&mut self) {
        let mode = self.engine.altitude_mode().toggled();
        self.engine.set_altitude_mode(mode);
    }

    /// Turn by `steps` increments (positive is clockwise). Cancels the waypoint.
    pub fn steer(&mut self, steps: i32) {
        self.waypoint = None;
        let heading = self.engine.heading() + steps as f64 * STEER_STEP;
        self.engine.set_heading(heading);
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Set a waypoint at a terminal cell (column/row, border included).
    /// Taps in the sky are pulled onto the globe's edge.
    pub fn tap(&mut self, col: u16, row: u16) {
        let anchor = self.engine.anchor();
        let offset = cell_to_screen(col, row) - anchor;
        let screen = anchor + offset.clamp_length_max(self.engine.globe_screen_radius());
        let point = self.engine.unproject(screen);
        self.engine.set_heading(self.engine.center().bearing_to(point));
        self.waypoint = Some(point);
        tracing::debug!(lon = point.lon, lat = point.lat, "waypoint set");
    }

    /// Advance one tick: smooth altitude, then move the camera.
    pub fn update(&mut self, dt: f64) {
        self.engine.update(dt);
        if self.paused {
            return;
        }

        let fraction = self.engine.altitude_fraction();
        let step = (LOW_SPEED + (HIGH_SPEED - LOW_SPEED) * fraction) * dt;
        let center = self.engine.center();

        match self.waypoint {
            Some(waypoint) => {
                let remaining = center.angular_distance(waypoint);
                if step >= remaining {
                    self.engine.set_camera_center(waypoint);
                    self.waypoint = None;
                } else {
                    let heading = center.bearing_to(waypoint);
                    self.engine.set_heading(heading);
                    self.engine.set_camera_center(center.destination(heading, step));
                }
            }
            None => {
                let next = center.destination(self.engine.heading(), step);
                // Keep the great-circle course: heading drifts as we move
                let back = next.bearing_to(center);
                self.engine.set_heading(back + PI);
                self.engine.set_camera_center(next);
            }
        }

        self.check_target();
    }

    fn check_target(&mut self) {
        let Some(target) = &self.target else {
            return;
        };
        if target.contains(self.engine.center()) {
            self.found += 1;
            tracing::info!(code = %target.code, found = self.found, "target reached");
            self.pick_target();
        }
    }

    /// Area directly under the camera
    pub fn area_below(&self) -> Option<&Arc<PolygonRegion>> {
        self.catalog.area_at(self.region, self.engine.center())
    }

    pub fn areas(&self) -> &[Arc<PolygonRegion>] {
        self.catalog.areas(self.region)
    }

    pub fn cities(&self) -> Vec<&City> {
        self.catalog.cities_in(self.region)
    }

    /// Request quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Get current center coordinates as a string
    pub fn center_coords(&self) -> String {
        let c = self.engine.center();
        format!(
            "{:.1}°{}, {:.1}°{}",
            c.lat.abs(),
            if c.lat >= 0.0 { "N" } else { "S" },
            c.lon.abs(),
            if c.lon >= 0.0 { "E" } else { "W" }
        )
    }

    pub fn heading_degrees(&self) -> f64 {
        self.engine.heading().to_degrees()
    }

    /// Update mouse cursor position
    pub fn set_mouse_pos(&mut self, col: u16, row: u16) {
        self.mouse_pos = Some((col, row));
    }
}

/// Map area in characters for a terminal size: one-cell border plus a status bar.
pub fn map_area(width: u16, height: u16) -> (u16, u16) {
    (width.saturating_sub(2), height.saturating_sub(3))
}

/// Terminal cell (border included) to the center of that cell in braille dots.
pub fn cell_to_screen(col: u16, row: u16) -> DVec2 {
    DVec2::new(
        col.saturating_sub(1) as f64 * 2.0 + 1.0,
        row.saturating_sub(1) as f64 * 4.0 + 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use flyover::data::builtin_catalog;
    use flyover::map::AltitudeMode;

    fn app(region: GameRegion) -> App {
        let catalog = Arc::new(builtin_catalog().expect("builtin data is valid"));
        App::new(catalog, EngineConfig::default(), region, 7, 100, 40)
    }

    #[test]
    fn test_region_switch_recenters_and_snaps() {
        let mut app = app(GameRegion::World);
        app.set_region(GameRegion::Ireland);
        let profile = GameRegion::Ireland.profile();
        assert_eq!(app.engine.center(), profile.center);
        assert_eq!(app.engine.altitude_mode(), profile.start_altitude);
        assert!(app.engine.is_settled());
        assert!(app.target.as_ref().is_some_and(|t| app.areas().iter().any(|a| a.code == t.code)));
    }

    #[test]
    fn test_tap_on_anchor_targets_camera() {
        let mut app = app(GameRegion::World);
        let anchor = app.engine.anchor();
        let col = (anchor.x / 2.0) as u16 + 1;
        let row = (anchor.y / 4.0) as u16 + 1;
        app.tap(col, row);
        let waypoint = app.waypoint.expect("tap sets waypoint");
        assert!(waypoint.angular_distance(app.engine.center()) < 0.02);
    }

    #[test]
    fn test_sky_tap_keeps_its_direction() {
        let catalog = Arc::new(builtin_catalog().expect("builtin data is valid"));
        // 500x25 map cells: a 1000x100 dot viewport, much wider than the globe
        let mut app = App::new(catalog, EngineConfig::default(), GameRegion::World, 7, 502, 28);
        app.engine.set_camera_center(GeoPoint::new(0.0, 0.0));
        app.tap(1, 1);
        let waypoint = app.waypoint.expect("tap sets waypoint");
        let heading = app.heading_degrees();
        assert!(heading > 270.0 && heading < 360.0, "heading {heading} for a north-west tap");
        let cap = app.engine.angular_radius();
        assert!(app.engine.center().angular_distance(waypoint) <= cap + 1e-9);
    }

    #[test]
    fn test_flight_reaches_waypoint() {
        let mut app = app(GameRegion::World);
        let start = app.engine.center();
        let goal = start.destination(1.0, 0.05);
        app.waypoint = Some(goal);
        for _ in 0..600 {
            app.update(1.0 / 60.0);
            if app.waypoint.is_none() {
                break;
            }
        }
        assert!(app.waypoint.is_none());
        assert!(app.engine.center().angular_distance(goal) < 1e-9);
    }

    #[test]
    fn test_free_flight_follows_heading() {
        let mut app = app(GameRegion::World);
        app.engine.set_camera_center(GeoPoint::new(0.0, 0.0));
        app.steer(9); // due east
        app.update(1.0);
        let c = app.engine.center();
        assert!(c.lon > 0.0 && c.lat.abs() < 1e-6, "{c:?}");
        assert!((app.heading_degrees() - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_pause_still_smooths_altitude() {
        let mut app = app(GameRegion::World);
        let before = app.engine.center();
        app.toggle_pause();
        app.toggle_altitude();
        app.update(0.5);
        assert_eq!(app.engine.center(), before);
        assert_eq!(app.engine.altitude_mode(), AltitudeMode::Low);
        assert!(app.engine.altitude_fraction() < 1.0);
    }
}
