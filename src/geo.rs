use serde::{Deserialize, Serialize};

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Longitude (-180 to 180, positive = east)
    pub lon: f64,
    /// Latitude (-90 to 90, positive = north)
    pub lat: f64,
}

impl GeoPoint {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Longitude and latitude in radians.
    #[inline(always)]
    pub fn to_radians(self) -> (f64, f64) {
        (self.lon.to_radians(), self.lat.to_radians())
    }

    /// Great-circle angular distance to `other`, in radians.
    ///
    /// Uses the spherical law of cosines. The cosine is clamped before `acos`
    /// so coincident and antipodal points never produce NaN. Continuous across
    /// the antimeridian: only `cos(Δlon)` enters the formula.
    #[inline]
    pub fn angular_distance(self, other: GeoPoint) -> f64 {
        let (lng0, lat0) = self.to_radians();
        let (lng, lat) = other.to_radians();
        let cos_c = lat0.sin() * lat.sin() + lat0.cos() * lat.cos() * (lng - lng0).cos();
        cos_c.clamp(-1.0, 1.0).acos()
    }

    /// Same point with longitude wrapped into [-180, 180).
    pub fn wrapped(self) -> Self {
        Self::new(wrap_lon(self.lon), self.lat.clamp(-90.0, 90.0))
    }

    /// Point reached by travelling `distance` radians along `bearing`
    /// (radians clockwise from north).
    pub fn destination(self, bearing: f64, distance: f64) -> Self {
        let (lng0, lat0) = self.to_radians();
        let (sin_d, cos_d) = distance.sin_cos();
        let lat = (lat0.sin() * cos_d + lat0.cos() * sin_d * bearing.cos())
            .clamp(-1.0, 1.0)
            .asin();
        let lng = lng0
            + (bearing.sin() * sin_d * lat0.cos()).atan2(cos_d - lat0.sin() * lat.sin());
        Self::new(lng.to_degrees(), lat.to_degrees()).wrapped()
    }

    /// Initial bearing towards `other` in radians clockwise from north.
    pub fn bearing_to(self, other: GeoPoint) -> f64 {
        let (lng0, lat0) = self.to_radians();
        let (lng, lat) = other.to_radians();
        let d_lon = lng - lng0;
        let x = d_lon.sin() * lat.cos();
        let y = lat0.cos() * lat.sin() - lat0.sin() * lat.cos() * d_lon.cos();
        x.atan2(y).rem_euclid(std::f64::consts::TAU)
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self::new(lon, lat)
    }
}

/// Wrap longitude into [-180, 180)
#[inline(always)]
pub fn wrap_lon(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

/// Arithmetic mean of the latitudes in `points`, 0 for an empty slice.
pub fn mean_latitude(points: &[GeoPoint]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    points.iter().map(|p| p.lat).sum::<f64>() / points.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_antimeridian_distance_is_short() {
        let a = GeoPoint::new(179.9, 0.0);
        let b = GeoPoint::new(-179.9, 0.0);
        let d = a.angular_distance(b).to_degrees();
        assert!((d - 0.2).abs() < 1e-6, "expected ~0.2°, got {d}");
    }

    #[test]
    fn test_distance_identical_and_antipodal() {
        let p = GeoPoint::new(12.5, -41.0);
        assert_eq!(p.angular_distance(p), 0.0);
        let q = GeoPoint::new(-167.5, 41.0);
        let d = p.angular_distance(q);
        assert!((d - std::f64::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn test_wrap_lon() {
        assert_eq!(wrap_lon(190.0), -170.0);
        assert_eq!(wrap_lon(-190.0), 170.0);
        assert_eq!(wrap_lon(180.0), -180.0);
        assert_eq!(wrap_lon(45.0), 45.0);
    }

    #[test]
    fn test_destination_and_bearing_agree() {
        let start = GeoPoint::new(-3.7, 40.4);
        let target = GeoPoint::new(2.35, 48.86);
        let bearing = start.bearing_to(target);
        let dist = start.angular_distance(target);
        let reached = start.destination(bearing, dist);
        assert!((reached.lon - target.lon).abs() < 1e-6);
        assert!((reached.lat - target.lat).abs() < 1e-6);
    }

    #[test]
    fn test_mean_latitude() {
        let pts = [GeoPoint::new(0.0, 10.0), GeoPoint::new(1.0, 20.0), GeoPoint::new(2.0, 30.0)];
        assert_eq!(mean_latitude(&pts), 20.0);
        assert_eq!(mean_latitude(&[]), 0.0);
    }
}
