use crate::geo::GeoPoint;
use crate::map::AltitudeMode;
use std::fmt;
use std::str::FromStr;

/// A playable geographic scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GameRegion {
    World,
    UsStates,
    UkCounties,
    Ireland,
    CanadianProvinces,
}

/// Static constants carried by each [`GameRegion`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionProfile {
    pub display_name: &'static str,
    /// ISO 3166-1 alpha-2 code of the parent country (`None` for the world)
    pub country_code: Option<&'static str>,
    /// Where the camera starts
    pub center: GeoPoint,
    /// (min_lon, min_lat, max_lon, max_lat)
    pub bounds: (f64, f64, f64, f64),
    /// Player level at which the region becomes available
    pub unlock_level: u32,
    pub start_altitude: AltitudeMode,
}

impl GameRegion {
    pub const fn all() -> [GameRegion; 5] {
        [
            GameRegion::World,
            GameRegion::UsStates,
            GameRegion::UkCounties,
            GameRegion::Ireland,
            GameRegion::CanadianProvinces,
        ]
    }

    pub const fn profile(self) -> RegionProfile {
        match self {
            GameRegion::World => RegionProfile {
                display_name: "World",
                country_code: None,
                center: GeoPoint::new(0.0, 20.0),
                bounds: (-180.0, -90.0, 180.0, 90.0),
                unlock_level: 1,
                start_altitude: AltitudeMode::High,
            },
            GameRegion::UsStates => RegionProfile {
                display_name: "US States",
                country_code: Some("US"),
                center: GeoPoint::new(-98.5, 39.5),
                bounds: (-125.0, 24.0, -66.0, 50.0),
                unlock_level: 3,
                start_altitude: AltitudeMode::High,
            },
            GameRegion::UkCounties => RegionProfile {
                display_name: "UK Counties",
                country_code: Some("GB"),
                center: GeoPoint::new(-2.5, 54.0),
                bounds: (-8.2, 49.9, 1.8, 60.9),
                unlock_level: 5,
                start_altitude: AltitudeMode::Low,
            },
            GameRegion::Ireland => RegionProfile {
                display_name: "Ireland",
                country_code: Some("IE"),
                center: GeoPoint::new(-8.0, 53.4),
                bounds: (-10.7, 51.4, -5.9, 55.4),
                unlock_level: 7,
                start_altitude: AltitudeMode::Low,
            },
            GameRegion::CanadianProvinces => RegionProfile {
                display_name: "Canadian Provinces",
                country_code: Some("CA"),
                center: GeoPoint::new(-96.0, 56.0),
                bounds: (-141.0, 41.7, -52.6, 83.1),
                unlock_level: 9,
                start_altitude: AltitudeMode::High,
            },
        }
    }

    /// Stable identifier used on the command line and in config files.
    pub const fn key(self) -> &'static str {
        match self {
            GameRegion::World => "world",
            GameRegion::UsStates => "us-states",
            GameRegion::UkCounties => "uk-counties",
            GameRegion::Ireland => "ireland",
            GameRegion::CanadianProvinces => "canadian-provinces",
        }
    }

    /// Whether `point` falls inside the region's lon/lat bounds.
    pub fn in_bounds(self, point: GeoPoint) -> bool {
        let (min_lon, min_lat, max_lon, max_lat) = self.profile().bounds;
        (min_lon..=max_lon).contains(&point.lon) && (min_lat..=max_lat).contains(&point.lat)
    }

    /// Next region in [`GameRegion::all`] order, wrapping around.
    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|r| *r == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Previous region in [`GameRegion::all`] order, wrapping around.
    pub fn prev(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|r| *r == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

impl fmt::Display for GameRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.profile().display_name)
    }
}

impl FromStr for GameRegion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::all()
            .into_iter()
            .find(|r| r.key() == wanted)
            .ok_or_else(|| format!("unknown region '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for region in GameRegion::all() {
            assert_eq!(region.key().parse::<GameRegion>(), Ok(region));
        }
        assert_eq!("US_STATES".parse::<GameRegion>(), Ok(GameRegion::UsStates));
        assert!("atlantis".parse::<GameRegion>().is_err());
    }

    #[test]
    fn test_centers_lie_within_bounds() {
        for region in GameRegion::all() {
            assert!(region.in_bounds(region.profile().center), "{region} center outside bounds");
        }
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(GameRegion::CanadianProvinces.next(), GameRegion::World);
        assert_eq!(GameRegion::World.prev(), GameRegion::CanadianProvinces);
        assert_eq!(GameRegion::World.next().prev(), GameRegion::World);
    }

    #[test]
    fn test_unlock_levels_increase() {
        let levels: Vec<u32> = GameRegion::all().iter().map(|r| r.profile().unlock_level).collect();
        assert!(levels.windows(2).all(|w| w[0] < w[1]));
    }
}
