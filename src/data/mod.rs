mod builtin;
mod catalog;
mod model;
pub mod natural_earth;
mod region;

pub use builtin::builtin_catalog;
pub use catalog::{CatalogBuilder, GeoCatalog};
pub use model::{City, Difficulty, PolygonRegion, Ring};
pub use region::{GameRegion, RegionProfile};

use crate::error::CatalogError;
use geojson::FeatureCollection;
use std::path::Path;

/// Admin-0 files, most detailed first
const COUNTRY_FILES: [&str; 3] = [
    "ne_10m_admin_0_countries.json",
    "ne_50m_admin_0_countries.json",
    "ne_110m_admin_0_countries.json",
];
const ADMIN1_FILE: &str = "ne_10m_admin_1_states_provinces.json";
const PLACES_FILE: &str = "ne_10m_populated_places.json";

/// Cities kept per country from the populated-places file
const CITIES_PER_COUNTRY: usize = 8;

/// Build the catalog from Natural Earth GeoJSON in `data_dir`.
///
/// Each layer falls back to the built-in data when its file is missing or fails to
/// load, so a missing or empty directory yields the built-in catalog.
pub fn load_catalog(data_dir: &Path) -> Result<GeoCatalog, CatalogError> {
    let mut builder = GeoCatalog::builder();

    let countries = COUNTRY_FILES
        .iter()
        .map(|name| data_dir.join(name))
        .find(|path| path.exists())
        .and_then(|path| match load_layer(&path, natural_earth::countries_from) {
            Ok(countries) if !countries.is_empty() => Some(countries),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load countries");
                None
            }
        });
    match countries {
        Some(countries) => {
            tracing::info!(count = countries.len(), "loaded Natural Earth countries");
            for country in countries {
                builder.country(country);
            }
        }
        None => builtin::add_countries(&mut builder)?,
    }

    let admin1 = optional_collection(&data_dir.join(ADMIN1_FILE));
    for region in GameRegion::all().into_iter().filter(|r| *r != GameRegion::World) {
        let areas = match &admin1 {
            Some(fc) => natural_earth::areas_from(fc, region)?,
            None => Vec::new(),
        };
        if areas.is_empty() {
            builtin::add_areas(&mut builder, region)?;
        } else {
            tracing::info!(region = region.key(), count = areas.len(), "loaded Natural Earth areas");
            for area in areas {
                builder.area(region, area);
            }
        }
    }

    match optional_collection(&data_dir.join(PLACES_FILE)) {
        Some(fc) => {
            for city in natural_earth::cities_from(&fc, CITIES_PER_COUNTRY) {
                builder.city(city);
            }
        }
        None => builtin::add_cities(&mut builder),
    }

    builder.build()
}

fn load_layer<T>(
    path: &Path,
    convert: impl FnOnce(&FeatureCollection) -> Result<T, CatalogError>,
) -> Result<T, CatalogError> {
    let collection = natural_earth::read_feature_collection(path)?;
    convert(&collection)
}

/// Parse `path` if it exists, logging (not failing) when it cannot be read.
fn optional_collection(path: &Path) -> Option<FeatureCollection> {
    if !path.exists() {
        return None;
    }
    match natural_earth::read_feature_collection(path) {
        Ok(fc) => Some(fc),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to load GeoJSON");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_directory_falls_back_to_builtin() {
        let catalog = load_catalog(Path::new("/nonexistent/flyover-data")).expect("builtin data is valid");
        let builtin = builtin_catalog().expect("builtin data is valid");
        assert_eq!(catalog.countries().len(), builtin.countries().len());
        assert_eq!(catalog.cities().len(), builtin.cities().len());
        for region in GameRegion::all() {
            assert_eq!(catalog.areas(region).len(), builtin.areas(region).len());
        }
    }

    #[test]
    fn test_country_file_replaces_builtin_countries_only() {
        let dir = std::env::temp_dir().join(format!("flyover-load-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("temp dir");
        let json = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{"NAME":"Iceland","ISO_A2":"IS"},
             "geometry":{"type":"Polygon","coordinates":[[[-24,63],[-13,63],[-13,67],[-24,67],[-24,63]]]}}
        ]}"#;
        fs::write(dir.join(COUNTRY_FILES[2]), json).expect("write fixture");

        let catalog = load_catalog(&dir).expect("valid");
        let _ = fs::remove_dir_all(&dir);

        assert_eq!(catalog.countries().len(), 1);
        assert_eq!(catalog.country("IS").and_then(|c| c.capital.as_deref()), Some("Reykjavik"));
        assert!(!catalog.areas(GameRegion::UsStates).is_empty());
        assert!(!catalog.cities().is_empty());
    }

    #[test]
    fn test_corrupt_country_file_is_not_fatal() {
        let dir = std::env::temp_dir().join(format!("flyover-corrupt-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("temp dir");
        fs::write(dir.join(COUNTRY_FILES[0]), b"{ truncated").expect("write fixture");

        let catalog = load_catalog(&dir).expect("falls back");
        let _ = fs::remove_dir_all(&dir);
        assert!(catalog.country("FR").is_some());
    }
}
