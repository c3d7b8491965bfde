use crate::data::model::{City, Difficulty, PolygonRegion};
use crate::data::region::GameRegion;
use crate::error::CatalogError;
use crate::geo::GeoPoint;
use rand::Rng;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

/// Immutable geographic data: countries, sub-national areas, and cities.
///
/// Built once at startup and shared read-only (wrap in `Arc` to hand to several views).
/// The world catalog is the country list itself, so the two never duplicate vertex data.
#[derive(Debug, Default)]
pub struct GeoCatalog {
    countries: Vec<Arc<PolygonRegion>>,
    subregions: BTreeMap<GameRegion, Vec<Arc<PolygonRegion>>>,
    cities: Vec<City>,
}

/// Accumulates catalog entries and checks code uniqueness on `build`.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    countries: Vec<PolygonRegion>,
    subregions: BTreeMap<GameRegion, Vec<PolygonRegion>>,
    cities: Vec<City>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn country(&mut self, region: PolygonRegion) -> &mut Self {
        self.countries.push(region);
        self
    }

    /// Add an area to a sub-national catalog. Areas added under
    /// [`GameRegion::World`] are treated as countries.
    pub fn area(&mut self, region: GameRegion, area: PolygonRegion) -> &mut Self {
        match region {
            GameRegion::World => self.countries.push(area),
            other => self.subregions.entry(other).or_default().push(area),
        }
        self
    }

    pub fn city(&mut self, city: City) -> &mut Self {
        self.cities.push(city);
        self
    }

    pub fn build(self) -> Result<GeoCatalog, CatalogError> {
        ensure_unique("world", &self.countries)?;
        for (region, areas) in &self.subregions {
            ensure_unique(region.key(), areas)?;
        }

        let catalog = GeoCatalog {
            countries: self.countries.into_iter().map(Arc::new).collect(),
            subregions: self
                .subregions
                .into_iter()
                .map(|(region, areas)| (region, areas.into_iter().map(Arc::new).collect()))
                .collect(),
            cities: self.cities,
        };

        tracing::debug!(
            countries = catalog.countries.len(),
            subregions = catalog.subregions.len(),
            cities = catalog.cities.len(),
            "built geographic catalog"
        );
        Ok(catalog)
    }
}

fn ensure_unique(catalog: &'static str, areas: &[PolygonRegion]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(areas.len());
    for area in areas {
        if !seen.insert(area.code.as_str()) {
            return Err(CatalogError::DuplicateCode {
                catalog,
                code: area.code.clone(),
            });
        }
    }
    Ok(())
}

impl GeoCatalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Polygon areas for `region`, in catalog order. Empty when the region has no data.
    pub fn areas(&self, region: GameRegion) -> &[Arc<PolygonRegion>] {
        match region {
            GameRegion::World => &self.countries,
            other => self.subregions.get(&other).map(Vec::as_slice).unwrap_or(&[]),
        }
    }

    /// Uniform pick from `areas(region)`. `None` only when the region is empty.
    pub fn random_area<R: Rng + ?Sized>(&self, region: GameRegion, rng: &mut R) -> Option<&Arc<PolygonRegion>> {
        let areas = self.areas(region);
        if areas.is_empty() {
            return None;
        }
        areas.get(rng.gen_range(0..areas.len()))
    }

    pub fn random_country<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Arc<PolygonRegion>> {
        self.random_area(GameRegion::World, rng)
    }

    pub fn countries(&self) -> &[Arc<PolygonRegion>] {
        &self.countries
    }

    pub fn country(&self, code: &str) -> Option<&Arc<PolygonRegion>> {
        self.countries.iter().find(|c| c.code == code)
    }

    /// Look up an area by code within one region's catalog.
    pub fn area(&self, region: GameRegion, code: &str) -> Option<&Arc<PolygonRegion>> {
        self.areas(region).iter().find(|a| a.code == code)
    }

    /// First area in `region` whose rings contain `point`.
    pub fn area_at(&self, region: GameRegion, point: GeoPoint) -> Option<&Arc<PolygonRegion>> {
        self.areas(region).iter().find(|a| a.contains(point))
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn cities_for_region<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a City> + 'a {
        self.cities.iter().filter(move |c| c.region_code == code)
    }

    pub fn capital(&self, code: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.region_code == code && c.is_capital)
    }

    pub fn cities_by_difficulty(&self, difficulty: Difficulty) -> impl Iterator<Item = &City> {
        self.cities.iter().filter(move |c| c.difficulty == difficulty)
    }

    /// Cities belonging to any area of `region` (all cities for the world).
    pub fn cities_in(&self, region: GameRegion) -> Vec<&City> {
        match region {
            GameRegion::World => self.cities.iter().collect(),
            other => {
                let codes: HashSet<&str> = self.areas(other).iter().map(|a| a.code.as_str()).collect();
                let parent = other.profile().country_code;
                self.cities
                    .iter()
                    .filter(|c| {
                        codes.contains(c.region_code.as_str())
                            || (parent == Some(c.region_code.as_str()) && other.in_bounds(c.location))
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn area(code: &str, lon: f64, lat: f64) -> PolygonRegion {
        PolygonRegion::from_outline(
            code,
            format!("Area {code}"),
            &[(lon, lat), (lon + 2.0, lat), (lon + 2.0, lat + 2.0), (lon, lat + 2.0)],
        )
        .expect("valid outline")
    }

    fn sample() -> GeoCatalog {
        let mut builder = GeoCatalog::builder();
        builder
            .country(area("AA", 0.0, 0.0).with_capital("Alpha"))
            .country(area("BB", 10.0, 0.0))
            .country(area("CC", 20.0, 0.0))
            .area(GameRegion::Ireland, area("D", -8.0, 52.0))
            .city(City::new("Alpha", "AA", 1.0, 1.0).capital())
            .city(City::new("Alphaville", "AA", 1.5, 1.5).difficulty(Difficulty::Hard))
            .city(City::new("Bravo", "BB", 11.0, 1.0))
            .city(City::new("Dunmore", "IE", -7.0, 53.0));
        builder.build().expect("valid catalog")
    }

    #[test]
    fn test_world_is_country_list_in_order() {
        let catalog = sample();
        let world = catalog.areas(GameRegion::World);
        let codes: Vec<&str> = world.iter().map(|a| a.code.as_str()).collect();
        assert_eq!(codes, ["AA", "BB", "CC"]);
        // Same allocation, not a copy
        assert!(Arc::ptr_eq(&world[0], &catalog.countries()[0]));
    }

    #[test]
    fn test_unknown_lookups_are_absent() {
        let catalog = sample();
        assert!(catalog.country("ZZ").is_none());
        assert!(catalog.capital("ZZ").is_none());
        assert_eq!(catalog.cities_for_region("ZZ").count(), 0);
        assert!(catalog.areas(GameRegion::UsStates).is_empty());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(catalog.random_area(GameRegion::UsStates, &mut rng).is_none());
    }

    #[test]
    fn test_lookups() {
        let catalog = sample();
        assert_eq!(catalog.country("BB").map(|c| c.name.as_str()), Some("Area BB"));
        assert_eq!(catalog.capital("AA").map(|c| c.name.as_str()), Some("Alpha"));
        assert_eq!(catalog.cities_for_region("AA").count(), 2);
        assert_eq!(catalog.cities_by_difficulty(Difficulty::Hard).count(), 1);
        assert_eq!(catalog.area(GameRegion::Ireland, "D").map(|a| a.code.as_str()), Some("D"));
        assert_eq!(
            catalog.area_at(GameRegion::World, GeoPoint::new(11.0, 1.0)).map(|a| a.code.as_str()),
            Some("BB")
        );
        assert!(catalog.area_at(GameRegion::World, GeoPoint::new(50.0, 50.0)).is_none());
    }

    #[test]
    fn test_random_area_is_reproducible() {
        let catalog = sample();
        let pick = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..8)
                .filter_map(|_| catalog.random_area(GameRegion::World, &mut rng).map(|a| a.code.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(pick(42), pick(42));
        assert_eq!(pick(42).len(), 8);

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let country = catalog.random_country(&mut rng).expect("non-empty");
        assert!(catalog.country(&country.code).is_some());
    }

    #[test]
    fn test_duplicate_codes_rejected() {
        let mut builder = GeoCatalog::builder();
        builder.country(area("AA", 0.0, 0.0)).country(area("AA", 5.0, 5.0));
        assert!(matches!(
            builder.build(),
            Err(CatalogError::DuplicateCode { catalog: "world", .. })
        ));

        // The same code may appear in different catalogs
        let mut builder = GeoCatalog::builder();
        builder
            .country(area("D", 0.0, 0.0))
            .area(GameRegion::Ireland, area("D", -8.0, 52.0));
        assert!(builder.build().is_ok());
    }

    #[test]
    fn test_cities_in_subregion() {
        let catalog = sample();
        let names: Vec<&str> = catalog.cities_in(GameRegion::Ireland).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Dunmore"]);
        assert_eq!(catalog.cities_in(GameRegion::World).len(), 4);
    }
}
