use crate::error::CatalogError;
use crate::geo::{mean_latitude, GeoPoint};
use std::sync::Arc;

/// A closed ring of (lon, lat) vertices. The last vertex connects back to the first.
///
/// Shared so the world catalog and the country catalog point at the same vertex data.
pub type Ring = Arc<[GeoPoint]>;

/// A named polygon area: country, state, county, or island.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonRegion {
    pub code: String,
    pub name: String,
    rings: Vec<Ring>,
    pub capital: Option<String>,
    pub population: Option<u64>,
    pub fun_fact: Option<String>,
}

impl PolygonRegion {
    /// Build a region from one or more rings. The first ring need not be the largest;
    /// [`PolygonRegion::vertices`] always returns the ring with the most vertices.
    ///
    /// Fails fast when any ring has fewer than 3 vertices.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        rings: Vec<Vec<GeoPoint>>,
    ) -> Result<Self, CatalogError> {
        let code = code.into();
        if rings.is_empty() {
            return Err(CatalogError::NoRings { code });
        }
        if let Some(short) = rings.iter().find(|r| r.len() < 3) {
            return Err(CatalogError::TooFewVertices {
                count: short.len(),
                code,
            });
        }

        Ok(Self {
            code,
            name: name.into(),
            rings: rings.into_iter().map(Ring::from).collect(),
            capital: None,
            population: None,
            fun_fact: None,
        })
    }

    /// Convenience for single-ring regions given as (lon, lat) tuples.
    pub fn from_outline(
        code: impl Into<String>,
        name: impl Into<String>,
        outline: &[(f64, f64)],
    ) -> Result<Self, CatalogError> {
        Self::new(code, name, vec![outline.iter().copied().map(GeoPoint::from).collect()])
    }

    pub fn with_capital(mut self, capital: impl Into<String>) -> Self {
        self.capital = Some(capital.into());
        self
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = Some(population);
        self
    }

    pub fn with_fun_fact(mut self, fact: impl Into<String>) -> Self {
        self.fun_fact = Some(fact.into());
        self
    }

    /// Append another ring (exclave, island). Same vertex-count rule as `new`.
    pub fn push_ring(&mut self, ring: Vec<GeoPoint>) -> Result<(), CatalogError> {
        if ring.len() < 3 {
            return Err(CatalogError::TooFewVertices {
                code: self.code.clone(),
                count: ring.len(),
            });
        }
        self.rings.push(Ring::from(ring));
        Ok(())
    }

    /// The primary outline: the ring with the most vertices.
    pub fn vertices(&self) -> &[GeoPoint] {
        self.rings
            .iter()
            .max_by_key(|r| r.len())
            .map(|r| &r[..])
            .unwrap_or(&[])
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Mean vertex latitude of the primary outline.
    pub fn mean_latitude(&self) -> f64 {
        mean_latitude(self.vertices())
    }

    /// Arithmetic centroid of the primary outline's vertices.
    pub fn center(&self) -> GeoPoint {
        let verts = self.vertices();
        let n = verts.len().max(1) as f64;
        let (lon, lat) = verts
            .iter()
            .fold((0.0, 0.0), |(lon, lat), p| (lon + p.lon, lat + p.lat));
        GeoPoint::new(lon / n, lat / n)
    }

    /// Even-odd point-in-polygon test over every ring, in plain lon/lat space.
    pub fn contains(&self, point: GeoPoint) -> bool {
        self.rings.iter().any(|ring| ring_contains(ring, point))
    }
}

fn ring_contains(ring: &[GeoPoint], p: GeoPoint) -> bool {
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (a, b) = (ring[i], ring[j]);
        if (a.lat > p.lat) != (b.lat > p.lat) {
            let x = a.lon + (p.lat - a.lat) / (b.lat - a.lat) * (b.lon - a.lon);
            if p.lon < x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// How obscure a city is for quiz purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// A named point feature shown at low altitude.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub name: String,
    /// Code of the region this city belongs to
    pub region_code: String,
    pub location: GeoPoint,
    pub is_capital: bool,
    pub difficulty: Difficulty,
}

impl City {
    pub fn new(name: impl Into<String>, region_code: impl Into<String>, lon: f64, lat: f64) -> Self {
        Self {
            name: name.into(),
            region_code: region_code.into(),
            location: GeoPoint::new(lon, lat),
            is_capital: false,
            difficulty: Difficulty::Easy,
        }
    }

    pub fn capital(mut self) -> Self {
        self.is_capital = true;
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }
}
