//! Geodesic flyover engine: an azimuthal-equidistant globe projection centered on a
//! moving camera, a read-only geographic catalog, and a back-to-front region renderer
//! that draws through a pluggable [`map::Painter`].

pub mod braille;
pub mod config;
pub mod data;
pub mod error;
pub mod geo;
pub mod map;

pub use config::EngineConfig;
pub use data::{GameRegion, GeoCatalog};
pub use error::{CatalogError, ConfigError};
pub use geo::GeoPoint;
pub use map::{ProjectionEngine, RegionRenderer};
