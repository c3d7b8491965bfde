use std::io;
use thiserror::Error;

/// Errors raised while building or loading a geographic catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("region {code} has a ring with {count} vertices (need at least 3)")]
    TooFewVertices { code: String, count: usize },
    #[error("region {code} has no rings")]
    NoRings { code: String },
    #[error("duplicate code {code} in {catalog} catalog")]
    DuplicateCode { catalog: &'static str, code: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] simd_json::Error),
    #[error("geojson error: {0}")]
    GeoJson(#[from] geojson::Error),
}

/// Errors raised while loading or validating engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
