// crates/bdgeo-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading, validating or caching a location directory.
///
/// Lookups themselves never fail: a miss is `None` or an empty `Vec`.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary cache error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("duplicate location id `{0}`")]
    DuplicateId(String),

    #[error("location `{id}` references unknown parent `{parent_id}`")]
    MissingParent { id: String, parent_id: String },

    #[error("location `{id}` has an invalid parent: {detail}")]
    InvalidParent { id: String, detail: String },

    #[error("location `{id}` has out-of-range coordinates ({lat}, {lng})")]
    InvalidCoordinates { id: String, lat: f64, lng: f64 },

    #[error("invalid selection: {0}")]
    InvalidSelection(String),
}

pub type Result<T> = std::result::Result<T, LocationError>;
