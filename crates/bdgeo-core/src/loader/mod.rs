// crates/bdgeo-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to
//! specific parsers (Binary vs JSON).

use crate::error::{LocationError, Result};
use crate::model::convert::from_raw;
use crate::model::{DefaultBackend, LocationDb};
use crate::raw::LocationsRaw;
use crate::traits::{LocationBackend, LocationSearch};
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::{Path, PathBuf};

mod common_io;

#[cfg(feature = "builder")]
pub mod builder;

/// The dataset shipped with the crate.
static EMBEDDED_DATASET: &str = include_str!("../../data/bangladesh_locations.json");

// Single in-process cache so the embedded table is parsed and validated once.
static LOCATION_DB_CACHE: OnceCell<LocationDb<DefaultBackend>> = OnceCell::new();

impl LocationDb<DefaultBackend> {
    /// The directory built from the embedded dataset.
    ///
    /// The first call parses and validates the table; later calls return the
    /// same instance.
    pub fn load() -> Result<&'static Self> {
        LOCATION_DB_CACHE.get_or_try_init(|| {
            let db = Self::from_json_str(EMBEDDED_DATASET)?;
            let stats = db.stats();
            tracing::debug!(
                divisions = stats.divisions,
                districts = stats.districts,
                upazilas = stats.upazilas,
                areas = stats.areas,
                "loaded embedded location directory"
            );
            Ok(db)
        })
    }

    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "bangladesh_locations.json"
    }

    /// The raw JSON the crate embeds.
    pub fn embedded_dataset() -> &'static str {
        EMBEDDED_DATASET
    }
}

impl<B: LocationBackend> LocationDb<B> {
    /// Builds a directory from a JSON array of location records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: LocationsRaw = serde_json::from_str(json)?;
        from_raw(raw)
    }

    /// Builds a directory from any reader yielding a JSON array.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: LocationsRaw = serde_json::from_reader(reader)?;
        from_raw(raw)
    }

    /// **Standard Loader:** picks the parser from the file name.
    ///
    /// - `*.bin`: bincode cache (gzip-wrapped with `compact`)
    /// - `*.gz`: gzip-compressed JSON (needs `compact`)
    /// - anything else: plain JSON
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        let db = if name.ends_with(".bin") {
            let mut bytes = Vec::new();
            common_io::open_stream(path, cfg!(feature = "compact"))?
                .read_to_end(&mut bytes)?;
            Self::from_bytes(&bytes)?
        } else if name.ends_with(".gz") {
            if !cfg!(feature = "compact") {
                return Err(LocationError::InvalidData(format!(
                    "{} is gzip-compressed but the 'compact' feature is disabled",
                    path.display()
                )));
            }
            Self::from_json_reader(common_io::open_stream(path, true)?)?
        } else {
            Self::from_json_reader(common_io::open_stream(path, false)?)?
        };

        tracing::debug!(path = %path.display(), records = db.len(), "loaded location directory");
        Ok(db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DefaultLocationDb;

    #[test]
    fn embedded_dataset_loads_once() {
        let a = DefaultLocationDb::load().unwrap();
        let b = DefaultLocationDb::load().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn embedded_dataset_counts() {
        let stats = DefaultLocationDb::load().unwrap().stats();
        assert_eq!(stats.divisions, 8);
        assert_eq!(stats.districts, 64);
        assert_eq!(stats.upazilas, 21);
        assert_eq!(stats.areas, 21);
        assert_eq!(stats.total(), 114);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = DefaultLocationDb::load_from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LocationError::NotFound(_)));
    }

    #[test]
    fn unknown_type_is_a_json_error() {
        let json = r#"[{"id":"x","name":"X","nameBn":"X","type":"village",
                        "coordinates":{"lat":23.0,"lng":90.0}}]"#;
        let err = DefaultLocationDb::from_json_str(json).unwrap_err();
        assert!(matches!(err, LocationError::Json(_)));
    }
}
