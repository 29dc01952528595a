// crates/bdgeo-core/src/loader/builder.rs
#![cfg(feature = "builder")]

use super::common_io;
use crate::common::DbStats;
use crate::error::Result;
use crate::model::{LocationDb, CACHE_SUFFIX};
use crate::traits::{LocationBackend, LocationSearch};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    /// Gzip whenever the crate can read it back.
    pub fn preferred() -> Self {
        if cfg!(feature = "compact") {
            CompressionMode::Gzip
        } else {
            CompressionMode::None
        }
    }
}

// -----------------------------------------------------------------------------
// BUILDER
// -----------------------------------------------------------------------------

/// Reads a JSON dataset, validates it and writes the binary cache.
///
/// Without `out_path` the cache lands next to the source with
/// [`CACHE_SUFFIX`]. Returns where it was written and what it holds.
pub fn build_database<B: LocationBackend>(
    source_path: &Path,
    out_path: Option<&Path>,
    compression: CompressionMode,
) -> Result<(PathBuf, DbStats)> {
    let out = out_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| common_io::get_cache_path(source_path, CACHE_SUFFIX));
    tracing::info!(source = %source_path.display(), out = %out.display(), ?compression, "building location cache");

    let db = LocationDb::<B>::load_from_path(source_path)?;
    write_generic(&out, &db, compression)?;

    Ok((out, db.stats()))
}

impl<B: LocationBackend> LocationDb<B> {
    /// Writes the directory as a binary cache readable by
    /// [`LocationDb::load_from_path`].
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        write_generic(path.as_ref(), self, CompressionMode::preferred())
    }
}

// -----------------------------------------------------------------------------
// GENERIC WRITER
// -----------------------------------------------------------------------------

fn write_generic<B: LocationBackend>(
    path: &Path,
    db: &LocationDb<B>,
    compression: CompressionMode,
) -> Result<()> {
    let bytes = db.to_bytes()?;
    let mut writer = BufWriter::new(File::create(path)?);

    match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                let mut encoder = GzEncoder::new(writer, Compression::default());
                encoder.write_all(&bytes)?;
                encoder.finish()?.flush()?;
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(crate::error::LocationError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        }
        CompressionMode::None => {
            writer.write_all(&bytes)?;
            writer.flush()?;
        }
    }

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote location cache");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DefaultLocationDb;

    #[test]
    fn save_and_reload_keeps_lookups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locations.bin");

        let db = DefaultLocationDb::load().unwrap();
        db.save_as(&path).unwrap();

        let reloaded = DefaultLocationDb::load_from_path(&path).unwrap();
        assert_eq!(reloaded.stats(), db.stats());
        let path_ids: Vec<&str> = reloaded
            .get_location_path("area-tongi")
            .iter()
            .map(|l| l.id())
            .collect();
        assert_eq!(
            path_ids,
            ["area-tongi", "upz-gazipur-sadar", "dis-gazipur", "div-dhaka"]
        );
    }

    #[test]
    fn build_database_defaults_to_cache_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("bd.json");
        std::fs::write(&source, DefaultLocationDb::embedded_dataset()).unwrap();

        let (out, stats) =
            build_database::<crate::DefaultBackend>(&source, None, CompressionMode::preferred())
                .unwrap();
        assert_eq!(out, dir.path().join(format!("bd{CACHE_SUFFIX}")));
        assert_eq!(stats.total(), 114);
        assert!(DefaultLocationDb::load_from_path(&out).is_ok());
    }

    #[test]
    fn truncated_cache_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.bin");
        let db = DefaultLocationDb::load().unwrap();
        let bytes = db.to_bytes().unwrap();
        let mut file = std::fs::File::create(&path).unwrap();

        #[cfg(feature = "compact")]
        {
            let mut gz = GzEncoder::new(&mut file, Compression::default());
            gz.write_all(&bytes[..bytes.len() / 2]).unwrap();
            gz.finish().unwrap();
        }
        #[cfg(not(feature = "compact"))]
        file.write_all(&bytes[..bytes.len() / 2]).unwrap();

        assert!(DefaultLocationDb::load_from_path(&path).is_err());
    }
}
