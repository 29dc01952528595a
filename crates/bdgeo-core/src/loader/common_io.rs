// crates/bdgeo-core/src/loader/common_io.rs
use crate::error::{LocationError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Opens a file, buffers it, and optionally wraps it in a Gzip decoder.
/// Returns a generic Reader so the caller doesn't care about the compression.
pub(crate) fn open_stream(path: &Path, gzip: bool) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        LocationError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if gzip {
        #[cfg(feature = "compact")]
        {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(LocationError::InvalidData(
                "Gzip requested but 'compact' disabled".into(),
            ));
        }
    }

    Ok(Box::new(reader))
}

/// `<dir>/<file>` -> `<dir>/<file stem><suffix>`, e.g.
/// `data/bangladesh_locations.json` -> `data/bangladesh_locations.comp.bin`.
#[cfg_attr(not(feature = "builder"), allow(dead_code))]
pub(crate) fn get_cache_path(source: &Path, suffix: &str) -> PathBuf {
    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name
        .strip_suffix(".gz")
        .unwrap_or(name.as_str())
        .trim_end_matches(".json");
    source.with_file_name(format!("{stem}{suffix}"))
}
