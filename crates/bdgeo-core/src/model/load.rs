// crates/bdgeo-core/src/model/load.rs
use crate::error::Result;
use crate::model::convert::assemble;
use crate::model::domain::LocationDb;
use crate::traits::LocationBackend;
use bincode::Options;

/// Upper bound for a serialized directory; anything larger is rejected.
const MAX_CACHE_BYTES: u64 = 16 * 1024 * 1024;

impl<B: LocationBackend> LocationDb<B> {
    /// Reconstructs the directory from its bincode form.
    ///
    /// Only the record table is stored. The id index and the parent links are
    /// rebuilt here, and the table goes through the same validation as a JSON
    /// load, so a tampered cache cannot yield a directory with dangling
    /// parents.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let stored: LocationDb<B> = bincode::DefaultOptions::new()
            .with_limit(MAX_CACHE_BYTES)
            .allow_trailing_bytes()
            .deserialize(data)?;

        assemble(stored.locations)
    }

    /// Serializes the directory with the same options [`Self::from_bytes`]
    /// reads with.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::DefaultOptions::new()
            .with_limit(MAX_CACHE_BYTES)
            .allow_trailing_bytes()
            .serialize(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DefaultLocationDb;
    use crate::traits::LocationSearch;

    #[test]
    fn bytes_rebuild_index_and_parents() {
        let db = DefaultLocationDb::load().unwrap();
        let bytes = db.to_bytes().unwrap();
        let back = DefaultLocationDb::from_bytes(&bytes).unwrap();

        assert_eq!(back.len(), db.len());
        let path: Vec<&str> = back
            .get_location_path("area-tongi")
            .iter()
            .map(|l| l.id())
            .collect();
        assert_eq!(
            path,
            ["area-tongi", "upz-gazipur-sadar", "dis-gazipur", "div-dhaka"]
        );
    }

    #[test]
    fn truncated_bytes_are_rejected() {
        let bytes = DefaultLocationDb::load().unwrap().to_bytes().unwrap();
        assert!(DefaultLocationDb::from_bytes(&bytes[..bytes.len() / 2]).is_err());
    }
}
