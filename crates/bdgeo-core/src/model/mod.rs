// crates/bdgeo-core/src/model/mod.rs
pub mod convert;
pub mod domain;
pub mod load;
pub mod search;

pub use domain::{
    Coordinates, DefaultBackend, DefaultLocationDb, Location, LocationDb, LocationKind,
    StandardBackend,
};

/// The file extension used for binary caches of the directory.
#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = ".bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = ".comp.bin";
