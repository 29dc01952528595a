//! bdgeo prelude: bring common types and traits into scope for demos.

pub use crate::api::{LocationView, SearchHitView, StatsView};
pub use crate::common::{DbStats, Language, SearchHit};
pub use crate::error::{LocationError, Result};
pub use crate::model::{
    Coordinates, DefaultBackend, DefaultLocationDb, Location, LocationDb, LocationKind,
    StandardBackend,
};
pub use crate::selection::LocationSelection;
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::{LocationBackend, LocationSearch, NameMatch};
pub use crate::DEFAULT_SEARCH_LIMIT;

#[cfg(feature = "builder")]
pub use crate::loader::builder::{build_database, CompressionMode};
