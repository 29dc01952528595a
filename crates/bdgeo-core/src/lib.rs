// crates/bdgeo-core/src/lib.rs
//! # bdgeo-core
//!
//! A read-only directory of Bangladesh's administrative locations:
//! divisions, districts, upazilas and areas. Every record points at its
//! parent, so the directory can be queried by id, by parent, by bilingual
//! text search, and walked upward into a breadcrumb path.
//!
//! ```rust
//! use bdgeo_core::prelude::*;
//!
//! let db = DefaultLocationDb::load().unwrap();
//! let dhanmondi = db.get_location_by_id("area-dhanmondi").unwrap();
//! assert_eq!(dhanmondi.kind, LocationKind::Area);
//!
//! let path = db.get_location_path("area-dhanmondi");
//! assert_eq!(path.last().unwrap().kind, LocationKind::Division);
//! ```

pub mod api; // JSON views for the browser and the CLI
pub mod common;
pub mod error;
pub mod geo;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod selection;
pub mod text;
pub mod traits;
// Raw input shared by every loader path
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::common::{DbStats, Language, SearchHit};
pub use crate::error::{LocationError, Result};
pub use crate::model::{
    Coordinates, DefaultBackend, DefaultLocationDb, Location, LocationDb, LocationKind,
    StandardBackend,
};
pub use crate::selection::LocationSelection;
pub use crate::traits::{LocationBackend, LocationSearch, NameMatch};

/// Number of hits the location picker shows for a free-text query.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;
