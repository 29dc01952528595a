//! Umbrella crate for the bdgeo workspace; re-exports `bdgeo-core` so the
//! demos can `use bdgeo_rs::prelude::*`.
pub use bdgeo_core::*;
