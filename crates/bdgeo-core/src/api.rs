// crates/bdgeo-core/src/api.rs
//! Serializable views over directory records.
//!
//! The browser picker expects the record in its original wire shape:
//! `{ id, name, nameBn, type, parentId?, coordinates: { lat, lng } }`.
//! These wrappers borrow from the directory and serialize into exactly that
//! shape, for `serde_json` in the CLI and `serde-wasm-bindgen` in the WASM
//! bindings.

use crate::common::{DbStats, SearchHit};
use crate::model::Location;
use crate::traits::LocationBackend;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// A single record.
pub struct LocationView<'a, B: LocationBackend>(pub &'a Location<B>);

impl<B: LocationBackend> Serialize for LocationView<'_, B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let loc = self.0;
        let len = if loc.parent_id().is_some() { 6 } else { 5 };
        let mut st = serializer.serialize_struct("Location", len)?;
        st.serialize_field("id", loc.id())?;
        st.serialize_field("name", loc.name())?;
        st.serialize_field("nameBn", loc.name_bn())?;
        st.serialize_field("type", &loc.kind)?;
        match loc.parent_id() {
            Some(pid) => st.serialize_field("parentId", pid)?,
            None => st.skip_field("parentId")?,
        }
        st.serialize_field("coordinates", &loc.coordinates())?;
        st.end()
    }
}

/// A ranked hit: `score` next to the record's view nested under `location`.
pub struct SearchHitView<'a, B: LocationBackend>(pub &'a SearchHit<'a, B>);

impl<B: LocationBackend> Serialize for SearchHitView<'_, B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let hit = self.0;
        let mut st = serializer.serialize_struct("SearchHit", 2)?;
        st.serialize_field("score", &hit.score)?;
        st.serialize_field("location", &LocationView(hit.location))?;
        st.end()
    }
}

/// Collects records into views, preserving order.
pub fn views<'a, B: LocationBackend>(
    locs: impl IntoIterator<Item = &'a Location<B>>,
) -> Vec<LocationView<'a, B>> {
    locs.into_iter().map(LocationView).collect()
}

/// Stats with a precomputed total, for JSON consumers.
#[derive(serde::Serialize)]
pub struct StatsView {
    pub divisions: usize,
    pub districts: usize,
    pub upazilas: usize,
    pub areas: usize,
    pub total: usize,
}

impl From<DbStats> for StatsView {
    fn from(s: DbStats) -> Self {
        Self {
            divisions: s.divisions,
            districts: s.districts,
            upazilas: s.upazilas,
            areas: s.areas,
            total: s.total(),
        }
    }
}
