// crates/bdgeo-core/src/model/convert.rs
use crate::error::{LocationError, Result};
use crate::model::domain::{Location, LocationDb};
use crate::raw::LocationRaw;
use crate::traits::LocationBackend;
use std::collections::HashMap;

/// **Standard Converter:** Raw -> validated directory.
pub fn from_raw<B: LocationBackend>(raw: Vec<LocationRaw>) -> Result<LocationDb<B>> {
    let locations = raw
        .into_iter()
        .map(|r| Location::<B> {
            id: B::str_from(r.id.trim()),
            name: B::str_from(&r.name),
            name_bn: B::str_from(&r.name_bn),
            kind: r.kind,
            parent_id: r
                .parent_id
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(B::str_from),
            lat: B::float_from(r.coordinates.lat),
            lng: B::float_from(r.coordinates.lng),
            parent: None,
        })
        .collect();

    assemble(locations)
}

/// Checks every invariant of the table and resolves parent indices.
///
/// Fails on the first violation, in table order:
/// - coordinates outside the valid degree ranges
/// - an id seen twice
/// - a `parent_id` that names no record
/// - a parent of the wrong kind (including divisions with a parent and
///   non-divisions without one)
///
/// Parent kinds are strictly shallower than their children, so a table that
/// passes cannot contain a cycle.
pub(crate) fn assemble<B: LocationBackend>(mut locations: Vec<Location<B>>) -> Result<LocationDb<B>> {
    let mut index: HashMap<String, u32> = HashMap::with_capacity(locations.len());

    for (pos, loc) in locations.iter().enumerate() {
        let coords = loc.coordinates();
        if !coords.is_valid() {
            return Err(LocationError::InvalidCoordinates {
                id: loc.id().to_string(),
                lat: coords.lat,
                lng: coords.lng,
            });
        }
        let pos = u32::try_from(pos)
            .map_err(|_| LocationError::InvalidData("too many locations".into()))?;
        if index.insert(loc.id().to_string(), pos).is_some() {
            return Err(LocationError::DuplicateId(loc.id().to_string()));
        }
    }

    let mut parents = Vec::with_capacity(locations.len());
    for loc in &locations {
        let parent = match loc.parent_id() {
            Some(pid) => Some(*index.get(pid).ok_or_else(|| LocationError::MissingParent {
                id: loc.id().to_string(),
                parent_id: pid.to_string(),
            })?),
            None => None,
        };

        let parent_kind = parent.map(|p| locations[p as usize].kind);
        if !loc.kind.accepts_parent(parent_kind) {
            let detail = match parent_kind {
                Some(pk) => format!("a {} cannot sit under a {pk}", loc.kind),
                None => format!("a {} needs a parent", loc.kind),
            };
            return Err(LocationError::InvalidParent {
                id: loc.id().to_string(),
                detail,
            });
        }
        parents.push(parent);
    }

    for (loc, parent) in locations.iter_mut().zip(parents) {
        loc.parent = parent;
    }

    Ok(LocationDb { locations, index })
}
