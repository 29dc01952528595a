// crates/bdgeo-core/src/selection.rs
//! State of the cascading location picker: division, then district, then
//! upazila, then area. Each level narrows the next one.

use crate::error::{LocationError, Result};
use crate::model::{Location, LocationDb, LocationKind};
use crate::traits::{LocationBackend, LocationSearch};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upazila: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
}

impl LocationSelection {
    /// Fills every level from `id`'s path. `None` for unknown ids.
    ///
    /// An area filed directly under a district leaves `upazila` empty.
    pub fn from_location<B: LocationBackend>(db: &LocationDb<B>, id: &str) -> Option<Self> {
        let path = db.get_location_path(id);
        if path.is_empty() {
            return None;
        }
        let mut sel = Self::default();
        for loc in path {
            *sel.slot_mut(loc.kind) = Some(loc.id().to_string());
        }
        Some(sel)
    }

    pub fn get(&self, kind: LocationKind) -> Option<&str> {
        match kind {
            LocationKind::Division => self.division.as_deref(),
            LocationKind::District => self.district.as_deref(),
            LocationKind::Upazila => self.upazila.as_deref(),
            LocationKind::Area => self.area.as_deref(),
        }
    }

    fn slot_mut(&mut self, kind: LocationKind) -> &mut Option<String> {
        match kind {
            LocationKind::Division => &mut self.division,
            LocationKind::District => &mut self.district,
            LocationKind::Upazila => &mut self.upazila,
            LocationKind::Area => &mut self.area,
        }
    }

    /// Sets one level and clears every level below it, as picking a new
    /// district invalidates the upazila and area chosen under the old one.
    pub fn select(&mut self, kind: LocationKind, id: Option<String>) {
        *self.slot_mut(kind) = id;
        for deeper in LocationKind::ALL.into_iter().filter(|k| k.depth() > kind.depth()) {
            *self.slot_mut(deeper) = None;
        }
    }

    pub fn is_empty(&self) -> bool {
        LocationKind::ALL.into_iter().all(|k| self.get(k).is_none())
    }

    /// Checks the chosen ids against the directory and returns the most
    /// specific chosen record (`None` when nothing is chosen).
    ///
    /// Every chosen id must exist, be of its level's kind, and lie below the
    /// nearest chosen level above it. Skipped levels are allowed.
    pub fn resolve<'a, B: LocationBackend>(
        &self,
        db: &'a LocationDb<B>,
    ) -> Result<Option<&'a Location<B>>> {
        let mut deepest: Option<&'a Location<B>> = None;

        for kind in LocationKind::ALL {
            let Some(id) = self.get(kind) else {
                continue;
            };
            let loc = db
                .get_location_by_id(id)
                .ok_or_else(|| LocationError::NotFound(format!("location `{id}`")))?;
            if loc.kind != kind {
                return Err(LocationError::InvalidSelection(format!(
                    "`{id}` is a {}, not a {kind}",
                    loc.kind
                )));
            }
            if let Some(above) = deepest {
                let descends = db
                    .get_location_path(loc.id())
                    .iter()
                    .any(|l| l.id() == above.id());
                if !descends {
                    return Err(LocationError::InvalidSelection(format!(
                        "`{id}` is not inside `{}`",
                        above.id()
                    )));
                }
            }
            deepest = Some(loc);
        }

        Ok(deepest)
    }

    /// Options for `kind` given the levels chosen above it: the children of
    /// the nearest chosen ancestor level, or all divisions.
    ///
    /// Areas may sit under an upazila or directly under a district; with a
    /// district chosen and no upazila, only the district's own areas are
    /// offered.
    pub fn options<'a, B: LocationBackend>(
        &self,
        db: &'a LocationDb<B>,
        kind: LocationKind,
    ) -> Vec<&'a Location<B>> {
        if kind == LocationKind::Division {
            return db.divisions();
        }
        let parent = LocationKind::ALL
            .into_iter()
            .filter(|k| k.depth() < kind.depth())
            .rev()
            .find_map(|k| self.get(k));
        match parent {
            Some(pid) => db.children_of_kind(pid, kind),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DefaultLocationDb;

    fn db() -> &'static DefaultLocationDb {
        DefaultLocationDb::load().unwrap()
    }

    #[test]
    fn from_location_fills_every_level() {
        let sel = LocationSelection::from_location(db(), "area-tongi").unwrap();
        assert_eq!(sel.division.as_deref(), Some("div-dhaka"));
        assert_eq!(sel.district.as_deref(), Some("dis-gazipur"));
        assert_eq!(sel.upazila.as_deref(), Some("upz-gazipur-sadar"));
        assert_eq!(sel.area.as_deref(), Some("area-tongi"));
    }

    #[test]
    fn area_under_district_skips_upazila() {
        let sel = LocationSelection::from_location(db(), "area-agrabad").unwrap();
        assert_eq!(sel.upazila, None);
        assert_eq!(sel.district.as_deref(), Some("dis-chattogram"));
        let resolved = sel.resolve(db()).unwrap().unwrap();
        assert_eq!(resolved.id(), "area-agrabad");
    }

    #[test]
    fn select_clears_deeper_levels() {
        let mut sel = LocationSelection::from_location(db(), "area-tongi").unwrap();
        sel.select(LocationKind::District, Some("dis-narsingdi".into()));
        assert_eq!(sel.division.as_deref(), Some("div-dhaka"));
        assert_eq!(sel.upazila, None);
        assert_eq!(sel.area, None);
        assert_eq!(sel.resolve(db()).unwrap().unwrap().id(), "dis-narsingdi");
    }

    #[test]
    fn empty_selection_resolves_to_none() {
        let sel = LocationSelection::default();
        assert!(sel.is_empty());
        assert!(sel.resolve(db()).unwrap().is_none());
    }

    #[test]
    fn rejects_district_from_another_division() {
        let sel = LocationSelection {
            division: Some("div-sylhet".into()),
            district: Some("dis-gazipur".into()),
            ..Default::default()
        };
        assert!(matches!(
            sel.resolve(db()),
            Err(LocationError::InvalidSelection(_))
        ));
    }

    #[test]
    fn rejects_wrong_kind_in_slot() {
        let sel = LocationSelection {
            district: Some("div-dhaka".into()),
            ..Default::default()
        };
        assert!(matches!(
            sel.resolve(db()),
            Err(LocationError::InvalidSelection(_))
        ));
    }

    #[test]
    fn rejects_unknown_id() {
        let sel = LocationSelection {
            area: Some("area-atlantis".into()),
            ..Default::default()
        };
        assert!(matches!(sel.resolve(db()), Err(LocationError::NotFound(_))));
    }

    #[test]
    fn options_follow_the_nearest_choice() {
        let mut sel = LocationSelection::default();
        assert_eq!(sel.options(db(), LocationKind::Division).len(), 8);
        assert!(sel.options(db(), LocationKind::District).is_empty());

        sel.select(LocationKind::Division, Some("div-sylhet".into()));
        assert_eq!(sel.options(db(), LocationKind::District).len(), 4);

        sel.select(LocationKind::District, Some("dis-sylhet".into()));
        let upazilas = sel.options(db(), LocationKind::Upazila);
        assert_eq!(upazilas.len(), 2);
        let areas = sel.options(db(), LocationKind::Area);
        assert_eq!(areas.len(), 2);
        assert!(areas.iter().all(|a| a.parent_id() == Some("dis-sylhet")));
    }
}
