// crates/bdgeo-core/src/model/search.rs
use crate::common::{
    DbStats, Language, SearchHit, SCORE_EXACT, SCORE_ID, SCORE_PREFIX, SCORE_SUBSTRING,
};
use crate::geo::haversine_km;
use crate::model::domain::{Coordinates, Location, LocationDb, LocationKind};
use crate::text::{lower_native, FoldedQuery};
use crate::traits::{LocationBackend, LocationSearch};
use std::cmp::Reverse;

impl<B: LocationBackend> LocationSearch<B> for LocationDb<B> {
    fn stats(&self) -> DbStats {
        let mut stats = DbStats::default();
        for loc in &self.locations {
            stats.count(loc.kind);
        }
        stats
    }

    fn get_location_by_id(&self, id: &str) -> Option<&Location<B>> {
        self.position(id.trim()).map(|i| &self.locations[i])
    }

    fn get_locations_by_parent(&self, parent_id: &str) -> Vec<&Location<B>> {
        // Resolve once, then compare indices instead of strings.
        let Some(parent) = self.position(parent_id.trim()) else {
            return Vec::new();
        };
        self.locations
            .iter()
            .filter(|l| l.parent == Some(parent as u32))
            .collect()
    }

    fn search_locations(&self, query: &str, limit: usize) -> Vec<&Location<B>> {
        let q = FoldedQuery::new(query);
        if q.is_empty() || limit == 0 {
            return Vec::new();
        }

        self.locations
            .iter()
            .filter(|l| q.in_latin(l.name()) || q.in_native(l.name_bn()))
            .take(limit)
            .collect()
    }

    fn get_location_path(&self, id: &str) -> Vec<&Location<B>> {
        let mut path = Vec::new();
        let mut current = self.get_location_by_id(id);
        while let Some(loc) = current {
            path.push(loc);
            current = self.parent_of(loc);
        }
        path
    }

    fn divisions(&self) -> Vec<&Location<B>> {
        self.locations.iter().filter(|l| l.is_division()).collect()
    }

    fn children_of_kind(&self, parent_id: &str, kind: LocationKind) -> Vec<&Location<B>> {
        self.get_locations_by_parent(parent_id)
            .into_iter()
            .filter(|l| l.kind == kind)
            .collect()
    }

    fn descendants(&self, id: &str) -> Vec<&Location<B>> {
        let mut out = Vec::new();
        // Explicit stack; children are pushed in reverse so they pop in table order.
        let mut stack: Vec<&Location<B>> = self.get_locations_by_parent(id);
        stack.reverse();
        while let Some(loc) = stack.pop() {
            out.push(loc);
            let mut children = self.get_locations_by_parent(loc.id());
            children.reverse();
            stack.extend(children);
        }
        out
    }

    fn smart_search(&self, query: &str) -> Vec<SearchHit<'_, B>> {
        let q = FoldedQuery::new(query);
        if q.is_empty() {
            return Vec::new();
        }

        let mut out: Vec<SearchHit<'_, B>> = Vec::new();
        for loc in &self.locations {
            if loc.id().eq_ignore_ascii_case(query.trim()) {
                out.push(SearchHit::new(SCORE_ID, loc));
                continue;
            }

            let bn = lower_native(loc.name_bn());
            let score = if q.eq_latin(loc.name()) || bn == q.native() {
                SCORE_EXACT
            } else if q.starts_latin(loc.name()) || bn.starts_with(q.native()) {
                SCORE_PREFIX
            } else if q.in_latin(loc.name()) || q.in_native(loc.name_bn()) {
                SCORE_SUBSTRING
            } else {
                continue;
            };
            out.push(SearchHit::new(score, loc));
        }

        // Stable: equal keys keep table order.
        out.sort_by_key(|h| (Reverse(h.score), h.location.kind.depth()));
        out
    }

    fn display_path(&self, id: &str, lang: Language) -> Option<String> {
        let path = self.get_location_path(id);
        if path.is_empty() {
            return None;
        }
        let names: Vec<&str> = path
            .iter()
            .map(|l| match lang {
                Language::English => l.name(),
                Language::Bangla => l.name_bn(),
            })
            .collect();
        Some(names.join(", "))
    }

    fn nearest(
        &self,
        lat: f64,
        lng: f64,
        kind: Option<LocationKind>,
    ) -> Option<(&Location<B>, f64)> {
        if !(Coordinates { lat, lng }).is_valid() {
            return None;
        }
        self.locations
            .iter()
            .filter(|l| kind.map_or(true, |k| l.kind == k))
            .map(|l| {
                let c = l.coordinates();
                (l, haversine_km(lat, lng, c.lat, c.lng))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}
