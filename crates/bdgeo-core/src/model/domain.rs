// crates/bdgeo-core/src/model/domain.rs
use crate::traits::{LocationBackend, NameMatch};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// The four levels of Bangladesh's administrative hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Division,
    District,
    Upazila,
    Area,
}

impl LocationKind {
    pub const ALL: [LocationKind; 4] = [
        LocationKind::Division,
        LocationKind::District,
        LocationKind::Upazila,
        LocationKind::Area,
    ];

    /// Distance from the root: divisions are 0, areas are 3.
    pub fn depth(self) -> u8 {
        match self {
            LocationKind::Division => 0,
            LocationKind::District => 1,
            LocationKind::Upazila => 2,
            LocationKind::Area => 3,
        }
    }

    /// Whether a record of this kind may hang under a parent of `parent`.
    ///
    /// `None` stands for "no parent", which only divisions accept. An area
    /// sits under an upazila or directly under a district.
    pub fn accepts_parent(self, parent: Option<LocationKind>) -> bool {
        matches!(
            (self, parent),
            (LocationKind::Division, None)
                | (LocationKind::District, Some(LocationKind::Division))
                | (LocationKind::Upazila, Some(LocationKind::District))
                | (
                    LocationKind::Area,
                    Some(LocationKind::District | LocationKind::Upazila)
                )
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LocationKind::Division => "division",
            LocationKind::District => "district",
            LocationKind::Upazila => "upazila",
            LocationKind::Area => "area",
        }
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        LocationKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown location kind `{s}`"))
    }
}

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// One record of the directory.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Location<B: LocationBackend> {
    pub id: B::Str,
    pub name: B::Str,
    pub name_bn: B::Str,
    pub kind: LocationKind,
    pub parent_id: Option<B::Str>,
    pub lat: B::Float,
    pub lng: B::Float,

    /// Index of the parent in [`LocationDb::locations`]. Resolved when the
    /// directory is assembled, never persisted.
    #[serde(skip)]
    pub(crate) parent: Option<u32>,
}

impl<B: LocationBackend> Location<B> {
    pub fn id(&self) -> &str {
        self.id.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn name_bn(&self) -> &str {
        self.name_bn.as_ref()
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_ref().map(|s| s.as_ref())
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: B::float_to_f64(self.lat),
            lng: B::float_to_f64(self.lng),
        }
    }

    pub fn is_division(&self) -> bool {
        self.kind == LocationKind::Division
    }
}

impl<B: LocationBackend> NameMatch for Location<B> {
    fn name_str(&self) -> &str {
        self.name.as_ref()
    }
}

/// The directory: every record in table order plus an id index.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct LocationDb<B: LocationBackend> {
    /// Master list of all records, in the order of the source table.
    pub(crate) locations: Vec<Location<B>>,
    /// id -> position in `locations`. Rebuilt on assembly.
    #[serde(skip)]
    pub(crate) index: HashMap<String, u32>,
}

impl<B: LocationBackend> LocationDb<B> {
    /// All records in table order.
    pub fn locations(&self) -> &[Location<B>] {
        &self.locations
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub(crate) fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).map(|&i| i as usize)
    }

    pub(crate) fn parent_of(&self, loc: &Location<B>) -> Option<&Location<B>> {
        loc.parent.map(|p| &self.locations[p as usize])
    }
}

/// Default backend: plain `String` + `f64`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultBackend;

impl LocationBackend for DefaultBackend {
    type Str = String;
    type Float = f64;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }

    #[inline]
    fn float_from(f: f64) -> Self::Float {
        f
    }

    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.clone()
    }

    fn float_to_f64(v: Self::Float) -> f64 {
        v
    }
}

/// Convenient alias for the default backend.
pub type DefaultLocationDb = LocationDb<DefaultBackend>;
/// Convenient alias used in demos.
pub type StandardBackend = DefaultBackend;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_rules_follow_the_hierarchy() {
        use LocationKind::*;
        assert!(Division.accepts_parent(None));
        assert!(!Division.accepts_parent(Some(Division)));
        assert!(District.accepts_parent(Some(Division)));
        assert!(!District.accepts_parent(None));
        assert!(Upazila.accepts_parent(Some(District)));
        assert!(!Upazila.accepts_parent(Some(Division)));
        assert!(Area.accepts_parent(Some(District)));
        assert!(Area.accepts_parent(Some(Upazila)));
        assert!(!Area.accepts_parent(Some(Area)));
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("UPAZILA".parse::<LocationKind>(), Ok(LocationKind::Upazila));
        assert_eq!(" area ".parse::<LocationKind>(), Ok(LocationKind::Area));
        assert!("village".parse::<LocationKind>().is_err());
    }

    #[test]
    fn coordinates_reject_out_of_range() {
        assert!(Coordinates { lat: 23.8, lng: 90.4 }.is_valid());
        assert!(!Coordinates { lat: 123.8, lng: 90.4 }.is_valid());
        assert!(!Coordinates { lat: f64::NAN, lng: 90.4 }.is_valid());
    }
}
