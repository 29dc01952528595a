// crates/bdgeo-core/src/traits.rs
use crate::common::{DbStats, Language, SearchHit};
use crate::model::{Location, LocationKind};
use crate::text::fold_key;
use serde::{Deserialize, Serialize};

/// Storage backend for strings and floats used by the directory.
///
/// This abstraction allows the crate to swap how textual and floating-point
/// data are stored internally (for example to use more compact types) without
/// changing the public API of accessors that return `&str`/`f64` views.
///
/// Implementors must be `Clone + Send + Sync + 'static`, and the associated
/// types must round-trip through serde so directories can be cached via
/// bincode.
pub trait LocationBackend: Clone + Send + Sync + std::fmt::Debug + 'static {
    type Str: Clone
        + Send
        + Sync
        + std::fmt::Debug
        + Serialize
        + for<'de> Deserialize<'de>
        + AsRef<str>;
    type Float: Copy + Send + Sync + std::fmt::Debug + Serialize + for<'de> Deserialize<'de>;

    /// Convert an `&str` into the backend string representation.
    fn str_from(s: &str) -> Self::Str;
    /// Convert an `f64` into the backend float representation.
    fn float_from(f: f64) -> Self::Float;

    /// Convert backend string to owned Rust `String`.
    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.as_ref().to_string()
    }

    /// Convert backend float to plain `f64`.
    fn float_to_f64(v: Self::Float) -> f64;
}

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Implementors provide a `&str` view of their canonical name via
/// [`NameMatch::name_str`], and get:
/// - [`NameMatch::is_named`]: equality on folded form
/// - [`NameMatch::name_contains`]: substring match on folded form
///
/// # Examples
/// ```rust
/// use bdgeo_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Narayanganj").is_named("NARAYANGANJ"));
/// assert!(Place("Cox's Bazar").name_contains("bazar"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Accent-insensitive and case-insensitive name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    /// Accent-insensitive and case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

/// The query operations available on a location directory.
///
/// Every lookup is a pure read. Misses are reported as `None` or as an empty
/// `Vec`; nothing here returns an error.
pub trait LocationSearch<B: LocationBackend> {
    /// Per-kind record counts.
    fn stats(&self) -> DbStats;

    /// Looks a record up by its id.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bdgeo_core::prelude::*;
    ///
    /// let db = DefaultLocationDb::load().unwrap();
    /// let gazipur = db.get_location_by_id("dis-gazipur").unwrap();
    /// assert_eq!(gazipur.name(), "Gazipur");
    /// assert!(db.get_location_by_id("dis-atlantis").is_none());
    /// ```
    fn get_location_by_id(&self, id: &str) -> Option<&Location<B>>;

    /// All records whose parent is `parent_id`, in table order.
    ///
    /// Empty for leaf records and for unknown ids.
    fn get_locations_by_parent(&self, parent_id: &str) -> Vec<&Location<B>>;

    /// Case-insensitive substring search over both the English and the
    /// Bangla name, in table order, returning at most `limit` records.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bdgeo_core::prelude::*;
    ///
    /// let db = DefaultLocationDb::load().unwrap();
    /// let latin = db.search_locations("dhaka", DEFAULT_SEARCH_LIMIT);
    /// let bangla = db.search_locations("ঢাকা", DEFAULT_SEARCH_LIMIT);
    /// assert!(latin.iter().any(|l| l.id() == "div-dhaka"));
    /// assert!(bangla.iter().any(|l| l.id() == "div-dhaka"));
    /// ```
    fn search_locations(&self, query: &str, limit: usize) -> Vec<&Location<B>>;

    /// Walks parent pointers from `id` to its division.
    ///
    /// The record itself comes first and the root division last. Unknown ids
    /// yield an empty path.
    fn get_location_path(&self, id: &str) -> Vec<&Location<B>>;

    /// All top-level records.
    fn divisions(&self) -> Vec<&Location<B>>;

    /// Children of `parent_id` restricted to one kind.
    fn children_of_kind(&self, parent_id: &str, kind: LocationKind) -> Vec<&Location<B>>;

    /// Every record below `id`, depth-first, siblings in table order.
    fn descendants(&self, id: &str) -> Vec<&Location<B>>;

    /// Ranked search: id match, exact name, prefix, then substring.
    fn smart_search(&self, query: &str) -> Vec<SearchHit<'_, B>>;

    /// Comma-separated breadcrumb, most specific name first.
    fn display_path(&self, id: &str, lang: Language) -> Option<String>;

    /// The closest record (optionally of one kind) to a point, with the
    /// great-circle distance in kilometres.
    fn nearest(&self, lat: f64, lng: f64, kind: Option<LocationKind>)
        -> Option<(&Location<B>, f64)>;
}
