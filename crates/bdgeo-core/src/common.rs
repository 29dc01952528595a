// crates/bdgeo-core/src/common.rs
use crate::model::{Location, LocationKind};
use crate::traits::LocationBackend;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Simple aggregate statistics for the directory.
///
/// Returned by [`LocationSearch::stats`](crate::traits::LocationSearch::stats).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub divisions: usize,
    pub districts: usize,
    pub upazilas: usize,
    pub areas: usize,
}

impl DbStats {
    pub fn total(&self) -> usize {
        self.divisions + self.districts + self.upazilas + self.areas
    }

    pub(crate) fn count(&mut self, kind: LocationKind) {
        match kind {
            LocationKind::Division => self.divisions += 1,
            LocationKind::District => self.districts += 1,
            LocationKind::Upazila => self.upazilas += 1,
            LocationKind::Area => self.areas += 1,
        }
    }
}

/// Which of the two names to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Bangla,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "bn" | "bangla" | "bengali" => Ok(Language::Bangla),
            other => Err(format!("unknown language `{other}`")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Language::English => "en",
            Language::Bangla => "bn",
        })
    }
}

/// A ranked search result.
#[derive(Debug, Clone)]
pub struct SearchHit<'a, B: LocationBackend> {
    pub score: u8,
    pub location: &'a Location<B>,
}

/// Score for a query that is a record id.
pub const SCORE_ID: u8 = 100;
/// Score for an exact (folded) name match in either language.
pub const SCORE_EXACT: u8 = 90;
pub const SCORE_PREFIX: u8 = 80;
pub const SCORE_SUBSTRING: u8 = 70;

impl<'a, B: LocationBackend> SearchHit<'a, B> {
    pub fn new(score: u8, location: &'a Location<B>) -> Self {
        Self { score, location }
    }
}
