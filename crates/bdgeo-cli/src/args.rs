use bdgeo_core::LocationKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for bdgeo-cli
#[derive(Debug, Parser)]
#[command(
    name = "bdgeo",
    version,
    about = "CLI for querying the Bangladesh division/district/upazila/area directory"
)]
pub struct CliArgs {
    /// Dataset to load instead of the embedded one (.json, .json.gz or .bin cache)
    #[arg(short = 'i', long = "input", global = true, env = "BDGEO_DATASET")]
    pub input: Option<PathBuf>,

    /// Print results as JSON in the browser's wire shape
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show record counts per level
    Stats,

    /// List all divisions
    Divisions,

    /// Show a single location by id
    Show {
        /// Location id (e.g. area-dhanmondi)
        id: String,
    },

    /// List the direct children of a location
    Children {
        /// Parent id (e.g. dis-dhaka)
        id: String,
        /// Only children of this kind (district, upazila, area)
        #[arg(short, long)]
        kind: Option<LocationKind>,
    },

    /// Print the path from a location up to its division
    Path {
        /// Location id
        id: String,
        /// Use Bangla names
        #[arg(long)]
        bn: bool,
    },

    /// Search locations by English or Bangla name
    Search {
        /// Substring to search (case-insensitive)
        query: String,
        /// Maximum number of results
        #[arg(short, long, default_value_t = bdgeo_core::DEFAULT_SEARCH_LIMIT)]
        limit: usize,
        /// Rank results (id, exact, prefix, substring) instead of table order
        #[arg(long)]
        smart: bool,
    },

    /// Find the location closest to a coordinate
    Nearest {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
        /// Only consider this kind
        #[arg(short, long)]
        kind: Option<LocationKind>,
    },

    /// Validate a JSON dataset and write its binary cache
    #[cfg(feature = "builder")]
    Build {
        /// Source JSON (.json or .json.gz)
        source: PathBuf,
        /// Output file (default: next to the source with the cache suffix)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Write an uncompressed cache
        #[arg(long)]
        no_compress: bool,
    },
}
