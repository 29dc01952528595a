//! Basic usage example for bdgeo-rs
//!
//! This example demonstrates how to:
//! - Load the embedded location directory
//! - Look records up by id and by parent
//! - Walk a breadcrumb path
//! - Search in English and Bangla

use bdgeo_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== bdgeo-rs Basic Usage Example ===\n");

    println!("Loading location directory...");
    let db = DefaultLocationDb::load()?;
    let stats = db.stats();
    println!(
        "✓ {} divisions, {} districts, {} upazilas, {} areas\n",
        stats.divisions, stats.districts, stats.upazilas, stats.areas
    );

    // Example 1: Divisions
    println!("--- Example 1: List all divisions ---");
    for (i, division) in db.divisions().iter().enumerate() {
        println!("{}. {} ({})", i + 1, division.name(), division.name_bn());
    }
    println!();

    // Example 2: Lookup by id
    println!("--- Example 2: Find a location by id ---");
    if let Some(loc) = db.get_location_by_id("area-gulshan") {
        let c = loc.coordinates();
        println!("Found: {} [{}]", loc.name(), loc.kind);
        println!("Parent: {}", loc.parent_id().unwrap_or("-"));
        println!("Coordinates: {:.4}, {:.4}", c.lat, c.lng);
    }
    println!();

    // Example 3: Children
    println!("--- Example 3: Upazilas of Gazipur ---");
    for upazila in db.children_of_kind("dis-gazipur", LocationKind::Upazila) {
        println!("- {} ({})", upazila.name(), upazila.name_bn());
    }
    println!();

    // Example 4: Path
    println!("--- Example 4: Breadcrumb ---");
    for lang in [Language::English, Language::Bangla] {
        if let Some(line) = db.display_path("area-ashulia", lang) {
            println!("{lang}: {line}");
        }
    }
    println!();

    // Example 5: Search
    println!("--- Example 5: Search ---");
    for query in ["dhaka", "ঢাকা", "bazar"] {
        let hits = db.search_locations(query, DEFAULT_SEARCH_LIMIT);
        let names: Vec<&str> = hits.iter().map(|l| l.name()).collect();
        println!("{query:>6}: {}", names.join(", "));
    }

    Ok(())
}
