//! Walks the cascading division → district → upazila → area picker.

use bdgeo_rs::prelude::*;

fn main() -> Result<()> {
    let db = DefaultLocationDb::load()?;
    let mut selection = LocationSelection::default();

    selection.select(LocationKind::Division, Some("div-dhaka".into()));
    let districts = selection.options(db, LocationKind::District);
    println!("{} districts in Dhaka division", districts.len());

    selection.select(LocationKind::District, Some("dis-gazipur".into()));
    for upazila in selection.options(db, LocationKind::Upazila) {
        println!("  upazila: {}", upazila.name());
    }

    selection.select(LocationKind::Upazila, Some("upz-gazipur-sadar".into()));
    selection.select(LocationKind::Area, Some("area-tongi".into()));

    match selection.resolve(db)? {
        Some(loc) => println!(
            "Selected: {}",
            db.display_path(loc.id(), Language::English)
                .unwrap_or_default()
        ),
        None => println!("Nothing selected"),
    }

    // Changing the district drops the upazila and area below it.
    selection.select(LocationKind::District, Some("dis-narayanganj".into()));
    println!("After switching district: {selection:?}");

    // A mismatched pick is reported, not silently accepted.
    selection.select(LocationKind::Upazila, Some("upz-savar".into()));
    if let Err(e) = selection.resolve(db) {
        println!("Rejected: {e}");
    }

    Ok(())
}
