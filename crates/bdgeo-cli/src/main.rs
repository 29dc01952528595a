//! bdgeo-cli — Command-line interface for bdgeo-core
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ bdgeo stats
//!
//! - Walk from an area up to its division
//!   $ bdgeo path area-ashulia
//!   $ bdgeo path area-ashulia --bn
//!
//! - List the upazilas of a district
//!   $ bdgeo children dis-gazipur --kind upazila
//!
//! - Search in either script
//!   $ bdgeo search dhaka
//!   $ bdgeo search ঢাকা --smart --json
//!
//! Data source
//! -----------
//!
//! By default the embedded dataset is used. `--input <path>` (or
//! `BDGEO_DATASET`) loads a `.json`, `.json.gz` or `.bin` file instead.
//! Set `RUST_LOG=debug` to see what was loaded.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use bdgeo_core::api::views;
use bdgeo_core::prelude::*;
use clap::Parser;
use serde::Serialize;
use std::borrow::Cow;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let json = args.json;
    let input = args.input.as_deref();
    // Only the query commands read a directory; `build` reads its own source.
    let load = || open_directory(input);

    match args.command {
        Commands::Stats => {
            let stats = load()?.stats();
            if json {
                return print_json(&StatsView::from(stats));
            }
            println!("Directory statistics:");
            println!("  Divisions: {}", stats.divisions);
            println!("  Districts: {}", stats.districts);
            println!("  Upazilas:  {}", stats.upazilas);
            println!("  Areas:     {}", stats.areas);
            println!("  Total:     {}", stats.total());
        }

        Commands::Divisions => print_list(load()?.divisions(), json)?,

        Commands::Show { id } => {
            let db = load()?;
            let Some(loc) = db.get_location_by_id(&id) else {
                bail!("No location found for: {id}");
            };
            if json {
                return print_json(&LocationView(loc));
            }
            let c = loc.coordinates();
            println!("Id:          {}", loc.id());
            println!("Name:        {}", loc.name());
            println!("Bangla:      {}", loc.name_bn());
            println!("Type:        {}", loc.kind);
            println!("Parent:      {}", loc.parent_id().unwrap_or("-"));
            println!("Coordinates: {:.4}, {:.4}", c.lat, c.lng);
            println!("Children:    {}", db.get_locations_by_parent(loc.id()).len());
        }

        Commands::Children { id, kind } => {
            let db = load()?;
            if db.get_location_by_id(&id).is_none() {
                bail!("Location {id} not found");
            }
            let children = match kind {
                Some(k) => db.children_of_kind(&id, k),
                None => db.get_locations_by_parent(&id),
            };
            print_list(children, json)?;
        }

        Commands::Path { id, bn } => {
            let db = load()?;
            let path = db.get_location_path(&id);
            if path.is_empty() {
                bail!("Location {id} not found");
            }
            if json {
                return print_json(&views(path));
            }
            let lang = if bn { Language::Bangla } else { Language::English };
            if let Some(line) = db.display_path(&id, lang) {
                println!("{line}");
            }
        }

        Commands::Search {
            query,
            limit,
            smart,
        } => {
            let db = load()?;
            if smart {
                let hits: Vec<_> = db.smart_search(&query).into_iter().take(limit).collect();
                if json {
                    let out: Vec<_> = hits.iter().map(SearchHitView).collect();
                    return print_json(&out);
                }
                if hits.is_empty() {
                    println!("No locations found matching: {query}");
                }
                for hit in &hits {
                    println!("[{:>3}] {}", hit.score, describe(&db, hit.location));
                }
            } else {
                let found = db.search_locations(&query, limit);
                if found.is_empty() && !json {
                    println!("No locations found matching: {query}");
                    return Ok(());
                }
                print_list(found, json)?;
            }
        }

        Commands::Nearest { lat, lng, kind } => {
            let db = load()?;
            let Some((loc, km)) = db.nearest(lat, lng, kind) else {
                bail!("No location of that kind near ({lat}, {lng})");
            };
            if json {
                return print_json(&serde_json::json!({
                    "location": LocationView(loc),
                    "distanceKm": km,
                }));
            }
            println!("{} ({km:.1} km)", describe(&db, loc));
        }

        #[cfg(feature = "builder")]
        Commands::Build {
            source,
            out,
            no_compress,
        } => {
            let compression = if no_compress {
                CompressionMode::None
            } else {
                CompressionMode::preferred()
            };
            let (path, stats) =
                build_database::<DefaultBackend>(&source, out.as_deref(), compression)
                    .with_context(|| format!("building cache from {}", source.display()))?;
            println!("Wrote {} ({} locations)", path.display(), stats.total());
        }
    }

    Ok(())
}

fn open_directory(input: Option<&Path>) -> anyhow::Result<Cow<'static, DefaultLocationDb>> {
    Ok(match input {
        Some(path) => Cow::Owned(
            DefaultLocationDb::load_from_path(path)
                .with_context(|| format!("loading {}", path.display()))?,
        ),
        None => Cow::Borrowed(DefaultLocationDb::load()?),
    })
}

fn describe(db: &DefaultLocationDb, loc: &Location<DefaultBackend>) -> String {
    let place = db
        .display_path(loc.id(), Language::English)
        .unwrap_or_else(|| loc.name().to_string());
    format!("{place} [{} {}]", loc.kind, loc.id())
}

fn print_list(locs: Vec<&Location<DefaultBackend>>, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(&views(locs));
    }
    for loc in locs {
        println!("{} — {} ({})", loc.id(), loc.name(), loc.name_bn());
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_directory_is_borrowed() {
        let db = open_directory(None).unwrap();
        assert!(matches!(db, Cow::Borrowed(_)));
        assert_eq!(db.divisions().len(), 8);
    }

    #[test]
    fn missing_input_names_the_path() {
        let err = open_directory(Some(Path::new("/nonexistent/bd.json"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/bd.json"));
    }
}
