//! bdgeo-wasm — WebAssembly bindings for bdgeo-core
//!
//! Exposes the Bangladesh location directory to the browser location
//! picker. The dataset is embedded through `bdgeo-core`, so there is
//! nothing to fetch at runtime.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - Lookups: `get_location_by_id(id)`, `get_locations_by_parent(id)`,
//!   `get_location_path(id)`, `divisions()`
//! - Search: `search_locations(query, limit?)`, `smart_search(query)`
//! - `get_stats()`, `location_count()`
//!
//! Records cross into JS in their wire shape:
//! `{ id, name, nameBn, type, parentId?, coordinates: { lat, lng } }`.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { divisions, get_locations_by_parent, search_locations } from 'bdgeo-wasm';
//!
//! async function main() {
//!   await init();
//!   const divs = divisions();
//!   const districts = get_locations_by_parent(divs[0].id);
//!   console.log(search_locations('ঢাকা'));
//! }
//! main();
//! ```
use bdgeo_core::api::views;
use bdgeo_core::prelude::*;
use serde::Serialize;
use std::result::Result;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing bdgeo WASM module...".into());

    match DefaultLocationDb::load() {
        Ok(db) => {
            let stats = db.stats();
            web_sys::console::log_1(&format!("✓ Loaded {} locations", stats.total()).into());
        }
        Err(e) => {
            web_sys::console::error_1(&format!("bdgeo: failed to load directory: {e}").into());
        }
    }
}

fn db() -> Result<&'static DefaultLocationDb, JsError> {
    DefaultLocationDb::load().map_err(|e| JsError::new(&e.to_string()))
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    // Plain objects rather than Maps, so `loc.nameBn` works in JS.
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value
        .serialize(&serializer)
        .map_err(|e| JsError::new(&e.to_string()))
}

/* --------------------------------------------------------------------------
   Basic Queries
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn location_count() -> Result<usize, JsError> {
    Ok(db()?.len())
}

#[wasm_bindgen]
pub fn get_location_by_id(id: &str) -> Result<JsValue, JsError> {
    match db()?.get_location_by_id(id) {
        Some(loc) => to_js(&LocationView(loc)),
        None => Ok(JsValue::UNDEFINED),
    }
}

#[wasm_bindgen]
pub fn get_locations_by_parent(parent_id: &str) -> Result<JsValue, JsError> {
    to_js(&views(db()?.get_locations_by_parent(parent_id)))
}

#[wasm_bindgen]
pub fn get_location_path(id: &str) -> Result<JsValue, JsError> {
    to_js(&views(db()?.get_location_path(id)))
}

#[wasm_bindgen]
pub fn divisions() -> Result<JsValue, JsError> {
    to_js(&views(db()?.divisions()))
}

/* --------------------------------------------------------------------------
   Search
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn search_locations(query: &str, limit: Option<u32>) -> Result<JsValue, JsError> {
    let limit = limit.map_or(DEFAULT_SEARCH_LIMIT, |l| l as usize);
    to_js(&views(db()?.search_locations(query, limit)))
}

#[wasm_bindgen]
pub fn smart_search(query: &str) -> Result<JsValue, JsError> {
    let hits = db()?.smart_search(query);

    // Preserve ranking order in a plain JS array.
    let array = js_sys::Array::new();
    for hit in &hits {
        array.push(&to_js(&SearchHitView(hit))?);
    }
    Ok(array.into())
}

#[wasm_bindgen]
pub fn get_stats() -> Result<JsValue, JsError> {
    to_js(&StatsView::from(db()?.stats()))
}

#[wasm_bindgen]
pub fn display_path(id: &str, bangla: bool) -> Result<Option<String>, JsError> {
    let lang = if bangla {
        Language::Bangla
    } else {
        Language::English
    };
    Ok(db()?.display_path(id, lang))
}
