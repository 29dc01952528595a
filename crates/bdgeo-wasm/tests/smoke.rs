#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

// Import the wasm functions from this crate
use bdgeo_wasm::{
    display_path, divisions, get_location_by_id, get_location_path, get_locations_by_parent,
    get_stats, location_count, search_locations, smart_search,
};
use js_sys::{Array, Reflect};
use wasm_bindgen::JsValue;

fn field(obj: &JsValue, key: &str) -> JsValue {
    Reflect::get(obj, &JsValue::from_str(key)).unwrap()
}

#[wasm_bindgen_test]
fn can_count_locations() {
    #[cfg(target_arch = "wasm32")]
    bdgeo_wasm::start();

    let count = location_count().unwrap();
    assert!(count > 0, "expected at least one location, got {count}");
}

#[wasm_bindgen_test]
fn unknown_id_is_undefined() {
    let v = get_location_by_id("nowhere").unwrap();
    assert!(v.is_undefined());
}

#[wasm_bindgen_test]
fn bangla_search_returns_array() {
    let v = search_locations("ঢাকা", None).unwrap();
    assert!(js_sys::Array::is_array(&v));
    assert!(js_sys::Array::from(&v).length() >= 2);
}

#[wasm_bindgen_test]
fn breadcrumb_in_english() {
    let line = display_path("area-dhanmondi", false).unwrap();
    assert_eq!(line.as_deref(), Some("Dhanmondi, Dhaka, Dhaka"));
}

#[wasm_bindgen_test]
fn path_ends_in_a_division() {
    let path = Array::from(&get_location_path("area-tongi").unwrap());
    assert_eq!(path.length(), 4);
    assert_eq!(field(&path.get(0), "id").as_string().as_deref(), Some("area-tongi"));
    let last = path.get(path.length() - 1);
    assert_eq!(field(&last, "type").as_string().as_deref(), Some("division"));
    assert!(field(&last, "parentId").is_undefined());

    let empty = Array::from(&get_location_path("nowhere").unwrap());
    assert_eq!(empty.length(), 0);
}

#[wasm_bindgen_test]
fn children_carry_parent_id() {
    let kids = Array::from(&get_locations_by_parent("dis-gazipur").unwrap());
    assert_eq!(kids.length(), 5);
    for kid in kids.iter() {
        assert_eq!(
            field(&kid, "parentId").as_string().as_deref(),
            Some("dis-gazipur")
        );
        assert!(field(&kid, "nameBn").as_string().is_some());
        let coords = field(&kid, "coordinates");
        assert!(field(&coords, "lat").as_f64().is_some());
    }
}

#[wasm_bindgen_test]
fn divisions_are_all_top_level() {
    let divs = Array::from(&divisions().unwrap());
    assert_eq!(divs.length(), 8);
    assert!(divs
        .iter()
        .all(|d| field(&d, "type").as_string().as_deref() == Some("division")));
}

#[wasm_bindgen_test]
fn smart_search_hits_nest_location() {
    let hits = Array::from(&smart_search("dhaka").unwrap());
    assert!(hits.length() >= 3);
    let first = hits.get(0);
    assert_eq!(field(&first, "score").as_f64(), Some(90.0));
    let loc = field(&first, "location");
    assert_eq!(field(&loc, "id").as_string().as_deref(), Some("div-dhaka"));
}

#[wasm_bindgen_test]
fn stats_add_up() {
    let stats = get_stats().unwrap();
    let count = |k: &str| field(&stats, k).as_f64().unwrap();
    assert_eq!(count("divisions"), 8.0);
    assert_eq!(count("districts"), 64.0);
    assert_eq!(
        count("total"),
        count("divisions") + count("districts") + count("upazilas") + count("areas")
    );
}
