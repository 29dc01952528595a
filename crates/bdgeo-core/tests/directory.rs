use bdgeo_core::prelude::*;

fn db() -> &'static DefaultLocationDb {
    DefaultLocationDb::load().expect("embedded dataset loads")
}

#[test]
fn every_id_resolves_to_itself() {
    for loc in db().locations() {
        let found = db().get_location_by_id(loc.id()).unwrap();
        assert_eq!(found.id(), loc.id());
    }
}

#[test]
fn every_leaf_path_ends_in_a_division() {
    let leaves = db()
        .locations()
        .iter()
        .filter(|l| db().get_locations_by_parent(l.id()).is_empty());

    let mut checked = 0;
    for leaf in leaves {
        let path = db().get_location_path(leaf.id());
        assert!(!path.is_empty());
        assert_eq!(path[0].id(), leaf.id());
        assert_eq!(path.last().unwrap().kind, LocationKind::Division);
        // Each step goes exactly one parent up.
        for pair in path.windows(2) {
            assert_eq!(pair[0].parent_id(), Some(pair[1].id()));
        }
        checked += 1;
    }
    assert!(checked > 60);
}

#[test]
fn path_of_division_is_itself() {
    let path = db().get_location_path("div-rangpur");
    assert_eq!(path.len(), 1);
    assert_eq!(path[0].id(), "div-rangpur");
}

#[test]
fn unknown_ids_are_misses() {
    assert!(db().get_location_by_id("nowhere").is_none());
    assert!(db().get_location_path("nowhere").is_empty());
    assert!(db().get_locations_by_parent("nowhere").is_empty());
    assert!(db().descendants("nowhere").is_empty());
}

#[test]
fn search_matches_both_scripts() {
    for query in ["dhaka", "DHAKA", "ঢাকা"] {
        let hits = db().search_locations(query, DEFAULT_SEARCH_LIMIT);
        let ids: Vec<&str> = hits.iter().map(|l| l.id()).collect();
        assert!(ids.contains(&"div-dhaka"), "{query}: {ids:?}");
        assert!(ids.contains(&"dis-dhaka"), "{query}: {ids:?}");
        assert!(ids.contains(&"area-old-dhaka"), "{query}: {ids:?}");
    }
}

#[test]
fn search_caps_at_limit_and_keeps_table_order() {
    let all = db().search_locations("a", usize::MAX);
    let capped = db().search_locations("a", DEFAULT_SEARCH_LIMIT);
    assert_eq!(capped.len(), DEFAULT_SEARCH_LIMIT);
    let prefix: Vec<&str> = all.iter().take(DEFAULT_SEARCH_LIMIT).map(|l| l.id()).collect();
    let got: Vec<&str> = capped.iter().map(|l| l.id()).collect();
    assert_eq!(got, prefix);
}

#[test]
fn children_point_back_at_parent() {
    for parent in db().locations() {
        for child in db().get_locations_by_parent(parent.id()) {
            assert_eq!(child.parent_id(), Some(parent.id()));
        }
    }
}

#[test]
fn areas_have_no_children() {
    for area in db()
        .locations()
        .iter()
        .filter(|l| l.kind == LocationKind::Area)
    {
        assert!(db().get_locations_by_parent(area.id()).is_empty());
    }
}

#[test]
fn every_division_has_districts() {
    let divisions = db().divisions();
    assert_eq!(divisions.len(), 8);
    let total: usize = divisions
        .iter()
        .map(|d| db().children_of_kind(d.id(), LocationKind::District).len())
        .sum();
    assert_eq!(total, 64);
}

#[test]
fn json_and_embedded_agree() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("copy.json");
    std::fs::write(&path, DefaultLocationDb::embedded_dataset()).unwrap();

    let from_file = DefaultLocationDb::load_from_path(&path).unwrap();
    assert_eq!(from_file.stats(), db().stats());
    assert_eq!(
        from_file.display_path("area-dhanmondi", Language::English),
        Some("Dhanmondi, Dhaka, Dhaka".to_string())
    );
}

#[test]
fn broken_hierarchy_is_rejected() {
    let json = r#"[
        {"id":"div-a","name":"A","nameBn":"এ","type":"division","coordinates":{"lat":23.0,"lng":90.0}},
        {"id":"area-x","name":"X","nameBn":"এক্স","type":"area","parentId":"div-a","coordinates":{"lat":23.1,"lng":90.1}}
    ]"#;
    let err = DefaultLocationDb::from_json_str(json).unwrap_err();
    assert!(matches!(err, LocationError::InvalidParent { ref id, .. } if id == "area-x"));
}
