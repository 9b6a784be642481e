//! Full pipeline runs over small in-memory bundles.

use dex_engine::catalog::CatalogField;
use dex_engine::merge::AttributeTable;
use dex_engine::moves::CompatibilityFragment;
use dex_engine::{
    Evolution, LevelUpMove, MoveCategory, Pipeline, Scalar, SourceBundle, SpeciesKey, Unmatched,
};
use indexmap::IndexMap;
use std::collections::BTreeMap;

fn key(s: &str) -> SpeciesKey {
    SpeciesKey::from(s)
}

fn stats(type1: &str, type2: &str) -> AttributeTable {
    let mut table = AttributeTable::new();
    table.insert("baseHP".into(), Scalar::Int(45));
    table.insert("type1".into(), Scalar::from(type1));
    table.insert("type2".into(), Scalar::from(type2));
    table.insert("item1".into(), Scalar::from("ITEM_NONE"));
    table
}

fn starter_bundle() -> SourceBundle {
    let mut bundle = SourceBundle::default();
    bundle.outline.insert("NATIONAL_DEX_BULBASAUR".into(), vec![key("BULBASAUR")]);
    bundle.outline.insert("NATIONAL_DEX_IVYSAUR".into(), vec![key("IVYSAUR")]);

    bundle.base_stats.insert("BULBASAUR".into(), stats("TYPE_GRASS", "TYPE_POISON"));
    bundle.base_stats.insert("IVYSAUR".into(), stats("TYPE_GRASS", "TYPE_POISON"));
    bundle.base_stats.insert("EGG".into(), AttributeTable::new());

    bundle.evolutions.insert(
        "BULBASAUR".into(),
        vec![Evolution {
            method: "LEVEL".into(),
            condition: Scalar::Int(16),
            target: key("IVYSAUR"),
            extra: None,
        }],
    );
    bundle.learnsets.insert(
        "BULBASAUR".into(),
        vec![LevelUpMove::new(1, "MOVE_TACKLE"), LevelUpMove::new(3, "MOVE_GROWL")],
    );
    bundle.learnsets.insert("IVYSAUR".into(), vec![LevelUpMove::new(1, "MOVE_TACKLE")]);
    bundle.names.insert("BULBASAUR".into(), "Bulbasaur".into());
    bundle.names.insert("IVYSAUR".into(), "Ivysaur".into());
    bundle
}

#[test]
fn test_bulbasaur_evolves_into_ivysaur() {
    let snapshot = Pipeline::default().run(starter_bundle()).unwrap();
    let dex = &snapshot.pokedex;

    let bulbasaur = dex.get("BULBASAUR").unwrap();
    assert_eq!(
        bulbasaur.evolve_to,
        Some(vec![Evolution {
            method: "LEVEL".into(),
            condition: Scalar::Int(16),
            target: key("IVYSAUR"),
            extra: None,
        }])
    );
    assert!(bulbasaur.evolve_from.is_empty());
    assert_eq!(dex.get("IVYSAUR").unwrap().evolve_from, vec![key("BULBASAUR")]);
    assert!(snapshot.diagnostics.is_empty());
}

#[test]
fn test_snapshot_tables() {
    let snapshot = Pipeline::default().run(starter_bundle()).unwrap();

    let tackle = &snapshot.moves.learned["MOVE_TACKLE"];
    assert_eq!(tackle.len(), 2);
    assert_eq!(snapshot.moves.learned["MOVE_GROWL"][0].level, 3);

    let grass = snapshot.catalog.holders(CatalogField::Type, "TYPE_GRASS");
    assert_eq!(grass, &[key("BULBASAUR"), key("IVYSAUR")]);
    assert!(snapshot.catalog.category(CatalogField::Item).is_empty());

    let json = serde_json::to_value(snapshot.pokedex.get("IVYSAUR").unwrap()).unwrap();
    assert_eq!(json["name"], "Ivysaur");
    assert_eq!(json["evolve_from"], serde_json::json!(["BULBASAUR"]));
    assert_eq!(json["baseHP"], 45);
}

#[test]
fn test_forms_inherit_moves_and_locations_resolve() {
    let mut bundle = SourceBundle::default();
    bundle
        .outline
        .insert("NATIONAL_DEX_ROTOM".into(), vec![key("ROTOM"), key("ROTOM_WASH")]);
    bundle.outline.insert("NATIONAL_DEX_PIDGEY".into(), vec![key("PIDGEY")]);

    bundle.learnsets.insert("ROTOM".into(), vec![LevelUpMove::new(1, "MOVE_THUNDER_SHOCK")]);

    let mut tm = BTreeMap::new();
    tm.insert(24, "MOVE_THUNDERBOLT".to_string());
    tm.insert(25, "MOVE_THUNDER".to_string());
    bundle.move_slots.insert(MoveCategory::Tm, tm);
    let mut fragments = BTreeMap::new();
    fragments.insert(
        24,
        CompatibilityFragment {
            name: Some("Thunderbolt".into()),
            compatibility: vec![key("ROTOM")],
        },
    );
    fragments.insert(
        99,
        CompatibilityFragment {
            name: None,
            compatibility: vec![key("PIDGEY")],
        },
    );
    bundle.compatibility.insert(MoveCategory::Tm, fragments);

    bundle.names.insert("ROTOM".into(), "Rotom".into());
    bundle.names.insert("ROTOMW".into(), "Wash Rotom".into());
    bundle.names.insert("PIDGEY".into(), "Pidgey".into());

    let mut areas = IndexMap::new();
    areas.insert(String::new(), vec!["Pidgey".to_string(), "Missingno".to_string()]);
    let mut methods = IndexMap::new();
    methods.insert("land".to_string(), areas);
    bundle.routes.insert("Route 1".into(), methods);

    let snapshot = Pipeline::default().run(bundle).unwrap();
    let dex = &snapshot.pokedex;

    assert_eq!(dex.get("ROTOM_WASH").unwrap().name.as_deref(), Some("Wash Rotom"));
    assert_eq!(
        dex.get("ROTOM_WASH").unwrap().learnset,
        Some(vec![LevelUpMove::new(1, "MOVE_THUNDER_SHOCK")])
    );
    assert_eq!(dex.get("ROTOM_WASH").unwrap().tm, Some(vec!["MOVE_THUNDERBOLT".to_string()]));
    assert!(snapshot.moves.tm[&25].compatibility.is_empty());

    let pidgey = dex.get("PIDGEY").unwrap().location.as_ref().unwrap();
    assert_eq!(pidgey[0].route, "Route 1");
    assert_eq!(pidgey[0].method, "land");
    assert!(snapshot.locations.contains_key("Missingno"));

    let report: Vec<&Unmatched> = snapshot.diagnostics.iter().collect();
    assert!(report.contains(&&Unmatched::MoveSlot { category: MoveCategory::Tm, slot: 99 }));
    assert_eq!(snapshot.diagnostics.keys_for("location").collect::<Vec<_>>(), vec!["Missingno"]);
}

#[test]
fn test_dex_group_keys_and_unmatched_report() {
    let mut bundle = starter_bundle();
    bundle.egg_moves.insert("NATIONAL_DEX_BULBASAUR".into(), vec!["MOVE_SKULL_BASH".into()]);
    bundle.egg_moves.insert("MISSINGNO".into(), vec!["MOVE_WATER_GUN".into()]);
    bundle.blurbs.insert("IVYSAUR".into(), "When the bulb on its back grows large...".into());
    bundle.blurbs.insert("GLITCH".into(), "???".into());

    let snapshot = Pipeline::default().run(bundle).unwrap();
    let dex = &snapshot.pokedex;
    assert_eq!(
        dex.get("BULBASAUR").unwrap().egg_moves,
        Some(vec!["MOVE_SKULL_BASH".to_string()])
    );
    assert_eq!(dex.get("IVYSAUR").unwrap().egg_moves, None);
    assert!(dex.get("IVYSAUR").unwrap().blurb.is_some());

    let diag = &snapshot.diagnostics;
    assert_eq!(diag.len(), 2);
    assert_eq!(diag.keys_for("egg_moves").collect::<Vec<_>>(), vec!["MISSINGNO"]);
    assert_eq!(diag.keys_for("blurb").collect::<Vec<_>>(), vec!["GLITCH"]);
}

#[test]
fn test_base_form_rows_stay_off_its_alternate_forms() {
    let mut bundle = SourceBundle::default();
    bundle
        .outline
        .insert("CHARIZARD".into(), vec![key("CHARIZARD"), key("CHARIZARD_MEGA_X")]);
    bundle.outline.insert("RATTATA".into(), vec![key("RATTATA"), key("RATTATA_A")]);
    bundle.evolutions.insert(
        "CHARIZARD".into(),
        vec![Evolution {
            method: "MEGA".into(),
            condition: Scalar::from("ITEM_CHARIZARDITE_X"),
            target: key("CHARIZARD_MEGA_X"),
            extra: None,
        }],
    );
    bundle.names.insert("RATTATA".into(), "Rattata".into());

    let mut areas = IndexMap::new();
    areas.insert(String::new(), vec!["Rattata".to_string()]);
    let mut methods = IndexMap::new();
    methods.insert("land".to_string(), areas);
    bundle.routes.insert("Route 2".into(), methods);

    let snapshot = Pipeline::default().run(bundle).unwrap();
    let dex = &snapshot.pokedex;

    let mega = dex.get("CHARIZARD_MEGA_X").unwrap();
    assert_eq!(mega.evolve_to, None);
    assert_eq!(mega.evolve_from, vec![key("CHARIZARD")]);
    assert!(dex.get("CHARIZARD").unwrap().evolve_from.is_empty());

    assert_eq!(dex.get("RATTATA").unwrap().location.as_ref().unwrap()[0].route, "Route 2");
    assert_eq!(dex.get("RATTATA_A").unwrap().location, None);
    assert_eq!(dex.get("RATTATA_A").unwrap().name, None);
    assert!(snapshot.diagnostics.is_empty(), "{:?}", snapshot.diagnostics);
}
