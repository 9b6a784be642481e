//! Loads a miniature source tree in the default layout and runs it through
//! the pipeline.

use dex_engine::{MoveCategory, Pipeline, Scalar};
use dex_sources::{load_bundle, SourceError, SourceLayout};
use std::fs;
use std::path::Path;

fn write(root: &Path, relative: &Path, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn source_tree(root: &Path) {
    let layout = SourceLayout::default();
    write(
        root,
        &layout.dex_table,
        "\
[SPECIES_BULBASAUR - 1] = NATIONAL_DEX_BULBASAUR,
[SPECIES_IVYSAUR - 1] = NATIONAL_DEX_IVYSAUR,
[SPECIES_ROTOM - 1] = NATIONAL_DEX_ROTOM,
[SPECIES_ROTOM_FROST - 1] = NATIONAL_DEX_ROTOM,
",
    );
    write(
        root,
        &layout.base_stats,
        "\
[SPECIES_BULBASAUR] =
{
    .baseHP = 45,
    .type1 = TYPE_GRASS,
    .type2 = TYPE_POISON,
    .genderRatio = PERCENT_FEMALE(12.5),
},
[SPECIES_IVYSAUR] =
{
    .baseHP = 60,
    .type1 = TYPE_GRASS,
    .type2 = TYPE_POISON,
},
[SPECIES_ROTOM] =
{
    .type1 = TYPE_ELECTRIC,
    .type2 = TYPE_GHOST,
},
[SPECIES_ROTOM_FROST] =
{
    .type1 = TYPE_ELECTRIC,
    .type2 = TYPE_ICE,
},
",
    );
    write(
        root,
        &layout.egg_moves,
        "\
const u16 gEggMoves[] =
{
    egg_moves(BULBASAUR,
        MOVE_SKULLBASH),
    EGG_MOVES_TERMINATOR
};
",
    );
    write(
        root,
        &layout.evolutions,
        "[SPECIES_BULBASAUR] = {{EVO_LEVEL, 16, SPECIES_IVYSAUR, 0}},\n",
    );
    write(
        root,
        &layout.learnsets,
        "\
static const struct LevelUpMove sBulbasaurLevelUpLearnset[] = {
    LEVEL_UP_MOVE( 1, MOVE_TACKLE),
    LEVEL_UP_END
};
static const struct LevelUpMove sRotomLevelUpLearnset[] = {
    LEVEL_UP_MOVE( 1, MOVE_THUNDERSHOCK),
    LEVEL_UP_END
};
const struct LevelUpMove* const gLevelUpLearnsets[NUM_SPECIES] =
{
    [SPECIES_BULBASAUR] = sBulbasaurLevelUpLearnset,
    [SPECIES_IVYSAUR] = sBulbasaurLevelUpLearnset,
    [SPECIES_ROTOM] = sRotomLevelUpLearnset,
};
",
    );
    write(
        root,
        &layout.tm_tutor,
        "\
const u16 gTMHMMoves[] =
{
    MOVE_THUNDERBOLT, //24
};
const u16 gMoveTutorMoves[] =
{
    MOVE_SWORDSDANCE, //1
};
",
    );
    write(
        root,
        &layout.tm_compatibility.join("24 - Thunderbolt.txt"),
        "TM24: Thunderbolt\nROTOM\n",
    );
    write(
        root,
        &layout.tutor_compatibility.join("1 - Swords Dance.txt"),
        "Tutor01: Swords Dance\nBULBASAUR\n",
    );
    write(
        root,
        &layout.blurbs,
        "#org @DEX_ENTRY_BULBASAUR\nA strange seed\\nwas planted.\n",
    );
    write(
        root,
        &layout.names,
        "\
#org @NAME_BULBASAUR
Bulbasaur
#org @NAME_IVYSAUR
Ivysaur
#org @NAME_ROTOM
Rotom
#org @NAME_ROTOMFR
Frost Rotom
",
    );
    write(root, &layout.land_encounters, "Route 1\nBulbasaur\n");
    write(root, &layout.water_encounters, "Water\n\nRoute 1\nFrost Rotom\n");
}

#[test]
fn test_default_layout_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    source_tree(dir.path());

    let bundle = load_bundle(dir.path(), &SourceLayout::default()).unwrap();
    assert_eq!(bundle.outline["ROTOM"].len(), 2);
    assert_eq!(bundle.base_stats["BULBASAUR"]["genderRatio"], Scalar::Float(12.5));
    assert_eq!(bundle.compatibility[&MoveCategory::Tm][&24].compatibility.len(), 1);

    let snapshot = Pipeline::default().run(bundle).unwrap();
    let dex = &snapshot.pokedex;

    assert_eq!(dex.len(), 4);
    assert_eq!(dex.get("IVYSAUR").unwrap().evolve_from[0].as_str(), "BULBASAUR");
    assert_eq!(dex.get("ROTOM_FROST").unwrap().name.as_deref(), Some("Frost Rotom"));
    assert_eq!(
        dex.get("BULBASAUR").unwrap().blurb.as_deref(),
        Some("A strange seed was planted.")
    );
    assert!(dex.get("ROTOM_FROST").unwrap().learnset.is_some());
    assert_eq!(dex.get("ROTOM_FROST").unwrap().tm, Some(vec!["MOVE_THUNDERBOLT".to_string()]));
    assert_eq!(dex.get("BULBASAUR").unwrap().tutor, Some(vec!["MOVE_SWORDSDANCE".to_string()]));

    let frost = dex.get("ROTOM_FROST").unwrap().location.as_ref().unwrap();
    assert_eq!(frost[0].method, "surf");
    assert_eq!(dex.get("BULBASAUR").unwrap().location.as_ref().unwrap()[0].method, "land");

    assert!(snapshot.diagnostics.is_empty(), "{:?}", snapshot.diagnostics);
}

#[test]
fn test_missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_bundle(dir.path(), &SourceLayout::default()).unwrap_err();
    match err {
        SourceError::Io { path, .. } => assert!(path.ends_with("Species_To_Pokdex_Table.c")),
        other => panic!("unexpected error: {other}"),
    }
}
