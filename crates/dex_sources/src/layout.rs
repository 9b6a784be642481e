//! Where each input lives, relative to the source root.

use crate::error::{Result, SourceError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Relative paths of every input file.
///
/// A layout file only needs the entries it changes; the rest keep their
/// defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceLayout {
    pub base_stats: PathBuf,
    pub dex_table: PathBuf,
    pub egg_moves: PathBuf,
    pub evolutions: PathBuf,
    pub learnsets: PathBuf,
    pub tm_tutor: PathBuf,
    pub tm_compatibility: PathBuf,
    pub tutor_compatibility: PathBuf,
    pub blurbs: PathBuf,
    pub names: PathBuf,
    pub land_encounters: PathBuf,
    pub water_encounters: PathBuf,
}

impl Default for SourceLayout {
    fn default() -> Self {
        Self {
            base_stats: "c/src/Base_Stats.c".into(),
            dex_table: "c/src/Species_To_Pokdex_Table.c".into(),
            egg_moves: "c/src/Egg_Moves.c".into(),
            evolutions: "c/src/Evolution Table.c".into(),
            learnsets: "c/src/Learnsets.c".into(),
            tm_tutor: "c/src/TM_Tutor_Tables.c".into(),
            tm_compatibility: "c/src/tm_compatibility".into(),
            tutor_compatibility: "c/src/tutor_compatibility".into(),
            blurbs: "c/strings/Pokedex_Data.string".into(),
            names: "c/strings/Pokemon_Name_Table.string".into(),
            land_encounters: "csv/Pokémon Unbound Location Guide v2.1.1.1 - Grass & Cave Encounters.csv"
                .into(),
            water_encounters:
                "csv/Pokémon Unbound Location Guide v2.1.1.1 - Surfing, Fishing, Rock Smash.csv".into(),
        }
    }
}

impl SourceLayout {
    /// Load a layout override from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| SourceError::Layout {
            path: path.to_path_buf(),
            source,
        })
    }
}
