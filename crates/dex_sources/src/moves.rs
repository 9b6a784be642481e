//! Move tables: TM/tutor slots, compatibility fragments, level-up learnsets.

use crate::error::Result;
use crate::helpers::read_source;
use dex_engine::moves::CompatibilityFragment;
use dex_engine::{LevelUpMove, MoveCategory, SpeciesKey};
use indexmap::IndexMap;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::LazyLock;
use walkdir::WalkDir;

static SLOT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(MOVE_\w+),\s*//(\d+)").unwrap());

static LEARNSET_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^static const struct LevelUpMove (s\w+LevelUpLearnset)\[\] = \{").unwrap());

static LEVEL_UP_MOVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^LEVEL_UP_MOVE\(\s*(\d+),\s*(MOVE_\w+)\s*\)").unwrap());

static POINTER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\[SPECIES_(\w+)\] = (\w+),").unwrap());

const POINTER_TABLE: &str = "const struct LevelUpMove* const gLevelUpLearnsets";

/// `MOVE_X, //N` lines under `gTMHMMoves` and `gMoveTutorMoves`.
pub fn parse_move_slots(text: &str) -> BTreeMap<MoveCategory, BTreeMap<u16, String>> {
    let mut slots: BTreeMap<MoveCategory, BTreeMap<u16, String>> = BTreeMap::new();
    let mut category = None;

    for line in text.lines() {
        if line.contains("gTMHMMoves") {
            category = Some(MoveCategory::Tm);
            slots.entry(MoveCategory::Tm).or_default();
            continue;
        }
        if line.contains("gMoveTutorMoves") {
            category = Some(MoveCategory::Tutor);
            slots.entry(MoveCategory::Tutor).or_default();
            continue;
        }
        let (Some(category), Some(caps)) = (category, SLOT_RE.captures(line)) else {
            continue;
        };
        if let Ok(slot) = caps[2].parse::<u16>() {
            slots.entry(category).or_default().insert(slot, caps[1].to_string());
        }
    }
    slots
}

/// Level-up learnsets joined to species through the `gLevelUpLearnsets`
/// pointer table.
///
/// Pointers to learnsets that were never defined are dropped.
pub fn parse_learnsets(text: &str) -> IndexMap<String, Vec<LevelUpMove>> {
    let mut learnsets: HashMap<String, Vec<LevelUpMove>> = HashMap::new();
    let mut pointers: Vec<(String, String)> = Vec::new();
    let mut current: Option<(String, Vec<LevelUpMove>)> = None;
    let mut in_pointer_table = false;

    for line in text.lines().map(str::trim) {
        if let Some(caps) = LEARNSET_OPEN_RE.captures(line) {
            current = Some((caps[1].to_string(), Vec::new()));
            continue;
        }
        if let Some(caps) = LEVEL_UP_MOVE_RE.captures(line) {
            if let (Some((_, moves)), Ok(level)) = (current.as_mut(), caps[1].parse()) {
                moves.push(LevelUpMove::new(level, &caps[2]));
            }
            continue;
        }
        if line == "LEVEL_UP_END" {
            if let Some((name, moves)) = current.take() {
                learnsets.insert(name, moves);
            }
            continue;
        }
        if line.starts_with(POINTER_TABLE) {
            in_pointer_table = true;
            continue;
        }
        if in_pointer_table {
            if let Some(caps) = POINTER_RE.captures(line) {
                pointers.push((caps[1].to_string(), caps[2].to_string()));
            }
        }
    }

    let mut by_species = IndexMap::new();
    for (species, name) in pointers {
        match learnsets.get(&name) {
            Some(moves) => {
                by_species.insert(species, moves.clone());
            }
            None => tracing::debug!("{} points at undefined learnset {}", species, name),
        }
    }
    by_species
}

/// One `N - Name.txt` compatibility file.
///
/// The first non-blank line is `Label: Name`; the remaining non-blank lines
/// are species tokens.
pub fn parse_fragment(text: &str) -> CompatibilityFragment {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());
    let name = lines
        .next()
        .map(|header| header.split_once(": ").map_or(header, |(_, name)| name).to_string());
    CompatibilityFragment {
        name,
        compatibility: lines.map(SpeciesKey::from_token).collect(),
    }
}

/// Slot number from a fragment file name (`12 - Dragon Claw.txt` -> 12).
pub fn fragment_slot(file_name: &str) -> Option<u16> {
    file_name.split(" - ").next()?.trim().parse().ok()
}

/// Read every `.txt` fragment under `dir`, keyed by slot.
///
/// Files whose name carries no slot number are skipped.
pub fn load_fragments(dir: &Path) -> Result<BTreeMap<u16, CompatibilityFragment>> {
    let mut fragments = BTreeMap::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy();
        let Some(slot) = fragment_slot(&file_name) else {
            tracing::warn!("no slot number in {}, skipped", path.display());
            continue;
        };
        fragments.insert(slot, parse_fragment(&read_source(path)?));
    }
    tracing::debug!("loaded {} fragments from {}", fragments.len(), dir.display());
    Ok(fragments)
}
