//! TM/tutor compatibility tables and the learned-move index.

use crate::error::{Diagnostics, Unmatched};
use crate::model::{Field, Learnset, SpeciesKey};
use crate::pokedex::Pokedex;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveCategory {
    Tm,
    Tutor,
}

impl MoveCategory {
    pub const ALL: [MoveCategory; 2] = [MoveCategory::Tm, MoveCategory::Tutor];

    pub fn as_str(self) -> &'static str {
        match self {
            MoveCategory::Tm => "tm",
            MoveCategory::Tutor => "tutor",
        }
    }
}

impl fmt::Display for MoveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One numbered TM or tutor slot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveSlot {
    /// Move token, e.g. `MOVE_FOCUS_PUNCH`
    pub key: String,
    /// Label from the compatibility fragment header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub compatibility: Vec<SpeciesKey>,
}

/// Per-slot compatibility list read from one fragment file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityFragment {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub compatibility: Vec<SpeciesKey>,
}

/// Slot number -> slot, ordered by slot.
pub type SlotTable = BTreeMap<u16, MoveSlot>;

/// A species that learns a move by level-up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnedBy {
    pub target: SpeciesKey,
    pub level: u8,
}

/// Move token -> species learning it by level-up.
pub type LearnedIndex = IndexMap<String, Vec<LearnedBy>>;

/// The shared move table emitted next to the species records.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MoveTable {
    pub tm: SlotTable,
    pub tutor: SlotTable,
    pub learned: LearnedIndex,
}

impl MoveTable {
    /// Seed slots from the base slot -> move assignment.
    pub fn new(base: &BTreeMap<MoveCategory, BTreeMap<u16, String>>) -> Self {
        let mut table = MoveTable::default();
        for (category, slots) in base {
            let target = table.slots_mut(*category);
            for (slot, key) in slots {
                target.insert(
                    *slot,
                    MoveSlot {
                        key: key.clone(),
                        ..MoveSlot::default()
                    },
                );
            }
        }
        table
    }

    pub fn slots(&self, category: MoveCategory) -> &SlotTable {
        match category {
            MoveCategory::Tm => &self.tm,
            MoveCategory::Tutor => &self.tutor,
        }
    }

    pub fn slots_mut(&mut self, category: MoveCategory) -> &mut SlotTable {
        match category {
            MoveCategory::Tm => &mut self.tm,
            MoveCategory::Tutor => &mut self.tutor,
        }
    }

    /// Attach compatibility fragments to their base slots.
    ///
    /// Slots with no fragment keep an empty list. A fragment whose slot is
    /// not in the base table is reported.
    pub fn apply_fragments(
        &mut self,
        category: MoveCategory,
        fragments: BTreeMap<u16, CompatibilityFragment>,
        diag: &mut Diagnostics,
    ) -> usize {
        let slots = self.slots_mut(category);
        let mut applied = 0;
        for (slot, fragment) in fragments {
            match slots.get_mut(&slot) {
                Some(entry) => {
                    entry.name = fragment.name;
                    entry.compatibility = fragment.compatibility;
                    applied += 1;
                }
                None => diag.push(Unmatched::MoveSlot { category, slot }),
            }
        }
        tracing::info!("applied {} {} compatibility fragments", applied, category);
        applied
    }

    /// Invert one category into species -> move tokens, in slot order.
    ///
    /// Only species named by at least one slot appear.
    pub fn compatible_moves(&self, category: MoveCategory) -> IndexMap<String, Vec<String>> {
        let mut by_species: IndexMap<String, Vec<String>> = IndexMap::new();
        for slot in self.slots(category).values() {
            for species in &slot.compatibility {
                let moves = by_species.entry(species.to_string()).or_default();
                if !moves.contains(&slot.key) {
                    moves.push(slot.key.clone());
                }
            }
        }
        by_species
    }
}

/// Invert every record's learnset into move -> species/level.
pub fn learned_index(dex: &Pokedex) -> LearnedIndex {
    let mut index = LearnedIndex::new();
    for (species, record) in dex.iter() {
        for entry in Learnset::get(record).into_iter().flatten() {
            index.entry(entry.move_key.clone()).or_default().push(LearnedBy {
                target: species.clone(),
                level: entry.level,
            });
        }
    }
    index
}
