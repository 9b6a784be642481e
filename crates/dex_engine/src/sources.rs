//! Raw inputs handed over by the extractors.

use crate::locations::RouteTable;
use crate::merge::AttributeTable;
use crate::model::{Evolution, LevelUpMove};
use crate::moves::{CompatibilityFragment, MoveCategory};
use crate::pokedex::DexOutline;
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Everything one pipeline run consumes, keyed the way each source keys it.
///
/// Mapping keys are species keys or dex tokens; text tables are keyed by
/// display key.
#[derive(Clone, Debug, Default)]
pub struct SourceBundle {
    pub outline: DexOutline,
    pub base_stats: IndexMap<String, AttributeTable>,
    pub egg_moves: IndexMap<String, Vec<String>>,
    pub evolutions: IndexMap<String, Vec<Evolution>>,
    pub learnsets: IndexMap<String, Vec<LevelUpMove>>,
    /// Category -> slot -> move token
    pub move_slots: BTreeMap<MoveCategory, BTreeMap<u16, String>>,
    /// Category -> slot -> compatibility fragment
    pub compatibility: BTreeMap<MoveCategory, BTreeMap<u16, CompatibilityFragment>>,
    pub blurbs: IndexMap<String, String>,
    pub names: IndexMap<String, String>,
    pub routes: RouteTable,
}
