//! The canonical record set.
//!
//! Seeded once from the dex outline: every species token that maps to a
//! national dex entry gets an empty record, and the dex grouping is kept as a
//! side index so merges can fall back to a group key.

use crate::model::{SpeciesKey, SpeciesRecord};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Dex token -> species tokens covered by that entry, in source order.
pub type DexOutline = IndexMap<String, Vec<SpeciesKey>>;

#[derive(Clone, Debug, Default)]
pub struct Pokedex {
    pub(crate) records: IndexMap<SpeciesKey, SpeciesRecord>,
    pub(crate) dex_of: HashMap<SpeciesKey, String>,
    pub(crate) groups: IndexMap<String, Vec<SpeciesKey>>,
}

impl Pokedex {
    /// One empty record per species in the outline.
    ///
    /// A species listed under two dex entries stays with the first one.
    pub fn from_outline(outline: &DexOutline) -> Self {
        let mut dex = Pokedex::default();
        for (dex_token, members) in outline {
            for species in members {
                if dex.records.contains_key(species) {
                    tracing::debug!("{} already seeded, ignoring dex entry {}", species, dex_token);
                    continue;
                }
                dex.records.insert(species.clone(), SpeciesRecord::default());
                dex.dex_of.insert(species.clone(), dex_token.clone());
                dex.groups
                    .entry(dex_token.clone())
                    .or_default()
                    .push(species.clone());
            }
        }
        dex
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, species: &str) -> bool {
        self.records.contains_key(species)
    }

    pub fn get(&self, species: &str) -> Option<&SpeciesRecord> {
        self.records.get(species)
    }

    pub fn get_mut(&mut self, species: &str) -> Option<&mut SpeciesRecord> {
        self.records.get_mut(species)
    }

    /// Resolve a borrowed key to the stored one.
    pub fn key(&self, species: &str) -> Option<&SpeciesKey> {
        self.records.get_key_value(species).map(|(k, _)| k)
    }

    pub fn keys(&self) -> impl Iterator<Item = &SpeciesKey> {
        self.records.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SpeciesKey, &SpeciesRecord)> {
        self.records.iter()
    }

    /// Dex token the species was seeded under
    pub fn dex_of(&self, species: &str) -> Option<&str> {
        self.dex_of.get(species).map(String::as_str)
    }

    pub fn group(&self, dex_token: &str) -> Option<&[SpeciesKey]> {
        self.groups.get(dex_token).map(Vec::as_slice)
    }
}
