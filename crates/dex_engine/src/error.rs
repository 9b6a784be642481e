//! Error types.
//!
//! Two tiers: [`DexError`] aborts the run (a broken internal contract), while
//! [`Unmatched`] entries are collected into [`Diagnostics`] and reported once
//! the whole pipeline has produced its best-effort snapshot.

use crate::model::SpeciesKey;
use crate::moves::MoveCategory;
use serde::Serialize;

#[derive(thiserror::Error, Debug)]
pub enum DexError {
    #[error("field `{field}` is already populated on species {species}")]
    FieldCollision { species: SpeciesKey, field: String },
}

pub type Result<T> = std::result::Result<T, DexError>;

/// A source record that could not be attached to any species.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Unmatched {
    #[error("unmatched `{field}` data for key {key}")]
    Key { field: &'static str, key: String },

    #[error("evolution target {target} (from {}) is not in the pokedex", join_keys(.from))]
    EvolutionTarget {
        target: SpeciesKey,
        from: Vec<SpeciesKey>,
    },

    #[error("{category} compatibility fragment for slot {slot} has no base move")]
    MoveSlot { category: MoveCategory, slot: u16 },
}

fn join_keys(keys: &[SpeciesKey]) -> String {
    keys.iter().map(SpeciesKey::as_str).collect::<Vec<_>>().join(", ")
}

/// Unmatched-data accumulator scoped to one pipeline run.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    unmatched: Vec<Unmatched>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: Unmatched) {
        tracing::debug!("{}", entry);
        self.unmatched.push(entry);
    }

    pub fn len(&self) -> usize {
        self.unmatched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unmatched.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Unmatched> {
        self.unmatched.iter()
    }

    /// Unmatched keys reported for one field
    pub fn keys_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.unmatched.iter().filter_map(move |entry| match entry {
            Unmatched::Key { field: f, key } if *f == field => Some(key.as_str()),
            _ => None,
        })
    }
}
