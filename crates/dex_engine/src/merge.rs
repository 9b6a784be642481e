//! Merge engine.
//!
//! Each source mapping is keyed either by species key or by dex token. A
//! species takes the value under its own key if there is one. Otherwise it
//! takes the value under its dex group's key, unless that key is itself a
//! species key (a base form's dex token usually is). Keys that no species consumed are pushed
//! onto [`Diagnostics`] so one run reports every mismatch.
//!
//! Merges never overwrite: finding the target slot already populated is a
//! [`DexError::FieldCollision`].

use crate::error::{DexError, Diagnostics, Result, Unmatched};
use crate::model::{Field, Scalar};
use crate::normalize::Normalizer;
use crate::pokedex::Pokedex;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Attribute name -> value for one species.
pub type AttributeTable = IndexMap<String, Scalar>;

/// Index into `mapping` of the value each record takes, in record order.
///
/// A key that is some species' own key belongs to that species alone. Only
/// keys naming no species act as dex group keys.
fn assign<V>(dex: &Pokedex, mapping: &IndexMap<String, V>) -> Vec<Option<usize>> {
    dex.records
        .keys()
        .map(|species| {
            mapping.get_index_of(species.as_str()).or_else(|| {
                let group = dex.dex_of.get(species)?;
                if dex.records.contains_key(group.as_str()) {
                    return None;
                }
                mapping.get_index_of(group.as_str())
            })
        })
        .collect()
}

fn unused_keys<V>(mapping: IndexMap<String, V>, used: &[bool]) -> Vec<String> {
    mapping
        .into_iter()
        .zip(used.iter())
        .filter(|(_, used)| !**used)
        .map(|((key, _), _)| key)
        .collect()
}

/// Attach each mapped value to field `F` of the matching species.
///
/// Returns the number of records populated.
pub fn merge<F: Field>(
    dex: &mut Pokedex,
    mapping: IndexMap<String, F::Value>,
    diag: &mut Diagnostics,
) -> Result<usize> {
    let mut used = vec![false; mapping.len()];
    let mut merged = 0;

    let picks = assign(dex, &mapping);
    for ((species, record), pick) in dex.records.iter_mut().zip(picks) {
        let Some(idx) = pick else {
            continue;
        };
        let slot = F::slot(record);
        if slot.is_some() {
            return Err(DexError::FieldCollision {
                species: species.clone(),
                field: F::NAME.to_string(),
            });
        }
        *slot = Some(mapping[idx].clone());
        used[idx] = true;
        merged += 1;
    }

    let before = diag.len();
    for key in unused_keys(mapping, &used) {
        diag.push(Unmatched::Key { field: F::NAME, key });
    }
    tracing::info!(
        "merged `{}` into {} species ({} unmatched)",
        F::NAME,
        merged,
        diag.len() - before
    );
    Ok(merged)
}

/// Re-key a display-keyed text table by species, then merge it into `F`.
///
/// Table keys no species' display key consumed keep their raw key, so they
/// still get an exact/dex-group attempt before being reported.
pub fn merge_text<F: Field<Value = String>>(
    dex: &mut Pokedex,
    table: IndexMap<String, String>,
    normalizer: &Normalizer,
    diag: &mut Diagnostics,
) -> Result<usize> {
    let mut rekeyed: IndexMap<String, String> = IndexMap::with_capacity(table.len());
    let mut consumed: HashSet<String> = HashSet::new();

    for species in dex.keys() {
        let display = normalizer.display_key(species.as_str());
        if let Some(text) = table.get(&display) {
            rekeyed.insert(species.to_string(), text.clone());
            consumed.insert(display);
        }
    }
    for (raw, text) in table {
        if consumed.contains(&raw) {
            continue;
        }
        if rekeyed.contains_key(&raw) {
            // the species already took text through its display key
            diag.push(Unmatched::Key { field: F::NAME, key: raw });
            continue;
        }
        rekeyed.insert(raw, text);
    }

    merge::<F>(dex, rekeyed, diag)
}

/// Seed base-stat attributes (record-overwrite mode).
///
/// Attribute tables are folded into `attributes` instead of one named field.
/// Attribute names must not collide with ones already present.
///
/// Tokens with no dex-outline mapping are unused internal enum slots and are
/// dropped without a report.
pub fn seed_attributes(dex: &mut Pokedex, base_stats: IndexMap<String, AttributeTable>) -> Result<usize> {
    let (merged, dropped) = fold_attributes(dex, base_stats)?;
    for key in &dropped {
        tracing::debug!("no dex entry for {}, dropped", key);
    }
    tracing::info!("seeded attributes for {} species ({} tokens dropped)", merged, dropped.len());
    Ok(merged)
}

fn fold_attributes(
    dex: &mut Pokedex,
    mapping: IndexMap<String, AttributeTable>,
) -> Result<(usize, Vec<String>)> {
    let mut used = vec![false; mapping.len()];
    let mut merged = 0;

    let picks = assign(dex, &mapping);
    for ((species, record), pick) in dex.records.iter_mut().zip(picks) {
        let Some(idx) = pick else {
            continue;
        };
        for (name, value) in &mapping[idx] {
            if record.attributes.contains_key(name) {
                return Err(DexError::FieldCollision {
                    species: species.clone(),
                    field: name.clone(),
                });
            }
            record.attributes.insert(name.clone(), value.clone());
        }
        used[idx] = true;
        merged += 1;
    }

    let unmatched = unused_keys(mapping, &used);
    Ok((merged, unmatched))
}
