//! Relational enrichment over the merged record set.
//!
//! Both passes need every source merged first: evolution back-references
//! read every record's `evolve_to`, and fallback propagation reads every
//! relative's populated fields.

use crate::error::{Diagnostics, Unmatched};
use crate::model::{Field, Populated, SpeciesKey};
use crate::normalize::relative_probes;
use crate::pokedex::Pokedex;
use indexmap::IndexMap;

/// Fill every record's `evolve_from` from the other records' `evolve_to`.
///
/// Builds the forward adjacency once and inverts it. A source appears at most
/// once per target even when it has several edges to it. Edges to species
/// outside the pokedex are reported.
pub fn link_evolutions(dex: &mut Pokedex, diag: &mut Diagnostics) -> usize {
    let mut incoming: IndexMap<SpeciesKey, Vec<SpeciesKey>> = IndexMap::new();
    for (from, record) in dex.iter() {
        for evo in record.evolve_to.iter().flatten() {
            let sources = incoming.entry(evo.target.clone()).or_default();
            if !sources.contains(from) {
                sources.push(from.clone());
            }
        }
    }

    let mut linked = 0;
    for (target, sources) in incoming {
        match dex.get_mut(target.as_str()) {
            Some(record) => {
                for source in sources {
                    if !record.evolve_from.contains(&source) {
                        record.evolve_from.push(source);
                        linked += 1;
                    }
                }
            }
            None => diag.push(Unmatched::EvolutionTarget { target, from: sources }),
        }
    }
    tracing::info!("linked {} evolution back-references", linked);
    linked
}

/// First populated value of `F` among `species`' relatives.
///
/// Probes come from [`relative_probes`]; within a probe, relatives are tried
/// in record order.
pub fn find_relative<'a, F: Field>(dex: &'a Pokedex, species: &str) -> Option<(&'a SpeciesKey, &'a F::Value)> {
    relative_probes(species).into_iter().find_map(|probe| {
        dex.iter()
            .filter(|(other, _)| other.as_str() != species && other.as_str().contains(probe))
            .find_map(|(other, record)| {
                F::get(record)
                    .filter(|value| value.is_populated())
                    .map(|value| (other, value))
            })
    })
}

/// Copy `F` from a family relative into every record that lacks it.
///
/// Only absent or empty fields are filled, with the relative's whole value;
/// lists are never combined. Sources are read before any fill is applied,
/// so a filled record never feeds another fill in the same pass.
pub fn propagate<F: Field>(dex: &mut Pokedex) -> usize {
    let fills: Vec<(SpeciesKey, F::Value)> = dex
        .iter()
        .filter(|(_, record)| !F::is_filled(record))
        .filter_map(|(species, _)| {
            find_relative::<F>(dex, species.as_str()).map(|(relative, value)| {
                tracing::debug!("{}: `{}` inherited from {}", species, F::NAME, relative);
                (species.clone(), value.clone())
            })
        })
        .collect();

    let filled = fills.len();
    for (species, value) in fills {
        if let Some(record) = dex.get_mut(species.as_str()) {
            *F::slot(record) = Some(value);
        }
    }
    tracing::info!("propagated `{}` to {} species", F::NAME, filled);
    filled
}
