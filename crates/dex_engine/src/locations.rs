//! Encounter tables and the species -> location lookup.
//!
//! Encounter sheets name species by display name ("Mr. Mime"), so every name
//! is resolved to a species key before the table is inverted.

use crate::model::{Encounter, Field, Name, SpeciesKey};
use crate::normalize::token_from_display_name;
use crate::pokedex::Pokedex;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Area -> species names found there.
pub type AreaTable = IndexMap<String, Vec<String>>;

/// Route -> method -> area -> species names, in sheet order.
pub type RouteTable = IndexMap<String, IndexMap<String, AreaTable>>;

/// Species -> every place it can be encountered.
pub type LocationLookup = IndexMap<String, Vec<Encounter>>;

/// Display name -> species key, built from the merged `name` field.
pub struct NameIndex<'a> {
    dex: &'a Pokedex,
    by_name: HashMap<&'a str, &'a SpeciesKey>,
}

impl<'a> NameIndex<'a> {
    /// When two species share a display name the first in record order wins.
    pub fn new(dex: &'a Pokedex) -> Self {
        let mut by_name = HashMap::new();
        for (species, record) in dex.iter() {
            if let Some(name) = Name::get(record) {
                by_name.entry(name.as_str()).or_insert(species);
            }
        }
        Self { dex, by_name }
    }

    /// Resolve a display name, falling back to its SHOUTY_SNAKE form.
    pub fn resolve(&self, raw: &str) -> Option<&'a SpeciesKey> {
        self.by_name
            .get(raw)
            .copied()
            .or_else(|| self.dex.key(&token_from_display_name(raw)))
    }
}

/// Replace display names in `routes` with species keys where they resolve.
///
/// Unresolved names are kept as-is. Returns how many names were replaced.
pub fn normalize_routes(routes: &mut RouteTable, dex: &Pokedex) -> usize {
    let index = NameIndex::new(dex);
    let mut resolved = 0;
    for areas in routes.values_mut().flat_map(IndexMap::values_mut) {
        for names in areas.values_mut() {
            for name in names.iter_mut() {
                if let Some(species) = index.resolve(name) {
                    *name = species.to_string();
                    resolved += 1;
                }
            }
        }
    }
    tracing::debug!("resolved {} encounter names", resolved);
    resolved
}

/// Invert a route table into species -> encounters.
pub fn location_lookup(routes: &RouteTable) -> LocationLookup {
    let mut lookup = LocationLookup::new();
    for (route, methods) in routes {
        for (method, areas) in methods {
            for (area, names) in areas {
                for name in names {
                    lookup.entry(name.clone()).or_default().push(Encounter {
                        route: route.clone(),
                        area: area.clone(),
                        method: method.clone(),
                    });
                }
            }
        }
    }
    lookup
}
