//! Writes a [`DexSnapshot`] to disk as JSON.

use crate::utils::write_json;
use anyhow::Result;
use dex_engine::DexSnapshot;
use std::path::Path;

pub const POKEDEX_DIR: &str = "pokedex";
pub const MOVES_FILE: &str = "moves.json";
pub const LOCATIONS_FILE: &str = "locations.json";
pub const FIELDS_FILE: &str = "fields.json";
pub const PARSE_ERRORS_FILE: &str = "parse_errors.json";

/// Counts reported after a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitSummary {
    pub species: usize,
    pub unmatched: usize,
}

/// One file per species under `pokedex/`, plus the shared tables.
pub fn emit_snapshot(snapshot: &DexSnapshot, out_dir: &Path) -> Result<EmitSummary> {
    let pokedex_dir = out_dir.join(POKEDEX_DIR);
    for (species, record) in snapshot.pokedex.iter() {
        write_json(&pokedex_dir.join(format!("{}.json", species)), record)?;
    }

    write_json(&out_dir.join(MOVES_FILE), &snapshot.moves)?;
    write_json(&out_dir.join(LOCATIONS_FILE), &snapshot.locations)?;
    write_json(&out_dir.join(FIELDS_FILE), &snapshot.catalog)?;
    write_json(&out_dir.join(PARSE_ERRORS_FILE), &snapshot.diagnostics)?;

    let summary = EmitSummary {
        species: snapshot.pokedex.len(),
        unmatched: snapshot.diagnostics.len(),
    };
    tracing::info!(
        "wrote {} species to {} ({} unmatched)",
        summary.species,
        out_dir.display(),
        summary.unmatched
    );
    Ok(summary)
}
