//! Line scanners for the frozen source formats.
//!
//! Each scanner turns one file into a mapping keyed the way that file keys
//! its entries (species token, dex token, display key, slot number). Lines
//! a scanner does not recognise are skipped.

pub mod error;
pub mod helpers;
pub mod layout;
pub mod locations;
pub mod moves;
pub mod raw;
pub mod species;
pub mod text;

pub use error::{Result, SourceError};
pub use layout::SourceLayout;

use dex_engine::{MoveCategory, SourceBundle};
use helpers::read_source;
use std::collections::BTreeMap;
use std::path::Path;

/// Run every scanner over the tree at `root`.
///
/// A missing file aborts with [`SourceError::Io`] naming it.
pub fn load_bundle(root: &Path, layout: &SourceLayout) -> Result<SourceBundle> {
    let read = |relative: &Path| read_source(&root.join(relative));

    let outline = species::parse_dex_outline(&read(&layout.dex_table)?);
    let base_stats = species::parse_base_stats(&read(&layout.base_stats)?);
    let egg_moves = species::parse_egg_moves(&read(&layout.egg_moves)?);
    let evolutions = species::parse_evolutions(&read(&layout.evolutions)?);
    let learnsets = moves::parse_learnsets(&read(&layout.learnsets)?);
    let move_slots = moves::parse_move_slots(&read(&layout.tm_tutor)?);

    let mut compatibility = BTreeMap::new();
    compatibility.insert(MoveCategory::Tm, moves::load_fragments(&root.join(&layout.tm_compatibility))?);
    compatibility.insert(
        MoveCategory::Tutor,
        moves::load_fragments(&root.join(&layout.tutor_compatibility))?,
    );

    let blurbs = text::parse_string_table(&read(&layout.blurbs)?);
    let names = text::parse_string_table(&read(&layout.names)?);
    let routes = locations::parse_encounters(&read(&layout.land_encounters)?, &read(&layout.water_encounters)?);

    tracing::info!(
        "loaded {} dex entries, {} base stat blocks, {} learnsets, {} names, {} routes",
        outline.len(),
        base_stats.len(),
        learnsets.len(),
        names.len(),
        routes.len()
    );

    Ok(SourceBundle {
        outline,
        base_stats,
        egg_moves,
        evolutions,
        learnsets,
        move_slots,
        compatibility,
        blurbs,
        names,
        routes,
    })
}
