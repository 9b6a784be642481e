//! End-to-end driver: seed, merge, enrich, catalogue.

use crate::catalog::FieldCatalog;
use crate::enrich::{link_evolutions, propagate};
use crate::error::{Diagnostics, Result};
use crate::locations::{location_lookup, normalize_routes, LocationLookup};
use crate::merge::{merge, merge_text, seed_attributes};
use crate::model::{Blurb, EggMoves, EvolveTo, Learnset, Locations, Name, TmMoves, TutorMoves};
use crate::moves::{learned_index, MoveCategory, MoveTable};
use crate::normalize::Normalizer;
use crate::pokedex::Pokedex;
use crate::sources::SourceBundle;

/// Everything one run produces.
#[derive(Debug)]
pub struct DexSnapshot {
    pub pokedex: Pokedex,
    pub moves: MoveTable,
    pub locations: LocationLookup,
    pub catalog: FieldCatalog,
    pub diagnostics: Diagnostics,
}

#[derive(Clone, Debug, Default)]
pub struct Pipeline {
    normalizer: Normalizer,
}

impl Pipeline {
    pub fn new(normalizer: Normalizer) -> Self {
        Self { normalizer }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Run every stage over `sources`.
    ///
    /// Unmatched data ends up in the snapshot's diagnostics; only a field
    /// collision aborts the run.
    pub fn run(&self, sources: SourceBundle) -> Result<DexSnapshot> {
        let SourceBundle {
            outline,
            base_stats,
            egg_moves,
            evolutions,
            learnsets,
            move_slots,
            compatibility,
            blurbs,
            names,
            mut routes,
        } = sources;
        let mut diag = Diagnostics::new();

        let mut dex = Pokedex::from_outline(&outline);
        tracing::info!("seeded {} species from {} dex entries", dex.len(), outline.len());
        seed_attributes(&mut dex, base_stats)?;

        merge::<EggMoves>(&mut dex, egg_moves, &mut diag)?;
        merge::<EvolveTo>(&mut dex, evolutions, &mut diag)?;
        merge_text::<Blurb>(&mut dex, blurbs, &self.normalizer, &mut diag)?;
        merge_text::<Name>(&mut dex, names, &self.normalizer, &mut diag)?;

        merge::<Learnset>(&mut dex, learnsets, &mut diag)?;
        propagate::<Learnset>(&mut dex);

        let mut moves = MoveTable::new(&move_slots);
        for (category, fragments) in compatibility {
            moves.apply_fragments(category, fragments, &mut diag);
        }
        merge::<TmMoves>(&mut dex, moves.compatible_moves(MoveCategory::Tm), &mut diag)?;
        merge::<TutorMoves>(&mut dex, moves.compatible_moves(MoveCategory::Tutor), &mut diag)?;
        propagate::<TmMoves>(&mut dex);
        propagate::<TutorMoves>(&mut dex);

        link_evolutions(&mut dex, &mut diag);

        normalize_routes(&mut routes, &dex);
        let locations = location_lookup(&routes);
        merge::<Locations>(&mut dex, locations.clone(), &mut diag)?;

        moves.learned = learned_index(&dex);
        let catalog = FieldCatalog::build(&dex);

        tracing::info!("pipeline finished: {} species, {} unmatched", dex.len(), diag.len());
        Ok(DexSnapshot {
            pokedex: dex,
            moves,
            locations,
            catalog,
            diagnostics: diag,
        })
    }
}
