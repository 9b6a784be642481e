//! dex_engine - Denormalized Pokedex builder
//!
//! Folds independently extracted sources (base stats, egg moves, evolutions,
//! learnsets, TM/tutor compatibility, text tables, encounter sheets) into one
//! record per species, then derives the relationships no single source
//! carries: evolution back-references, family fallbacks, the learned-move
//! index and the categorical field catalog.

/// Species records, scalar values and typed record fields
pub mod model;

/// Record set seeded from the dex outline
pub mod pokedex;

/// Fatal errors and the unmatched-data accumulator
pub mod error;

/// Species token -> display key rewriting and family relatives
pub mod normalize;

/// Field-by-field merge of source mappings
pub mod merge;

/// Evolution back-references and family fallback propagation
pub mod enrich;

/// TM/tutor compatibility tables and the learned-move index
pub mod moves;

/// Encounter tables and the species -> location lookup
pub mod locations;

/// Value -> species inverted index over categorical attributes
pub mod catalog;

/// Raw inputs handed over by the extractors
pub mod sources;

/// End-to-end driver
pub mod pipeline;

// Re-export commonly used types
pub use catalog::{CatalogField, FieldCatalog};
pub use error::{DexError, Diagnostics, Result, Unmatched};
pub use model::{Encounter, Evolution, Field, LevelUpMove, Scalar, SpeciesKey, SpeciesRecord};
pub use moves::{LearnedBy, MoveCategory, MoveSlot, MoveTable};
pub use normalize::{FormRule, Normalizer};
pub use pipeline::{DexSnapshot, Pipeline};
pub use pokedex::{DexOutline, Pokedex};
pub use sources::SourceBundle;
