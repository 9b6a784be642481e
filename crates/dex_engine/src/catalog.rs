//! Value -> species inverted index over a fixed set of categorical attributes.

use crate::model::SpeciesKey;
use crate::pokedex::Pokedex;
use indexmap::IndexMap;
use serde::Serialize;

/// Values containing this marker are placeholders, not data.
pub const NONE_SENTINEL: &str = "NONE";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum CatalogField {
    #[serde(rename = "type")]
    Type,
    #[serde(rename = "item")]
    Item,
    #[serde(rename = "growthRate")]
    GrowthRate,
    #[serde(rename = "eggGroup")]
    EggGroup,
    #[serde(rename = "ability")]
    Ability,
}

impl CatalogField {
    pub const ALL: [CatalogField; 5] = [
        CatalogField::Type,
        CatalogField::Item,
        CatalogField::GrowthRate,
        CatalogField::EggGroup,
        CatalogField::Ability,
    ];

    /// Attributes read into this category, in priority order
    pub fn source_attributes(self) -> &'static [&'static str] {
        match self {
            CatalogField::Type => &["type1", "type2"],
            CatalogField::Item => &["item1", "item2"],
            CatalogField::GrowthRate => &["growthRate"],
            CatalogField::EggGroup => &["eggGroup1", "eggGroup2"],
            CatalogField::Ability => &["ability1", "ability2", "hiddenAbility"],
        }
    }
}

/// Raw value -> species holding it.
pub type ValueIndex = IndexMap<String, Vec<SpeciesKey>>;

/// Category -> [`ValueIndex`]. Every category is present, possibly empty.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldCatalog {
    categories: IndexMap<CatalogField, ValueIndex>,
}

impl FieldCatalog {
    pub fn build(dex: &Pokedex) -> Self {
        let mut categories: IndexMap<CatalogField, ValueIndex> =
            CatalogField::ALL.iter().map(|c| (*c, ValueIndex::new())).collect();

        for (species, record) in dex.iter() {
            for (category, index) in categories.iter_mut() {
                for attr in category.source_attributes() {
                    let Some(value) = record.attribute(attr) else {
                        continue;
                    };
                    let value = value.to_string();
                    if value.contains(NONE_SENTINEL) {
                        continue;
                    }
                    let holders = index.entry(value).or_default();
                    // mono-type species carry the same value twice
                    if holders.last() != Some(species) {
                        holders.push(species.clone());
                    }
                }
            }
        }

        let catalog = FieldCatalog { categories };
        tracing::info!(
            "catalogued {} distinct values over {} categories",
            catalog.categories.values().map(IndexMap::len).sum::<usize>(),
            catalog.categories.len()
        );
        catalog
    }

    pub fn category(&self, field: CatalogField) -> &ValueIndex {
        &self.categories[&field]
    }

    /// Species holding `value` in `field`, empty if none
    pub fn holders(&self, field: CatalogField, value: &str) -> &[SpeciesKey] {
        self.category(field).get(value).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (CatalogField, &ValueIndex)> {
        self.categories.iter().map(|(k, v)| (*k, v))
    }
}
