//! Species records and the identifiers that key them.
//!
//! A `SpeciesRecord` starts out as the base-stat attributes of one species and
//! accumulates named fields as each source is merged in. Named fields are
//! addressed through the [`Field`] trait so that merge and fallback logic is
//! written once and checked per field type.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Prefix carried by internal species tokens in the C sources.
pub const SPECIES_PREFIX: &str = "SPECIES_";

// ============================================================================
// Identifiers
// ============================================================================

/// Canonical species/form identifier (`SPECIES_` prefix stripped).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeciesKey(pub String);

impl SpeciesKey {
    /// Build a key from an internal token, with or without the `SPECIES_` prefix.
    pub fn from_token(token: &str) -> Self {
        let token = token.trim();
        Self(token.strip_prefix(SPECIES_PREFIX).unwrap_or(token).to_string())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Family basename (everything before the first underscore)
    #[inline]
    pub fn family(&self) -> &str {
        crate::normalize::family_basename(&self.0)
    }
}

impl fmt::Display for SpeciesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SpeciesKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SpeciesKey {
    fn from(key: &str) -> Self {
        Self::from_token(key)
    }
}

impl From<String> for SpeciesKey {
    fn from(key: String) -> Self {
        match key.strip_prefix(SPECIES_PREFIX) {
            Some(stripped) => Self(stripped.to_string()),
            None => Self(key),
        }
    }
}

// ============================================================================
// Values
// ============================================================================

/// A typed attribute value as scanned from a source literal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Classify a raw literal: integer, float, `TRUE`/`FALSE`, otherwise text.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = raw.parse() {
                return Scalar::Int(n);
            }
        }
        if raw.matches('.').count() == 1 && raw.replacen('.', "", 1).bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(f) = raw.parse() {
                return Scalar::Float(f);
            }
        }
        match raw {
            "TRUE" => Scalar::Bool(true),
            "FALSE" => Scalar::Bool(false),
            _ => Scalar::Text(raw.to_string()),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Scalar::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Int(n)
    }
}

/// One outgoing evolution edge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Evolution {
    /// Method with the `EVO_` prefix removed (e.g. `LEVEL`, `ITEM`)
    pub method: String,
    /// Level, item or other method argument
    pub condition: Scalar,
    pub target: SpeciesKey,
    /// Trailing argument (e.g. mega variant); absent when the source holds `0`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Scalar>,
}

/// A level-up learnset entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUpMove {
    pub level: u8,
    #[serde(rename = "move")]
    pub move_key: String,
}

impl LevelUpMove {
    pub fn new(level: u8, move_key: impl Into<String>) -> Self {
        Self {
            level,
            move_key: move_key.into(),
        }
    }
}

/// Where a species can be encountered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    pub route: String,
    pub area: String,
    pub method: String,
}

// ============================================================================
// Record
// ============================================================================

/// Everything known about one species/form.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SpeciesRecord {
    /// Base-stat attributes in source order
    #[serde(flatten)]
    pub attributes: IndexMap<String, Scalar>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blurb: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub egg_moves: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub evolve_to: Option<Vec<Evolution>>,

    /// Derived from every other record's `evolve_to`
    pub evolve_from: Vec<SpeciesKey>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub learnset: Option<Vec<LevelUpMove>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tm: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tutor: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<Encounter>>,
}

impl SpeciesRecord {
    pub fn attribute(&self, name: &str) -> Option<&Scalar> {
        self.attributes.get(name)
    }
}

/// Whether a merged value carries any data.
pub trait Populated {
    fn is_populated(&self) -> bool;
}

impl<T> Populated for Vec<T> {
    fn is_populated(&self) -> bool {
        !self.is_empty()
    }
}

impl Populated for String {
    fn is_populated(&self) -> bool {
        !self.trim().is_empty()
    }
}

/// A named, typed slot on [`SpeciesRecord`].
pub trait Field {
    /// Output name of the field
    const NAME: &'static str;
    type Value: Clone + fmt::Debug + Populated;

    fn slot(record: &mut SpeciesRecord) -> &mut Option<Self::Value>;
    fn get(record: &SpeciesRecord) -> Option<&Self::Value>;

    /// Present and non-empty
    fn is_filled(record: &SpeciesRecord) -> bool {
        Self::get(record).is_some_and(Populated::is_populated)
    }
}

macro_rules! record_field {
    ($(#[$meta:meta])* $marker:ident => $field:ident: $ty:ty) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug)]
        pub struct $marker;

        impl Field for $marker {
            const NAME: &'static str = stringify!($field);
            type Value = $ty;

            #[inline]
            fn slot(record: &mut SpeciesRecord) -> &mut Option<$ty> {
                &mut record.$field
            }

            #[inline]
            fn get(record: &SpeciesRecord) -> Option<&$ty> {
                record.$field.as_ref()
            }
        }
    };
}

record_field!(
    /// Display name from the name table
    Name => name: String
);
record_field!(
    /// Pokedex blurb text
    Blurb => blurb: String
);
record_field!(EggMoves => egg_moves: Vec<String>);
record_field!(EvolveTo => evolve_to: Vec<Evolution>);
record_field!(Learnset => learnset: Vec<LevelUpMove>);
record_field!(
    /// Moves learnable by TM/HM
    TmMoves => tm: Vec<String>
);
record_field!(
    /// Moves learnable from a tutor
    TutorMoves => tutor: Vec<String>
);
record_field!(Locations => location: Vec<Encounter>);
