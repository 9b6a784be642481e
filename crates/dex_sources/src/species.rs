//! Species-level C tables: base stats, dex mapping, egg moves, evolutions.

use crate::helpers::{parse_scalar, split_tokens};
use dex_engine::merge::AttributeTable;
use dex_engine::{DexOutline, Evolution, Scalar, SpeciesKey};
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

static SPECIES_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\[SPECIES_(\w+)\]").unwrap());

static ATTRIBUTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\.(\w+)\s*=\s*(.+),").unwrap());

static DEX_ENTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(SPECIES_\w+)\s*-\s*1\]\s*=\s*NATIONAL_DEX_(\w+),").unwrap());

static EVOLUTION_ROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[SPECIES_(\w+)\]\s*=\s*\{(.+?\})\},").unwrap());

static EVOLUTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\s*(\w+),\s*([^,]+),\s*SPECIES_(\w+),\s*([^}]+?)\s*\}").unwrap()
});

const EGG_MOVES_START: &str = "const u16 gEggMoves[] =";
const EGG_MOVES_OPEN: &str = "egg_moves(";

/// `[SPECIES_X] = { .attr = value, ... }` blocks, keyed by `X`.
///
/// Attribute lines outside a species block are ignored.
pub fn parse_base_stats(text: &str) -> IndexMap<String, AttributeTable> {
    let mut stats: IndexMap<String, AttributeTable> = IndexMap::new();
    let mut current: Option<String> = None;

    for line in text.lines().map(str::trim) {
        if let Some(caps) = SPECIES_BLOCK_RE.captures(line) {
            let species = caps[1].to_string();
            stats.entry(species.clone()).or_default();
            current = Some(species);
            continue;
        }
        let (Some(species), Some(caps)) = (&current, ATTRIBUTE_RE.captures(line)) else {
            continue;
        };
        if let Some(table) = stats.get_mut(species) {
            table.insert(caps[1].to_string(), parse_scalar(&caps[2]));
        }
    }
    tracing::debug!("parsed base stats for {} tokens", stats.len());
    stats
}

/// `[SPECIES_X - 1] = NATIONAL_DEX_Y,` lines grouped by `Y`.
pub fn parse_dex_outline(text: &str) -> DexOutline {
    let mut outline = DexOutline::new();
    for line in text.lines().map(str::trim) {
        if let Some(caps) = DEX_ENTRY_RE.captures(line) {
            outline
                .entry(caps[2].to_string())
                .or_default()
                .push(SpeciesKey::from_token(&caps[1]));
        }
    }
    outline
}

/// `egg_moves(X, MOVE_A, ...)` blocks inside `gEggMoves`, possibly spanning
/// several lines.
pub fn parse_egg_moves(text: &str) -> IndexMap<String, Vec<String>> {
    let mut egg_moves = IndexMap::new();
    let mut current: Option<(String, Vec<String>)> = None;

    let body = text
        .lines()
        .map(str::trim)
        .skip_while(|line| !line.starts_with(EGG_MOVES_START))
        .skip(1);

    for line in body {
        if line.starts_with("EGG_MOVES_TERMINATOR") || line.starts_with("};") {
            break;
        }

        let rest = match line.strip_prefix(EGG_MOVES_OPEN) {
            Some(open) => {
                let Some((species, rest)) = open.split_once(',') else {
                    continue;
                };
                current = Some((species.trim().to_string(), Vec::new()));
                rest
            }
            None => line,
        };

        let Some((_, moves)) = current.as_mut() else {
            continue;
        };
        match rest.trim_end().strip_suffix("),") {
            Some(last) => {
                moves.extend(split_tokens(last).map(str::to_string));
                if let Some((species, moves)) = current.take() {
                    egg_moves.insert(species, moves);
                }
            }
            None => moves.extend(split_tokens(rest).map(str::to_string)),
        }
    }
    egg_moves
}

/// `[SPECIES_X] = {{EVO_M, cond, SPECIES_T, extra}, ...},` rows.
///
/// The `EVO_` prefix is dropped from the method, and an `extra` of `0` is
/// treated as absent.
pub fn parse_evolutions(text: &str) -> IndexMap<String, Vec<Evolution>> {
    let mut evolutions = IndexMap::new();
    for row in EVOLUTION_ROW_RE.captures_iter(text) {
        let edges: Vec<Evolution> = EVOLUTION_RE
            .captures_iter(&row[2])
            .map(|edge| {
                let method = &edge[1];
                let extra = parse_scalar(&edge[4]);
                Evolution {
                    method: method.strip_prefix("EVO_").unwrap_or(method).to_string(),
                    condition: parse_scalar(&edge[2]),
                    target: SpeciesKey(edge[3].to_string()),
                    extra: (extra != Scalar::Int(0)).then_some(extra),
                }
            })
            .collect();
        evolutions.insert(row[1].to_string(), edges);
    }
    evolutions
}
