//! Per-file raw dumps, independent of the merge pipeline.

use crate::error::Result;
use crate::helpers::read_source;
use crate::moves::parse_fragment;
use crate::species::parse_base_stats;
use crate::text::parse_string_table;
use std::path::{Path, PathBuf};

/// Which scanner a source file goes through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawKind {
    /// `.c`: `[SPECIES_X] = { .attr = value, }` blocks
    AttributeBlocks,
    /// `.string`: `#org @...` text blocks
    StringTable,
    /// `.txt`: one compatibility fragment
    Fragment,
}

impl RawKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "c" => Some(RawKind::AttributeBlocks),
            "string" => Some(RawKind::StringTable),
            "txt" => Some(RawKind::Fragment),
            _ => None,
        }
    }

    /// Scan `text` into its JSON dump.
    pub fn convert(self, text: &str) -> Result<serde_json::Value> {
        let value = match self {
            RawKind::AttributeBlocks => serde_json::to_value(parse_base_stats(text))?,
            RawKind::StringTable => serde_json::to_value(parse_string_table(text))?,
            RawKind::Fragment => serde_json::to_value(parse_fragment(text))?,
        };
        Ok(value)
    }
}

/// Dump of one file, or `None` for file types with no scanner.
pub fn convert_file(path: &Path) -> Result<Option<serde_json::Value>> {
    let Some(kind) = RawKind::from_path(path) else {
        return Ok(None);
    };
    let text = read_source(path)?;
    kind.convert(&text).map(Some)
}

/// `path` under `src_root` moved to `dst_root`, with a `.json` extension.
pub fn mirror_path(src_root: &Path, dst_root: &Path, path: &Path) -> Option<PathBuf> {
    let relative = path.strip_prefix(src_root).ok()?;
    Some(dst_root.join(relative).with_extension("json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_kind_by_extension() {
        assert_eq!(RawKind::from_path(Path::new("src/Base_Stats.c")), Some(RawKind::AttributeBlocks));
        assert_eq!(RawKind::from_path(Path::new("a.string")), Some(RawKind::StringTable));
        assert_eq!(RawKind::from_path(Path::new("1 - Focus Punch.txt")), Some(RawKind::Fragment));
        assert_eq!(RawKind::from_path(Path::new("Makefile")), None);
    }

    #[test]
    fn test_mirror_path() {
        let out = mirror_path(Path::new("c"), Path::new("json"), Path::new("c/src/Egg_Moves.c"));
        assert_eq!(out, Some(PathBuf::from("json/src/Egg_Moves.json")));
        assert_eq!(mirror_path(Path::new("c"), Path::new("json"), Path::new("elsewhere.c")), None);
    }

    #[test]
    fn test_convert_fragment_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("1 - Focus Punch.txt");
        fs::write(&path, "TM01: Focus Punch\nMACHOP\n").unwrap();

        let dump = convert_file(&path).unwrap().unwrap();
        assert_eq!(dump["name"], "Focus Punch");
        assert_eq!(dump["compatibility"], serde_json::json!(["MACHOP"]));
        assert!(convert_file(&dir.path().join("skip.md")).unwrap().is_none());
    }

    #[test]
    fn test_convert_attribute_blocks() {
        let dump = RawKind::AttributeBlocks.convert("[SPECIES_BULBASAUR] =\n{\n    .baseHP = 45,\n},\n")
            .unwrap();
        assert_eq!(dump["BULBASAUR"]["baseHP"], 45);
    }
}
