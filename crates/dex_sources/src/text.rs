//! `.string` tables: `#org @DEX_ENTRY_X` / `#org @NAME_X` blocks.

use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

static ENTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#org\s*@(?:DEX_ENTRY|NAME)_(\w+)").unwrap());

static SETTING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\w+\s*=").unwrap());

/// Gender symbols and variation selectors left around names by the editor.
const LINE_TRIM: &[char] = &[' ', '\t', '\u{2642}', '\u{2640}', '\u{fe0f}'];

fn finish(lines: &[&str]) -> String {
    lines
        .join(" ")
        .replace("\\n", " ")
        .replace("\\e", "é")
}

/// Parse one string table, keyed by display key.
///
/// `KEY = value` setting lines are skipped; text lines of one block are
/// joined with spaces.
pub fn parse_string_table(text: &str) -> IndexMap<String, String> {
    let mut table = IndexMap::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in text.lines().map(str::trim) {
        if let Some(caps) = ENTRY_RE.captures(line) {
            if let Some((key, lines)) = current.take() {
                table.insert(key, finish(&lines));
            }
            current = Some((caps[1].to_string(), Vec::new()));
            continue;
        }
        if SETTING_RE.is_match(line) {
            continue;
        }
        if let Some((_, lines)) = current.as_mut() {
            let line = line.trim_matches(LINE_TRIM);
            if !line.is_empty() {
                lines.push(line);
            }
        }
    }
    if let Some((key, lines)) = current {
        table.insert(key, finish(&lines));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_and_cleanup() {
        let text = "\
#org @DEX_ENTRY_BULBASAUR
MAX_LENGTH=40
A strange seed was planted\\non its back at birth.
The plant sprouts and grows\\nwith this Pok\\emon.

#org @DEX_ENTRY_ROTOMFR
Its frozen body.
";
        let table = parse_string_table(text);
        assert_eq!(
            table["BULBASAUR"],
            "A strange seed was planted on its back at birth. The plant sprouts and grows with this Pokémon."
        );
        assert_eq!(table["ROTOMFR"], "Its frozen body.");
    }

    #[test]
    fn test_name_entries_strip_gender_marks() {
        let text = "#org @NAME_NIDORAN_F\nNidoran\u{2640}\u{fe0f}\n#org @NAME_MR_MIME\nMr. Mime\n";
        let table = parse_string_table(text);
        assert_eq!(table["NIDORAN_F"], "Nidoran");
        assert_eq!(table["MR_MIME"], "Mr. Mime");
    }

    #[test]
    fn test_escaped_accents_are_restored() {
        let table = parse_string_table("#org @NAME_FLABEBE\nFlab\\eb\\e\n#org @DEX_ENTRY_FLORGES\nA Pok\\emon.\n");
        assert_eq!(table["FLABEBE"], "Flabébé");
        assert_eq!(table["FLORGES"], "A Pokémon.");
        assert!(table.values().all(|text| !text.contains('\\')));
    }

    #[test]
    fn test_empty_block_is_kept() {
        let table = parse_string_table("#org @NAME_MISSINGNO\n\n");
        assert_eq!(table["MISSINGNO"], "");
    }
}
