//! Helpers shared by the line scanners.

use crate::error::{Result, SourceError};
use dex_engine::Scalar;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Read a source file, attaching the path to any I/O error.
pub fn read_source(path: &Path) -> Result<String> {
    tracing::debug!("reading {}", path.display());
    fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

static PERCENT_FEMALE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"PERCENT_FEMALE\(\s*(\d+(?:\.\d+)?)\s*\)").unwrap());

/// Type a literal from a C initializer.
///
/// `PERCENT_FEMALE(x)` becomes the float `x`; everything else goes through
/// [`Scalar::parse`].
pub fn parse_scalar(raw: &str) -> Scalar {
    let raw = raw.trim();
    if let Some(caps) = PERCENT_FEMALE_RE.captures(raw) {
        if let Ok(x) = caps[1].parse() {
            return Scalar::Float(x);
        }
    }
    Scalar::parse(raw)
}

/// Split a comma-separated run of tokens, dropping blanks.
pub fn split_tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(',').map(str::trim).filter(|t| !t.is_empty())
}
