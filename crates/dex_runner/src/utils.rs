use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Nearest ancestor of the working directory holding a `Cargo.toml`, or the
/// working directory itself.
pub fn find_project_root() -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("failed to read the working directory")?;
    let mut dir = cwd.clone();
    loop {
        if dir.join("Cargo.toml").exists() {
            return Ok(dir);
        }
        if !dir.pop() {
            return Ok(cwd);
        }
    }
}

/// `explicit` if given, otherwise `default_name` under the project root.
pub fn dir_or_default(explicit: Option<PathBuf>, default_name: &str) -> Result<PathBuf> {
    match explicit {
        Some(dir) => Ok(dir),
        None => Ok(find_project_root()?.join(default_name)),
    }
}

/// Pretty-print `value` to `path`, creating parent directories.
pub fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_wins() {
        let dir = dir_or_default(Some(PathBuf::from("/tmp/dex")), "out").unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/dex"));
    }

    #[test]
    fn test_write_json_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/value.json");
        write_json(&path, &serde_json::json!({"k": [1, 2]})).unwrap();
        let back: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back["k"][1], 2);
    }
}
