use crate::utils::{dir_or_default, write_json};
use anyhow::{Context, Result};
use clap::Args;
use dex_sources::raw::{convert_file, mirror_path};
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Root of the source tree [default: <project root>/data]
    #[arg(short, long, env = "DEX_SOURCE_DIR")]
    pub source_dir: Option<PathBuf>,

    /// Root the JSON dumps are mirrored into [default: <project root>/json]
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,
}

pub fn execute(args: ConvertArgs) -> Result<()> {
    let source_dir = dir_or_default(args.source_dir, "data")?;
    let out_dir = dir_or_default(args.out_dir, "json")?;

    let mut converted = 0;
    for entry in WalkDir::new(&source_dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("failed to walk {}", source_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let Some(dump) = convert_file(path)? else {
            continue;
        };
        let Some(target) = mirror_path(&source_dir, &out_dir, path) else {
            continue;
        };
        tracing::debug!("{} -> {}", path.display(), target.display());
        write_json(&target, &dump)?;
        converted += 1;
    }

    tracing::info!("converted {} files into {}", converted, out_dir.display());
    Ok(())
}
