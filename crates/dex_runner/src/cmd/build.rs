use crate::emit::emit_snapshot;
use crate::utils::dir_or_default;
use anyhow::{bail, Context, Result};
use clap::Args;
use dex_engine::Pipeline;
use dex_sources::{load_bundle, SourceLayout};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Root of the source tree [default: <project root>/data]
    #[arg(short, long, env = "DEX_SOURCE_DIR")]
    pub source_dir: Option<PathBuf>,

    /// Where the snapshot is written [default: <project root>/out]
    #[arg(short, long, env = "DEX_OUT_DIR")]
    pub out_dir: Option<PathBuf>,

    /// JSON file overriding input paths relative to the source root
    #[arg(short, long)]
    pub layout: Option<PathBuf>,

    /// Fail when any source record went unmatched
    #[arg(long)]
    pub strict: bool,
}

pub fn execute(args: BuildArgs) -> Result<()> {
    let source_dir = dir_or_default(args.source_dir, "data")?;
    let out_dir = dir_or_default(args.out_dir, "out")?;
    let layout = match &args.layout {
        Some(path) => SourceLayout::from_json_file(path)
            .with_context(|| format!("failed to load layout {}", path.display()))?,
        None => SourceLayout::default(),
    };

    tracing::info!("building pokedex from {}", source_dir.display());
    let bundle = load_bundle(&source_dir, &layout)
        .with_context(|| format!("failed to read sources under {}", source_dir.display()))?;
    let snapshot = Pipeline::default().run(bundle).context("pipeline aborted")?;

    for entry in snapshot.diagnostics.iter() {
        tracing::warn!("{}", entry);
    }

    let summary = emit_snapshot(&snapshot, &out_dir)?;

    if args.strict && summary.unmatched > 0 {
        bail!(
            "{} source records went unmatched ({} species written)",
            summary.unmatched,
            summary.species
        );
    }
    Ok(())
}
