use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cmd;
mod emit;
mod utils;

#[derive(Parser)]
#[command(name = "dex_runner")]
#[command(about = "Builds the denormalized Pokedex from the game source tree")]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the merge pipeline and write the JSON snapshot
    Build(cmd::build::BuildArgs),
    /// Dump every source file to a mirrored JSON file
    Convert(cmd::convert::ConvertArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "dex_runner=debug,dex_engine=debug,dex_sources=debug"
    } else {
        "dex_runner=info,dex_engine=info,dex_sources=info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Build(args)) => cmd::build::execute(args),
        Some(Commands::Convert(args)) => cmd::convert::execute(args),
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
