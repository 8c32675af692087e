mod config;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use config::{PatchConfig, PrintConfig};
use cubegen::{AttributePolicy, VertexTable};

#[derive(Parser)]
#[command(name = "cubegen")]
#[command(about = "Textured cube vertex table generator")]
struct Args {
    #[arg(short, long, global = true, help = "Log debug output")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the vertex table for pasting by hand
    Print {
        #[arg(long, value_enum, default_value_t = Policy::SolidRed)]
        policy: Policy,
    },
    /// Rewrite the generated sections of an asset file in place
    Patch {
        #[arg(short, long, help = "Asset file to patch (defaults to data/cube_vertices.txt)")]
        target: Option<std::path::PathBuf>,

        #[arg(long, default_value = cubegen::DEFAULT_MARKER_PREFIX, help = "Section marker prefix")]
        marker: String,

        #[arg(long, value_enum, default_value_t = Policy::WhiteSplit)]
        policy: Policy,

        #[arg(long, help = "Print the patched file instead of writing it")]
        dry_run: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Policy {
    SolidRed,
    WhiteSplit,
}

impl From<Policy> for AttributePolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::SolidRed => AttributePolicy::SolidRed,
            Policy::WhiteSplit => AttributePolicy::WhiteSplit,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    match args.command {
        Command::Print { policy } => run_print(PrintConfig::new(policy.into())),
        Command::Patch {
            target,
            marker,
            policy,
            dry_run,
        } => run_patch(PatchConfig::new(target, marker, policy.into(), dry_run)),
    }
}

fn run_print(config: PrintConfig) -> Result<()> {
    let table = VertexTable::generate(&config.generator);
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(cubegen::print_report(&table).as_bytes())
        .context("failed to write vertex table to stdout")?;
    Ok(())
}

fn run_patch(config: PatchConfig) -> Result<()> {
    let table = VertexTable::generate(&config.generator);
    let outcome = cubegen::patch_file(&config.target, &config.options, &table)
        .with_context(|| format!("could not patch {}", config.target.display()))?;

    if config.options.dry_run {
        io::stdout()
            .lock()
            .write_all(outcome.content.as_bytes())
            .context("failed to write patched content to stdout")?;
    } else if outcome.changed {
        log::info!(
            "Wrote {} vertices to {}",
            table.len(),
            config.target.display()
        );
    } else {
        log::info!("{} already up to date", config.target.display());
    }

    Ok(())
}
