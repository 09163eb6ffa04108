#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter for the Starlane world generator.

mod emit;
mod overrides;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use starlane_system_assembly::assemble_all;

#[derive(Parser)]
#[command(name = "starlane-worldgen", about = "Generates and migrates Starlane world files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Regenerate every world file from the authored campaign table.
    Generate {
        /// Directory the world files are written into.
        #[arg(long, default_value = "data/worlds")]
        worlds_dir: PathBuf,
    },
    /// Inject per-world skin overrides into existing world files.
    ApplyOverrides {
        /// Directory holding the world files to migrate.
        #[arg(long, default_value = "data/worlds")]
        worlds_dir: PathBuf,
    },
}

/// Entry point for the Starlane world generator command-line interface.
fn main() -> anyhow::Result<()> {
    match Cli::parse().command {
        Command::Generate { worlds_dir } => generate(&worlds_dir),
        Command::ApplyOverrides { worlds_dir } => {
            overrides::apply_overrides(&worlds_dir);
            Ok(())
        }
    }
}

fn generate(worlds_dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(worlds_dir)
        .with_context(|| format!("creating {}", worlds_dir.display()))?;

    let worlds = assemble_all();
    for world in &worlds {
        let path = emit::write_world(worlds_dir, world)?;
        println!("Created {}", path.display());
    }

    println!(
        "\nDone! {} world files created in {}",
        worlds.len(),
        worlds_dir.display()
    );
    Ok(())
}
