// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! kengine-sim: headless scene driver.
//!
//! Spawns bouncing entities at seeded random positions, runs a fixed number
//! of ticks and logs broad-phase candidate pair counts per tick.

use anyhow::{Context, Result};
use clap::Parser;
use kengine_app_core::config::ConfigService;
use kengine_app_core::settings::EngineSettings;
use kengine_config_fs::FsConfigStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod sim;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of entities to spawn.
    #[arg(short = 'n', long, default_value_t = 200)]
    entities: usize,

    /// Number of ticks to simulate.
    #[arg(short, long, default_value_t = 120)]
    ticks: u64,

    /// Scene width in pixels (overrides stored settings).
    #[arg(long)]
    width: Option<i32>,

    /// Scene height in pixels (overrides stored settings).
    #[arg(long)]
    height: Option<i32>,

    /// PRNG seed for spawn positions and headings.
    #[arg(short, long, default_value_t = 1)]
    seed: u64,

    /// Quad-tree split threshold (overrides stored settings).
    #[arg(long)]
    max_items: Option<usize>,

    /// Start from the settings stored in the user config directory.
    #[arg(long)]
    load_config: bool,

    /// Write the effective settings back to the user config directory.
    #[arg(long)]
    save_config: bool,

    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` wins when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn resolve_settings(args: &Args) -> Result<EngineSettings> {
    let mut settings = if args.load_config || args.save_config {
        let service = ConfigService::new(FsConfigStore::new()?);
        if args.load_config {
            EngineSettings::load(&service).context("loading stored settings")?
        } else {
            EngineSettings::default()
        }
    } else {
        EngineSettings::default()
    };
    if let Some(w) = args.width {
        settings.scene_width = w;
    }
    if let Some(h) = args.height {
        settings.scene_height = h;
    }
    if let Some(m) = args.max_items {
        settings.quad_tree.max_items = m;
    }
    if args.save_config {
        let service = ConfigService::new(FsConfigStore::new()?);
        settings.save(&service).context("saving settings")?;
        info!(base = %service.store().base().display(), "settings saved");
    }
    Ok(settings)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let settings = resolve_settings(&args)?;
    info!(
        width = settings.scene_width,
        height = settings.scene_height,
        max_items = settings.quad_tree.max_items,
        entities = args.entities,
        ticks = args.ticks,
        seed = args.seed,
        "starting simulation"
    );

    let mut scene = sim::populate(&settings, args.entities, args.seed)?;
    let report = sim::run(&mut scene, args.ticks)?;
    info!(
        ticks = report.ticks,
        total_pairs = report.total_pairs,
        peak_pairs = report.peak_pairs,
        peak_tick = report.peak_tick,
        index_nodes = report.index_nodes,
        index_depth = report.index_depth,
        "simulation finished"
    );
    Ok(())
}
