//! grain: samples, renders and profiles seeded 3D simplex noise.

mod cli;
mod config;
mod render;
mod stats;

use std::time::Instant;

use anyhow::{Context, ensure};
use clap::Parser;
use grain_utils::noise::SimplexNoise;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};
use crate::config::GrainConfig;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (mut config, created) = GrainConfig::load_or_create(&args.config)
        .with_context(|| format!("loading config from {}", args.config.display()))?;
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    init_tracing(&config.log_level);
    if created {
        info!(path = %args.config.display(), "wrote default config");
    }

    let start = Instant::now();
    let noise = SimplexNoise::from_seed(config.seed);
    debug!(seed = config.seed, elapsed = ?start.elapsed(), "noise ready");

    match args.command {
        Command::Sample { x, y, z } => {
            println!("{}", noise.sample(x, y, z));
        }
        Command::Render(render_args) => {
            render_args.apply(&mut config);
            config.validate()?;

            let start = Instant::now();
            let image = render::render(&noise, &config)?;
            render::write_png(&image, &config.output)?;
            info!(
                width = config.width,
                height = config.height,
                depth = config.depth,
                output = %config.output.display(),
                elapsed = ?start.elapsed(),
                "rendered noise slice"
            );
        }
        Command::Stats(stats_args) => {
            ensure!(
                stats_args.extent.is_finite() && stats_args.extent > 0.0,
                "extent must be a positive number, got {}",
                stats_args.extent
            );

            let points = stats::points(
                stats_args.points,
                config.seed,
                stats_args.count,
                stats_args.extent,
            );
            let start = Instant::now();
            let summary = stats::summarize(&noise, &points);
            info!(
                points = ?stats_args.points,
                count = summary.count,
                min = summary.min,
                max = summary.max,
                mean = summary.mean(),
                outside = summary.outside_fraction(),
                elapsed = ?start.elapsed(),
                "noise statistics"
            );
            if summary.outside > 0 {
                warn!(
                    outside = summary.outside,
                    "some samples fell outside [-1, 1]"
                );
            }
        }
    }

    Ok(())
}

/// Install the fmt subscriber. `RUST_LOG` wins over the configured level.
fn init_tracing(level: &str) {
    let (filter, fallback) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, false),
        Err(_) => match EnvFilter::try_new(level) {
            Ok(filter) => (filter, false),
            Err(_) => (EnvFilter::new("info"), true),
        },
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if fallback {
        warn!(log_level = level, "invalid log_level in config, using info");
    }
}
