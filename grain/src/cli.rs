//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::GrainConfig;
use crate::stats::PointSet;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "grain", version)]
#[command(about = "Seeded 3D simplex noise sampler", long_about = None)]
pub struct Args {
    /// Path to the JSON5 config file, created with defaults if missing
    #[arg(long, value_name = "PATH", default_value = "grain.json5", global = true)]
    pub config: PathBuf,

    /// Override the configured seed
    #[arg(long, global = true)]
    pub seed: Option<u32>,

    /// What to do with the noise
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the noise value at a single point
    #[command(allow_negative_numbers = true)]
    Sample {
        /// X coordinate
        x: f64,
        /// Y coordinate
        y: f64,
        /// Z coordinate
        z: f64,
    },
    /// Render a 2D slice of the noise to a grayscale PNG
    Render(RenderArgs),
    /// Report value statistics over a set of sample points
    Stats(StatsArgs),
}

/// Overrides for the `render` command.
#[derive(clap::Args, Debug, Default)]
pub struct RenderArgs {
    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Distance in noise space between neighbouring pixels
    #[arg(long)]
    pub frequency: Option<f64>,

    /// Z coordinate of the slice
    #[arg(long, allow_negative_numbers = true)]
    pub depth: Option<f64>,

    /// Output file path
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl RenderArgs {
    /// Apply the flags that were given on top of `config`.
    pub fn apply(self, config: &mut GrainConfig) {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(frequency) = self.frequency {
            config.frequency = frequency;
        }
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
    }
}

/// Options for the `stats` command.
#[derive(clap::Args, Debug)]
pub struct StatsArgs {
    /// Number of points to evaluate
    #[arg(long, default_value_t = 100_000, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// How sample points are placed
    #[arg(long, value_enum, default_value_t = PointSet::Random)]
    pub points: PointSet,

    /// Points are spread over `[0, extent)` on every axis
    #[arg(long, default_value_t = 100.0)]
    pub extent: f64,
}
