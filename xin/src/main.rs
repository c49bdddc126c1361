//! # Xin
//!
//! Command line sampler for seeded Perlin noise fields. Prints single samples
//! or a shaded preview grid so seeds and fractal settings can be inspected
//! before they drive terrain or textures.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use xin_noise::{PerlinNoise, noise::entropy_seed};

use crate::config::{SampleMode, XinConfig};
use crate::field::Field;

mod config;
mod field;
mod logging;

/// Seeded Perlin noise sampler.
#[derive(Parser)]
#[command(name = "xin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON5 config file. The built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed override. Falls back to the config, then to an entropy seed.
    #[arg(short, long, allow_hyphen_values = true)]
    seed: Option<i64>,

    /// Octave count override for fractal sampling.
    #[arg(long)]
    octaves: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the noise value at one point.
    Sample {
        #[arg(allow_hyphen_values = true)]
        x: f64,
        #[arg(allow_hyphen_values = true)]
        y: f64,
        /// Omit for a 2D sample.
        #[arg(allow_hyphen_values = true)]
        z: Option<f64>,

        /// Sum octaves instead of a single sample.
        #[arg(long)]
        fractal: bool,
    },
    /// Print a grid of samples on a z slice.
    Preview {
        #[arg(long)]
        width: Option<usize>,
        #[arg(long)]
        height: Option<usize>,
        /// World units between neighbouring cells.
        #[arg(long)]
        scale: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        z: Option<f64>,
        #[arg(long, value_enum)]
        mode: Option<SampleMode>,
        #[arg(short, long, value_enum, default_value = "ascii")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One shading character per cell.
    Ascii,
    /// Comma-separated values, one line per row.
    Csv,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = XinConfig::load(cli.config.as_deref()).context("failed to load config")?;
    logging::init(&config.log_level)?;

    if let Some(octaves) = cli.octaves {
        config.fractal = config.fractal.with_octaves(octaves)?;
    }

    let seed = cli.seed.or(config.seed).unwrap_or_else(entropy_seed);
    log::info!("Using seed {seed}");
    let noise = PerlinNoise::new(seed);

    match cli.command {
        Commands::Sample {
            x,
            y,
            z,
            fractal,
        } => {
            let value = match (fractal, z) {
                (true, z) => noise.fractal_with(x, y, z.unwrap_or(0.0), &config.fractal),
                (false, Some(z)) => noise.noise_3d(x, y, z),
                (false, None) => noise.noise_2d(x, y),
            };
            println!("{value}");
        }
        Commands::Preview {
            width,
            height,
            scale,
            z,
            mode,
            format,
        } => {
            let preview = &mut config.preview;
            preview.width = width.unwrap_or(preview.width);
            preview.height = height.unwrap_or(preview.height);
            preview.scale = scale.unwrap_or(preview.scale);
            preview.z = z.unwrap_or(preview.z);
            preview.mode = mode.unwrap_or(preview.mode);
            config.validate()?;

            let field = Field::sample(&noise, &config.preview, &config.fractal);
            let (lo, hi) = field.range();
            log::debug!(
                "Sampled {}x{} field, range [{lo}, {hi}]",
                field.width(),
                field.height()
            );

            let rendered = match format {
                OutputFormat::Ascii => field.render_ascii(),
                OutputFormat::Csv => field.render_csv(),
            };
            print!("{rendered}");
        }
    }

    Ok(())
}
