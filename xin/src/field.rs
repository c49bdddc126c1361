//! Rectangular grids of noise samples.

use std::fmt::Write;

use xin_noise::{FractalParams, PerlinNoise};

use crate::config::{PreviewConfig, SampleMode};

/// Shading ramp from lowest to highest value.
const RAMP: &[u8] = b" .:-=+*#%@";

/// A row-major grid of samples taken on a `z` slice.
#[derive(Debug, Clone)]
pub struct Field {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl Field {
    /// Samples `preview.width × preview.height` cells spaced `preview.scale` apart.
    #[must_use]
    pub fn sample(noise: &PerlinNoise, preview: &PreviewConfig, fractal: &FractalParams) -> Self {
        let mut values = Vec::with_capacity(preview.width * preview.height);

        for row in 0..preview.height {
            let y = row as f64 * preview.scale;
            for col in 0..preview.width {
                let x = col as f64 * preview.scale;
                let value = match preview.mode {
                    SampleMode::Single => noise.noise_3d(x, y, preview.z),
                    SampleMode::Fractal => noise.fractal_with(x, y, preview.z, fractal),
                };
                values.push(value);
            }
        }

        Self {
            width: preview.width,
            height: preview.height,
            values,
        }
    }

    /// Cells per row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Sample at column `x`, row `y`.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.values.get(y * self.width + x).copied()
    }

    /// Smallest and largest sample.
    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Renders one character per cell, mapping `[-1, 1]` onto the shading ramp.
    #[must_use]
    pub fn render_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        if self.width == 0 {
            return out;
        }
        for row in self.values.chunks(self.width) {
            for &value in row {
                out.push(char::from(RAMP[shade_index(value)]));
            }
            out.push('\n');
        }
        out
    }

    /// Renders one comma-separated line per row.
    #[must_use]
    pub fn render_csv(&self) -> String {
        let mut out = String::new();
        if self.width == 0 {
            return out;
        }
        for row in self.values.chunks(self.width) {
            for (i, value) in row.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                // Writing to a String cannot fail
                let _ = write!(out, "{value}");
            }
            out.push('\n');
        }
        out
    }
}

fn shade_index(value: f64) -> usize {
    let t = (value.clamp(-1.0, 1.0) + 1.0) * 0.5;
    let index = (t * (RAMP.len() - 1) as f64).round() as usize;
    index.min(RAMP.len() - 1)
}
