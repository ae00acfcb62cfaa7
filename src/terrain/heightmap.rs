//! Dense heightmap grids sampled from multi-octave noise.

use log::debug;

use super::octave::{check_octave_domain, combine};
use crate::error::{Result, TerrainError};
use crate::noise::NoiseField;

/// Row-major grid of elevation samples in `[0, 1]`.
///
/// Produced fresh by [`generate_grid`] and owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightmapGrid {
    width: usize,
    height: usize,
    samples: Vec<f64>,
}

impl HeightmapGrid {
    /// Wrap an existing row-major sample vector.
    ///
    /// # Errors
    /// `InvalidArgument` if a dimension is zero or `samples.len() != width * height`.
    pub fn from_samples(width: usize, height: usize, samples: Vec<f64>) -> Result<Self> {
        validate_dimensions(width, height)?;
        if samples.len() != width * height {
            return Err(TerrainError::invalid(format!(
                "expected {} samples for a {width}x{height} grid, got {}",
                width * height,
                samples.len()
            )));
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.height && col < self.width {
            Some(self.samples[row * self.width + col])
        } else {
            None
        }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Iterate rows, each a slice of `width` samples.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.samples.chunks_exact(self.width)
    }

    /// Smallest and largest sample.
    pub fn min_max(&self) -> (f64, f64) {
        self.samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}

fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(TerrainError::invalid(format!(
            "grid dimensions must be positive, got {width}x{height}"
        )));
    }
    Ok(())
}

/// Sample [`combine`] over a `width x height` grid covering the unit square.
///
/// Cell `(row, col)` is sampled at `(col / width, row / height)`, so the noise
/// is read at the same physical scale whatever the resolution.
///
/// # Errors
/// `InvalidArgument` for zero dimensions, zero octaves, or an octave count
/// whose top frequency leaves the noise domain. Validation happens before any
/// sampling; nothing partial is returned.
pub fn generate_grid(
    field: &NoiseField,
    width: usize,
    height: usize,
    octaves: u32,
) -> Result<HeightmapGrid> {
    validate_dimensions(width, height)?;
    // The far corner carries the largest coordinates of the grid
    let max_x = (width - 1) as f64 / width as f64;
    let max_y = (height - 1) as f64 / height as f64;
    check_octave_domain(max_x, max_y, octaves)?;

    let mut samples = Vec::with_capacity(width * height);
    for row in 0..height {
        let y = row as f64 / height as f64;
        for col in 0..width {
            let x = col as f64 / width as f64;
            samples.push(combine(field, x, y, octaves)?);
        }
    }

    let grid = HeightmapGrid {
        width,
        height,
        samples,
    };
    let (lo, hi) = grid.min_max();
    debug!(
        "Generated {width}x{height} heightmap (seed {}, {octaves} octaves), range [{lo:.4}, {hi:.4}]",
        field.seed()
    );

    Ok(grid)
}
