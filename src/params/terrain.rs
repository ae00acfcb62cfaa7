//! Terrain generation parameters.

use crate::error::{Result, TerrainError};
use crate::noise::DEFAULT_SEED;
use crate::terrain::check_octave_domain;

/// Target elevation band for displaced vertices (world units)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElevationRange {
    pub min: f32,
    pub max: f32,
}

impl ElevationRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Both bounds finite and `min <= max`. A flat band (`min == max`) is allowed.
    pub fn validate(&self) -> Result<()> {
        if !(self.min.is_finite() && self.max.is_finite()) {
            return Err(TerrainError::invalid(format!(
                "elevation range must be finite, got [{}, {}]",
                self.min, self.max
            )));
        }
        if self.min > self.max {
            return Err(TerrainError::invalid(format!(
                "elevation range is inverted: min {} > max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }
}

impl Default for ElevationRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 500.0,
        }
    }
}

/// Heightmap and mesh generation parameters
#[derive(Debug, Clone)]
pub struct TerrainParams {
    /// Noise seed (fixed for the lifetime of a terrain)
    pub seed: u32,

    /// Heightmap width in texels (= vertices per row)
    pub width: usize,

    /// Heightmap height in texels (= vertex rows)
    pub height: usize,

    /// Number of noise octaves to sum (>= 1)
    /// Each octave doubles frequency and halves amplitude
    pub octaves: u32,

    /// Spacing between neighbouring vertices (world units)
    pub spatial_step: f32,

    /// Elevation band the heightmap is remapped into (world units)
    pub elevation: ElevationRange,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            width: 256,
            height: 256,
            octaves: 8,
            spatial_step: 1.0,
            elevation: ElevationRange::default(),
        }
    }
}

impl TerrainParams {
    /// Default parameters with the given seed.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Check every field against the ranges the pipeline accepts.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(TerrainError::invalid(format!(
                "grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        check_octave_domain(
            (self.width - 1) as f64 / self.width as f64,
            (self.height - 1) as f64 / self.height as f64,
            self.octaves,
        )?;
        if !self.spatial_step.is_finite() || self.spatial_step <= 0.0 {
            return Err(TerrainError::invalid(format!(
                "spatial step must be positive and finite, got {}",
                self.spatial_step
            )));
        }
        self.elevation.validate()
    }

    /// Total vertex count of the generated mesh.
    pub fn vertex_count(&self) -> usize {
        self.width * self.height
    }
}
