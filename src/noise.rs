//! Seeded 2D coherent noise for terrain synthesis.
//!
//! Wraps simplex noise and normalizes it to `[0, 1]` so octave layers can be
//! summed and weighted without a sign offset.

use noise::{NoiseFn, Simplex};

use crate::error::{Result, TerrainError};

/// Seed used when no seed is supplied.
pub const DEFAULT_SEED: u32 = 4;

/// Largest coordinate magnitude the simplex primitive is evaluated at.
///
/// The primitive converts skewed coordinates to lattice integers and aborts on
/// values that don't fit; `2^30` keeps the skewed sum inside `i32` everywhere.
pub const MAX_COORDINATE: f64 = (1u64 << 30) as f64;

/// Whether `(x, y)` lies inside the sampling domain.
pub fn in_domain(x: f64, y: f64) -> bool {
    x.is_finite() && y.is_finite() && x.abs() <= MAX_COORDINATE && y.abs() <= MAX_COORDINATE
}

/// Deterministic 2D noise field.
///
/// The permutation table is built once in [`NoiseField::new`] and never
/// mutated afterwards, so sampling is a pure function of seed and coordinate.
#[derive(Clone)]
pub struct NoiseField {
    simplex: Simplex,
    seed: u32,
}

impl NoiseField {
    /// Create new noise field with seed
    pub fn new(seed: u32) -> Self {
        Self {
            simplex: Simplex::new(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Sample the simplex primitive at `(x, y)`.
    ///
    /// Returns value in range [-1, 1]. The primitive can overshoot its nominal
    /// bounds by a hair at some coordinates, so the result is clamped.
    ///
    /// # Errors
    /// `InvalidArgument` when a coordinate is non-finite or exceeds
    /// [`MAX_COORDINATE`] in magnitude.
    pub fn try_sample_raw(&self, x: f64, y: f64) -> Result<f64> {
        if !in_domain(x, y) {
            return Err(TerrainError::invalid(format!(
                "noise coordinate ({x}, {y}) outside [-{MAX_COORDINATE}, {MAX_COORDINATE}]"
            )));
        }
        Ok(self.simplex.get([x, y]).clamp(-1.0, 1.0))
    }

    /// Sample noise at `(x, y)`, remapped from [-1, 1] to [0, 1]
    pub fn try_sample(&self, x: f64, y: f64) -> Result<f64> {
        Ok(to_unit(self.try_sample_raw(x, y)?))
    }

    /// Infallible [`NoiseField::try_sample_raw`].
    ///
    /// Outside the domain (see [`in_domain`]) this returns `0.0`, the value
    /// the primitive takes on every lattice point.
    pub fn sample_raw(&self, x: f64, y: f64) -> f64 {
        self.try_sample_raw(x, y).unwrap_or(0.0)
    }

    /// Infallible [`NoiseField::try_sample`]; `0.5` outside the domain.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        to_unit(self.sample_raw(x, y))
    }

    /// Multi-octave sample at `(x, y)`; see [`crate::terrain::combine`].
    pub fn combine(&self, x: f64, y: f64, octaves: u32) -> Result<f64> {
        crate::terrain::combine(self, x, y, octaves)
    }
}

fn to_unit(raw: f64) -> f64 {
    (raw + 1.0) / 2.0
}

impl Default for NoiseField {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField").field("seed", &self.seed).finish()
    }
}
