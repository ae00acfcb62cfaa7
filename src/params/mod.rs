//! Parameter definitions with physical units and documented semantics.
//!
//! All tunable numbers of the terrain pipeline live here with:
//! - Units (world units, texels, octaves)
//! - Documented ranges and meanings
//! - Validation at the boundary where they enter the pipeline

mod terrain;

pub use terrain::{ElevationRange, TerrainParams};
