//! Terrain stage library - procedural heightmap terrain for a 3D viewer
//!
//! Multi-octave simplex noise is sampled into a heightmap grid, quantized
//! into an 8-bit texture and turned into displaced mesh vertices that an
//! external renderer uploads and draws.

pub mod cli;
pub mod error;
pub mod export;
pub mod noise;
pub mod params;
pub mod remap;
pub mod terrain;

pub use error::{Result, TerrainError};
pub use export::{export_png, write_vertex_buffer, HeightmapTexture};
pub use crate::noise::NoiseField;
pub use params::{ElevationRange, TerrainParams};
pub use remap::{remap, unit_to_channel};
pub use terrain::{
    build_vertex_buffer, combine, generate_grid, HeightmapGrid, TerrainSystem, Vertex,
    VertexBuffer,
};
