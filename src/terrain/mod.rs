//! Procedural terrain: octave synthesis, heightmap grids and mesh displacement.

mod heightmap;
mod mesh;
mod octave;
mod system;

// Re-export public types
pub use heightmap::{generate_grid, HeightmapGrid};
pub use mesh::{build_vertex_buffer, generate_grid_indices, Vertex, VertexBuffer};
pub use octave::{check_octave_domain, combine};
pub use system::TerrainSystem;
