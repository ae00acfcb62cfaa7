//! High-level terrain system owning the noise field and its parameters.

use log::debug;

use super::heightmap::{generate_grid, HeightmapGrid};
use super::mesh::{build_vertex_buffer, VertexBuffer};
use super::octave::combine;
use crate::error::Result;
use crate::export::HeightmapTexture;
use crate::noise::NoiseField;
use crate::params::TerrainParams;

/// Entry point for a renderer: one seeded field plus the resolution and
/// elevation settings it should be materialized with.
#[derive(Debug, Clone)]
pub struct TerrainSystem {
    field: NoiseField,
    params: TerrainParams,
}

impl TerrainSystem {
    /// Create new terrain system with specified parameters
    pub fn new(params: TerrainParams) -> Result<Self> {
        params.validate()?;
        let field = NoiseField::new(params.seed);
        debug!("Terrain system ready: {:?}", params);
        Ok(Self { field, params })
    }

    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    pub fn field(&self) -> &NoiseField {
        &self.field
    }

    /// Single-octave noise in `[0, 1]`.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        self.field.sample(x, y)
    }

    /// Multi-octave noise in `[0, 1]` using the configured octave count.
    pub fn combine(&self, x: f64, y: f64) -> Result<f64> {
        combine(&self.field, x, y, self.params.octaves)
    }

    /// Fresh heightmap at the configured resolution.
    pub fn generate_grid(&self) -> Result<HeightmapGrid> {
        generate_grid(
            &self.field,
            self.params.width,
            self.params.height,
            self.params.octaves,
        )
    }

    /// Fresh 8-bit heightmap texture at the configured resolution.
    pub fn generate_texture(&self) -> Result<HeightmapTexture> {
        Ok(HeightmapTexture::from_grid(&self.generate_grid()?))
    }

    /// Generate a heightmap and displace a vertex grid with it.
    pub fn build_mesh(&self) -> Result<VertexBuffer> {
        let grid = self.generate_grid()?;
        let buffer = build_vertex_buffer(&grid, self.params.spatial_step, self.params.elevation)?;
        debug!(
            "Built terrain mesh: {} vertices, {} triangles",
            buffer.vertices.len(),
            buffer.indices.len() / 3
        );
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ElevationRange;

    fn small_params() -> TerrainParams {
        TerrainParams {
            width: 12,
            height: 9,
            octaves: 4,
            ..Default::default()
        }
    }

    #[test]
    fn test_terrain_system_pipeline() {
        let system = TerrainSystem::new(small_params()).unwrap();

        let grid = system.generate_grid().unwrap();
        assert_eq!((grid.width(), grid.height()), (12, 9));

        let mesh = system.build_mesh().unwrap();
        assert_eq!(mesh.vertices.len(), system.params().vertex_count());
        assert_eq!(mesh.indices.len(), 11 * 8 * 6);

        let texture = system.generate_texture().unwrap();
        assert_eq!(texture.texels().len(), 12 * 9);
    }

    #[test]
    fn test_results_are_fresh_and_identical() {
        let system = TerrainSystem::new(small_params()).unwrap();
        let a = system.generate_grid().unwrap();
        let b = system.generate_grid().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_forwarded_sampling() {
        let system = TerrainSystem::new(small_params()).unwrap();
        let field = NoiseField::new(system.params().seed);

        assert_eq!(system.sample(0.3, 0.6), field.sample(0.3, 0.6));
        assert_eq!(
            system.combine(0.3, 0.6).unwrap(),
            combine(&field, 0.3, 0.6, 4).unwrap()
        );
    }

    #[test]
    fn test_mesh_respects_elevation() {
        let params = TerrainParams {
            elevation: ElevationRange::new(100.0, 110.0),
            ..small_params()
        };
        let mesh = TerrainSystem::new(params).unwrap().build_mesh().unwrap();
        assert!(mesh
            .vertices
            .iter()
            .all(|v| (100.0..=110.0).contains(&v.position[1])));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let params = TerrainParams {
            height: 0,
            ..Default::default()
        };
        assert!(TerrainSystem::new(params).is_err());
    }
}
