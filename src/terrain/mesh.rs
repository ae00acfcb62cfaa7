//! Vertex displacement buffer built from a heightmap grid.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use super::heightmap::HeightmapGrid;
use crate::error::{Result, TerrainError};
use crate::params::ElevationRange;
use crate::remap::{remap, unit_to_channel, CHANNEL_MAX};

/// Vertex data for terrain mesh (position + UV coordinates)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Displaced terrain vertices ready to hand to a renderer.
///
/// One vertex per grid cell in row-major order. Row index drives `x`, column
/// index drives `z`, and `y` carries the remapped elevation.
#[derive(Debug, Clone)]
pub struct VertexBuffer {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    width: usize,
    height: usize,
    /// Set whenever vertex data changed since the renderer last uploaded it
    needs_upload: bool,
}

impl VertexBuffer {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Displaced `y` of the vertex at `(row, col)`.
    ///
    /// `None` outside the grid, or if the vertex was removed after building.
    pub fn elevation_at(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.vertices
            .get(row * self.width + col)
            .map(|v| v.position[1])
    }

    /// Vertex data as raw bytes for GPU upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    pub fn needs_upload(&self) -> bool {
        self.needs_upload
    }

    /// Called by the renderer once the current data is on the GPU.
    pub fn mark_uploaded(&mut self) {
        self.needs_upload = false;
    }

    /// Flag the buffer for re-upload after the renderer edited vertices.
    pub fn mark_dirty(&mut self) {
        self.needs_upload = true;
    }
}

/// Build displaced vertices from `grid`.
///
/// Each sample is first rescaled to the `[0, 255]` channel domain with
/// [`unit_to_channel`], then remapped from that domain into `elevation`.
///
/// # Arguments
/// * `grid` - Heightmap samples in `[0, 1]`
/// * `spatial_step` - Distance between neighbouring vertices (world units)
/// * `elevation` - Target `y` range
///
/// # Errors
/// `InvalidArgument` for a non-positive or non-finite step, an invalid
/// elevation range, or a grid with more vertices than `u32` indices reach.
pub fn build_vertex_buffer(
    grid: &HeightmapGrid,
    spatial_step: f32,
    elevation: ElevationRange,
) -> Result<VertexBuffer> {
    if !spatial_step.is_finite() || spatial_step <= 0.0 {
        return Err(TerrainError::invalid(format!(
            "spatial step must be positive and finite, got {spatial_step}"
        )));
    }
    elevation.validate()?;

    let width = grid.width();
    let height = grid.height();
    check_index_range(width, height)?;
    let u_span = (width.max(2) - 1) as f32;
    let v_span = (height.max(2) - 1) as f32;

    let mut vertices = Vec::with_capacity(grid.len());
    for (row, samples) in grid.rows().enumerate() {
        for (col, &sample) in samples.iter().enumerate() {
            let y = remap(
                unit_to_channel(sample),
                0.0,
                CHANNEL_MAX,
                elevation.min as f64,
                elevation.max as f64,
            )?;
            let position = Vec3::new(
                row as f32 * spatial_step,
                y as f32,
                col as f32 * spatial_step,
            );

            vertices.push(Vertex {
                position: position.to_array(),
                uv: [col as f32 / u_span, row as f32 / v_span],
            });
        }
    }

    Ok(VertexBuffer {
        vertices,
        indices: generate_grid_indices(width, height)?,
        width,
        height,
        needs_upload: true,
    })
}

/// Triangle indices for a `width x height` vertex grid, two triangles per quad.
///
/// Winding is counter-clockwise seen from +Y given the row→x, col→z layout.
///
/// # Errors
/// `InvalidArgument` when `width * height` vertices can't all be addressed by
/// a `u32` index.
pub fn generate_grid_indices(width: usize, height: usize) -> Result<Vec<u32>> {
    check_index_range(width, height)?;

    let quads = width.saturating_sub(1) * height.saturating_sub(1);
    let mut indices = Vec::with_capacity(quads * 6);

    for row in 0..height.saturating_sub(1) {
        for col in 0..width.saturating_sub(1) {
            let top_left = (row * width + col) as u32;
            let top_right = top_left + 1;
            let bottom_left = ((row + 1) * width + col) as u32;
            let bottom_right = bottom_left + 1;

            indices.extend_from_slice(&[
                top_left,
                top_right,
                bottom_left,
                top_right,
                bottom_right,
                bottom_left,
            ]);
        }
    }

    Ok(indices)
}

fn check_index_range(width: usize, height: usize) -> Result<()> {
    let fits = width
        .checked_mul(height)
        .is_some_and(|count| u32::try_from(count).is_ok());
    if !fits {
        return Err(TerrainError::invalid(format!(
            "{width}x{height} vertices exceed the u32 index range"
        )));
    }
    Ok(())
}
