//! Heightmap texture and mesh export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{GrayImage, ImageFormat};
use log::info;

use crate::error::{Result, TerrainError};
use crate::remap::unit_to_channel_u8;
use crate::terrain::{HeightmapGrid, VertexBuffer};

/// 8-bit single-channel rendition of a heightmap (one byte per texel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightmapTexture {
    width: usize,
    height: usize,
    texels: Vec<u8>,
}

impl HeightmapTexture {
    /// Quantize every sample of `grid` into the `[0, 255]` channel domain.
    pub fn from_grid(grid: &HeightmapGrid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            texels: grid.samples().iter().map(|&s| unit_to_channel_u8(s)).collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major texel bytes.
    pub fn texels(&self) -> &[u8] {
        &self.texels
    }

    pub fn to_image(&self) -> Result<GrayImage> {
        let (Ok(width), Ok(height)) = (u32::try_from(self.width), u32::try_from(self.height))
        else {
            return Err(TerrainError::invalid(format!(
                "{}x{} texture exceeds image dimension limits",
                self.width, self.height
            )));
        };

        GrayImage::from_raw(width, height, self.texels.clone()).ok_or_else(|| {
            TerrainError::invalid(format!(
                "{} texels do not fill a {}x{} image",
                self.texels.len(),
                self.width,
                self.height
            ))
        })
    }

    /// Write the texture as a grayscale PNG.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.to_image()?.save_with_format(path, ImageFormat::Png)?;
        info!(
            "Wrote {}x{} heightmap to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(())
    }
}

/// Export a heightmap grid as an 8-bit grayscale PNG.
pub fn export_png(grid: &HeightmapGrid, path: &Path) -> Result<()> {
    HeightmapTexture::from_grid(grid).save_png(path)
}

/// Dump vertices as little-endian `f32` records: `x, y, z, u, v`.
pub fn write_vertex_buffer(buffer: &VertexBuffer, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for vertex in &buffer.vertices {
        for value in vertex.position.iter().chain(vertex.uv.iter()) {
            writer.write_all(&value.to_le_bytes())?;
        }
    }
    writer.flush()?;

    info!(
        "Wrote {} vertices to {}",
        buffer.vertices.len(),
        path.display()
    );
    Ok(())
}
