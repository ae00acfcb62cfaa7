//! Terrain stage - generate a procedural heightmap and its displaced mesh
//!
//! Writes the heightmap texture a viewer would sample, and optionally the
//! vertex buffer it would upload.

use std::time::Instant;

use clap::Parser;
use log::info;

use terrain_stage::cli::Args;
use terrain_stage::{build_vertex_buffer, export_png, write_vertex_buffer, TerrainSystem};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let params = args.terrain_params();
    info!(
        "Generating {}x{} terrain (seed {}, {} octaves)",
        params.width, params.height, params.seed, params.octaves
    );

    let start = Instant::now();
    let system = TerrainSystem::new(params)?;

    let grid = system.generate_grid()?;
    let (lo, hi) = grid.min_max();
    info!("Heightmap range: [{:.4}, {:.4}]", lo, hi);
    export_png(&grid, &args.output)?;

    if let Some(path) = &args.vertices {
        let p = system.params();
        let mesh = build_vertex_buffer(&grid, p.spatial_step, p.elevation)?;
        write_vertex_buffer(&mesh, path)?;
    }

    info!("Done in {:.2}ms", start.elapsed().as_secs_f64() * 1000.0);
    Ok(())
}
