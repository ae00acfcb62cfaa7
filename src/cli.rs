//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::noise::DEFAULT_SEED;
use crate::params::{ElevationRange, TerrainParams};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "terrain-stage")]
#[command(about = "Generate a procedural terrain heightmap and mesh", long_about = None)]
pub struct Args {
    /// RNG seed for noise generation
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u32,

    /// Heightmap width in texels
    #[arg(long, default_value_t = 256)]
    pub width: usize,

    /// Heightmap height in texels
    #[arg(long, default_value_t = 256)]
    pub height: usize,

    /// Number of noise octaves to sum
    #[arg(long, default_value_t = 8)]
    pub octaves: u32,

    /// Distance between neighbouring mesh vertices (world units)
    #[arg(long, value_name = "UNITS", default_value_t = 1.0)]
    pub spatial_step: f32,

    /// Lowest displaced elevation (world units)
    #[arg(long, value_name = "UNITS", default_value_t = 0.0, allow_negative_numbers = true)]
    pub min_elevation: f32,

    /// Highest displaced elevation (world units)
    #[arg(long, value_name = "UNITS", default_value_t = 500.0, allow_negative_numbers = true)]
    pub max_elevation: f32,

    /// Output heightmap PNG path
    #[arg(long, default_value = "heightmap.png")]
    pub output: PathBuf,

    /// Also write displaced vertices as raw little-endian f32 records
    #[arg(long, value_name = "PATH")]
    pub vertices: Option<PathBuf>,
}

impl Args {
    /// Terrain parameters described by these arguments
    pub fn terrain_params(&self) -> TerrainParams {
        TerrainParams {
            seed: self.seed,
            width: self.width,
            height: self.height,
            octaves: self.octaves,
            spatial_step: self.spatial_step,
            elevation: ElevationRange::new(self.min_elevation, self.max_elevation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_params() {
        let args = Args::parse_from(["terrain-stage"]);
        let params = args.terrain_params();
        let defaults = TerrainParams::default();

        assert_eq!(params.seed, defaults.seed);
        assert_eq!((params.width, params.height), (defaults.width, defaults.height));
        assert_eq!(params.octaves, defaults.octaves);
        assert_eq!(params.elevation, defaults.elevation);
        assert_eq!(args.output, PathBuf::from("heightmap.png"));
        assert!(args.vertices.is_none());
    }

    #[test]
    fn test_parse_overrides() {
        let args = Args::parse_from([
            "terrain-stage",
            "--seed",
            "9",
            "--width",
            "64",
            "--height",
            "32",
            "--octaves",
            "3",
            "--min-elevation",
            "-50",
            "--max-elevation",
            "50",
            "--vertices",
            "mesh.bin",
        ]);
        let params = args.terrain_params();

        assert_eq!(params.seed, 9);
        assert_eq!((params.width, params.height), (64, 32));
        assert_eq!(params.octaves, 3);
        assert_eq!(params.elevation, ElevationRange::new(-50.0, 50.0));
        assert_eq!(args.vertices, Some(PathBuf::from("mesh.bin")));
    }
}
