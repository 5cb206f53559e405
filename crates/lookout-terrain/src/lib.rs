//! Heightmap sources, terrain config, and the region window filter.
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod heightmap;
pub mod region;

pub use config::{NoiseParams, TerrainConfig, TerrainSource};
pub use error::TerrainError;
pub use heightmap::{HeightMap, HeightSample};
pub use region::{RegionOffsets, RegionWindow};
