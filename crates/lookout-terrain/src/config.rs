use serde::Deserialize;
use std::path::PathBuf;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TerrainSource {
    #[default]
    Noise,
    File,
}

/// `[terrain]` section of the viewer config.
#[derive(Clone, Debug, Deserialize, Default)]
pub struct TerrainConfig {
    #[serde(default)]
    pub source: TerrainSource,
    /// Heightmap table read when `source = "file"`.
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub noise: NoiseParams,
}

/// Procedural heightmap: one column per integer cell of
/// `[x_min, x_max) x [z_min, z_max)`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NoiseParams {
    #[serde(default = "default_seed")]
    pub seed: i32,
    #[serde(default = "default_frequency")]
    pub frequency: f32,
    #[serde(default = "default_min_height")]
    pub min_height: i32,
    #[serde(default = "default_max_height")]
    pub max_height: i32,
    #[serde(default = "default_x_min")]
    pub x_min: i32,
    #[serde(default = "default_x_max")]
    pub x_max: i32,
    #[serde(default = "default_z_min")]
    pub z_min: i32,
    #[serde(default = "default_z_max")]
    pub z_max: i32,
}

fn default_seed() -> i32 {
    1337
}
fn default_frequency() -> f32 {
    0.02
}
fn default_min_height() -> i32 {
    60
}
fn default_max_height() -> i32 {
    100
}
fn default_x_min() -> i32 {
    -256
}
fn default_x_max() -> i32 {
    0
}
fn default_z_min() -> i32 {
    -64
}
fn default_z_max() -> i32 {
    128
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            frequency: default_frequency(),
            min_height: default_min_height(),
            max_height: default_max_height(),
            x_min: default_x_min(),
            x_max: default_x_max(),
            z_min: default_z_min(),
            z_max: default_z_max(),
        }
    }
}

impl NoiseParams {
    pub fn column_count(&self) -> usize {
        let w = (self.x_max - self.x_min).max(0) as usize;
        let d = (self.z_max - self.z_min).max(0) as usize;
        w * d
    }
}
