use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

use lookout_geom::Vec3;
use lookout_mesh_cpu::constants::{DEFAULT_BASE_ELEVATION, DIRT, GRASS};
use lookout_mesh_cpu::{MeshBuilder, Palette};
use lookout_terrain::{RegionOffsets, TerrainConfig};

use crate::camera::{
    DEFAULT_PITCH, DEFAULT_SENSITIVITY, DEFAULT_YAW, LookCamera, Projection,
};

/// Everything `lookout.toml` can set. Missing sections and fields fall back
/// to the defaults below.
#[derive(Clone, Debug, Deserialize, Default)]
pub struct ViewerConfig {
    #[serde(default)]
    pub window: Window,
    #[serde(default)]
    pub camera: Camera,
    #[serde(default)]
    pub region: RegionOffsets,
    #[serde(default)]
    pub mesh: Mesh,
    #[serde(default)]
    pub terrain: TerrainConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Window {
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_target_fps")]
    pub target_fps: u32,
    #[serde(default = "default_clear_color")]
    pub clear_color: [f32; 3],
}
fn default_width() -> i32 {
    800
}
fn default_height() -> i32 {
    600
}
fn default_title() -> String {
    "Lookout".into()
}
fn default_target_fps() -> u32 {
    60
}
fn default_clear_color() -> [f32; 3] {
    [0.53, 0.81, 0.92]
}
impl Default for Window {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            title: default_title(),
            target_fps: default_target_fps(),
            clear_color: default_clear_color(),
        }
    }
}

/// The initial viewpoint. Its position both anchors the region window and
/// places the camera.
#[derive(Clone, Debug, Deserialize)]
pub struct Camera {
    #[serde(default = "default_position")]
    pub position: [f32; 3],
    #[serde(default = "default_yaw")]
    pub yaw: f32,
    #[serde(default = "default_pitch")]
    pub pitch: f32,
    #[serde(default = "default_sensitivity")]
    pub sensitivity: f32,
    #[serde(default = "default_fov")]
    pub fov_y_degrees: f32,
    #[serde(default = "default_near")]
    pub near: f32,
    #[serde(default = "default_far")]
    pub far: f32,
}
fn default_position() -> [f32; 3] {
    [-129.906143, 110.205849, 3.054655]
}
fn default_yaw() -> f32 {
    DEFAULT_YAW
}
fn default_pitch() -> f32 {
    DEFAULT_PITCH
}
fn default_sensitivity() -> f32 {
    DEFAULT_SENSITIVITY
}
fn default_fov() -> f32 {
    45.0
}
fn default_near() -> f32 {
    0.1
}
fn default_far() -> f32 {
    2000.0
}
impl Default for Camera {
    fn default() -> Self {
        Self {
            position: default_position(),
            yaw: default_yaw(),
            pitch: default_pitch(),
            sensitivity: default_sensitivity(),
            fov_y_degrees: default_fov(),
            near: default_near(),
            far: default_far(),
        }
    }
}

impl Camera {
    pub fn viewpoint(&self) -> Vec3 {
        let [x, y, z] = self.position;
        Vec3::new(x, y, z)
    }

    pub fn build(&self) -> LookCamera {
        LookCamera::with_orientation(self.viewpoint(), self.yaw, self.pitch, self.sensitivity)
    }

    pub fn projection(&self) -> Projection {
        Projection {
            fov_y_degrees: self.fov_y_degrees,
            near: self.near,
            far: self.far,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Mesh {
    #[serde(default = "default_base_elevation")]
    pub base_elevation: i32,
    #[serde(default = "default_grass")]
    pub grass: [f32; 3],
    #[serde(default = "default_dirt")]
    pub dirt: [f32; 3],
}
fn default_base_elevation() -> i32 {
    DEFAULT_BASE_ELEVATION
}
fn default_grass() -> [f32; 3] {
    GRASS
}
fn default_dirt() -> [f32; 3] {
    DIRT
}
impl Default for Mesh {
    fn default() -> Self {
        Self {
            base_elevation: default_base_elevation(),
            grass: default_grass(),
            dirt: default_dirt(),
        }
    }
}

impl Mesh {
    pub fn builder(&self) -> MeshBuilder {
        MeshBuilder::new()
            .with_base_elevation(self.base_elevation)
            .with_palette(Palette {
                grass: self.grass,
                dirt: self.dirt,
            })
    }
}

pub fn load_from_path(path: &Path) -> Result<ViewerConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let cfg: ViewerConfig = toml::from_str(&s)?;
    Ok(cfg)
}

/// Loads `path` when it exists; otherwise logs and uses built-in defaults.
pub fn load_or_default(path: &Path) -> Result<ViewerConfig, Box<dyn Error>> {
    if path.exists() {
        let cfg = load_from_path(path)?;
        log::info!("config loaded from {}", path.display());
        Ok(cfg)
    } else {
        log::warn!("config {} not found; using defaults", path.display());
        Ok(ViewerConfig::default())
    }
}
