//! One-shot CPU setup: heightmap, region window, mesh, and camera from one viewpoint.

use std::error::Error;
use std::path::Path;
use std::time::Instant;

use lookout_mesh_cpu::{Mesh, build_region_mesh};
use lookout_terrain::{HeightMap, RegionWindow, TerrainConfig, TerrainSource};

use crate::camera::{LookCamera, Projection};
use crate::config::ViewerConfig;

/// Resolves the heightmap: an explicit file wins over the configured source.
pub fn load_heightmap(
    cfg: &TerrainConfig,
    override_path: Option<&Path>,
) -> Result<HeightMap, Box<dyn Error>> {
    let map = match (override_path, &cfg.source) {
        (Some(path), _) => HeightMap::load(path)?,
        (None, TerrainSource::File) => {
            let path = cfg
                .path
                .as_deref()
                .ok_or("terrain source is \"file\" but no path is set")?;
            HeightMap::load(path)?
        }
        (None, TerrainSource::Noise) => HeightMap::generate(&cfg.noise)?,
    };
    match map.bounds() {
        Some((x0, x1, z0, z1)) => log::info!(
            "heightmap: {} columns over x {}..={} z {}..={}",
            map.len(),
            x0,
            x1,
            z0,
            z1
        ),
        None => log::warn!("heightmap is empty"),
    }
    Ok(map)
}

pub struct Scene {
    pub camera: LookCamera,
    pub projection: Projection,
    pub region: RegionWindow,
    pub mesh: Mesh,
}

impl Scene {
    /// Meshes the region around the configured viewpoint and places the camera there.
    pub fn build(cfg: &ViewerConfig, map: &HeightMap) -> Scene {
        let viewpoint = cfg.camera.viewpoint();
        let region = RegionWindow::around(viewpoint, &cfg.region);
        log::info!(
            "region x ({:.1}, {:.1}) z ({:.1}, {:.1})",
            region.x_min,
            region.x_max,
            region.z_min,
            region.z_max
        );
        let builder = cfg.mesh.builder();
        let start = Instant::now();
        let mesh = build_region_mesh(map, region, &builder);
        log::info!("mesh built in {:.1?}: {}", start.elapsed(), mesh.stats());
        if mesh.is_empty() {
            log::warn!("no terrain above y={} inside the region", builder.base_elevation());
        }
        Scene {
            camera: cfg.camera.build(),
            projection: cfg.camera.projection(),
            region,
            mesh,
        }
    }
}
