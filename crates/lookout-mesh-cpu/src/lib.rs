//! CPU meshing crate: heightmap columns to a static cube mesh (engine-only).
#![forbid(unsafe_code)]

mod build;
pub mod constants;
mod emit;
mod face;
mod mesh_build;

pub use build::{MeshBuilder, Palette};
pub use face::{FACE_CORNERS, Face};
pub use mesh_build::{Mesh, MeshPart, MeshStats, VERTEX_LAYOUT, Vertex, VertexLayout};

use lookout_terrain::{HeightMap, RegionWindow};

/// Filters `map` to `window` and meshes the surviving columns.
pub fn build_region_mesh(map: &HeightMap, window: RegionWindow, builder: &MeshBuilder) -> Mesh {
    builder.build(window.filter(map))
}
