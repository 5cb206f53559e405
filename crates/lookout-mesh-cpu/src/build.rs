use lookout_geom::{Mat4, Vec3};
use lookout_terrain::HeightSample;

use crate::constants::{DEFAULT_BASE_ELEVATION, DIRT, GRASS};
use crate::emit::emit_cube;
use crate::face::Face;
use crate::mesh_build::Mesh;

/// Column colors: the top face of a column is grass, everything else dirt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub grass: [f32; 3],
    pub dirt: [f32; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            grass: GRASS,
            dirt: DIRT,
        }
    }
}

/// Turns heightmap columns into stacked unit cubes.
///
/// Every face of every cube is emitted; nothing is culled against
/// neighbours. Positions are multiplied by `bake` at build time, which is
/// the identity unless [`MeshBuilder::with_bake`] is used, so by default the
/// mesh is in world space and the renderer applies the camera per frame.
#[derive(Clone, Debug)]
pub struct MeshBuilder {
    base_elevation: i32,
    palette: Palette,
    bake: Mat4,
}

impl Default for MeshBuilder {
    fn default() -> Self {
        Self {
            base_elevation: DEFAULT_BASE_ELEVATION,
            palette: Palette::default(),
            bake: Mat4::IDENTITY,
        }
    }
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_elevation(mut self, base_elevation: i32) -> Self {
        self.base_elevation = base_elevation;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Bakes a fixed transform (typically `projection * view`) into every
    /// vertex. A baked mesh no longer follows the live camera.
    pub fn with_bake(mut self, bake: Mat4) -> Self {
        self.bake = bake;
        self
    }

    #[inline]
    pub fn base_elevation(&self) -> i32 {
        self.base_elevation
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Cubes a column contributes; zero when `height <= base_elevation`.
    #[inline]
    pub fn cube_count(&self, column: &HeightSample) -> usize {
        (column.height - self.base_elevation).max(0) as usize
    }

    /// Builds the mesh in column, then y, then face, then corner order.
    pub fn build(&self, columns: impl IntoIterator<Item = HeightSample>) -> Mesh {
        let mut mesh = Mesh::default();
        let mut n_columns = 0usize;
        for column in columns {
            mesh.reserve_cubes(self.cube_count(&column));
            self.push_column(&mut mesh, column);
            n_columns += 1;
        }
        log::debug!("meshed {} columns: {}", n_columns, mesh.stats());
        mesh
    }

    /// Appends the cube stack `base_elevation..height` of one column.
    pub fn push_column(&self, mesh: &mut Mesh, column: HeightSample) {
        let HeightSample { x, z, height } = column;
        for y in self.base_elevation..height {
            let is_top_cube = y == height - 1;
            let origin = Vec3::new(x as f32, y as f32, z as f32);
            emit_cube(mesh, origin, &self.bake, |face| {
                if is_top_cube && face == Face::Top {
                    self.palette.grass
                } else {
                    self.palette.dirt
                }
            });
        }
    }
}
