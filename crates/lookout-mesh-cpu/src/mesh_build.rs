use lookout_geom::{Aabb, Vec3, Vec4};

use crate::constants::{INDICES_PER_CUBE, INDICES_PER_FACE, VERTS_PER_CUBE, VERTS_PER_FACE};

/// One emitted face corner. `#[repr(C)]` keeps the GPU layout described by
/// [`VERTEX_LAYOUT`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Vertex {
    pub position: Vec4,
    pub color: [f32; 3],
}

/// Interleaved attribute layout of [`Vertex`], in floats and bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexLayout {
    pub position_components: usize,
    pub color_components: usize,
    pub position_offset: usize,
    pub color_offset: usize,
    pub stride: usize,
}

pub const VERTEX_LAYOUT: VertexLayout = VertexLayout {
    position_components: 4,
    color_components: 3,
    position_offset: 0,
    color_offset: 4 * std::mem::size_of::<f32>(),
    stride: 7 * std::mem::size_of::<f32>(),
};

/// Triangle list over `vertices`; every consecutive index triple is a triangle.
#[derive(Default, Clone, Debug)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Pre-reserve capacity for `n_cubes` full cubes.
    #[inline]
    pub fn reserve_cubes(&mut self, n_cubes: usize) {
        self.vertices.reserve(n_cubes * VERTS_PER_CUBE);
        self.indices.reserve(n_cubes * INDICES_PER_CUBE);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.vertices.len() / VERTS_PER_FACE
    }

    #[inline]
    pub fn cube_count(&self) -> usize {
        self.vertices.len() / VERTS_PER_CUBE
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Flattens the vertices into tightly packed floats following [`VERTEX_LAYOUT`].
    pub fn as_floats(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.vertices.len() * 7);
        for v in &self.vertices {
            out.extend_from_slice(&v.position.to_array());
            out.extend_from_slice(&v.color);
        }
        out
    }

    /// True when every position is a plain world-space point (`w == 1`).
    pub fn is_world_space(&self) -> bool {
        self.vertices.iter().all(|v| v.position.w == 1.0)
    }

    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.vertices.iter().map(|v| v.position.truncate()))
    }

    pub fn stats(&self) -> MeshStats {
        MeshStats {
            cubes: self.cube_count(),
            faces: self.face_count(),
            vertices: self.vertices.len(),
            indices: self.indices.len(),
            bounds: self.bounds(),
        }
    }

    /// Splits the mesh into contiguous face runs holding at most
    /// `max_vertices` vertices each, with indices rebased to the run.
    /// Faces never straddle two parts.
    pub fn split_faces(&self, max_vertices: usize) -> Vec<MeshPart<'_>> {
        let faces_per_part = (max_vertices / VERTS_PER_FACE).max(1);
        let total_faces = self.face_count();
        let mut parts = Vec::with_capacity(total_faces.div_ceil(faces_per_part));
        let mut face = 0usize;
        while face < total_faces {
            let take = (total_faces - face).min(faces_per_part);
            let v_start = face * VERTS_PER_FACE;
            let v_end = v_start + take * VERTS_PER_FACE;
            let i_start = face * INDICES_PER_FACE;
            let i_end = i_start + take * INDICES_PER_FACE;
            parts.push(MeshPart {
                vertices: &self.vertices[v_start..v_end],
                indices: self.indices[i_start..i_end]
                    .iter()
                    .map(|&i| i - v_start as u32)
                    .collect(),
            });
            face += take;
        }
        parts
    }
}

/// A slice of a [`Mesh`] small enough for a 16-bit index buffer.
#[derive(Clone, Debug)]
pub struct MeshPart<'a> {
    pub vertices: &'a [Vertex],
    pub indices: Vec<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshStats {
    pub cubes: usize,
    pub faces: usize,
    pub vertices: usize,
    pub indices: usize,
    pub bounds: Option<Aabb>,
}

impl std::fmt::Display for MeshStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} cubes, {} faces, {} vertices, {} indices",
            self.cubes, self.faces, self.vertices, self.indices
        )?;
        if let Some(bb) = self.bounds {
            let Vec3 { x, y, z } = bb.size();
            write!(f, ", extent {:.0}x{:.0}x{:.0}", x, y, z)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_repr() {
        assert_eq!(std::mem::size_of::<Vertex>(), VERTEX_LAYOUT.stride);
        assert_eq!(VERTEX_LAYOUT.stride, 28);
        assert_eq!(VERTEX_LAYOUT.color_offset, 16);
        assert_eq!(std::mem::offset_of!(Vertex, position), VERTEX_LAYOUT.position_offset);
        assert_eq!(std::mem::offset_of!(Vertex, color), VERTEX_LAYOUT.color_offset);
    }

    #[test]
    fn as_floats_is_tightly_packed() {
        let mesh = Mesh {
            vertices: vec![
                Vertex { position: Vec4::new(1.0, 2.0, 3.0, 1.0), color: [0.1, 0.2, 0.3] },
                Vertex { position: Vec4::new(4.0, 5.0, 6.0, 1.0), color: [0.4, 0.5, 0.6] },
            ],
            indices: vec![],
        };
        assert_eq!(
            mesh.as_floats(),
            vec![1.0, 2.0, 3.0, 1.0, 0.1, 0.2, 0.3, 4.0, 5.0, 6.0, 1.0, 0.4, 0.5, 0.6]
        );
    }

    #[test]
    fn empty_mesh_has_no_bounds() {
        let mesh = Mesh::default();
        assert!(mesh.is_empty());
        assert_eq!(mesh.stats().bounds, None);
        assert!(mesh.split_faces(64).is_empty());
        assert_eq!(mesh.stats().to_string(), "0 cubes, 0 faces, 0 vertices, 0 indices");
    }
}
