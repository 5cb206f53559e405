use lookout_geom::{Mat4, Vec3};

use crate::constants::FACE_FAN;
use crate::face::Face;
use crate::mesh_build::{Mesh, Vertex};

/// Appends one face: six fan indices referencing the four corners that follow.
#[inline]
pub(crate) fn emit_face(mesh: &mut Mesh, face: Face, origin: Vec3, color: [f32; 3], bake: &Mat4) {
    let start = mesh.vertices.len() as u32;
    mesh.indices.extend(FACE_FAN.iter().map(|&k| start + k));
    for &corner in face.corners() {
        mesh.vertices.push(Vertex {
            position: bake.transform_point(corner + origin),
            color,
        });
    }
}

/// Appends all six faces of the unit cube at `origin`, choosing each face color.
#[inline]
pub(crate) fn emit_cube(
    mesh: &mut Mesh,
    origin: Vec3,
    bake: &Mat4,
    mut color_for: impl FnMut(Face) -> [f32; 3],
) {
    for face in Face::ALL {
        emit_face(mesh, face, origin, color_for(face), bake);
    }
}
