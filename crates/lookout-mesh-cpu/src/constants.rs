//! Shared constants for lookout-mesh-cpu.

/// Elevation of the lowest meshed cube; terrain below it is not rendered.
pub const DEFAULT_BASE_ELEVATION: i32 = 65;

pub const GRASS: [f32; 3] = [0.365, 0.486, 0.082];
pub const DIRT: [f32; 3] = [0.51, 0.329, 0.196];

pub const FACES_PER_CUBE: usize = 6;
pub const VERTS_PER_FACE: usize = 4;
pub const INDICES_PER_FACE: usize = 6;
pub const VERTS_PER_CUBE: usize = FACES_PER_CUBE * VERTS_PER_FACE;
pub const INDICES_PER_CUBE: usize = FACES_PER_CUBE * INDICES_PER_FACE;

/// Two-triangle fan over a face's four corners.
pub(crate) const FACE_FAN: [u32; INDICES_PER_FACE] = [0, 1, 2, 0, 2, 3];
