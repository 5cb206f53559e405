use lookout_geom::Vec3;

/// Cube sides in emission order. `Top` must stay first: the column color
/// rule keys off face index 0.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    Top = 0,
    Front = 1,
    Right = 2,
    Back = 3,
    Left = 4,
    Bottom = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Front,
        Face::Right,
        Face::Back,
        Face::Left,
        Face::Bottom,
    ];

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Unit-cube corner offsets, wound for the `0,1,2 / 0,2,3` fan.
    #[inline]
    pub fn corners(self) -> &'static [Vec3; 4] {
        &FACE_CORNERS[self.index()]
    }
}

const fn v(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

pub const FACE_CORNERS: [[Vec3; 4]; 6] = [
    // Top
    [v(1.0, 1.0, 0.0), v(0.0, 1.0, 0.0), v(0.0, 1.0, 1.0), v(1.0, 1.0, 1.0)],
    // Front
    [v(1.0, 1.0, 1.0), v(0.0, 1.0, 1.0), v(0.0, 0.0, 1.0), v(1.0, 0.0, 1.0)],
    // Right
    [v(1.0, 1.0, 0.0), v(1.0, 1.0, 1.0), v(1.0, 0.0, 1.0), v(1.0, 0.0, 0.0)],
    // Back
    [v(0.0, 1.0, 0.0), v(1.0, 1.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 0.0, 0.0)],
    // Left
    [v(0.0, 1.0, 1.0), v(0.0, 1.0, 0.0), v(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0)],
    // Bottom
    [v(1.0, 0.0, 1.0), v(0.0, 0.0, 1.0), v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0)],
];

#[cfg(test)]
mod tests {
    use super::*;

    fn outward_normal(face: Face) -> Vec3 {
        match face {
            Face::Top => Vec3::new(0.0, 1.0, 0.0),
            Face::Bottom => Vec3::new(0.0, -1.0, 0.0),
            Face::Right => Vec3::new(1.0, 0.0, 0.0),
            Face::Left => Vec3::new(-1.0, 0.0, 0.0),
            Face::Front => Vec3::new(0.0, 0.0, 1.0),
            Face::Back => Vec3::new(0.0, 0.0, -1.0),
        }
    }

    #[test]
    fn corners_lie_on_their_face_plane() {
        for face in Face::ALL {
            let n = outward_normal(face);
            let on_plane = |c: Vec3| {
                // Outward faces sit at 1 along +axis, 0 along -axis
                let d = c.dot(n);
                if n.x + n.y + n.z > 0.0 { d == 1.0 } else { d == 0.0 }
            };
            assert!(face.corners().iter().all(|&c| on_plane(c)), "{:?}", face);
        }
    }

    #[test]
    fn fan_triangles_wind_counter_clockwise_from_outside() {
        // Back-face culling keeps only triangles whose normal points out of the cube
        for face in Face::ALL {
            let c = face.corners();
            let n = outward_normal(face);
            let t0 = (c[1] - c[0]).cross(c[2] - c[0]);
            let t1 = (c[2] - c[0]).cross(c[3] - c[0]);
            assert!(t0.dot(n) > 0.0, "{:?} first triangle winds inward", face);
            assert!(t1.dot(n) > 0.0, "{:?} second triangle winds inward", face);
        }
    }

    #[test]
    fn each_face_has_four_distinct_corners() {
        for face in Face::ALL {
            let c = face.corners();
            for i in 0..4 {
                for j in (i + 1)..4 {
                    assert_ne!(c[i], c[j]);
                }
            }
        }
    }
}
