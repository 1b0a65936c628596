use super::CubeFace;

use ilattice::glam::Vec3;

impl CubeFace {
    /// The 6 vertices (two triangles) of this face of the box `[min, max]`,
    /// wound clockwise when viewed from outside the box along the outward
    /// normal.
    #[inline]
    pub fn box_face_vertices(&self, min: Vec3, max: Vec3) -> [Vec3; 6] {
        FACE_CORNERS[self.index()].map(|pick| select_corner(min, max, pick))
    }
}

/// For each face, the corner of `{min, max}` selected by each of its 6
/// vertices (0 picks `min`, 1 picks `max`, per component). The order encodes
/// the clockwise winding.
const FACE_CORNERS: [[[u8; 3]; 6]; 6] = [
    // -X
    [
        [0, 1, 0],
        [0, 0, 1],
        [0, 0, 0],
        [0, 1, 0],
        [0, 1, 1],
        [0, 0, 1],
    ],
    // +X
    [
        [1, 1, 0],
        [1, 0, 0],
        [1, 0, 1],
        [1, 1, 0],
        [1, 0, 1],
        [1, 1, 1],
    ],
    // -Y
    [
        [0, 0, 0],
        [0, 0, 1],
        [1, 0, 1],
        [0, 0, 0],
        [1, 0, 1],
        [1, 0, 0],
    ],
    // +Y
    [
        [0, 1, 0],
        [1, 1, 0],
        [1, 1, 1],
        [0, 1, 0],
        [1, 1, 1],
        [0, 1, 1],
    ],
    // -Z
    [
        [0, 0, 0],
        [1, 0, 0],
        [1, 1, 0],
        [0, 0, 0],
        [1, 1, 0],
        [0, 1, 0],
    ],
    // +Z
    [
        [0, 0, 1],
        [0, 1, 1],
        [1, 1, 1],
        [0, 0, 1],
        [1, 1, 1],
        [1, 0, 1],
    ],
];

#[inline]
fn select_corner(min: Vec3, max: Vec3, pick: [u8; 3]) -> Vec3 {
    Vec3::new(
        if pick[0] == 0 { min.x } else { max.x },
        if pick[1] == 0 { min.y } else { max.y },
        if pick[2] == 0 { min.z } else { max.z },
    )
}
