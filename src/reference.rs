//! The immutable solved-state reference geometry.
//!
//! The 26 sub-cubes are described parametrically: each one is a grid offset
//! in `{-1, 0, 1}^3` plus a category, and everything else (vertex positions,
//! sticker placement) is derived from that. The rotation engine copies this
//! data into the live pool at startup and snaps participant positions back to
//! it whenever a turn completes, so incremental floating-point error never
//! accumulates into committed state.

use crate::{CubeFace, Vertex, SUB_CUBE_COUNT, VERTEX_COUNT};

use ilattice::glam::Vec3;

/// Width of the full puzzle in model units.
pub const CUBE_WIDTH: f32 = 1.0;

/// Distance between neighboring sub-cube centers.
pub const SUB_CUBE_PITCH: f32 = CUBE_WIDTH / 3.0;

/// Fraction of the pitch a sub-cube actually occupies, leaving a visible gap
/// between neighbors.
pub const GAP_SCALE: f32 = 0.95;

/// The color of every face that doesn't carry a sticker.
pub const NEUTRAL: [f32; 3] = [0.5, 0.5, 0.5];

const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
const YELLOW: [f32; 3] = [1.0, 1.0, 0.0];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
const BLUE: [f32; 3] = [0.0, 0.0, 1.0];
const ORANGE: [f32; 3] = [1.0, 0.64, 0.0];
const RED: [f32; 3] = [1.0, 0.0, 0.0];

/// The sticker color shown on each face of the solved puzzle.
pub const fn sticker_color(face: CubeFace) -> [f32; 3] {
    match face {
        CubeFace::NegX => WHITE,
        CubeFace::PosX => YELLOW,
        CubeFace::NegY => GREEN,
        CubeFace::PosY => BLUE,
        CubeFace::NegZ => ORANGE,
        CubeFace::PosZ => RED,
    }
}

/// Category of a sub-cube, determined by how many puzzle faces it touches.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubCubeKind {
    /// Touches one puzzle face. Indices 0-5.
    Axis,
    /// Touches two puzzle faces. Indices 6-17.
    Edge,
    /// Touches three puzzle faces. Indices 18-25.
    Corner,
}

/// Parametric description of one sub-cube: its offset on the 3x3x3 grid and
/// its category. A face carries a sticker iff the sub-cube touches the puzzle
/// surface in that face's direction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SubCubeDef {
    /// Grid offset from the puzzle center, components in `{-1, 0, 1}`.
    pub grid: [i32; 3],
    pub kind: SubCubeKind,
}

const fn axis(x: i32, y: i32, z: i32) -> SubCubeDef {
    SubCubeDef {
        grid: [x, y, z],
        kind: SubCubeKind::Axis,
    }
}

const fn edge(x: i32, y: i32, z: i32) -> SubCubeDef {
    SubCubeDef {
        grid: [x, y, z],
        kind: SubCubeKind::Edge,
    }
}

const fn corner(x: i32, y: i32, z: i32) -> SubCubeDef {
    SubCubeDef {
        grid: [x, y, z],
        kind: SubCubeKind::Corner,
    }
}

/// The 26 sub-cubes in pool order: 6 axis, 12 edge, 8 corner.
pub const SUB_CUBES: [SubCubeDef; SUB_CUBE_COUNT] = [
    axis(-1, 0, 0),
    axis(1, 0, 0),
    axis(0, -1, 0),
    axis(0, 1, 0),
    axis(0, 0, -1),
    axis(0, 0, 1),
    edge(-1, -1, 0),
    edge(-1, 1, 0),
    edge(-1, 0, -1),
    edge(-1, 0, 1),
    edge(1, -1, 0),
    edge(1, 1, 0),
    edge(1, 0, -1),
    edge(1, 0, 1),
    edge(0, -1, -1),
    edge(0, -1, 1),
    edge(0, 1, -1),
    edge(0, 1, 1),
    corner(-1, -1, -1),
    corner(-1, -1, 1),
    corner(-1, 1, -1),
    corner(-1, 1, 1),
    corner(1, -1, -1),
    corner(1, -1, 1),
    corner(1, 1, -1),
    corner(1, 1, 1),
];

/// Whether `face` of the sub-cube at `grid` carries a sticker.
#[inline]
pub fn face_is_stickered(grid: [i32; 3], face: CubeFace) -> bool {
    grid[face.axis().index()] == face.signum()
}

/// Builds the solved-state vertex data for all 26 sub-cubes.
pub fn solved_vertices() -> Vec<Vertex> {
    let half_extent = 0.5 * SUB_CUBE_PITCH * GAP_SCALE;

    let mut vertices = Vec::with_capacity(VERTEX_COUNT);
    for def in SUB_CUBES.iter() {
        let center = Vec3::new(
            def.grid[0] as f32 * SUB_CUBE_PITCH,
            def.grid[1] as f32 * SUB_CUBE_PITCH,
            def.grid[2] as f32 * SUB_CUBE_PITCH,
        );
        let min = center - Vec3::splat(half_extent);
        let max = center + Vec3::splat(half_extent);

        for face in CubeFace::ALL {
            let color = if face_is_stickered(def.grid, face) {
                sticker_color(face)
            } else {
                NEUTRAL
            };
            for position in face.box_face_vertices(min, max) {
                vertices.push(Vertex {
                    position: position.to_array(),
                    color,
                });
            }
        }
    }

    vertices
}

/// The static triangle index buffer for the puzzle mesh, generated once and
/// owned by the render backend.
///
/// Faces never share vertices, so the indices are simply the identity
/// sequence; the buffer exists so the pool can be drawn as an indexed
/// triangle list.
pub fn cube_indices() -> Vec<u16> {
    (0..VERTEX_COUNT as u16).collect()
}
