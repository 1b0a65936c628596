//! An animated face-turn engine for a 3x3x3 twisty puzzle mesh.
//!
//! The puzzle is modeled as 26 independently colored **sub-cubes** (6 axis +
//! 12 edge + 8 corner), each owning a contiguous range of 36 vertices (6
//! faces, two triangles each) inside one flat vertex pool. A **face turn**
//! rotates the 9 sub-cubes of one puzzle face by a fixed angular increment
//! every tick; after a full quarter turn the engine snaps the participants
//! back onto the solved-state reference geometry and permutes their sticker
//! colors exactly as a physical cube would. Sub-cubes outside the turned
//! layer are never mutated.
//!
//! The crate contains no graphics code. A render backend uploads
//! [`RotationEngine::vertices`] once per frame (the [`Vertex`] layout is
//! [`bytemuck`]-castable) and draws it as an indexed triangle list using the
//! static [`cube_indices`] buffer.
//!
//! # Example Code
//!
//! ```
//! use twist_mesh::{FaceTurn, RotationEngine, TICKS_PER_TURN, VERTEX_COUNT};
//!
//! let mut engine = RotationEngine::new();
//!
//! // The driver asks for a turn while the engine is idle...
//! assert!(engine.request_turn(FaceTurn::Right));
//!
//! // ...then ticks the engine once per rendered frame. After each tick the
//! // render backend uploads the live vertex pool and draws it.
//! let mut completed = None;
//! for _ in 0..TICKS_PER_TURN {
//!     completed = engine.tick();
//!     assert_eq!(engine.vertices().len(), VERTEX_COUNT);
//! }
//!
//! // A quarter turn always takes exactly `TICKS_PER_TURN` ticks.
//! assert_eq!(completed, Some(FaceTurn::Right));
//! ```

mod engine;
mod pool;
mod reference;
mod registry;

pub mod geometry;

pub use engine::*;
#[doc(inline)]
pub use geometry::*;
pub use pool::*;
pub use reference::*;
pub use registry::*;

pub use ilattice;

use bytemuck::{Pod, Zeroable};
use core::ops::Range;

/// Number of sub-cubes composing the puzzle: 6 axis + 12 edge + 8 corner.
pub const SUB_CUBE_COUNT: usize = 26;

/// Vertices per sub-cube face: two triangles, no vertex sharing.
pub const VERTS_PER_FACE: usize = 6;

/// Faces per sub-cube.
pub const FACES_PER_SUB_CUBE: usize = 6;

/// Vertices per sub-cube.
pub const VERTS_PER_SUB_CUBE: usize = FACES_PER_SUB_CUBE * VERTS_PER_FACE;

/// Total vertices in the puzzle mesh.
pub const VERTEX_COUNT: usize = SUB_CUBE_COUNT * VERTS_PER_SUB_CUBE;

/// One vertex of the puzzle mesh. A vertex has no identity beyond its slot
/// index in the pool.
///
/// The layout is 6 tightly packed floats, so a `&[Vertex]` can be handed to
/// the render backend with `bytemuck::cast_slice`.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vertex {
    pub position: [f32; 3],
    /// RGB, linear.
    pub color: [f32; 3],
}

/// The vertex range `[i * 36, (i + 1) * 36)` of one sub-cube.
///
/// Sub-cube indices are a closed set; an out-of-range index is a programming
/// error and panics.
pub(crate) fn sub_cube_range(sub_cube: usize) -> Range<usize> {
    assert!(
        sub_cube < SUB_CUBE_COUNT,
        "sub-cube index {sub_cube} out of range 0..{SUB_CUBE_COUNT}"
    );
    let start = sub_cube * VERTS_PER_SUB_CUBE;
    start..start + VERTS_PER_SUB_CUBE
}

/// The 6-vertex range of one face of one sub-cube.
pub(crate) fn face_range(sub_cube: usize, face: CubeFace) -> Range<usize> {
    let start = sub_cube_range(sub_cube).start + face.index() * VERTS_PER_FACE;
    start..start + VERTS_PER_FACE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_six_packed_floats() {
        assert_eq!(core::mem::size_of::<Vertex>(), 6 * 4);
        let vertex = Vertex {
            position: [1.0, 2.0, 3.0],
            color: [4.0, 5.0, 6.0],
        };
        let floats: &[f32] = bytemuck::cast_slice(core::slice::from_ref(&vertex));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn sub_cube_ranges_partition_the_pool() {
        let mut next = 0;
        for sub_cube in 0..SUB_CUBE_COUNT {
            let range = sub_cube_range(sub_cube);
            assert_eq!(range.start, next);
            next = range.end;
        }
        assert_eq!(next, VERTEX_COUNT);
    }

    #[test]
    fn face_ranges_tile_a_sub_cube() {
        let mut next = sub_cube_range(3).start;
        for face in CubeFace::ALL {
            let range = face_range(3, face);
            assert_eq!(range.start, next);
            next = range.end;
        }
        assert_eq!(next, sub_cube_range(3).end);
    }

    #[test]
    #[should_panic]
    fn panics_on_out_of_range_sub_cube() {
        sub_cube_range(SUB_CUBE_COUNT);
    }
}
