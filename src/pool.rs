//! The live vertex pool: the mutable working copy of the puzzle mesh.

use crate::reference::solved_vertices;
use crate::registry::ColorCopy;
use crate::{face_range, sub_cube_range, CubeFace, Vertex, NEUTRAL};

use ilattice::glam::{Mat3, Vec3};

/// A copy of every vertex color in the pool, taken immediately before a
/// completing turn's permutation pass.
///
/// The permutation must read source stickers from here rather than from the
/// live pool: destinations are cleared and overwritten in the same pass, so
/// reading in place would pick up already-clobbered colors.
pub struct ColorSnapshot(Vec<[f32; 3]>);

/// The mutable working copy of all 936 vertices, plus the immutable
/// solved-state reference it is reset from.
///
/// The pool is owned exclusively by the
/// [`RotationEngine`](crate::RotationEngine), which mutates it during its
/// per-frame tick; the render backend only ever reads
/// [`vertices`](Self::vertices) afterwards for upload.
pub struct VertexPool {
    live: Vec<Vertex>,
    reference: Vec<Vertex>,
}

impl VertexPool {
    /// A pool initialized to the solved state.
    pub fn new() -> Self {
        let reference = solved_vertices();
        Self {
            live: reference.clone(),
            reference,
        }
    }

    /// All vertices in sub-cube order, for per-frame upload.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.live
    }

    /// The 36 vertices of one sub-cube.
    #[inline]
    pub fn sub_cube(&self, sub_cube: usize) -> &[Vertex] {
        &self.live[sub_cube_range(sub_cube)]
    }

    /// The 6 vertices of one face of one sub-cube.
    #[inline]
    pub fn face(&self, sub_cube: usize, face: CubeFace) -> &[Vertex] {
        &self.live[face_range(sub_cube, face)]
    }

    /// Rotates one sub-cube's vertex positions in place about the global
    /// origin. Colors are untouched.
    pub fn rotate_sub_cube(&mut self, sub_cube: usize, rotation: Mat3) {
        for vertex in &mut self.live[sub_cube_range(sub_cube)] {
            vertex.position = (rotation * Vec3::from(vertex.position)).to_array();
        }
    }

    /// Restores one sub-cube's positions from the solved-state reference,
    /// discarding accumulated incremental rotation error. Colors are
    /// untouched.
    pub fn restore_positions(&mut self, sub_cube: usize) {
        let range = sub_cube_range(sub_cube);
        for (live, reference) in self.live[range.clone()]
            .iter_mut()
            .zip(&self.reference[range])
        {
            live.position = reference.position;
        }
    }

    /// Copies every vertex color out of the pool.
    pub fn snapshot_colors(&self) -> ColorSnapshot {
        ColorSnapshot(self.live.iter().map(|vertex| vertex.color).collect())
    }

    /// Resets every face of one sub-cube to the neutral color.
    pub fn clear_colors(&mut self, sub_cube: usize) {
        for vertex in &mut self.live[sub_cube_range(sub_cube)] {
            vertex.color = NEUTRAL;
        }
    }

    /// Applies one recipe instruction, reading the source sticker from the
    /// pre-turn snapshot.
    pub fn copy_face_colors(&mut self, copy: ColorCopy, snapshot: &ColorSnapshot) {
        let src = face_range(copy.src_cube as usize, copy.src_face);
        let dst = face_range(copy.dst_cube as usize, copy.dst_face);
        for (dst_index, src_index) in dst.zip(src) {
            self.live[dst_index].color = snapshot.0[src_index];
        }
    }
}

impl Default for VertexPool {
    fn default() -> Self {
        Self::new()
    }
}
