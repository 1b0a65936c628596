//! The face-turn registry: which sub-cubes participate in each turn, which
//! axis they rotate about, and how their sticker colors permute when the
//! turn completes.
//!
//! The registry is a closed design constant. [`validate_turn_table`] is run
//! once at engine startup and cross-checks every entry against the reference
//! sub-cube definitions, so a malformed table fails fast rather than
//! scrambling colors silently.

use crate::geometry::{Axis, CubeFace};
use crate::reference::{face_is_stickered, SubCubeKind, SUB_CUBES};
use crate::{FACES_PER_SUB_CUBE, SUB_CUBE_COUNT};

use CubeFace::{NegX, NegY, NegZ, PosX, PosY, PosZ};

/// One of the six face turns, named as in standard cube notation. Each turn
/// rotates its face clockwise as seen from outside that face.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum FaceTurn {
    Right = 0,
    Left = 1,
    Up = 2,
    Down = 3,
    Front = 4,
    Back = 5,
}

impl FaceTurn {
    /// All six turns, in [`TURN_TABLE`] order.
    pub const ALL: [FaceTurn; 6] = [
        FaceTurn::Right,
        FaceTurn::Left,
        FaceTurn::Up,
        FaceTurn::Down,
        FaceTurn::Front,
        FaceTurn::Back,
    ];

    /// The registry entry describing this turn.
    #[inline]
    pub fn entry(&self) -> &'static TurnEntry {
        &TURN_TABLE[*self as usize]
    }
}

/// Sub-cubes participating in a face turn: 1 axis + 4 edge + 4 corner.
pub const PARTICIPANTS_PER_TURN: usize = 9;

/// Copy instructions per recipe: one per sticker carried by the turn's 9
/// participants (1 axis + 8 edge + 12 corner stickers).
pub const COPIES_PER_RECIPE: usize = 21;

/// One instruction of a color-permutation recipe: the sticker that was at
/// `(src_cube, src_face)` before the turn shows at `(dst_cube, dst_face)`
/// after it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ColorCopy {
    pub dst_cube: u8,
    pub dst_face: CubeFace,
    pub src_cube: u8,
    pub src_face: CubeFace,
}

const fn cp(dst_cube: u8, dst_face: CubeFace, src_cube: u8, src_face: CubeFace) -> ColorCopy {
    ColorCopy {
        dst_cube,
        dst_face,
        src_cube,
        src_face,
    }
}

/// Registry entry for one face turn.
#[derive(Debug)]
pub struct TurnEntry {
    pub turn: FaceTurn,
    /// The axis the turned layer rotates about.
    pub axis: Axis,
    /// Sign of the per-tick angular increment. Fixed per face so that every
    /// turn is clockwise when viewed from outside its face.
    pub sign: i32,
    /// The 9 participating sub-cubes, ordered axis, edges, corners.
    pub participants: [u8; PARTICIPANTS_PER_TURN],
    /// Applied from a pre-turn color snapshot after every participant face
    /// has been reset to neutral.
    pub recipe: [ColorCopy; COPIES_PER_RECIPE],
}

/// The six face turns, indexed by [`FaceTurn`] discriminant.
///
/// Each recipe lists the axis sticker first, then the 8 edge stickers (the 4
/// that stay on the turned face followed by the 4 that move between side
/// faces), then the 12 corner stickers in the same arrangement.
pub const TURN_TABLE: [TurnEntry; 6] = [
    TurnEntry {
        turn: FaceTurn::Right,
        axis: Axis::X,
        sign: -1,
        participants: [1, 10, 11, 12, 13, 22, 23, 24, 25],
        recipe: [
            cp(1, PosX, 1, PosX),
            cp(10, PosX, 12, PosX),
            cp(11, PosX, 13, PosX),
            cp(12, PosX, 11, PosX),
            cp(13, PosX, 10, PosX),
            cp(10, NegY, 12, NegZ),
            cp(11, PosY, 13, PosZ),
            cp(12, NegZ, 11, PosY),
            cp(13, PosZ, 10, NegY),
            cp(22, PosX, 24, PosX),
            cp(23, PosX, 22, PosX),
            cp(24, PosX, 25, PosX),
            cp(25, PosX, 23, PosX),
            cp(22, NegY, 24, NegZ),
            cp(22, NegZ, 24, PosY),
            cp(23, NegY, 22, NegZ),
            cp(23, PosZ, 22, NegY),
            cp(24, PosY, 25, PosZ),
            cp(24, NegZ, 25, PosY),
            cp(25, PosY, 23, PosZ),
            cp(25, PosZ, 23, NegY),
        ],
    },
    TurnEntry {
        turn: FaceTurn::Left,
        axis: Axis::X,
        sign: 1,
        participants: [0, 6, 7, 8, 9, 18, 19, 20, 21],
        recipe: [
            cp(0, NegX, 0, NegX),
            cp(6, NegX, 9, NegX),
            cp(7, NegX, 8, NegX),
            cp(8, NegX, 6, NegX),
            cp(9, NegX, 7, NegX),
            cp(6, NegY, 9, PosZ),
            cp(7, PosY, 8, NegZ),
            cp(8, NegZ, 6, NegY),
            cp(9, PosZ, 7, PosY),
            cp(18, NegX, 19, NegX),
            cp(19, NegX, 21, NegX),
            cp(20, NegX, 18, NegX),
            cp(21, NegX, 20, NegX),
            cp(18, NegY, 19, PosZ),
            cp(18, NegZ, 19, NegY),
            cp(19, NegY, 21, PosZ),
            cp(19, PosZ, 21, PosY),
            cp(20, PosY, 18, NegZ),
            cp(20, NegZ, 18, NegY),
            cp(21, PosY, 20, NegZ),
            cp(21, PosZ, 20, PosY),
        ],
    },
    TurnEntry {
        turn: FaceTurn::Up,
        axis: Axis::Y,
        sign: -1,
        participants: [3, 7, 11, 16, 17, 20, 21, 24, 25],
        recipe: [
            cp(3, PosY, 3, PosY),
            cp(7, PosY, 17, PosY),
            cp(11, PosY, 16, PosY),
            cp(16, PosY, 7, PosY),
            cp(17, PosY, 11, PosY),
            cp(7, NegX, 17, PosZ),
            cp(11, PosX, 16, NegZ),
            cp(16, NegZ, 7, NegX),
            cp(17, PosZ, 11, PosX),
            cp(20, PosY, 21, PosY),
            cp(21, PosY, 25, PosY),
            cp(24, PosY, 20, PosY),
            cp(25, PosY, 24, PosY),
            cp(20, NegX, 21, PosZ),
            cp(20, NegZ, 21, NegX),
            cp(21, NegX, 25, PosZ),
            cp(21, PosZ, 25, PosX),
            cp(24, PosX, 20, NegZ),
            cp(24, NegZ, 20, NegX),
            cp(25, PosX, 24, NegZ),
            cp(25, PosZ, 24, PosX),
        ],
    },
    TurnEntry {
        turn: FaceTurn::Down,
        axis: Axis::Y,
        sign: 1,
        participants: [2, 6, 10, 14, 15, 18, 19, 22, 23],
        recipe: [
            cp(2, NegY, 2, NegY),
            cp(6, NegY, 14, NegY),
            cp(10, NegY, 15, NegY),
            cp(14, NegY, 10, NegY),
            cp(15, NegY, 6, NegY),
            cp(6, NegX, 14, NegZ),
            cp(10, PosX, 15, PosZ),
            cp(14, NegZ, 10, PosX),
            cp(15, PosZ, 6, NegX),
            cp(18, NegY, 22, NegY),
            cp(19, NegY, 18, NegY),
            cp(22, NegY, 23, NegY),
            cp(23, NegY, 19, NegY),
            cp(18, NegX, 22, NegZ),
            cp(18, NegZ, 22, PosX),
            cp(19, NegX, 18, NegZ),
            cp(19, PosZ, 18, NegX),
            cp(22, PosX, 23, PosZ),
            cp(22, NegZ, 23, PosX),
            cp(23, PosX, 19, PosZ),
            cp(23, PosZ, 19, NegX),
        ],
    },
    TurnEntry {
        turn: FaceTurn::Front,
        axis: Axis::Z,
        sign: -1,
        participants: [5, 9, 13, 15, 17, 19, 21, 23, 25],
        recipe: [
            cp(5, PosZ, 5, PosZ),
            cp(9, PosZ, 15, PosZ),
            cp(13, PosZ, 17, PosZ),
            cp(15, PosZ, 13, PosZ),
            cp(17, PosZ, 9, PosZ),
            cp(9, NegX, 15, NegY),
            cp(13, PosX, 17, PosY),
            cp(15, NegY, 13, PosX),
            cp(17, PosY, 9, NegX),
            cp(19, PosZ, 23, PosZ),
            cp(21, PosZ, 19, PosZ),
            cp(23, PosZ, 25, PosZ),
            cp(25, PosZ, 21, PosZ),
            cp(19, NegX, 23, NegY),
            cp(19, NegY, 23, PosX),
            cp(21, NegX, 19, NegY),
            cp(21, PosY, 19, NegX),
            cp(23, PosX, 25, PosY),
            cp(23, NegY, 25, PosX),
            cp(25, PosX, 21, PosY),
            cp(25, PosY, 21, NegX),
        ],
    },
    TurnEntry {
        turn: FaceTurn::Back,
        axis: Axis::Z,
        sign: 1,
        participants: [4, 8, 12, 14, 16, 18, 20, 22, 24],
        recipe: [
            cp(4, NegZ, 4, NegZ),
            cp(8, NegZ, 16, NegZ),
            cp(12, NegZ, 14, NegZ),
            cp(14, NegZ, 8, NegZ),
            cp(16, NegZ, 12, NegZ),
            cp(8, NegX, 16, PosY),
            cp(12, PosX, 14, NegY),
            cp(14, NegY, 8, NegX),
            cp(16, PosY, 12, PosX),
            cp(18, NegZ, 20, NegZ),
            cp(20, NegZ, 24, NegZ),
            cp(22, NegZ, 18, NegZ),
            cp(24, NegZ, 22, NegZ),
            cp(18, NegX, 20, PosY),
            cp(18, NegY, 20, NegX),
            cp(20, NegX, 24, PosY),
            cp(20, PosY, 24, PosX),
            cp(22, PosX, 18, NegY),
            cp(22, NegY, 18, NegX),
            cp(24, PosX, 22, NegY),
            cp(24, PosY, 22, PosX),
        ],
    },
];

/// Startup self-check of [`TURN_TABLE`] against the reference sub-cube
/// definitions. The table is a closed design constant, so any inconsistency
/// is a programming error and panics.
pub fn validate_turn_table() {
    let mut turn_memberships = [0usize; SUB_CUBE_COUNT];

    for (index, entry) in TURN_TABLE.iter().enumerate() {
        let turn = entry.turn;
        assert_eq!(turn as usize, index, "{turn:?} entry out of table order");
        assert!(entry.sign == 1 || entry.sign == -1);

        // Participants are ordered axis, 4 edges, 4 corners, all distinct,
        // and all sit in the turned layer of the rotation axis.
        let axis_grid = SUB_CUBES[entry.participants[0] as usize].grid;
        let layer = axis_grid[entry.axis.index()];
        assert_eq!(layer.abs(), 1, "{turn:?} axis sub-cube is off-axis");
        for (position, &participant) in entry.participants.iter().enumerate() {
            let participant = participant as usize;
            assert!(participant < SUB_CUBE_COUNT);
            let expected_kind = match position {
                0 => SubCubeKind::Axis,
                1..=4 => SubCubeKind::Edge,
                _ => SubCubeKind::Corner,
            };
            assert_eq!(
                SUB_CUBES[participant].kind, expected_kind,
                "{turn:?} participant {participant} has the wrong category"
            );
            assert_eq!(
                SUB_CUBES[participant].grid[entry.axis.index()],
                layer,
                "{turn:?} participant {participant} is outside the turned layer"
            );
            turn_memberships[participant] += 1;
        }

        // Recipe coverage: every sticker of every participant is written
        // exactly once, and every source sticker is read exactly once.
        let mut written = [[false; FACES_PER_SUB_CUBE]; SUB_CUBE_COUNT];
        let mut read = [[false; FACES_PER_SUB_CUBE]; SUB_CUBE_COUNT];
        for copy in entry.recipe.iter() {
            for (cube, face) in [
                (copy.dst_cube, copy.dst_face),
                (copy.src_cube, copy.src_face),
            ] {
                assert!(
                    entry.participants.contains(&cube),
                    "{turn:?} recipe touches non-participant {cube}"
                );
                assert!(
                    face_is_stickered(SUB_CUBES[cube as usize].grid, face),
                    "{turn:?} recipe touches unstickered face {face:?} of {cube}"
                );
            }
            let dst = &mut written[copy.dst_cube as usize][copy.dst_face.index()];
            assert!(!*dst, "{turn:?} recipe writes {copy:?} twice");
            *dst = true;
            let src = &mut read[copy.src_cube as usize][copy.src_face.index()];
            assert!(!*src, "{turn:?} recipe reads {copy:?} twice");
            *src = true;
        }
        for &participant in entry.participants.iter() {
            for face in CubeFace::ALL {
                if face_is_stickered(SUB_CUBES[participant as usize].grid, face) {
                    assert!(
                        written[participant as usize][face.index()],
                        "{turn:?} recipe drops sticker {face:?} of {participant}"
                    );
                }
            }
        }
    }

    // An axis sub-cube turns with exactly one face, an edge with two, a
    // corner with three.
    for (sub_cube, def) in SUB_CUBES.iter().enumerate() {
        let expected = match def.kind {
            SubCubeKind::Axis => 1,
            SubCubeKind::Edge => 2,
            SubCubeKind::Corner => 3,
        };
        assert_eq!(
            turn_memberships[sub_cube], expected,
            "sub-cube {sub_cube} appears in the wrong number of turns"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_table_is_self_consistent() {
        validate_turn_table();
    }

    #[test]
    fn right_turn_entry_matches_its_layer() {
        let entry = FaceTurn::Right.entry();
        assert_eq!(entry.axis, Axis::X);
        assert_eq!(entry.sign, -1);
        assert_eq!(entry.participants, [1, 10, 11, 12, 13, 22, 23, 24, 25]);
    }

    #[test]
    fn opposite_faces_turn_with_opposite_signs() {
        for (a, b) in [
            (FaceTurn::Right, FaceTurn::Left),
            (FaceTurn::Up, FaceTurn::Down),
            (FaceTurn::Front, FaceTurn::Back),
        ] {
            assert_eq!(a.entry().axis, b.entry().axis);
            assert_eq!(a.entry().sign, -b.entry().sign);
        }
    }

    #[test]
    fn turns_cover_every_sub_cube_but_share_no_layer() {
        for (a, b) in [
            (FaceTurn::Right, FaceTurn::Left),
            (FaceTurn::Up, FaceTurn::Down),
            (FaceTurn::Front, FaceTurn::Back),
        ] {
            for cube in a.entry().participants {
                assert!(!b.entry().participants.contains(&cube));
            }
        }
    }

    #[test]
    fn recipes_agree_with_the_rotation_geometry() {
        // The recipe must say exactly what the rotation matrix says: the
        // sub-cube that rotates onto a slot supplies its colors, and each of
        // its faces lands where the rotation carries its normal.
        use ilattice::glam::IVec3;

        for entry in TURN_TABLE.iter() {
            let radians = entry.sign as f32 * core::f32::consts::FRAC_PI_2;
            let rotation = entry.axis.rotation(radians);

            for copy in entry.recipe.iter() {
                let src = SUB_CUBES[copy.src_cube as usize].grid;
                let dst = SUB_CUBES[copy.dst_cube as usize].grid;

                // The source sub-cube rotates onto the destination slot.
                let rotated = rotation * IVec3::from(src).as_vec3();
                let rotated = [
                    rotated.x.round() as i32,
                    rotated.y.round() as i32,
                    rotated.z.round() as i32,
                ];
                assert_eq!(rotated, dst, "{:?}: {copy:?}", entry.turn);

                // The source face's normal rotates onto the destination
                // face's normal.
                let rotated_normal = rotation * copy.src_face.signed_normal().as_vec3();
                let expected = copy.dst_face.signed_normal().as_vec3();
                assert!(
                    rotated_normal.abs_diff_eq(expected, 1e-5),
                    "{:?}: {copy:?}",
                    entry.turn
                );
            }
        }
    }
}
