//! The rotation state machine driving face-turn animation.

use crate::pool::VertexPool;
use crate::registry::{validate_turn_table, FaceTurn, TurnEntry};
use crate::Vertex;

/// Angular increment applied each tick, in degrees.
///
/// The increment is per tick, not per unit of wall-clock time, so a turn's
/// duration depends on the frame rate. That is the behavior this engine
/// promises; a time-based rate would need a different contract.
pub const TICK_DEGREES: f32 = 0.25;

/// Magnitude of a completed quarter turn, in degrees.
pub const QUARTER_TURN_DEGREES: f32 = 90.0;

/// Ticks for a turn to run to completion.
pub const TICKS_PER_TURN: u32 = (QUARTER_TURN_DEGREES / TICK_DEGREES) as u32;

/// Current state of the [`RotationEngine`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TurnState {
    /// No turn in flight.
    Idle,
    /// A turn is animating; `degrees` is the signed rotation applied so far.
    Rotating { turn: FaceTurn, degrees: f32 },
}

/// The face-turn state machine.
///
/// The engine exclusively owns the live vertex pool. At most one turn is in
/// flight at a time; while a turn is animating, each [`tick`](Self::tick)
/// rotates the positions of the 9 participating sub-cubes by a fixed
/// increment and leaves every color and every non-participant untouched. On
/// the tick that reaches a quarter turn, the engine snaps participant
/// positions back onto the reference geometry and permutes their sticker
/// colors per the registry recipe. A started turn always runs to completion;
/// there is no cancellation.
pub struct RotationEngine {
    pool: VertexPool,
    state: TurnState,
}

impl RotationEngine {
    /// An idle engine over a freshly solved puzzle. Validates the turn
    /// registry before anything can rotate.
    pub fn new() -> Self {
        validate_turn_table();
        Self {
            pool: VertexPool::new(),
            state: TurnState::Idle,
        }
    }

    #[inline]
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// All vertices in sub-cube order, for per-frame upload.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        self.pool.vertices()
    }

    /// Read access to the live vertex pool.
    #[inline]
    pub fn pool(&self) -> &VertexPool {
        &self.pool
    }

    /// Begins `turn` if the engine is idle.
    ///
    /// A request made while a turn is in flight has no effect and returns
    /// `false`; at most one turn is ever in flight.
    pub fn request_turn(&mut self, turn: FaceTurn) -> bool {
        match self.state {
            TurnState::Idle => {
                log::debug!("starting {turn:?} turn");
                self.state = TurnState::Rotating { turn, degrees: 0.0 };
                true
            }
            TurnState::Rotating { turn: in_flight, .. } => {
                log::trace!("ignoring {turn:?} request while {in_flight:?} is in flight");
                false
            }
        }
    }

    /// Begins a pseudo-randomly chosen turn if the engine is idle.
    pub fn request_random_turn(&mut self) -> Option<FaceTurn> {
        let turn = FaceTurn::ALL[fastrand::usize(..FaceTurn::ALL.len())];
        self.request_turn(turn).then_some(turn)
    }

    /// Advances one frame's worth of rotation; a no-op while idle.
    ///
    /// Call exactly once per rendered frame, after any turn request for that
    /// frame and before the render backend reads
    /// [`vertices`](Self::vertices). Returns the completed turn on the tick
    /// that finishes it. The increment is fixed, so every turn completes
    /// after exactly [`TICKS_PER_TURN`] ticks.
    pub fn tick(&mut self) -> Option<FaceTurn> {
        let TurnState::Rotating { turn, degrees } = self.state else {
            return None;
        };
        let entry = turn.entry();

        let step = entry.sign as f32 * TICK_DEGREES;
        let rotation = entry.axis.rotation(step.to_radians());
        for &sub_cube in entry.participants.iter() {
            self.pool.rotate_sub_cube(sub_cube as usize, rotation);
        }

        // Completion is decided by magnitude so that both rotation senses
        // behave identically.
        let degrees = degrees + step;
        if degrees.abs() >= QUARTER_TURN_DEGREES {
            self.commit_turn(entry);
            self.state = TurnState::Idle;
            log::debug!("{turn:?} turn complete");
            Some(turn)
        } else {
            self.state = TurnState::Rotating { turn, degrees };
            None
        }
    }

    /// Commits a finished turn: snap participant positions back onto the
    /// reference geometry, then permute stickers. Sources are read from a
    /// snapshot taken before any face is cleared, so the permutation pass
    /// has no read-after-write hazard.
    fn commit_turn(&mut self, entry: &TurnEntry) {
        let snapshot = self.pool.snapshot_colors();
        for &sub_cube in entry.participants.iter() {
            self.pool.restore_positions(sub_cube as usize);
            self.pool.clear_colors(sub_cube as usize);
        }
        for &copy in entry.recipe.iter() {
            self.pool.copy_face_colors(copy, &snapshot);
        }
    }
}

impl Default for RotationEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::CubeFace;
    use crate::reference::{solved_vertices, sticker_color};
    use crate::{sub_cube_range, SUB_CUBE_COUNT, VERTS_PER_FACE};

    /// Runs a full turn, asserting it completes on exactly the last tick.
    fn run_turn(engine: &mut RotationEngine, turn: FaceTurn) {
        assert!(engine.request_turn(turn));
        for tick in 1..=TICKS_PER_TURN {
            let completed = engine.tick();
            if tick == TICKS_PER_TURN {
                assert_eq!(completed, Some(turn));
            } else {
                assert_eq!(completed, None, "{turn:?} completed early at tick {tick}");
            }
        }
    }

    fn colors(engine: &RotationEngine) -> Vec<[f32; 3]> {
        engine.vertices().iter().map(|v| v.color).collect()
    }

    #[test]
    fn every_turn_takes_exactly_360_ticks() {
        for turn in FaceTurn::ALL {
            let mut engine = RotationEngine::new();
            run_turn(&mut engine, turn);
            assert_eq!(engine.state(), TurnState::Idle);
        }
    }

    #[test]
    fn tick_while_idle_is_a_no_op() {
        let mut engine = RotationEngine::new();
        let before = engine.vertices().to_vec();
        assert_eq!(engine.tick(), None);
        assert_eq!(engine.state(), TurnState::Idle);
        assert_eq!(engine.vertices(), &before[..]);
    }

    #[test]
    fn participants_land_back_on_reference_positions() {
        let solved = solved_vertices();
        for turn in FaceTurn::ALL {
            let mut engine = RotationEngine::new();
            run_turn(&mut engine, turn);
            for (live, reference) in engine.vertices().iter().zip(&solved) {
                // Bit-identical, not merely close: completion restores from
                // the reference table rather than un-rotating.
                assert_eq!(live.position, reference.position, "{turn:?}");
            }
        }
    }

    #[test]
    fn four_identical_turns_restore_the_colors() {
        for turn in FaceTurn::ALL {
            let mut engine = RotationEngine::new();
            let solved = colors(&engine);

            run_turn(&mut engine, turn);
            assert_ne!(colors(&engine), solved, "{turn:?} permuted nothing");

            for _ in 0..3 {
                run_turn(&mut engine, turn);
            }
            assert_eq!(colors(&engine), solved, "{turn:?} is not order 4");
        }
    }

    #[test]
    fn non_participants_never_move_or_recolor() {
        for turn in FaceTurn::ALL {
            let mut engine = RotationEngine::new();
            let participants = turn.entry().participants;
            let before = engine.vertices().to_vec();

            assert!(engine.request_turn(turn));
            for _ in 0..TICKS_PER_TURN {
                engine.tick();
                for sub_cube in 0..SUB_CUBE_COUNT {
                    if participants.contains(&(sub_cube as u8)) {
                        continue;
                    }
                    assert_eq!(
                        engine.pool().sub_cube(sub_cube),
                        &before[sub_cube_range(sub_cube)],
                        "{turn:?} touched bystander {sub_cube}"
                    );
                }
            }
        }
    }

    #[test]
    fn colors_only_change_on_the_completing_tick() {
        let mut engine = RotationEngine::new();
        let solved = colors(&engine);

        assert!(engine.request_turn(FaceTurn::Front));
        for _ in 0..TICKS_PER_TURN - 1 {
            engine.tick();
            assert_eq!(colors(&engine), solved);
        }
        assert_eq!(engine.tick(), Some(FaceTurn::Front));
        assert_ne!(colors(&engine), solved);
    }

    #[test]
    fn requests_while_rotating_are_ignored() {
        let mut engine = RotationEngine::new();
        assert!(engine.request_turn(FaceTurn::Up));
        engine.tick();

        assert!(!engine.request_turn(FaceTurn::Down));
        assert!(matches!(
            engine.state(),
            TurnState::Rotating {
                turn: FaceTurn::Up,
                ..
            }
        ));

        // The original turn still completes on schedule.
        let mut completed = None;
        for _ in 1..TICKS_PER_TURN {
            completed = engine.tick();
        }
        assert_eq!(completed, Some(FaceTurn::Up));
    }

    #[test]
    fn mid_flight_positions_are_the_reference_rotated_so_far() {
        let mut engine = RotationEngine::new();
        let solved = solved_vertices();
        let entry = FaceTurn::Right.entry();

        assert!(engine.request_turn(FaceTurn::Right));
        for _ in 0..TICKS_PER_TURN / 2 {
            engine.tick();
        }

        // Halfway through: 45 degrees, applied incrementally, should agree
        // with one direct 45 degree rotation to within accumulated error.
        let direct = entry
            .axis
            .rotation((entry.sign as f32 * 45.0f32).to_radians());
        for &sub_cube in entry.participants.iter() {
            let range = sub_cube_range(sub_cube as usize);
            for (live, reference) in engine.vertices()[range.clone()].iter().zip(&solved[range]) {
                let expected = direct * ilattice::glam::Vec3::from(reference.position);
                assert!(
                    expected.abs_diff_eq(live.position.into(), 1e-4),
                    "sub-cube {sub_cube} drifted"
                );
            }
        }
    }

    #[test]
    fn right_turn_example_scenario() {
        let mut engine = RotationEngine::new();
        let before = engine.vertices().to_vec();

        // The sticker that will move: -Z face of edge sub-cube 12.
        let src_colors: Vec<[f32; 3]> = engine
            .pool()
            .face(12, CubeFace::NegZ)
            .iter()
            .map(|v| v.color)
            .collect();
        assert!(src_colors.iter().all(|c| *c == sticker_color(CubeFace::NegZ)));

        assert!(engine.request_turn(FaceTurn::Right));
        for _ in 0..TICKS_PER_TURN {
            engine.tick();
            // The untouched left axis sub-cube stays byte-identical through
            // every tick of the turn.
            assert_eq!(engine.pool().sub_cube(0), &before[sub_cube_range(0)]);
        }
        assert_eq!(engine.state(), TurnState::Idle);

        // Axis sub-cube 1 is back on its reference positions.
        for (live, reference) in engine
            .pool()
            .sub_cube(1)
            .iter()
            .zip(&before[sub_cube_range(1)])
        {
            assert_eq!(live.position, reference.position);
        }

        // Per the R recipe, the sticker from (12, -Z) now shows at (10, -Y).
        for (dst, src) in engine.pool().face(10, CubeFace::NegY).iter().zip(&src_colors) {
            assert_eq!(&dst.color, src);
        }
    }

    #[test]
    fn sticker_census_is_invariant_under_scrambling() {
        fastrand::seed(7);
        let mut engine = RotationEngine::new();

        for _ in 0..20 {
            let turn = engine.request_random_turn().unwrap();
            for _ in 0..TICKS_PER_TURN {
                engine.tick();
            }
            assert_eq!(engine.state(), TurnState::Idle, "{turn:?} never finished");
        }

        // Scrambling moves stickers around but can never create or destroy
        // them: 9 faces of each color, 6 vertices each.
        for face in CubeFace::ALL {
            let sticker = sticker_color(face);
            let count = engine
                .vertices()
                .iter()
                .filter(|v| v.color == sticker)
                .count();
            assert_eq!(count, 9 * VERTS_PER_FACE, "{face:?}");
        }
    }

    #[test]
    fn random_requests_are_ignored_mid_turn() {
        fastrand::seed(11);
        let mut engine = RotationEngine::new();
        let started = engine.request_random_turn().unwrap();
        engine.tick();
        assert_eq!(engine.request_random_turn(), None);
        assert!(matches!(
            engine.state(),
            TurnState::Rotating { turn, .. } if turn == started
        ));
    }
}
