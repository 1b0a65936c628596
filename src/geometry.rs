//! Cube-face geometry and coordinate conventions.
//!
//! The puzzle lives in a right-handed coordinate system with +Y up, centered
//! on the origin:
//!
//! ```text
//!       +Y
//!       | -Z
//! -X____|/____+X
//!      /|
//!    +Z |
//!       -Y
//! ```
//!
//! Each sub-cube is an axis-aligned box. Its six faces are stored in a fixed
//! order that doubles as the face's index within the sub-cube's vertex range:
//!
//! | index | face |
//! |-------|------|
//! | 0     | −X   |
//! | 1     | +X   |
//! | 2     | −Y   |
//! | 3     | +Y   |
//! | 4     | −Z   |
//! | 5     | +Z   |
//!
//! Every face is emitted as 6 unshared vertices (two triangles) wound
//! **clockwise** when viewed from outside the box, so a backend culling
//! counter-clockwise back faces draws the mesh correctly.
//!
//! Rotation during a face turn is about the global origin. The sub-cube
//! layout is centered at the puzzle's geometric center, so no per-sub-cube
//! re-centering is needed.

mod axis;
mod face;

pub use axis::*;
