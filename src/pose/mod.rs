//! Pose data model and geometry
//!
//! Re-exports only. All logic in submodules.

pub mod geometry;
pub mod joints;

pub use geometry::{angle_at, horizontal_spread, midpoint, vertical_gap, Point, DEGENERATE_ANGLE};
pub use joints::{JointFrame, JointId, JointSample};
