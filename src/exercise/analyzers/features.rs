//! Feature extraction shared across analyzers.
//!
//! Every helper returns `None` when a joint it needs is missing, so extraction
//! functions can chain them with `?`.

use crate::pose::{angle_at, vertical_gap, JointFrame, JointId};

/// Length of the synthetic ray hanging straight down from the knee, used when
/// the ankle is not part of an exercise's joint set.
const VERTICAL_REFERENCE: f64 = 0.3;

/// How far the wrist must clear the shoulder to count as overhead.
const OVERHEAD_CLEARANCE: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn shoulder(self) -> JointId {
        match self {
            Side::Left => JointId::LeftShoulder,
            Side::Right => JointId::RightShoulder,
        }
    }

    pub fn elbow(self) -> JointId {
        match self {
            Side::Left => JointId::LeftElbow,
            Side::Right => JointId::RightElbow,
        }
    }

    pub fn wrist(self) -> JointId {
        match self {
            Side::Left => JointId::LeftWrist,
            Side::Right => JointId::RightWrist,
        }
    }

    pub fn hip(self) -> JointId {
        match self {
            Side::Left => JointId::LeftHip,
            Side::Right => JointId::RightHip,
        }
    }

    pub fn knee(self) -> JointId {
        match self {
            Side::Left => JointId::LeftKnee,
            Side::Right => JointId::RightKnee,
        }
    }

    pub fn ankle(self) -> JointId {
        match self {
            Side::Left => JointId::LeftAnkle,
            Side::Right => JointId::RightAnkle,
        }
    }
}

/// Hip-knee-ankle angle.
pub fn knee_angle(frame: &JointFrame, side: Side) -> Option<f64> {
    Some(angle_at(
        frame.point(side.hip())?,
        frame.point(side.knee())?,
        frame.point(side.ankle())?,
    ))
}

/// Angle between the thigh and a vertical ray below the knee.
///
/// 180° when the hip is straight above the knee, 90° with the thigh horizontal.
pub fn knee_angle_vertical(frame: &JointFrame, side: Side) -> Option<f64> {
    let knee = frame.point(side.knee())?;
    Some(angle_at(
        frame.point(side.hip())?,
        knee,
        knee.offset(0.0, VERTICAL_REFERENCE),
    ))
}

/// Shoulder-elbow-wrist angle.
pub fn elbow_angle(frame: &JointFrame, side: Side) -> Option<f64> {
    Some(angle_at(
        frame.point(side.shoulder())?,
        frame.point(side.elbow())?,
        frame.point(side.wrist())?,
    ))
}

/// Shoulder-hip-knee angle.
pub fn hip_hinge_angle(frame: &JointFrame, side: Side) -> Option<f64> {
    Some(angle_at(
        frame.point(side.shoulder())?,
        frame.point(side.hip())?,
        frame.point(side.knee())?,
    ))
}

/// Vertical distance between shoulder and hip; small when the torso is horizontal.
pub fn shoulder_hip_gap(frame: &JointFrame, side: Side) -> Option<f64> {
    Some(vertical_gap(
        frame.point(side.shoulder())?,
        frame.point(side.hip())?,
    ))
}

/// Both wrists higher in the image than `reference`.
pub fn wrists_above(frame: &JointFrame, reference: JointId) -> Option<bool> {
    let reference = frame.point(reference)?;
    Some(
        frame.point(JointId::LeftWrist)?.is_above(reference)
            && frame.point(JointId::RightWrist)?.is_above(reference),
    )
}

/// Wrist at least [`OVERHEAD_CLEARANCE`] above the shoulder.
pub fn is_overhead(frame: &JointFrame, side: Side) -> Option<bool> {
    let wrist = frame.point(side.wrist())?;
    let shoulder = frame.point(side.shoulder())?;
    Some(wrist.y < shoulder.y - OVERHEAD_CLEARANCE)
}
