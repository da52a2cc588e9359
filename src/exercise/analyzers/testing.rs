//! Frame builders for analyzer tests.

use crate::pose::{JointFrame, JointId, JointSample, Point};

/// Confidence used for joints the test considers clearly visible.
pub const SEEN: f64 = 0.9;

pub fn body(joints: &[(JointId, f64, f64)]) -> JointFrame {
    joints
        .iter()
        .map(|&(id, x, y)| (id, JointSample::new(x, y, SEEN)))
        .collect()
}

pub fn place(mut frame: JointFrame, joints: &[(JointId, Point)]) -> JointFrame {
    for &(id, p) in joints {
        frame.insert(id, JointSample::new(p.x, p.y, SEEN));
    }
    frame
}

pub fn with_confidence(mut frame: JointFrame, id: JointId, confidence: f64) -> JointFrame {
    if let Some(sample) = frame.get(id).copied() {
        frame.insert(id, JointSample { confidence, ..sample });
    }
    frame
}

/// Two ray endpoints around `vertex` forming `degrees`.
///
/// The second point hangs straight down; the first is rotated `degrees` away
/// from it, so 180 puts it straight up.
pub fn limb(vertex: Point, degrees: f64, length: f64) -> (Point, Point) {
    let radians = degrees.to_radians();
    let rotated = vertex.offset(length * radians.sin(), length * radians.cos());
    let hanging = vertex.offset(0.0, length);
    (rotated, hanging)
}

/// Both legs bent to `degrees` at the knee, knees at y = 0.6.
pub fn legs(frame: JointFrame, left_degrees: f64, right_degrees: f64) -> JointFrame {
    let left_knee = Point::new(0.4, 0.6);
    let right_knee = Point::new(0.6, 0.6);
    let (left_hip, left_ankle) = limb(left_knee, left_degrees, 0.2);
    let (right_hip, right_ankle) = limb(right_knee, right_degrees, 0.2);
    place(
        frame,
        &[
            (JointId::LeftHip, left_hip),
            (JointId::LeftKnee, left_knee),
            (JointId::LeftAnkle, left_ankle),
            (JointId::RightHip, right_hip),
            (JointId::RightKnee, right_knee),
            (JointId::RightAnkle, right_ankle),
        ],
    )
}

/// Both arms bent to `degrees` at the elbow, elbows at y = 0.5.
pub fn arms(frame: JointFrame, left_degrees: f64, right_degrees: f64) -> JointFrame {
    let left_elbow = Point::new(0.3, 0.5);
    let right_elbow = Point::new(0.7, 0.5);
    let (left_shoulder, left_wrist) = limb(left_elbow, left_degrees, 0.15);
    let (right_shoulder, right_wrist) = limb(right_elbow, right_degrees, 0.15);
    place(
        frame,
        &[
            (JointId::LeftShoulder, left_shoulder),
            (JointId::LeftElbow, left_elbow),
            (JointId::LeftWrist, left_wrist),
            (JointId::RightShoulder, right_shoulder),
            (JointId::RightElbow, right_elbow),
            (JointId::RightWrist, right_wrist),
        ],
    )
}

/// Every joint present at [`SEEN`] confidence in a plausible standing pose.
pub fn full_body() -> JointFrame {
    body(&[
        (JointId::Nose, 0.5, 0.1),
        (JointId::LeftEye, 0.48, 0.09),
        (JointId::RightEye, 0.52, 0.09),
        (JointId::LeftEar, 0.46, 0.1),
        (JointId::RightEar, 0.54, 0.1),
        (JointId::Neck, 0.5, 0.18),
        (JointId::LeftShoulder, 0.42, 0.22),
        (JointId::RightShoulder, 0.58, 0.22),
        (JointId::LeftElbow, 0.4, 0.35),
        (JointId::RightElbow, 0.6, 0.35),
        (JointId::LeftWrist, 0.4, 0.47),
        (JointId::RightWrist, 0.6, 0.47),
        (JointId::Root, 0.5, 0.5),
        (JointId::LeftHip, 0.45, 0.5),
        (JointId::RightHip, 0.55, 0.5),
        (JointId::LeftKnee, 0.45, 0.7),
        (JointId::RightKnee, 0.55, 0.7),
        (JointId::LeftAnkle, 0.45, 0.9),
        (JointId::RightAnkle, 0.55, 0.9),
    ])
}
