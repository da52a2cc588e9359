//! Skeletal landmarks delivered by the upstream pose estimator.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::geometry::Point;

/// Landmark identifiers, one per tracked body keypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum JointId {
    Nose,
    LeftEye,
    RightEye,
    LeftEar,
    RightEar,
    Neck,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    Root,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

/// One detected landmark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointSample {
    /// 0-1 normalized, left to right
    pub x: f64,
    /// 0-1 normalized, top to bottom
    pub y: f64,
    /// Estimator certainty (0-1)
    pub confidence: f64,
}

impl JointSample {
    pub const fn new(x: f64, y: f64, confidence: f64) -> Self {
        Self { x, y, confidence }
    }

    pub fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// All joints detected in a single video frame.
///
/// Only detected joints are present. Frames are immutable snapshots: analyzers
/// borrow them for one call and never keep them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JointFrame {
    joints: HashMap<JointId, JointSample>,
}

impl JointFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for tests and replay tooling.
    pub fn with(mut self, id: JointId, sample: JointSample) -> Self {
        self.joints.insert(id, sample);
        self
    }

    pub fn insert(&mut self, id: JointId, sample: JointSample) {
        self.joints.insert(id, sample);
    }

    pub fn get(&self, id: JointId) -> Option<&JointSample> {
        self.joints.get(&id)
    }

    /// Location of a joint regardless of its confidence.
    pub fn point(&self, id: JointId) -> Option<Point> {
        self.joints.get(&id).map(JointSample::location)
    }

    /// True when every joint in `ids` was detected, whatever its confidence.
    pub fn all_present(&self, ids: &[JointId]) -> bool {
        ids.iter().all(|id| self.joints.contains_key(id))
    }

    /// True when every joint in `ids` is present with confidence >= `min_confidence`.
    pub fn all_visible(&self, ids: &[JointId], min_confidence: f64) -> bool {
        ids.iter().all(|id| {
            self.joints
                .get(id)
                .is_some_and(|sample| sample.confidence >= min_confidence)
        })
    }

    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&JointId, &JointSample)> {
        self.joints.iter()
    }
}

impl FromIterator<(JointId, JointSample)> for JointFrame {
    fn from_iter<I: IntoIterator<Item = (JointId, JointSample)>>(iter: I) -> Self {
        Self {
            joints: iter.into_iter().collect(),
        }
    }
}
