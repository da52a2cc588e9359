use anyhow::{Context, Result};

use crate::pose::JointFrame;

/// The landmark model, seen from the tracking worker.
///
/// `estimate` runs on a blocking thread. `Ok(None)` means the model saw nobody.
pub trait PoseEstimator: Send + Sync + 'static {
    type Frame: Send + 'static;

    fn estimate(&self, frame: Self::Frame) -> Result<Option<JointFrame>>;
}

/// Treats each frame as one line of pre-computed landmarks in JSON.
///
/// `null` is a frame with nobody in it; an object maps joint names to samples.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFrameEstimator;

impl PoseEstimator for JsonFrameEstimator {
    type Frame = String;

    fn estimate(&self, frame: String) -> Result<Option<JointFrame>> {
        serde_json::from_str(&frame).context("malformed landmark frame")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::JointId;

    #[test]
    fn test_parses_landmark_object() {
        let line = r#"{"left_knee":{"x":0.4,"y":0.6,"confidence":0.9},"nose":{"x":0.5,"y":0.1,"confidence":0.3}}"#;
        let frame = JsonFrameEstimator.estimate(line.to_string()).unwrap().unwrap();
        assert_eq!(frame.len(), 2);
        let knee = frame.get(JointId::LeftKnee).unwrap();
        assert_eq!(knee.confidence, 0.9);
    }

    #[test]
    fn test_null_means_no_person() {
        assert!(JsonFrameEstimator.estimate("null".into()).unwrap().is_none());
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(JsonFrameEstimator.estimate("{\"left_knee\":".into()).is_err());
        assert!(JsonFrameEstimator.estimate("{\"tail\":{\"x\":0,\"y\":0,\"confidence\":1}}".into()).is_err());
    }
}
