//! Rep counting and form feedback from streamed pose landmarks.
//!
//! Frames of joint estimates go into a [`SessionController`], which runs the
//! analyzer for the selected exercise and publishes a [`SessionSnapshot`] after
//! each one. [`TrackingController`] puts a pose estimator and a latest-frame
//! mailbox in front of that for live capture.

pub mod exercise;
pub mod metrics;
pub mod pose;
pub mod session;
pub mod settings;
pub mod tracking;
pub mod utils;

pub use exercise::{catalog, AnalysisResult, ExerciseKind, ExercisePhase};
pub use pose::{JointFrame, JointId, JointSample};
pub use session::{SessionController, SessionSnapshot, SessionSummary};
pub use settings::{SettingsStore, TrackingSettings};
pub use tracking::{JsonFrameEstimator, PoseEstimator, TrackingController};

/// Info by default; directives in `RUST_LOG` are applied on top.
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
