pub mod controller;
pub mod estimator;
pub mod loop_worker;
pub mod slot;

pub use controller::TrackingController;
pub use estimator::{JsonFrameEstimator, PoseEstimator};
pub use slot::FrameSlot;
