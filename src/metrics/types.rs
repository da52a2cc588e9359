use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timings for one frame that was estimated and dispatched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameMetrics {
    pub timestamp: DateTime<Utc>,
    pub estimate_ms: u64,
    pub analyze_ms: u64,
    pub total_ms: u64,
    pub in_frame: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemMetrics {
    pub cpu_percent: f32,
    pub memory_mb: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameCounters {
    pub offered: u64,
    /// Replaced in the slot before the worker picked them up.
    pub dropped: u64,
    pub analyzed: u64,
    pub out_of_frame: u64,
    pub no_person: u64,
    pub estimator_failures: u64,
    pub timeouts: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub system: SystemMetrics,
    pub recent_frames: Vec<FrameMetrics>,
    pub counters: FrameCounters,
}
