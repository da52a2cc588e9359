mod types;

pub use types::{FrameCounters, FrameMetrics, MetricsSnapshot, SystemMetrics};

use std::sync::Arc;
use sysinfo::{Pid, ProcessesToUpdate, System};
use tokio::sync::Mutex;

const MAX_RECENT_FRAMES: usize = 20;

/// Frame outcomes that carry no timing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEvent {
    Offered,
    Dropped,
    NoPerson,
    EstimatorFailure,
    Timeout,
}

/// Cheap to clone; clones share the same counters.
#[derive(Clone)]
pub struct MetricsCollector {
    inner: Arc<Mutex<MetricsState>>,
}

struct MetricsState {
    recent_frames: Vec<FrameMetrics>,
    counters: FrameCounters,
    system: System,
    pid: Pid,
}

impl MetricsState {
    fn sample_system(&mut self) -> SystemMetrics {
        let pid = self.pid;
        self.system.refresh_processes(ProcessesToUpdate::Some(&[pid]));
        match self.system.process(pid) {
            Some(process) => SystemMetrics {
                cpu_percent: process.cpu_usage(),
                memory_mb: process.memory() as f64 / 1024.0 / 1024.0,
            },
            None => SystemMetrics::default(),
        }
    }
}

impl MetricsCollector {
    pub fn new() -> Self {
        let mut system = System::new();
        let pid = Pid::from_u32(std::process::id());

        // CPU usage is a delta between refreshes, so take the first one now.
        system.refresh_processes(ProcessesToUpdate::Some(&[pid]));

        Self {
            inner: Arc::new(Mutex::new(MetricsState {
                recent_frames: Vec::with_capacity(MAX_RECENT_FRAMES),
                counters: FrameCounters::default(),
                system,
                pid,
            })),
        }
    }

    pub async fn record_event(&self, event: FrameEvent) {
        let mut state = self.inner.lock().await;
        let counters = &mut state.counters;
        match event {
            FrameEvent::Offered => counters.offered += 1,
            FrameEvent::Dropped => counters.dropped += 1,
            FrameEvent::NoPerson => counters.no_person += 1,
            FrameEvent::EstimatorFailure => counters.estimator_failures += 1,
            FrameEvent::Timeout => counters.timeouts += 1,
        }
    }

    /// Records a frame that was dispatched to the session controller.
    pub async fn record_frame(&self, metrics: FrameMetrics) {
        let mut state = self.inner.lock().await;

        state.counters.analyzed += 1;
        if !metrics.in_frame {
            state.counters.out_of_frame += 1;
        }

        state.recent_frames.push(metrics);
        if state.recent_frames.len() > MAX_RECENT_FRAMES {
            state.recent_frames.remove(0);
        }
    }

    pub async fn counters(&self) -> FrameCounters {
        self.inner.lock().await.counters
    }

    pub async fn get_snapshot(&self) -> MetricsSnapshot {
        let mut state = self.inner.lock().await;
        MetricsSnapshot {
            system: state.sample_system(),
            recent_frames: state.recent_frames.clone(),
            counters: state.counters,
        }
    }

    pub async fn reset(&self) {
        let mut state = self.inner.lock().await;
        state.recent_frames.clear();
        state.counters = FrameCounters::default();
        state.sample_system();
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}
