use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use tokio::sync::Mutex;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

use crate::metrics::{FrameEvent, FrameMetrics, MetricsCollector};
use crate::pose::JointFrame;
use crate::session::SessionController;

use super::estimator::PoseEstimator;
use super::slot::FrameSlot;

// Set to false to silence this module
const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_error, log_info, log_warn};

/// Everything the worker task needs, moved into it on start.
pub struct TrackingWorker<E: PoseEstimator> {
    pub slot: Arc<FrameSlot<E::Frame>>,
    pub estimator: Arc<E>,
    pub session: Arc<Mutex<SessionController>>,
    pub metrics: Option<MetricsCollector>,
    pub estimate_timeout: Duration,
    /// Log every frame at info instead of debug.
    pub verbose: bool,
}

enum Outcome {
    Dispatched(FrameMetrics),
    NoPerson,
}

type Estimate = JoinHandle<Result<Option<JointFrame>>>;

pub async fn tracking_loop<E: PoseEstimator>(
    worker: TrackingWorker<E>,
    cancel_token: CancellationToken,
) {
    log_info!(
        "tracking loop started (estimate timeout {}ms)",
        worker.estimate_timeout.as_millis()
    );

    // A timed-out estimate keeps its blocking thread; no new one starts until it returns.
    let mut abandoned: Option<Estimate> = None;

    loop {
        if let Some(estimate) = abandoned.take() {
            tokio::select! {
                _ = estimate => {
                    log_debug!("abandoned estimate returned, result discarded");
                }
                _ = cancel_token.cancelled() => {
                    log_info!("tracking loop shutting down");
                    break;
                }
            }
        }

        tokio::select! {
            frame = worker.slot.next() => {
                let started = Instant::now();
                let mut estimate = spawn_estimate(&worker, frame);

                let joined = match tokio::time::timeout(worker.estimate_timeout, &mut estimate).await {
                    Ok(joined) => joined,
                    Err(_) => {
                        log_warn!(
                            "pose estimation timeout (> {}ms), frame abandoned",
                            worker.estimate_timeout.as_millis()
                        );
                        worker.record_event(FrameEvent::Timeout).await;
                        abandoned = Some(estimate);
                        continue;
                    }
                };

                match process_frame(&worker, joined, started).await {
                    Ok(Outcome::Dispatched(metrics)) => {
                        if worker.verbose {
                            log_info!(
                                "frame dispatched in {}ms (estimate {}ms, in_frame={})",
                                metrics.total_ms, metrics.estimate_ms, metrics.in_frame
                            );
                        }
                        worker.record_frame(metrics).await;
                    }
                    Ok(Outcome::NoPerson) => {
                        log_debug!("no person in frame");
                        worker.record_event(FrameEvent::NoPerson).await;
                    }
                    Err(err) => {
                        log_error!("pose estimation failed: {err:?}");
                        worker.record_event(FrameEvent::EstimatorFailure).await;
                    }
                }
            }
            _ = cancel_token.cancelled() => {
                log_info!("tracking loop shutting down");
                break;
            }
        }
    }
}

fn spawn_estimate<E: PoseEstimator>(worker: &TrackingWorker<E>, frame: E::Frame) -> Estimate {
    let estimator = Arc::clone(&worker.estimator);
    tokio::task::spawn_blocking(move || estimator.estimate(frame))
}

async fn process_frame<E: PoseEstimator>(
    worker: &TrackingWorker<E>,
    joined: Result<Result<Option<JointFrame>>, JoinError>,
    started: Instant,
) -> Result<Outcome> {
    let joints = joined
        .context("pose estimation worker join failed")?
        .map_err(|err| anyhow!("estimator rejected frame: {err:#}"))?;
    let estimate_ms = started.elapsed().as_millis() as u64;

    let Some(joints) = joints else {
        return Ok(Outcome::NoPerson);
    };

    let analyze_start = Instant::now();
    let result = worker.session.lock().await.dispatch(&joints);
    let analyze_ms = analyze_start.elapsed().as_millis() as u64;

    Ok(Outcome::Dispatched(FrameMetrics {
        timestamp: Utc::now(),
        estimate_ms,
        analyze_ms,
        total_ms: started.elapsed().as_millis() as u64,
        in_frame: result.in_frame,
    }))
}

impl<E: PoseEstimator> TrackingWorker<E> {
    async fn record_event(&self, event: FrameEvent) {
        if let Some(metrics) = &self.metrics {
            metrics.record_event(event).await;
        }
    }

    async fn record_frame(&self, frame: FrameMetrics) {
        if let Some(metrics) = &self.metrics {
            metrics.record_frame(frame).await;
        }
    }
}
