use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use log::info;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::metrics::{FrameEvent, MetricsCollector};
use crate::session::SessionController;
use crate::settings::TrackingSettings;
use crate::utils::logging::debug_mode;

use super::estimator::PoseEstimator;
use super::loop_worker::{tracking_loop, TrackingWorker};
use super::slot::FrameSlot;

/// Runs pose estimation and analysis off the capture thread.
///
/// Capture calls [`offer`](Self::offer) at camera rate; the background worker
/// picks up the latest frame whenever it is free.
pub struct TrackingController<E: PoseEstimator> {
    slot: Arc<FrameSlot<E::Frame>>,
    estimator: Arc<E>,
    session: Arc<Mutex<SessionController>>,
    metrics: Option<MetricsCollector>,
    estimate_timeout: Duration,
    handle: Option<JoinHandle<()>>,
    cancel_token: Option<CancellationToken>,
}

impl<E: PoseEstimator> TrackingController<E> {
    pub fn new(
        estimator: E,
        session: Arc<Mutex<SessionController>>,
        settings: &TrackingSettings,
    ) -> Self {
        Self {
            slot: Arc::new(FrameSlot::new()),
            estimator: Arc::new(estimator),
            session,
            metrics: settings.enable_metrics.then(MetricsCollector::new),
            estimate_timeout: Duration::from_millis(settings.estimate_timeout_ms.max(1)),
            handle: None,
            cancel_token: None,
        }
    }

    pub fn session(&self) -> Arc<Mutex<SessionController>> {
        Arc::clone(&self.session)
    }

    pub fn metrics(&self) -> Option<&MetricsCollector> {
        self.metrics.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn start(&mut self) -> Result<()> {
        if self.handle.is_some() {
            bail!("tracking already active");
        }

        let cancel_token = CancellationToken::new();
        let worker = TrackingWorker {
            slot: Arc::clone(&self.slot),
            estimator: Arc::clone(&self.estimator),
            session: Arc::clone(&self.session),
            metrics: self.metrics.clone(),
            estimate_timeout: self.estimate_timeout,
            verbose: debug_mode(),
        };

        let handle = tokio::spawn(tracking_loop(worker, cancel_token.clone()));

        self.handle = Some(handle);
        self.cancel_token = Some(cancel_token);
        info!("tracking started");
        Ok(())
    }

    /// Hands a captured frame to the worker, replacing one it has not reached yet.
    pub async fn offer(&self, frame: E::Frame) {
        let dropped = self.slot.offer(frame);
        if let Some(metrics) = &self.metrics {
            metrics.record_event(FrameEvent::Offered).await;
            if dropped {
                metrics.record_event(FrameEvent::Dropped).await;
            }
        }
    }

    pub async fn stop(&mut self) -> Result<()> {
        if let Some(token) = self.cancel_token.take() {
            token.cancel();
        }

        if let Some(handle) = self.handle.take() {
            handle
                .await
                .context("tracking loop task failed to join")?;
            info!("tracking stopped");
        }
        Ok(())
    }
}
