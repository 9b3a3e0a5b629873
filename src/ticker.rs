//! Ticker - background task that recomputes the age at a fixed cadence
//!
//! The engine stays stateless; the ticker just calls it again every period
//! with a fresh `now` and publishes the latest result on a watch channel.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info, warn};

use crate::birth::BirthInstant;
use crate::clock::Clock;
use crate::engine::{CalculationResult, calculate_for};

pub const DEFAULT_PERIOD: Duration = Duration::from_secs(1);

/// Owns the periodic recomputation task.
///
/// Dropping the ticker aborts the task; [`Ticker::stop`] shuts it down and
/// waits for it.
pub struct Ticker {
    latest: watch::Receiver<CalculationResult>,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<u64>>,
}

impl Ticker {
    /// Computes the first result right away, then once per `period`.
    ///
    /// Must be called inside a tokio runtime.
    pub fn start(birth: BirthInstant, clock: Arc<dyn Clock>, period: Duration) -> Self {
        let (tx, rx) = watch::channel(calculate_for(&birth, clock.now()));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        info!(
            birth = %birth.instant(),
            period_ms = period.as_millis() as u64,
            "Starting age ticker"
        );

        let task = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut ticks = 0u64;

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    _ = interval.tick() => {
                        let result = calculate_for(&birth, clock.now());
                        ticks += 1;
                        if tx.send(result).is_err() {
                            debug!("No subscribers left, ending ticker");
                            break;
                        }
                        debug!(ticks, total_seconds = result.age.total_seconds, "Age recomputed");
                    }
                }
            }

            info!(ticks, "Age ticker stopped");
            ticks
        });

        Self {
            latest: rx,
            shutdown: Some(shutdown_tx),
            task: Some(task),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<CalculationResult> {
        self.latest.clone()
    }

    pub fn latest(&self) -> CalculationResult {
        *self.latest.borrow()
    }

    /// Stops the task and returns how many ticks it ran.
    pub async fn stop(mut self) -> u64 {
        if let Some(shutdown) = self.shutdown.take() {
            // The task may already have exited on its own.
            let _ = shutdown.send(());
        }

        match self.task.take() {
            Some(task) => match task.await {
                Ok(ticks) => ticks,
                Err(e) => {
                    warn!("Age ticker task failed: {e}");
                    0
                }
            },
            None => 0,
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
