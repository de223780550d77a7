//! Periodic availability scheduler
//!
//! Waits out an initial delay after startup, runs one pass, then one pass
//! per interval until shutdown. Registered as `TaskKind::Periodic`.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use super::service::AvailabilityService;

pub struct AvailabilityScheduler {
    service: Arc<AvailabilityService>,
    initial_delay: Duration,
    interval: Duration,
    shutdown: CancellationToken,
}

impl AvailabilityScheduler {
    pub fn new(
        service: Arc<AvailabilityService>,
        initial_delay: Duration,
        interval: Duration,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            service,
            initial_delay,
            interval,
            shutdown,
        }
    }

    /// Main loop
    pub async fn run(self) {
        tracing::info!(
            initial_delay_secs = self.initial_delay.as_secs(),
            interval_secs = self.interval.as_secs(),
            "Availability scheduler started"
        );

        tokio::select! {
            _ = tokio::time::sleep(self.initial_delay) => {}
            _ = self.shutdown.cancelled() => {
                tracing::info!("Availability scheduler received shutdown signal");
                return;
            }
        }

        // Startup pass
        self.tick().await;

        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick completes immediately
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.tick().await;
                }
                _ = self.shutdown.cancelled() => {
                    tracing::info!("Availability scheduler received shutdown signal");
                    return;
                }
            }
        }
    }

    async fn tick(&self) {
        // The service logs the outcome; a failed pass just waits for the next tick
        if self.service.run_pass().await.is_err() {
            tracing::debug!("Scheduled availability pass failed, retrying next interval");
        }
    }
}
