//! HTTP server lifecycle

use std::time::Duration;

use crate::api::build_app;
use crate::availability::AvailabilityScheduler;
use crate::core::{BackgroundTasks, Config, Result, ServerError, ServerState, TaskKind};

const SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(5 * 60);

pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    pub fn new(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Bind, start background tasks, serve until Ctrl-C
    pub async fn run(self) -> Result<()> {
        let addr = format!("0.0.0.0:{}", self.config.http_port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;

        let mut tasks = BackgroundTasks::new();
        self.start_background_tasks(&mut tasks);
        tasks.log_summary();

        tracing::info!(
            %addr,
            environment = %self.config.environment,
            timezone = %self.config.timezone,
            "Foodie Delight server listening"
        );

        let app = build_app(&self.state);
        let shutdown = tasks.shutdown_token();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => tracing::info!("Shutting down..."),
                    _ = shutdown.cancelled() => {}
                }
            })
            .await
            .map_err(|e| ServerError::Internal(e.into()))?;

        tasks.shutdown().await;
        Ok(())
    }

    fn start_background_tasks(&self, tasks: &mut BackgroundTasks) {
        let scheduler = AvailabilityScheduler::new(
            self.state.availability.clone(),
            self.config.availability_initial_delay(),
            self.config.availability_interval(),
            tasks.shutdown_token(),
        );
        tasks.spawn("availability_scheduler", TaskKind::Periodic, scheduler.run());

        let sessions = self.state.sessions.clone();
        let shutdown = tasks.shutdown_token();
        tasks.spawn("session_cleanup", TaskKind::Periodic, async move {
            let mut ticker = tokio::time::interval(SESSION_PURGE_INTERVAL);
            ticker.tick().await;
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let purged = sessions.purge_expired();
                        if purged > 0 {
                            tracing::debug!(purged, "Expired sessions removed");
                        }
                    }
                    _ = shutdown.cancelled() => return,
                }
            }
        });
    }
}
