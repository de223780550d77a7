//! Shared server state

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::SessionStore;
use crate::availability::{AvailabilityService, Clock, SqliteAvailabilityStore, SystemClock};
use crate::core::{Config, Result};
use crate::db::{DbService, seed};

/// Cloned into every handler; all fields are cheap handles
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
    pub sessions: SessionStore,
    pub availability: Arc<AvailabilityService>,
}

impl ServerState {
    /// Open the database, seed demo data if asked, and wire services
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::connect(&config.database_url).await?;

        if config.seed_demo_data {
            // A failed seed leaves an empty menu, not a dead server
            if let Err(e) = seed::seed_if_empty(&db.pool).await {
                tracing::warn!(error = %e, "Failed to seed demo data");
            }
        }

        let clock = Arc::new(SystemClock::new(config.timezone));
        Ok(Self::with_clock(config.clone(), db.pool, clock))
    }

    /// Build state over an existing pool with an explicit clock
    pub fn with_clock(config: Config, pool: SqlitePool, clock: Arc<dyn Clock>) -> Self {
        let store = Arc::new(SqliteAvailabilityStore::new(pool.clone()));
        let availability = Arc::new(AvailabilityService::new(store, clock));
        let sessions = SessionStore::new(config.session_ttl());
        Self {
            config,
            pool,
            sessions,
            availability,
        }
    }
}
