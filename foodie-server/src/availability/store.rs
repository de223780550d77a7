//! Storage seam for evaluation passes

use super::AvailabilityError;
use super::evaluator::Candidate;
use crate::db::repository::food;
use async_trait::async_trait;
use sqlx::SqlitePool;

/// Per-item read and write the evaluator depends on
#[async_trait]
pub trait AvailabilityStore: Send + Sync {
    /// Every item not under manual override
    async fn load_candidates(&self) -> Result<Vec<Candidate>, AvailabilityError>;

    async fn write_availability(&self, id: i64, is_available: bool) -> Result<(), AvailabilityError>;
}

/// `food_items` table backed store
#[derive(Clone)]
pub struct SqliteAvailabilityStore {
    pool: SqlitePool,
}

impl SqliteAvailabilityStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AvailabilityStore for SqliteAvailabilityStore {
    async fn load_candidates(&self) -> Result<Vec<Candidate>, AvailabilityError> {
        let rows = food::find_schedule_candidates(&self.pool)
            .await
            .map_err(|e| AvailabilityError::Read(e.to_string()))?;
        // The query already excludes overridden rows
        Ok(rows
            .into_iter()
            .map(|(id, slot)| Candidate::new(id, &slot, Some(false)))
            .collect())
    }

    async fn write_availability(&self, id: i64, is_available: bool) -> Result<(), AvailabilityError> {
        let affected = food::set_available(&self.pool, id, is_available)
            .await
            .map_err(|e| AvailabilityError::Write {
                id,
                reason: e.to_string(),
            })?;
        if affected == 0 {
            // Deleted between read and write
            tracing::debug!(food_id = id, "Availability write matched no row");
        }
        Ok(())
    }
}
