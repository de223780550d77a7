//! Restaurant Status Repository (single row, id = 1)

use super::RepoResult;
use shared::models::RestaurantStatus;
use shared::util::now_millis;
use sqlx::SqlitePool;

/// Stored status, or the default (open, breakfast) when never set
pub async fn get(pool: &SqlitePool) -> RepoResult<RestaurantStatus> {
    let status = sqlx::query_as::<_, RestaurantStatus>(
        "SELECT is_open, current_serving_time, updated_at FROM restaurant_status WHERE id = 1",
    )
    .fetch_optional(pool)
    .await?;
    Ok(status.unwrap_or_default())
}

/// Merge the given fields over the current status
pub async fn update(
    pool: &SqlitePool,
    is_open: Option<bool>,
    current_serving_time: Option<&str>,
) -> RepoResult<RestaurantStatus> {
    let current = get(pool).await?;
    let is_open = is_open.unwrap_or(current.is_open);
    let serving = current_serving_time.unwrap_or(&current.current_serving_time);

    sqlx::query(
        "INSERT INTO restaurant_status (id, is_open, current_serving_time, updated_at) VALUES (1, ?, ?, ?) \
         ON CONFLICT (id) DO UPDATE SET is_open = excluded.is_open, \
         current_serving_time = excluded.current_serving_time, updated_at = excluded.updated_at",
    )
    .bind(is_open)
    .bind(serving)
    .bind(now_millis())
    .execute(pool)
    .await?;

    get(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    #[tokio::test]
    async fn test_default_then_partial_updates() {
        let pool = DbService::in_memory().await.unwrap().pool;

        let initial = get(&pool).await.unwrap();
        assert!(initial.is_open);
        assert_eq!(initial.current_serving_time, "breakfast");

        let closed = update(&pool, Some(false), None).await.unwrap();
        assert!(!closed.is_open);
        assert_eq!(closed.current_serving_time, "breakfast");

        let lunch = update(&pool, None, Some("lunch")).await.unwrap();
        assert!(!lunch.is_open);
        assert_eq!(lunch.current_serving_time, "lunch");
        assert!(lunch.updated_at > 0);
    }
}
