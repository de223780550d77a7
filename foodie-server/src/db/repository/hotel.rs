//! Hotel Repository

use super::RepoResult;
use shared::models::Hotel;
use sqlx::SqlitePool;

const HOTEL_COLUMNS: &str =
    "id, name, location, hotel_type, rating, image_url, is_active, created_at";

/// Active hotels, best rated first
///
/// A type filter also matches hotels serving `both`.
pub async fn find_active(pool: &SqlitePool, hotel_type: Option<&str>) -> RepoResult<Vec<Hotel>> {
    let hotels = match hotel_type {
        Some(t) => {
            sqlx::query_as::<_, Hotel>(&format!(
                "SELECT {HOTEL_COLUMNS} FROM hotels \
                 WHERE is_active = 1 AND (hotel_type = ? OR hotel_type = 'both') \
                 ORDER BY rating DESC, id"
            ))
            .bind(t)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Hotel>(&format!(
                "SELECT {HOTEL_COLUMNS} FROM hotels WHERE is_active = 1 ORDER BY rating DESC, id"
            ))
            .fetch_all(pool)
            .await?
        }
    };
    Ok(hotels)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Hotel>> {
    let hotel = sqlx::query_as::<_, Hotel>(&format!(
        "SELECT {HOTEL_COLUMNS} FROM hotels WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(hotel)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM hotels")
        .fetch_one(pool)
        .await?;
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    async fn insert(pool: &SqlitePool, name: &str, hotel_type: &str, rating: f64, active: bool) {
        sqlx::query(
            "INSERT INTO hotels (name, hotel_type, rating, is_active, created_at) VALUES (?, ?, ?, ?, 0)",
        )
        .bind(name)
        .bind(hotel_type)
        .bind(rating)
        .bind(active)
        .execute(pool)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_find_active_filters_type_and_orders_by_rating() {
        let pool = DbService::in_memory().await.unwrap().pool;
        insert(&pool, "Veg Corner", "veg", 4.0, true).await;
        insert(&pool, "Konar Mess", "both", 4.5, true).await;
        insert(&pool, "Chicken Hut", "non-veg", 4.8, true).await;
        insert(&pool, "Old Branch", "veg", 5.0, false).await;

        let all = find_active(&pool, None).await.unwrap();
        let names: Vec<_> = all.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["Chicken Hut", "Konar Mess", "Veg Corner"]);

        let veg = find_active(&pool, Some("veg")).await.unwrap();
        let names: Vec<_> = veg.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["Konar Mess", "Veg Corner"]);

        assert_eq!(count(&pool).await.unwrap(), 4);
        assert!(find_by_id(&pool, 999).await.unwrap().is_none());
    }
}
