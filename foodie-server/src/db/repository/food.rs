//! Food Item Repository

use super::{RepoError, RepoResult};
use shared::models::{FoodItem, FoodItemSave, FoodQuery};
use shared::util::now_millis;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

const FOOD_COLUMNS: &str = "id, name, category, price, time_slot, food_type, image_url, \
    description, recipe_details, api_meal_id, is_available, manual_override, created_at";

/// Menu listing with optional filters, ordered by name
///
/// Availability does not filter this listing; callers see every item
/// with its current flag.
pub async fn find_all(pool: &SqlitePool, query: &FoodQuery) -> RepoResult<Vec<FoodItem>> {
    let mut qb: QueryBuilder<Sqlite> =
        QueryBuilder::new(format!("SELECT {FOOD_COLUMNS} FROM food_items WHERE 1 = 1"));
    if let Some(slot) = query.time_slot.as_deref().filter(|s| !s.is_empty()) {
        qb.push(" AND time_slot = ").push_bind(slot.to_string());
    }
    if let Some(food_type) = query.food_type.as_deref().filter(|s| !s.is_empty()) {
        qb.push(" AND food_type = ").push_bind(food_type.to_string());
    }
    if let Some(category) = query.category.as_deref().filter(|s| !s.is_empty()) {
        qb.push(" AND category = ").push_bind(category.to_string());
    }
    qb.push(" ORDER BY name");

    let items = qb.build_query_as::<FoodItem>().fetch_all(pool).await?;
    Ok(items)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<FoodItem>> {
    let item = sqlx::query_as::<_, FoodItem>(&format!(
        "SELECT {FOOD_COLUMNS} FROM food_items WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(item)
}

/// Currently orderable items served by one hotel
pub async fn find_available_by_hotel(pool: &SqlitePool, hotel_id: i64) -> RepoResult<Vec<FoodItem>> {
    let items = sqlx::query_as::<_, FoodItem>(
        "SELECT f.id, f.name, f.category, f.price, f.time_slot, f.food_type, f.image_url, \
         f.description, f.recipe_details, f.api_meal_id, f.is_available, f.manual_override, f.created_at \
         FROM food_items f \
         JOIN hotel_food hf ON hf.food_id = f.id \
         WHERE hf.hotel_id = ? AND f.is_available = 1 \
         ORDER BY f.name",
    )
    .bind(hotel_id)
    .fetch_all(pool)
    .await?;
    Ok(items)
}

/// `(id, time_slot)` of every item the evaluator owns (override false or NULL)
pub async fn find_schedule_candidates(pool: &SqlitePool) -> RepoResult<Vec<(i64, String)>> {
    let rows = sqlx::query_as::<_, (i64, String)>(
        "SELECT id, time_slot FROM food_items \
         WHERE manual_override = 0 OR manual_override IS NULL \
         ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Unconditional write of the computed flag; returns rows affected
pub async fn set_available(pool: &SqlitePool, id: i64, is_available: bool) -> RepoResult<u64> {
    let result = sqlx::query("UPDATE food_items SET is_available = ? WHERE id = ?")
        .bind(is_available)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Pin the flag and take the item away from the evaluator in one statement
pub async fn set_override(pool: &SqlitePool, id: i64, is_available: bool) -> RepoResult<()> {
    let result =
        sqlx::query("UPDATE food_items SET is_available = ?, manual_override = 1 WHERE id = ?")
            .bind(is_available)
            .bind(id)
            .execute(pool)
            .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Food item {id} not found")));
    }
    Ok(())
}

/// Hand the item back to the evaluator; `is_available` is left as is
pub async fn clear_override(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let result = sqlx::query("UPDATE food_items SET manual_override = 0 WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Food item {id} not found")));
    }
    Ok(())
}

/// Insert a new item and offer it from every active hotel
pub async fn create(pool: &SqlitePool, data: &FoodItemSave) -> RepoResult<FoodItem> {
    let mut tx = pool.begin().await?;

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO food_items \
         (name, category, price, time_slot, food_type, image_url, description, recipe_details, is_available, manual_override, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, 0, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.category)
    .bind(data.price)
    .bind(data.time_slot.as_str())
    .bind(data.food_type.as_str())
    .bind(&data.image_url)
    .bind(&data.description)
    .bind(&data.recipe_details)
    .bind(data.is_available)
    .bind(now_millis())
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query(
        "INSERT OR IGNORE INTO hotel_food (hotel_id, food_id) \
         SELECT id, ? FROM hotels WHERE is_active = 1",
    )
    .bind(id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create food item".into()))
}

/// Replace the editable fields of an existing item
///
/// Override state is untouched, so an item still owned by the evaluator
/// gets its flag recomputed at the next pass.
pub async fn update(pool: &SqlitePool, id: i64, data: &FoodItemSave) -> RepoResult<FoodItem> {
    let result = sqlx::query(
        "UPDATE food_items SET name = ?, category = ?, price = ?, time_slot = ?, food_type = ?, \
         image_url = ?, description = ?, recipe_details = ?, is_available = ? WHERE id = ?",
    )
    .bind(&data.name)
    .bind(&data.category)
    .bind(data.price)
    .bind(data.time_slot.as_str())
    .bind(data.food_type.as_str())
    .bind(&data.image_url)
    .bind(&data.description)
    .bind(&data.recipe_details)
    .bind(data.is_available)
    .bind(id)
    .execute(pool)
    .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Food item {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Food item {id} not found")))
}

/// Remove an item, its hotel links, and detach historical order lines
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM hotel_food WHERE food_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("UPDATE order_items SET food_id = NULL WHERE food_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    let result = sqlx::query("DELETE FROM food_items WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    if result.rows_affected() == 0 {
        // tx dropped here rolls back
        return Err(RepoError::NotFound(format!("Food item {id} not found")));
    }

    tx.commit().await?;
    Ok(())
}
