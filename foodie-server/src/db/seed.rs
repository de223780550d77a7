//! Demo menu: one restaurant and its day of dishes

use shared::util::now_millis;
use sqlx::SqlitePool;

use super::repository::{RepoResult, hotel};

const HOTEL: (&str, &str, &str, f64) = ("Konar Mess", "Madurai", "both", 4.5);

/// (name, category, price, time_slot, type, image, description)
type SeedItem = (&'static str, &'static str, f64, &'static str, &'static str, &'static str, &'static str);

const ITEMS: &[SeedItem] = &[
    ("Plain Dosa", "South Indian", 40.0, "breakfast", "veg", "images/food/plain-dosa.jpg", "Crispy rice crepe served with chutney and sambar"),
    ("Ghee Dosa", "South Indian", 80.0, "breakfast", "veg", "images/food/ghee-dosa.jpg", "Crispy dosa with generous ghee topping"),
    ("Ven Pongal", "South Indian", 60.0, "breakfast", "veg", "images/food/ven-pongal.jpg", "Rice and lentil comfort food with pepper"),
    ("Medu Vada", "South Indian", 50.0, "breakfast", "veg", "images/food/medu-vada.jpg", "Crispy fried lentil donuts"),
    ("Idiyappam", "South Indian", 45.0, "breakfast", "veg", "images/food/idiyappam.jpg", "String hoppers with coconut milk"),
    ("Uthappam", "South Indian", 70.0, "breakfast", "veg", "images/food/uthappam.jpg", "Thick pancake with vegetable toppings"),
    ("Rava Dosa", "South Indian", 65.0, "breakfast", "veg", "images/food/rava-dosa.jpg", "Crispy semolina crepe"),
    ("Kuzhi Paniyaram", "South Indian", 55.0, "breakfast", "veg", "images/food/kuzhi-paniyaram.jpg", "Savory rice dumplings"),
    ("Chapati", "North Indian", 50.0, "breakfast", "veg", "images/food/chapati.jpg", "Soft wheat flatbread with curry"),
    ("Bread Omelette", "Continental", 60.0, "breakfast", "non-veg", "images/food/bread-omelette.jpg", "Fluffy omelette with bread"),
    ("Sambar Sadham", "South Indian", 120.0, "lunch", "veg", "images/food/sambar-sadham.jpg", "Rice with lentil vegetable stew"),
    ("Rasam Sadham", "South Indian", 110.0, "lunch", "veg", "images/food/rasam-sadham.jpg", "Rice with tangy tamarind soup"),
    ("Avial", "South Indian", 90.0, "lunch", "veg", "images/food/avial.jpg", "Mixed vegetables in coconut gravy"),
    ("Chicken Gravy", "Non-Veg", 160.0, "lunch", "non-veg", "images/food/chicken-gravy.jpg", "Spicy chicken curry"),
    ("Mutton Gravy", "Non-Veg", 220.0, "lunch", "non-veg", "images/food/mutton-gravy.jpg", "Tender mutton in aromatic gravy"),
    ("Chicken Pepper Fry", "Non-Veg", 180.0, "lunch", "non-veg", "images/food/chicken-pepper-fry.jpg", "Spicy pepper chicken"),
    ("Bajji", "Snacks", 45.0, "evening", "veg", "images/food/bajji.jpg", "Crispy fried fritters"),
    ("Bonda", "Snacks", 40.0, "evening", "veg", "images/food/bonda.jpg", "Potato dumplings"),
    ("Samosa", "Snacks", 35.0, "evening", "veg", "images/food/samosa.jpg", "Crispy pastry with potato filling"),
    ("Onion Vada", "Snacks", 45.0, "evening", "veg", "images/food/onion-vada.jpg", "Crispy onion fritters"),
    ("Egg Bajji", "Snacks", 50.0, "evening", "non-veg", "images/food/egg-bajji.jpg", "Egg coated fritters"),
    ("Filter Coffee", "Beverage", 30.0, "evening", "beverage", "images/food/filter-coffee.jpg", "Traditional South Indian coffee"),
    ("Parotta", "Bread", 70.0, "dinner", "veg", "images/food/parotta.jpg", "Flaky layered flatbread"),
    ("Bun Parotta", "Bread", 80.0, "dinner", "veg", "images/food/bun-parotta.jpg", "Soft bun-style parotta"),
    ("Chilli Parotta", "Fusion", 95.0, "dinner", "veg", "images/food/chilli-parotta.jpg", "Spicy stir-fried parotta"),
    ("Kothu Parotta", "Fusion", 90.0, "dinner", "non-veg", "images/food/kothu-parotta.jpg", "Chopped parotta with egg and spices"),
    ("Egg Kothu Parotta", "Fusion", 100.0, "dinner", "non-veg", "images/food/egg-kothu-parotta.jpg", "Egg kothu parotta"),
    ("Chicken Kothu Parotta", "Fusion", 130.0, "dinner", "non-veg", "images/food/chicken-kothu-parotta.jpg", "Chicken kothu parotta"),
    ("Chicken 65", "Appetizer", 150.0, "dinner", "non-veg", "images/food/chicken-65.jpg", "Spicy fried chicken"),
];

/// Insert the demo menu into an empty database
///
/// Returns `true` when rows were written. A database that already has a
/// hotel is left alone.
pub async fn seed_if_empty(pool: &SqlitePool) -> RepoResult<bool> {
    if hotel::count(pool).await? > 0 {
        tracing::debug!("Database already has hotels, skipping demo seed");
        return Ok(false);
    }

    let now = now_millis();
    let mut tx = pool.begin().await?;

    let (hotel_name, location, hotel_type, rating) = HOTEL;
    let hotel_id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO hotels (name, location, hotel_type, rating, created_at) VALUES (?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(hotel_name)
    .bind(location)
    .bind(hotel_type)
    .bind(rating)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    for &(name, category, price, time_slot, food_type, image_url, description) in ITEMS {
        let food_id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO food_items (name, category, price, time_slot, food_type, image_url, description, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(name)
        .bind(category)
        .bind(price)
        .bind(time_slot)
        .bind(food_type)
        .bind(image_url)
        .bind(description)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO hotel_food (hotel_id, food_id) VALUES (?, ?)")
            .bind(hotel_id)
            .bind(food_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    tracing::info!(hotel = hotel_name, items = ITEMS.len(), "Seeded demo menu");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::repository::food;
    use shared::models::FoodQuery;

    #[tokio::test]
    async fn test_seed_runs_once() {
        let db = DbService::in_memory().await.unwrap();
        assert!(seed_if_empty(&db.pool).await.unwrap());
        assert!(!seed_if_empty(&db.pool).await.unwrap());

        assert_eq!(hotel::count(&db.pool).await.unwrap(), 1);
        let items = food::find_all(&db.pool, &FoodQuery::default()).await.unwrap();
        assert_eq!(items.len(), ITEMS.len());
        assert!(items.iter().all(|item| item.is_available && !item.is_overridden()));

        let hotel_items = food::find_available_by_hotel(&db.pool, 1).await.unwrap();
        assert_eq!(hotel_items.len(), ITEMS.len());
    }
}
