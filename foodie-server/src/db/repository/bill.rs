//! Bill Repository

use super::RepoResult;
use shared::models::BillWithOrder;
use sqlx::SqlitePool;

const BILL_SELECT: &str = "SELECT b.id AS bill_id, b.bill_number, b.total_amount AS bill_total, \
    b.created_at AS bill_created_at, \
    o.id, o.user_id, o.total_amount, o.status, o.payment_method, o.payment_status, \
    o.delivery_address, o.notes, o.coupon_code, o.discount_amount, o.created_at, \
    u.name AS user_name, u.email AS user_email, u.phone AS user_phone \
    FROM bills b \
    JOIN orders o ON o.id = b.order_id \
    JOIN users u ON u.id = o.user_id";

pub async fn find_by_order_for_user(
    pool: &SqlitePool,
    order_id: i64,
    user_id: i64,
) -> RepoResult<Option<BillWithOrder>> {
    let bill = sqlx::query_as::<_, BillWithOrder>(&format!(
        "{BILL_SELECT} WHERE b.order_id = ? AND o.user_id = ?"
    ))
    .bind(order_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(bill)
}

pub async fn find_by_number_for_user(
    pool: &SqlitePool,
    bill_number: &str,
    user_id: i64,
) -> RepoResult<Option<BillWithOrder>> {
    let bill = sqlx::query_as::<_, BillWithOrder>(&format!(
        "{BILL_SELECT} WHERE b.bill_number = ? AND o.user_id = ?"
    ))
    .bind(bill_number)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(bill)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::repository::order;
    use shared::models::{PlaceOrderItem, PlaceOrderRequest};

    #[tokio::test]
    async fn test_bill_lookup_enforces_ownership() {
        let pool = DbService::in_memory().await.unwrap().pool;
        sqlx::query("INSERT INTO hotels (name, hotel_type, created_at) VALUES ('Konar Mess', 'both', 0)")
            .execute(&pool)
            .await
            .unwrap();
        let user: i64 = sqlx::query_scalar(
            "INSERT INTO users (name, email, phone, password_hash, created_at) VALUES ('Anu', 'anu@x', '9', 'h', 0) RETURNING id",
        )
        .fetch_one(&pool)
        .await
        .unwrap();

        let req = PlaceOrderRequest {
            items: vec![PlaceOrderItem {
                food_id: None,
                food_name: Some("Meals".into()),
                price: 120.0,
                quantity: 1,
                hotel_id: None,
            }],
            ..Default::default()
        };
        let placed = order::place(&pool, user, &req, 120.0).await.unwrap();

        let by_order = find_by_order_for_user(&pool, placed.order_id, user)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_order.bill_number, placed.bill_number);
        assert_eq!(by_order.order.id, placed.order_id);
        assert_eq!(by_order.user_name, "Anu");

        let by_number = find_by_number_for_user(&pool, &placed.bill_number, user)
            .await
            .unwrap();
        assert!(by_number.is_some());

        assert!(find_by_number_for_user(&pool, &placed.bill_number, user + 1)
            .await
            .unwrap()
            .is_none());
        assert!(find_by_order_for_user(&pool, placed.order_id, user + 1)
            .await
            .unwrap()
            .is_none());
    }
}
