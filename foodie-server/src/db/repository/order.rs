//! Order Repository

use super::{RepoError, RepoResult};
use shared::models::{
    AdminOrderSummary, DEFAULT_HOTEL_ID, DEFAULT_ITEM_NAME, DEFAULT_PAYMENT_METHOD, Order,
    OrderItem, OrderStatus, OrderWithCustomer, PaymentStatus, PlaceOrderRequest, PlacedOrder,
    bill_number,
};
use shared::util::now_millis;
use sqlx::SqlitePool;

const ORDER_COLUMNS: &str = "o.id, o.user_id, o.total_amount, o.status, o.payment_method, \
    o.payment_status, o.delivery_address, o.notes, o.coupon_code, o.discount_amount, o.created_at";

/// Write order, lines and bill atomically
///
/// Any failure rolls the whole order back.
pub async fn place(
    pool: &SqlitePool,
    user_id: i64,
    req: &PlaceOrderRequest,
    total_amount: f64,
) -> RepoResult<PlacedOrder> {
    if req.items.is_empty() {
        return Err(RepoError::Validation("Order has no items".into()));
    }

    let created_at = now_millis();
    let payment_method = req
        .payment_method
        .as_deref()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or(DEFAULT_PAYMENT_METHOD);

    let mut tx = pool.begin().await?;

    let order_id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO orders \
         (user_id, total_amount, status, payment_method, payment_status, delivery_address, notes, coupon_code, discount_amount, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(user_id)
    .bind(total_amount)
    .bind(OrderStatus::Confirmed)
    .bind(payment_method)
    .bind(PaymentStatus::Pending)
    .bind(req.full_address())
    .bind(req.notes.as_deref().filter(|n| !n.is_empty()))
    .bind(req.coupon_code.as_deref().filter(|c| !c.is_empty()))
    .bind(req.discount_amount.unwrap_or(0.0))
    .bind(created_at)
    .fetch_one(&mut *tx)
    .await?;

    for item in &req.items {
        sqlx::query(
            "INSERT INTO order_items (order_id, item_name, price, quantity, hotel_id, food_id) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(order_id)
        .bind(
            item.food_name
                .as_deref()
                .filter(|n| !n.is_empty())
                .unwrap_or(DEFAULT_ITEM_NAME),
        )
        .bind(item.price)
        .bind(item.quantity)
        .bind(item.hotel_id.unwrap_or(DEFAULT_HOTEL_ID))
        .bind(item.food_id)
        .execute(&mut *tx)
        .await?;
    }

    let bill_number = bill_number(created_at, order_id);
    sqlx::query("INSERT INTO bills (order_id, bill_number, total_amount, created_at) VALUES (?, ?, ?, ?)")
        .bind(order_id)
        .bind(&bill_number)
        .bind(total_amount)
        .bind(created_at)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(PlacedOrder {
        order_id,
        bill_number,
        total_amount,
    })
}

/// Customer's orders, newest first
pub async fn find_by_user(pool: &SqlitePool, user_id: i64) -> RepoResult<Vec<Order>> {
    let orders = sqlx::query_as::<_, Order>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders o WHERE o.user_id = ? ORDER BY o.created_at DESC, o.id DESC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(orders)
}

/// Order with customer and bill, only when owned by `user_id`
pub async fn find_detail_for_user(
    pool: &SqlitePool,
    order_id: i64,
    user_id: i64,
) -> RepoResult<Option<OrderWithCustomer>> {
    let row = sqlx::query_as::<_, OrderWithCustomer>(&format!(
        "SELECT {ORDER_COLUMNS}, u.name AS user_name, u.email AS user_email, u.phone AS user_phone, \
         b.bill_number AS bill_number \
         FROM orders o \
         JOIN users u ON u.id = o.user_id \
         LEFT JOIN bills b ON b.order_id = o.id \
         WHERE o.id = ? AND o.user_id = ?"
    ))
    .bind(order_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn is_owned_by(pool: &SqlitePool, order_id: i64, user_id: i64) -> RepoResult<bool> {
    let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders WHERE id = ? AND user_id = ?")
        .bind(order_id)
        .bind(user_id)
        .fetch_one(pool)
        .await?;
    Ok(n > 0)
}

/// Order lines with hotel names, in insertion order
pub async fn find_items(pool: &SqlitePool, order_id: i64) -> RepoResult<Vec<OrderItem>> {
    let items = sqlx::query_as::<_, OrderItem>(
        "SELECT oi.id, oi.order_id, oi.item_name, oi.price, oi.quantity, oi.hotel_id, oi.food_id, \
         h.name AS hotel_name \
         FROM order_items oi \
         LEFT JOIN hotels h ON h.id = oi.hotel_id \
         WHERE oi.order_id = ? \
         ORDER BY oi.id",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;
    Ok(items)
}

/// Every order with customer contact and line count, newest first
pub async fn find_all_for_admin(pool: &SqlitePool) -> RepoResult<Vec<AdminOrderSummary>> {
    let rows = sqlx::query_as::<_, AdminOrderSummary>(&format!(
        "SELECT {ORDER_COLUMNS}, u.name AS user_name, u.phone AS user_phone, \
         COUNT(oi.id) AS item_count \
         FROM orders o \
         JOIN users u ON u.id = o.user_id \
         LEFT JOIN order_items oi ON oi.order_id = o.id \
         GROUP BY o.id \
         ORDER BY o.created_at DESC, o.id DESC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn update_status(pool: &SqlitePool, order_id: i64, status: OrderStatus) -> RepoResult<()> {
    let result = sqlx::query("UPDATE orders SET status = ? WHERE id = ?")
        .bind(status)
        .bind(order_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Order {order_id} not found")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use shared::models::PlaceOrderItem;

    async fn setup() -> (SqlitePool, i64, i64) {
        let pool = DbService::in_memory().await.unwrap().pool;
        let hotel = sqlx::query_scalar::<_, i64>(
            "INSERT INTO hotels (name, hotel_type, created_at) VALUES ('Konar Mess', 'both', 0) RETURNING id",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        let user = sqlx::query_scalar::<_, i64>(
            "INSERT INTO users (name, email, phone, password_hash, created_at) VALUES ('Anu', 'anu@x', '9', 'h', 0) RETURNING id",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        (pool, hotel, user)
    }

    fn request(hotel: i64) -> PlaceOrderRequest {
        PlaceOrderRequest {
            items: vec![
                PlaceOrderItem {
                    food_id: None,
                    food_name: Some("Idli".into()),
                    price: 40.0,
                    quantity: 2,
                    hotel_id: Some(hotel),
                },
                PlaceOrderItem {
                    food_id: None,
                    food_name: None,
                    price: 20.0,
                    quantity: 1,
                    hotel_id: None,
                },
            ],
            delivery_address: Some("12 North Street".into()),
            landmark: Some("Temple".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_place_writes_order_items_and_bill() {
        let (pool, hotel, user) = setup().await;
        let placed = place(&pool, user, &request(hotel), 100.0).await.unwrap();
        assert!(placed.bill_number.starts_with("BILL-"));
        assert!(placed.bill_number.ends_with(&format!("-{}", placed.order_id)));

        let detail = find_detail_for_user(&pool, placed.order_id, user)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(detail.order.status, OrderStatus::Confirmed);
        assert_eq!(detail.order.payment_method, DEFAULT_PAYMENT_METHOD);
        assert_eq!(detail.order.payment_status, PaymentStatus::Pending);
        assert_eq!(
            detail.order.delivery_address.as_deref(),
            Some("12 North Street, Near Temple")
        );
        assert_eq!(detail.bill_number.as_deref(), Some(placed.bill_number.as_str()));

        let items = find_items(&pool, placed.order_id).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].item_name, DEFAULT_ITEM_NAME);
        assert_eq!(items[1].hotel_id, Some(DEFAULT_HOTEL_ID));
        assert_eq!(items[0].hotel_name.as_deref(), Some("Konar Mess"));
    }

    #[tokio::test]
    async fn test_place_rolls_back_on_failed_line() {
        let (pool, hotel, user) = setup().await;
        let mut req = request(hotel);
        // Unknown food id violates the foreign key
        req.items[1].food_id = Some(4242);

        assert!(place(&pool, user, &req, 100.0).await.is_err());

        let orders: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&pool)
            .await
            .unwrap();
        let bills: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bills")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!((orders, bills), (0, 0));
    }

    #[tokio::test]
    async fn test_ownership_and_admin_listing() {
        let (pool, hotel, user) = setup().await;
        let placed = place(&pool, user, &request(hotel), 100.0).await.unwrap();

        assert!(is_owned_by(&pool, placed.order_id, user).await.unwrap());
        assert!(!is_owned_by(&pool, placed.order_id, user + 1).await.unwrap());
        assert!(find_detail_for_user(&pool, placed.order_id, user + 1)
            .await
            .unwrap()
            .is_none());

        let admin = find_all_for_admin(&pool).await.unwrap();
        assert_eq!(admin.len(), 1);
        assert_eq!(admin[0].item_count, 2);
        assert_eq!(admin[0].user_name, "Anu");

        update_status(&pool, placed.order_id, OrderStatus::Delivered)
            .await
            .unwrap();
        let orders = find_by_user(&pool, user).await.unwrap();
        assert_eq!(orders[0].status, OrderStatus::Delivered);

        assert!(matches!(
            update_status(&pool, 999, OrderStatus::Cancelled).await,
            Err(RepoError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_place_rejects_empty_order() {
        let (pool, _, user) = setup().await;
        let req = PlaceOrderRequest::default();
        assert!(matches!(
            place(&pool, user, &req, 0.0).await,
            Err(RepoError::Validation(_))
        ));
    }
}
