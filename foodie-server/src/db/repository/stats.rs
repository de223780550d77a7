//! Admin reporting queries
//!
//! Day and month boundaries arrive as Unix millis already resolved in the
//! business time zone (see `utils::time`).

use super::RepoResult;
use rust_decimal::prelude::{Decimal, FromPrimitive, RoundingStrategy, ToPrimitive};
use shared::models::{RevenueReport, UserStats};
use sqlx::SqlitePool;

/// Orders counted as revenue
const REVENUE_STATUSES: &str =
    "status IN ('Order Confirmed', 'Preparing', 'Out for Delivery', 'Delivered')";

pub async fn user_stats(pool: &SqlitePool, day_start: i64, month_start: i64) -> RepoResult<UserStats> {
    let (total, new_this_month, active_today) = sqlx::query_as::<_, (i64, i64, i64)>(
        "SELECT COUNT(*), \
         COALESCE(SUM(CASE WHEN created_at >= ? THEN 1 ELSE 0 END), 0), \
         COALESCE(SUM(CASE WHEN created_at >= ? THEN 1 ELSE 0 END), 0) \
         FROM users",
    )
    .bind(month_start)
    .bind(day_start)
    .fetch_one(pool)
    .await?;

    Ok(UserStats {
        total,
        new_this_month,
        active_today,
    })
}

pub async fn revenue(pool: &SqlitePool, day_start: i64, month_start: i64) -> RepoResult<RevenueReport> {
    let (total, today, month, orders) = sqlx::query_as::<_, (f64, f64, f64, i64)>(&format!(
        "SELECT COALESCE(SUM(total_amount), 0.0), \
         COALESCE(SUM(CASE WHEN created_at >= ? THEN total_amount ELSE 0.0 END), 0.0), \
         COALESCE(SUM(CASE WHEN created_at >= ? THEN total_amount ELSE 0.0 END), 0.0), \
         COUNT(*) \
         FROM orders WHERE {REVENUE_STATUSES}"
    ))
    .bind(day_start)
    .bind(month_start)
    .fetch_one(pool)
    .await?;

    Ok(revenue_report(total, today, month, orders))
}

fn round_rupees(amount: Decimal) -> i64 {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

fn to_decimal(amount: f64) -> Decimal {
    Decimal::from_f64(amount).unwrap_or_default()
}

/// Whole-rupee report; the average is taken over the rounded total
pub fn revenue_report(total: f64, today: f64, month: f64, total_orders: i64) -> RevenueReport {
    let total_revenue = round_rupees(to_decimal(total));
    let avg_order_value = if total_orders > 0 {
        round_rupees(Decimal::from(total_revenue) / Decimal::from(total_orders))
    } else {
        0
    };

    RevenueReport {
        total_revenue,
        today_revenue: round_rupees(to_decimal(today)),
        month_revenue: round_rupees(to_decimal(month)),
        total_orders,
        avg_order_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    #[test]
    fn test_revenue_report_rounding() {
        let report = revenue_report(1000.5, 200.49, 700.5, 3);
        assert_eq!(report.total_revenue, 1001);
        assert_eq!(report.today_revenue, 200);
        assert_eq!(report.month_revenue, 701);
        // 1001 / 3 = 333.67
        assert_eq!(report.avg_order_value, 334);

        assert_eq!(revenue_report(0.0, 0.0, 0.0, 0), RevenueReport::default());
    }

    #[tokio::test]
    async fn test_revenue_excludes_cancelled_and_respects_boundaries() {
        let pool = DbService::in_memory().await.unwrap().pool;
        let user: i64 = sqlx::query_scalar(
            "INSERT INTO users (name, email, phone, password_hash, created_at) VALUES ('Anu', 'a@x', '9', 'h', 500) RETURNING id",
        )
        .fetch_one(&pool)
        .await
        .unwrap();

        for (amount, status, created_at) in [
            (100.0, "Delivered", 50),
            (250.0, "Order Confirmed", 1500),
            (80.0, "Preparing", 2500),
            (999.0, "Cancelled", 2500),
        ] {
            sqlx::query("INSERT INTO orders (user_id, total_amount, status, created_at) VALUES (?, ?, ?, ?)")
                .bind(user)
                .bind(amount)
                .bind(status)
                .bind(created_at)
                .execute(&pool)
                .await
                .unwrap();
        }

        // month starts at 1000, day starts at 2000
        let report = revenue(&pool, 2000, 1000).await.unwrap();
        assert_eq!(report.total_revenue, 430);
        assert_eq!(report.month_revenue, 330);
        assert_eq!(report.today_revenue, 80);
        assert_eq!(report.total_orders, 3);
        assert_eq!(report.avg_order_value, 143);

        let stats = user_stats(&pool, 2000, 100).await.unwrap();
        assert_eq!(
            stats,
            UserStats {
                total: 1,
                new_this_month: 1,
                active_today: 0
            }
        );
    }
}
