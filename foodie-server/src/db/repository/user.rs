//! User Repository

use super::{RepoError, RepoResult};
use shared::models::User;
use shared::util::now_millis;
use sqlx::SqlitePool;

/// Row used only for password verification
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserCredentials {
    pub id: i64,
    pub name: String,
    pub password_hash: String,
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, name, email, phone, created_at FROM users WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

pub async fn find_credentials(pool: &SqlitePool, email: &str) -> RepoResult<Option<UserCredentials>> {
    let row = sqlx::query_as::<_, UserCredentials>(
        "SELECT id, name, password_hash FROM users WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn email_exists(pool: &SqlitePool, email: &str) -> RepoResult<bool> {
    let exists = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = ?")
        .bind(email)
        .fetch_one(pool)
        .await?;
    Ok(exists > 0)
}

pub async fn create(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    phone: &str,
    password_hash: &str,
) -> RepoResult<User> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (name, email, phone, password_hash, created_at) VALUES (?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(name)
    .bind(email)
    .bind(phone)
    .bind(password_hash)
    .bind(now_millis())
    .fetch_one(pool)
    .await
    .map_err(|e| match RepoError::from(e) {
        RepoError::Duplicate(_) => RepoError::Duplicate(format!("Email {email} already registered")),
        other => other,
    })?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create user".into()))
}

/// Latest accounts first, capped at `limit`
pub async fn find_recent(pool: &SqlitePool, limit: i64) -> RepoResult<Vec<User>> {
    let users = sqlx::query_as::<_, User>(
        "SELECT id, name, email, phone, created_at FROM users ORDER BY created_at DESC, id DESC LIMIT ?",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(users)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    #[tokio::test]
    async fn test_create_and_duplicate_email() {
        let pool = DbService::in_memory().await.unwrap().pool;
        let user = create(&pool, "Anu", "anu@example.com", "9000000000", "hash")
            .await
            .unwrap();
        assert_eq!(user.email, "anu@example.com");
        assert!(email_exists(&pool, "anu@example.com").await.unwrap());

        let dup = create(&pool, "Anu 2", "anu@example.com", "9000000001", "hash").await;
        assert!(matches!(dup, Err(RepoError::Duplicate(_))));

        let creds = find_credentials(&pool, "anu@example.com").await.unwrap().unwrap();
        assert_eq!(creds.id, user.id);
        assert_eq!(creds.password_hash, "hash");
        assert!(find_credentials(&pool, "nobody@example.com").await.unwrap().is_none());
    }
}
