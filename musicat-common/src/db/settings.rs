//! Service settings stored in the `settings` table

use rand::Rng;
use sqlx::SqlitePool;
use tracing::info;

use crate::{Error, Result};

/// Settings key holding the session token signing secret
pub const TOKEN_SECRET_KEY: &str = "token_secret";

/// Read a setting value
pub async fn get_setting(pool: &SqlitePool, key: &str) -> Result<Option<String>> {
    let value: Option<Option<String>> =
        sqlx::query_scalar("SELECT value FROM settings WHERE key = ?")
            .bind(key)
            .fetch_optional(pool)
            .await?;

    Ok(value.flatten())
}

/// Insert or replace a setting value
pub async fn set_setting(pool: &SqlitePool, key: &str, value: &str) -> Result<()> {
    sqlx::query(
        "INSERT INTO settings (key, value, updated_at) VALUES (?, ?, CURRENT_TIMESTAMP)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP",
    )
    .bind(key)
    .bind(value)
    .execute(pool)
    .await?;

    Ok(())
}

/// Load the token signing secret, generating and storing one on first use.
///
/// The secret is 32 random bytes, hex encoded.
pub async fn load_or_init_token_secret(pool: &SqlitePool) -> Result<String> {
    if let Some(secret) = get_setting(pool, TOKEN_SECRET_KEY).await? {
        if secret.is_empty() {
            return Err(Error::Config("token_secret setting is empty".to_string()));
        }
        return Ok(secret);
    }

    let mut bytes = [0u8; 32];
    rand::thread_rng().fill(&mut bytes);
    let secret: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();

    set_setting(pool, TOKEN_SECRET_KEY, &secret).await?;
    info!("Generated new token secret");

    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_memory_database;

    #[tokio::test]
    async fn test_token_secret_is_stable() {
        let pool = init_memory_database().await.unwrap();

        let first = load_or_init_token_secret(&pool).await.unwrap();
        assert_eq!(first.len(), 64);

        let second = load_or_init_token_secret(&pool).await.unwrap();
        assert_eq!(first, second, "secret must persist across loads");
    }

    #[tokio::test]
    async fn test_missing_setting_is_none() {
        let pool = init_memory_database().await.unwrap();
        assert_eq!(get_setting(&pool, "nope").await.unwrap(), None);

        set_setting(&pool, "nope", "yes").await.unwrap();
        assert_eq!(get_setting(&pool, "nope").await.unwrap(), Some("yes".to_string()));
    }
}
