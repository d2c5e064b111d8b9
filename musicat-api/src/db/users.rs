//! User account queries

use musicat_common::db::User;
use musicat_common::{Error, Result};
use sqlx::SqlitePool;
use tracing::info;

use super::unit_of_work;

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        Self {
            id: r.id,
            username: r.username,
            email: r.email,
        }
    }
}

/// Stored credentials for a username, used only by login
#[derive(Debug, sqlx::FromRow)]
pub struct UserCredentialRow {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

impl UserCredentialRow {

    pub fn user(&self) -> User {
        User {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }
}

/// Create a user; a taken username or email is a `Conflict`
pub async fn create_user(pool: &SqlitePool, username: &str, email: &str, password_hash: &str) -> Result<User> {
    let id = unit_of_work(async {
        let mut tx = pool.begin().await?;
        let id = sqlx::query(
            "INSERT INTO users (username, email, password_hash) VALUES (?, ?, ?)",
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .execute(&mut *tx)
        .await
        .map_err(|e| Error::from_write(e, "username or email"))?
        .last_insert_rowid();
        tx.commit().await?;
        Ok::<_, Error>(id)
    })
    .await?;

    info!("Registered user {} ({})", id, username);
    Ok(User {
        id,
        username: username.to_string(),
        email: email.to_string(),
    })
}

pub async fn find_credentials(pool: &SqlitePool, username: &str) -> Result<Option<UserCredentialRow>> {
    let row = sqlx::query_as::<_, UserCredentialRow>(
        "SELECT id, username, email, password_hash FROM users WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn get_user(pool: &SqlitePool, id: i64) -> Result<Option<User>> {
    let row = sqlx::query_as::<_, UserRow>("SELECT id, username, email FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(User::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use musicat_common::auth::{hash_password, verify_password};
    use musicat_common::db::init_memory_database;

    #[tokio::test]
    async fn test_create_and_find() {
        let pool = init_memory_database().await.unwrap();
        let hashed = hash_password("correct horse").unwrap();

        let user = create_user(&pool, "alice", "alice@example.com", &hashed).await.unwrap();
        assert_eq!(get_user(&pool, user.id).await.unwrap(), Some(user.clone()));

        let creds = find_credentials(&pool, "alice").await.unwrap().expect("stored");
        assert_eq!(creds.user(), user);
        assert!(verify_password("correct horse", &creds.password_hash).unwrap());
        assert!(find_credentials(&pool, "bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_or_email_conflicts() {
        let pool = init_memory_database().await.unwrap();
        let hashed = hash_password("password1").unwrap();

        create_user(&pool, "alice", "a@example.com", &hashed).await.unwrap();
        let err = create_user(&pool, "alice", "b@example.com", &hashed).await.unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
        let err = create_user(&pool, "alicia", "a@example.com", &hashed).await.unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
    }
}
