//! Sex / title reference table queries

use musicat_common::Result;
use serde::Serialize;
use sqlx::SqlitePool;

/// One row of a reference table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct LookupEntry {
    pub id: i64,
    pub name: String,
}

/// Display name of a sex id, `None` if there is no such row
pub async fn sex_name(pool: &SqlitePool, id: i64) -> Result<Option<String>> {
    let name: Option<String> = sqlx::query_scalar("SELECT name FROM sexes WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(name)
}

/// Display name of a title id, `None` if there is no such row
pub async fn title_name(pool: &SqlitePool, id: i64) -> Result<Option<String>> {
    let name: Option<String> = sqlx::query_scalar("SELECT name FROM titles WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(name)
}

pub async fn list_sexes(pool: &SqlitePool) -> Result<Vec<LookupEntry>> {
    let rows = sqlx::query_as::<_, LookupEntry>("SELECT id, name FROM sexes ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

pub async fn list_titles(pool: &SqlitePool) -> Result<Vec<LookupEntry>> {
    let rows = sqlx::query_as::<_, LookupEntry>("SELECT id, name FROM titles ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows)
}
