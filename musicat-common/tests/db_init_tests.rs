//! Database initialization and seeding tests

use musicat_common::db::{init_database, init_memory_database, seed_demo_catalog};
use tempfile::TempDir;

async fn count(pool: &sqlx::SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_database_creation_when_missing() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("nested").join("music.db");

    let result = init_database(&db_path).await;
    assert!(result.is_ok(), "Database initialization failed: {:?}", result.err());
    assert!(db_path.exists(), "Database file was not created");
}

#[tokio::test]
async fn test_database_opens_existing() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("music.db");

    let pool1 = init_database(&db_path).await.unwrap();
    seed_demo_catalog(&pool1).await.unwrap();
    pool1.close().await;

    let pool2 = init_database(&db_path).await;
    assert!(pool2.is_ok(), "Failed to open existing database: {:?}", pool2.err());
    let pool2 = pool2.unwrap();

    assert_eq!(count(&pool2, "bands").await, 3, "existing rows must survive reopen");
    assert_eq!(count(&pool2, "sexes").await, 3, "reference rows must not be duplicated");
}

#[tokio::test]
async fn test_reference_tables_seeded() {
    let pool = init_memory_database().await.unwrap();

    assert_eq!(count(&pool, "sexes").await, 3);
    assert_eq!(count(&pool, "titles").await, 5);

    let female: String = sqlx::query_scalar("SELECT name FROM sexes WHERE id = 2")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(female, "Female");

    let prof: String = sqlx::query_scalar("SELECT name FROM titles WHERE id = 5")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(prof, "Prof.");
}

#[tokio::test]
async fn test_demo_catalog_seeded_once() {
    let pool = init_memory_database().await.unwrap();

    assert!(seed_demo_catalog(&pool).await.unwrap());
    assert!(!seed_demo_catalog(&pool).await.unwrap(), "second seed must be a no-op");

    assert_eq!(count(&pool, "bands").await, 3);
    assert_eq!(count(&pool, "artists").await, 4);
    assert_eq!(count(&pool, "albums").await, 5);
    assert_eq!(count(&pool, "songs").await, 6);
    assert_eq!(count(&pool, "album_songs").await, 6);
    assert_eq!(count(&pool, "artist_songs").await, 3);
    assert_eq!(count(&pool, "band_songs").await, 3);
}

#[tokio::test]
async fn test_foreign_keys_enforced() {
    let pool = init_memory_database().await.unwrap();

    let result = sqlx::query("INSERT INTO albums (title, price, artist_id) VALUES ('Orphan', 1.0, 999)")
        .execute(&pool)
        .await;
    assert!(result.is_err(), "reference to a missing artist must be rejected");
}

#[tokio::test]
async fn test_deleting_artist_clears_album_reference() {
    let pool = init_memory_database().await.unwrap();
    seed_demo_catalog(&pool).await.unwrap();

    sqlx::query("DELETE FROM artists WHERE id = 1")
        .execute(&pool)
        .await
        .unwrap();

    let artist_id: Option<i64> = sqlx::query_scalar("SELECT artist_id FROM albums WHERE id = 1")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(artist_id, None);

    let credits: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM artist_songs WHERE artist_id = 1")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(credits, 0, "join rows cascade with the artist");
}
