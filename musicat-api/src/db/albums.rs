//! Album queries

use musicat_common::db::{Album, NewAlbum};
use musicat_common::{Error, Result};
use sqlx::SqlitePool;
use tracing::info;

use super::unit_of_work;

const SELECT_ALBUM: &str = "SELECT id, title, price, artist_id, band_id FROM albums";

/// Row type for album queries, mapped via `sqlx::FromRow`
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct AlbumRow {
    id: i64,
    title: String,
    price: f64,
    artist_id: Option<i64>,
    band_id: Option<i64>,
}

impl From<AlbumRow> for Album {
    fn from(r: AlbumRow) -> Self {
        Self {
            id: r.id,
            title: r.title,
            price: r.price,
            artist_id: r.artist_id.into(),
            band_id: r.band_id.into(),
        }
    }
}

pub async fn list_albums(pool: &SqlitePool) -> Result<Vec<Album>> {
    let rows = sqlx::query_as::<_, AlbumRow>(&format!("{} ORDER BY id", SELECT_ALBUM))
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(Album::from).collect())
}

pub async fn get_album(pool: &SqlitePool, id: i64) -> Result<Option<Album>> {
    let row = sqlx::query_as::<_, AlbumRow>(&format!("{} WHERE id = ?", SELECT_ALBUM))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Album::from))
}

/// Albums a song appears on through `album_songs`
pub async fn albums_for_song(pool: &SqlitePool, song_id: i64) -> Result<Vec<Album>> {
    let rows = sqlx::query_as::<_, AlbumRow>(
        r#"
        SELECT a.id, a.title, a.price, a.artist_id, a.band_id
        FROM albums a
        JOIN album_songs sa ON a.id = sa.album_id
        WHERE sa.song_id = ?
        ORDER BY a.id
        "#,
    )
    .bind(song_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Album::from).collect())
}

pub async fn insert_album(pool: &SqlitePool, album: &NewAlbum) -> Result<Album> {
    let id = unit_of_work(async {
        let mut tx = pool.begin().await?;
        let id = sqlx::query("INSERT INTO albums (title, price, artist_id, band_id) VALUES (?, ?, ?, ?)")
            .bind(&album.title)
            .bind(album.price)
            .bind(album.artist_id.id())
            .bind(album.band_id.id())
            .execute(&mut *tx)
            .await
            .map_err(|e| Error::from_write(e, "album"))?
            .last_insert_rowid();
        tx.commit().await?;
        Ok::<_, Error>(id)
    })
    .await?;

    info!("Inserted album {}", id);
    Ok(album.clone().with_id(id))
}

/// Replace every column of an album; `None` if the id does not exist
pub async fn update_album(pool: &SqlitePool, id: i64, album: &NewAlbum) -> Result<Option<Album>> {
    let affected = unit_of_work(async {
        let mut tx = pool.begin().await?;
        let affected = sqlx::query(
            "UPDATE albums SET title = ?, price = ?, artist_id = ?, band_id = ? WHERE id = ?",
        )
        .bind(&album.title)
        .bind(album.price)
        .bind(album.artist_id.id())
        .bind(album.band_id.id())
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| Error::from_write(e, "album"))?
        .rows_affected();
        tx.commit().await?;
        Ok::<_, Error>(affected)
    })
    .await?;

    if affected == 0 {
        return Ok(None);
    }

    info!("Updated album {}", id);
    Ok(Some(album.clone().with_id(id)))
}

/// Delete an album; its songs stay with `album_id` cleared
pub async fn delete_album(pool: &SqlitePool, id: i64) -> Result<bool> {
    let affected = unit_of_work(async {
        let mut tx = pool.begin().await?;
        let affected = sqlx::query("DELETE FROM albums WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        tx.commit().await?;
        Ok::<_, Error>(affected)
    })
    .await?;

    if affected > 0 {
        info!("Deleted album {}", id);
    }
    Ok(affected > 0)
}
