//! Song queries and song credits
//!
//! A song has direct album/artist/band references plus credits in the
//! `album_songs`, `artist_songs` and `band_songs` join tables. The two are
//! independent: insert and update touch only the song's own columns, and
//! credits change only through [`link_song`] / [`unlink_song`].

use musicat_common::db::{NewSong, Song};
use musicat_common::{Error, Result};
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::info;

use super::unit_of_work;

const SELECT_SONG: &str = "SELECT id, title, length, price, album_id, artist_id, band_id FROM songs";

/// Row type for song queries, mapped via `sqlx::FromRow`
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct SongRow {
    id: i64,
    title: String,
    length: i64,
    price: f64,
    album_id: Option<i64>,
    artist_id: Option<i64>,
    band_id: Option<i64>,
}

impl From<SongRow> for Song {
    fn from(r: SongRow) -> Self {
        Self {
            id: r.id,
            title: r.title,
            length: r.length,
            price: r.price,
            album_id: r.album_id.into(),
            artist_id: r.artist_id.into(),
            band_id: r.band_id.into(),
        }
    }
}

/// Join table a song credit lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongCredit {
    Album,
    Artist,
    Band,
}

impl SongCredit {
    fn join_table(self) -> &'static str {
        match self {
            SongCredit::Album => "album_songs",
            SongCredit::Artist => "artist_songs",
            SongCredit::Band => "band_songs",
        }
    }

    fn target_table(self) -> &'static str {
        match self {
            SongCredit::Album => "albums",
            SongCredit::Artist => "artists",
            SongCredit::Band => "bands",
        }
    }

    fn target_column(self) -> &'static str {
        match self {
            SongCredit::Album => "album_id",
            SongCredit::Artist => "artist_id",
            SongCredit::Band => "band_id",
        }
    }

    /// Singular name used in messages
    pub fn name(self) -> &'static str {
        match self {
            SongCredit::Album => "album",
            SongCredit::Artist => "artist",
            SongCredit::Band => "band",
        }
    }
}

pub async fn list_songs(pool: &SqlitePool) -> Result<Vec<Song>> {
    let rows = sqlx::query_as::<_, SongRow>(&format!("{} ORDER BY id", SELECT_SONG))
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(Song::from).collect())
}

pub async fn get_song(pool: &SqlitePool, id: i64) -> Result<Option<Song>> {
    let row = sqlx::query_as::<_, SongRow>(&format!("{} WHERE id = ?", SELECT_SONG))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Song::from))
}

/// Songs whose direct `album_id` is the given album
pub async fn songs_on_album(pool: &SqlitePool, album_id: i64) -> Result<Vec<Song>> {
    let rows = sqlx::query_as::<_, SongRow>(&format!("{} WHERE album_id = ? ORDER BY id", SELECT_SONG))
        .bind(album_id)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(Song::from).collect())
}

pub async fn insert_song(pool: &SqlitePool, song: &NewSong) -> Result<Song> {
    let id = unit_of_work(async {
        let mut tx = pool.begin().await?;
        let id = sqlx::query(
            r#"
            INSERT INTO songs (title, length, price, album_id, artist_id, band_id)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&song.title)
        .bind(song.length)
        .bind(song.price)
        .bind(song.album_id.id())
        .bind(song.artist_id.id())
        .bind(song.band_id.id())
        .execute(&mut *tx)
        .await
        .map_err(|e| Error::from_write(e, "song"))?
        .last_insert_rowid();
        tx.commit().await?;
        Ok::<_, Error>(id)
    })
    .await?;

    info!("Inserted song {}", id);
    Ok(song.clone().with_id(id))
}

/// Replace every column of a song; `None` if the id does not exist
pub async fn update_song(pool: &SqlitePool, id: i64, song: &NewSong) -> Result<Option<Song>> {
    let affected = unit_of_work(async {
        let mut tx = pool.begin().await?;
        let affected = sqlx::query(
            r#"
            UPDATE songs
            SET title = ?, length = ?, price = ?, album_id = ?, artist_id = ?, band_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&song.title)
        .bind(song.length)
        .bind(song.price)
        .bind(song.album_id.id())
        .bind(song.artist_id.id())
        .bind(song.band_id.id())
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| Error::from_write(e, "song"))?
        .rows_affected();
        tx.commit().await?;
        Ok::<_, Error>(affected)
    })
    .await?;

    if affected == 0 {
        return Ok(None);
    }

    info!("Updated song {}", id);
    Ok(Some(song.clone().with_id(id)))
}

/// Delete a song; its credits go with it
pub async fn delete_song(pool: &SqlitePool, id: i64) -> Result<bool> {
    let affected = unit_of_work(async {
        let mut tx = pool.begin().await?;
        let affected = sqlx::query("DELETE FROM songs WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        tx.commit().await?;
        Ok::<_, Error>(affected)
    })
    .await?;

    if affected > 0 {
        info!("Deleted song {}", id);
    }
    Ok(affected > 0)
}

/// Credit a song to an album, artist or band.
///
/// `NotFound` if either side is missing, `Conflict` if the credit exists.
pub async fn link_song(pool: &SqlitePool, credit: SongCredit, song_id: i64, target_id: i64) -> Result<()> {
    unit_of_work(async {
        let mut tx = pool.begin().await?;
        ensure_exists(&mut tx, "songs", "song", song_id).await?;
        ensure_exists(&mut tx, credit.target_table(), credit.name(), target_id).await?;
        insert_credit(&mut tx, credit, song_id, target_id).await?;
        tx.commit().await?;
        Ok::<_, Error>(())
    })
    .await?;

    info!("Linked song {} to {} {}", song_id, credit.name(), target_id);
    Ok(())
}

/// Remove a song credit; `false` if there was none
pub async fn unlink_song(pool: &SqlitePool, credit: SongCredit, song_id: i64, target_id: i64) -> Result<bool> {
    let sql = format!(
        "DELETE FROM {} WHERE song_id = ? AND {} = ?",
        credit.join_table(),
        credit.target_column()
    );

    let affected = unit_of_work(async {
        let mut tx = pool.begin().await?;
        let affected = sqlx::query(&sql)
            .bind(song_id)
            .bind(target_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        tx.commit().await?;
        Ok::<_, Error>(affected)
    })
    .await?;

    if affected > 0 {
        info!("Unlinked song {} from {} {}", song_id, credit.name(), target_id);
    }
    Ok(affected > 0)
}

async fn insert_credit(
    tx: &mut Transaction<'_, Sqlite>,
    credit: SongCredit,
    song_id: i64,
    target_id: i64,
) -> Result<()> {
    let sql = format!(
        "INSERT INTO {} ({}, song_id) VALUES (?, ?)",
        credit.join_table(),
        credit.target_column()
    );

    sqlx::query(&sql)
        .bind(target_id)
        .bind(song_id)
        .execute(&mut **tx)
        .await
        .map_err(|e| Error::from_write(e, &format!("{} credit", credit.name())))?;

    Ok(())
}

async fn ensure_exists(tx: &mut Transaction<'_, Sqlite>, table: &str, what: &str, id: i64) -> Result<()> {
    let found: Option<i64> = sqlx::query_scalar(&format!("SELECT id FROM {} WHERE id = ?", table))
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;

    match found {
        Some(_) => Ok(()),
        None => Err(Error::NotFound(format!("{} {}", what, id))),
    }
}
