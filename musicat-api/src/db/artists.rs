//! Artist queries

use chrono::NaiveDate;
use musicat_common::db::{Artist, NewArtist};
use musicat_common::{Error, Result};
use sqlx::SqlitePool;
use tracing::info;

use super::unit_of_work;

const SELECT_ARTIST: &str = "SELECT id, first_name, last_name, nationality, birth_date, age, alive, \
     sex_id, title_id, band_id FROM artists";

/// Row type for artist queries, mapped via `sqlx::FromRow`
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ArtistRow {
    id: i64,
    first_name: String,
    last_name: String,
    nationality: String,
    birth_date: NaiveDate,
    age: i64,
    alive: bool,
    sex_id: Option<i64>,
    title_id: Option<i64>,
    band_id: Option<i64>,
}

impl From<ArtistRow> for Artist {
    fn from(r: ArtistRow) -> Self {
        Self {
            id: r.id,
            first_name: r.first_name,
            last_name: r.last_name,
            nationality: r.nationality,
            birth_date: r.birth_date,
            age: r.age,
            alive: r.alive,
            sex_id: r.sex_id.into(),
            title_id: r.title_id.into(),
            band_id: r.band_id.into(),
        }
    }
}

/// All artists in id order
pub async fn list_artists(pool: &SqlitePool) -> Result<Vec<Artist>> {
    let rows = sqlx::query_as::<_, ArtistRow>(&format!("{} ORDER BY id", SELECT_ARTIST))
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(Artist::from).collect())
}

/// Artist by id, `None` if no such row
pub async fn get_artist(pool: &SqlitePool, id: i64) -> Result<Option<Artist>> {
    let row = sqlx::query_as::<_, ArtistRow>(&format!("{} WHERE id = ?", SELECT_ARTIST))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Artist::from))
}

/// Artists credited on a song through `artist_songs`
pub async fn artists_for_song(pool: &SqlitePool, song_id: i64) -> Result<Vec<Artist>> {
    let rows = sqlx::query_as::<_, ArtistRow>(
        r#"
        SELECT a.id, a.first_name, a.last_name, a.nationality, a.birth_date, a.age, a.alive,
               a.sex_id, a.title_id, a.band_id
        FROM artists a
        JOIN artist_songs sa ON a.id = sa.artist_id
        WHERE sa.song_id = ?
        ORDER BY a.id
        "#,
    )
    .bind(song_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Artist::from).collect())
}

pub async fn insert_artist(pool: &SqlitePool, artist: &NewArtist) -> Result<Artist> {
    let id = unit_of_work(async {
        let mut tx = pool.begin().await?;
        let id = sqlx::query(
            r#"
            INSERT INTO artists (first_name, last_name, nationality, birth_date, age, alive,
                                 sex_id, title_id, band_id)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&artist.first_name)
        .bind(&artist.last_name)
        .bind(&artist.nationality)
        .bind(artist.birth_date)
        .bind(artist.age)
        .bind(artist.alive)
        .bind(artist.sex_id.id())
        .bind(artist.title_id.id())
        .bind(artist.band_id.id())
        .execute(&mut *tx)
        .await
        .map_err(|e| Error::from_write(e, "artist"))?
        .last_insert_rowid();
        tx.commit().await?;
        Ok::<_, Error>(id)
    })
    .await?;

    info!("Inserted artist {}", id);
    Ok(artist.clone().with_id(id))
}

/// Replace every column of an artist; `None` if the id does not exist
pub async fn update_artist(pool: &SqlitePool, id: i64, artist: &NewArtist) -> Result<Option<Artist>> {
    let affected = unit_of_work(async {
        let mut tx = pool.begin().await?;
        let affected = sqlx::query(
            r#"
            UPDATE artists
            SET first_name = ?, last_name = ?, nationality = ?, birth_date = ?, age = ?,
                alive = ?, sex_id = ?, title_id = ?, band_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&artist.first_name)
        .bind(&artist.last_name)
        .bind(&artist.nationality)
        .bind(artist.birth_date)
        .bind(artist.age)
        .bind(artist.alive)
        .bind(artist.sex_id.id())
        .bind(artist.title_id.id())
        .bind(artist.band_id.id())
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| Error::from_write(e, "artist"))?
        .rows_affected();
        tx.commit().await?;
        Ok::<_, Error>(affected)
    })
    .await?;

    if affected == 0 {
        return Ok(None);
    }

    info!("Updated artist {}", id);
    Ok(Some(artist.clone().with_id(id)))
}

/// Delete an artist; returns `false` if the id does not exist.
///
/// Album/song references to the artist are cleared and its `artist_songs`
/// rows are removed by the schema's foreign-key actions, inside the same
/// transaction.
pub async fn delete_artist(pool: &SqlitePool, id: i64) -> Result<bool> {
    let affected = unit_of_work(async {
        let mut tx = pool.begin().await?;
        let affected = sqlx::query("DELETE FROM artists WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        tx.commit().await?;
        Ok::<_, Error>(affected)
    })
    .await?;

    if affected > 0 {
        info!("Deleted artist {}", id);
    }
    Ok(affected > 0)
}
