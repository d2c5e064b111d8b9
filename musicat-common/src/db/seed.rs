//! Seed data
//!
//! Reference tables (sexes, titles) are seeded on every start; rows that
//! already exist are left alone. The demo catalog is seeded only into an
//! empty catalog.

use chrono::NaiveDate;
use sqlx::SqlitePool;
use tracing::info;

use crate::{Result, Sex, Title};

/// Insert the fixed `sexes` / `titles` rows if missing
pub async fn seed_reference_tables(pool: &SqlitePool) -> Result<()> {
    for sex in Sex::ALL {
        sqlx::query("INSERT OR IGNORE INTO sexes (id, name) VALUES (?, ?)")
            .bind(sex.id())
            .bind(sex.name())
            .execute(pool)
            .await?;
    }

    for title in Title::ALL {
        sqlx::query("INSERT OR IGNORE INTO titles (id, name) VALUES (?, ?)")
            .bind(title.id())
            .bind(title.name())
            .execute(pool)
            .await?;
    }

    Ok(())
}

struct SeedBand(i64, &'static str, &'static str, i64, &'static str, i64, bool);
struct SeedArtist(
    i64,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    i64,
    bool,
    Sex,
    Title,
    Option<i64>,
);
struct SeedAlbum(i64, &'static str, f64, Option<i64>, Option<i64>);
struct SeedSong(i64, &'static str, i64, f64, Option<i64>, Option<i64>, Option<i64>);

const BANDS: &[SeedBand] = &[
    SeedBand(1, "Pink Floyd", "British", 5, "1965-01-01", 59, false),
    SeedBand(2, "The Beatles", "British", 4, "1960-08-01", 64, false),
    SeedBand(3, "Radiohead", "British", 5, "1985-09-01", 39, true),
];

const ARTISTS: &[SeedArtist] = &[
    SeedArtist(1, "John", "Coltrane", "American", "1926-09-23", 40, false, Sex::Male, Title::Mr, None),
    SeedArtist(2, "Gerry", "Mulligan", "American", "1927-04-06", 68, false, Sex::Male, Title::Mr, None),
    SeedArtist(3, "Sarah", "Vaughan", "American", "1924-03-27", 66, false, Sex::Female, Title::Mrs, None),
    SeedArtist(4, "Thom", "Yorke", "British", "1968-10-07", 56, true, Sex::Male, Title::Mr, Some(3)),
];

const ALBUMS: &[SeedAlbum] = &[
    SeedAlbum(1, "Blue Train", 56.99, Some(1), None),
    SeedAlbum(2, "Jeru", 17.99, Some(2), None),
    SeedAlbum(3, "Sarah Vaughan and Clifford Brown", 39.99, Some(3), None),
    SeedAlbum(4, "OK Computer", 45.99, None, Some(3)),
    SeedAlbum(5, "Abbey Road", 42.99, None, Some(2)),
];

const SONGS: &[SeedSong] = &[
    SeedSong(1, "Blue Train", 543, 9.99, Some(1), Some(1), None),
    SeedSong(2, "Lazy Bird", 434, 8.99, Some(1), Some(1), None),
    SeedSong(3, "Jeru", 294, 5.99, Some(2), Some(2), None),
    SeedSong(4, "Paranoid Android", 387, 7.99, Some(4), None, Some(3)),
    SeedSong(5, "Karma Police", 264, 5.99, Some(4), None, Some(3)),
    SeedSong(6, "Come Together", 259, 6.99, Some(5), None, Some(2)),
];

const ALBUM_SONGS: &[(i64, i64)] = &[(1, 1), (1, 2), (2, 3), (4, 4), (4, 5), (5, 6)];
const ARTIST_SONGS: &[(i64, i64)] = &[(1, 1), (1, 2), (2, 3)];
const BAND_SONGS: &[(i64, i64)] = &[(3, 4), (3, 5), (2, 6)];

fn date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| crate::Error::Internal(format!("bad seed date {}: {}", s, e)))
}

/// Seed the demo catalog if no band, artist, album or song exists yet.
///
/// Returns `true` when rows were inserted. All rows go in one transaction.
pub async fn seed_demo_catalog(pool: &SqlitePool) -> Result<bool> {
    let existing: i64 = sqlx::query_scalar(
        "SELECT (SELECT COUNT(*) FROM bands) + (SELECT COUNT(*) FROM artists)
              + (SELECT COUNT(*) FROM albums) + (SELECT COUNT(*) FROM songs)",
    )
    .fetch_one(pool)
    .await?;

    if existing > 0 {
        return Ok(false);
    }

    let mut tx = pool.begin().await?;

    for b in BANDS {
        sqlx::query(
            "INSERT INTO bands (id, name, nationality, number_of_members, date_formed, age, active)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(b.0)
        .bind(b.1)
        .bind(b.2)
        .bind(b.3)
        .bind(date(b.4)?)
        .bind(b.5)
        .bind(b.6)
        .execute(&mut *tx)
        .await?;
    }

    for a in ARTISTS {
        sqlx::query(
            "INSERT INTO artists (id, first_name, last_name, nationality, birth_date, age, alive, sex_id, title_id, band_id)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(a.0)
        .bind(a.1)
        .bind(a.2)
        .bind(a.3)
        .bind(date(a.4)?)
        .bind(a.5)
        .bind(a.6)
        .bind(a.7.id())
        .bind(a.8.id())
        .bind(a.9)
        .execute(&mut *tx)
        .await?;
    }

    for a in ALBUMS {
        sqlx::query("INSERT INTO albums (id, title, price, artist_id, band_id) VALUES (?, ?, ?, ?, ?)")
            .bind(a.0)
            .bind(a.1)
            .bind(a.2)
            .bind(a.3)
            .bind(a.4)
            .execute(&mut *tx)
            .await?;
    }

    for s in SONGS {
        sqlx::query(
            "INSERT INTO songs (id, title, length, price, album_id, artist_id, band_id)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(s.0)
        .bind(s.1)
        .bind(s.2)
        .bind(s.3)
        .bind(s.4)
        .bind(s.5)
        .bind(s.6)
        .execute(&mut *tx)
        .await?;
    }

    for (album_id, song_id) in ALBUM_SONGS {
        sqlx::query("INSERT INTO album_songs (album_id, song_id) VALUES (?, ?)")
            .bind(album_id)
            .bind(song_id)
            .execute(&mut *tx)
            .await?;
    }
    for (artist_id, song_id) in ARTIST_SONGS {
        sqlx::query("INSERT INTO artist_songs (artist_id, song_id) VALUES (?, ?)")
            .bind(artist_id)
            .bind(song_id)
            .execute(&mut *tx)
            .await?;
    }
    for (band_id, song_id) in BAND_SONGS {
        sqlx::query("INSERT INTO band_songs (band_id, song_id) VALUES (?, ?)")
            .bind(band_id)
            .bind(song_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    info!(
        "Seeded demo catalog: {} bands, {} artists, {} albums, {} songs",
        BANDS.len(),
        ARTISTS.len(),
        ALBUMS.len(),
        SONGS.len()
    );

    Ok(true)
}
