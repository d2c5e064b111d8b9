//! Band queries

use chrono::NaiveDate;
use musicat_common::db::{Band, NewBand};
use musicat_common::{Error, Result};
use sqlx::SqlitePool;
use tracing::info;

use super::unit_of_work;

const SELECT_BAND: &str =
    "SELECT id, name, nationality, number_of_members, date_formed, age, active FROM bands";

/// Row type for band queries, mapped via `sqlx::FromRow`
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct BandRow {
    id: i64,
    name: String,
    nationality: String,
    number_of_members: i64,
    date_formed: NaiveDate,
    age: i64,
    active: bool,
}

impl From<BandRow> for Band {
    fn from(r: BandRow) -> Self {
        Self {
            id: r.id,
            name: r.name,
            nationality: r.nationality,
            number_of_members: r.number_of_members,
            date_formed: r.date_formed,
            age: r.age,
            active: r.active,
        }
    }
}

pub async fn list_bands(pool: &SqlitePool) -> Result<Vec<Band>> {
    let rows = sqlx::query_as::<_, BandRow>(&format!("{} ORDER BY id", SELECT_BAND))
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(Band::from).collect())
}

pub async fn get_band(pool: &SqlitePool, id: i64) -> Result<Option<Band>> {
    let row = sqlx::query_as::<_, BandRow>(&format!("{} WHERE id = ?", SELECT_BAND))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Band::from))
}

/// Bands credited on a song through `band_songs`
pub async fn bands_for_song(pool: &SqlitePool, song_id: i64) -> Result<Vec<Band>> {
    let rows = sqlx::query_as::<_, BandRow>(
        r#"
        SELECT b.id, b.name, b.nationality, b.number_of_members, b.date_formed, b.age, b.active
        FROM bands b
        JOIN band_songs sb ON b.id = sb.band_id
        WHERE sb.song_id = ?
        ORDER BY b.id
        "#,
    )
    .bind(song_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Band::from).collect())
}

pub async fn insert_band(pool: &SqlitePool, band: &NewBand) -> Result<Band> {
    let id = unit_of_work(async {
        let mut tx = pool.begin().await?;
        let id = sqlx::query(
            r#"
            INSERT INTO bands (name, nationality, number_of_members, date_formed, age, active)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&band.name)
        .bind(&band.nationality)
        .bind(band.number_of_members)
        .bind(band.date_formed)
        .bind(band.age)
        .bind(band.active)
        .execute(&mut *tx)
        .await
        .map_err(|e| Error::from_write(e, "band"))?
        .last_insert_rowid();
        tx.commit().await?;
        Ok::<_, Error>(id)
    })
    .await?;

    info!("Inserted band {}", id);
    Ok(band.clone().with_id(id))
}

/// Replace every column of a band; `None` if the id does not exist
pub async fn update_band(pool: &SqlitePool, id: i64, band: &NewBand) -> Result<Option<Band>> {
    let affected = unit_of_work(async {
        let mut tx = pool.begin().await?;
        let affected = sqlx::query(
            r#"
            UPDATE bands
            SET name = ?, nationality = ?, number_of_members = ?, date_formed = ?, age = ?, active = ?
            WHERE id = ?
            "#,
        )
        .bind(&band.name)
        .bind(&band.nationality)
        .bind(band.number_of_members)
        .bind(band.date_formed)
        .bind(band.age)
        .bind(band.active)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| Error::from_write(e, "band"))?
        .rows_affected();
        tx.commit().await?;
        Ok::<_, Error>(affected)
    })
    .await?;

    if affected == 0 {
        return Ok(None);
    }

    info!("Updated band {}", id);
    Ok(Some(band.clone().with_id(id)))
}

/// Delete a band; member artists, albums and songs keep existing with the
/// band reference cleared, `band_songs` rows go with it.
pub async fn delete_band(pool: &SqlitePool, id: i64) -> Result<bool> {
    let affected = unit_of_work(async {
        let mut tx = pool.begin().await?;
        let affected = sqlx::query("DELETE FROM bands WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        tx.commit().await?;
        Ok::<_, Error>(affected)
    })
    .await?;

    if affected > 0 {
        info!("Deleted band {}", id);
    }
    Ok(affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use musicat_common::db::{init_memory_database, seed_demo_catalog};

    fn coldplay() -> NewBand {
        NewBand {
            name: "Coldplay".to_string(),
            nationality: "British".to_string(),
            number_of_members: 4,
            date_formed: NaiveDate::from_ymd_opt(1996, 1, 1).unwrap(),
            age: 27,
            active: true,
        }
    }

    #[tokio::test]
    async fn test_row_mapping_matches_columns() {
        let pool = init_memory_database().await.unwrap();
        seed_demo_catalog(&pool).await.unwrap();

        let beatles = get_band(&pool, 2).await.unwrap().expect("seeded band");
        assert_eq!(beatles.name, "The Beatles");
        assert_eq!(beatles.nationality, "British");
        assert_eq!(beatles.number_of_members, 4);
        assert_eq!(beatles.date_formed, NaiveDate::from_ymd_opt(1960, 8, 1).unwrap());
        assert_eq!(beatles.age, 64);
        assert!(!beatles.active);
    }

    #[tokio::test]
    async fn test_insert_then_fetch_round_trip() {
        let pool = init_memory_database().await.unwrap();

        let created = insert_band(&pool, &coldplay()).await.unwrap();
        let fetched = get_band(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(fetched, coldplay().with_id(created.id));
    }

    #[tokio::test]
    async fn test_update_and_delete_missing() {
        let pool = init_memory_database().await.unwrap();
        assert!(update_band(&pool, 5, &coldplay()).await.unwrap().is_none());
        assert!(!delete_band(&pool, 5).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_keeps_member_artist() {
        let pool = init_memory_database().await.unwrap();
        seed_demo_catalog(&pool).await.unwrap();

        assert!(delete_band(&pool, 3).await.unwrap());

        let yorke = crate::db::artists::get_artist(&pool, 4).await.unwrap().unwrap();
        assert!(yorke.band_id.is_absent());
        assert!(bands_for_song(&pool, 4).await.unwrap().is_empty());
    }
}
