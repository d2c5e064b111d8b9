//! Artist views

use musicat_common::db::Artist;
use musicat_common::Result;
use sqlx::SqlitePool;

use super::resolver::{resolve_band_summary, resolve_sex, resolve_title};
use super::ArtistView;
use crate::db::artists;

/// Build the view for one artist row.
///
/// Sex and title are independent lookups and run concurrently; either one
/// missing leaves an empty string without affecting the other.
pub async fn artist_view(pool: &SqlitePool, artist: Artist) -> Result<ArtistView> {
    let (sex, title, band) = tokio::try_join!(
        resolve_sex(pool, artist.sex_id),
        resolve_title(pool, artist.title_id),
        resolve_band_summary(pool, artist.band_id),
    )?;

    Ok(ArtistView {
        id: artist.id,
        first_name: artist.first_name,
        last_name: artist.last_name,
        nationality: artist.nationality,
        birth_date: artist.birth_date,
        age: artist.age,
        alive: artist.alive,
        sex: sex.unwrap_or_default(),
        title: title.unwrap_or_default(),
        band,
    })
}

pub async fn list_artist_views(pool: &SqlitePool) -> Result<Vec<ArtistView>> {
    let rows = artists::list_artists(pool).await?;

    let mut views = Vec::with_capacity(rows.len());
    for row in rows {
        views.push(artist_view(pool, row).await?);
    }
    Ok(views)
}

/// Detail view for an artist id, `None` if no such artist
pub async fn artist_detail(pool: &SqlitePool, id: i64) -> Result<Option<ArtistView>> {
    match artists::get_artist(pool, id).await? {
        Some(row) => Ok(Some(artist_view(pool, row).await?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use musicat_common::db::{init_memory_database, seed_demo_catalog, NewArtist};
    use musicat_common::{Error, Reference};

    fn loner() -> NewArtist {
        NewArtist {
            first_name: "Nina".to_string(),
            last_name: "Simone".to_string(),
            nationality: "American".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1933, 2, 21).unwrap(),
            age: 70,
            alive: false,
            sex_id: Reference::Absent,
            title_id: Reference::Present(4),
            band_id: Reference::Absent,
        }
    }

    #[tokio::test]
    async fn test_absent_sex_serializes_as_empty_string() {
        let pool = init_memory_database().await.unwrap();
        let created = artists::insert_artist(&pool, &loner()).await.unwrap();

        let view = artist_detail(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(view.sex, "");
        assert_eq!(view.title, "Dr.", "missing sex must not block title lookup");

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["sex"], "");
        assert!(json.get("band").is_none());
    }

    #[tokio::test]
    async fn test_list_resolves_every_artist() {
        let pool = init_memory_database().await.unwrap();
        seed_demo_catalog(&pool).await.unwrap();

        let views = list_artist_views(&pool).await.unwrap();
        assert_eq!(views.len(), 4);
        assert_eq!(views[2].sex, "Female");
        assert_eq!(views[2].title, "Mrs.");
        assert!(views[0].band.is_none());
        assert_eq!(views[3].band.as_ref().map(|b| b.id), Some(3));
    }

    #[tokio::test]
    async fn test_deleted_band_drops_from_view() {
        let pool = init_memory_database().await.unwrap();
        seed_demo_catalog(&pool).await.unwrap();

        assert!(crate::db::bands::delete_band(&pool, 3).await.unwrap());
        let thom = artist_detail(&pool, 4).await.unwrap().unwrap();
        assert!(thom.band.is_none());
    }

    #[tokio::test]
    async fn test_unknown_id_is_none() {
        let pool = init_memory_database().await.unwrap();
        assert!(artist_detail(&pool, 404).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failed_lookup_fails_the_view() {
        let pool = init_memory_database().await.unwrap();
        seed_demo_catalog(&pool).await.unwrap();

        sqlx::query("ALTER TABLE titles RENAME TO titles_gone")
            .execute(&pool)
            .await
            .unwrap();

        let err = artist_detail(&pool, 3).await.unwrap_err();
        assert!(matches!(err, Error::Database(_)), "got {:?}", err);
        assert!(list_artist_views(&pool).await.is_err());
    }
}
