//! Album views
//!
//! Both forms take their songs from the songs' direct `album_id`, not from
//! `album_songs`. The list form embeds creator names only; the detail form
//! embeds the full artist and band views.

use musicat_common::db::Album;
use musicat_common::Result;
use sqlx::SqlitePool;

use super::resolver::{resolve_artist_detail, resolve_artist_summary, resolve_band_detail, resolve_band_summary};
use super::{AlbumListView, AlbumView, SongSummary};
use crate::db::{albums, songs};

async fn song_summaries(pool: &SqlitePool, album_id: i64) -> Result<Vec<SongSummary>> {
    let rows = songs::songs_on_album(pool, album_id).await?;
    Ok(rows.into_iter().map(SongSummary::from).collect())
}

pub async fn album_list_view(pool: &SqlitePool, album: Album) -> Result<AlbumListView> {
    let artist = resolve_artist_summary(pool, album.artist_id).await?;
    let band = resolve_band_summary(pool, album.band_id).await?;
    let songs = song_summaries(pool, album.id).await?;

    Ok(AlbumListView {
        id: album.id,
        title: album.title,
        price: album.price,
        artist,
        band,
        songs,
    })
}

pub async fn album_view(pool: &SqlitePool, album: Album) -> Result<AlbumView> {
    let artist = resolve_artist_detail(pool, album.artist_id).await?;
    let band = resolve_band_detail(pool, album.band_id).await?;
    let songs = song_summaries(pool, album.id).await?;

    Ok(AlbumView {
        id: album.id,
        title: album.title,
        price: album.price,
        artist,
        band,
        songs,
    })
}

pub async fn list_album_views(pool: &SqlitePool) -> Result<Vec<AlbumListView>> {
    let rows = albums::list_albums(pool).await?;

    let mut views = Vec::with_capacity(rows.len());
    for row in rows {
        views.push(album_list_view(pool, row).await?);
    }
    Ok(views)
}

pub async fn album_detail(pool: &SqlitePool, id: i64) -> Result<Option<AlbumView>> {
    match albums::get_album(pool, id).await? {
        Some(row) => Ok(Some(album_view(pool, row).await?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::artists;
    use musicat_common::db::{init_memory_database, seed_demo_catalog, NewAlbum};
    use musicat_common::{Error, Reference};

    #[tokio::test]
    async fn test_uncredited_album_has_no_creator_fields() {
        let pool = init_memory_database().await.unwrap();
        let album = NewAlbum {
            title: "Anonymous".to_string(),
            price: 3.0,
            artist_id: Reference::Absent,
            band_id: Reference::Absent,
        };
        let created = albums::insert_album(&pool, &album).await.unwrap();

        let detail = album_detail(&pool, created.id).await.unwrap().unwrap();
        let json = serde_json::to_value(&detail).unwrap();
        assert!(json.get("artist").is_none());
        assert!(json.get("band").is_none());
        assert!(json.get("songs").is_none(), "empty song list is omitted");

        let listed = serde_json::to_value(&list_album_views(&pool).await.unwrap()).unwrap();
        assert!(listed[0].get("artist").is_none());
        assert!(listed[0].get("band").is_none());
    }

    #[tokio::test]
    async fn test_deleted_artist_becomes_absent() {
        let pool = init_memory_database().await.unwrap();
        seed_demo_catalog(&pool).await.unwrap();

        assert!(artists::delete_artist(&pool, 1).await.unwrap());

        let blue_train = album_detail(&pool, 1).await.unwrap().expect("album survives");
        assert!(blue_train.artist.is_none());
        assert_eq!(blue_train.songs.len(), 2);
    }

    #[tokio::test]
    async fn test_list_and_detail_expand_to_different_depths() {
        let pool = init_memory_database().await.unwrap();
        seed_demo_catalog(&pool).await.unwrap();

        let listed = list_album_views(&pool).await.unwrap();
        assert_eq!(listed.len(), 5);
        let jeru = &listed[1];
        assert_eq!(jeru.artist.as_ref().map(|a| a.last_name.as_str()), Some("Mulligan"));
        assert_eq!(jeru.songs.len(), 1);
        let ok_computer = &listed[3];
        assert!(ok_computer.artist.is_none());
        assert_eq!(ok_computer.band.as_ref().map(|b| b.name.as_str()), Some("Radiohead"));

        let detail = album_detail(&pool, 2).await.unwrap().unwrap();
        let artist = detail.artist.expect("artist resolved");
        assert_eq!(artist.sex, "Male");
        assert_eq!(artist.nationality, "American");

        let detail = album_detail(&pool, 4).await.unwrap().unwrap();
        assert_eq!(detail.band.map(|b| b.number_of_members), Some(5));
        let titles: Vec<&str> = detail.songs.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Paranoid Android", "Karma Police"]);
    }

    #[tokio::test]
    async fn test_both_creators_exposed() {
        let pool = init_memory_database().await.unwrap();
        seed_demo_catalog(&pool).await.unwrap();

        let album = NewAlbum {
            title: "Split".to_string(),
            price: 10.0,
            artist_id: Reference::Present(4),
            band_id: Reference::Present(1),
        };
        let created = albums::insert_album(&pool, &album).await.unwrap();

        let detail = album_detail(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(detail.artist.map(|a| a.id), Some(4));
        assert_eq!(detail.band.map(|b| b.name), Some("Pink Floyd".to_string()));
    }

    #[tokio::test]
    async fn test_failed_song_query_fails_the_view() {
        let pool = init_memory_database().await.unwrap();
        seed_demo_catalog(&pool).await.unwrap();

        sqlx::query("ALTER TABLE songs RENAME TO songs_gone")
            .execute(&pool)
            .await
            .unwrap();

        let err = album_detail(&pool, 1).await.unwrap_err();
        assert!(matches!(err, Error::Database(_)), "got {:?}", err);
    }
}
