//! Song views
//!
//! Credits come from the three join tables. A credit collection with no
//! rows is `None`, which drops the field from the output.

use musicat_common::db::Song;
use musicat_common::Result;
use sqlx::SqlitePool;

use super::{
    album, artist, non_empty, AlbumSummary, ArtistSummary, BandSummary, BandView, SongListView, SongView,
};
use crate::db::{albums, artists, bands, songs};

pub async fn song_list_view(pool: &SqlitePool, song: Song) -> Result<SongListView> {
    let on_albums = albums::albums_for_song(pool, song.id).await?;
    let by_artists = artists::artists_for_song(pool, song.id).await?;
    let by_bands = bands::bands_for_song(pool, song.id).await?;

    Ok(SongListView {
        id: song.id,
        title: song.title,
        length: song.length,
        price: song.price,
        albums: non_empty(on_albums.into_iter().map(AlbumSummary::from).collect()),
        artist: non_empty(by_artists.into_iter().map(ArtistSummary::from).collect()),
        band: non_empty(by_bands.into_iter().map(BandSummary::from).collect()),
    })
}

/// Detail view: each credit expanded to its own detail view. Album details
/// stop at artist/band views, so expansion never goes deeper.
pub async fn song_view(pool: &SqlitePool, song: Song) -> Result<SongView> {
    let mut album_views = Vec::new();
    for row in albums::albums_for_song(pool, song.id).await? {
        album_views.push(album::album_view(pool, row).await?);
    }

    let mut artist_views = Vec::new();
    for row in artists::artists_for_song(pool, song.id).await? {
        artist_views.push(artist::artist_view(pool, row).await?);
    }

    let band_views: Vec<BandView> = bands::bands_for_song(pool, song.id)
        .await?
        .into_iter()
        .map(BandView::from)
        .collect();

    Ok(SongView {
        id: song.id,
        title: song.title,
        length: song.length,
        price: song.price,
        albums: non_empty(album_views),
        artist: non_empty(artist_views),
        band: non_empty(band_views),
    })
}

pub async fn list_song_views(pool: &SqlitePool) -> Result<Vec<SongListView>> {
    let rows = songs::list_songs(pool).await?;

    let mut views = Vec::with_capacity(rows.len());
    for row in rows {
        views.push(song_list_view(pool, row).await?);
    }
    Ok(views)
}

pub async fn song_detail(pool: &SqlitePool, id: i64) -> Result<Option<SongView>> {
    match songs::get_song(pool, id).await? {
        Some(row) => Ok(Some(song_view(pool, row).await?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::songs::{link_song, unlink_song, SongCredit};
    use musicat_common::db::{init_memory_database, seed_demo_catalog, NewSong};
    use musicat_common::Reference;

    #[tokio::test]
    async fn test_first_song_credits() {
        let pool = init_memory_database().await.unwrap();
        seed_demo_catalog(&pool).await.unwrap();

        let listed = list_song_views(&pool).await.unwrap();
        let blue_train = &listed[0];
        assert_eq!(blue_train.id, 1);
        assert_eq!(blue_train.albums.as_ref().map(Vec::len), Some(1));
        assert_eq!(blue_train.artist.as_ref().map(Vec::len), Some(1));
        assert!(blue_train.band.is_none());

        let json = serde_json::to_value(blue_train).unwrap();
        assert_eq!(json["albums"][0]["title"], "Blue Train");
        assert_eq!(json["artist"][0]["last_name"], "Coltrane");
        assert!(json.get("band").is_none());
    }

    #[tokio::test]
    async fn test_song_without_album_rows_omits_albums() {
        let pool = init_memory_database().await.unwrap();
        let song = NewSong {
            title: "Loose".to_string(),
            length: 61,
            price: 0.99,
            album_id: Reference::Absent,
            artist_id: Reference::Absent,
            band_id: Reference::Absent,
        };
        let created = songs::insert_song(&pool, &song).await.unwrap();

        let listed = song_list_view(&pool, created.clone()).await.unwrap();
        let json = serde_json::to_value(&listed).unwrap();
        assert!(json.get("albums").is_none());
        assert!(json.get("artist").is_none());
        assert!(json.get("band").is_none());
        assert_eq!(json["length"], 61);

        let detail = serde_json::to_value(song_detail(&pool, created.id).await.unwrap().unwrap()).unwrap();
        assert!(detail.get("albums").is_none());
    }

    #[tokio::test]
    async fn test_detail_expands_one_level() {
        let pool = init_memory_database().await.unwrap();
        seed_demo_catalog(&pool).await.unwrap();

        let paranoid = song_detail(&pool, 4).await.unwrap().unwrap();
        let albums = paranoid.albums.expect("album credit");
        assert_eq!(albums[0].title, "OK Computer");
        assert_eq!(albums[0].band.as_ref().map(|b| b.active), Some(true));
        assert_eq!(albums[0].songs.len(), 2);
        assert!(paranoid.artist.is_none());
        let bands = paranoid.band.expect("band credit");
        assert_eq!(bands[0].nationality, "British");

        let jeru = song_detail(&pool, 3).await.unwrap().unwrap();
        let artists = jeru.artist.expect("artist credit");
        assert_eq!(artists[0].title, "Mr.");
    }

    #[tokio::test]
    async fn test_credits_follow_join_tables() {
        let pool = init_memory_database().await.unwrap();
        seed_demo_catalog(&pool).await.unwrap();

        link_song(&pool, SongCredit::Band, 1, 1).await.unwrap();
        unlink_song(&pool, SongCredit::Album, 1, 1).await.unwrap();

        let view = song_detail(&pool, 1).await.unwrap().unwrap();
        assert!(view.albums.is_none());
        assert_eq!(view.band.map(|b| b[0].name.clone()), Some("Pink Floyd".to_string()));
    }

    #[tokio::test]
    async fn test_unknown_song_is_none() {
        let pool = init_memory_database().await.unwrap();
        assert!(song_detail(&pool, 1).await.unwrap().is_none());
    }
}
