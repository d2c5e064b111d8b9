//! View-model assembly
//!
//! Turns flat catalog rows into the nested records the HTTP layer
//! serializes. Every entity has a list form (batch) and a detail form
//! (single item). Relationships are expanded exactly one level: embedded
//! entities use the `*Summary` types or a detail type whose own relations
//! are summaries, so no view type can contain itself.
//!
//! Field presence:
//! - an unresolvable optional relation is omitted
//! - an artist's sex and title are an empty string when unresolvable
//! - an empty song collection is omitted, never `[]`

pub mod album;
pub mod artist;
pub mod band;
pub mod resolver;
pub mod song;

use chrono::NaiveDate;
use musicat_common::db::{Album, Artist, Band, Song};
use serde::Serialize;

pub use album::{album_detail, album_list_view, album_view, list_album_views};
pub use artist::{artist_detail, artist_view, list_artist_views};
pub use band::{band_detail, list_band_views};
pub use song::{list_song_views, song_detail, song_list_view, song_view};

/// Artist name only, embedded in album list views
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistSummary {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl From<Artist> for ArtistSummary {
    fn from(a: Artist) -> Self {
        Self {
            id: a.id,
            first_name: a.first_name,
            last_name: a.last_name,
        }
    }
}

/// Band name only
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandSummary {
    pub id: i64,
    pub name: String,
}

impl From<Band> for BandSummary {
    fn from(b: Band) -> Self {
        Self { id: b.id, name: b.name }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlbumSummary {
    pub id: i64,
    pub title: String,
    pub price: f64,
}

impl From<Album> for AlbumSummary {
    fn from(a: Album) -> Self {
        Self {
            id: a.id,
            title: a.title,
            price: a.price,
        }
    }
}

/// Basic song: scalar fields, no relations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongSummary {
    pub id: i64,
    pub title: String,
    pub length: i64,
    pub price: f64,
}

impl From<Song> for SongSummary {
    fn from(s: Song) -> Self {
        Self {
            id: s.id,
            title: s.title,
            length: s.length,
            price: s.price,
        }
    }
}

/// Full artist with sex / title names and the band summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistView {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub nationality: String,
    pub birth_date: NaiveDate,
    pub age: i64,
    pub alive: bool,
    pub sex: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<BandSummary>,
}

/// Full band; a band has no relations to resolve
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandView {
    pub id: i64,
    pub name: String,
    pub nationality: String,
    pub number_of_members: i64,
    pub date_formed: NaiveDate,
    pub age: i64,
    pub active: bool,
}

impl From<Band> for BandView {
    fn from(b: Band) -> Self {
        Self {
            id: b.id,
            name: b.name,
            nationality: b.nationality,
            number_of_members: b.number_of_members,
            date_formed: b.date_formed,
            age: b.age,
            active: b.active,
        }
    }
}

/// Album as listed: creator names and song summaries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlbumListView {
    pub id: i64,
    pub title: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<ArtistSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<BandSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub songs: Vec<SongSummary>,
}

/// Album detail: creators fully resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlbumView {
    pub id: i64,
    pub title: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<ArtistView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<BandView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub songs: Vec<SongSummary>,
}

/// Song as listed: credited albums, artists and bands as summaries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongListView {
    pub id: i64,
    pub title: String,
    pub length: i64,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub albums: Option<Vec<AlbumSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<Vec<ArtistSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<Vec<BandSummary>>,
}

/// Song detail: credits as detail views, one level deep
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongView {
    pub id: i64,
    pub title: String,
    pub length: i64,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub albums: Option<Vec<AlbumView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<Vec<ArtistView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<Vec<BandView>>,
}

/// `None` for an empty collection so the field is dropped from output
pub(crate) fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
