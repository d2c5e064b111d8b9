//! Database models
//!
//! Stored rows as the service sees them, plus the write payloads accepted
//! for insert and full-row update. Optional foreign keys are [`Reference`]s.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Reference;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub nationality: String,
    pub birth_date: NaiveDate,
    pub age: i64,
    pub alive: bool,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub sex_id: Reference,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub title_id: Reference,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub band_id: Reference,
}

/// Insert / full-update payload for an artist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewArtist {
    pub first_name: String,
    pub last_name: String,
    pub nationality: String,
    pub birth_date: NaiveDate,
    pub age: i64,
    pub alive: bool,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub sex_id: Reference,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub title_id: Reference,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub band_id: Reference,
}

impl NewArtist {
    pub fn with_id(self, id: i64) -> Artist {
        Artist {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            nationality: self.nationality,
            birth_date: self.birth_date,
            age: self.age,
            alive: self.alive,
            sex_id: self.sex_id,
            title_id: self.title_id,
            band_id: self.band_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub id: i64,
    pub name: String,
    pub nationality: String,
    pub number_of_members: i64,
    pub date_formed: NaiveDate,
    pub age: i64,
    pub active: bool,
}

/// Insert / full-update payload for a band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBand {
    pub name: String,
    pub nationality: String,
    pub number_of_members: i64,
    pub date_formed: NaiveDate,
    pub age: i64,
    pub active: bool,
}

impl NewBand {
    pub fn with_id(self, id: i64) -> Band {
        Band {
            id,
            name: self.name,
            nationality: self.nationality,
            number_of_members: self.number_of_members,
            date_formed: self.date_formed,
            age: self.age,
            active: self.active,
        }
    }
}

/// Album row
///
/// Artist and band are independent optional references; storage allows
/// both to be set at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: i64,
    pub title: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub artist_id: Reference,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub band_id: Reference,
}

/// Insert / full-update payload for an album
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAlbum {
    pub title: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub artist_id: Reference,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub band_id: Reference,
}

impl NewAlbum {
    pub fn with_id(self, id: i64) -> Album {
        Album {
            id,
            title: self.title,
            price: self.price,
            artist_id: self.artist_id,
            band_id: self.band_id,
        }
    }
}

/// Song row (`length` in seconds)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: i64,
    pub title: String,
    pub length: i64,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub album_id: Reference,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub artist_id: Reference,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub band_id: Reference,
}

/// Insert / full-update payload for a song
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSong {
    pub title: String,
    pub length: i64,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub album_id: Reference,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub artist_id: Reference,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub band_id: Reference,
}

impl NewSong {
    pub fn with_id(self, id: i64) -> Song {
        Song {
            id,
            title: self.title,
            length: self.length,
            price: self.price,
            album_id: self.album_id,
            artist_id: self.artist_id,
            band_id: self.band_id,
        }
    }
}

/// User account; the password hash never leaves the credential queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}
