//! Lookup Resolver
//!
//! Resolves an optional foreign key to the referenced row's display form.
//! An absent reference and a reference to a row that no longer exists both
//! resolve to `None`; only query failures are errors.

use musicat_common::{Reference, Result};
use sqlx::SqlitePool;

use super::{artist, ArtistSummary, ArtistView, BandSummary, BandView};
use crate::db::{artists, bands, lookups};

pub async fn resolve_sex(pool: &SqlitePool, sex_id: Reference) -> Result<Option<String>> {
    match sex_id {
        Reference::Absent => Ok(None),
        Reference::Present(id) => lookups::sex_name(pool, id).await,
    }
}

pub async fn resolve_title(pool: &SqlitePool, title_id: Reference) -> Result<Option<String>> {
    match title_id {
        Reference::Absent => Ok(None),
        Reference::Present(id) => lookups::title_name(pool, id).await,
    }
}

/// Band name, as embedded in an artist
pub async fn resolve_band_summary(pool: &SqlitePool, band_id: Reference) -> Result<Option<BandSummary>> {
    match band_id {
        Reference::Absent => Ok(None),
        Reference::Present(id) => Ok(bands::get_band(pool, id).await?.map(BandSummary::from)),
    }
}

/// Artist first and last name, without chasing sex, title or band
pub async fn resolve_artist_summary(
    pool: &SqlitePool,
    artist_id: Reference,
) -> Result<Option<ArtistSummary>> {
    match artist_id {
        Reference::Absent => Ok(None),
        Reference::Present(id) => Ok(artists::get_artist(pool, id).await?.map(ArtistSummary::from)),
    }
}

/// Full artist view, as embedded in an album detail
pub async fn resolve_artist_detail(pool: &SqlitePool, artist_id: Reference) -> Result<Option<ArtistView>> {
    let Reference::Present(id) = artist_id else {
        return Ok(None);
    };

    match artists::get_artist(pool, id).await? {
        Some(row) => Ok(Some(artist::artist_view(pool, row).await?)),
        None => Ok(None),
    }
}

pub async fn resolve_band_detail(pool: &SqlitePool, band_id: Reference) -> Result<Option<BandView>> {
    match band_id {
        Reference::Absent => Ok(None),
        Reference::Present(id) => Ok(bands::get_band(pool, id).await?.map(BandView::from)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use musicat_common::db::{init_memory_database, seed_demo_catalog};

    #[tokio::test]
    async fn test_absent_and_dangling_resolve_to_none() {
        let pool = init_memory_database().await.unwrap();
        seed_demo_catalog(&pool).await.unwrap();

        assert_eq!(resolve_sex(&pool, Reference::Absent).await.unwrap(), None);
        assert_eq!(resolve_title(&pool, Reference::Present(77)).await.unwrap(), None);
        assert_eq!(resolve_band_summary(&pool, Reference::Present(77)).await.unwrap(), None);
        assert_eq!(resolve_artist_summary(&pool, Reference::Absent).await.unwrap(), None);
        assert_eq!(resolve_artist_detail(&pool, Reference::Present(77)).await.unwrap(), None);
        assert_eq!(resolve_band_detail(&pool, Reference::Absent).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_present_references_resolve() {
        let pool = init_memory_database().await.unwrap();
        seed_demo_catalog(&pool).await.unwrap();

        assert_eq!(
            resolve_sex(&pool, Reference::Present(2)).await.unwrap().as_deref(),
            Some("Female")
        );
        assert_eq!(
            resolve_band_summary(&pool, Reference::Present(3)).await.unwrap(),
            Some(BandSummary { id: 3, name: "Radiohead".to_string() })
        );

        let thom = resolve_artist_detail(&pool, Reference::Present(4))
            .await
            .unwrap()
            .expect("seeded artist");
        assert_eq!(thom.title, "Mr.");
        assert_eq!(thom.band.map(|b| b.name).as_deref(), Some("Radiohead"));
    }

    #[tokio::test]
    async fn test_zero_id_is_a_real_lookup() {
        let pool = init_memory_database().await.unwrap();

        // Present(0) is looked up, not treated as absent; no row has id 0
        assert_eq!(resolve_sex(&pool, Reference::Present(0)).await.unwrap(), None);
    }
}
