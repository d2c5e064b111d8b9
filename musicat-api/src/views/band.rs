//! Band views
//!
//! A band has no relations, so its list and detail forms are the same
//! plain copy of the row.

use musicat_common::Result;
use sqlx::SqlitePool;

use super::BandView;
use crate::db::bands;

pub async fn list_band_views(pool: &SqlitePool) -> Result<Vec<BandView>> {
    let rows = bands::list_bands(pool).await?;
    Ok(rows.into_iter().map(BandView::from).collect())
}

pub async fn band_detail(pool: &SqlitePool, id: i64) -> Result<Option<BandView>> {
    Ok(bands::get_band(pool, id).await?.map(BandView::from))
}
