//! Band endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use musicat_common::db::NewBand;

use super::extract::{ApiPath, AuthenticatedUser, ValidatedJson};
use crate::db::bands;
use crate::error::{ApiError, ApiResult};
use crate::views::{self, BandView};
use crate::AppState;

pub async fn list_bands(State(state): State<AppState>) -> ApiResult<Json<Vec<BandView>>> {
    Ok(Json(views::list_band_views(&state.db).await?))
}

pub async fn get_band(State(state): State<AppState>, ApiPath(id): ApiPath<i64>) -> ApiResult<Json<BandView>> {
    views::band_detail(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("band", id))
}

pub async fn create_band(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ValidatedJson(body): ValidatedJson<NewBand>,
) -> ApiResult<(StatusCode, Json<BandView>)> {
    let created = bands::insert_band(&state.db, &body).await?;
    Ok((StatusCode::CREATED, Json(BandView::from(created))))
}

pub async fn update_band(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(body): ValidatedJson<NewBand>,
) -> ApiResult<Json<BandView>> {
    let updated = bands::update_band(&state.db, id, &body)
        .await?
        .ok_or_else(|| ApiError::not_found("band", id))?;
    Ok(Json(BandView::from(updated)))
}

/// Artists and albums of a deleted band keep existing with the band cleared
pub async fn delete_band(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<StatusCode> {
    if bands::delete_band(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("band", id))
    }
}
