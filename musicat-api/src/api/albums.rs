//! Album endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use musicat_common::db::NewAlbum;

use super::extract::{ApiPath, AuthenticatedUser, ValidatedJson};
use crate::db::albums;
use crate::error::{ApiError, ApiResult};
use crate::views::{self, AlbumListView, AlbumView};
use crate::AppState;

pub async fn list_albums(State(state): State<AppState>) -> ApiResult<Json<Vec<AlbumListView>>> {
    Ok(Json(views::list_album_views(&state.db).await?))
}

pub async fn get_album(State(state): State<AppState>, ApiPath(id): ApiPath<i64>) -> ApiResult<Json<AlbumView>> {
    views::album_detail(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("album", id))
}

pub async fn create_album(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ValidatedJson(body): ValidatedJson<NewAlbum>,
) -> ApiResult<(StatusCode, Json<AlbumView>)> {
    let created = albums::insert_album(&state.db, &body).await?;
    let view = views::album_view(&state.db, created).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn update_album(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(body): ValidatedJson<NewAlbum>,
) -> ApiResult<Json<AlbumView>> {
    let updated = albums::update_album(&state.db, id, &body)
        .await?
        .ok_or_else(|| ApiError::not_found("album", id))?;
    Ok(Json(views::album_view(&state.db, updated).await?))
}

pub async fn delete_album(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<StatusCode> {
    if albums::delete_album(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("album", id))
    }
}
