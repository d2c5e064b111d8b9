//! Song endpoints, including credit management
//!
//! `PUT /songs/:id/{albums,artists,bands}/:target_id` adds a credit in the
//! matching join table, `DELETE` on the same path removes it.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use musicat_common::db::NewSong;

use super::extract::{ApiPath, AuthenticatedUser, ValidatedJson};
use crate::db::songs::{self, SongCredit};
use crate::error::{ApiError, ApiResult};
use crate::views::{self, SongListView, SongView};
use crate::AppState;

pub async fn list_songs(State(state): State<AppState>) -> ApiResult<Json<Vec<SongListView>>> {
    Ok(Json(views::list_song_views(&state.db).await?))
}

pub async fn get_song(State(state): State<AppState>, ApiPath(id): ApiPath<i64>) -> ApiResult<Json<SongView>> {
    views::song_detail(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("song", id))
}

pub async fn create_song(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ValidatedJson(body): ValidatedJson<NewSong>,
) -> ApiResult<(StatusCode, Json<SongView>)> {
    let created = songs::insert_song(&state.db, &body).await?;
    let view = views::song_view(&state.db, created).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn update_song(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(body): ValidatedJson<NewSong>,
) -> ApiResult<Json<SongView>> {
    let updated = songs::update_song(&state.db, id, &body)
        .await?
        .ok_or_else(|| ApiError::not_found("song", id))?;
    Ok(Json(views::song_view(&state.db, updated).await?))
}

pub async fn delete_song(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<StatusCode> {
    if songs::delete_song(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("song", id))
    }
}

async fn link(state: &AppState, credit: SongCredit, song_id: i64, target_id: i64) -> ApiResult<StatusCode> {
    songs::link_song(&state.db, credit, song_id, target_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn unlink(state: &AppState, credit: SongCredit, song_id: i64, target_id: i64) -> ApiResult<StatusCode> {
    if songs::unlink_song(&state.db, credit, song_id, target_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!(
            "song {} has no {} credit {}",
            song_id,
            credit.name(),
            target_id
        )))
    }
}

/// PUT /songs/:id/albums/:album_id
pub async fn link_album(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiPath((song_id, album_id)): ApiPath<(i64, i64)>,
) -> ApiResult<StatusCode> {
    link(&state, SongCredit::Album, song_id, album_id).await
}

/// DELETE /songs/:id/albums/:album_id
pub async fn unlink_album(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiPath((song_id, album_id)): ApiPath<(i64, i64)>,
) -> ApiResult<StatusCode> {
    unlink(&state, SongCredit::Album, song_id, album_id).await
}

/// PUT /songs/:id/artists/:artist_id
pub async fn link_artist(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiPath((song_id, artist_id)): ApiPath<(i64, i64)>,
) -> ApiResult<StatusCode> {
    link(&state, SongCredit::Artist, song_id, artist_id).await
}

/// DELETE /songs/:id/artists/:artist_id
pub async fn unlink_artist(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiPath((song_id, artist_id)): ApiPath<(i64, i64)>,
) -> ApiResult<StatusCode> {
    unlink(&state, SongCredit::Artist, song_id, artist_id).await
}

/// PUT /songs/:id/bands/:band_id
pub async fn link_band(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiPath((song_id, band_id)): ApiPath<(i64, i64)>,
) -> ApiResult<StatusCode> {
    link(&state, SongCredit::Band, song_id, band_id).await
}

/// DELETE /songs/:id/bands/:band_id
pub async fn unlink_band(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiPath((song_id, band_id)): ApiPath<(i64, i64)>,
) -> ApiResult<StatusCode> {
    unlink(&state, SongCredit::Band, song_id, band_id).await
}
