//! Artist endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use musicat_common::db::NewArtist;
use tracing::debug;

use super::extract::{ApiPath, AuthenticatedUser, ValidatedJson};
use crate::db::artists;
use crate::error::{ApiError, ApiResult};
use crate::views::{self, ArtistView};
use crate::AppState;

/// GET /artists
pub async fn list_artists(State(state): State<AppState>) -> ApiResult<Json<Vec<ArtistView>>> {
    Ok(Json(views::list_artist_views(&state.db).await?))
}

/// GET /artists/:id
pub async fn get_artist(State(state): State<AppState>, ApiPath(id): ApiPath<i64>) -> ApiResult<Json<ArtistView>> {
    views::artist_detail(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("artist", id))
}

/// POST /artists
pub async fn create_artist(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedJson(body): ValidatedJson<NewArtist>,
) -> ApiResult<(StatusCode, Json<ArtistView>)> {
    debug!("User {} creating artist", user.user_id);
    let created = artists::insert_artist(&state.db, &body).await?;
    let view = views::artist_view(&state.db, created).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// PUT /artists/:id
pub async fn update_artist(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(body): ValidatedJson<NewArtist>,
) -> ApiResult<Json<ArtistView>> {
    let updated = artists::update_artist(&state.db, id, &body)
        .await?
        .ok_or_else(|| ApiError::not_found("artist", id))?;
    Ok(Json(views::artist_view(&state.db, updated).await?))
}

/// DELETE /artists/:id
pub async fn delete_artist(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<StatusCode> {
    if artists::delete_artist(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("artist", id))
    }
}
