//! Reference table endpoints

use axum::{extract::State, Json};

use crate::db::lookups::{self, LookupEntry};
use crate::error::ApiResult;
use crate::AppState;

/// GET /sexes
pub async fn list_sexes(State(state): State<AppState>) -> ApiResult<Json<Vec<LookupEntry>>> {
    Ok(Json(lookups::list_sexes(&state.db).await?))
}

/// GET /titles
pub async fn list_titles(State(state): State<AppState>) -> ApiResult<Json<Vec<LookupEntry>>> {
    Ok(Json(lookups::list_titles(&state.db).await?))
}
