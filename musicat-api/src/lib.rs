//! musicat-api library - music catalog HTTP service
//!
//! Artists, bands, albums and songs over JSON, assembled into nested view
//! models by [`views`], plus user registration and session tokens.

use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod db;
pub mod error;
pub mod views;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Secret used to sign and verify session tokens
    pub token_secret: Arc<str>,
}

impl AppState {
    pub fn new(db: SqlitePool, token_secret: impl Into<Arc<str>>) -> Self {
        Self {
            db,
            token_secret: token_secret.into(),
        }
    }
}

/// Bind the HTTP listener. `host` may be a hostname, IPv4 or IPv6 literal.
pub async fn bind_listener(host: &str, port: u16) -> std::io::Result<TcpListener> {
    TcpListener::bind((host, port)).await
}

/// Build application router
///
/// GET routes are public; the other methods on the same paths check the
/// bearer token through [`api::AuthenticatedUser`].
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post, put};

    let catalog = Router::new()
        .route("/artists", get(api::artists::list_artists).post(api::artists::create_artist))
        .route(
            "/artists/:id",
            get(api::artists::get_artist)
                .put(api::artists::update_artist)
                .delete(api::artists::delete_artist),
        )
        .route("/bands", get(api::bands::list_bands).post(api::bands::create_band))
        .route(
            "/bands/:id",
            get(api::bands::get_band)
                .put(api::bands::update_band)
                .delete(api::bands::delete_band),
        )
        .route("/albums", get(api::albums::list_albums).post(api::albums::create_album))
        .route(
            "/albums/:id",
            get(api::albums::get_album)
                .put(api::albums::update_album)
                .delete(api::albums::delete_album),
        )
        .route("/songs", get(api::songs::list_songs).post(api::songs::create_song))
        .route(
            "/songs/:id",
            get(api::songs::get_song)
                .put(api::songs::update_song)
                .delete(api::songs::delete_song),
        )
        .route(
            "/songs/:id/albums/:album_id",
            put(api::songs::link_album).delete(api::songs::unlink_album),
        )
        .route(
            "/songs/:id/artists/:artist_id",
            put(api::songs::link_artist).delete(api::songs::unlink_artist),
        )
        .route(
            "/songs/:id/bands/:band_id",
            put(api::songs::link_band).delete(api::songs::unlink_band),
        )
        .route("/sexes", get(api::lookups::list_sexes))
        .route("/titles", get(api::lookups::list_titles));

    let accounts = Router::new()
        .route("/register", post(api::auth::register))
        .route("/login", post(api::auth::login))
        .route("/profile", get(api::auth::profile));

    Router::new()
        .merge(catalog)
        .merge(accounts)
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_listener_accepts_hostnames_and_literals() {
        let listener = bind_listener("localhost", 0).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());

        let listener = bind_listener("127.0.0.1", 0).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn test_bind_listener_ipv6_literal() {
        // Hosts without IPv6 loopback cannot bind ::1
        if let Ok(listener) = bind_listener("::1", 0).await {
            assert!(listener.local_addr().unwrap().is_ipv6());
        }
    }
}
