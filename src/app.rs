use crate::config::Config;
use crate::tmdb::{self, TmdbApi, TmdbClient};
use crate::views;
use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub tmdb: Arc<dyn TmdbApi>,
}

pub async fn run_server(config: Config) -> Result<()> {
    let tmdb: Arc<dyn TmdbApi> = Arc::new(TmdbClient::from_config(&config)?);
    info!(
        "TMDB responses revalidate every {}s",
        config.revalidate.window.as_secs()
    );

    let app = build_router(AppState { tmdb });

    let addr = config.bind_addr();
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/movie/:id", get(movie_detail))
        .route("/health", get(health))
        .route("/placeholder-poster.svg", get(placeholder_poster))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn placeholder_poster() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "image/svg+xml")],
        views::PLACEHOLDER_SVG,
    )
}

async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(views::not_found_page())).into_response()
}

async fn home(State(state): State<AppState>) -> Response {
    match tmdb::fetch_home_listings(state.tmdb.as_ref()).await {
        Ok(listings) => Html(views::home_page(&listings)).into_response(),
        Err(e) => {
            error!("Error fetching movies: {}", e);
            (StatusCode::BAD_GATEWAY, Html(views::error_page())).into_response()
        }
    }
}

async fn movie_detail(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.tmdb.fetch_movie_by_id(&id).await {
        Ok(detail) => Html(views::detail_page(&detail)).into_response(),
        Err(e) if e.is_not_found() => {
            warn!("{}", e);
            (StatusCode::NOT_FOUND, Html(views::not_found_page())).into_response()
        }
        Err(e) => {
            error!("Error fetching movie '{}': {}", id, e);
            (StatusCode::BAD_GATEWAY, Html(views::not_found_page())).into_response()
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Shutdown signal received (Ctrl+C)");
        }
        _ = terminate => {
            info!("Shutdown signal received (SIGTERM)");
        }
    }
}
