use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use catalog::Catalog;
use client_core::{DetailState, DetailView, ListState, ListView};
use shared::{
    domain::{EventDetail, EventId, EventSummary},
    error::{ApiError, ErrorCode},
};
use tracing::{info, warn};

mod api;
mod app_state;
mod config;
mod render;

use api::{event_route, events_route, get_event, list_events, ApiContext};
use app_state::AppState;
use config::{load_settings, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let catalog = open_catalog(&settings)?;
    info!(events = catalog.len(), "catalog ready");

    let state = AppState {
        api: ApiContext::new(Arc::new(catalog)),
        render_timeout: settings.render_timeout(),
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.bind_addr.parse()?;
    info!(%addr, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn open_catalog(settings: &Settings) -> anyhow::Result<Catalog> {
    match &settings.catalog_path {
        Some(path) => Catalog::from_json_file(path)
            .with_context(|| format!("failed to load catalog from '{path}'")),
        None => Ok(Catalog::canonical()),
    }
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(list_page))
        .route("/event/:id", get(detail_page))
        .route("/healthz", get(healthz))
        .route(events_route(), get(http_list_events))
        .route(event_route(), get(http_get_event))
        .fallback(list_page)
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn list_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let mut view = ListView::activate(Arc::clone(&state.api.source));
    let list = match view.settled_within(state.render_timeout).await {
        Some(list) => list,
        None => {
            warn!(timeout = ?state.render_timeout, "event list still loading; rendering spinner");
            ListState::Loading
        }
    };
    drop(view.teardown());
    Html(render::list_page(&list))
}

async fn detail_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> (StatusCode, Html<String>) {
    let mut view = DetailView::activate(Arc::clone(&state.api.source), Some(EventId::new(id)));
    let detail = match view.settled_within(state.render_timeout).await {
        Some(detail) => detail,
        None => {
            warn!(timeout = ?state.render_timeout, "event still loading; rendering spinner");
            DetailState::Loading
        }
    };
    drop(view.teardown());

    let status = match detail {
        DetailState::NotFound => StatusCode::NOT_FOUND,
        DetailState::Loading | DetailState::Found(_) => StatusCode::OK,
    };
    (status, Html(render::detail_page(&detail)))
}

async fn http_list_events(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EventSummary>>, (StatusCode, Json<ApiError>)> {
    let events = list_events(&state.api).await.map_err(error_response)?;
    Ok(Json(events))
}

async fn http_get_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<EventDetail>, (StatusCode, Json<ApiError>)> {
    let event = get_event(&state.api, &EventId::new(id))
        .await
        .map_err(error_response)?;
    Ok(Json(event))
}

fn error_response(error: ApiError) -> (StatusCode, Json<ApiError>) {
    let status = match error.code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(error))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
