use std::sync::Arc;

use catalog::{EventSource, Lookup};
use shared::{
    domain::{EventDetail, EventId, EventSummary},
    error::ApiError,
};
use tracing::error;

#[derive(Clone)]
pub struct ApiContext {
    pub source: Arc<dyn EventSource>,
}

impl ApiContext {
    pub fn new(source: Arc<dyn EventSource>) -> Self {
        Self { source }
    }
}

pub fn events_route() -> &'static str {
    "/api/events"
}

pub fn event_route() -> &'static str {
    "/api/events/:id"
}

/// Summaries in source order; sorting is a view concern.
pub async fn list_events(ctx: &ApiContext) -> Result<Vec<EventSummary>, ApiError> {
    ctx.source.list_summaries().await.map_err(internal)
}

pub async fn get_event(ctx: &ApiContext, id: &EventId) -> Result<EventDetail, ApiError> {
    match ctx.source.get_detail(id).await.map_err(internal)? {
        Lookup::Found(detail) => Ok(detail),
        Lookup::Absent => Err(ApiError::not_found(format!("event '{id}' not found"))),
    }
}

fn internal(error: anyhow::Error) -> ApiError {
    error!(%error, "event source failed");
    ApiError::internal(error.to_string())
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
