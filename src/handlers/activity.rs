// src/handlers/activity.rs

use std::convert::Infallible;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
    response::IntoResponse,
    Json,
};
use futures::Stream;
use tokio_stream::{
    wrappers::{errors::BroadcastStreamRecvError, BroadcastStream},
    StreamExt,
};

use crate::{
    common::error::AppError,
    config::AppState,
    models::activity::{ActivityFilter, ActivityLog},
};

// GET /api/activity
#[utoipa::path(
    get,
    path = "/api/activity",
    tag = "Activity",
    params(ActivityFilter),
    responses(
        (status = 200, description = "Audit entries, newest first", body = Vec<ActivityLog>)
    )
)]
pub async fn list_activity(
    State(app_state): State<AppState>,
    Query(filter): Query<ActivityFilter>,
) -> Result<impl IntoResponse, AppError> {
    let rows = app_state.activity_service.list(&filter).await?;
    Ok((StatusCode::OK, Json(rows)))
}

// GET /api/activity/live
//
// Server-Sent Events: one `activity` event per audit row appended after the
// connection was opened. The subscription ends when the client disconnects.
#[utoipa::path(
    get,
    path = "/api/activity/live",
    tag = "Activity",
    responses(
        (status = 200, description = "SSE stream of audit entries as they are appended")
    )
)]
pub async fn live_activity(
    State(app_state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let receiver = app_state.activity_service.subscribe();

    let stream = BroadcastStream::new(receiver).filter_map(|entry| match entry {
        Ok(row) => Event::default().event("activity").json_data(&row).ok().map(Ok),
        Err(BroadcastStreamRecvError::Lagged(skipped)) => {
            tracing::warn!("live activity subscriber lagged, skipped {} rows", skipped);
            None
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
