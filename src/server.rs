//! HTTP Events API server — routes Slack's handshake and event callbacks.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use tracing::{debug, error, warn};

use crate::pipeline::processor::EventProcessor;
use crate::pipeline::types::InboundEnvelope;

/// Request path Slack is configured to deliver events to.
pub const EVENTS_PATH: &str = "/slack/events";

/// Shared state for the events route.
#[derive(Clone)]
pub struct AppState {
    pub processor: Arc<EventProcessor>,
}

/// Build the events router.
pub fn event_routes(state: AppState) -> Router {
    Router::new()
        .route(EVENTS_PATH, post(handle_events))
        .with_state(state)
}

/// POST /slack/events
///
/// The handshake is answered synchronously with the echoed challenge. Event
/// callbacks are acked with `OK` immediately; the reply chain runs on a
/// detached task, so its outcome can never affect the ack.
async fn handle_events(State(state): State<AppState>, body: Bytes) -> Response {
    debug!(body = %String::from_utf8_lossy(&body), "Inbound events request");

    let envelope: InboundEnvelope = match serde_json::from_slice(&body) {
        Ok(envelope) => envelope,
        Err(e) => {
            error!(error = %e, "Failed to parse events request body");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };
    debug!(envelope = ?envelope, "Parsed events request");

    match envelope {
        InboundEnvelope::UrlVerification { challenge } => {
            debug!("Answering url_verification handshake");
            Json(challenge).into_response()
        }
        InboundEnvelope::EventCallback { event } => {
            let processor = Arc::clone(&state.processor);
            tokio::spawn(async move {
                processor.process(event).await;
            });
            (StatusCode::OK, "OK").into_response()
        }
        InboundEnvelope::Unrecognized => {
            warn!("Ignoring unrecognized request kind");
            StatusCode::BAD_REQUEST.into_response()
        }
    }
}
