//! The `/api/notify` endpoint notifications are posted to.
//!
//! It accepts `POST {"message": ...}`, logs it and replies `{"success": true}`;
//! other methods get `405`. Accepted messages are also forwarded to an
//! optional in-process sink.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::mpsc::UnboundedSender;

use crate::dispatch::NotifyPayload;

pub const NOTIFY_PATH: &str = "/api/notify";

#[derive(Clone, Default)]
struct ReceiverState {
    sink: Option<UnboundedSender<String>>,
}

pub fn router(sink: Option<UnboundedSender<String>>) -> Router {
    Router::new()
        .route(NOTIFY_PATH, post(receive).fallback(method_not_allowed))
        .with_state(ReceiverState { sink })
}

pub async fn serve(listener: TcpListener, sink: Option<UnboundedSender<String>>) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, path = NOTIFY_PATH, "notification receiver listening");
    }
    axum::serve(listener, router(sink)).await
}

async fn receive(State(state): State<ReceiverState>, Json(payload): Json<NotifyPayload>) -> Json<Value> {
    tracing::info!(message = %payload.message, "received notification request");
    if let Some(sink) = &state.sink {
        // A closed sink only means nobody is watching anymore.
        let _ = sink.send(payload.message);
    }
    Json(json!({ "success": true }))
}

async fn method_not_allowed() -> (StatusCode, Json<Value>) {
    (StatusCode::METHOD_NOT_ALLOWED, Json(json!({ "message": "Method Not Allowed" })))
}
