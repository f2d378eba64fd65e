use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

use roomdesk_common::room::{Room, RoomDraft};

use crate::store::RoomStore;

pub struct AppState {
    pub store: RwLock<RoomStore>,
}

pub type SharedState = Arc<AppState>;

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/rooms", get(list_rooms).post(create_room))
        .route("/api/rooms/{id}", put(update_room).delete(delete_room))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

async fn list_rooms(State(state): State<SharedState>) -> Json<Vec<Room>> {
    let store = state.store.read().await;
    Json(store.list())
}

async fn create_room(
    State(state): State<SharedState>,
    Json(draft): Json<RoomDraft>,
) -> (StatusCode, Json<Room>) {
    let mut store = state.store.write().await;
    let room = store.create(draft);
    tracing::info!("created room {} ('{}')", room.id, room.name);
    (StatusCode::CREATED, Json(room))
}

async fn update_room(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
    Json(draft): Json<RoomDraft>,
) -> Result<Json<Room>, StatusCode> {
    let mut store = state.store.write().await;
    match store.update(id, draft) {
        Some(room) => {
            tracing::info!("updated room {}", id);
            Ok(Json(room))
        }
        None => Err(StatusCode::NOT_FOUND),
    }
}

async fn delete_room(State(state): State<SharedState>, Path(id): Path<u64>) -> StatusCode {
    let mut store = state.store.write().await;
    if store.delete(id) {
        tracing::info!("deleted room {}", id);
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}
