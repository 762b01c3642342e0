//! JSON API handlers
//!
//! Every handler hands its filesystem work to `spawn_blocking`; the catalog does
//! plain blocking I/O.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use serde::Deserialize;

use super::error::ApiErr;
use crate::archive::{ArchiveOverlay, ArchiveToggle};
use crate::catalog::Catalog;
use crate::conversation::{chat_messages, find_exchange, threads_newest_first};
use crate::models::{ChatMessage, Exchange, Project, SessionInfo, Thread};

pub type AppState = Arc<Catalog>;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_projects))
        .route("/projects/{encoded_path}/sessions", get(list_sessions))
        .route("/projects/{encoded_path}/sessions/{session_id}/prompts", get(session_threads))
        .route(
            "/projects/{encoded_path}/sessions/{session_id}/prompts/{prompt_index}",
            get(prompt_exchange),
        )
        .route("/projects/{encoded_path}/sessions/{session_id}/full", get(session_full))
        .route("/search", get(search))
        .route("/archive", get(archive_state))
        .route("/archive/sessions/{session_id}", post(toggle_session))
        .route("/archive/projects/{encoded_path}", post(toggle_project))
}

async fn run_blocking<T, F>(state: &AppState, work: F) -> Result<T, ApiErr>
where
    T: Send + 'static,
    F: FnOnce(&Catalog) -> crate::Result<T> + Send + 'static,
{
    let catalog = Arc::clone(state);
    tokio::task::spawn_blocking(move || work(catalog.as_ref()))
        .await
        .map_err(|e| {
            tracing::error!("blocking task failed: {e}");
            ApiErr::internal("internal server error")
        })?
        .map_err(ApiErr::from)
}

pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiErr> {
    run_blocking(&state, |catalog| catalog.list_projects()).await.map(Json)
}

pub async fn list_sessions(
    State(state): State<AppState>,
    Path(encoded_path): Path<String>,
) -> Result<Json<Vec<SessionInfo>>, ApiErr> {
    run_blocking(&state, move |catalog| catalog.list_sessions(&encoded_path)).await.map(Json)
}

pub async fn session_threads(
    State(state): State<AppState>,
    Path((encoded_path, session_id)): Path<(String, String)>,
) -> Result<Json<Vec<Thread>>, ApiErr> {
    run_blocking(&state, move |catalog| {
        let session = catalog.get_session(&encoded_path, &session_id)?;
        Ok(threads_newest_first(&session.messages))
    })
    .await
    .map(Json)
}

pub async fn prompt_exchange(
    State(state): State<AppState>,
    Path((encoded_path, session_id, prompt_index)): Path<(String, String, String)>,
) -> Result<Json<Exchange>, ApiErr> {
    let index: usize = prompt_index
        .parse()
        .map_err(|_| ApiErr::bad_request(format!("invalid prompt index: {prompt_index}")))?;

    run_blocking(&state, move |catalog| {
        let session = catalog.get_session(&encoded_path, &session_id)?;
        Ok(find_exchange(&session.messages, index))
    })
    .await
    .map(Json)
}

pub async fn session_full(
    State(state): State<AppState>,
    Path((encoded_path, session_id)): Path<(String, String)>,
) -> Result<Json<Vec<ChatMessage>>, ApiErr> {
    run_blocking(&state, move |catalog| {
        let session = catalog.get_session(&encoded_path, &session_id)?;
        Ok(chat_messages(&session.messages))
    })
    .await
    .map(Json)
}

pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<SessionInfo>>, ApiErr> {
    if query.q.trim().is_empty() {
        return Err(ApiErr::bad_request("query parameter `q` must not be empty"));
    }
    run_blocking(&state, move |catalog| catalog.search(&query.q)).await.map(Json)
}

pub async fn archive_state(State(state): State<AppState>) -> Result<Json<ArchiveOverlay>, ApiErr> {
    run_blocking(&state, |catalog| catalog.archive().load()).await.map(Json)
}

pub async fn toggle_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ArchiveToggle>, ApiErr> {
    run_blocking(&state, move |catalog| {
        let archived = catalog.toggle_session_archive(&session_id)?;
        Ok(ArchiveToggle { id: session_id, archived })
    })
    .await
    .map(Json)
}

pub async fn toggle_project(
    State(state): State<AppState>,
    Path(encoded_path): Path<String>,
) -> Result<Json<ArchiveToggle>, ApiErr> {
    run_blocking(&state, move |catalog| {
        let archived = catalog.toggle_project_archive(&encoded_path)?;
        Ok(ArchiveToggle { id: encoded_path, archived })
    })
    .await
    .map(Json)
}
