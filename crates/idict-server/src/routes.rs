use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use idict_core::{Dictionary, DictionaryEntry, DictionaryMetadata, QueryDescription};
use idict_lang_igala::IgalaDictionary;
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
struct EntriesResponse {
    entries: Vec<DictionaryEntry>,
}

#[derive(Serialize)]
struct LettersResponse {
    letters: Vec<char>,
}

#[derive(Serialize)]
struct EntryResponse {
    entry: DictionaryEntry,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    dictionary: Option<DictionaryInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DictionaryInfo {
    name: String,
    language: String,
    gloss_language: String,
    entries: usize,
}

impl From<DictionaryMetadata> for DictionaryInfo {
    fn from(meta: DictionaryMetadata) -> Self {
        Self {
            name: meta.name,
            language: meta.language,
            gloss_language: meta.gloss_language,
            entries: meta.entry_count,
        }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/dictionary", get(handle_query))
        .route("/api/dictionary/letters", get(handle_letters))
        .route("/api/dictionary/{headword}", get(handle_entry))
        .route("/health", get(handle_health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn dictionary(state: &AppState) -> Result<&IgalaDictionary, ApiError> {
    state.dictionary().map_err(|e| {
        tracing::warn!("Rejecting request, dataset not loaded: {e}");
        ApiError::DatasetUnavailable
    })
}

/// GET /api/dictionary?q=&letter=
async fn handle_query(
    State(state): State<Arc<AppState>>,
    Query(desc): Query<QueryDescription>,
) -> Result<Json<EntriesResponse>, ApiError> {
    let dict = dictionary(&state)?;
    let entries = dict.search(&desc);
    tracing::debug!(
        letter = desc.letter_filter(),
        q = desc.term_filter(),
        "{} of {} entries matched",
        entries.len(),
        dict.len()
    );
    Ok(Json(EntriesResponse { entries }))
}

/// GET /api/dictionary/letters
async fn handle_letters(
    State(state): State<Arc<AppState>>,
) -> Result<Json<LettersResponse>, ApiError> {
    let letters = dictionary(&state)?.available_letters();
    Ok(Json(LettersResponse { letters }))
}

/// GET /api/dictionary/{headword}
async fn handle_entry(
    State(state): State<Arc<AppState>>,
    Path(headword): Path<String>,
) -> Result<Json<EntryResponse>, ApiError> {
    let entry = dictionary(&state)?
        .lookup_exact(&headword)
        .cloned()
        .ok_or(ApiError::EntryNotFound)?;
    Ok(Json(EntryResponse { entry }))
}

/// GET /health
async fn handle_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.dictionary() {
        Ok(dict) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                dictionary: Some(dict.metadata().into()),
                error: None,
            }),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "unavailable",
                dictionary: None,
                error: Some(e.to_string()),
            }),
        ),
    }
}
