//! Axum route handlers for the Candidates API.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::algorithms::avl_tree::{self, in_order_ids};
use crate::algorithms::kmp;
use crate::algorithms::ExecutionTrace;
use crate::candidates::extraction::{dedup_skills, extract_skills};
use crate::errors::AppError;
use crate::models::{Candidate, NewCandidate};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub keyword: Option<String>,
}

/// Character offsets of every keyword occurrence in one resume.
#[derive(Debug, Serialize)]
pub struct SearchHit {
    pub candidate_id: i64,
    pub positions: Vec<usize>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub candidates: Vec<Candidate>,
    pub hits: Vec<SearchHit>,
    pub traces: Vec<ExecutionTrace>,
}

#[derive(Debug, Serialize)]
pub struct AvlBuildResponse {
    pub in_order_ids: Vec<i64>,
    pub height: i32,
    pub trace: ExecutionTrace,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/candidates
pub async fn handle_list_candidates(State(state): State<AppState>) -> Json<Vec<Candidate>> {
    let store = state.store.read().await;
    Json(store.candidates().to_vec())
}

/// POST /api/candidates
///
/// Repeated skills are collapsed (case-insensitive, first spelling kept), then
/// catalogue skills mentioned in `resume_text` are attached automatically.
pub async fn handle_create_candidate(
    State(state): State<AppState>,
    Json(mut request): Json<NewCandidate>,
) -> Result<(StatusCode, Json<Candidate>), AppError> {
    validate_new_candidate(&request)?;
    dedup_skills(&mut request.skills);

    let mut store = state.store.write().await;
    let added = extract_skills(&request.resume_text, store.skills(), &mut request.skills);
    let candidate = store.add_candidate(request)?;

    info!(
        candidate_id = candidate.id,
        extracted = added.len(),
        "Candidate created"
    );
    Ok((StatusCode::CREATED, Json(candidate)))
}

fn validate_new_candidate(request: &NewCandidate) -> Result<(), AppError> {
    if request.full_name.trim().is_empty() {
        return Err(AppError::Validation("full_name cannot be empty".to_string()));
    }
    if request.experience_years < 0 {
        return Err(AppError::Validation(
            "experience_years cannot be negative".to_string(),
        ));
    }
    if !request.expected_salary.is_finite() || request.expected_salary < 0.0 {
        return Err(AppError::Validation(
            "expected_salary must be a non-negative number".to_string(),
        ));
    }
    Ok(())
}

/// GET /api/candidates/search?keyword=
///
/// Runs KMP over every resume. Matching traces are returned first; when nothing
/// matches, the first resume's trace is returned so the search is still visible.
pub async fn handle_search_candidates(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    let keyword = params.keyword.unwrap_or_default();
    if keyword.is_empty() {
        return Err(AppError::Validation("keyword cannot be empty".to_string()));
    }

    let candidates = state.store.read().await.candidates().to_vec();
    let limit = state.config.search_trace_limit;

    let mut matched = Vec::new();
    let mut hits = Vec::new();
    let mut traces = Vec::new();
    let mut first_trace = None;

    for candidate in candidates {
        let trace = kmp::search(&candidate.resume_text, &keyword);
        if kmp::pattern_found(&trace) {
            hits.push(SearchHit {
                candidate_id: candidate.id,
                positions: kmp::match_indices(&trace),
            });
            if traces.len() < limit {
                traces.push(trace);
            }
            matched.push(candidate);
        } else if first_trace.is_none() {
            first_trace = Some(trace);
        }
    }

    if traces.is_empty() && limit > 0 {
        traces.extend(first_trace);
    }

    info!(
        keyword = %keyword,
        matches = matched.len(),
        trace_steps = traces.iter().map(ExecutionTrace::len).sum::<usize>(),
        "Resume keyword search"
    );
    Ok(Json(SearchResponse {
        candidates: matched,
        hits,
        traces,
    }))
}

/// GET /api/candidates/avl-build
pub async fn handle_avl_build(State(state): State<AppState>) -> Json<AvlBuildResponse> {
    let candidates = state.store.read().await.candidates().to_vec();
    let (root, trace) = avl_tree::insert_all(&candidates);

    Json(AvlBuildResponse {
        in_order_ids: in_order_ids(&root),
        height: root.as_ref().map_or(0, |n| n.height()),
        trace,
    })
}
