//! Axum route handlers for the Ranking API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::algorithms::sorting::{self, SortAlgorithm};
use crate::algorithms::{greedy, heap_sort, ExecutionTrace};
use crate::errors::AppError;
use crate::models::Candidate;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SortQuery {
    #[serde(default)]
    pub algorithm: SortAlgorithm,
}

#[derive(Debug, Deserialize)]
pub struct ShortlistQuery {
    pub budget: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct RankingResponse {
    pub candidates: Vec<Candidate>,
    pub trace: ExecutionTrace,
}

#[derive(Debug, Serialize)]
pub struct ShortlistResponse {
    pub candidates: Vec<Candidate>,
    pub total_cost: f64,
    pub trace: ExecutionTrace,
}

/// GET /api/ranking/rank
///
/// Max-heap ranking, most experienced first.
pub async fn handle_rank(State(state): State<AppState>) -> Json<RankingResponse> {
    let candidates = state.store.read().await.candidates().to_vec();
    let (candidates, trace) = heap_sort::rank(&candidates);
    Json(RankingResponse { candidates, trace })
}

/// GET /api/ranking/sort?algorithm=merge_sort|quick_sort
pub async fn handle_sort(
    State(state): State<AppState>,
    Query(params): Query<SortQuery>,
) -> Json<RankingResponse> {
    let candidates = state.store.read().await.candidates().to_vec();
    let (candidates, trace) = sorting::sort(&candidates, params.algorithm);
    Json(RankingResponse { candidates, trace })
}

/// GET /api/ranking/shortlist?budget=
pub async fn handle_shortlist(
    State(state): State<AppState>,
    Query(params): Query<ShortlistQuery>,
) -> Result<Json<ShortlistResponse>, AppError> {
    let budget = params
        .budget
        .ok_or_else(|| AppError::Validation("budget is required".to_string()))?;
    if !budget.is_finite() || budget < 0.0 {
        return Err(AppError::Validation(
            "budget must be a non-negative number".to_string(),
        ));
    }

    let candidates = state.store.read().await.candidates().to_vec();
    let (candidates, trace) = greedy::select(&candidates, budget);
    let total_cost = candidates.iter().map(|c| c.expected_salary).sum();

    Ok(Json(ShortlistResponse {
        candidates,
        total_cost,
        trace,
    }))
}
