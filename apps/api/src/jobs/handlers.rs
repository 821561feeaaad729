//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::algorithms::fit_score::{match_candidates, CandidateMatch};
use crate::errors::AppError;
use crate::models::{Job, NewJob};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub job: Job,
    pub results: Vec<CandidateMatch>,
}

/// GET /api/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<Job>> {
    Json(state.store.read().await.jobs().to_vec())
}

/// POST /api/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(mut request): Json<NewJob>,
) -> Result<(StatusCode, Json<Job>), AppError> {
    if request.job_title.trim().is_empty() {
        return Err(AppError::Validation("job_title cannot be empty".to_string()));
    }
    if !request.max_salary.is_finite() || request.max_salary < 0.0 {
        return Err(AppError::Validation(
            "max_salary must be a non-negative number".to_string(),
        ));
    }

    request.required_skills = request
        .required_skills
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let job = state.store.write().await.add_job(request)?;
    info!(job_id = job.id, "Job created");
    Ok((StatusCode::CREATED, Json(job)))
}

/// GET /api/jobs/:id/match
///
/// Scores every candidate against the job's required skills (DP-LCS) and
/// returns them best fit first, each with its own trace.
pub async fn handle_match_candidates(
    State(state): State<AppState>,
    Path(job_id): Path<i64>,
) -> Result<Json<MatchResponse>, AppError> {
    let (job, candidates) = {
        let store = state.store.read().await;
        let job = store
            .job(job_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;
        (job, store.candidates().to_vec())
    };

    let results = match_candidates(&job, &candidates);
    Ok(Json(MatchResponse { job, results }))
}
