pub mod health;

use axum::{routing::get, Router};

use crate::candidates::handlers as candidates;
use crate::jobs::handlers as jobs;
use crate::ranking::handlers as ranking;
use crate::skills::handlers as skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Candidates: KMP resume search, AVL construction
        .route(
            "/api/candidates",
            get(candidates::handle_list_candidates).post(candidates::handle_create_candidate),
        )
        .route(
            "/api/candidates/search",
            get(candidates::handle_search_candidates),
        )
        .route("/api/candidates/avl-build", get(candidates::handle_avl_build))
        // Jobs: DP-LCS matching
        .route(
            "/api/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route("/api/jobs/:id/match", get(jobs::handle_match_candidates))
        // Ranking: heap, merge/quick sort, greedy shortlist
        .route("/api/ranking/rank", get(ranking::handle_rank))
        .route("/api/ranking/sort", get(ranking::handle_sort))
        .route("/api/ranking/shortlist", get(ranking::handle_shortlist))
        // Skills: trie, co-occurrence graph, hash index
        .route("/api/skills/autocomplete", get(skills::handle_autocomplete))
        .route("/api/skills/network", get(skills::handle_network))
        .route("/api/skills/index", get(skills::handle_index))
        .route("/api/skills/:name/related", get(skills::handle_related))
        .with_state(state)
}
