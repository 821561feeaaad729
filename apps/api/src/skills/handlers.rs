//! Axum route handlers for the Skills API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::algorithms::hash_index::HashIndex;
use crate::algorithms::skill_graph::{Adjacency, SkillGraph, DEFAULT_RELATED_LIMIT};
use crate::algorithms::trie::Trie;
use crate::algorithms::ExecutionTrace;
use crate::models::candidate::candidate_ids;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AutocompleteQuery {
    pub prefix: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    pub skill: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RelatedQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct AutocompleteResponse {
    pub results: Vec<String>,
    pub trace: ExecutionTrace,
}

#[derive(Debug, Serialize)]
pub struct NetworkResponse {
    pub graph: Adjacency,
    pub trace: ExecutionTrace,
}

#[derive(Debug, Serialize)]
pub struct RelatedSkill {
    pub skill: String,
    pub weight: u32,
}

#[derive(Debug, Serialize)]
pub struct RelatedResponse {
    pub skill: String,
    pub related: Vec<RelatedSkill>,
}

/// Result of looking one skill up in the freshly built index.
#[derive(Debug, Serialize)]
pub struct IndexLookup {
    pub skill: String,
    pub bucket: usize,
    pub candidate_ids: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub bucket_count: usize,
    pub buckets: Vec<Vec<String>>,
    pub chain_lengths: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookup: Option<IndexLookup>,
    pub trace: ExecutionTrace,
}

/// GET /api/skills/autocomplete?prefix=
///
/// The trie is rebuilt from the catalogue per request; only the search trace
/// is returned.
pub async fn handle_autocomplete(
    State(state): State<AppState>,
    Query(params): Query<AutocompleteQuery>,
) -> Json<AutocompleteResponse> {
    let skills = state.store.read().await.skills().to_vec();

    let mut trie = Trie::new();
    trie.build(skills.as_slice());
    let (results, trace) = trie.autocomplete(params.prefix.as_deref().unwrap_or_default());
    if trace.is_empty() {
        debug!("Empty prefix; trie search skipped");
    }

    Json(AutocompleteResponse { results, trace })
}

/// GET /api/skills/network
pub async fn handle_network(State(state): State<AppState>) -> Json<NetworkResponse> {
    let candidates = state.store.read().await.candidates().to_vec();

    let mut graph = SkillGraph::new();
    let trace = graph.build(&candidates);

    Json(NetworkResponse {
        graph: graph.adjacency().clone(),
        trace,
    })
}

/// GET /api/skills/:name/related?limit=
pub async fn handle_related(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<RelatedQuery>,
) -> Json<RelatedResponse> {
    let candidates = state.store.read().await.candidates().to_vec();

    let mut graph = SkillGraph::new();
    graph.build(&candidates);
    let related = graph
        .related_skills(&name, params.limit.unwrap_or(DEFAULT_RELATED_LIMIT))
        .into_iter()
        .map(|skill| RelatedSkill {
            weight: graph.weight(&name, &skill),
            skill,
        })
        .collect();

    Json(RelatedResponse {
        skill: name,
        related,
    })
}

/// GET /api/skills/index?skill=
///
/// Builds the skill hash index over all candidates. With `skill`, the response
/// also carries that key's bucket and the candidates chained under it.
pub async fn handle_index(
    State(state): State<AppState>,
    Query(params): Query<IndexQuery>,
) -> Json<IndexResponse> {
    let candidates = state.store.read().await.candidates().to_vec();

    let mut index = HashIndex::new(state.config.hash_bucket_count);
    let trace = index.build(&candidates);

    let lookup = params.skill.map(|skill| IndexLookup {
        bucket: index.bucket_index(&skill),
        candidate_ids: index
            .get(&skill)
            .map(candidate_ids)
            .unwrap_or_default(),
        skill,
    });

    Json(IndexResponse {
        bucket_count: index.bucket_count(),
        buckets: index.bucket_keys(),
        chain_lengths: (0..index.bucket_count()).map(|b| index.chain_len(b)).collect(),
        lookup,
        trace,
    })
}
