//! Skill co-occurrence graph.
//!
//! Two skills listed on the same candidate profile form an undirected edge whose
//! weight counts how many profiles list both. Each direction is stored and
//! traced separately. A skill repeated on one profile counts once.

use std::collections::BTreeMap;

use tracing::debug;

use crate::algorithms::trace::{ExecutionStep, ExecutionTrace, TraceBuilder};
use crate::models::Candidate;

pub const ALGORITHM_NAME: &str = "Graph Construction (Skill Similarity)";
pub const DEFAULT_RELATED_LIMIT: usize = 5;

pub type Adjacency = BTreeMap<String, BTreeMap<String, u32>>;

#[derive(Debug, Default)]
pub struct SkillGraph {
    adjacency: Adjacency,
}

impl SkillGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the graph from every record's skill list.
    pub fn build(&mut self, records: &[Candidate]) -> ExecutionTrace {
        let mut trace = TraceBuilder::new(ALGORITHM_NAME);
        self.adjacency.clear();

        for record in records {
            let skills = record.distinct_skills();
            for i in 0..skills.len() {
                for j in i + 1..skills.len() {
                    let (u, v) = (skills[i], skills[j]);
                    let forward = self.add_edge(u, v);
                    trace.push(edge_step(u, v, forward, record.id));
                    let backward = self.add_edge(v, u);
                    trace.push(edge_step(v, u, backward, record.id));
                }
            }
        }

        debug!(
            nodes = self.adjacency.len(),
            steps = trace.step_count(),
            "skill graph built"
        );
        trace.finish()
    }

    /// Increments `from → to` and returns the new weight.
    fn add_edge(&mut self, from: &str, to: &str) -> u32 {
        let weight = self
            .adjacency
            .entry(from.to_string())
            .or_default()
            .entry(to.to_string())
            .or_insert(0);
        *weight += 1;
        *weight
    }

    pub fn weight(&self, from: &str, to: &str) -> u32 {
        self.adjacency
            .get(from)
            .and_then(|n| n.get(to))
            .copied()
            .unwrap_or(0)
    }

    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Strongest neighbours of `skill`, heaviest first; ties by name.
    pub fn related_skills(&self, skill: &str, limit: usize) -> Vec<String> {
        let Some(neighbours) = self.adjacency.get(skill) else {
            return Vec::new();
        };
        let mut ranked: Vec<(&String, &u32)> = neighbours.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(a.1));
        ranked
            .into_iter()
            .take(limit)
            .map(|(name, _)| name.clone())
            .collect()
    }
}

fn edge_step(from: &str, to: &str, weight: u32, candidate_id: i64) -> ExecutionStep {
    ExecutionStep::new(format!("Added Edge '{from}' -> '{to}' (Co-occurrence)"))
        .var("skill_a", from)
        .var("skill_b", to)
        .var("weight", weight)
        .var("candidate_id", candidate_id)
}
