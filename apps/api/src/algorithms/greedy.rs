//! Budget-constrained shortlist: most experienced first, take whoever still fits.
//!
//! This is a single greedy pass, not an optimal knapsack. A cheaper candidate
//! further down the list can still be picked after a costly one is skipped.

use tracing::debug;

use crate::algorithms::trace::{ExecutionStep, ExecutionTrace, TraceBuilder};
use crate::models::Candidate;

pub const ALGORITHM_NAME: &str = "Greedy Selection (Max Experience for Budget)";

/// Salaries are summed and compared against `budget` in binary floating point,
/// so fractional amounts are subject to rounding (`0.1 + 0.2 > 0.3`).
pub fn select(records: &[Candidate], budget: f64) -> (Vec<Candidate>, ExecutionTrace) {
    let mut trace = TraceBuilder::new(ALGORITHM_NAME);

    // Stable sort: equal experience keeps input order.
    let mut ordered = records.to_vec();
    ordered.sort_by(|a, b| b.experience_years.cmp(&a.experience_years));

    trace.push(
        ExecutionStep::new("Sorted candidates by Experience (Greedy Heuristic)")
            .var("total_budget", budget),
    );

    let mut selected = Vec::new();
    let mut running_cost = 0.0_f64;

    for candidate in ordered {
        if running_cost + candidate.expected_salary <= budget {
            running_cost += candidate.expected_salary;
            trace.push(
                ExecutionStep::new(format!(
                    "Selected Candidate {} (Exp: {}, Salary: {})",
                    candidate.full_name, candidate.experience_years, candidate.expected_salary
                ))
                .var("candidate_id", candidate.id)
                .var("current_cost", running_cost)
                .var("remaining", budget - running_cost),
            );
            selected.push(candidate);
        } else {
            trace.push(
                ExecutionStep::new(format!(
                    "Skipped Candidate {} (Salary {} exceeds remaining budget)",
                    candidate.full_name, candidate.expected_salary
                ))
                .var("candidate_id", candidate.id)
                .var("current_cost", running_cost)
                .var("attempted_add", candidate.expected_salary),
            );
        }
    }

    debug!(
        budget,
        selected = selected.len(),
        cost = running_cost,
        "greedy selection finished"
    );
    (selected, trace.finish())
}
