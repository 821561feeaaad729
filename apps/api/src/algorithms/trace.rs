//! Execution trace: the ordered, replayable record every algorithm emits.
//!
//! A trace is append-only while an algorithm runs. Step ids are assigned by
//! [`TraceBuilder::push`] from a counter seeded at 1, so callers never pick ids
//! themselves and a finished trace is always gap-free and strictly increasing.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One consequential step taken by an algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionStep {
    pub step_id: u32,
    pub description: String,
    /// Opaque structure state, e.g. the current ordering of candidate ids.
    pub state_snapshot: Option<Value>,
    pub highlight_indices: Vec<usize>,
    pub variables: IndexMap<String, String>,
}

impl ExecutionStep {
    /// Starts a step draft. The id is filled in when the step is pushed.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            step_id: 0,
            description: description.into(),
            state_snapshot: None,
            highlight_indices: Vec::new(),
            variables: IndexMap::new(),
        }
    }

    pub fn var(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.variables.insert(name.into(), value.to_string());
        self
    }

    pub fn highlight(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.highlight_indices.extend(indices);
        self
    }

    pub fn snapshot(mut self, snapshot: Value) -> Self {
        self.state_snapshot = Some(snapshot);
        self
    }
}

/// Full trace returned alongside an algorithm result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionTrace {
    pub algorithm_name: String,
    pub steps: Vec<ExecutionStep>,
}

impl ExecutionTrace {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// True when any step description contains `phrase` verbatim.
    pub fn contains_phrase(&self, phrase: &str) -> bool {
        self.steps.iter().any(|s| s.description.contains(phrase))
    }

    /// Steps whose description contains `phrase`, in trace order.
    pub fn steps_with(&self, phrase: &str) -> impl Iterator<Item = &ExecutionStep> {
        let phrase = phrase.to_owned();
        self.steps
            .iter()
            .filter(move |s| s.description.contains(&phrase))
    }
}

/// Owns the trace while an algorithm runs and hands out step ids.
///
/// Recursive algorithms thread `&mut TraceBuilder` through their calls instead
/// of sharing a counter.
#[derive(Debug)]
pub struct TraceBuilder {
    trace: ExecutionTrace,
    next_step_id: u32,
}

impl TraceBuilder {
    pub fn new(algorithm_name: impl Into<String>) -> Self {
        Self {
            trace: ExecutionTrace {
                algorithm_name: algorithm_name.into(),
                steps: Vec::new(),
            },
            next_step_id: 1,
        }
    }

    /// Appends `step`, stamping it with the next id.
    pub fn push(&mut self, mut step: ExecutionStep) {
        step.step_id = self.next_step_id;
        self.next_step_id += 1;
        self.trace.steps.push(step);
    }

    pub fn step_count(&self) -> usize {
        self.trace.steps.len()
    }

    pub fn finish(self) -> ExecutionTrace {
        self.trace
    }
}
