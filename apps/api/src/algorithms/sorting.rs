//! Comparison sorts over candidates.
//!
//! Merge sort orders by ascending expected salary and is stable. Quick sort
//! orders by descending experience with a Lomuto partition (last element as
//! pivot); already-descending input degrades it to O(n) recursion depth.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::algorithms::trace::{ExecutionStep, ExecutionTrace, TraceBuilder};
use crate::models::Candidate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortAlgorithm {
    #[default]
    #[serde(alias = "MergeSort")]
    MergeSort,
    #[serde(alias = "QuickSort")]
    QuickSort,
}

impl SortAlgorithm {
    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::MergeSort => "MergeSort",
            SortAlgorithm::QuickSort => "QuickSort",
        }
    }
}

/// Sorts a copy of `records`; the input is left untouched.
pub fn sort(records: &[Candidate], algorithm: SortAlgorithm) -> (Vec<Candidate>, ExecutionTrace) {
    let mut trace = TraceBuilder::new(algorithm.name());
    let mut list = records.to_vec();

    if list.len() > 1 {
        let last = list.len() - 1;
        match algorithm {
            SortAlgorithm::MergeSort => merge_sort(&mut list, 0, last, &mut trace),
            SortAlgorithm::QuickSort => quick_sort(&mut list, 0, last, &mut trace),
        }
    }

    debug!(
        algorithm = algorithm.name(),
        records = list.len(),
        steps = trace.step_count(),
        "sort finished"
    );
    (list, trace.finish())
}

fn merge_sort(list: &mut [Candidate], left: usize, right: usize, trace: &mut TraceBuilder) {
    if left < right {
        let mid = left + (right - left) / 2;
        merge_sort(list, left, mid, trace);
        merge_sort(list, mid + 1, right, trace);
        merge(list, left, mid, right, trace);
    }
}

fn merge(list: &mut [Candidate], left: usize, mid: usize, right: usize, trace: &mut TraceBuilder) {
    trace.push(
        ExecutionStep::new(format!(
            "Merging range [{left}, {mid}] and [{}, {right}]",
            mid + 1
        ))
        .highlight(left..=right),
    );

    let left_run = list[left..=mid].to_vec();
    let right_run = list[mid + 1..=right].to_vec();
    let (mut a, mut b) = (0, 0);
    let mut k = left;

    while a < left_run.len() && b < right_run.len() {
        // `<=` keeps equal salaries in input order.
        if left_run[a].expected_salary <= right_run[b].expected_salary {
            list[k] = left_run[a].clone();
            a += 1;
        } else {
            list[k] = right_run[b].clone();
            b += 1;
        }
        k += 1;
    }
    for record in left_run[a..].iter().chain(&right_run[b..]) {
        list[k] = record.clone();
        k += 1;
    }
}

fn quick_sort(list: &mut [Candidate], low: usize, high: usize, trace: &mut TraceBuilder) {
    if low < high {
        let pivot_pos = partition(list, low, high, trace);
        if pivot_pos > low {
            quick_sort(list, low, pivot_pos - 1, trace);
        }
        quick_sort(list, pivot_pos + 1, high, trace);
    }
}

fn partition(list: &mut [Candidate], low: usize, high: usize, trace: &mut TraceBuilder) -> usize {
    let pivot = list[high].experience_years;
    let mut store = low;

    for j in low..high {
        if list[j].experience_years > pivot {
            list.swap(store, j);
            store += 1;
        }
    }
    list.swap(store, high);

    trace.push(
        ExecutionStep::new(format!(
            "Partition around pivot {pivot} at index {high}. New Pivot Pos: {store}"
        ))
        .highlight([store])
        .var("pivot", pivot)
        .var("pivot_pos", store),
    );
    store
}
