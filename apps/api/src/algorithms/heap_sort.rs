//! Max-heap ranking by years of experience.
//!
//! Heap sort leaves the slice ascending; the result is reversed once at the end
//! so the most experienced candidate comes first. Only swaps are traced.

use serde_json::json;
use tracing::debug;

use crate::algorithms::trace::{ExecutionStep, ExecutionTrace, TraceBuilder};
use crate::models::candidate::{candidate_ids, Candidate};

pub const ALGORITHM_NAME: &str = "Max Heap Sort";

/// Returns candidates ordered by descending experience.
pub fn rank(records: &[Candidate]) -> (Vec<Candidate>, ExecutionTrace) {
    let mut trace = TraceBuilder::new(ALGORITHM_NAME);
    let mut heap = records.to_vec();
    let n = heap.len();

    for i in (0..n / 2).rev() {
        sift_down(&mut heap, n, i, &mut trace);
    }

    for end in (1..n).rev() {
        trace.push(
            ExecutionStep::new(format!("Swap root (Max) with element at index {end}"))
                .snapshot(json!(candidate_ids(&heap)))
                .highlight([0, end]),
        );
        heap.swap(0, end);
        sift_down(&mut heap, end, 0, &mut trace);
    }

    heap.reverse();

    debug!(records = n, steps = trace.step_count(), "heap ranking finished");
    (heap, trace.finish())
}

/// Restores the heap property for the subtree rooted at `root` within `heap[..len]`.
fn sift_down(heap: &mut [Candidate], len: usize, mut root: usize, trace: &mut TraceBuilder) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < len && heap[left].experience_years > heap[largest].experience_years {
            largest = left;
        }
        if right < len && heap[right].experience_years > heap[largest].experience_years {
            largest = right;
        }
        if largest == root {
            return;
        }

        trace.push(
            ExecutionStep::new(format!(
                "Heapify: Swap index {root} with {largest} (Child larger than Parent)"
            ))
            .snapshot(json!(candidate_ids(heap)))
            .highlight([root, largest]),
        );
        heap.swap(root, largest);
        root = largest;
    }
}
