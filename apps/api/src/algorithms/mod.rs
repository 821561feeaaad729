// Traced algorithm engine.
// Every component is a pure function of its input records (plus private,
// rebuilt-per-call state for the index structures) and returns its result
// together with an `ExecutionTrace`. Nothing here depends on HTTP or storage.

pub mod avl_tree;
pub mod fit_score;
pub mod greedy;
pub mod hash_index;
pub mod heap_sort;
pub mod kmp;
pub mod skill_graph;
pub mod sorting;
pub mod trace;
pub mod trie;

pub use trace::ExecutionTrace;
