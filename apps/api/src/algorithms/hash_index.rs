//! Chained hash table mapping skill name → candidates holding that skill.
//!
//! The bucket count is fixed for the lifetime of an index; there is no rehash.
//! Each bucket is a singly linked chain with at most one node per key.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tracing::debug;

use crate::algorithms::trace::{ExecutionStep, ExecutionTrace, TraceBuilder};
use crate::models::Candidate;

pub const ALGORITHM_NAME: &str = "Hash Table Construction";
pub const DEFAULT_BUCKET_COUNT: usize = 10;

#[derive(Debug)]
struct ChainNode {
    key: String,
    values: Vec<Candidate>,
    next: Option<Box<ChainNode>>,
}

impl ChainNode {
    fn new(key: &str, record: &Candidate) -> Box<Self> {
        Box::new(Self {
            key: key.to_string(),
            values: vec![record.clone()],
            next: None,
        })
    }
}

#[derive(Debug)]
pub struct HashIndex {
    buckets: Vec<Option<Box<ChainNode>>>,
}

impl Default for HashIndex {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKET_COUNT)
    }
}

impl HashIndex {
    /// A zero bucket count is bumped to one.
    pub fn new(bucket_count: usize) -> Self {
        let bucket_count = bucket_count.max(1);
        Self {
            buckets: (0..bucket_count).map(|_| None).collect(),
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Deterministic hash over the full key. Stable within one process.
    pub fn hash_key(key: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }

    pub fn bucket_index(&self, key: &str) -> usize {
        (Self::hash_key(key) % self.buckets.len() as u64) as usize
    }

    /// Clears the table and indexes every distinct (record, skill) pair in
    /// input order.
    pub fn build(&mut self, records: &[Candidate]) -> ExecutionTrace {
        let mut trace = TraceBuilder::new(ALGORITHM_NAME);
        self.buckets.iter_mut().for_each(|b| *b = None);

        let mut collisions = 0usize;
        for record in records {
            for skill in record.distinct_skills() {
                if self.insert(skill, record, &mut trace) {
                    collisions += 1;
                }
            }
        }

        debug!(
            buckets = self.bucket_count(),
            collisions,
            steps = trace.step_count(),
            "hash index built"
        );
        trace.finish()
    }

    /// Returns true when the target bucket was already occupied.
    fn insert(&mut self, key: &str, record: &Candidate, trace: &mut TraceBuilder) -> bool {
        let hash = Self::hash_key(key);
        let index = self.bucket_index(key);

        trace.push(
            ExecutionStep::new(format!(
                "Hashing skill '{key}' for Candidate {}",
                record.full_name
            ))
            .var("key", key)
            .var("hash", hash)
            .var("bucket", index)
            .highlight([index]),
        );

        let mut slot = &mut self.buckets[index];
        if slot.is_none() {
            *slot = Some(ChainNode::new(key, record));
            return false;
        }

        while let Some(node) = slot {
            if node.key == key {
                node.values.push(record.clone());
                trace.push(
                    ExecutionStep::new(format!(
                        "Collision! Key '{key}' exists. Appending candidate."
                    ))
                    .var("collision", true)
                    .var("chain_len", node.values.len())
                    .highlight([index]),
                );
                return true;
            }
            slot = &mut node.next;
        }

        *slot = Some(ChainNode::new(key, record));
        trace.push(
            ExecutionStep::new(format!(
                "Collision! Key '{key}' not found in chain. Adding new node end of chain."
            ))
            .var("collision", true)
            .var("action", "chaining")
            .highlight([index]),
        );
        true
    }

    /// Candidates indexed under `key`, in insertion order.
    pub fn get(&self, key: &str) -> Option<&[Candidate]> {
        let mut node = self.buckets[self.bucket_index(key)].as_deref();
        while let Some(n) = node {
            if n.key == key {
                return Some(&n.values);
            }
            node = n.next.as_deref();
        }
        None
    }

    /// Number of distinct keys chained in `bucket`.
    pub fn chain_len(&self, bucket: usize) -> usize {
        let mut len = 0;
        let mut node = self.buckets.get(bucket).and_then(|b| b.as_deref());
        while let Some(n) = node {
            len += 1;
            node = n.next.as_deref();
        }
        len
    }

    /// Keys per bucket, in chain order.
    pub fn bucket_keys(&self) -> Vec<Vec<String>> {
        self.buckets
            .iter()
            .map(|head| {
                let mut keys = Vec::new();
                let mut node = head.as_deref();
                while let Some(n) = node {
                    keys.push(n.key.clone());
                    node = n.next.as_deref();
                }
                keys
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> Vec<Candidate> {
        vec![
            Candidate::new(1, "Alice", 5, 1.0).with_skills(&["Java", "SQL"]),
            Candidate::new(2, "Bob", 2, 1.0).with_skills(&["React", "Python"]),
            Candidate::new(4, "Diana", 4, 1.0).with_skills(&["Python", "React", "SQL"]),
        ]
    }

    #[test]
    fn test_every_pair_is_retrievable() {
        let mut index = HashIndex::default();
        index.build(&sample());

        let sql: Vec<i64> = index.get("SQL").unwrap().iter().map(|c| c.id).collect();
        assert_eq!(sql, vec![1, 4]);
        let python: Vec<i64> = index.get("Python").unwrap().iter().map(|c| c.id).collect();
        assert_eq!(python, vec![2, 4]);
        assert!(index.get("Rust").is_none());
        // Keys are case-sensitive.
        assert!(index.get("sql").is_none());
    }

    #[test]
    fn test_repeated_skill_is_indexed_once() {
        let mut index = HashIndex::default();
        let trace = index.build(&[Candidate::new(7, "Dup", 1, 1.0).with_skills(&["Go", "Go"])]);
        let go: Vec<i64> = index.get("Go").unwrap().iter().map(|c| c.id).collect();
        assert_eq!(go, vec![7]);
        assert_eq!(trace.len(), 1);
    }

    #[test]
    fn test_one_hash_step_per_pair() {
        let mut index = HashIndex::default();
        let trace = index.build(&sample());
        assert_eq!(trace.steps_with("Hashing skill").count(), 7);
        assert_eq!(trace.algorithm_name, ALGORITHM_NAME);

        let first = &trace.steps[0];
        assert_eq!(first.description, "Hashing skill 'Java' for Candidate Alice");
        assert_eq!(first.variables["bucket"], index.bucket_index("Java").to_string());
        assert_eq!(first.variables["hash"], HashIndex::hash_key("Java").to_string());
    }

    #[test]
    fn test_single_bucket_forces_chaining() {
        let mut index = HashIndex::new(1);
        let trace = index.build(&sample());

        // Java → new head; SQL, React, Python → new chain nodes;
        // Python, React, SQL again → appends.
        assert_eq!(trace.steps_with("not found in chain").count(), 3);
        assert_eq!(trace.steps_with("exists. Appending").count(), 3);
        assert_eq!(index.chain_len(0), 4);
        assert_eq!(index.bucket_keys()[0], vec!["Java", "SQL", "React", "Python"]);
    }

    #[test]
    fn test_build_starts_from_empty() {
        let mut index = HashIndex::new(3);
        index.build(&sample());
        index.build(&sample());
        assert_eq!(index.get("SQL").map(<[Candidate]>::len), Some(2));
    }

    #[test]
    fn test_zero_buckets_is_clamped() {
        let index = HashIndex::new(0);
        assert_eq!(index.bucket_count(), 1);
        assert_eq!(index.bucket_index("anything"), 0);
    }

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(HashIndex::hash_key("Kubernetes"), HashIndex::hash_key("Kubernetes"));
        let index = HashIndex::new(7);
        assert_eq!(index.bucket_index("Docker"), index.bucket_index("Docker"));
    }

    proptest! {
        #[test]
        fn prop_retrievable_and_one_node_per_key(
            profiles in prop::collection::vec(prop::collection::vec("[a-f]{1,3}", 0..5), 0..10),
            buckets in 1usize..6,
        ) {
            let records: Vec<Candidate> = profiles
                .iter()
                .enumerate()
                .map(|(i, skills)| {
                    let mut c = Candidate::new(i as i64, "X", 1, 1.0);
                    c.skills = skills.clone();
                    c
                })
                .collect();
            let mut index = HashIndex::new(buckets);
            index.build(&records);

            for record in &records {
                for skill in &record.skills {
                    let hits = index.get(skill).unwrap();
                    prop_assert_eq!(hits.iter().filter(|c| c.id == record.id).count(), 1);
                }
            }
            for keys in index.bucket_keys() {
                let mut deduped = keys.clone();
                deduped.sort();
                deduped.dedup();
                prop_assert_eq!(deduped.len(), keys.len());
            }
        }
    }
}
