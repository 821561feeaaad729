//! Prefix tree over skill names for autocomplete.
//!
//! Words are case-folded to lowercase on insert and lookup. Children live in an
//! ordered map, so completions come back in lexicographic order.

use std::collections::BTreeMap;

use tracing::debug;

use crate::algorithms::trace::{ExecutionStep, ExecutionTrace, TraceBuilder};

pub const BUILD_ALGORITHM_NAME: &str = "Trie Construction";
pub const SEARCH_ALGORITHM_NAME: &str = "Trie Search";

/// Completions shown in the closing step before the list is cut off.
const PREVIEW_MATCHES: usize = 3;

#[derive(Debug, Default)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    is_terminal: bool,
}

#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents with `words`, one trace step per word.
    pub fn build<S: AsRef<str>>(&mut self, words: &[S]) -> ExecutionTrace {
        let mut trace = TraceBuilder::new(BUILD_ALGORITHM_NAME);
        self.root = TrieNode::default();

        for word in words {
            self.insert(word.as_ref(), &mut trace);
        }

        debug!(words = words.len(), "trie built");
        trace.finish()
    }

    fn insert(&mut self, word: &str, trace: &mut TraceBuilder) {
        trace.push(ExecutionStep::new(format!("Inserting word: {word}")).var("word", word));

        let mut node = &mut self.root;
        for ch in word.to_lowercase().chars() {
            node = node.children.entry(ch).or_default();
        }
        node.is_terminal = true;
    }

    /// Every inserted word starting with `prefix`, lowercased.
    ///
    /// An empty prefix returns nothing; so does any prefix that falls off the
    /// tree partway through.
    pub fn autocomplete(&self, prefix: &str) -> (Vec<String>, ExecutionTrace) {
        let mut trace = TraceBuilder::new(SEARCH_ALGORITHM_NAME);
        let mut results = Vec::new();

        if prefix.is_empty() {
            return (results, trace.finish());
        }

        trace.push(
            ExecutionStep::new(format!("Starting search for prefix: '{prefix}'"))
                .var("node", "ROOT"),
        );

        let folded = prefix.to_lowercase();
        let mut node = &self.root;
        for ch in folded.chars() {
            match node.children.get(&ch) {
                Some(child) => {
                    trace.push(
                        ExecutionStep::new(format!("Traversing to child node: '{ch}'"))
                            .var("current_char", ch),
                    );
                    node = child;
                }
                None => {
                    trace.push(
                        ExecutionStep::new(format!("Character '{ch}' not found. Search ends."))
                            .var("missing_char", ch),
                    );
                    return (results, trace.finish());
                }
            }
        }

        trace.push(
            ExecutionStep::new("Prefix found. Collecting all words from this node...")
                .var("prefix", prefix),
        );

        let mut path = folded;
        collect_words(node, &mut path, &mut results);

        let mut preview = results
            .iter()
            .take(PREVIEW_MATCHES)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        if results.len() > PREVIEW_MATCHES {
            preview.push_str("...");
        }
        trace.push(
            ExecutionStep::new(format!("Search complete. Found {} matches.", results.len()))
                .var("matches", preview),
        );

        debug!(prefix, matches = results.len(), "trie autocomplete finished");
        (results, trace.finish())
    }
}

/// Depth-first walk pushing the path string of every terminal node.
fn collect_words(node: &TrieNode, path: &mut String, results: &mut Vec<String>) {
    if node.is_terminal {
        results.push(path.clone());
    }
    for (ch, child) in &node.children {
        path.push(*ch);
        collect_words(child, path, results);
        path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn skills_trie() -> Trie {
        let mut trie = Trie::new();
        trie.build(&[
            "Java",
            "JavaScript",
            "Jira",
            "Python",
            "PostgreSQL",
            "React",
            "Go",
            "Golang",
        ]);
        trie
    }

    #[test]
    fn test_build_emits_one_step_per_word() {
        let mut trie = Trie::new();
        let trace = trie.build(&["Rust", "Go"]);
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.steps[0].description, "Inserting word: Rust");
        assert_eq!(trace.algorithm_name, BUILD_ALGORITHM_NAME);
    }

    #[test]
    fn test_autocomplete_is_case_insensitive() {
        let trie = skills_trie();
        let (matches, _) = trie.autocomplete("JA");
        assert_eq!(matches, vec!["java", "javascript"]);
    }

    #[test]
    fn test_exact_word_is_included() {
        let trie = skills_trie();
        let (matches, _) = trie.autocomplete("go");
        assert_eq!(matches, vec!["go", "golang"]);
    }

    #[test]
    fn test_missing_character_ends_search() {
        let trie = skills_trie();
        let (matches, trace) = trie.autocomplete("jx");
        assert!(matches.is_empty());
        let last = trace.steps.last().unwrap();
        assert_eq!(last.description, "Character 'x' not found. Search ends.");
        assert_eq!(last.variables["missing_char"], "x");
    }

    #[test]
    fn test_preview_is_truncated_after_three() {
        let trie = skills_trie();
        let (matches, trace) = trie.autocomplete("j");
        assert_eq!(matches, vec!["java", "javascript", "jira"]);
        assert_eq!(
            trace.steps.last().unwrap().variables["matches"],
            "java, javascript, jira"
        );

        let mut trie = Trie::new();
        trie.build(&["pa", "pb", "pc", "pd"]);
        let (matches, trace) = trie.autocomplete("p");
        assert_eq!(matches.len(), 4);
        let last = trace.steps.last().unwrap();
        assert_eq!(last.description, "Search complete. Found 4 matches.");
        assert_eq!(last.variables["matches"], "pa, pb, pc...");
    }

    #[test]
    fn test_search_trace_shape() {
        let trie = skills_trie();
        let (_, trace) = trie.autocomplete("Py");
        let descriptions: Vec<&str> = trace.steps.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec![
                "Starting search for prefix: 'Py'",
                "Traversing to child node: 'p'",
                "Traversing to child node: 'y'",
                "Prefix found. Collecting all words from this node...",
                "Search complete. Found 1 matches.",
            ]
        );
    }

    #[test]
    fn test_empty_prefix_yields_nothing() {
        let trie = skills_trie();
        let (matches, trace) = trie.autocomplete("");
        assert!(matches.is_empty());
        assert!(trace.is_empty());
        assert_eq!(trace.algorithm_name, SEARCH_ALGORITHM_NAME);
    }

    #[test]
    fn test_rebuild_discards_old_words() {
        let mut trie = skills_trie();
        trie.build(&["Rust"]);
        let (matches, _) = trie.autocomplete("j");
        assert!(matches.is_empty());
    }

    proptest! {
        #[test]
        fn prop_autocomplete_matches_prefix_filter(
            words in prop::collection::vec("[a-cA-C]{1,5}", 0..20),
            prefix in "[a-cA-C]{1,3}",
        ) {
            let mut trie = Trie::new();
            trie.build(words.as_slice());
            let (matches, _) = trie.autocomplete(&prefix);

            let p = prefix.to_lowercase();
            let mut expected: Vec<String> = words
                .iter()
                .map(|w| w.to_lowercase())
                .filter(|w| w.starts_with(&p))
                .collect();
            expected.sort();
            expected.dedup();
            prop_assert_eq!(matches, expected);
        }
    }
}
