//! Knuth–Morris–Pratt search over resume text.
//!
//! Callers decide whether a resume matched by looking for [`PATTERN_FOUND`] in
//! the step descriptions, so that phrase is part of the output contract.

use tracing::debug;

use crate::algorithms::trace::{ExecutionStep, ExecutionTrace, TraceBuilder};

pub const ALGORITHM_NAME: &str = "KMP Pattern Search";

/// Literal phrase announcing a match in a step description.
pub const PATTERN_FOUND: &str = "Pattern found";

/// Finds every occurrence of `pattern` in `text` (case-sensitive).
///
/// Indices are character positions. An empty text or pattern produces an
/// empty trace.
pub fn search(text: &str, pattern: &str) -> ExecutionTrace {
    let mut trace = TraceBuilder::new(ALGORITHM_NAME);
    if text.is_empty() || pattern.is_empty() {
        return trace.finish();
    }

    let text: Vec<char> = text.chars().collect();
    let pattern_chars: Vec<char> = pattern.chars().collect();

    trace.push(ExecutionStep::new("Computing LPS Array").var("pattern", pattern));
    let lps = failure_table(&pattern_chars);

    trace.push(
        ExecutionStep::new("Starting Search")
            .var("text", text.iter().collect::<String>())
            .var("pattern", pattern),
    );

    let (n, m) = (text.len(), pattern_chars.len());
    let (mut i, mut j) = (0usize, 0usize);
    let mut matches = 0usize;

    while i < n {
        if pattern_chars[j] == text[i] {
            i += 1;
            j += 1;
        }

        if j == m {
            let start = i - j;
            matches += 1;
            trace.push(
                ExecutionStep::new(format!("{PATTERN_FOUND} at index {start}")).highlight([start]),
            );
            j = lps[j - 1];
        } else if i < n && pattern_chars[j] != text[i] {
            if j != 0 {
                j = lps[j - 1];
                trace.push(
                    ExecutionStep::new(format!("Mismatch at {i}. Jumping 'j' to {j} using LPS."))
                        .var("i", i)
                        .var("j", j),
                );
            } else {
                i += 1;
            }
        }
    }

    debug!(matches, steps = trace.step_count(), "KMP search finished");
    trace.finish()
}

/// Longest proper prefix that is also a suffix, for every prefix of `pattern`.
fn failure_table(pattern: &[char]) -> Vec<usize> {
    let mut lps = vec![0; pattern.len()];
    let mut len = 0;
    let mut i = 1;

    while i < pattern.len() {
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len != 0 {
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }
    lps
}

/// Whether a search trace reports at least one match.
pub fn pattern_found(trace: &ExecutionTrace) -> bool {
    trace.contains_phrase(PATTERN_FOUND)
}

/// Match start indices reported by a search trace, in scan order.
pub fn match_indices(trace: &ExecutionTrace) -> Vec<usize> {
    trace
        .steps_with(PATTERN_FOUND)
        .filter_map(|s| s.highlight_indices.first().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_failure_table() {
        let p: Vec<char> = "ABABCABAB".chars().collect();
        assert_eq!(failure_table(&p), vec![0, 0, 1, 2, 0, 1, 2, 3, 4]);
        let p: Vec<char> = "AAAA".chars().collect();
        assert_eq!(failure_table(&p), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_finds_all_occurrences() {
        let trace = search("ABABDABACDABABCABAB", "ABABCABAB");
        assert!(pattern_found(&trace));
        assert_eq!(match_indices(&trace), vec![10]);

        let trace = search("Java and more Java", "Java");
        assert_eq!(match_indices(&trace), vec![0, 14]);
    }

    #[test]
    fn test_overlapping_occurrences() {
        let trace = search("AAAAA", "AAA");
        assert_eq!(match_indices(&trace), vec![0, 1, 2]);
    }

    #[test]
    fn test_found_step_wording_and_highlight() {
        let trace = search("Experienced Java developer", "Java");
        let found: Vec<_> = trace.steps_with(PATTERN_FOUND).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].description, "Pattern found at index 12");
        assert_eq!(found[0].highlight_indices, vec![12]);
    }

    #[test]
    fn test_search_is_case_sensitive() {
        let trace = search("Experienced java developer", "Java");
        assert!(!pattern_found(&trace));
    }

    #[test]
    fn test_preamble_steps() {
        let trace = search("abc", "zz");
        assert_eq!(trace.steps[0].description, "Computing LPS Array");
        assert_eq!(trace.steps[1].description, "Starting Search");
        assert_eq!(trace.len(), 2);
    }

    #[test]
    fn test_mismatch_jump_is_traced() {
        // After matching "AA", 'B' mismatches and j falls back via the table.
        let trace = search("AAB", "AAA");
        let jump = trace
            .steps
            .iter()
            .find(|s| s.description.starts_with("Mismatch"))
            .expect("jump step");
        assert_eq!(jump.description, "Mismatch at 2. Jumping 'j' to 1 using LPS.");
        assert_eq!(jump.variables["j"], "1");
    }

    #[test]
    fn test_empty_inputs_yield_empty_trace() {
        assert!(search("", "abc").is_empty());
        assert!(search("abc", "").is_empty());
        assert_eq!(search("", "").algorithm_name, ALGORITHM_NAME);
    }

    #[test]
    fn test_unicode_indices_are_char_positions() {
        let trace = search("café Rust", "Rust");
        assert_eq!(match_indices(&trace), vec![5]);
    }

    proptest! {
        #[test]
        fn prop_reports_exactly_the_naive_matches(
            text in "[ab]{0,40}",
            pattern in "[ab]{1,4}",
        ) {
            let trace = search(&text, &pattern);
            let text_chars: Vec<char> = text.chars().collect();
            let pat: Vec<char> = pattern.chars().collect();

            let expected: Vec<usize> = if text_chars.len() < pat.len() {
                vec![]
            } else {
                (0..=text_chars.len() - pat.len())
                    .filter(|&k| text_chars[k..k + pat.len()] == pat[..])
                    .collect()
            };
            prop_assert_eq!(match_indices(&trace), expected);
        }
    }
}
