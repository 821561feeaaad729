// Skill catalogue structures: trie autocomplete, co-occurrence graph, and the
// chained hash index from skill to candidates.

pub mod handlers;
