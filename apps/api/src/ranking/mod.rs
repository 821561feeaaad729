// Candidate ranking: heap ranking, merge/quick sort, and greedy shortlisting.

pub mod handlers;
