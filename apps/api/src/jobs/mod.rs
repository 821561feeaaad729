// Job postings and LCS-based candidate matching.

pub mod handlers;
