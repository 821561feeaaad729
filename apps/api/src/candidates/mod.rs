// Candidate records: listing, creation with skill extraction, resume keyword
// search (KMP) and AVL construction.

pub mod extraction;
pub mod handlers;
