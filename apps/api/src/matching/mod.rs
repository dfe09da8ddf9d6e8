// Keyword matching between a resume and a job description.
// Pure functions only; no LLM calls, no I/O.

pub mod ats_score;

pub use ats_score::{extract_keywords, match_keywords, KeywordMatch};
