//! ATS score — keyword overlap between a document and a list of target keywords.
//!
//! Matching is a case-insensitive substring test. Partial-word hits count
//! ("go" matches inside "Gopher") and duplicate keywords count independently.
//! Both behaviors are kept as-is for compatibility with existing clients.

use serde::{Deserialize, Serialize};

/// Separators used when a job description arrives as plain text.
const KEYWORD_SEPARATORS: &[char] = &[',', ';', '|', '/'];

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Score plus the keywords that did and did not appear in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatch {
    #[serde(rename = "ats_score")]
    pub score: u32, // 0 – 100
    #[serde(rename = "matched_keywords")]
    pub matched: Vec<String>,
    #[serde(rename = "missing_keywords")]
    pub missing: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Percentage of `keywords` found in `document`, rounded down and capped at 100.
/// An empty keyword list scores 0.
pub fn calculate_ats_score<K: AsRef<str>>(document: &str, keywords: &[K]) -> u32 {
    if keywords.is_empty() {
        return 0;
    }

    let document = document.to_lowercase();
    let count = keywords
        .iter()
        .filter(|kw| document.contains(&kw.as_ref().to_lowercase()))
        .count();

    ratio_score(count, keywords.len())
}

/// Same scoring as [`calculate_ats_score`], reporting matched and missing keywords
/// in input order.
pub fn match_keywords<K: AsRef<str>>(document: &str, keywords: &[K]) -> KeywordMatch {
    let document_lower = document.to_lowercase();

    let (matched, missing): (Vec<String>, Vec<String>) = keywords
        .iter()
        .map(|kw| kw.as_ref().to_string())
        .partition(|kw| document_lower.contains(&kw.to_lowercase()));

    KeywordMatch {
        score: ratio_score(matched.len(), keywords.len()),
        matched,
        missing,
    }
}

fn ratio_score(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    // Integer floor division; identical to floor(count / total * 100).
    let score = (count * 100) / total;
    score.min(100) as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Keyword extraction
// ────────────────────────────────────────────────────────────────────────────

/// Splits free-text job description into keyword terms.
///
/// Terms are separated by whitespace or `, ; | /`. Surrounding punctuation is
/// trimmed except `+` and `#`, so "C++" and "C#" survive. Order and duplicates
/// are preserved.
pub fn extract_keywords(text: &str) -> Vec<String> {
    text.split(|c: char| c.is_whitespace() || KEYWORD_SEPARATORS.contains(&c))
        .map(|term| term.trim_matches(|c: char| !c.is_alphanumeric() && c != '+' && c != '#'))
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
