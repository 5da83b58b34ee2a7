//! Interchangeable retrieval strategies over the structures built at load time.
//!
//! Ranked strategies return documents by descending score, ties by ascending
//! id. None of them mutate what they read.

pub mod bim;
pub mod overlap;
pub mod proximal;
pub mod tf;
pub mod tfidf;

use crate::corpus::DocId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Posting-list occurrence counts over one scope.
    TermFrequency,
    TfIdf,
    /// Binary Independence Model scored with the Dice coefficient.
    Bim,
    /// Breadth-first traversal of the term graph from the query terms.
    ProximalNodes,
    /// Deduplicated union of the query terms' posting lists.
    NonOverlapped,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::TermFrequency,
        Strategy::TfIdf,
        Strategy::Bim,
        Strategy::ProximalNodes,
        Strategy::NonOverlapped,
    ];

    /// Whether the strategy reads one of the scoped indexes.
    pub fn uses_scope(self) -> bool {
        matches!(self, Strategy::TermFrequency | Strategy::NonOverlapped)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredDoc {
    pub doc_id: DocId,
    pub score: f64,
}

impl ScoredDoc {
    pub fn new(doc_id: DocId, score: f64) -> Self { Self { doc_id, score } }
}

/// Result shape depends on the strategy: only some of them score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "docs", rename_all = "snake_case")]
pub enum QueryResult {
    Ranked(Vec<ScoredDoc>),
    /// Unordered membership, iterated in id order.
    Matches(BTreeSet<DocId>),
    /// Ordered by first appearance, no scores.
    Listed(Vec<DocId>),
}

impl QueryResult {
    pub fn len(&self) -> usize {
        match self {
            QueryResult::Ranked(v) => v.len(),
            QueryResult::Matches(s) => s.len(),
            QueryResult::Listed(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn doc_ids(&self) -> Vec<DocId> {
        match self {
            QueryResult::Ranked(v) => v.iter().map(|s| s.doc_id).collect(),
            QueryResult::Matches(s) => s.iter().copied().collect(),
            QueryResult::Listed(v) => v.clone(),
        }
    }

    pub fn score_of(&self, doc_id: DocId) -> Option<f64> {
        match self {
            QueryResult::Ranked(v) => v.iter().find(|s| s.doc_id == doc_id).map(|s| s.score),
            _ => None,
        }
    }
}

/// Score descending, then id ascending.
pub fn sort_ranked(scored: &mut [ScoredDoc]) {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.doc_id.cmp(&b.doc_id)));
}
