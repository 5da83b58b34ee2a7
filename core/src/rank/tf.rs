use super::{sort_ranked, ScoredDoc};
use crate::corpus::DocId;
use crate::index::PostingMap;
use std::collections::BTreeMap;

/// Count posting-list entries per document for each query term. A document
/// listed three times under a term scores three for it. Documents that
/// never appear are left out.
pub fn rank(query_terms: &[String], postings: &PostingMap) -> Vec<ScoredDoc> {
    let mut counts: BTreeMap<DocId, u32> = BTreeMap::new();
    for term in query_terms {
        for &doc_id in postings.get(term.as_str()) {
            *counts.entry(doc_id).or_insert(0) += 1;
        }
    }
    let mut scored: Vec<ScoredDoc> = counts
        .into_iter()
        .map(|(doc_id, n)| ScoredDoc::new(doc_id, n as f64))
        .collect();
    sort_ranked(&mut scored);
    scored
}
