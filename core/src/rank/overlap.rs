use crate::corpus::DocId;
use crate::index::PostingMap;
use rustc_hash::FxHashSet;

/// Union of the query terms' posting lists without duplicates, in order of
/// first appearance.
pub fn retrieve(query_terms: &[String], postings: &PostingMap) -> Vec<DocId> {
    let mut seen = FxHashSet::default();
    let mut out = Vec::new();
    for term in query_terms {
        for &doc_id in postings.get(term.as_str()) {
            if seen.insert(doc_id) {
                out.push(doc_id);
            }
        }
    }
    out
}
