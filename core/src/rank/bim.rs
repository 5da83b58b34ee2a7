use super::{sort_ranked, ScoredDoc};
use crate::config::TermPolicy;
use crate::corpus::{DocId, DocumentStore};
use crate::tokenizer::Tokenizer;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// `2|a ∩ b| / (|a| + |b|)` over binary vectors, 0 when both are empty.
pub fn dice(a: &[bool], b: &[bool]) -> f64 {
    let both = a.iter().zip(b).filter(|(x, y)| **x && **y).count();
    let total = a.iter().filter(|x| **x).count() + b.iter().filter(|x| **x).count();
    if total == 0 {
        return 0.0;
    }
    (2 * both) as f64 / total as f64
}

/// Dense document-by-term presence matrix over the sorted corpus vocabulary.
#[derive(Debug, Clone, Default)]
pub struct BinaryMatrix {
    vocabulary: Vec<String>,
    columns: FxHashMap<String, usize>,
    rows: Vec<Vec<bool>>,
}

impl BinaryMatrix {
    pub fn build(store: &DocumentStore, tokenizer: &Tokenizer, policy: TermPolicy) -> Self {
        let doc_terms: Vec<Vec<String>> = store
            .iter()
            .map(|doc| tokenizer.terms(&doc.full_text(), policy))
            .collect();
        let vocabulary: Vec<String> = doc_terms
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let columns: FxHashMap<String, usize> =
            vocabulary.iter().enumerate().map(|(i, t)| (t.clone(), i)).collect();

        let rows = doc_terms
            .iter()
            .map(|terms| {
                let mut row = vec![false; vocabulary.len()];
                for term in terms {
                    if let Some(&col) = columns.get(term) {
                        row[col] = true;
                    }
                }
                row
            })
            .collect();
        tracing::info!(num_docs = store.len(), vocabulary = vocabulary.len(), "binary term matrix built");
        Self { vocabulary, columns, rows }
    }

    pub fn vocabulary(&self) -> &[String] { &self.vocabulary }

    pub fn row(&self, doc_id: DocId) -> Option<&[bool]> {
        self.rows.get(doc_id as usize).map(Vec::as_slice)
    }

    /// Query terms outside the vocabulary have no column and are dropped.
    pub fn query_vector(&self, query_terms: &[String]) -> Vec<bool> {
        let mut v = vec![false; self.vocabulary.len()];
        for term in query_terms {
            if let Some(&col) = self.columns.get(term) {
                v[col] = true;
            }
        }
        v
    }

    /// Score every document, including those with similarity 0. A query
    /// with no terms at all yields nothing.
    pub fn rank(&self, query_terms: &[String]) -> Vec<ScoredDoc> {
        if query_terms.is_empty() {
            return Vec::new();
        }
        let q = self.query_vector(query_terms);
        let mut scored: Vec<ScoredDoc> = self
            .rows
            .iter()
            .enumerate()
            .map(|(doc_id, row)| ScoredDoc::new(doc_id as DocId, dice(row, &q)))
            .collect();
        sort_ranked(&mut scored);
        scored
    }
}
