use super::{sort_ranked, ScoredDoc};
use crate::config::TermPolicy;
use crate::corpus::{DocId, DocumentStore};
use crate::index::PostingMap;
use crate::store::BucketMap;
use crate::tokenizer::Tokenizer;
use std::collections::BTreeMap;

/// Integer stand-in for `log(N / df)`: floor-divide `N` by `1 + df` until it
/// drops to 1 or below and count the steps. Not a logarithm, and not meant to be.
pub fn approx_log_idf(num_docs: u64, doc_freq: u64) -> u32 {
    let divisor = 1 + doc_freq.max(1);
    let mut remaining = num_docs;
    let mut idf = 0;
    while remaining > 1 {
        idf += 1;
        remaining /= divisor;
    }
    idf
}

/// Collapse a posting list into `(doc, occurrences)` pairs. Posting lists
/// are filled in document order, so repeats of one document are adjacent.
pub fn occurrence_counts(postings: &[DocId]) -> Vec<(DocId, u32)> {
    let mut out: Vec<(DocId, u32)> = Vec::new();
    for &doc_id in postings {
        if let Some((last, n)) = out.last_mut() {
            if *last == doc_id {
                *n += 1;
                continue;
            }
        }
        out.push((doc_id, 1));
    }
    out
}

/// Per-document term weights, `tf * idf`, where `tf` is the term's share
/// of the document's tokens. Both the full-text posting map and the weight
/// table are [`BucketMap`]s sized by the engine's bucket count.
#[derive(Debug, PartialEq)]
pub struct TfIdfTable {
    postings: PostingMap,
    weights: BucketMap<DocId, (String, f64)>,
    num_docs: usize,
}

impl TfIdfTable {
    pub fn build(store: &DocumentStore, tokenizer: &Tokenizer, policy: TermPolicy, buckets: usize) -> Self {
        let mut postings = PostingMap::with_buckets(buckets);
        let mut doc_lengths = vec![0usize; store.len()];
        for doc in store.iter() {
            for term in tokenizer.terms(&doc.full_text(), policy) {
                postings.add(term, doc.id);
                doc_lengths[doc.id as usize] += 1;
            }
        }

        let num_docs = store.len();
        let mut weights = BucketMap::with_buckets(buckets);
        for (term, docs) in postings.iter() {
            let counts = occurrence_counts(docs);
            let idf = approx_log_idf(num_docs as u64, counts.len() as u64) as f64;
            for (doc_id, n) in counts {
                let tf = n as f64 / doc_lengths[doc_id as usize] as f64;
                weights.add(doc_id, (term.clone(), tf * idf));
            }
        }
        tracing::info!(
            num_docs,
            vocabulary = postings.len(),
            longest_chain = postings.longest_chain(),
            "tf-idf table computed"
        );
        Self { postings, weights, num_docs }
    }

    pub fn num_docs(&self) -> usize { self.num_docs }

    /// Full-text posting map the weights were derived from.
    pub fn postings(&self) -> &PostingMap { &self.postings }

    /// Number of distinct documents containing `term`.
    pub fn doc_frequency(&self, term: &str) -> u32 {
        occurrence_counts(self.postings.get(term)).len() as u32
    }

    pub fn idf(&self, term: &str) -> u32 {
        approx_log_idf(self.num_docs as u64, self.doc_frequency(term) as u64)
    }

    pub fn weight(&self, doc_id: DocId, term: &str) -> Option<f64> {
        self.weights.get(&doc_id).iter().find(|(t, _)| t == term).map(|(_, w)| *w)
    }

    /// `(term, weight)` pairs of one document; empty for unknown ids.
    pub fn doc_weights(&self, doc_id: DocId) -> &[(String, f64)] {
        self.weights.get(&doc_id)
    }

    /// Sum the weights of query terms present in each document. Documents
    /// sharing no term with the query are left out.
    pub fn rank(&self, query_terms: &[String]) -> Vec<ScoredDoc> {
        let mut scores: BTreeMap<DocId, f64> = BTreeMap::new();
        for term in query_terms {
            for (doc_id, _) in occurrence_counts(self.postings.get(term.as_str())) {
                if let Some(w) = self.weight(doc_id, term) {
                    *scores.entry(doc_id).or_insert(0.0) += w;
                }
            }
        }
        let mut scored: Vec<ScoredDoc> = scores.into_iter().map(|(d, s)| ScoredDoc::new(d, s)).collect();
        sort_ranked(&mut scored);
        scored
    }
}
