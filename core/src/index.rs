use crate::config::TermPolicy;
use crate::corpus::{DocId, DocumentStore};
use crate::store::BucketMap;
use crate::tokenizer::Tokenizer;
use serde::{Deserialize, Serialize};

/// Term -> posting list. A document id repeats once per occurrence.
pub type PostingMap = BucketMap<String, DocId>;

/// Which half of a document an index covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    Title,
    Content,
}

impl Default for Scope {
    fn default() -> Self { Scope::Content }
}

/// Parallel title and content indexes over one corpus.
#[derive(Debug)]
pub struct InvertedIndex {
    pub title: PostingMap,
    pub content: PostingMap,
}

impl InvertedIndex {
    /// Index every document in id order. Terms are added in source order, so
    /// posting lists are reproducible for the same corpus and settings.
    pub fn build(
        store: &DocumentStore,
        tokenizer: &Tokenizer,
        title_policy: TermPolicy,
        content_policy: TermPolicy,
        buckets: usize,
    ) -> Self {
        let mut title = PostingMap::with_buckets(buckets);
        let mut content = PostingMap::with_buckets(buckets);
        for doc in store.iter() {
            for term in tokenizer.terms(&doc.title, title_policy) {
                title.add(term, doc.id);
            }
            for term in tokenizer.terms(&doc.content, content_policy) {
                content.add(term, doc.id);
            }
        }
        tracing::info!(
            num_docs = store.len(),
            title_terms = title.len(),
            content_terms = content.len(),
            longest_chain = content.longest_chain(),
            "inverted index built"
        );
        Self { title, content }
    }

    pub fn scope(&self, scope: Scope) -> &PostingMap {
        match scope {
            Scope::Title => &self.title,
            Scope::Content => &self.content,
        }
    }

    pub fn postings(&self, scope: Scope, term: &str) -> &[DocId] {
        self.scope(scope).get(term)
    }
}
