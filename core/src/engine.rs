use crate::config::{EngineConfig, TermPolicy};
use crate::corpus::{DocId, Document, DocumentStore};
use crate::graph::TermGraph;
use crate::index::{InvertedIndex, Scope};
use crate::rank::bim::BinaryMatrix;
use crate::rank::tfidf::TfIdfTable;
use crate::rank::{overlap, proximal, tf, QueryResult, Strategy};
use crate::tokenizer::Tokenizer;

/// Queries keep every term that is not a stop-word; the noun filter never applies.
pub const QUERY_POLICY: TermPolicy = TermPolicy::every_term();

/// Everything derived from a document store. Holds doc ids only, never
/// references into the store, so it can be rebuilt on its own.
#[derive(Debug)]
pub struct Indexes {
    pub inverted: InvertedIndex,
    pub graph: TermGraph,
    pub tfidf: TfIdfTable,
    pub bim: BinaryMatrix,
}

/// Build all derived structures from the store as it is now.
pub fn build_indexes(store: &DocumentStore, tokenizer: &Tokenizer, cfg: &EngineConfig) -> Indexes {
    let inverted = InvertedIndex::build(store, tokenizer, cfg.title, cfg.content, cfg.buckets);
    let graph = TermGraph::build(store, tokenizer, QUERY_POLICY);
    let tfidf = TfIdfTable::build(store, tokenizer, QUERY_POLICY, cfg.buckets);
    let bim = BinaryMatrix::build(store, tokenizer, QUERY_POLICY);
    Indexes { inverted, graph, tfidf, bim }
}

/// A loaded corpus with its indexes, ready for read-only queries.
pub struct Engine {
    config: EngineConfig,
    tokenizer: Tokenizer,
    store: DocumentStore,
    indexes: Indexes,
}

impl Engine {
    pub fn new(store: DocumentStore, config: EngineConfig) -> Self {
        let tokenizer = Tokenizer::from_config(&config);
        let indexes = build_indexes(&store, &tokenizer, &config);
        Self { config, tokenizer, store, indexes }
    }

    /// Load `(title, content)` records and index them.
    pub fn from_records<I, T, C>(records: I, config: EngineConfig) -> Self
    where
        I: IntoIterator<Item = (T, C)>,
        T: Into<String>,
        C: Into<String>,
    {
        Self::new(DocumentStore::load(records), config)
    }

    pub fn config(&self) -> &EngineConfig { &self.config }

    pub fn tokenizer(&self) -> &Tokenizer { &self.tokenizer }

    pub fn store(&self) -> &DocumentStore { &self.store }

    pub fn indexes(&self) -> &Indexes { &self.indexes }

    pub fn document(&self, id: DocId) -> Option<&Document> { self.store.get(id) }

    /// Run `text` through `strategy`. `scope` matters only for strategies that
    /// read a scoped index. Empty or stop-word-only queries give an empty result.
    pub fn query(&self, strategy: Strategy, text: &str, scope: Scope) -> QueryResult {
        let tokens = self.tokenizer.tokens(text, QUERY_POLICY);
        let terms: Vec<String> = tokens.iter().map(|t| t.term.clone()).collect();
        let result = match strategy {
            Strategy::TermFrequency => QueryResult::Ranked(tf::rank(&terms, self.indexes.inverted.scope(scope))),
            Strategy::TfIdf => QueryResult::Ranked(self.indexes.tfidf.rank(&terms)),
            Strategy::Bim => QueryResult::Ranked(self.indexes.bim.rank(&terms)),
            Strategy::ProximalNodes => {
                let needles: Vec<String> = tokens.into_iter().map(|t| t.surface).collect();
                QueryResult::Matches(proximal::retrieve(&self.indexes.graph, &self.store, &terms, &needles))
            }
            Strategy::NonOverlapped => {
                QueryResult::Listed(overlap::retrieve(&terms, self.indexes.inverted.scope(scope)))
            }
        };
        tracing::debug!(?strategy, ?scope, terms = terms.len(), hits = result.len(), "query answered");
        result
    }
}
