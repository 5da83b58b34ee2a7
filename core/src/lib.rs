//! In-memory document retrieval: a chained-bucket inverted index plus
//! term-frequency, TF-IDF, Binary Independence and proximal-nodes retrieval.

pub mod config;
pub mod corpus;
pub mod engine;
pub mod graph;
pub mod index;
pub mod rank;
pub mod store;
pub mod tokenizer;

pub use config::{EngineConfig, NormalizerKind, SplitMode, TermPolicy};
pub use corpus::{DocId, Document, DocumentStore};
pub use engine::{build_indexes, Engine, Indexes};
pub use index::{InvertedIndex, Scope};
pub use rank::{QueryResult, ScoredDoc, Strategy};
pub use store::BucketMap;
pub use tokenizer::Tokenizer;
