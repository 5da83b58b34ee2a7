use docsearch_core::config::{EngineConfig, TermPolicy};
use docsearch_core::rank::{QueryResult, ScoredDoc, Strategy};
use docsearch_core::{Engine, Scope};
use std::collections::BTreeSet;

fn pets() -> Engine {
    let cfg = EngineConfig {
        stopwords: Some(vec!["are".into()]),
        content: TermPolicy::every_term(),
        ..EngineConfig::default()
    };
    Engine::from_records(
        vec![("Cats", "Cats are small animals."), ("Dogs", "Dogs are loyal animals.")],
        cfg,
    )
}

#[test]
fn term_frequency_ties_break_by_id() {
    let result = pets().query(Strategy::TermFrequency, "animals", Scope::Content);
    assert_eq!(result, QueryResult::Ranked(vec![ScoredDoc::new(0, 1.0), ScoredDoc::new(1, 1.0)]));
}

#[test]
fn bim_ranks_all_documents() {
    let result = pets().query(Strategy::Bim, "cats", Scope::Content);
    let QueryResult::Ranked(ranked) = result else { panic!("bim must rank") };
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].doc_id, 0);
    assert!(ranked[0].score > ranked[1].score);
    assert_eq!(ranked[1].score, 0.0);
}

#[test]
fn proximal_nodes_returns_both_documents() {
    let result = pets().query(Strategy::ProximalNodes, "cats dogs", Scope::Content);
    assert_eq!(result, QueryResult::Matches(BTreeSet::from([0, 1])));
}

#[test]
fn stopword_queries_are_empty_everywhere() {
    let engine = Engine::from_records(
        vec![("The Book", "It is about the sea and the sky"), ("Notes", "There are none")],
        EngineConfig::default(),
    );
    for strategy in Strategy::ALL {
        for scope in [Scope::Title, Scope::Content] {
            assert!(engine.query(strategy, "the and are", scope).is_empty(), "{strategy:?}/{scope:?}");
            assert!(engine.query(strategy, "", scope).is_empty(), "{strategy:?}/{scope:?}");
        }
    }
}

#[test]
fn posting_multiplicity_equals_frequency() {
    let engine = Engine::from_records(
        vec![
            ("Sea", "wave wave tide wave harbor"),
            ("Land", "field harbor field"),
            ("Sky", ""),
        ],
        EngineConfig { content: TermPolicy::every_term(), ..EngineConfig::default() },
    );
    let content = &engine.indexes().inverted.content;
    for doc in engine.store().iter() {
        let terms = engine.tokenizer().terms(&doc.content, TermPolicy::every_term());
        for term in &terms {
            let expected = terms.iter().filter(|t| *t == term).count();
            let got = content.get(term.as_str()).iter().filter(|&&d| d == doc.id).count();
            assert_eq!(got, expected, "term {term} in doc {}", doc.id);
        }
    }
}

#[test]
fn tfidf_prefers_rarer_terms() {
    let engine = Engine::from_records(
        vec![("", "rust rust memory"), ("", "memory safety"), ("", "memory leaks")],
        EngineConfig::default(),
    );
    let QueryResult::Ranked(ranked) = engine.query(Strategy::TfIdf, "rust memory", Scope::Content) else {
        panic!("tf-idf must rank")
    };
    assert_eq!(ranked.first().map(|s| s.doc_id), Some(0));
    assert!(engine.query(Strategy::TfIdf, "unrelated", Scope::Content).is_empty());
}

#[test]
fn non_overlapped_lists_each_document_once() {
    let engine = Engine::from_records(
        vec![("", "alpha beta"), ("", "beta"), ("", "gamma alpha")],
        EngineConfig { content: TermPolicy::every_term(), ..EngineConfig::default() },
    );
    let result = engine.query(Strategy::NonOverlapped, "beta alpha", Scope::Content);
    assert_eq!(result, QueryResult::Listed(vec![0, 1, 2]));
}

#[test]
fn title_and_content_policies_differ_by_default() {
    let engine = Engine::from_records(vec![("small animals", "small movement")], EngineConfig::default());
    assert!(!engine.query(Strategy::TermFrequency, "small", Scope::Title).is_empty());
    assert!(engine.query(Strategy::TermFrequency, "small", Scope::Content).is_empty());
    assert!(!engine.query(Strategy::TermFrequency, "movement", Scope::Content).is_empty());
}

#[test]
fn proximal_nodes_match_compatibility_forms() {
    let engine = Engine::from_records(vec![("Office", "the \u{fb01}le cabinet")], EngineConfig::default());
    let result = engine.query(Strategy::ProximalNodes, "file", Scope::Content);
    assert_eq!(result, QueryResult::Matches(BTreeSet::from([0])));
}
