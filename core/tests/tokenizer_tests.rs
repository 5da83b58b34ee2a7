use docsearch_core::config::{EngineConfig, NormalizerKind, SplitMode, TermPolicy};
use docsearch_core::tokenizer::Tokenizer;

fn stemming() -> Tokenizer {
    Tokenizer::from_config(&EngineConfig { normalizer: NormalizerKind::Stem, ..EngineConfig::default() })
}

#[test]
fn it_normalizes_and_stems() {
    let words = stemming().terms("Running Runners RUN! The \u{fb01}le menu.", TermPolicy::every_term());
    assert!(words.contains(&"run".to_string()));
    // NFKC folds the ligature before splitting
    assert!(words.contains(&"file".to_string()));
}

#[test]
fn it_filters_stopwords() {
    let words = stemming().terms("The quick brown fox and the lazy dog", TermPolicy::every_term());
    assert!(!words.contains(&"the".to_string()));
    assert!(!words.contains(&"and".to_string()));
    let kept = stemming().terms("The quick brown fox and the lazy dog", TermPolicy::raw());
    assert!(kept.contains(&"the".to_string()));
}

#[test]
fn custom_stopwords_replace_the_builtin_list() {
    let t = Tokenizer::from_config(&EngineConfig { stopwords: Some(vec!["ARE".into()]), ..EngineConfig::default() });
    assert_eq!(t.terms("Cats are the best", TermPolicy::every_term()), vec!["cats", "the", "best"]);
}

#[test]
fn whitespace_split_keeps_punctuation() {
    let t = Tokenizer::from_config(&EngineConfig { split: SplitMode::Whitespace, ..EngineConfig::default() });
    assert_eq!(t.terms("Hello, world!", TermPolicy::raw()), vec!["hello,", "world!"]);
}

#[test]
fn noun_heuristic_keeps_capitalized_and_suffixed_words() {
    let t = Tokenizer::default();
    let nouns = t.terms("Paris has great architecture and kindness but runs quickly", TermPolicy::nouns_only());
    assert_eq!(nouns, vec!["paris", "architecture", "kindness"]);
}
