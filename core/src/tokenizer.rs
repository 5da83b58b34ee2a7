use crate::config::{EngineConfig, NormalizerKind, SplitMode, TermPolicy};
use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"[\p{L}\p{N}]+").expect("valid regex");
    static ref ENGLISH_STOPWORDS: Vec<&'static str> = vec![
        "a","about","above","after","again","against","all","am","an","and","any","are","aren't","as","at",
        "be","because","been","before","being","below","between","both","but","by",
        "can","can't","cannot","could","couldn't",
        "did","didn't","do","does","doesn't","doing","don't","down","during",
        "each","few","for","from","further",
        "had","hadn't","has","hasn't","have","haven't","having","he","he'd","he'll","he's","her","here","here's","hers","herself","him","himself","his","how","how's",
        "i","i'd","i'll","i'm","i've","if","in","into","is","isn't","it","it's","its","itself",
        "let's","me","more","most","mustn't","my","myself",
        "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
        "same","she","she'd","she'll","she's","should","shouldn't","so","some","such",
        "than","that","that's","the","their","theirs","them","themselves","then","there","there's","these","they","they'd","they'll","they're","they've","this","those","through","to","too",
        "under","until","up","very",
        "was","wasn't","we","we'd","we'll","we're","we've","were","weren't","what","what's","when","when's","where","where's","which","while","who","who's","whom","why","why's","with","won't","would","wouldn't",
        "you","you'd","you'll","you're","you've","your","yours","yourself","yourselves"
    ];
}

/// Suffixes that mark a lower-case word as a probable noun.
pub const NOUN_SUFFIXES: &[&str] = &[
    "ion", "ment", "ness", "ity", "ty", "ance", "ence", "ure", "ship", "hood", "er", "or", "ist", "al",
    "age", "cy", "dom",
];

/// The built-in English stop-word list.
pub fn english_stopwords() -> impl Iterator<Item = &'static str> {
    ENGLISH_STOPWORDS.iter().copied()
}

/// Heuristic noun test: the word was capitalized in the source, or its
/// normalized term ends with one of [`NOUN_SUFFIXES`].
///
/// This is not part-of-speech tagging. "Running" passes because it is
/// capitalized, "cats" fails because `s` is not a listed suffix, and "water"
/// passes on `er`.
pub fn looks_like_noun(surface: &str, term: &str) -> bool {
    let capitalized = surface.chars().next().map_or(false, char::is_uppercase);
    capitalized || NOUN_SUFFIXES.iter().any(|s| term.ends_with(s))
}

/// Maps an inflected, lower-cased word to its canonical term.
pub trait Normalizer: Send + Sync {
    fn normalize(&self, word: &str) -> String;
}

/// Leaves words untouched. Used when no linguistic resource is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct Identity;

impl Normalizer for Identity {
    fn normalize(&self, word: &str) -> String { word.to_string() }
}

pub struct EnglishStemmer(Stemmer);

impl EnglishStemmer {
    pub fn new() -> Self { Self(Stemmer::create(Algorithm::English)) }
}

impl Default for EnglishStemmer {
    fn default() -> Self { Self::new() }
}

impl Normalizer for EnglishStemmer {
    fn normalize(&self, word: &str) -> String { self.0.stem(word).into_owned() }
}

/// One word that survived the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lower-cased source form, before normalization.
    pub surface: String,
    /// Normalized index term.
    pub term: String,
}

/// Turns text into terms: split, lower-case, normalize, drop stop-words,
/// optionally keep only noun-like words. Holds its own stop-word set and
/// normalizer so two engines can run with different settings.
pub struct Tokenizer {
    split: SplitMode,
    normalizer: Box<dyn Normalizer>,
    stopwords: HashSet<String>,
}

impl Tokenizer {
    pub fn new(split: SplitMode, normalizer: Box<dyn Normalizer>, stopwords: HashSet<String>) -> Self {
        Self { split, normalizer, stopwords }
    }

    pub fn from_config(cfg: &EngineConfig) -> Self {
        let normalizer: Box<dyn Normalizer> = match cfg.normalizer {
            NormalizerKind::Identity => Box::new(Identity),
            NormalizerKind::Stem => Box::new(EnglishStemmer::new()),
        };
        let stopwords = match &cfg.stopwords {
            Some(words) => words.iter().map(|w| w.to_lowercase()).collect(),
            None => english_stopwords().map(str::to_string).collect(),
        };
        Self::new(cfg.split, normalizer, stopwords)
    }

    pub fn split_mode(&self) -> SplitMode { self.split }

    pub fn is_stopword(&self, word: &str) -> bool { self.stopwords.contains(word) }

    /// Tokenize `text` under `policy`, preserving source order.
    pub fn tokens(&self, text: &str, policy: TermPolicy) -> Vec<Token> {
        let normalized = text.nfkc().collect::<String>();
        let mut out = Vec::new();
        for surface in self.split_words(&normalized) {
            // Guard against empty split output; nothing to index there.
            if surface.is_empty() { continue; }
            let lowered = surface.to_lowercase();
            let term = self.normalizer.normalize(&lowered);
            if term.is_empty() { continue; }
            if policy.remove_stopwords && self.is_stopword(&lowered) { continue; }
            if policy.noun_filter && !looks_like_noun(surface, &term) { continue; }
            out.push(Token { surface: lowered, term });
        }
        out
    }

    /// Just the normalized terms of [`Tokenizer::tokens`].
    pub fn terms(&self, text: &str, policy: TermPolicy) -> Vec<String> {
        self.tokens(text, policy).into_iter().map(|t| t.term).collect()
    }

    fn split_words<'a>(&self, text: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        match self.split {
            SplitMode::Whitespace => Box::new(text.split_whitespace()),
            SplitMode::NonAlphanumeric => Box::new(WORD_RE.find_iter(text).map(|m| m.as_str())),
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self { Self::from_config(&EngineConfig::default()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(split: SplitMode) -> Tokenizer {
        Tokenizer::new(split, Box::new(Identity), english_stopwords().map(str::to_string).collect())
    }

    #[test]
    fn empty_text_has_no_terms() {
        assert!(tok(SplitMode::Whitespace).terms("", TermPolicy::raw()).is_empty());
        assert!(tok(SplitMode::NonAlphanumeric).terms("  \t ", TermPolicy::raw()).is_empty());
    }

    #[test]
    fn split_mode_changes_punctuation_handling() {
        let text = "Small animals.";
        assert_eq!(tok(SplitMode::Whitespace).terms(text, TermPolicy::raw()), vec!["small", "animals."]);
        assert_eq!(tok(SplitMode::NonAlphanumeric).terms(text, TermPolicy::raw()), vec!["small", "animals"]);
    }

    #[test]
    fn noun_filter_uses_source_capitalization() {
        let terms = tok(SplitMode::NonAlphanumeric).terms("Cats like the movement of water and fish", TermPolicy::nouns_only());
        assert_eq!(terms, vec!["cats", "movement", "water"]);
    }

    #[test]
    fn stemming_is_pluggable() {
        let t = Tokenizer::new(SplitMode::NonAlphanumeric, Box::new(EnglishStemmer::new()), HashSet::new());
        let toks = t.tokens("Running", TermPolicy::raw());
        assert_eq!(toks[0].surface, "running");
        assert_eq!(toks[0].term, "run");
    }

    #[test]
    fn noun_suffix_is_checked_after_stemming() {
        let t = Tokenizer::new(SplitMode::NonAlphanumeric, Box::new(EnglishStemmer::new()), HashSet::new());
        // "happiness" stems to "happi", which carries no noun suffix
        assert!(t.tokens("happiness", TermPolicy::nouns_only()).is_empty());
        let kept = t.terms("Happiness", TermPolicy::nouns_only());
        assert_eq!(kept, vec!["happi"]);
        assert_eq!(t.terms("nation", TermPolicy::nouns_only()), vec!["nation"]);
    }

    #[test]
    fn lone_punctuation_is_not_a_noun() {
        assert!(!looks_like_noun("-", "-"));
        assert!(looks_like_noun("Oslo", "oslo"));
    }
}
