use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default bucket count for every [`crate::store::BucketMap`] an engine builds.
pub const DEFAULT_BUCKETS: usize = 100;

/// How raw text is cut into words before any normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitMode {
    /// Split on whitespace only; punctuation stays attached ("animals.").
    Whitespace,
    /// Split on runs of non-alphanumeric characters.
    NonAlphanumeric,
}

impl Default for SplitMode {
    fn default() -> Self { SplitMode::NonAlphanumeric }
}

/// Which canonicalization step maps inflected forms to one term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizerKind {
    Identity,
    /// English Porter2 stemmer.
    Stem,
}

impl Default for NormalizerKind {
    fn default() -> Self { NormalizerKind::Identity }
}

/// Filters applied to a token stream after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TermPolicy {
    pub remove_stopwords: bool,
    /// Keep only tokens that look like nouns, see [`crate::tokenizer::looks_like_noun`].
    pub noun_filter: bool,
}

impl TermPolicy {
    /// Every term except stop-words. Used for titles and queries.
    pub const fn every_term() -> Self {
        Self { remove_stopwords: true, noun_filter: false }
    }

    pub const fn nouns_only() -> Self {
        Self { remove_stopwords: true, noun_filter: true }
    }

    pub const fn raw() -> Self {
        Self { remove_stopwords: false, noun_filter: false }
    }
}

impl Default for TermPolicy {
    fn default() -> Self { Self::every_term() }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub split: SplitMode,
    pub normalizer: NormalizerKind,
    /// Explicit stop-word list. `None` selects the built-in English list.
    pub stopwords: Option<Vec<String>>,
    pub title: TermPolicy,
    pub content: TermPolicy,
    pub buckets: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            split: SplitMode::default(),
            normalizer: NormalizerKind::default(),
            stopwords: None,
            title: TermPolicy::every_term(),
            content: TermPolicy::nouns_only(),
            buckets: DEFAULT_BUCKETS,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: EngineConfig = serde_json::from_str(s)?;
        Ok(cfg.sanitized())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    /// A zero bucket count would make every hash lookup divide by zero.
    fn sanitized(mut self) -> Self {
        if self.buckets == 0 {
            tracing::warn!("bucket count 0 in config, using {DEFAULT_BUCKETS}");
            self.buckets = DEFAULT_BUCKETS;
        }
        self
    }
}
