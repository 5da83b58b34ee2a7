use anyhow::{Context, Result};
use docsearch_core::{DocId, DocumentStore, Engine, QueryResult, Scope, Strategy};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use walkdir::WalkDir;

/// Split a document file: the first line is the title, the rest is the content.
pub fn parse_document(raw: &str) -> (String, String) {
    match raw.split_once('\n') {
        Some((title, rest)) => (title.trim().to_string(), rest.trim().to_string()),
        None => (raw.trim().to_string(), String::new()),
    }
}

/// Regular files under `dir`, sorted by path so document ids are stable.
pub fn corpus_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        anyhow::bail!("{} is not a directory", dir.display());
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walking {}", dir.display()))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Read every file under `dir` into a document store. Files that are not
/// UTF-8 text are skipped with a warning.
pub fn load_corpus_dir<P: AsRef<Path>>(dir: P) -> Result<DocumentStore> {
    let mut records = Vec::new();
    for path in corpus_files(dir)? {
        match fs::read_to_string(&path) {
            Ok(raw) => records.push(parse_document(&raw)),
            Err(err) => tracing::warn!(path = %path.display(), %err, "skipping unreadable document"),
        }
    }
    Ok(DocumentStore::load(records))
}

/// Scope to query with. A scope passed to a model that does not read one
/// is ignored with a warning.
pub fn resolve_scope(strategy: Strategy, requested: Option<Scope>) -> Scope {
    match requested {
        Some(scope) if !strategy.uses_scope() => {
            tracing::warn!(?strategy, ?scope, "model searches whole documents, ignoring --scope");
            Scope::default()
        }
        Some(scope) => scope,
        None => Scope::default(),
    }
}

#[derive(Debug, Serialize)]
pub struct Hit {
    pub rank: usize,
    pub doc_id: DocId,
    pub title: String,
    pub preview: String,
    pub score: Option<f64>,
}

/// Attach titles and previews to the first `limit` results.
pub fn hits(engine: &Engine, result: &QueryResult, limit: usize, preview_chars: usize) -> Vec<Hit> {
    result
        .doc_ids()
        .into_iter()
        .take(limit)
        .enumerate()
        .filter_map(|(i, doc_id)| {
            let doc = engine.document(doc_id)?;
            Some(Hit {
                rank: i + 1,
                doc_id,
                title: doc.title.clone(),
                preview: doc.preview(preview_chars).to_string(),
                score: result.score_of(doc_id),
            })
        })
        .collect()
}

pub fn render_text(hits: &[Hit], total: usize, took: Duration) -> String {
    let rule = "=".repeat(50);
    let mut out = format!(
        "{rule}\nSearch results ({total} total, query time {:.2} seconds)\n{rule}\n",
        took.as_secs_f64()
    );
    if hits.is_empty() {
        out.push_str("No matching documents found.\n");
    }
    for hit in hits {
        out.push_str(&format!("\nResult {} (doc {})\nTitle: {}\n", hit.rank, hit.doc_id, hit.title));
        if !hit.preview.is_empty() {
            out.push_str(&format!("Preview: {}...\n", hit.preview));
        }
        if let Some(score) = hit.score {
            out.push_str(&format!("Score: {score:.3}\n"));
        }
    }
    out.push_str(&rule);
    out
}
