use crate::corpus::{DocId, DocumentStore};
use crate::graph::{Node, TermGraph};
use rustc_hash::FxHashSet;
use std::collections::{BTreeSet, VecDeque};
use unicode_normalization::UnicodeNormalization;

/// Walk the term graph breadth-first from the seed terms. A document node
/// that is reached counts only if its NFKC-folded, lower-cased text contains
/// one of `needles` as a substring.
pub fn retrieve(
    graph: &TermGraph,
    store: &DocumentStore,
    seeds: &[String],
    needles: &[String],
) -> BTreeSet<DocId> {
    let mut visited: FxHashSet<Node> = FxHashSet::default();
    let mut checked: FxHashSet<DocId> = FxHashSet::default();
    let mut found = BTreeSet::new();
    let mut queue: VecDeque<Node> = seeds.iter().map(|t| Node::Term(t.clone())).collect();

    while let Some(node) = queue.pop_front() {
        if !visited.insert(node.clone()) {
            continue;
        }
        for neighbor in graph.neighbors(&node) {
            match neighbor {
                Node::Doc(doc_id) => {
                    if checked.insert(*doc_id) && contains_any(store, *doc_id, needles) {
                        found.insert(*doc_id);
                    }
                }
                Node::Term(_) => {
                    if !visited.contains(neighbor) {
                        queue.push_back(neighbor.clone());
                    }
                }
            }
        }
    }
    tracing::debug!(visited = visited.len(), matched = found.len(), "proximal traversal finished");
    found
}

fn contains_any(store: &DocumentStore, doc_id: DocId, needles: &[String]) -> bool {
    let Some(doc) = store.get(doc_id) else { return false };
    // Fold the same way the tokenizer did, so needles and text agree.
    let text = doc.full_text().nfkc().collect::<String>().to_lowercase();
    needles.iter().any(|n| !n.is_empty() && text.contains(n.as_str()))
}
