//! Undirected term/document co-occurrence graph.

use crate::config::TermPolicy;
use crate::corpus::{DocId, DocumentStore};
use crate::tokenizer::Tokenizer;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Node {
    Term(String),
    Doc(DocId),
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Term(t) => f.write_str(t),
            Node::Doc(id) => write!(f, "doc_{id}"),
        }
    }
}

#[derive(Debug, Default)]
pub struct TermGraph {
    adjacency: BTreeMap<Node, BTreeSet<Node>>,
}

impl TermGraph {
    /// Link every term of a document to its document node and to every other
    /// distinct term of the same document.
    pub fn build(store: &DocumentStore, tokenizer: &Tokenizer, policy: TermPolicy) -> Self {
        let mut graph = Self::default();
        for doc in store.iter() {
            let terms: BTreeSet<String> = tokenizer.terms(&doc.full_text(), policy).into_iter().collect();
            let doc_node = Node::Doc(doc.id);
            for term in &terms {
                graph.add_edge(Node::Term(term.clone()), doc_node.clone());
            }
            let terms: Vec<&String> = terms.iter().collect();
            for (i, a) in terms.iter().enumerate() {
                for b in &terms[i + 1..] {
                    graph.add_edge(Node::Term((*a).clone()), Node::Term((*b).clone()));
                }
            }
        }
        tracing::info!(nodes = graph.node_count(), edges = graph.edge_count(), "term graph built");
        graph
    }

    pub fn add_edge(&mut self, a: Node, b: Node) {
        self.adjacency.entry(a.clone()).or_default().insert(b.clone());
        self.adjacency.entry(b).or_default().insert(a);
    }

    /// Neighbors of `node`, empty if the node is unknown.
    pub fn neighbors(&self, node: &Node) -> impl Iterator<Item = &Node> {
        self.adjacency.get(node).into_iter().flatten()
    }

    pub fn contains(&self, node: &Node) -> bool { self.adjacency.contains_key(node) }

    pub fn node_count(&self) -> usize { self.adjacency.len() }

    /// Undirected edges, each counted once.
    pub fn edge_count(&self) -> usize {
        let degree_sum: usize = self.adjacency.values().map(BTreeSet::len).sum();
        let self_loops = self.adjacency.iter().filter(|(n, adj)| adj.contains(*n)).count();
        (degree_sum + self_loops) / 2
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> { self.adjacency.keys() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    fn graph(records: Vec<(&str, &str)>) -> TermGraph {
        let store = DocumentStore::load(records);
        TermGraph::build(&store, &Tokenizer::from_config(&EngineConfig::default()), TermPolicy::every_term())
    }

    #[test]
    fn edges_are_symmetric() {
        let g = graph(vec![("Cats", "Cats are small animals."), ("Dogs", "Dogs are loyal animals.")]);
        for node in g.nodes() {
            for n in g.neighbors(node) {
                assert!(g.neighbors(n).any(|back| back == node), "{node} -> {n} has no reverse edge");
            }
        }
    }

    #[test]
    fn terms_link_pairwise_and_to_doc() {
        let g = graph(vec![("", "alpha beta gamma")]);
        let alpha = Node::Term("alpha".into());
        let linked: Vec<String> = g.neighbors(&alpha).map(|n| n.to_string()).collect();
        assert_eq!(linked, vec!["beta", "gamma", "doc_0"]);
        // three term-term edges plus three term-doc edges
        assert_eq!(g.edge_count(), 6);
    }

    #[test]
    fn unknown_node_has_no_neighbors() {
        let g = graph(vec![("", "alpha")]);
        assert_eq!(g.neighbors(&Node::Term("zeta".into())).count(), 0);
        assert!(!g.contains(&Node::Doc(7)));
    }
}
