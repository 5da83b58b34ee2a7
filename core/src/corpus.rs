use serde::{Deserialize, Serialize};

pub type DocId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub title: String,
    pub content: String,
}

impl Document {
    /// Title and content joined by a space, the text the whole-document models see.
    pub fn full_text(&self) -> String {
        format!("{} {}", self.title, self.content)
    }

    /// First `max_chars` characters of the content.
    pub fn preview(&self, max_chars: usize) -> &str {
        match self.content.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.content[..idx],
            None => &self.content,
        }
    }
}

/// The loaded corpus. Ids are positions, assigned 0..n-1 in input order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentStore {
    docs: Vec<Document>,
}

impl DocumentStore {
    pub fn new() -> Self { Self::default() }

    /// Build a store from `(title, content)` records. An empty title or body
    /// is kept as a valid, if degenerate, document.
    pub fn load<I, T, C>(records: I) -> Self
    where
        I: IntoIterator<Item = (T, C)>,
        T: Into<String>,
        C: Into<String>,
    {
        let mut store = Self::new();
        for (title, content) in records {
            store.push(title.into(), content.into());
        }
        tracing::info!(num_docs = store.len(), "corpus loaded");
        store
    }

    fn push(&mut self, title: String, content: String) -> DocId {
        let id = self.docs.len() as DocId;
        self.docs.push(Document { id, title, content });
        id
    }

    pub fn get(&self, id: DocId) -> Option<&Document> { self.docs.get(id as usize) }

    pub fn len(&self) -> usize { self.docs.len() }

    pub fn is_empty(&self) -> bool { self.docs.is_empty() }

    /// Documents in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Document> { self.docs.iter() }
}
