use std::collections::HashMap;

use folio_core::types::Document;

use crate::tokenize::tokens;

/// The distinct tokens of a corpus, indexed by first appearance.
///
/// Documents are scanned in the order given and each document's tokens in
/// text order, so the same corpus always yields the same indices. There is
/// no way to add tokens once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    tokens: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    pub fn build(documents: &[Document]) -> Self {
        let mut vocab = Self::default();
        for doc in documents {
            for token in tokens(&doc.text) {
                if !vocab.index.contains_key(&token) {
                    vocab.index.insert(token.clone(), vocab.tokens.len());
                    vocab.tokens.push(token);
                }
            }
        }
        tracing::debug!(documents = documents.len(), tokens = vocab.tokens.len(), "built vocabulary");
        vocab
    }

    pub fn len(&self) -> usize { self.tokens.len() }

    pub fn is_empty(&self) -> bool { self.tokens.is_empty() }

    /// Position of `token`, if the corpus contains it.
    pub fn get(&self, token: &str) -> Option<usize> { self.index.get(token).copied() }

    pub fn token(&self, index: usize) -> Option<&str> { self.tokens.get(index).map(String::as_str) }

    pub fn iter(&self) -> impl Iterator<Item = &str> { self.tokens.iter().map(String::as_str) }
}
