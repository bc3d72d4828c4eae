use folio_core::content::ContentSource;
use folio_core::types::{Document, ScoredMatch, TermVector};
use folio_embed::Vectorizer;
use folio_text::{tokens, Vocabulary};

use crate::search::rank;

/// Vocabulary plus one term vector per document, computed once.
///
/// Nothing mutates an index after [`CorpusIndex::build`], so it can be shared
/// behind an `Arc` by any number of sessions without locking.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    documents: Vec<Document>,
    vocabulary: Vocabulary,
    vectors: Vec<TermVector>,
}

impl CorpusIndex {
    pub fn build(documents: Vec<Document>) -> Self {
        let vocabulary = Vocabulary::build(&documents);
        let vectorizer = Vectorizer::new(&vocabulary);
        let vectors = documents.iter().map(|d| vectorizer.vectorize_text(&d.text)).collect();
        tracing::debug!(documents = documents.len(), dim = vocabulary.len(), "built corpus index");
        Self { documents, vocabulary, vectors }
    }

    pub fn from_content(content: &ContentSource) -> Self {
        Self::build(content.documents())
    }

    pub fn documents(&self) -> &[Document] { &self.documents }

    pub fn vocabulary(&self) -> &Vocabulary { &self.vocabulary }

    pub fn vector(&self, id: &str) -> Option<&TermVector> {
        self.documents.iter().position(|d| d.id == id).map(|i| &self.vectors[i])
    }

    /// Query vector for `text`; tokens the corpus never uses are dropped.
    pub fn query_vector(&self, text: &str) -> TermVector {
        Vectorizer::new(&self.vocabulary).vectorize(tokens(text))
    }

    /// Every document scored against `query`, best first, ties in corpus order.
    pub fn rank(&self, query: &TermVector) -> Vec<ScoredMatch> {
        rank(query, self.documents.iter().map(|d| d.id.as_str()).zip(&self.vectors))
    }

    pub fn search(&self, text: &str) -> Vec<ScoredMatch> {
        self.rank(&self.query_vector(text))
    }
}
