//! Term-weight vectors over a fixed vocabulary.
//!
//! A [`Vectorizer`] only reads its vocabulary, so one instance can serve any
//! number of concurrent callers.

mod weighting;

pub use weighting::{log_tf, weigh};

use folio_core::types::TermVector;
use folio_text::{tokens, Vocabulary};

#[derive(Debug, Clone, Copy)]
pub struct Vectorizer<'a> {
    vocabulary: &'a Vocabulary,
}

impl<'a> Vectorizer<'a> {
    pub fn new(vocabulary: &'a Vocabulary) -> Self { Self { vocabulary } }

    pub fn dim(&self) -> usize { self.vocabulary.len() }

    /// Per-index occurrence counts. Tokens outside the vocabulary are ignored.
    pub fn counts<I, S>(&self, tokens: I) -> Vec<u32>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts = vec![0u32; self.dim()];
        for token in tokens {
            if let Some(i) = self.vocabulary.get(token.as_ref()) {
                counts[i] += 1;
            }
        }
        counts
    }

    pub fn vectorize<I, S>(&self, tokens: I) -> TermVector
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        weigh(&self.counts(tokens))
    }

    pub fn vectorize_text(&self, text: &str) -> TermVector {
        self.vectorize(tokens(text))
    }
}
