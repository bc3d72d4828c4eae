//! Domain types shared by the text, vector and assistant crates.

use serde::{Deserialize, Serialize};

pub type DocId = String;

/// A unit of the corpus: the bio or one work item.
///
/// `id` is unique within a corpus and matches the bio id (`about`) or the
/// identifier of a work item. Documents are never modified once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<DocId>, text: impl Into<String>) -> Self {
        Self { id: id.into(), text: text.into() }
    }
}

/// Dense term weights, positionally aligned to a vocabulary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TermVector(Vec<f32>);

impl TermVector {
    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn as_slice(&self) -> &[f32] { &self.0 }

    pub fn dot(&self, other: &TermVector) -> f32 {
        self.0.iter().zip(&other.0).map(|(a, b)| a * b).sum()
    }

    /// Euclidean length.
    pub fn norm(&self) -> f32 {
        self.0.iter().map(|x| x * x).sum::<f32>().sqrt()
    }
}

impl From<Vec<f32>> for TermVector {
    fn from(weights: Vec<f32>) -> Self { Self(weights) }
}

/// One ranked document. Higher is better; cosine scores lie in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredMatch {
    pub id: DocId,
    pub score: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self { Self { sender: Sender::User, text: text.into() } }

    pub fn bot(text: impl Into<String>) -> Self { Self { sender: Sender::Bot, text: text.into() } }
}
