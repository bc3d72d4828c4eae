use std::sync::Arc;

use folio_core::content::ContentSource;
use folio_core::traits::Answerer;
use folio_embed::Vectorizer;
use folio_text::tokenize;
use folio_vector::CorpusIndex;

use crate::rules::Rule;

/// How many ranked documents are considered for a reply.
pub const TOP_K: usize = 3;
/// Scores must be strictly above this to be mentioned.
pub const MIN_SCORE: f32 = 0.05;

pub const HELP_MESSAGE: &str = "Ask about projects, roles, resume, or how to contact.";
pub const RESUME_PENDING: &str = "The resume link will be added soon.";

/// Rule-first question answering over an immutable corpus index.
///
/// `answer` is total and deterministic: the same index and query always give
/// the same string, and nothing it does can fail.
#[derive(Debug, Clone)]
pub struct QueryAnswerer {
    index: Arc<CorpusIndex>,
    content: Arc<ContentSource>,
}

impl QueryAnswerer {
    /// `index` must have been built from `content`.
    pub fn new(index: Arc<CorpusIndex>, content: Arc<ContentSource>) -> Self {
        Self { index, content }
    }

    pub fn from_content(content: ContentSource) -> Self {
        let index = CorpusIndex::from_content(&content);
        Self::new(Arc::new(index), Arc::new(content))
    }

    pub fn content(&self) -> &ContentSource { &self.content }

    pub fn index(&self) -> &CorpusIndex { &self.index }

    pub fn answer(&self, query: &str) -> String {
        let lowered = query.to_lowercase();
        let rule = Rule::first_match(&lowered);
        tracing::debug!(?rule, "answering query");
        match rule {
            Some(Rule::Contact) => format!(
                "You can reach {} at {} or WhatsApp {}.",
                self.content.name, self.content.email, self.content.whatsapp
            ),
            Some(Rule::Resume) => match self.content.resume_link() {
                Some(url) => format!("Here is the resume: {url}"),
                None => RESUME_PENDING.to_string(),
            },
            Some(Rule::Role) => format!("{} works as {}.", self.content.name, self.content.roles.join(", ")),
            None => self.search_answer(&lowered),
        }
    }

    fn search_answer(&self, query: &str) -> String {
        let tokens = tokenize(query);
        if tokens.is_empty() {
            return HELP_MESSAGE.to_string();
        }
        let query_vec = Vectorizer::new(self.index.vocabulary()).vectorize(&tokens);
        let labels: Vec<String> = self
            .index
            .rank(&query_vec)
            .into_iter()
            .take(TOP_K)
            .filter(|m| m.score > MIN_SCORE)
            .map(|m| self.content.label_for(&m.id))
            .collect();
        if labels.is_empty() {
            return self.fallback();
        }
        format!("You might be looking for: {}.", labels.join(", "))
    }

    /// Reply used when nothing in the corpus is close enough.
    pub fn fallback(&self) -> String {
        format!("I can answer questions about {}, the work on this site, and how to connect.", self.content.name)
    }
}

impl Answerer for QueryAnswerer {
    fn answer(&self, query: &str) -> String {
        QueryAnswerer::answer(self, query)
    }
}
