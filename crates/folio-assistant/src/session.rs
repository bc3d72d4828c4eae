use std::sync::Arc;

use folio_core::content::ContentSource;
use folio_core::traits::{Answerer, Notifier};
use folio_core::types::ChatMessage;
use folio_notify::{is_lead_intent, lead_message};

use crate::answer::QueryAnswerer;

/// Whether the chat widget is shown. Purely presentational: toggling it
/// never touches the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

/// One visitor's conversation.
///
/// `submit` takes `&mut self`, so a session handles one submission at a time.
/// The transcript only grows; earlier messages are never changed.
pub struct ChatSession<A = QueryAnswerer> {
    answerer: A,
    notifier: Arc<dyn Notifier>,
    visibility: Visibility,
    log: Vec<ChatMessage>,
}

impl ChatSession<QueryAnswerer> {
    /// A session that opens with the standard greeting for the answerer's profile.
    pub fn start(answerer: QueryAnswerer, notifier: Arc<dyn Notifier>) -> Self {
        let hello = greeting(answerer.content());
        Self::new(answerer, notifier).with_greeting(hello)
    }
}

impl<A: Answerer> ChatSession<A> {
    pub fn new(answerer: A, notifier: Arc<dyn Notifier>) -> Self {
        Self { answerer, notifier, visibility: Visibility::Closed, log: Vec::new() }
    }

    pub fn with_greeting(mut self, text: impl Into<String>) -> Self {
        self.log.push(ChatMessage::bot(text));
        self
    }

    pub fn visibility(&self) -> Visibility { self.visibility }

    pub fn is_open(&self) -> bool { self.visibility == Visibility::Open }

    pub fn open(&mut self) { self.visibility = Visibility::Open; }

    pub fn close(&mut self) { self.visibility = Visibility::Closed; }

    pub fn toggle(&mut self) {
        self.visibility = match self.visibility {
            Visibility::Closed => Visibility::Open,
            Visibility::Open => Visibility::Closed,
        };
    }

    /// The transcript in chronological order.
    pub fn log(&self) -> &[ChatMessage] { &self.log }

    /// Handles one user submission and returns the bot's reply.
    ///
    /// A blank draft does nothing. Otherwise the trimmed text and exactly one
    /// reply are appended, and a lead notification is dispatched if the text
    /// asks for contact. Dispatch is fire-and-forget and cannot affect the reply.
    pub fn submit(&mut self, draft: &str) -> Option<&ChatMessage> {
        let text = draft.trim();
        if text.is_empty() {
            return None;
        }
        self.log.push(ChatMessage::user(text));
        let reply = self.answerer.answer(text);
        self.log.push(ChatMessage::bot(reply));
        if is_lead_intent(text) {
            tracing::debug!("lead intent detected");
            self.notifier.dispatch(lead_message(text));
        }
        self.log.last()
    }
}

pub fn greeting(content: &ContentSource) -> String {
    format!("Hi! I can answer questions about {} and this portfolio.", content.name)
}
