//! folio-assistant
//!
//! Answers visitor questions about a portfolio: fixed rules first, then a
//! bag-of-words search over the corpus. [`ChatSession`] wraps the answerer
//! with an append-only transcript and lead notifications.

pub mod answer;
pub mod rules;
pub mod session;

pub use answer::QueryAnswerer;
pub use rules::Rule;
pub use session::{ChatSession, Visibility};
