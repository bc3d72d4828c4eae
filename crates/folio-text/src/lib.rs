//! folio-text
//!
//! Bag-of-words text handling: the tokenizer and the corpus vocabulary built
//! on top of it. See `tokenize` and `vocabulary`.

pub mod tokenize;
pub mod vocabulary;

pub use tokenize::{tokenize, tokens, MIN_TOKEN_LEN};
pub use vocabulary::Vocabulary;
