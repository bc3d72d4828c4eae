pub mod index;
pub mod search;

pub use index::CorpusIndex;
pub use search::{cosine_similarity, rank};
