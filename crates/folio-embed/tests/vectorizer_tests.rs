use folio_core::content::ContentSource;
use folio_embed::Vectorizer;
use folio_text::{tokenize, Vocabulary};

#[test]
fn every_vector_matches_vocabulary_length() {
    let docs = ContentSource::sample().documents();
    let vocab = Vocabulary::build(&docs);
    let vectorizer = Vectorizer::new(&vocab);

    for doc in &docs {
        assert_eq!(vectorizer.vectorize(tokenize(&doc.text)).len(), vocab.len());
    }
    assert_eq!(vectorizer.vectorize_text("").len(), vocab.len());
    assert_eq!(vectorizer.vectorize_text("nothing matches zzz").len(), vocab.len());
}

#[test]
fn weights_are_non_negative_and_repeatable() {
    let docs = ContentSource::sample().documents();
    let vocab = Vocabulary::build(&docs);
    let vectorizer = Vectorizer::new(&vocab);

    let a = vectorizer.vectorize_text(&docs[0].text);
    let b = vectorizer.vectorize_text(&docs[0].text);
    assert_eq!(a, b);
    assert!(a.as_slice().iter().all(|&w| w >= 0.0));
    assert!(a.norm() > 0.0);
}
