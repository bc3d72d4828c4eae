use folio_core::types::{ScoredMatch, TermVector};

/// Cosine similarity with a zero-norm guard: a zero norm is replaced by 1,
/// which makes the similarity 0 instead of undefined.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "vectors from different vocabularies");
    let norm_a = nonzero(a.norm());
    let norm_b = nonzero(b.norm());
    // Non-negative weights keep this in [0, 1] up to rounding.
    (a.dot(b) / (norm_a * norm_b)).clamp(0.0, 1.0)
}

fn nonzero(norm: f32) -> f32 {
    if norm == 0.0 { 1.0 } else { norm }
}

/// Scores every document against `query`, best first.
///
/// Equal scores keep the order in which `docs` were enumerated.
pub fn rank<'a, I>(query: &TermVector, docs: I) -> Vec<ScoredMatch>
where
    I: IntoIterator<Item = (&'a str, &'a TermVector)>,
{
    let mut scored: Vec<ScoredMatch> = docs
        .into_iter()
        .map(|(id, vec)| ScoredMatch { id: id.to_string(), score: cosine_similarity(query, vec) })
        .collect();
    // `sort_by` is stable.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(w: &[f32]) -> TermVector { TermVector::from(w.to_vec()) }

    #[test]
    fn zero_norms_give_zero_similarity() {
        assert_eq!(cosine_similarity(&v(&[0.0, 0.0]), &v(&[0.0, 0.0])), 0.0);
        assert_eq!(cosine_similarity(&v(&[0.0, 0.0]), &v(&[1.0, 2.0])), 0.0);
    }

    #[test]
    fn parallel_vectors_score_one() {
        assert!((cosine_similarity(&v(&[1.0, 2.0]), &v(&[2.0, 4.0])) - 1.0).abs() < 1e-6);
        assert_eq!(cosine_similarity(&v(&[1.0, 0.0]), &v(&[0.0, 3.0])), 0.0);
    }

    #[test]
    fn ranking_is_descending_and_stable() {
        let docs = [v(&[1.0, 0.0]), v(&[0.0, 1.0]), v(&[0.0, 1.0]), v(&[1.0, 1.0])];
        let ids = ["a", "b", "c", "d"];
        let ranked = rank(&v(&[0.0, 1.0]), ids.iter().copied().zip(docs.iter()));
        let order: Vec<&str> = ranked.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(order, ["b", "c", "d", "a"]);
    }
}
