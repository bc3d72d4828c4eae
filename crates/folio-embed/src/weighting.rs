use folio_core::types::TermVector;

/// Log-dampened term frequency: `ln(1 + count)`, zero for absent terms.
///
/// There is deliberately no inverse-document-frequency factor.
pub fn log_tf(count: u32) -> f32 {
    if count == 0 { 0.0 } else { (count as f32).ln_1p() }
}

pub fn weigh(counts: &[u32]) -> TermVector {
    TermVector::from(counts.iter().map(|&c| log_tf(c)).collect::<Vec<f32>>())
}
