//! Vector math used to score stored entries against a query.
//!
//! Callers are expected to have checked that both slices share a dimension;
//! these functions zip the inputs.

pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

pub fn magnitude(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

fn max_abs(v: &[f64]) -> f64 {
    v.iter().fold(0.0, |acc: f64, x| acc.max(x.abs()))
}

// Largest component becomes +-1 so squares neither overflow nor underflow
fn rescaled(v: &[f64]) -> Option<Vec<f64>> {
    let scale = max_abs(v);
    if scale == 0.0 {
        return None;
    }
    Some(v.iter().map(|x| x / scale).collect())
}

/// Cosine similarity in `[-1, 1]`, or `None` when either vector is all zeros
/// and the ratio is undefined.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Option<f64> {
    let a = rescaled(a)?;
    let b = rescaled(b)?;
    let denom = magnitude(&a) * magnitude(&b);

    // Rounding can push aligned vectors a hair past 1.0
    Some((dot(&a, &b) / denom).clamp(-1.0, 1.0))
}

/// `1 - cosine_similarity`, in `[0, 2]`.
pub fn cosine_distance(a: &[f64], b: &[f64]) -> Option<f64> {
    cosine_similarity(a, b).map(|s| 1.0 - s)
}
