/// Cosine similarity from a dot product and the two vector norms.
///
/// Zero-magnitude vectors have no direction, their similarity to anything
/// (themselves included) is 0.
pub fn cosine_from_parts(dot: f64, norm_a: f64, norm_b: f64) -> f64 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    // rounding in the norms can push identical rows just past 1
    (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

/// Cosine similarity of two count vectors of equal length.
pub fn cosine_similarity(a: &[u32], b: &[u32]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    let mut dot = 0u64;
    let mut sq_a = 0u64;
    let mut sq_b = 0u64;
    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (x as u64, y as u64);
        dot += x * y;
        sq_a += x * x;
        sq_b += y * y;
    }
    cosine_from_parts(dot as f64, (sq_a as f64).sqrt(), (sq_b as f64).sqrt())
}
