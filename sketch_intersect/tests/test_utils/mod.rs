#![allow(dead_code)]
use sketch_intersect::{
    core::math::Vector2,
    polyline::SampledLine,
};

/// Sampled line through the `(x, y)` points given.
pub fn line(points: &[(f64, f64)]) -> SampledLine<f64> {
    let samples: Vec<_> = points.iter().map(|&(x, y)| Vector2::new(x, y)).collect();
    SampledLine::from_sample_points(&samples).unwrap()
}

/// Straight line from `start` to `end` sampled at `steps` equal steps.
pub fn stepped_line(start: (f64, f64), end: (f64, f64), steps: usize) -> SampledLine<f64> {
    let points: Vec<(f64, f64)> = (0..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            (
                start.0 + (end.0 - start.0) * t,
                start.1 + (end.1 - start.1) * t,
            )
        })
        .collect();
    line(&points)
}

/// Returns true if every point in `a` has a point in `b` within `eps` and vice versa.
pub fn same_point_sets(a: &[Vector2<f64>], b: &[Vector2<f64>], eps: f64) -> bool {
    let covered = |from: &[Vector2<f64>], to: &[Vector2<f64>]| {
        from.iter().all(|p| to.iter().any(|q| p.distance(*q) < eps))
    };
    covered(a, b) && covered(b, a)
}

/// Joins the absolute samples of consecutive pieces, dropping the duplicated start sample of each
/// piece after the first.
pub fn join_pieces(pieces: &[SampledLine<f64>]) -> Vec<Vector2<f64>> {
    let mut result = Vec::new();
    for (i, piece) in pieces.iter().enumerate() {
        let samples = piece.sample_points();
        let skip = if i == 0 { 0 } else { 1 };
        result.extend(samples.into_iter().skip(skip));
    }
    result
}

/// Asserts two sample sequences match position by position within `eps`.
pub fn assert_samples_eq(actual: &[Vector2<f64>], expected: &[Vector2<f64>], eps: f64) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "sample counts differ: {actual:?} vs {expected:?}"
    );
    for (a, e) in actual.iter().zip(expected) {
        assert!(
            a.fuzzy_eq_eps(*e, eps),
            "samples differ: {a:?} vs {e:?}\n  actual: {actual:?}\n  expected: {expected:?}"
        );
    }
}
