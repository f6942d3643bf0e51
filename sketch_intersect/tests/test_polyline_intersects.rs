mod test_utils;

use proptest::prelude::*;
use sketch_intersect::{
    assert_fuzzy_eq,
    core::{
        math::{seg_seg_intr, SegSegIntr, Vector2},
        tolerance::Tolerances,
        Control,
    },
    polyline::*,
    sampled_line,
};
use test_utils::{line, same_point_sets, stepped_line};

fn tol() -> Tolerances<f64> {
    Tolerances::default()
}

fn arc(center: (f64, f64), radius: f64, start_angle: f64, end_angle: f64, steps: usize) -> SampledLine<f64> {
    let points: Vec<(f64, f64)> = (0..=steps)
        .map(|i| {
            let a = start_angle + (end_angle - start_angle) * i as f64 / steps as f64;
            (center.0 + radius * a.cos(), center.1 + radius * a.sin())
        })
        .collect();
    line(&points)
}

/// Zigzag crossing the x axis once between every pair of consecutive samples.
fn zigzag(count: usize) -> SampledLine<f64> {
    let points: Vec<(f64, f64)> = (0..count)
        .map(|i| (0.5 + i as f64, if i % 2 == 0 { -1.0 } else { 1.0 }))
        .collect();
    line(&points)
}

#[test]
fn crossing_on_shared_samples_reported_once() {
    let horizontal = stepped_line((0.0, 0.0), (10.0, 0.0), 10);
    let vertical = stepped_line((5.0, -5.0), (5.0, 5.0), 10);
    let intersects = find_intersects(&horizontal, &vertical, &tol());
    assert_eq!(intersects.len(), 1, "{intersects:?}");
    assert_fuzzy_eq!(intersects[0].point, Vector2::new(5.0, 0.0), 1e-9);
    // crossing lands on sample 5 of both lines
    let along1 = intersects[0].seg1_index as f64 + intersects[0].seg1_t;
    let along2 = intersects[0].seg2_index as f64 + intersects[0].seg2_t;
    assert!((along1 - 5.0).abs() < 1e-6);
    assert!((along2 - 5.0).abs() < 1e-6);

    let swapped = intersection_positions(&vertical, &horizontal, &tol());
    assert_eq!(swapped.len(), 1);
    assert!(swapped[0].fuzzy_eq_eps(Vector2::new(5.0, 0.0), 1e-9));
}

#[test]
fn crossing_mid_segment_away_from_origin() {
    let vertical = stepped_line((1.0, 1.0), (1.0, 11.0), 4);
    let diagonal = stepped_line((-4.0, 2.0), (10.0, 16.0), 7);
    let intersects = find_intersects(&vertical, &diagonal, &tol());
    assert_eq!(intersects.len(), 1);
    let intr = intersects[0];
    assert_fuzzy_eq!(intr.point, Vector2::new(1.0, 7.0), 1e-9);
    // parametric values reproduce the point on both lines
    assert_fuzzy_eq!(vertical.point_at(intr.seg1_index, intr.seg1_t), intr.point, 1e-9);
    assert_fuzzy_eq!(diagonal.point_at(intr.seg2_index, intr.seg2_t), intr.point, 1e-9);
}

#[test]
fn multiple_crossings_sorted_along_first_line() {
    let axis = line(&[(0.0, 0.0), (10.0, 0.0)]);
    let zz = zigzag(9);
    let intersects = find_intersects(&axis, &zz, &tol());
    assert_eq!(intersects.len(), 8, "{intersects:?}");
    for (i, intr) in intersects.iter().enumerate() {
        let expected = Vector2::new(1.0 + i as f64, 0.0);
        assert!(intr.point.fuzzy_eq_eps(expected, 1e-9), "{intr:?}");
        assert_eq!(intr.seg1_index, 0);
        assert_eq!(intr.seg2_index, i);
    }

    // reversed roles sort along the zigzag which gives the same order here
    let swapped = intersection_positions(&zz, &axis, &tol());
    let forward: Vec<_> = intersects.iter().map(|i| i.point).collect();
    assert!(same_point_sets(&forward, &swapped, 1e-9));
}

#[test]
fn arc_crossing_straight_line() {
    let semicircle = arc((0.0, 0.0), 5.0, std::f64::consts::PI, 0.0, 64);
    let chord = line(&[(-10.0, 3.0), (10.0, 3.0)]);
    let points = intersection_positions(&semicircle, &chord, &tol());
    assert_eq!(points.len(), 2, "{points:?}");
    assert!(points[0].fuzzy_eq_eps(Vector2::new(-4.0, 3.0), 0.05));
    assert!(points[1].fuzzy_eq_eps(Vector2::new(4.0, 3.0), 0.05));

    // infinite line through the same chord lands on the same positions
    let infinite = InfiniteLine::from_points(Vector2::new(-10.0, 3.0), Vector2::new(10.0, 3.0)).unwrap();
    let plain = plain_line_intersection_positions(&semicircle, &infinite, &tol());
    assert!(same_point_sets(&points, &plain, 1e-9));
}

#[test]
fn two_arcs_crossing() {
    let a = arc((0.0, 0.0), 5.0, -0.5, 2.0, 40);
    let b = arc((4.0, 0.0), 5.0, 1.2, 3.6, 40);
    let points = intersection_positions(&a, &b, &tol());
    // circles meet at x = 2, y = +-sqrt(21), only the upper one lies on both arcs
    assert_eq!(points.len(), 1, "{points:?}");
    assert!(points[0].fuzzy_eq_eps(Vector2::new(2.0, 21f64.sqrt()), 0.05));
}

#[test]
fn end_point_touches_are_not_reported() {
    let horizontal = stepped_line((0.0, 0.0), (10.0, 0.0), 5);

    // T junction, second line starts on the first
    let tee = line(&[(3.0, 0.0), (3.0, 2.0), (4.0, 5.0)]);
    assert!(find_intersects(&horizontal, &tee, &tol()).is_empty());
    assert!(find_intersects(&tee, &horizontal, &tol()).is_empty());
    assert!(!has_intersection(&horizontal, &tee, &tol()));

    // crossing through the first line's end point
    let through_end = line(&[(10.0, -1.0), (10.0, 1.0)]);
    assert!(find_intersects(&horizontal, &through_end, &tol()).is_empty());

    // lines sharing an end point
    let shared = line(&[(0.0, 0.0), (-3.0, 4.0)]);
    assert!(find_intersects(&horizontal, &shared, &tol()).is_empty());
}

#[test]
fn near_end_point_within_loose_is_dropped() {
    let horizontal = line(&[(0.0, 0.0), (10.0, 0.0)]);
    let near = line(&[(9.9995, -1.0), (9.9995, 1.0)]);
    assert!(find_intersects(&horizontal, &near, &tol()).is_empty());

    let farther = line(&[(9.99, -1.0), (9.99, 1.0)]);
    assert_eq!(find_intersects(&horizontal, &farther, &tol()).len(), 1);
}

#[test]
fn collinear_overlap_reports_midpoint() {
    let a = sampled_line![(0.0, 0.0), (5.0, 0.0)];
    let b = sampled_line![(3.0, 0.0), (8.0, 0.0)];
    let intersects = find_intersects(&a, &b, &tol());
    assert_eq!(intersects.len(), 1, "{intersects:?}");
    assert_fuzzy_eq!(intersects[0].point, Vector2::new(4.0, 0.0), 1e-6);
}

#[test]
fn distant_lines_do_not_intersect() {
    let a = arc((0.0, 0.0), 1.0, 0.0, 3.0, 16);
    let b = stepped_line((10.0, 10.0), (20.0, 5.0), 8);
    assert!(raw_intersects(&a, &b, &tol()).is_empty());
    assert!(find_intersects(&a, &b, &tol()).is_empty());
    assert!(!has_intersection(&a, &b, &tol()));
}

#[test]
fn has_intersection_stops_at_first_crossing() {
    let axis = line(&[(0.0, 0.0), (10.0, 0.0)]);
    let zz = zigzag(9);
    assert!(has_intersection(&axis, &zz, &tol()));

    let mut visited = 0;
    let result: Control<(f64, f64)> = visit_raw_intersects(&axis, &zz, &tol(), &mut |raw: RawIntersect<f64>| {
        visited += 1;
        Control::Break((raw.seg1_t, raw.seg2_t))
    });
    assert_eq!(visited, 1);
    assert!(matches!(result, Control::Break(_)));
    assert_eq!(raw_intersects(&axis, &zz, &tol()).len(), 8);
}

#[test]
fn large_loose_tolerance_merges_crossings() {
    let axis = line(&[(0.0, 0.0), (10.0, 0.0)]);
    let zz = zigzag(9);
    let tol = Tolerances::new(1e-8, 1e-5, 1.9).unwrap();
    let points = intersection_positions(&axis, &zz, &tol);
    assert_eq!(points.len(), 2, "{points:?}");
    assert!(points[0].fuzzy_eq_eps(Vector2::new(3.0, 0.0), 1e-9));
    assert!(points[1].fuzzy_eq_eps(Vector2::new(5.0, 0.0), 1e-9));
}

#[test]
fn plain_line_through_samples() {
    let stepped = stepped_line((0.0, -2.0), (4.0, 2.0), 4);
    let axis = InfiniteLine::from_points(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0)).unwrap();
    // passes through sample 2 exactly, reported once
    let points = plain_line_intersection_positions(&stepped, &axis, &tol());
    assert_eq!(points.len(), 1);
    assert!(points[0].fuzzy_eq(Vector2::new(2.0, 0.0)));

    let parallel = InfiniteLine::from_points(Vector2::new(0.0, 10.0), Vector2::new(1.0, 11.0)).unwrap();
    assert!(plain_line_intersection_positions(&stepped, &parallel, &tol()).is_empty());
}

/// Every crossing found by testing all segment pairs, `None` if any pair overlaps.
fn brute_force_points(a: &SampledLine<f64>, b: &SampledLine<f64>) -> Option<Vec<Vector2<f64>>> {
    let pa = a.sample_points();
    let pb = b.sample_points();
    let mut result = Vec::new();
    for sa in pa.windows(2) {
        for sb in pb.windows(2) {
            match seg_seg_intr(sa[0], sa[1], sb[0], sb[1], &tol()) {
                SegSegIntr::NoIntersect => {}
                SegSegIntr::TrueIntersect { seg1_t, .. } => {
                    result.push(sa[0] + (sa[1] - sa[0]).scale(seg1_t));
                }
                SegSegIntr::Overlapping { .. } => return None,
            }
        }
    }
    Some(result)
}

fn well_separated(points: &[Vector2<f64>], ends: &[Vector2<f64>], min_dist: f64) -> bool {
    let apart = points
        .iter()
        .enumerate()
        .all(|(i, p)| points[i + 1..].iter().all(|q| p.distance(*q) > min_dist));
    let away_from_ends = points
        .iter()
        .all(|p| ends.iter().all(|e| p.distance(*e) > min_dist));
    apart && away_from_ends
}

fn sample_points() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((-10.0..10.0f64, -10.0..10.0f64), 2..8)
}

fn chord_ok(points: &[(f64, f64)]) -> bool {
    let (first, last) = (points[0], points[points.len() - 1]);
    ((last.0 - first.0).powi(2) + (last.1 - first.1).powi(2)).sqrt() > 1.0
}

proptest! {
    #[test]
    fn matches_brute_force_and_is_symmetric(a in sample_points(), b in sample_points()) {
        prop_assume!(chord_ok(&a) && chord_ok(&b));
        let line_a = line(&a);
        let line_b = line(&b);

        let expected = brute_force_points(&line_a, &line_b);
        prop_assume!(expected.is_some());
        let expected = expected.unwrap_or_default();
        let ends = [line_a.p1(), line_a.p2(), line_b.p1(), line_b.p2()];
        prop_assume!(well_separated(&expected, &ends, 0.01));

        let forward = intersection_positions(&line_a, &line_b, &tol());
        let backward = intersection_positions(&line_b, &line_a, &tol());
        prop_assert!(same_point_sets(&forward, &expected, 1e-6), "{:?} vs {:?}", forward, expected);
        prop_assert!(same_point_sets(&forward, &backward, 1e-6), "{:?} vs {:?}", forward, backward);
        prop_assert_eq!(forward.len(), expected.len());
        prop_assert_eq!(has_intersection(&line_a, &line_b, &tol()), !expected.is_empty());
    }

    #[test]
    fn monotone_runs_are_stable(xs in prop::collection::vec(-10.0..10.0f64, 1..20)) {
        let points: Vec<TaggedPoint<f64>> = xs
            .iter()
            .enumerate()
            .map(|(i, &x)| TaggedPoint::new(Vector2::new(x, i as f64), i))
            .collect();
        let runs = monotone_runs(&points);

        for run in &runs {
            for w in run.windows(2) {
                prop_assert!(w[0].pos.x <= w[1].pos.x);
            }
            // splitting a run again gives it back unchanged
            let again = monotone_runs(run);
            prop_assert_eq!(again.len(), 1);
            prop_assert_eq!(&again[0], run);
        }

        let mut seen: Vec<usize> = runs.iter().flatten().map(|p| p.index).collect();
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen, (0..xs.len()).collect::<Vec<_>>());
    }
}

#[test]
fn nearly_closed_line_keeps_crossings_in_place() {
    // end points 1e-4 apart, so the local frame is scaled up by 1e4
    let loop_line = line(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 1e-4)]);
    let cross = line(&[(0.05, -1.0), (0.05, 1.0)]);

    let forward = intersection_positions(&loop_line, &cross, &tol());
    assert_eq!(forward.len(), 1, "{forward:?}");
    assert_fuzzy_eq!(forward[0], Vector2::new(0.05, 0.0), 1e-9);

    let backward = intersection_positions(&cross, &loop_line, &tol());
    assert_eq!(backward.len(), 1, "{backward:?}");
    assert_fuzzy_eq!(backward[0], Vector2::new(0.05, 0.0), 1e-9);
}
