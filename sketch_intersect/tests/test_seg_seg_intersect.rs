use sketch_intersect::core::{
    math::{point_from_parametric, seg_seg_intr, SegSegIntr::*, Vector2},
    tolerance::Tolerances,
    traits::FuzzyEq,
};

macro_rules! assert_case_eq {
    ($left:expr, $right:expr) => {
        match ($left, $right) {
            (NoIntersect, NoIntersect) => {}
            (
                TrueIntersect {
                    seg1_t: a1,
                    seg2_t: b1,
                },
                TrueIntersect {
                    seg1_t: a2,
                    seg2_t: b2,
                },
            ) if a1.fuzzy_eq(a2) && b1.fuzzy_eq(b2) => {}
            (
                Overlapping {
                    seg1_t: a1,
                    seg2_t: b1,
                    seg1_t0: c1,
                    seg1_t1: d1,
                },
                Overlapping {
                    seg1_t: a2,
                    seg2_t: b2,
                    seg1_t0: c2,
                    seg1_t1: d2,
                },
            ) if a1.fuzzy_eq(a2) && b1.fuzzy_eq(b2) && c1.fuzzy_eq(c2) && d1.fuzzy_eq(d2) => {}
            _ => panic!(
                "intersect cases do not match: left: {:?}, right: {:?}",
                $left, $right
            ),
        };
    };
}

fn v(x: f64, y: f64) -> Vector2<f64> {
    Vector2::new(x, y)
}

fn tol() -> Tolerances<f64> {
    Tolerances::default()
}

#[test]
fn true_intersect() {
    let result = seg_seg_intr(v(-1.0, -1.0), v(1.0, 1.0), v(-1.0, 1.0), v(1.0, -1.0), &tol());
    assert_case_eq!(
        result,
        TrueIntersect {
            seg1_t: 0.5,
            seg2_t: 0.5
        }
    );
}

#[test]
fn params_reproduce_crossing_point() {
    let (s1, e1) = (v(1.0, 2.0), v(7.0, -1.0));
    let (s2, e2) = (v(2.0, -3.0), v(5.0, 4.0));
    let (t1, t2) = seg_seg_intr(s1, e1, s2, e2, &tol()).params().unwrap();
    let p1 = point_from_parametric(s1, e1, t1);
    let p2 = point_from_parametric(s2, e2, t2);
    assert!(p1.fuzzy_eq_eps(p2, 1e-9));
    // crossing lies on both supporting lines
    assert!((e1 - s1).perp_dot(p1 - s1).abs() < 1e-9);
    assert!((e2 - s2).perp_dot(p1 - s2).abs() < 1e-9);
}

#[test]
fn disjoint_non_collinear() {
    let result = seg_seg_intr(v(0.0, 0.0), v(1.0, 1.0), v(2.0, 0.0), v(3.0, -1.0), &tol());
    assert_case_eq!(result, NoIntersect::<f64>);
}

#[test]
fn lines_cross_outside_segments() {
    // supporting lines cross at (2, 2) which is past the end of the first segment
    let result = seg_seg_intr(v(0.0, 0.0), v(1.0, 1.0), v(2.0, 0.0), v(2.0, 4.0), &tol());
    assert_case_eq!(result, NoIntersect::<f64>);
}

#[test]
fn end_point_touch_within_tolerance() {
    let result = seg_seg_intr(v(0.0, 0.0), v(1.0, 0.0), v(1.0 + 1e-6, -1.0), v(1.0 + 1e-6, 1.0), &tol());
    assert_case_eq!(
        result,
        TrueIntersect {
            seg1_t: 1.0,
            seg2_t: 0.5
        }
    );
}

#[test]
fn both_points_coincide() {
    let p = v(3.0, 3.0);
    let result = seg_seg_intr(p, p, v(3.0, 3.0 + 1e-7), v(3.0, 3.0 + 1e-7), &tol());
    assert_case_eq!(
        result,
        TrueIntersect {
            seg1_t: 0.0,
            seg2_t: 0.0
        }
    );
}

#[test]
fn both_points_distinct() {
    let result = seg_seg_intr(v(0.0, 0.0), v(0.0, 0.0), v(1.0, 1.0), v(1.0, 1.0), &tol());
    assert_case_eq!(result, NoIntersect::<f64>);
}

#[test]
fn point_on_segment() {
    let p = v(1.0, 1.0);
    let result = seg_seg_intr(p, p, v(0.0, 0.0), v(4.0, 4.0), &tol());
    assert_case_eq!(
        result,
        TrueIntersect {
            seg1_t: 0.0,
            seg2_t: 0.25
        }
    );

    // flip argument order
    let result = seg_seg_intr(v(0.0, 0.0), v(4.0, 4.0), p, p, &tol());
    assert_case_eq!(
        result,
        TrueIntersect {
            seg1_t: 0.25,
            seg2_t: 0.0
        }
    );
}

#[test]
fn point_off_segment() {
    let p = v(1.0, 1.5);
    let result = seg_seg_intr(p, p, v(0.0, 0.0), v(4.0, 4.0), &tol());
    assert_case_eq!(result, NoIntersect::<f64>);
}

#[test]
fn collinear_overlap_uses_overlap_midpoint() {
    // 0..5 and 3..8 overlap over 3..5, representative point is x = 4
    let result = seg_seg_intr(v(0.0, 0.0), v(5.0, 0.0), v(3.0, 0.0), v(8.0, 0.0), &tol());
    assert_case_eq!(
        result,
        Overlapping {
            seg1_t: 0.8,
            seg2_t: 0.2,
            seg1_t0: 0.6,
            seg1_t1: 1.0
        }
    );
}

#[test]
fn collinear_contained_overlap() {
    let result = seg_seg_intr(v(0.0, 0.0), v(0.0, 10.0), v(0.0, 2.0), v(0.0, 4.0), &tol());
    assert_case_eq!(
        result,
        Overlapping {
            seg1_t: 0.3,
            seg2_t: 0.5,
            seg1_t0: 0.2,
            seg1_t1: 0.4
        }
    );
}

#[test]
fn fine_tolerance_controls_parallel_detection() {
    // segments at a tiny angle, cross at x = 5
    let s1 = v(0.0, 0.0);
    let e1 = v(10.0, 0.0);
    let s2 = v(0.0, -5e-7);
    let e2 = v(10.0, 5e-7);

    let strict = Tolerances::new(1e-12, 1e-9, 1e-6).unwrap();
    let result = seg_seg_intr(s1, e1, s2, e2, &strict);
    assert_case_eq!(
        result,
        TrueIntersect {
            seg1_t: 0.5,
            seg2_t: 0.5
        }
    );

    // with a looser parallel threshold the same segments are collinear and overlap fully
    let loose = Tolerances::new(1e-6, 1e-5, 1e-3).unwrap();
    let result = seg_seg_intr(s1, e1, s2, e2, &loose);
    assert!(matches!(result, Overlapping { .. }), "got {result:?}");
}
