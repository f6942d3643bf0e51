/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Construct a [SampledLine](crate::polyline::SampledLine) from absolute `(x, y)` sample points.
/// The first and last samples become the line's end points.
///
/// # Panics
///
/// Panics if fewer than 2 samples are given, a sample is not finite, or the first and last
/// samples coincide.
///
/// # Examples
///
/// ```
/// # use sketch_intersect::sampled_line;
/// # use sketch_intersect::core::math::Vector2;
/// let line = sampled_line![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)];
/// assert_eq!(line.len(), 3);
/// assert_eq!(line.p2(), Vector2::new(2.0, 0.0));
/// ```
#[macro_export]
macro_rules! sampled_line {
    ($( $x:expr ),* $(,)?) => {
        {
            let samples = [$($crate::core::math::Vector2::new($x.0, $x.1)),*];
            match $crate::polyline::SampledLine::from_sample_points(&samples) {
                Ok(line) => line,
                Err(e) => panic!("invalid sampled line: {}", e),
            }
        }
    };
}
