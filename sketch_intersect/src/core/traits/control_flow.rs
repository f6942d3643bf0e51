/// Return type of visitor callbacks, decides whether a visiting function keeps going.
///
/// Implemented by `()` (always continue) and by [Control](crate::core::Control).
///
/// # Examples
///
/// ```
/// # use sketch_intersect::core::Control;
/// # use sketch_intersect::polyline::*;
/// # use sketch_intersect::{core::tolerance::Tolerances, sampled_line};
/// let horizontal = sampled_line![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)];
/// let zigzag = sampled_line![(0.2, -1.0), (0.4, 1.0), (0.6, -1.0), (0.8, 1.0)];
///
/// let mut visited = 0;
/// visit_raw_intersects(&horizontal, &zigzag, &Tolerances::default(), &mut |_intr| {
///     visited += 1;
///     Control::Break(())
/// });
/// assert_eq!(visited, 1);
/// ```
pub trait ControlFlow {
    /// State indicating iteration should continue.
    fn continuing() -> Self;

    /// Returns `true` if iteration should stop.
    fn should_break(&self) -> bool;
}

impl ControlFlow for () {
    #[inline]
    fn continuing() -> Self {}

    #[inline]
    fn should_break(&self) -> bool {
        false
    }
}
