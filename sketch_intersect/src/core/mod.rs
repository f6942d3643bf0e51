//! Shared math, numeric traits, tolerances, and visitor control flow.

use self::traits::ControlFlow;
pub mod math;
pub mod tolerance;
pub mod traits;

/// Basic control flow enum returned by visitors to continue or stop a search.
#[derive(Debug)]
pub enum Control<B = ()> {
    /// Keep visiting results.
    Continue,
    /// Stop visiting and carry a value out.
    Break(B),
}

impl<B> Default for Control<B> {
    #[inline]
    fn default() -> Self {
        Control::Continue
    }
}

impl<B> ControlFlow for Control<B> {
    #[inline]
    fn continuing() -> Self {
        Control::Continue
    }

    #[inline]
    fn should_break(&self) -> bool {
        matches!(*self, Control::Break(_))
    }
}

/// Internal macro used for try return on control flow.
macro_rules! try_cf {
    ($e:expr) => {
        match $e {
            x => {
                if x.should_break() {
                    return x;
                }
            }
        }
    };
}

pub(crate) use try_cf;
