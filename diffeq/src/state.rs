use std::{
    fmt::Debug,
    ops::{AddAssign, MulAssign},
};

/// Trait representing an integrable state for use in ODE solvers.
///
/// A state only needs in-place addition with another state and in-place scaling
/// by a scalar; the solver builds every Runge-Kutta stage from those two
/// operations plus `clone_from`. The derivative shares the state's type.
pub trait OdeState: Clone + Debug
where
    for<'a> Self: AddAssign<&'a Self> + MulAssign<f64>,
{
}

impl<T> OdeState for T where for<'a> T: AddAssign<&'a T> + MulAssign<f64> + Clone + Debug {}
