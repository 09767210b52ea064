//! Fixed-step integration of ordinary differential equations.
//!
//! A model implements [`OdeModel`] to describe its derivative; any type with
//! the required state algebra ([`OdeState`]) can be advanced with the
//! classical Runge-Kutta scheme in [`rk4`].

pub mod rk4;
pub mod state;

pub use rk4::{Rk4, StepError};
pub use state::OdeState;

use std::error::Error;

/// Trait for defining a dynamical system model that can be numerically integrated.
///
/// Types implementing this trait must define how to compute the derivative (or RHS
/// function) of the ODE at a given time and state.
pub trait OdeModel {
    type State: OdeState;
    type Error: Error;

    /// Compute the derivative at time `t` and state `state`, storing the result in
    /// `derivative`.
    fn f(
        &mut self,
        t: f64,
        state: &Self::State,
        derivative: &mut Self::State,
    ) -> Result<(), Self::Error>;
}
