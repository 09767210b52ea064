//! Simulation of a planar N-link compound pendulum.
//!
//! The dynamics live in the `dynamics` crate and the integration machinery in
//! `diffeq`; this crate ties them together in a tick-based [`Simulation`]
//! harness and adds the read-only diagnostics a presentation layer consumes:
//! mechanical energy and forward kinematics.

pub mod energy;
pub mod kinematics;
pub mod sim;

pub use diffeq::{OdeModel, Rk4, StepError};
pub use dynamics::{DynamicsError, Link, NPendulum, PendulumParameters, PendulumState};
pub use energy::Energy;
pub use sim::{Error, Simulation};
