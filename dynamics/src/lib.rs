//! Dynamics of a planar compound pendulum: N point masses connected in series
//! by massless rigid rods, swinging under gravity.
//!
//! The joint angles are the generalized coordinates. [`NPendulum`] builds the
//! coupled equations of motion for the current angular state and solves them
//! for the angular accelerations; it implements [`diffeq::OdeModel`] so the
//! chain can be advanced with [`diffeq::Rk4`].

use thiserror::Error;

pub mod links;
pub mod model;
pub mod state;

pub use links::{Link, PendulumParameters};
pub use model::NPendulum;
pub use state::PendulumState;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DynamicsError {
    #[error("link mass must be greater than zero, got {0}")]
    MassNotPositive(f64),
    #[error("link length must be greater than zero, got {0}")]
    LengthNotPositive(f64),
    #[error("pendulum must have at least one link")]
    NoLinks,
    #[error("state must have at least one joint")]
    EmptyState,
    #[error("angles have length {angles} but angular velocities have length {velocities}")]
    StateLengthMismatch { angles: usize, velocities: usize },
    #[error("state has {state} joints but parameters describe {links} links")]
    DimensionMismatch { state: usize, links: usize },
    #[error("inertia matrix is singular")]
    SingularInertiaMatrix,
}
