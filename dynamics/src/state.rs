use std::ops::{AddAssign, MulAssign};

use serde::{Deserialize, Serialize};

use crate::DynamicsError;

/// Angular state of the chain: one angle and one angular velocity per link,
/// indexed 0..N-1 from the pivot outward. Angles are measured in radians from
/// vertical and are never wrapped; only their sine and cosine are consumed
/// downstream.
///
/// The two vectors are length-checked at construction so the per-step hot path
/// never has to revalidate them against each other.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PendulumState {
    pub(crate) theta: Vec<f64>,
    pub(crate) theta_dot: Vec<f64>,
}

impl PendulumState {
    pub fn new(theta: Vec<f64>, theta_dot: Vec<f64>) -> Result<Self, DynamicsError> {
        if theta.is_empty() {
            return Err(DynamicsError::EmptyState);
        }
        if theta.len() != theta_dot.len() {
            return Err(DynamicsError::StateLengthMismatch {
                angles: theta.len(),
                velocities: theta_dot.len(),
            });
        }
        Ok(Self { theta, theta_dot })
    }

    /// A state with the given pose and every joint at rest.
    pub fn at_rest(theta: Vec<f64>) -> Result<Self, DynamicsError> {
        let theta_dot = vec![0.0; theta.len()];
        Self::new(theta, theta_dot)
    }

    pub fn theta(&self) -> &[f64] {
        &self.theta
    }

    pub fn theta_dot(&self) -> &[f64] {
        &self.theta_dot
    }

    pub fn len(&self) -> usize {
        self.theta.len()
    }

    pub fn is_empty(&self) -> bool {
        self.theta.is_empty()
    }

    /// Overwrites the angle of joint `index`.
    ///
    /// Callers repositioning a joint between ticks must also call
    /// [`zero_velocities`](Self::zero_velocities); the pair is equivalent to
    /// re-initializing from a new pose.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set_angle(&mut self, index: usize, angle: f64) {
        self.theta[index] = angle;
    }

    pub fn zero_velocities(&mut self) {
        self.theta_dot.fill(0.0);
    }
}

impl AddAssign<&Self> for PendulumState {
    /// Element-wise addition used by the integrator's stage algebra.
    ///
    /// # Panics
    ///
    /// Panics if the states do not have the same number of joints.
    fn add_assign(&mut self, rhs: &Self) {
        if self.theta.len() != rhs.theta.len() {
            panic!("pendulum states do not have the same number of joints")
        }
        for i in 0..self.theta.len() {
            self.theta[i] += rhs.theta[i];
            self.theta_dot[i] += rhs.theta_dot[i];
        }
    }
}

impl MulAssign<f64> for PendulumState {
    fn mul_assign(&mut self, rhs: f64) {
        for i in 0..self.theta.len() {
            self.theta[i] *= rhs;
            self.theta_dot[i] *= rhs;
        }
    }
}
