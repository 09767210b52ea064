use nalgebra::{DMatrix, DVector};

use diffeq::OdeModel;

use crate::{DynamicsError, PendulumParameters, PendulumState};

/// Equations of motion for the N-link chain, derived from the system
/// Lagrangian with the joint angles as generalized coordinates.
///
/// Each evaluation assembles the symmetric inertia matrix `A` and generalized
/// force vector `b` for the current angular state and solves `A * thdd = b`
/// for the angular accelerations. The solve uses LU decomposition with partial
/// pivoting; for positive masses and lengths `A` is positive-definite and the
/// factorization cannot fail.
#[derive(Clone, Debug)]
pub struct NPendulum {
    params: PendulumParameters,
}

impl NPendulum {
    pub fn new(params: PendulumParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &PendulumParameters {
        &self.params
    }

    /// Angular accelerations for the given angles and angular velocities.
    ///
    /// Pure function of its inputs. `theta` and `theta_dot` must both have one
    /// entry per link.
    pub fn accelerations(
        &self,
        theta: &[f64],
        theta_dot: &[f64],
    ) -> Result<DVector<f64>, DynamicsError> {
        let links = self.params.links();
        let n = links.len();
        if theta.len() != theta_dot.len() {
            return Err(DynamicsError::StateLengthMismatch {
                angles: theta.len(),
                velocities: theta_dot.len(),
            });
        }
        if theta.len() != n {
            return Err(DynamicsError::DimensionMismatch {
                state: theta.len(),
                links: n,
            });
        }

        // tail_mass[i] = total mass of links i..N-1; the coupled mass felt
        // between joints j and k is tail_mass[max(j, k)].
        let mut tail_mass = vec![0.0; n + 1];
        for i in (0..n).rev() {
            tail_mass[i] = tail_mass[i + 1] + links[i].mass();
        }

        let g = self.params.gravity();
        let mut a = DMatrix::zeros(n, n);
        let mut b = DVector::zeros(n);

        for j in 0..n {
            let lj = links[j].length();
            // effective inertia at joint j from all outboard masses
            a[(j, j)] = tail_mass[j] * lj * lj;
            // gravitational torque; the sum over outboard links collapses to
            // the tail mass
            let mut rhs = -g * lj * theta[j].sin() * tail_mass[j];

            for k in 0..n {
                if k == j {
                    continue;
                }
                let lk = links[k].length();
                let m = tail_mass[j.max(k)];
                let djk = theta[j] - theta[k];
                a[(j, k)] = m * lj * lk * djk.cos();
                rhs -= m
                    * lj
                    * lk
                    * (djk.sin() * theta_dot[j] * theta_dot[k]
                        + (-djk).sin() * (theta_dot[j] - theta_dot[k]) * theta_dot[k]);
            }
            b[j] = rhs;
        }

        a.lu()
            .solve(&b)
            .ok_or(DynamicsError::SingularInertiaMatrix)
    }
}

impl OdeModel for NPendulum {
    type State = PendulumState;
    type Error = DynamicsError;

    /// First-order form of the equations of motion: the angle derivatives are
    /// the angular velocities, the velocity derivatives come from the solve.
    fn f(
        &mut self,
        _t: f64,
        state: &PendulumState,
        derivative: &mut PendulumState,
    ) -> Result<(), DynamicsError> {
        let thdd = self.accelerations(&state.theta, &state.theta_dot)?;
        derivative.theta.clone_from(&state.theta_dot);
        derivative.theta_dot.clear();
        derivative.theta_dot.extend_from_slice(thdd.as_slice());
        Ok(())
    }
}
