use thiserror::Error;

use diffeq::{Rk4, StepError};
use dynamics::{DynamicsError, NPendulum, PendulumParameters, PendulumState};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Dynamics(#[from] DynamicsError),
    #[error(transparent)]
    Step(#[from] StepError<DynamicsError>),
}

/// Caller-side harness for a pendulum run: owns the current angular state and
/// advances it one fixed tick at a time.
///
/// The time step and the state/parameter dimensions are validated once at
/// construction. A failed tick leaves the stored state untouched and should be
/// treated as fatal to the run; the physical inputs would have to change for a
/// retry to behave differently.
pub struct Simulation {
    model: NPendulum,
    state: PendulumState,
    solver: Rk4<PendulumState>,
    dt: f64,
    step_count: u64,
}

impl Simulation {
    pub fn new(
        params: PendulumParameters,
        initial: PendulumState,
        dt: f64,
    ) -> Result<Self, Error> {
        if dt <= 0.0 {
            return Err(StepError::TimeStepNotPositive(dt).into());
        }
        if initial.len() != params.len() {
            return Err(DynamicsError::DimensionMismatch {
                state: initial.len(),
                links: params.len(),
            }
            .into());
        }
        let solver = Rk4::new(&initial);
        Ok(Self {
            model: NPendulum::new(params),
            state: initial,
            solver,
            dt,
            step_count: 0,
        })
    }

    /// Advances the simulation by one tick and returns the new state.
    pub fn step(&mut self) -> Result<&PendulumState, Error> {
        let t = self.elapsed();
        self.solver
            .step_in_place(&mut self.model, t, self.dt, &mut self.state)?;
        self.step_count += 1;
        Ok(&self.state)
    }

    /// Repositions joint `index` between ticks.
    ///
    /// Overriding a single angle while keeping the old velocities would be an
    /// unphysical combination, so this zeroes every angular velocity and
    /// resets the step counter: the run restarts from the new pose.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set_angle(&mut self, index: usize, angle: f64) {
        self.state.set_angle(index, angle);
        self.state.zero_velocities();
        self.step_count = 0;
    }

    pub fn state(&self) -> &PendulumState {
        &self.state
    }

    pub fn params(&self) -> &PendulumParameters {
        self.model.params()
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Simulated time since the last (re)initialization.
    pub fn elapsed(&self) -> f64 {
        self.step_count as f64 * self.dt
    }
}
