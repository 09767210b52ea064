use std::error::Error;

use thiserror::Error;

use crate::{OdeModel, OdeState};

/// Errors produced while advancing an ODE by one step.
#[derive(Debug, Error)]
pub enum StepError<E: Error> {
    #[error("time step must be greater than zero, got {0}")]
    TimeStepNotPositive(f64),
    #[error(transparent)]
    Model(E),
}

/// Classical fourth-order Runge-Kutta solver with a fixed step size.
///
/// Stage buffers are allocated once from a template state and reused on every
/// step, so stepping performs no allocation for states whose `clone_from`
/// reuses storage. The solver keeps no state between calls beyond those
/// scratch buffers; the caller owns the trajectory.
pub struct Rk4<State: OdeState> {
    k1: State,
    k2: State,
    k3: State,
    k4: State,
    stage: State,
    y: State,
}

impl<State: OdeState> Rk4<State> {
    /// Constructs a solver whose buffers are sized from `template`.
    pub fn new(template: &State) -> Self {
        Self {
            k1: template.clone(),
            k2: template.clone(),
            k3: template.clone(),
            k4: template.clone(),
            stage: template.clone(),
            y: template.clone(),
        }
    }

    /// Advances `x` by one step of size `h`, writing the result into `y`.
    ///
    /// `x` is never modified. `y` is written only after all four model
    /// evaluations succeed, so a failing model leaves no partial output.
    pub fn step<M>(
        &mut self,
        model: &mut M,
        t: f64,
        h: f64,
        x: &State,
        y: &mut State,
    ) -> Result<(), StepError<M::Error>>
    where
        M: OdeModel<State = State>,
    {
        self.advance(model, t, h, x)?;
        y.clone_from(&self.y);
        Ok(())
    }

    /// Advances `x` by one step of size `h` in place.
    ///
    /// On failure `x` is left untouched.
    pub fn step_in_place<M>(
        &mut self,
        model: &mut M,
        t: f64,
        h: f64,
        x: &mut State,
    ) -> Result<(), StepError<M::Error>>
    where
        M: OdeModel<State = State>,
    {
        self.advance(model, t, h, x)?;
        x.clone_from(&self.y);
        Ok(())
    }

    /// Integrates from `x0` over `tspan` with fixed step `dt`, returning the
    /// sampled times and states (including the initial point).
    pub fn solve_fixed<M>(
        &mut self,
        model: &mut M,
        x0: &State,
        tspan: (f64, f64),
        dt: f64,
    ) -> Result<(Vec<f64>, Vec<State>), StepError<M::Error>>
    where
        M: OdeModel<State = State>,
    {
        if dt <= 0.0 {
            return Err(StepError::TimeStepNotPositive(dt));
        }

        let steps = ((tspan.1 - tspan.0) / dt).ceil() as usize;
        let mut time = Vec::with_capacity(steps + 1);
        let mut result = Vec::with_capacity(steps + 1);

        let mut x = x0.clone();
        let mut t = tspan.0;
        time.push(t);
        result.push(x.clone());

        for _ in 0..steps {
            self.step_in_place(model, t, dt, &mut x)?;
            t += dt;
            time.push(t);
            result.push(x.clone());
        }

        Ok((time, result))
    }

    // The four-stage tableau is hand-coded; each stage state is built in the
    // `stage` buffer as x + k_prev * c before the next model evaluation.
    fn advance<M>(
        &mut self,
        model: &mut M,
        t: f64,
        h: f64,
        x: &State,
    ) -> Result<(), StepError<M::Error>>
    where
        M: OdeModel<State = State>,
    {
        if h <= 0.0 {
            return Err(StepError::TimeStepNotPositive(h));
        }
        let half_h = h / 2.0;

        model.f(t, x, &mut self.k1).map_err(StepError::Model)?;

        self.stage.clone_from(&self.k1);
        self.stage *= half_h;
        self.stage += x;
        model
            .f(t + half_h, &self.stage, &mut self.k2)
            .map_err(StepError::Model)?;

        self.stage.clone_from(&self.k2);
        self.stage *= half_h;
        self.stage += x;
        model
            .f(t + half_h, &self.stage, &mut self.k3)
            .map_err(StepError::Model)?;

        self.stage.clone_from(&self.k3);
        self.stage *= h;
        self.stage += x;
        model
            .f(t + h, &self.stage, &mut self.k4)
            .map_err(StepError::Model)?;

        // y = x + (k1 + 2*k2 + 2*k3 + k4) * h / 6
        self.k2 *= 2.0;
        self.k3 *= 2.0;
        self.k1 += &self.k2;
        self.k1 += &self.k3;
        self.k1 += &self.k4;
        self.k1 *= h / 6.0;
        self.y.clone_from(x);
        self.y += &self.k1;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::convert::Infallible;
    use std::ops::{AddAssign, MulAssign};

    #[derive(Clone, Copy, Debug, Default, PartialEq)]
    struct State2([f64; 2]);

    impl AddAssign<&Self> for State2 {
        fn add_assign(&mut self, rhs: &Self) {
            self.0[0] += rhs.0[0];
            self.0[1] += rhs.0[1];
        }
    }

    impl MulAssign<f64> for State2 {
        fn mul_assign(&mut self, rhs: f64) {
            self.0[0] *= rhs;
            self.0[1] *= rhs;
        }
    }

    /// x' = -x, closed form x(t) = x0 * exp(-t).
    struct Decay;

    impl OdeModel for Decay {
        type State = State2;
        type Error = Infallible;

        fn f(&mut self, _t: f64, x: &State2, dx: &mut State2) -> Result<(), Infallible> {
            dx.0[0] = -x.0[0];
            dx.0[1] = 0.0;
            Ok(())
        }
    }

    /// Undamped unit oscillator, period 2*pi.
    struct Oscillator;

    impl OdeModel for Oscillator {
        type State = State2;
        type Error = Infallible;

        fn f(&mut self, _t: f64, x: &State2, dx: &mut State2) -> Result<(), Infallible> {
            dx.0[0] = x.0[1];
            dx.0[1] = -x.0[0];
            Ok(())
        }
    }

    #[derive(Debug, Error)]
    #[error("model failure")]
    struct Fail;

    struct AlwaysFails;

    impl OdeModel for AlwaysFails {
        type State = State2;
        type Error = Fail;

        fn f(&mut self, _t: f64, _x: &State2, _dx: &mut State2) -> Result<(), Fail> {
            Err(Fail)
        }
    }

    #[test]
    fn decay_matches_closed_form() {
        let x0 = State2([1.0, 0.0]);
        let mut solver = Rk4::new(&x0);
        let (time, states) = solver
            .solve_fixed(&mut Decay, &x0, (0.0, 1.0), 0.01)
            .unwrap();
        let last = states.last().unwrap();
        assert_abs_diff_eq!(last.0[0], (-time.last().unwrap()).exp(), epsilon = 1e-9);
    }

    #[test]
    fn oscillator_returns_after_one_period() {
        let x0 = State2([1.0, 0.0]);
        let mut solver = Rk4::new(&x0);
        let mut x = x0;
        let dt = 2.0 * std::f64::consts::PI / 10_000.0;
        for i in 0..10_000 {
            solver
                .step_in_place(&mut Oscillator, i as f64 * dt, dt, &mut x)
                .unwrap();
        }
        assert_abs_diff_eq!(x.0[0], 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(x.0[1], 0.0, epsilon = 1e-6);
    }

    #[test]
    fn rejects_non_positive_step() {
        let x0 = State2([1.0, 0.0]);
        let mut solver = Rk4::new(&x0);
        let mut x = x0;
        let err = solver.step_in_place(&mut Decay, 0.0, 0.0, &mut x).unwrap_err();
        assert!(matches!(err, StepError::TimeStepNotPositive(_)));
        let err = solver.step_in_place(&mut Decay, 0.0, -0.1, &mut x).unwrap_err();
        assert!(matches!(err, StepError::TimeStepNotPositive(_)));
    }

    #[test]
    fn failed_step_leaves_state_untouched() {
        let x0 = State2([0.25, -0.5]);
        let mut solver = Rk4::new(&x0);
        let mut x = x0;
        let err = solver
            .step_in_place(&mut AlwaysFails, 0.0, 0.01, &mut x)
            .unwrap_err();
        assert!(matches!(err, StepError::Model(_)));
        assert_eq!(x, x0);
    }

    #[test]
    fn steps_are_deterministic() {
        let x0 = State2([0.3, 1.7]);
        let mut solver = Rk4::new(&x0);
        let mut a = x0;
        let mut b = x0;
        solver.step_in_place(&mut Oscillator, 0.0, 0.02, &mut a).unwrap();
        solver.step_in_place(&mut Oscillator, 0.0, 0.02, &mut b).unwrap();
        assert_eq!(a.0[0].to_bits(), b.0[0].to_bits());
        assert_eq!(a.0[1].to_bits(), b.0[1].to_bits());
    }
}
