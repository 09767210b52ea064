use dynamics::{PendulumParameters, PendulumState};

/// Mechanical energy of the chain at one instant.
#[derive(Clone, Copy, Debug, Default)]
pub struct Energy {
    pub kinetic: f64,
    pub potential: f64,
    pub total: f64,
}

/// Computes the kinetic and potential energy of the chain.
///
/// This is a diagnostic, independent of the equations of motion: it works from
/// the Cartesian velocity and depth of each mass, accumulated link by link
/// from the pivot. Potential energy is zero at the pivot height, with the
/// hanging direction negative, so a fully hanging chain has the most negative
/// potential.
///
/// # Panics
///
/// Panics if the state and parameters disagree on the number of links.
pub fn mechanical(params: &PendulumParameters, state: &PendulumState) -> Energy {
    if params.len() != state.len() {
        panic!("state and parameters do not have the same number of links")
    }

    let g = params.gravity();
    let mut vx = 0.0;
    let mut vy = 0.0;
    let mut depth = 0.0;
    let mut kinetic = 0.0;
    let mut potential = 0.0;

    for (i, link) in params.links().iter().enumerate() {
        let th = state.theta()[i];
        let thd = state.theta_dot()[i];
        let l = link.length();
        vx += l * thd * th.cos();
        vy += l * thd * th.sin();
        depth += l * th.cos();
        kinetic += 0.5 * link.mass() * (vx * vx + vy * vy);
        potential -= g * link.mass() * depth;
    }

    Energy {
        kinetic,
        potential,
        total: kinetic + potential,
    }
}
