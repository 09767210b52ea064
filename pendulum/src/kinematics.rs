use nalgebra::Vector2;

use dynamics::{PendulumParameters, PendulumState};

/// Forward kinematics: the Cartesian position of each point mass.
///
/// The pivot is the origin, x points sideways and y points down along the
/// hanging direction, so a chain at all-zero angles lies along +y. This is
/// plain data for a rendering layer; scaling to screen coordinates is the
/// consumer's concern.
///
/// # Panics
///
/// Panics if the state and parameters disagree on the number of links.
pub fn joint_positions(params: &PendulumParameters, state: &PendulumState) -> Vec<Vector2<f64>> {
    if params.len() != state.len() {
        panic!("state and parameters do not have the same number of links")
    }

    let mut positions = Vec::with_capacity(params.len());
    let mut x = 0.0;
    let mut y = 0.0;
    for (link, &th) in params.links().iter().zip(state.theta()) {
        x += link.length() * th.sin();
        y += link.length() * th.cos();
        positions.push(Vector2::new(x, y));
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn hanging_chain_lies_along_y() {
        let params = PendulumParameters::uniform(3, 1.0, 0.5, 9.81).unwrap();
        let state = PendulumState::at_rest(vec![0.0; 3]).unwrap();
        let positions = joint_positions(&params, &state);
        for (i, p) in positions.iter().enumerate() {
            assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(p.y, 0.5 * (i + 1) as f64, epsilon = 1e-12);
        }
    }

    #[test]
    fn horizontal_chain_lies_along_x() {
        let params = PendulumParameters::uniform(2, 1.0, 1.0, 9.81).unwrap();
        let state = PendulumState::at_rest(vec![FRAC_PI_2, FRAC_PI_2]).unwrap();
        let positions = joint_positions(&params, &state);
        assert_abs_diff_eq!(positions[0].x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(positions[0].y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(positions[1].x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(positions[1].y, 0.0, epsilon = 1e-12);
    }
}
