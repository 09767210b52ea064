use std::f64::consts::FRAC_PI_2;

use pendulum::{PendulumParameters, PendulumState, Simulation, kinematics};

fn main() {
    let params = PendulumParameters::uniform(2, 1.0, 1.0, 9.81).unwrap();
    let initial = PendulumState::at_rest(vec![FRAC_PI_2, FRAC_PI_2]).unwrap();
    let mut sim = Simulation::new(params, initial, 0.01).unwrap();

    println!(
        "{:>8}  {:>10}  {:>10}  {:>10}  {:>10}",
        "t", "theta0", "theta1", "tip x", "tip y"
    );
    for step in 0..=2_000 {
        if step % 50 == 0 {
            let tip = kinematics::joint_positions(sim.params(), sim.state())
                .pop()
                .unwrap();
            println!(
                "{:8.2}  {:10.6}  {:10.6}  {:10.6}  {:10.6}",
                sim.elapsed(),
                sim.state().theta()[0],
                sim.state().theta()[1],
                tip.x,
                tip.y
            );
        }
        sim.step().unwrap();
    }
}
