//! Prints the kinetic, potential, and total energy of an N-link chain over a
//! long run. The total column should stay flat; its drift is the integrator's
//! truncation error.

use pendulum::{PendulumParameters, PendulumState, Simulation, energy};

fn main() {
    let n: usize = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(2);

    let params = PendulumParameters::uniform(n, 1.0, 1.0, 9.81).unwrap();
    let initial = PendulumState::at_rest(vec![1.0; n]).unwrap();
    let mut sim = Simulation::new(params, initial, 0.01).unwrap();

    println!("{:>8}  {:>12}  {:>12}  {:>12}", "t", "KE", "PE", "TE");
    for step in 0..=10_000 {
        if step % 100 == 0 {
            let e = energy::mechanical(sim.params(), sim.state());
            println!(
                "{:8.2}  {:12.8}  {:12.8}  {:12.8}",
                sim.elapsed(),
                e.kinetic,
                e.potential,
                e.total
            );
        }
        sim.step().unwrap();
    }
}
