//! Single planet around the anchor
//!
//! Integrates one light planet on a circular orbit with RK4 and with Euler
//! and prints how far each drifts from the starting radius.
//!
//! Run with: cargo run --package gravity --example simple_orbit

use std::f64::consts::PI;

use gravity::forces::gravity::circular_speed;
use gravity::integrator::{Euler, Integrator, RungeKutta4};
use gravity::kinematics::KinematicState;
use gravity::error::ConfigError;
use gravity::world::World;
use nalgebra::Point2;

const G: f64 = 1.0e4;
const ANCHOR_MASS: f64 = 14.137;
const RADIUS: f64 = 200.0;
const STEPS_PER_ORBIT: usize = 500;

fn orbit_world() -> Result<World, ConfigError> {
    let mut world = World::new(0.001, G)?;
    world.add_anchor(ANCHOR_MASS, Point2::new(0.0, 0.0))?;
    let v = circular_speed(G, ANCHOR_MASS, RADIUS);
    world.add_body(1.0e-6, KinematicState::new(RADIUS, 0.0, 0.0, v))?;
    Ok(world)
}

fn run(name: &str, integrator: &dyn Integrator, orbits: usize) -> Result<(), ConfigError> {
    let mut world = orbit_world()?;
    let v = circular_speed(G, ANCHOR_MASS, RADIUS);
    let period = 2.0 * PI * RADIUS / v;
    let dt = period / STEPS_PER_ORBIT as f64;
    let initial_energy = world.kinetic_energy() + world.potential_energy();

    println!("\n{name}: dt = {dt:.4}, period = {period:.2}");

    for orbit in 1..=orbits {
        for _ in 0..STEPS_PER_ORBIT {
            world.step_with(integrator, world.time, dt);
        }

        let planet = &world.bodies[1];
        let r = planet.state.position.coords.magnitude();
        let energy = world.kinetic_energy() + world.potential_energy();
        println!(
            "  orbit {}: r = {:.4}, Δr = {:.2e}, ΔE = {:.2e}",
            orbit,
            r,
            ((r - RADIUS) / RADIUS).abs(),
            ((energy - initial_energy) / initial_energy).abs()
        );
    }
    Ok(())
}

fn main() -> Result<(), ConfigError> {
    println!("Circular orbit: RK4 vs Euler");
    println!("{}", "=".repeat(60));
    println!("Anchor mass {ANCHOR_MASS}, orbit radius {RADIUS}, G = {G:e}");

    run("RungeKutta4", &RungeKutta4, 5)?;
    run("Euler", &Euler, 5)
}
