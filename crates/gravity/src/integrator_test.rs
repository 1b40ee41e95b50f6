use approx::assert_relative_eq;
use nalgebra::{Point2, Vector2};
use std::f64::consts::PI;

use crate::forces::gravity::circular_speed;
use crate::integrator::{Euler, Integrator, RungeKutta4};
use crate::kinematics::KinematicState;
use crate::world::World;

const G: f64 = 1.0;
const ANCHOR_MASS: f64 = 1000.0;
const ORBIT_RADIUS: f64 = 100.0;

/// A light planet on a circular orbit around a pinned anchor at the origin
fn make_orbit_world() -> World {
    let mut world = World::new(0.001, G).unwrap();
    world.add_anchor(ANCHOR_MASS, Point2::new(0.0, 0.0)).unwrap();

    let v_circular = circular_speed(G, ANCHOR_MASS, ORBIT_RADIUS);
    world
        .add_body(1.0e-3, KinematicState::new(ORBIT_RADIUS, 0.0, 0.0, v_circular))
        .unwrap();
    world
}

fn orbital_period() -> f64 {
    2.0 * PI * ORBIT_RADIUS / circular_speed(G, ANCHOR_MASS, ORBIT_RADIUS)
}

fn radius_error_after_one_orbit(integrator: &dyn Integrator, n_steps: usize) -> f64 {
    let mut world = make_orbit_world();
    let dt = orbital_period() / n_steps as f64;

    for i in 0..n_steps {
        integrator.step(&mut world, i as f64 * dt, dt);
    }

    let final_r = world.bodies[1].state.position.coords.magnitude();
    (final_r - ORBIT_RADIUS).abs() / ORBIT_RADIUS
}

#[test]
fn test_rk4_changes_position() {
    let mut world = make_orbit_world();
    let initial = world.bodies[1].state;

    RungeKutta4.step(&mut world, 0.0, 1.0);

    let moved = world.bodies[1].state;
    assert!((moved.position - initial.position).magnitude() > 0.0);
    assert!(moved.velocity.x < 0.0); // pulled toward the anchor
}

#[test]
fn test_rk4_circular_orbit() {
    let error = radius_error_after_one_orbit(&RungeKutta4, 1000);

    assert!(error < 1e-6, "Radius error: {:.2e}", error);
}

#[test]
fn test_rk4_beats_euler() {
    let rk4_error = radius_error_after_one_orbit(&RungeKutta4, 1000);
    let euler_error = radius_error_after_one_orbit(&Euler, 1000);

    // Euler spirals outward noticeably at this resolution
    assert!(euler_error > 1e-3, "Euler error: {:.2e}", euler_error);
    assert!(rk4_error * 1000.0 < euler_error);
}

#[test]
fn test_rk4_exact_for_free_motion() {
    let mut world = World::new(0.001, 1.0e4).unwrap();
    world.add_body(5.0, KinematicState::new(1.0, 2.0, 3.0, -4.0)).unwrap();

    for i in 0..10 {
        RungeKutta4.step(&mut world, i as f64 * 0.5, 0.5);
    }

    // No other body, so no force: not even from itself at sub-stage positions
    let state = world.bodies[0].state;
    assert_relative_eq!(state.position.x, 1.0 + 3.0 * 5.0, max_relative = 1e-12);
    assert_relative_eq!(state.position.y, 2.0 - 4.0 * 5.0, max_relative = 1e-12);
    assert_eq!(state.velocity, Vector2::new(3.0, -4.0));
}

#[test]
fn test_rk4_uniform_field() {
    // A planet very far from a heavy anchor sees an almost uniform field;
    // compare a single step against x + v dt + a dt² / 2
    let mut world = World::new(0.001, 1.0).unwrap();
    world.add_anchor(1.0e12, Point2::new(0.0, 0.0)).unwrap();
    world.add_body(1.0, KinematicState::new(1.0e6, 0.0, 0.0, 0.0)).unwrap();

    RungeKutta4.step(&mut world, 0.0, 1.0);

    let a = 1.0e12 / 1.0e12;
    let state = world.bodies[1].state;
    assert_relative_eq!(state.velocity.x, -a, max_relative = 1e-5);
    assert_relative_eq!(1.0e6 - state.position.x, 0.5 * a, max_relative = 1e-5);
}

#[test]
fn test_anchor_is_pinned() {
    let mut world = make_orbit_world();
    let anchor_before = world.bodies[0].state;

    for i in 0..100 {
        RungeKutta4.step(&mut world, i as f64, 1.0);
    }

    assert_eq!(world.bodies[0].state, anchor_before);
    assert_eq!(world.bodies[0].state.velocity, Vector2::zeros());
}

#[test]
fn test_merged_bodies_are_not_integrated() {
    let mut world = make_orbit_world();
    world.bodies[1].alive = false;
    let frozen = world.bodies[1].state;

    RungeKutta4.step(&mut world, 0.0, 1.0);
    Euler.step(&mut world, 1.0, 1.0);

    assert_eq!(world.bodies[1].state, frozen);
}

#[test]
fn test_step_is_independent_of_storage_order() {
    let states = [
        (2.0, KinematicState::new(0.0, 0.0, 0.1, 0.0)),
        (3.0, KinematicState::new(40.0, 5.0, 0.0, -0.2)),
        (1.0, KinematicState::new(-30.0, 20.0, 0.3, 0.1)),
    ];

    let mut forward = World::new(0.001, 10.0).unwrap();
    states.iter().for_each(|&(m, s)| {
        forward.add_body(m, s).unwrap();
    });
    let mut backward = World::new(0.001, 10.0).unwrap();
    states.iter().rev().for_each(|&(m, s)| {
        backward.add_body(m, s).unwrap();
    });

    for i in 0..5 {
        RungeKutta4.step(&mut forward, i as f64, 1.0);
        RungeKutta4.step(&mut backward, i as f64, 1.0);
    }

    for (i, j) in [(0, 2), (1, 1), (2, 0)] {
        let f = forward.bodies[i].state;
        let b = backward.bodies[j].state;
        assert_relative_eq!(f.position.x, b.position.x, max_relative = 1e-12);
        assert_relative_eq!(f.position.y, b.position.y, max_relative = 1e-12);
        assert_relative_eq!(f.velocity.x, b.velocity.x, max_relative = 1e-12);
        assert_relative_eq!(f.velocity.y, b.velocity.y, max_relative = 1e-12);
    }
}

#[test]
fn test_bodies_see_pre_step_positions() {
    // Two bodies pulling on each other symmetrically must stay symmetric
    let mut world = World::new(0.001, 1.0).unwrap();
    world.add_body(1.0, KinematicState::new(-10.0, 0.0, 0.0, 0.0)).unwrap();
    world.add_body(1.0, KinematicState::new(10.0, 0.0, 0.0, 0.0)).unwrap();

    for i in 0..20 {
        RungeKutta4.step(&mut world, i as f64, 1.0);
    }

    let a = world.bodies[0].state;
    let b = world.bodies[1].state;
    assert_eq!(a.position.x, -b.position.x);
    assert_eq!(a.velocity.x, -b.velocity.x);
    assert!(a.velocity.x > 0.0);
}
