use approx::assert_relative_eq;
use nalgebra::{Point2, Vector2};

use crate::forces::gravity::{DirectGravity, circular_speed};
use crate::forces::{DEFAULT_EPSILON, ForceModel};
use crate::kinematics::KinematicState;
use crate::world::World;

fn rest(x: f64, y: f64) -> KinematicState {
    KinematicState::new(x, y, 0.0, 0.0)
}

#[test]
fn test_isolated_body_feels_nothing() {
    let mut world = World::new(0.001, 1.0e4).unwrap();
    world.add_body(5.0, rest(10.0, 10.0)).unwrap();

    let gravity = DirectGravity::new(1.0e4);
    let subject = &world.bodies[0];

    for candidate in [rest(10.0, 10.0), rest(-300.0, 42.0), rest(1e6, -1e6)] {
        let accel = gravity.acceleration(subject, &candidate, 0.0, &world.bodies);
        assert_eq!(accel, Vector2::zeros());
    }
}

#[test]
fn test_acceleration_magnitude() {
    let mut world = World::new(0.001, 2.0).unwrap();
    world.add_body(1.0, rest(0.0, 0.0)).unwrap();
    world.add_body(8.0, rest(4.0, 0.0)).unwrap();

    let gravity = DirectGravity::new(2.0);
    let a0 = gravity.acceleration(&world.bodies[0], &world.bodies[0].state, 0.0, &world.bodies);
    let a1 = gravity.acceleration(&world.bodies[1], &world.bodies[1].state, 0.0, &world.bodies);

    // a = G * m_other / d²
    assert_relative_eq!(a0.x, 2.0 * 8.0 / 16.0, max_relative = 1e-12);
    assert_relative_eq!(a1.x, -2.0 * 1.0 / 16.0, max_relative = 1e-12);
    assert_eq!(a0.y, 0.0);

    // Newton's third law on the forces
    assert_relative_eq!(a0.x * 1.0, -a1.x * 8.0, max_relative = 1e-12);
}

#[test]
fn test_superposition() {
    let mut world = World::new(0.001, 1.0).unwrap();
    world.add_body(1.0, rest(0.0, 0.0)).unwrap();
    world.add_body(3.0, rest(10.0, 0.0)).unwrap();
    world.add_body(3.0, rest(-10.0, 0.0)).unwrap();
    world.add_body(2.0, rest(0.0, 5.0)).unwrap();

    let gravity = DirectGravity::new(1.0);
    let accel = gravity.acceleration(&world.bodies[0], &world.bodies[0].state, 0.0, &world.bodies);

    // Opposite equal pulls cancel; only the body above remains
    assert!(accel.x.abs() < 1e-15);
    assert_relative_eq!(accel.y, 2.0 / 25.0, max_relative = 1e-12);
}

#[test]
fn test_uses_candidate_position_not_stored_one() {
    let mut world = World::new(0.001, 1.0).unwrap();
    world.add_body(1.0, rest(0.0, 0.0)).unwrap();
    world.add_body(1.0, rest(10.0, 0.0)).unwrap();

    let gravity = DirectGravity::new(1.0);
    let candidate = rest(20.0, 0.0);
    let accel = gravity.acceleration(&world.bodies[0], &candidate, 0.0, &world.bodies);

    // Candidate is past the other body, so the pull flips sign
    assert_relative_eq!(accel.x, -1.0 / 100.0, max_relative = 1e-12);
}

#[test]
fn test_no_self_interaction() {
    let mut world = World::new(0.001, 1.0).unwrap();
    world.add_body(1.0e6, rest(0.0, 0.0)).unwrap();
    world.add_body(1.0, rest(100.0, 0.0)).unwrap();

    let gravity = DirectGravity::new(1.0);

    // Evaluating body 0 away from its own stored position must not see itself
    let candidate = rest(0.5, 0.0);
    let accel = gravity.acceleration(&world.bodies[0], &candidate, 0.0, &world.bodies);

    assert!(accel.x > 0.0);
    assert_relative_eq!(accel.x, 1.0 / (99.5 * 99.5), max_relative = 1e-12);
}

#[test]
fn test_merged_bodies_exert_no_force() {
    let mut world = World::new(0.001, 1.0).unwrap();
    world.add_body(1.0, rest(0.0, 0.0)).unwrap();
    world.add_body(50.0, rest(10.0, 0.0)).unwrap();
    world.bodies[1].alive = false;

    let gravity = DirectGravity::new(1.0);
    let accel = gravity.acceleration(&world.bodies[0], &world.bodies[0].state, 0.0, &world.bodies);

    assert_eq!(accel, Vector2::zeros());
}

#[test]
fn test_coincident_bodies_clamped_to_zero() {
    let mut world = World::new(0.001, 1.0e4).unwrap();
    world.add_body(1.0, rest(5.0, 5.0)).unwrap();
    world.add_body(1.0, rest(5.0, 5.0)).unwrap();

    let gravity = DirectGravity::new(1.0e4);
    let accel = gravity.acceleration(&world.bodies[0], &world.bodies[0].state, 0.0, &world.bodies);

    assert_eq!(accel, Vector2::zeros());

    // Just inside the clamp radius as well
    let near = KinematicState::at_rest(Point2::new(5.0 + DEFAULT_EPSILON.sqrt() * 0.5, 5.0));
    let accel = gravity.acceleration(&world.bodies[0], &near, 0.0, &world.bodies);
    assert_eq!(accel, Vector2::zeros());
}

#[test]
fn test_time_does_not_matter() {
    let mut world = World::new(0.001, 1.0).unwrap();
    world.add_body(1.0, rest(0.0, 0.0)).unwrap();
    world.add_body(4.0, rest(3.0, 4.0)).unwrap();

    let gravity = DirectGravity::new(1.0);
    let subject = &world.bodies[0];
    let early = gravity.acceleration(subject, &subject.state, 0.0, &world.bodies);
    let late = gravity.acceleration(subject, &subject.state, 1.0e6, &world.bodies);

    assert_eq!(early, late);
}

#[test]
fn test_potential_energy_pair() {
    let mut world = World::new(0.001, 2.0).unwrap();
    world.add_body(3.0, rest(0.0, 0.0)).unwrap();
    world.add_body(5.0, rest(0.0, 10.0)).unwrap();

    let pe = DirectGravity::new(2.0).potential_energy(&world.bodies);

    assert_relative_eq!(pe, -2.0 * 3.0 * 5.0 / 10.0, max_relative = 1e-12);
}

#[test]
fn test_potential_energy_skips_merged() {
    let mut world = World::new(0.001, 1.0).unwrap();
    world.add_body(1.0, rest(0.0, 0.0)).unwrap();
    world.add_body(1.0, rest(1.0, 0.0)).unwrap();
    world.add_body(1.0, rest(2.0, 0.0)).unwrap();

    let gravity = DirectGravity::new(1.0);
    let pe_all = gravity.potential_energy(&world.bodies);

    world.bodies[2].alive = false;
    let pe_two = gravity.potential_energy(&world.bodies);

    assert_relative_eq!(pe_all, -(1.0 + 0.5 + 1.0), max_relative = 1e-12);
    assert_relative_eq!(pe_two, -1.0, max_relative = 1e-12);
}

#[test]
fn test_circular_speed() {
    // v² / r = G M / r²
    let v = circular_speed(1.0e4, 14.137, 100.0);
    assert_relative_eq!(v * v / 100.0, 1.0e4 * 14.137 / 1.0e4, max_relative = 1e-12);
}
