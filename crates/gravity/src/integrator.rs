//! Time integration for N-body systems
//!
//! The reference integrator is classical fourth-order Runge-Kutta. Each body
//! is advanced against a frozen copy of the world as it stood at the start of
//! the step, and all new states are committed together afterwards, so the
//! result does not depend on the order bodies are stored in.

use crate::body::Body;
use crate::forces::ForceModel;
use crate::kinematics::{Derivative, KinematicState};
use crate::world::World;

/// A time integrator for N-body systems
pub trait Integrator: Send + Sync {
    /// Compute where `subject` will be after `dt`
    ///
    /// # Arguments
    ///
    /// * `subject` - Body to advance; must be one of `bodies`
    /// * `bodies` - Every body in the world at its committed state
    /// * `t` - Time at the start of the step
    /// * `dt` - Timestep
    /// * `force` - Force model to compute accelerations
    fn advance(
        &self,
        subject: &Body,
        bodies: &[Body],
        t: f64,
        dt: f64,
        force: &dyn ForceModel,
    ) -> KinematicState;

    /// Advance every live regular body of the world by one timestep
    ///
    /// The anchor and merged bodies are left untouched. New states are
    /// computed from the pre-step body list and written back in one pass.
    fn step(&self, world: &mut World, t: f64, dt: f64) {
        let updates: Vec<(usize, KinematicState)> = world
            .bodies
            .iter()
            .enumerate()
            .filter(|(_, body)| body.is_movable())
            .map(|(i, body)| (i, self.advance(body, &world.bodies, t, dt, &world.gravity)))
            .collect();

        updates.into_iter().for_each(|(i, state)| {
            world.bodies[i].state = state;
        });
    }
}

/// Derivative of `subject`'s motion if it were at `state` at time `t`
pub fn derivative(
    subject: &Body,
    state: &KinematicState,
    t: f64,
    bodies: &[Body],
    force: &dyn ForceModel,
) -> Derivative {
    Derivative::new(
        state.velocity,
        force.acceleration(subject, state, t, bodies),
    )
}

/// Classical fourth-order Runge-Kutta integrator
///
/// Four derivative evaluations per body per step:
///
/// 1. k1 = D(x, t)
/// 2. k2 = D(x + k1 dt/2, t + dt/2)
/// 3. k3 = D(x + k2 dt/2, t + dt/2)
/// 4. k4 = D(x + k3 dt, t + dt)
///
/// then x += (k1 + 2 k2 + 2 k3 + k4) / 6 * dt.
///
/// # Examples
///
/// ```
/// use gravity::integrator::{Integrator, RungeKutta4};
/// use gravity::kinematics::KinematicState;
/// use gravity::world::World;
/// use nalgebra::Point2;
///
/// let mut world = World::new(0.001, 1.0).unwrap();
/// world.add_anchor(1000.0, Point2::new(0.0, 0.0)).unwrap();
/// world.add_body(1.0e-3, KinematicState::new(100.0, 0.0, 0.0, 3.0)).unwrap();
///
/// RungeKutta4.step(&mut world, 0.0, 1.0);
///
/// // Pulled toward the anchor
/// assert!(world.bodies[1].state.velocity.x < 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RungeKutta4;

impl Integrator for RungeKutta4 {
    fn advance(
        &self,
        subject: &Body,
        bodies: &[Body],
        t: f64,
        dt: f64,
        force: &dyn ForceModel,
    ) -> KinematicState {
        let half_dt = 0.5 * dt;
        let start = subject.state;

        let k1 = derivative(subject, &start, t, bodies, force);
        let k2 = derivative(subject, &start.advanced(&k1, half_dt), t + half_dt, bodies, force);
        let k3 = derivative(subject, &start.advanced(&k2, half_dt), t + half_dt, bodies, force);
        let k4 = derivative(subject, &start.advanced(&k3, dt), t + dt, bodies, force);

        start.advanced(&Derivative::rk4_average(&k1, &k2, &k3, &k4), dt)
    }
}

/// Simple Euler integrator (1st order, for comparison only)
///
/// Not used by [`World::step`]; tests compare its accuracy against [`RungeKutta4`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Euler;

impl Integrator for Euler {
    fn advance(
        &self,
        subject: &Body,
        bodies: &[Body],
        t: f64,
        dt: f64,
        force: &dyn ForceModel,
    ) -> KinematicState {
        let k = derivative(subject, &subject.state, t, bodies, force);
        subject.state.advanced(&k, dt)
    }
}
