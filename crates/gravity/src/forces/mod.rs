//! Force models for N-body simulations
//!
//! This module provides the `ForceModel` trait and the direct-summation
//! Newtonian gravity used by the simulation.

use crate::body::Body;
use crate::kinematics::KinematicState;
use nalgebra::Vector2;

pub mod gravity;

#[cfg(test)]
mod gravity_test;

pub use gravity::DirectGravity;

/// Gravity constant of the toy simulation space
pub const DEFAULT_G: f64 = 1.0e4;

/// Squared separation below which two bodies exert no force on each other
pub const DEFAULT_EPSILON: f64 = 1.0e-10;

/// A source of acceleration on bodies in an N-body system
///
/// The subject is evaluated at a *candidate* state, which the integrator may
/// not have committed yet; every other body is read at its stored state.
///
/// # Examples
///
/// ```
/// use gravity::body::{Body, BodyId, Role};
/// use gravity::forces::{DirectGravity, ForceModel};
/// use gravity::kinematics::KinematicState;
///
/// let mut a = Body::from_mass(Role::Regular, KinematicState::new(0.0, 0.0, 0.0, 0.0), 1.0, 0.001);
/// let mut b = Body::from_mass(Role::Regular, KinematicState::new(10.0, 0.0, 0.0, 0.0), 1.0, 0.001);
/// a.id = BodyId(0);
/// b.id = BodyId(1);
/// let bodies = [a, b];
///
/// let gravity = DirectGravity::new(1.0);
/// let accel = gravity.acceleration(&bodies[0], &bodies[0].state, 0.0, &bodies);
///
/// // Pulled toward b
/// assert!(accel.x > 0.0);
/// ```
pub trait ForceModel: Send + Sync {
    /// Compute acceleration on `subject` if it were at `candidate` at time `t`
    ///
    /// # Arguments
    ///
    /// * `subject` - The body being accelerated; excluded from the sum by id
    /// * `candidate` - State to evaluate the subject at
    /// * `t` - Simulation time
    /// * `bodies` - Every body in the world, live or merged
    fn acceleration(
        &self,
        subject: &Body,
        candidate: &KinematicState,
        t: f64,
        bodies: &[Body],
    ) -> Vector2<f64>;

    /// Compute potential energy of the live bodies (optional)
    ///
    /// Default implementation returns 0.0.
    fn potential_energy(&self, _bodies: &[Body]) -> f64 {
        0.0
    }
}
