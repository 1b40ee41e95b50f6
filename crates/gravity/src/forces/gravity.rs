//! Direct N-body gravity (O(N²) implementation)

use crate::body::Body;
use crate::forces::{DEFAULT_EPSILON, DEFAULT_G, ForceModel};
use crate::kinematics::KinematicState;
use nalgebra::Vector2;

/// Direct O(N²) gravitational force computation
///
/// Sums the inverse-square pull of every other live body. Pairs closer than
/// `sqrt(epsilon)` contribute nothing instead of blowing up.
///
/// # Examples
///
/// ```
/// use gravity::forces::DirectGravity;
///
/// let gravity = DirectGravity::new(1.0e4);
/// assert_eq!(gravity.g, 1.0e4);
///
/// let clamped = DirectGravity::new(1.0).with_epsilon(1e-6);
/// assert_eq!(clamped.epsilon, 1e-6);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DirectGravity {
    /// Gravitational constant
    pub g: f64,
    /// Squared-distance threshold of the zero-force clamp
    pub epsilon: f64,
}

impl DirectGravity {
    pub fn new(g: f64) -> Self {
        Self {
            g,
            epsilon: DEFAULT_EPSILON,
        }
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }
}

impl Default for DirectGravity {
    fn default() -> Self {
        Self::new(DEFAULT_G)
    }
}

impl ForceModel for DirectGravity {
    fn acceleration(
        &self,
        subject: &Body,
        candidate: &KinematicState,
        _t: f64,
        bodies: &[Body],
    ) -> Vector2<f64> {
        bodies
            .iter()
            .filter(|other| other.alive && other.id != subject.id)
            .filter_map(|other| {
                let dr = other.state.position - candidate.position;
                let dsq = dr.magnitude_squared();
                if dsq <= self.epsilon {
                    return None;
                }
                let force = self.g * subject.mass * other.mass / dsq;
                Some(dr * (force / subject.mass / dsq.sqrt()))
            })
            .fold(Vector2::zeros(), |acc, a| acc + a)
    }

    fn potential_energy(&self, bodies: &[Body]) -> f64 {
        // Each live pair counted once
        bodies
            .iter()
            .enumerate()
            .filter(|(_, a)| a.alive)
            .flat_map(|(i, a)| {
                bodies[i + 1..]
                    .iter()
                    .filter(|b| b.alive)
                    .map(move |b| (a, b))
            })
            .filter_map(|(a, b)| {
                let dsq = (a.state.position - b.state.position).magnitude_squared();
                (dsq > self.epsilon).then(|| -self.g * a.mass * b.mass / dsq.sqrt())
            })
            .sum()
    }
}

/// Speed of a circular orbit of radius `r` around a fixed `central_mass`
///
/// # Examples
///
/// ```
/// use gravity::forces::gravity::circular_speed;
///
/// let v = circular_speed(1.0, 4.0, 1.0);
/// assert!((v - 2.0).abs() < 1e-12);
/// ```
pub fn circular_speed(g: f64, central_mass: f64, r: f64) -> f64 {
    (g * central_mass / r).sqrt()
}
