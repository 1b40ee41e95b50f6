//! Kinematic state of a single body and its time derivative
//!
//! These are the plain values the integrators work with. A body owns one
//! [`KinematicState`]; a [`Derivative`] is what a force model and the state's
//! own velocity say about how that state is changing.

use nalgebra::{Point2, Vector2};
use std::ops::{Add, Mul};

/// Position and velocity of one body at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicState {
    pub position: Point2<f64>,
    pub velocity: Vector2<f64>,
}

impl KinematicState {
    /// Creates a state from `(x, y)` and `(vx, vy)`
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity::kinematics::KinematicState;
    ///
    /// let state = KinematicState::new(150.0, 300.0, 0.0, 2.0);
    /// assert_eq!(state.position.y, 300.0);
    /// assert_eq!(state.velocity.y, 2.0);
    /// ```
    pub fn new(x: f64, y: f64, vx: f64, vy: f64) -> Self {
        Self {
            position: Point2::new(x, y),
            velocity: Vector2::new(vx, vy),
        }
    }

    /// A state at `position` with zero velocity
    pub fn at_rest(position: Point2<f64>) -> Self {
        Self {
            position,
            velocity: Vector2::zeros(),
        }
    }

    /// Follows `derivative` for a time `dt` (one explicit Euler sub-step)
    ///
    /// All four components move: position by `(dx, dy) * dt`, velocity by
    /// `(dvx, dvy) * dt`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity::kinematics::{Derivative, KinematicState};
    /// use nalgebra::Vector2;
    ///
    /// let state = KinematicState::new(0.0, 0.0, 1.0, 0.0);
    /// let d = Derivative::new(Vector2::new(1.0, 0.0), Vector2::new(0.0, 2.0));
    ///
    /// let next = state.advanced(&d, 0.5);
    /// assert_eq!(next, KinematicState::new(0.5, 0.0, 1.0, 1.0));
    /// ```
    pub fn advanced(&self, derivative: &Derivative, dt: f64) -> Self {
        Self {
            position: self.position + derivative.velocity * dt,
            velocity: self.velocity + derivative.acceleration * dt,
        }
    }

    /// Whether every component is a finite number
    pub fn is_finite(&self) -> bool {
        self.position.iter().all(|c| c.is_finite()) && self.velocity.iter().all(|c| c.is_finite())
    }
}

/// Rate of change of a [`KinematicState`]
///
/// `velocity` is `(dx, dy)` and always equals the velocity of the state the
/// derivative was taken at; `acceleration` is `(dvx, dvy)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derivative {
    pub velocity: Vector2<f64>,
    pub acceleration: Vector2<f64>,
}

impl Derivative {
    pub fn new(velocity: Vector2<f64>, acceleration: Vector2<f64>) -> Self {
        Self {
            velocity,
            acceleration,
        }
    }

    pub fn zero() -> Self {
        Self::new(Vector2::zeros(), Vector2::zeros())
    }

    /// Classical Runge-Kutta weighting `(k1 + 2 k2 + 2 k3 + k4) / 6`
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity::kinematics::Derivative;
    /// use nalgebra::Vector2;
    ///
    /// let k = |v: f64| Derivative::new(Vector2::new(v, 0.0), Vector2::new(0.0, v));
    /// let avg = Derivative::rk4_average(&k(1.0), &k(2.0), &k(3.0), &k(4.0));
    ///
    /// // (1 + 4 + 6 + 4) / 6 = 2.5
    /// assert!((avg.velocity.x - 2.5).abs() < 1e-12);
    /// assert!((avg.acceleration.y - 2.5).abs() < 1e-12);
    /// ```
    pub fn rk4_average(k1: &Self, k2: &Self, k3: &Self, k4: &Self) -> Self {
        (*k1 + (*k2 + *k3) * 2.0 + *k4) * (1.0 / 6.0)
    }
}

impl Add for Derivative {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.velocity + rhs.velocity,
            self.acceleration + rhs.acceleration,
        )
    }
}

impl Mul<f64> for Derivative {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.velocity * rhs, self.acceleration * rhs)
    }
}
