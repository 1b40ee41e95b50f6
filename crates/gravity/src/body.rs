use nalgebra::{Point2, Vector2};
use serde::Serialize;
use std::f64::consts::PI;

use crate::kinematics::KinematicState;

/// Stable index of a body in its [`World`](crate::world::World)
///
/// Bodies are never removed, so `world.bodies[id.0].id == id` holds for the
/// lifetime of the world.
/// Serializes as the bare index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BodyId(pub usize);

/// What part a body plays in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Free planet: integrated, merges with other planets
    Regular,
    /// The pinned central mass: never moves, absorbs without growing
    Anchor,
}

#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub id: BodyId,
    pub role: Role,
    pub state: KinematicState,
    pub mass: f64,   // density * 4/3 π r³
    pub radius: f64, // collision radius
    pub alive: bool, // false once merged into another body
}

/// Mass of a sphere of constant `density`
///
/// # Examples
///
/// ```
/// use gravity::body::mass_from_radius;
///
/// let m = mass_from_radius(1.5, 0.001);
/// assert!((m - 0.014137).abs() < 1e-6);
/// ```
pub fn mass_from_radius(radius: f64, density: f64) -> f64 {
    density * 4.0 * PI * radius.powi(3) / 3.0
}

/// Radius of a sphere of constant `density`, the inverse of [`mass_from_radius`]
pub fn radius_from_mass(mass: f64, density: f64) -> f64 {
    (3.0 * mass / (density * 4.0 * PI)).cbrt()
}

impl Body {
    /// Creates a live body whose mass follows from `radius` and `density`
    ///
    /// The id is a placeholder until the body is inserted into a world.
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity::body::{Body, Role};
    /// use gravity::kinematics::KinematicState;
    ///
    /// let body = Body::from_radius(Role::Regular, KinematicState::new(0.0, 0.0, 0.0, 0.0), 1.5, 0.001);
    /// assert!(body.alive);
    /// assert!(body.mass > 0.0);
    /// ```
    pub fn from_radius(role: Role, state: KinematicState, radius: f64, density: f64) -> Self {
        Body {
            id: BodyId(0),
            role,
            state,
            mass: mass_from_radius(radius, density),
            radius,
            alive: true,
        }
    }

    /// Creates a live body whose radius follows from `mass` and `density`
    pub fn from_mass(role: Role, state: KinematicState, mass: f64, density: f64) -> Self {
        Body {
            id: BodyId(0),
            role,
            state,
            mass,
            radius: radius_from_mass(mass, density),
            alive: true,
        }
    }

    pub fn set_mass_from_radius(&mut self, density: f64) {
        self.mass = mass_from_radius(self.radius, density);
    }

    pub fn set_radius_from_mass(&mut self, density: f64) {
        self.radius = radius_from_mass(self.mass, density);
    }

    pub fn position(&self) -> Point2<f64> {
        self.state.position
    }

    pub fn velocity(&self) -> Vector2<f64> {
        self.state.velocity
    }

    pub fn is_anchor(&self) -> bool {
        self.role == Role::Anchor
    }

    /// Live regular bodies are the only ones the integrator moves
    pub fn is_movable(&self) -> bool {
        self.alive && self.role == Role::Regular
    }

    pub fn momentum(&self) -> Vector2<f64> {
        self.velocity() * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity().magnitude_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.position() - other.position()).magnitude()
    }

    /// Contact test: centres no farther apart than the sum of the radii
    pub fn touches(&self, other: &Body) -> bool {
        self.distance_to(other) <= self.radius + other.radius
    }
}
