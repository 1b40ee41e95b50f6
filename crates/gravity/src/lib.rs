//! Two-dimensional gravity simulation with inelastic merging
//!
//! A [`World`](world::World) holds planets and one pinned anchor. Each step
//! integrates the planets with fourth-order Runge-Kutta under direct-sum
//! Newtonian gravity, then merges every pair that ended up in contact.
//!
//! ```
//! use gravity::config::SimulationConfig;
//! use gravity::world::World;
//!
//! let config = SimulationConfig::default().with_body_count(20).with_seed(3);
//! let mut world = World::generate(&config).unwrap();
//!
//! for _ in 0..10 {
//!     world.tick(config.timestep);
//! }
//!
//! for body in world.snapshot().filter(|b| b.alive) {
//!     assert!(body.x.is_finite() && body.y.is_finite());
//! }
//! ```

pub mod body;
pub mod collisions;
pub mod config;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod kinematics;
pub mod world;

#[cfg(test)]
mod integrator_test;
