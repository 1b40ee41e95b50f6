//! Simulation configuration
//!
//! Every field has a default, so a partial YAML/JSON document (or none at
//! all) yields a runnable setup:
//!
//! ```yaml
//! body_count: 30
//! width: 900.0
//! height: 600.0
//! density: 0.001
//! gravity_constant: 10000.0
//! timestep: 1.0
//! seed: 42
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::forces::{DEFAULT_EPSILON, DEFAULT_G};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of regular (non-anchor) bodies
    pub body_count: usize,
    /// Width of the spawn region; the anchor sits at its centre
    pub width: f64,
    /// Height of the spawn region
    pub height: f64,
    /// Mass per unit volume shared by every body
    pub density: f64,
    /// Gravitational constant
    pub gravity_constant: f64,
    /// Fixed Δt per tick
    pub timestep: f64,
    /// Radius of freshly spawned regular bodies
    pub body_radius: f64,
    /// Initial velocity components are drawn from [-range, range]
    pub velocity_range: f64,
    /// Anchor mass as a multiple of a fresh regular body's mass
    pub anchor_mass_factor: f64,
    /// Squared distance under which gravity is clamped to zero
    pub epsilon: f64,
    /// Seed for the ChaCha RNG that places bodies
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            body_count: 30,
            width: 900.0,
            height: 600.0,
            density: 0.001,
            gravity_constant: DEFAULT_G,
            timestep: 1.0,
            body_radius: 1.5,
            velocity_range: 1.5,
            anchor_mass_factor: 1000.0,
            epsilon: DEFAULT_EPSILON,
            seed: 0,
        }
    }
}

pub(crate) fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

impl SimulationConfig {
    /// Check every field a world depends on
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity::config::SimulationConfig;
    /// use gravity::error::ConfigError;
    ///
    /// assert!(SimulationConfig::default().validate().is_ok());
    ///
    /// let empty = SimulationConfig { body_count: 0, ..Default::default() };
    /// assert_eq!(empty.validate(), Err(ConfigError::NoBodies));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.body_count == 0 {
            return Err(ConfigError::NoBodies);
        }
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("density", self.density)?;
        positive("gravity_constant", self.gravity_constant)?;
        positive("timestep", self.timestep)?;
        positive("body_radius", self.body_radius)?;
        positive("anchor_mass_factor", self.anchor_mass_factor)?;
        non_negative("velocity_range", self.velocity_range)?;
        non_negative("epsilon", self.epsilon)?;
        Ok(())
    }

    pub fn with_body_count(mut self, body_count: usize) -> Self {
        self.body_count = body_count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
