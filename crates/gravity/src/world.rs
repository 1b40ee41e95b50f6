use log::{debug, info};
use nalgebra::{Point2, Vector2};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use serde::Serialize;

use crate::body::{Body, BodyId, Role, mass_from_radius};
use crate::collisions::{CollisionEvent, absorb_initial_overlaps, resolve_collisions};
use crate::config::{SimulationConfig, non_negative, positive};
use crate::error::ConfigError;
use crate::forces::{DirectGravity, ForceModel};
use crate::integrator::{Integrator, RungeKutta4};
use crate::kinematics::KinematicState;

/// Designated start of the lone planet in a one-body world
const SOLO_PLANET: (f64, f64, f64, f64) = (150.0, 300.0, 0.0, 2.0);

/// Complete state of the simulation at a given time
///
/// Owns every body ever created. Merged bodies stay in `bodies` with
/// `alive == false` so that `BodyId`s remain valid indices.
#[derive(Debug, Clone)]
pub struct World {
    /// Current simulation time
    pub time: f64,
    /// Body arena, indexed by `BodyId`
    pub bodies: Vec<Body>,
    /// Density shared by every body (links mass and radius)
    pub density: f64,
    /// Force law used by the integrator
    pub gravity: DirectGravity,
    /// Mass swallowed by the anchor, which does not grow
    anchor_absorbed_mass: f64,
}

/// What a renderer needs to draw one body
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BodySnapshot {
    pub id: BodyId,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub alive: bool,
    pub anchor: bool,
}

impl From<&Body> for BodySnapshot {
    fn from(body: &Body) -> Self {
        Self {
            id: body.id,
            x: body.position().x,
            y: body.position().y,
            radius: body.radius,
            alive: body.alive,
            anchor: body.is_anchor(),
        }
    }
}

impl World {
    /// Creates an empty world
    ///
    /// # Arguments
    ///
    /// * `density` - Mass per unit volume for every body
    /// * `g` - Gravitational constant
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] unless both values are positive and finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity::world::World;
    ///
    /// let world = World::new(0.001, 1.0e4).unwrap();
    /// assert_eq!(world.body_count(), 0);
    /// assert_eq!(world.time, 0.0);
    ///
    /// assert!(World::new(0.0, 1.0e4).is_err());
    /// ```
    pub fn new(density: f64, g: f64) -> Result<Self, ConfigError> {
        Self::with_gravity(density, DirectGravity::new(g))
    }

    /// Creates an empty world with a fully specified force law
    pub fn with_gravity(density: f64, gravity: DirectGravity) -> Result<Self, ConfigError> {
        positive("density", density)?;
        positive("gravity_constant", gravity.g)?;
        non_negative("epsilon", gravity.epsilon)?;

        Ok(Self {
            time: 0.0,
            bodies: Vec::new(),
            density,
            gravity,
            anchor_absorbed_mass: 0.0,
        })
    }

    /// Builds a random world from a configuration
    ///
    /// Places `body_count` regular bodies of radius `body_radius` uniformly
    /// over the spawn region with velocity components in
    /// `[-velocity_range, velocity_range]`, then an anchor at the centre
    /// whose mass is `anchor_mass_factor` times a regular body's. Bodies that
    /// start inside the anchor are merged into it before returning. A
    /// one-body world gets its planet at a fixed starting state instead.
    ///
    /// The same configuration (seed included) always produces the same world.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration does not validate.
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity::config::SimulationConfig;
    /// use gravity::world::World;
    ///
    /// let config = SimulationConfig::default().with_body_count(10).with_seed(7);
    /// let world = World::generate(&config).unwrap();
    ///
    /// assert_eq!(world.body_count(), 11);
    /// assert!(world.anchor().is_some());
    /// ```
    pub fn generate(config: &SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let gravity = DirectGravity::new(config.gravity_constant).with_epsilon(config.epsilon);
        let mut world = Self::with_gravity(config.density, gravity)?;
        let mut rng = ChaChaRng::seed_from_u64(config.seed);

        for _ in 0..config.body_count {
            let state = if config.body_count == 1 {
                let (x, y, vx, vy) = SOLO_PLANET;
                KinematicState::new(x, y, vx, vy)
            } else {
                random_state(&mut rng, config)
            };
            world.add_body_with_radius(config.body_radius, state)?;
        }

        let anchor_mass =
            mass_from_radius(config.body_radius, config.density) * config.anchor_mass_factor;
        world.add_anchor(
            anchor_mass,
            Point2::new(config.width / 2.0, config.height / 2.0),
        )?;

        let swallowed = absorb_initial_overlaps(&mut world.bodies, world.density);
        world.record(&swallowed);

        info!(
            "generated world: {} bodies, {} absorbed by the anchor at start, seed {}",
            config.body_count,
            swallowed.len(),
            config.seed
        );

        Ok(world)
    }

    fn insert(&mut self, mut body: Body) -> BodyId {
        let id = BodyId(self.bodies.len());
        body.id = id;
        self.bodies.push(body);
        id
    }

    /// Adds a regular body whose radius follows from `mass`
    ///
    /// # Errors
    ///
    /// Rejects a mass that is not positive and finite, or a state with a
    /// non-finite component.
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity::kinematics::KinematicState;
    /// use gravity::world::World;
    ///
    /// let mut world = World::new(0.001, 1.0).unwrap();
    /// let id1 = world.add_body(1.0, KinematicState::new(0.0, 0.0, 0.0, 0.0)).unwrap();
    /// let id2 = world.add_body(2.0, KinematicState::new(50.0, 0.0, 0.0, 0.0)).unwrap();
    ///
    /// assert_eq!(id1.0, 0);
    /// assert_eq!(id2.0, 1);
    /// assert!(world.add_body(-1.0, KinematicState::new(9.0, 0.0, 0.0, 0.0)).is_err());
    /// ```
    pub fn add_body(&mut self, mass: f64, state: KinematicState) -> Result<BodyId, ConfigError> {
        positive("mass", mass)?;
        finite_state(&state)?;
        Ok(self.insert(Body::from_mass(Role::Regular, state, mass, self.density)))
    }

    /// Adds a regular body whose mass follows from `radius`
    pub fn add_body_with_radius(
        &mut self,
        radius: f64,
        state: KinematicState,
    ) -> Result<BodyId, ConfigError> {
        positive("radius", radius)?;
        finite_state(&state)?;
        Ok(self.insert(Body::from_radius(Role::Regular, state, radius, self.density)))
    }

    /// Adds the pinned anchor at `position`
    ///
    /// # Errors
    ///
    /// A world holds at most one anchor; a second one is refused with
    /// [`ConfigError::AnchorExists`].
    pub fn add_anchor(&mut self, mass: f64, position: Point2<f64>) -> Result<BodyId, ConfigError> {
        if let Some(anchor) = self.anchor() {
            return Err(ConfigError::AnchorExists(anchor.id));
        }
        positive("mass", mass)?;
        finite_state(&KinematicState::at_rest(position))?;
        Ok(self.insert(Body::from_mass(
            Role::Anchor,
            KinematicState::at_rest(position),
            mass,
            self.density,
        )))
    }

    pub fn get_body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    pub fn anchor(&self) -> Option<&Body> {
        self.bodies.iter().find(|b| b.is_anchor())
    }

    /// Total number of bodies stored, merged ones included
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn live_bodies(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(|b| b.alive)
    }

    pub fn live_count(&self) -> usize {
        self.live_bodies().count()
    }

    /// Advances the world from time `t` by `dt`
    ///
    /// Integrates every live regular body with RK4, then merges bodies that
    /// ended the step in contact. The clock is left at `t + dt`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity::config::SimulationConfig;
    /// use gravity::world::World;
    ///
    /// let mut world = World::generate(&SimulationConfig::default()).unwrap();
    /// let anchor_before = *world.anchor().unwrap();
    ///
    /// world.step(0.0, 1.0);
    ///
    /// assert_eq!(world.time, 1.0);
    /// assert_eq!(world.anchor().unwrap().state, anchor_before.state);
    /// ```
    pub fn step(&mut self, t: f64, dt: f64) {
        self.step_with(&RungeKutta4, t, dt);
    }

    /// Same as [`World::step`] with another integrator
    pub fn step_with(&mut self, integrator: &dyn Integrator, t: f64, dt: f64) {
        debug_assert!(dt.is_finite() && dt > 0.0, "timestep must be positive, got {dt}");
        integrator.step(self, t, dt);

        let merges = resolve_collisions(&mut self.bodies, self.density);
        if !merges.is_empty() {
            debug!(
                "t={:.3}: {} merge(s), {} bodies live",
                t + dt,
                merges.len(),
                self.live_count()
            );
        }
        self.record(&merges);

        self.time = t + dt;
    }

    /// Steps from the world's own clock
    pub fn tick(&mut self, dt: f64) {
        self.step(self.time, dt);
    }

    /// Read-only view of every body for drawing
    ///
    /// Lazily yields one [`BodySnapshot`] per stored body, merged ones
    /// included (flagged `alive: false`). Call again for a fresh pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity::config::SimulationConfig;
    /// use gravity::world::World;
    ///
    /// let world = World::generate(&SimulationConfig::default().with_body_count(5)).unwrap();
    ///
    /// let drawn = world.snapshot().filter(|s| s.alive).count();
    /// assert_eq!(drawn, world.live_count());
    /// assert_eq!(world.snapshot().count(), 6);
    /// ```
    pub fn snapshot(&self) -> impl Iterator<Item = BodySnapshot> + '_ {
        self.bodies.iter().map(BodySnapshot::from)
    }

    /// Mass the anchor has absorbed without growing
    pub fn anchor_absorbed_mass(&self) -> f64 {
        self.anchor_absorbed_mass
    }

    /// Returns the total mass of all live bodies, anchor included
    pub fn total_live_mass(&self) -> f64 {
        self.live_bodies().map(|b| b.mass).sum()
    }

    /// Live mass plus what the anchor swallowed; constant over a run
    pub fn accounted_mass(&self) -> f64 {
        self.total_live_mass() + self.anchor_absorbed_mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.live_bodies().map(|b| b.kinetic_energy()).sum()
    }

    pub fn potential_energy(&self) -> f64 {
        self.gravity.potential_energy(&self.bodies)
    }

    /// Returns the total momentum of all live bodies
    pub fn total_momentum(&self) -> Vector2<f64> {
        self.live_bodies()
            .map(|b| b.momentum())
            .fold(Vector2::zeros(), |acc, p| acc + p)
    }

    fn record(&mut self, merges: &[CollisionEvent]) {
        self.anchor_absorbed_mass += merges
            .iter()
            .filter(|m| m.absorbed_by_anchor)
            .map(|m| m.victim_mass)
            .sum::<f64>();
    }
}

fn finite_state(state: &KinematicState) -> Result<(), ConfigError> {
    if state.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFiniteState)
    }
}

fn random_state(rng: &mut ChaChaRng, config: &SimulationConfig) -> KinematicState {
    let v = config.velocity_range;
    KinematicState::new(
        rng.random_range(0.0..=config.width),
        rng.random_range(0.0..=config.height),
        rng.random_range(-v..=v),
        rng.random_range(-v..=v),
    )
}
