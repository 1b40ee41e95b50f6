//! Collision resolution through inelastic mergers
//!
//! When two regular bodies touch, the lighter one is absorbed:
//! - Total mass is conserved
//! - Total momentum is conserved
//! - The survivor's radius follows its new mass at constant density
//!
//! The anchor is the exception. It swallows whatever touches it without
//! gaining mass, radius or velocity.

use log::debug;

use crate::body::{Body, BodyId};
use crate::collisions::detection::{CollisionEvent, anchor_overlaps, mergeable, rank_pair};

/// Merge `victim` into `survivor`
///
/// The victim is marked merged. A regular survivor takes the momentum-weighted
/// velocity and the combined mass, and its radius is recomputed from `density`;
/// its position is unchanged. An anchor survivor is left exactly as it was.
///
/// # Examples
///
/// ```
/// use gravity::body::{Body, BodyId, Role};
/// use gravity::collisions::merge_pair;
/// use gravity::kinematics::KinematicState;
///
/// let mut a = Body::from_mass(Role::Regular, KinematicState::new(0.0, 0.0, 1.0, 0.0), 20.0, 0.001);
/// let mut b = Body::from_mass(Role::Regular, KinematicState::new(5.0, 0.0, -2.0, 0.0), 10.0, 0.001);
/// a.id = BodyId(0);
/// b.id = BodyId(1);
/// let mut bodies = [a, b];
///
/// let event = merge_pair(&mut bodies, BodyId(0), BodyId(1), 0.001);
///
/// assert_eq!(event.victim, BodyId(1));
/// assert!(!bodies[1].alive);
/// assert_eq!(bodies[0].mass, 30.0);
/// // (20 * 1 + 10 * -2) / 30 = 0
/// assert!(bodies[0].state.velocity.x.abs() < 1e-12);
/// ```
pub fn merge_pair(
    bodies: &mut [Body],
    survivor: BodyId,
    victim: BodyId,
    density: f64,
) -> CollisionEvent {
    let absorbed = bodies[victim.0];
    bodies[victim.0].alive = false;

    let keeper = &mut bodies[survivor.0];
    let separation = keeper.distance_to(&absorbed);
    let absorbed_by_anchor = keeper.is_anchor();

    if !absorbed_by_anchor {
        let total_mass = keeper.mass + absorbed.mass;
        keeper.state.velocity = (keeper.momentum() + absorbed.momentum()) / total_mass;
        keeper.mass = total_mass;
        keeper.set_radius_from_mass(density);
    }

    debug!(
        "body {} absorbed body {} (mass {:.4e}) at separation {:.3}{}",
        survivor.0,
        victim.0,
        absorbed.mass,
        separation,
        if absorbed_by_anchor { " [anchor]" } else { "" }
    );

    CollisionEvent {
        survivor,
        victim,
        separation,
        victim_mass: absorbed.mass,
        absorbed_by_anchor,
    }
}

/// Sweep every live pair once and merge the ones in contact
///
/// Pairs `(i, j)` with `i < j` are visited in storage order. Once a body is
/// merged it is skipped for the rest of the sweep; a survivor that grew is
/// tested against the remaining bodies with its new radius. Anchors never
/// merge with one another.
///
/// # Returns
///
/// The merges performed, in the order they happened
pub fn resolve_collisions(bodies: &mut [Body], density: f64) -> Vec<CollisionEvent> {
    let mut events = Vec::new();

    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            if !bodies[i].alive {
                break;
            }
            if !mergeable(&bodies[i], &bodies[j]) {
                continue;
            }
            let (survivor, victim) = rank_pair(&bodies[i], &bodies[j]);
            events.push(merge_pair(bodies, survivor, victim, density));
        }
    }

    events
}

/// Mark every regular body that starts inside the anchor as merged
///
/// Run once when a world is generated so the first step does not see bodies
/// sitting on top of the anchor.
pub fn absorb_initial_overlaps(bodies: &mut [Body], density: f64) -> Vec<CollisionEvent> {
    anchor_overlaps(bodies)
        .into_iter()
        .map(|(anchor, body)| merge_pair(bodies, anchor, body, density))
        .collect()
}
