//! Collision detection
//!
//! Bodies collide on physical contact: the distance between centres is no
//! more than the sum of the radii. Only live bodies take part.

use crate::body::{Body, BodyId};

/// A merge produced by collision resolution
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionEvent {
    /// Body that kept existing (and, unless it is the anchor, grew)
    pub survivor: BodyId,
    /// Body marked as merged
    pub victim: BodyId,
    /// Centre distance at the moment of contact
    pub separation: f64,
    /// Mass the victim carried into the merge
    pub victim_mass: f64,
    /// The survivor was the anchor, which absorbs without changing
    pub absorbed_by_anchor: bool,
}

/// Whether two live bodies are in contact
///
/// # Examples
///
/// ```
/// use gravity::body::{Body, Role};
/// use gravity::collisions::touching;
/// use gravity::kinematics::KinematicState;
///
/// let a = Body::from_radius(Role::Regular, KinematicState::new(0.0, 0.0, 0.0, 0.0), 1.5, 0.001);
/// let b = Body::from_radius(Role::Regular, KinematicState::new(3.0, 0.0, 0.0, 0.0), 1.5, 0.001);
/// let c = Body::from_radius(Role::Regular, KinematicState::new(3.1, 0.0, 0.0, 0.0), 1.5, 0.001);
///
/// assert!(touching(&a, &b)); // exactly at contact
/// assert!(!touching(&a, &c));
/// ```
pub fn touching(a: &Body, b: &Body) -> bool {
    a.alive && b.alive && a.touches(b)
}

/// Whether two bodies are in contact and allowed to merge
///
/// Two anchors never merge with each other, so an anchor is never a victim.
pub fn mergeable(a: &Body, b: &Body) -> bool {
    !(a.is_anchor() && b.is_anchor()) && touching(a, b)
}

/// Decide which of two touching bodies survives
///
/// The anchor always survives; callers filter anchor pairs with
/// [`mergeable`]. Otherwise the heavier body does; on equal
/// masses the first argument (the first encountered) wins.
///
/// # Returns
///
/// `(survivor, victim)`
pub fn rank_pair(first: &Body, second: &Body) -> (BodyId, BodyId) {
    if first.is_anchor() {
        (first.id, second.id)
    } else if second.is_anchor() || second.mass > first.mass {
        (second.id, first.id)
    } else {
        (first.id, second.id)
    }
}

/// Live regular bodies currently overlapping an anchor
///
/// # Returns
///
/// `(anchor, overlapping body)` pairs in storage order
pub fn anchor_overlaps(bodies: &[Body]) -> Vec<(BodyId, BodyId)> {
    bodies
        .iter()
        .filter(|anchor| anchor.alive && anchor.is_anchor())
        .flat_map(|anchor| {
            bodies
                .iter()
                .filter(move |body| !body.is_anchor() && touching(anchor, body))
                .map(move |body| (anchor.id, body.id))
        })
        .collect()
}
