//! Collision detection and resolution for N-body systems
//!
//! This module provides contact detection and resolution through
//! momentum-conserving mergers.

pub mod detection;
pub mod resolution;


pub use detection::{CollisionEvent, anchor_overlaps, mergeable, rank_pair, touching};
pub use resolution::{absorb_initial_overlaps, merge_pair, resolve_collisions};
