#![warn(missing_docs)]

//! Cone casting over circle-sweep broad phases in 2D.
//!
//! The planar twin of `conecast-3d`: a cone query (a pie wedge, here) is
//! approximated by circle-sweeping a volume wide enough to bound the wedge,
//! then discarding hits outside the cone's half-angle. The sweep is pluggable
//! through [`CircleSweep`]; every implementation gains the three-tier query
//! API of [`ConeCast`] (nearest hit, all hits, caller-buffer fill).
//!
//! Unlike the 3D family, the 2D sweep starts at the cone apex itself rather
//! than one radius behind it; the two families place their bounding volumes
//! differently on purpose, matching how each is used.
//!
//! [`SweepScene`] is a ready-made sweep over a list of parry shapes, and the
//! `rapier` feature adds [`RapierSweep`] over a Rapier world's query
//! pipeline.
//!
//! All angles are in radians.

mod query;
mod scene;
mod sweep;

#[cfg(feature = "rapier")]
mod rapier;

pub use conecast_core::{consolidate, Cone, ConeCastError, ConeVector, HitPoint, SweepFilter};
pub use query::ConeCast;
pub use scene::{ColliderId, SceneCollider, SweepScene};
pub use sweep::{CircleSweep, SweepHit};

#[cfg(feature = "rapier")]
pub use rapier::RapierSweep;

/// A cone (pie wedge) in 2D space.
pub type Cone2 = Cone<nalgebra::Vector2<f32>>;
