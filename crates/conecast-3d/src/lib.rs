#![warn(missing_docs)]

//! Cone casting over sphere-sweep broad phases in 3D.
//!
//! A cone cast reports what lies inside a cone-shaped region, nearest first.
//! It works by sphere-sweeping a volume wide enough to bound the cone, then
//! discarding hits outside the cone's half-angle. The sweep itself is
//! pluggable through the [`SphereSweep`] trait; anything that implements it
//! gains the three-tier query API of [`ConeCast`]:
//!
//! - [`ConeCast::cone_cast`] - nearest hit inside the cone, if any
//! - [`ConeCast::cone_cast_all`] - every hit inside the cone, nearest first
//! - [`ConeCast::cone_cast_into`] - same, written into a caller-owned buffer
//!   with no allocation, for repeated per-frame use
//!
//! [`SweepScene`] is a ready-made sweep over a list of parry shapes, and the
//! `rapier` feature adds [`RapierSweep`] over a Rapier world's query
//! pipeline.
//!
//! All angles are in radians.
//!
//! # Example
//!
//! ```ignore
//! use conecast_3d::{Cone3, ConeCast, SweepFilter, SweepScene};
//! use nalgebra::{Isometry3, Point3, Vector3};
//! use parry3d::shape::SharedShape;
//!
//! let mut scene = SweepScene::new();
//! scene.add(SharedShape::ball(0.5), Isometry3::translation(0.0, 0.0, 8.0));
//!
//! let cone = Cone3::from_half_angle(
//!     Point3::origin(),
//!     Vector3::z(),
//!     30.0_f32.to_radians(),
//!     20.0,
//! )?;
//! if let Some(hit) = scene.cone_cast(&cone, &SweepFilter::default()) {
//!     println!("nearest: {:?} at {}", hit.target, hit.distance);
//! }
//! ```

mod query;
mod scene;
mod sweep;

#[cfg(feature = "rapier")]
mod rapier;

pub use conecast_core::{consolidate, Cone, ConeCastError, ConeVector, HitPoint, SweepFilter};
pub use query::ConeCast;
pub use scene::{ColliderId, SceneCollider, SweepScene};
pub use sweep::{SphereSweep, SweepHit};

#[cfg(feature = "rapier")]
pub use rapier::RapierSweep;

/// A cone in 3D space.
pub type Cone3 = Cone<nalgebra::Vector3<f32>>;
