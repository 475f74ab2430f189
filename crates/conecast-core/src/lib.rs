#![warn(missing_docs)]

//! Cone-cast geometry and filtering, independent of dimensionality.
//!
//! A cone query is approximated by a wider sphere/circle sweep followed by an
//! angular filter. This crate holds everything about that filter that does not
//! depend on the number of dimensions:
//!
//! - [`Cone`] - a validated cone (apex, direction, half-angle, reach)
//! - [`half_angle_for_radius`] / [`radius_for_half_angle`] - conversions
//!   between the two ways of describing the cone's width
//! - [`consolidate`] - the in-place, order-preserving filter that keeps only
//!   the sweep hits actually inside the cone
//! - [`SweepFilter`] - the layer/depth filter handed through to the sweep
//! - [`ConeVector`] - the small vector capability set the algorithms need,
//!   implemented for `nalgebra`'s 2D and 3D vectors
//!
//! The per-dimension crates (`conecast-2d`, `conecast-3d`) pair this core
//! with a concrete sweep boundary and the public query API.
//!
//! All angles are in radians and all scalars are `f32`.

mod consolidate;
mod error;
mod filter;
mod geometry;
mod space;

pub use consolidate::{consolidate, HitPoint};
pub use error::ConeCastError;
pub use filter::SweepFilter;
pub use geometry::{half_angle_for_radius, radius_for_half_angle, Cone};
pub use space::ConeVector;
