//! The vector capability set the cone algorithms are generic over.

use std::fmt;

use nalgebra::{Point2, Point3, Vector2, Vector3};

/// Vector operations needed by the cone geometry and the consolidation
/// filter: point subtraction, unsigned angle, and magnitude.
///
/// Implemented once per dimensionality, so the algorithms in this crate are
/// written a single time and instantiated for both the 2D and 3D query
/// families.
pub trait ConeVector: Copy + PartialEq + fmt::Debug {
    /// The point type paired with this vector type.
    type Point: Copy + PartialEq + fmt::Debug;

    /// The vector from `from` to `to`.
    fn between(from: Self::Point, to: Self::Point) -> Self;

    /// The unsigned angle between `self` and `other`, in radians, in
    /// `[0, π]`.
    fn angle_to(self, other: Self) -> f32;

    /// The Euclidean length of `self`.
    fn magnitude(self) -> f32;
}

impl ConeVector for Vector2<f32> {
    type Point = Point2<f32>;

    fn between(from: Self::Point, to: Self::Point) -> Self {
        to - from
    }

    fn angle_to(self, other: Self) -> f32 {
        self.angle(&other)
    }

    fn magnitude(self) -> f32 {
        self.norm()
    }
}

impl ConeVector for Vector3<f32> {
    type Point = Point3<f32>;

    fn between(from: Self::Point, to: Self::Point) -> Self {
        to - from
    }

    fn angle_to(self, other: Self) -> f32 {
        self.angle(&other)
    }

    fn magnitude(self) -> f32 {
        self.norm()
    }
}
