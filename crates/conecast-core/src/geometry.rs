//! Cone construction and the radius/half-angle conversions.

use crate::error::ConeCastError;
use crate::space::ConeVector;

/// The half-angle, in radians, of a cone that reaches `max_radius` at
/// `max_distance` from its apex: `atan(max_radius / max_distance)`.
///
/// Fails with [`ConeCastError::InvalidMaxDistance`] when `max_distance` is
/// non-finite or not positive, since the bounding sweep the cone query relies
/// on needs a finite radius.
pub fn half_angle_for_radius(max_radius: f32, max_distance: f32) -> Result<f32, ConeCastError> {
    check_max_distance(max_distance)?;
    Ok((max_radius / max_distance).atan())
}

/// The radius a cone with the given half-angle (radians) reaches at
/// `max_distance` from its apex: `|tan(half_angle) * max_distance|`.
///
/// A half-angle of zero yields a zero radius: the cone degenerates to a ray,
/// which is allowed. Fails with [`ConeCastError::InvalidMaxDistance`] when
/// `max_distance` is non-finite or not positive.
pub fn radius_for_half_angle(half_angle: f32, max_distance: f32) -> Result<f32, ConeCastError> {
    check_max_distance(max_distance)?;
    Ok((half_angle.tan() * max_distance).abs())
}

fn check_max_distance(max_distance: f32) -> Result<(), ConeCastError> {
    if max_distance.is_finite() && max_distance > 0.0 {
        Ok(())
    } else {
        Err(ConeCastError::InvalidMaxDistance(max_distance))
    }
}

/// A validated cone-shaped query volume.
///
/// A cone is described by its apex, a direction (any non-zero length), an
/// angular half-width in radians, and a maximum search distance. The width
/// can be supplied either as the half-angle ([`Cone::from_half_angle`]) or as
/// the radius reached at `max_distance` ([`Cone::from_max_radius`]); the
/// other form is derived at construction. Validation happens once here, so
/// every cast operation takes a `&Cone` that is known to be well-formed.
///
/// Cones are immutable; they live on the stack for the duration of one query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone<V: ConeVector> {
    origin: V::Point,
    direction: V,
    half_angle: f32,
    max_radius: f32,
    max_distance: f32,
}

impl<V: ConeVector> Cone<V> {
    /// Build a cone from its half-angle (radians).
    ///
    /// # Errors
    ///
    /// [`ConeCastError::InvalidMaxDistance`] when `max_distance` is
    /// non-finite or not positive, [`ConeCastError::ZeroDirection`] when
    /// `direction` has zero length.
    pub fn from_half_angle(
        origin: V::Point,
        direction: V,
        half_angle: f32,
        max_distance: f32,
    ) -> Result<Self, ConeCastError> {
        let max_radius = radius_for_half_angle(half_angle, max_distance)?;
        Self::build(origin, direction, half_angle, max_radius, max_distance)
    }

    /// Build a cone from the radius it reaches at `max_distance`.
    ///
    /// A `max_radius` of zero is a zero-width cone (a ray).
    ///
    /// # Errors
    ///
    /// [`ConeCastError::InvalidMaxDistance`] when `max_distance` is
    /// non-finite or not positive, [`ConeCastError::ZeroDirection`] when
    /// `direction` has zero length.
    pub fn from_max_radius(
        origin: V::Point,
        direction: V,
        max_radius: f32,
        max_distance: f32,
    ) -> Result<Self, ConeCastError> {
        let half_angle = half_angle_for_radius(max_radius, max_distance)?;
        Self::build(origin, direction, half_angle, max_radius, max_distance)
    }

    fn build(
        origin: V::Point,
        direction: V,
        half_angle: f32,
        max_radius: f32,
        max_distance: f32,
    ) -> Result<Self, ConeCastError> {
        if direction.magnitude() == 0.0 {
            return Err(ConeCastError::ZeroDirection);
        }
        Ok(Self {
            origin,
            direction,
            half_angle,
            max_radius,
            max_distance,
        })
    }

    /// The apex of the cone.
    pub fn origin(&self) -> V::Point {
        self.origin
    }

    /// The direction of the cone's axis, as supplied (not normalized).
    pub fn direction(&self) -> V {
        self.direction
    }

    /// The angle between the axis and the edge of the cone, in radians.
    pub fn half_angle(&self) -> f32 {
        self.half_angle
    }

    /// The radius of the cone at `max_distance` from the apex; the radius of
    /// the bounding sweep.
    pub fn max_radius(&self) -> f32 {
        self.max_radius
    }

    /// The maximum search distance.
    pub fn max_distance(&self) -> f32 {
        self.max_distance
    }
}
