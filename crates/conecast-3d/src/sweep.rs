//! The broad-phase sphere-sweep boundary.

use conecast_core::{HitPoint, SweepFilter};
use nalgebra::{Point3, Vector3};

/// One broad-phase hit: the swept sphere touched something.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepHit<H> {
    /// Opaque handle to the struck object.
    pub target: H,
    /// World-space contact point on the struck object.
    pub point: Point3<f32>,
    /// World-space surface normal at the contact point.
    pub normal: Vector3<f32>,
    /// Distance traveled by the sphere from the sweep start to the impact.
    pub distance: f32,
}

impl<H> HitPoint<Vector3<f32>> for SweepHit<H> {
    fn point(&self) -> Point3<f32> {
        self.point
    }
}

/// A broad-phase capable of sweeping a sphere through space.
///
/// This is the external collaborator the cone queries are built on. Both
/// operations must report hits sorted nearest to farthest from the sweep
/// start; `direction` is not required to be unit length. The filter is
/// forwarded from the caller verbatim and its interpretation belongs to the
/// implementation.
pub trait SphereSweep {
    /// Handle type identifying struck objects.
    type Target: Copy;

    /// Sweep a sphere of `radius` from `origin` along `direction` for up to
    /// `max_distance`, returning every hit, nearest first.
    fn sweep_all(
        &self,
        origin: Point3<f32>,
        radius: f32,
        direction: Vector3<f32>,
        max_distance: f32,
        filter: &SweepFilter,
    ) -> Vec<SweepHit<Self::Target>>;

    /// Like [`SphereSweep::sweep_all`], but writes hits into the front of
    /// `out` and returns the count written, never touching memory past the
    /// buffer's end. When more candidates exist than `out` can hold the
    /// excess is dropped here, before any cone filtering, so a downstream
    /// cone query may under-report membership; callers size the buffer for
    /// the hits they care about.
    fn sweep_into(
        &self,
        origin: Point3<f32>,
        radius: f32,
        direction: Vector3<f32>,
        max_distance: f32,
        filter: &SweepFilter,
        out: &mut [SweepHit<Self::Target>],
    ) -> usize;
}
