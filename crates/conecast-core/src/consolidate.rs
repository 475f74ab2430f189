//! The in-place cone consolidation filter.

use crate::geometry::Cone;
use crate::space::ConeVector;

/// Access to the contact point of a broad-phase hit.
///
/// The consolidation filter reads nothing else; hits are otherwise opaque and
/// are moved around whole.
pub trait HitPoint<V: ConeVector> {
    /// World-space contact position of this hit.
    fn point(&self) -> V::Point;
}

/// Keep only the hits whose contact point lies inside the cone, compacting
/// them to the front of `hits` and returning how many were kept.
///
/// A hit is inside when the unsigned angle between the cone axis and the
/// vector from the apex to the contact point is strictly less than the
/// half-angle; a hit exactly on the cone's edge is excluded, so a zero-width
/// cone keeps nothing. The kept hits stay in their original relative order
/// (for sweeps that sort nearest-first, the front entry is still the nearest
/// accepted hit). Entries past the returned count are unspecified.
///
/// This is one linear pass with a write cursor over the caller's own storage,
/// no allocation, which is what lets the same filter serve the first-hit,
/// all-hits, and fixed-buffer query tiers.
pub fn consolidate<V, H>(cone: &Cone<V>, hits: &mut [H]) -> usize
where
    V: ConeVector,
    H: HitPoint<V>,
{
    let mut kept = 0;
    for i in 0..hits.len() {
        let to_hit = V::between(cone.origin(), hits[i].point());
        if cone.direction().angle_to(to_hit) < cone.half_angle() {
            hits.swap(kept, i);
            kept += 1;
        }
    }
    kept
}
