//! Sphere sweeps backed by a Rapier world.

use conecast_core::SweepFilter;
use nalgebra::{Isometry3, Point3, Unit, Vector3};
use rapier3d::dynamics::RigidBodySet;
use rapier3d::geometry::{Collider, ColliderHandle, ColliderSet, Group, InteractionGroups};
use rapier3d::parry::query::ShapeCastOptions;
use rapier3d::parry::shape::Ball;
use rapier3d::pipeline::{QueryFilter, QueryPipeline};

use crate::sweep::{SphereSweep, SweepHit};

/// A [`SphereSweep`] over a Rapier world's query pipeline, giving the world
/// the cone-cast API through [`ConeCast`](crate::ConeCast).
///
/// Rapier's shape cast reports a single earliest hit, so the sweep repeats
/// the cast with the already-struck colliders excluded until nothing is left;
/// each repeat returns the nearest remaining hit, which makes the output
/// nearest-first by construction. [`SweepFilter::layers`] maps onto the
/// filter half of an [`InteractionGroups`]; the depth range has no Rapier
/// counterpart and is ignored by this adapter.
pub struct RapierSweep<'a> {
    bodies: &'a RigidBodySet,
    colliders: &'a ColliderSet,
    queries: &'a QueryPipeline,
}

impl<'a> RapierSweep<'a> {
    /// Borrow the pieces of a Rapier world needed for sweeping. The query
    /// pipeline must be up to date with the collider set.
    pub fn new(
        bodies: &'a RigidBodySet,
        colliders: &'a ColliderSet,
        queries: &'a QueryPipeline,
    ) -> Self {
        Self {
            bodies,
            colliders,
            queries,
        }
    }

    fn cast_remaining(
        &self,
        start: &Isometry3<f32>,
        velocity: &Vector3<f32>,
        ball: &Ball,
        options: ShapeCastOptions,
        groups: InteractionGroups,
        struck: &[ColliderHandle],
    ) -> Option<SweepHit<ColliderHandle>> {
        let skip = |handle: ColliderHandle, _: &Collider| !struck.contains(&handle);
        let query = QueryFilter::default().groups(groups).predicate(&skip);
        let (handle, hit) = self.queries.cast_shape(
            self.bodies,
            self.colliders,
            start,
            velocity,
            ball,
            options,
            query,
        )?;
        // The struck-collider witness and normal are already world-space.
        Some(SweepHit {
            target: handle,
            point: hit.witness1,
            normal: hit.normal1.into_inner(),
            distance: hit.time_of_impact,
        })
    }
}

impl SphereSweep for RapierSweep<'_> {
    type Target = ColliderHandle;

    fn sweep_all(
        &self,
        origin: Point3<f32>,
        radius: f32,
        direction: Vector3<f32>,
        max_distance: f32,
        filter: &SweepFilter,
    ) -> Vec<SweepHit<ColliderHandle>> {
        let Some(axis) = Unit::try_new(direction, 1.0e-6) else {
            return Vec::new();
        };
        let start = Isometry3::translation(origin.x, origin.y, origin.z);
        let velocity = axis.into_inner();
        let ball = Ball::new(radius);
        let options = ShapeCastOptions {
            max_time_of_impact: max_distance,
            ..ShapeCastOptions::default()
        };
        let groups = InteractionGroups::new(Group::ALL, Group::from_bits_truncate(filter.layers));

        let mut struck = Vec::new();
        let mut hits = Vec::new();
        while let Some(hit) =
            self.cast_remaining(&start, &velocity, &ball, options, groups, &struck)
        {
            struck.push(hit.target);
            hits.push(hit);
        }
        hits
    }

    fn sweep_into(
        &self,
        origin: Point3<f32>,
        radius: f32,
        direction: Vector3<f32>,
        max_distance: f32,
        filter: &SweepFilter,
        out: &mut [SweepHit<ColliderHandle>],
    ) -> usize {
        let Some(axis) = Unit::try_new(direction, 1.0e-6) else {
            return 0;
        };
        let start = Isometry3::translation(origin.x, origin.y, origin.z);
        let velocity = axis.into_inner();
        let ball = Ball::new(radius);
        let options = ShapeCastOptions {
            max_time_of_impact: max_distance,
            ..ShapeCastOptions::default()
        };
        let groups = InteractionGroups::new(Group::ALL, Group::from_bits_truncate(filter.layers));

        let mut struck = Vec::new();
        let mut count = 0;
        while count < out.len() {
            let Some(hit) =
                self.cast_remaining(&start, &velocity, &ball, options, groups, &struck)
            else {
                break;
            };
            struck.push(hit.target);
            out[count] = hit;
            count += 1;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rapier3d::geometry::ColliderBuilder;

    fn world_with_balls(
        positions: &[Vector3<f32>],
    ) -> (RigidBodySet, ColliderSet, QueryPipeline, Vec<ColliderHandle>) {
        let bodies = RigidBodySet::new();
        let mut colliders = ColliderSet::new();
        let handles = positions
            .iter()
            .map(|p| colliders.insert(ColliderBuilder::ball(1.0).translation(*p).build()))
            .collect();
        let mut queries = QueryPipeline::new();
        queries.update(&colliders);
        (bodies, colliders, queries, handles)
    }

    #[test]
    fn test_repeated_casts_report_every_hit_nearest_first() {
        let (bodies, colliders, queries, handles) = world_with_balls(&[
            Vector3::new(0.0, 0.0, 10.0),
            Vector3::new(0.0, 0.0, 4.0),
        ]);
        let sweep = RapierSweep::new(&bodies, &colliders, &queries);

        let hits = sweep.sweep_all(
            Point3::origin(),
            0.5,
            Vector3::z(),
            20.0,
            &SweepFilter::default(),
        );
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].target, handles[1]);
        assert_eq!(hits[1].target, handles[0]);
        assert!((hits[0].distance - 2.5).abs() < 1e-2);
        assert!(hits[0].distance < hits[1].distance);
    }

    #[test]
    fn test_buffer_form_stops_at_capacity() {
        let (bodies, colliders, queries, handles) = world_with_balls(&[
            Vector3::new(0.0, 0.0, 4.0),
            Vector3::new(0.0, 0.0, 8.0),
            Vector3::new(0.0, 0.0, 12.0),
        ]);
        let sweep = RapierSweep::new(&bodies, &colliders, &queries);

        let placeholder = SweepHit {
            target: handles[0],
            point: Point3::origin(),
            normal: Vector3::zeros(),
            distance: 0.0,
        };
        let mut buffer = [placeholder; 2];
        let count = sweep.sweep_into(
            Point3::origin(),
            0.5,
            Vector3::z(),
            20.0,
            &SweepFilter::default(),
            &mut buffer,
        );
        assert_eq!(count, 2);
        assert_eq!(buffer[0].target, handles[0]);
        assert_eq!(buffer[1].target, handles[1]);
    }
}
