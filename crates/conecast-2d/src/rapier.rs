//! Circle sweeps backed by a Rapier world.

use conecast_core::SweepFilter;
use nalgebra::{Isometry2, Point2, Unit, Vector2};
use rapier2d::dynamics::RigidBodySet;
use rapier2d::geometry::{Collider, ColliderHandle, ColliderSet, Group, InteractionGroups};
use rapier2d::parry::query::ShapeCastOptions;
use rapier2d::parry::shape::Ball;
use rapier2d::pipeline::{QueryFilter, QueryPipeline};

use crate::sweep::{CircleSweep, SweepHit};

/// A [`CircleSweep`] over a Rapier world's query pipeline, giving the world
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
        start: &Isometry2<f32>,
        velocity: &Vector2<f32>,
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

impl CircleSweep for RapierSweep<'_> {
    type Target = ColliderHandle;

    fn sweep_all(
        &self,
        origin: Point2<f32>,
        radius: f32,
        direction: Vector2<f32>,
        max_distance: f32,
        filter: &SweepFilter,
    ) -> Vec<SweepHit<ColliderHandle>> {
        let Some(axis) = Unit::try_new(direction, 1.0e-6) else {
            return Vec::new();
        };
        let start = Isometry2::translation(origin.x, origin.y);
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
        origin: Point2<f32>,
        radius: f32,
        direction: Vector2<f32>,
        max_distance: f32,
        filter: &SweepFilter,
        out: &mut [SweepHit<ColliderHandle>],
    ) -> usize {
        let Some(axis) = Unit::try_new(direction, 1.0e-6) else {
            return 0;
        };
        let start = Isometry2::translation(origin.x, origin.y);
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
