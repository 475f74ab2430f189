//! A ready-made sweep implementation over a flat list of parry shapes.

use conecast_core::SweepFilter;
use nalgebra::{Isometry3, Point3, Unit, Vector3};
use parry3d::query::{self, ShapeCastOptions};
use parry3d::shape::{Ball, SharedShape};

use crate::sweep::{SphereSweep, SweepHit};

/// Identifies a collider within a [`SweepScene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColliderId(pub usize);

/// A shape registered in a [`SweepScene`].
pub struct SceneCollider {
    /// Collision shape.
    pub shape: SharedShape,
    /// World pose of the shape.
    pub pose: Isometry3<f32>,
    /// Layer bitmask matched against [`SweepFilter::layers`].
    pub layers: u32,
    /// Depth tag matched against the filter's depth range.
    pub depth: f32,
}

/// A minimal sweepable world: a list of shapes checked one by one with the
/// narrow phase. There is no acceleration structure; lookups are linear over
/// the registered colliders, which is plenty for sensor-style scenes and
/// keeps this crate honest about being a filtering layer, not a broad phase.
#[derive(Default)]
pub struct SweepScene {
    colliders: Vec<SceneCollider>,
}

impl SweepScene {
    /// An empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a shape on every layer with a depth tag of zero.
    pub fn add(&mut self, shape: SharedShape, pose: Isometry3<f32>) -> ColliderId {
        self.add_tagged(shape, pose, u32::MAX, 0.0)
    }

    /// Register a shape with explicit layer bits and depth tag.
    pub fn add_tagged(
        &mut self,
        shape: SharedShape,
        pose: Isometry3<f32>,
        layers: u32,
        depth: f32,
    ) -> ColliderId {
        self.colliders.push(SceneCollider {
            shape,
            pose,
            layers,
            depth,
        });
        ColliderId(self.colliders.len() - 1)
    }

    /// Look up a registered collider.
    pub fn collider(&self, id: ColliderId) -> Option<&SceneCollider> {
        self.colliders.get(id.0)
    }

    /// Number of registered colliders.
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    /// Whether the scene has no colliders.
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Cast the moving ball against one collider. Shape pairs the narrow
    /// phase cannot cast are skipped.
    fn cast_one(
        &self,
        index: usize,
        start: &Isometry3<f32>,
        velocity: &Vector3<f32>,
        ball: &Ball,
        max_distance: f32,
        filter: &SweepFilter,
    ) -> Option<SweepHit<ColliderId>> {
        let collider = &self.colliders[index];
        if collider.layers & filter.layers == 0
            || collider.depth < filter.min_depth
            || collider.depth > filter.max_depth
        {
            return None;
        }
        let options = ShapeCastOptions {
            max_time_of_impact: max_distance,
            ..ShapeCastOptions::default()
        };
        let still = Vector3::zeros();
        let hit = query::cast_shapes(
            start,
            velocity,
            ball,
            &collider.pose,
            &still,
            &*collider.shape,
            options,
        )
        .ok()
        .flatten()?;
        // Witness point and normal come back in the collider's local frame.
        Some(SweepHit {
            target: ColliderId(index),
            point: collider.pose * hit.witness2,
            normal: (collider.pose.rotation * hit.normal2).into_inner(),
            distance: hit.time_of_impact,
        })
    }
}

impl SphereSweep for SweepScene {
    type Target = ColliderId;

    fn sweep_all(
        &self,
        origin: Point3<f32>,
        radius: f32,
        direction: Vector3<f32>,
        max_distance: f32,
        filter: &SweepFilter,
    ) -> Vec<SweepHit<ColliderId>> {
        let Some(axis) = Unit::try_new(direction, 1.0e-6) else {
            return Vec::new();
        };
        let start = Isometry3::translation(origin.x, origin.y, origin.z);
        let velocity = axis.into_inner();
        let ball = Ball::new(radius);
        let mut hits: Vec<SweepHit<ColliderId>> = (0..self.colliders.len())
            .filter_map(|i| self.cast_one(i, &start, &velocity, &ball, max_distance, filter))
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    fn sweep_into(
        &self,
        origin: Point3<f32>,
        radius: f32,
        direction: Vector3<f32>,
        max_distance: f32,
        filter: &SweepFilter,
        out: &mut [SweepHit<ColliderId>],
    ) -> usize {
        let Some(axis) = Unit::try_new(direction, 1.0e-6) else {
            return 0;
        };
        if out.is_empty() {
            return 0;
        }
        let start = Isometry3::translation(origin.x, origin.y, origin.z);
        let velocity = axis.into_inner();
        let ball = Ball::new(radius);
        let mut count = 0;
        for i in 0..self.colliders.len() {
            let Some(hit) = self.cast_one(i, &start, &velocity, &ball, max_distance, filter)
            else {
                continue;
            };
            // Sorted insertion straight into the caller's buffer; when full,
            // the farthest hit makes room or the new one is dropped.
            if count < out.len() {
                out[count] = hit;
                count += 1;
            } else if hit.distance < out[count - 1].distance {
                out[count - 1] = hit;
            } else {
                continue;
            }
            let mut slot = count - 1;
            while slot > 0 && out[slot].distance < out[slot - 1].distance {
                out.swap(slot, slot - 1);
                slot -= 1;
            }
        }
        count
    }
}
