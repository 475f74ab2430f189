//! A ready-made sweep implementation over a flat list of parry shapes.

use conecast_core::SweepFilter;
use nalgebra::{Isometry2, Point2, Unit, Vector2};
use parry2d::query::{self, ShapeCastOptions};
use parry2d::shape::{Ball, SharedShape};

use crate::sweep::{CircleSweep, SweepHit};

/// Identifies a collider within a [`SweepScene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColliderId(pub usize);

/// A shape registered in a [`SweepScene`].
pub struct SceneCollider {
    /// Collision shape.
    pub shape: SharedShape,
    /// World pose of the shape.
    pub pose: Isometry2<f32>,
    /// Layer bitmask matched against [`SweepFilter::layers`].
    pub layers: u32,
    /// Depth tag matched against the filter's depth range; conventionally the
    /// out-of-plane coordinate of the object.
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
    pub fn add(&mut self, shape: SharedShape, pose: Isometry2<f32>) -> ColliderId {
        self.add_tagged(shape, pose, u32::MAX, 0.0)
    }

    /// Register a shape with explicit layer bits and depth tag.
    pub fn add_tagged(
        &mut self,
        shape: SharedShape,
        pose: Isometry2<f32>,
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

    /// Cast the moving circle against one collider. Shape pairs the narrow
    /// phase cannot cast are skipped.
    fn cast_one(
        &self,
        index: usize,
        start: &Isometry2<f32>,
        velocity: &Vector2<f32>,
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
        let still = Vector2::zeros();
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

impl CircleSweep for SweepScene {
    type Target = ColliderId;

    fn sweep_all(
        &self,
        origin: Point2<f32>,
        radius: f32,
        direction: Vector2<f32>,
        max_distance: f32,
        filter: &SweepFilter,
    ) -> Vec<SweepHit<ColliderId>> {
        let Some(axis) = Unit::try_new(direction, 1.0e-6) else {
            return Vec::new();
        };
        let start = Isometry2::translation(origin.x, origin.y);
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
        origin: Point2<f32>,
        radius: f32,
        direction: Vector2<f32>,
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
        let start = Isometry2::translation(origin.x, origin.y);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ConeCast;
    use crate::Cone2;

    fn ball_at(scene: &mut SweepScene, radius: f32, x: f32, y: f32) -> ColliderId {
        scene.add(SharedShape::ball(radius), Isometry2::translation(x, y))
    }

    #[test]
    fn test_sweep_orders_hits_nearest_first() {
        let mut scene = SweepScene::new();
        let far = ball_at(&mut scene, 1.0, 10.0, 0.0);
        let near = ball_at(&mut scene, 1.0, 4.0, 0.0);
        let mid = ball_at(&mut scene, 1.0, 7.0, 0.0);

        let hits = scene.sweep_all(
            Point2::origin(),
            0.5,
            Vector2::x(),
            20.0,
            &SweepFilter::default(),
        );
        let order: Vec<ColliderId> = hits.iter().map(|h| h.target).collect();
        assert_eq!(order, [near, mid, far]);
        // Centers touch 1.5 apart, so the first impact is 2.5 in.
        assert!((hits[0].distance - 2.5).abs() < 1e-3);
    }

    #[test]
    fn test_contact_point_is_on_the_struck_surface() {
        let mut scene = SweepScene::new();
        ball_at(&mut scene, 1.0, 5.0, 0.0);

        let hits = scene.sweep_all(
            Point2::origin(),
            0.5,
            Vector2::x(),
            20.0,
            &SweepFilter::default(),
        );
        assert_eq!(hits.len(), 1);
        assert!((hits[0].point - Point2::new(4.0, 0.0)).norm() < 1e-3);
        assert!((hits[0].normal - (-Vector2::x())).norm() < 1e-3);
    }

    #[test]
    fn test_sweep_respects_max_distance() {
        let mut scene = SweepScene::new();
        ball_at(&mut scene, 1.0, 30.0, 0.0);
        let hits = scene.sweep_all(
            Point2::origin(),
            0.5,
            Vector2::x(),
            10.0,
            &SweepFilter::default(),
        );
        assert!(hits.is_empty());
    }

    #[test]
    fn test_layer_and_depth_filtering() {
        let mut scene = SweepScene::new();
        let lit = scene.add_tagged(
            SharedShape::ball(1.0),
            Isometry2::translation(4.0, 0.0),
            0b01,
            0.0,
        );
        scene.add_tagged(
            SharedShape::ball(1.0),
            Isometry2::translation(6.0, 0.0),
            0b10,
            0.0,
        );
        scene.add_tagged(
            SharedShape::ball(1.0),
            Isometry2::translation(8.0, 0.0),
            0b01,
            5.0,
        );

        let filter = SweepFilter::on_layers(0b01).with_depth_range(-1.0, 1.0);
        let hits = scene.sweep_all(Point2::origin(), 0.5, Vector2::x(), 20.0, &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].target, lit);
    }

    #[test]
    fn test_sweep_into_keeps_the_nearest_hits() {
        let mut scene = SweepScene::new();
        let far = ball_at(&mut scene, 1.0, 12.0, 0.0);
        let near = ball_at(&mut scene, 1.0, 4.0, 0.0);
        let mid = ball_at(&mut scene, 1.0, 8.0, 0.0);

        let placeholder = SweepHit {
            target: far,
            point: Point2::origin(),
            normal: Vector2::zeros(),
            distance: 0.0,
        };
        let mut buffer = [placeholder; 2];
        let count = scene.sweep_into(
            Point2::origin(),
            0.5,
            Vector2::x(),
            20.0,
            &SweepFilter::default(),
            &mut buffer,
        );
        assert_eq!(count, 2);
        assert_eq!(buffer[0].target, near);
        assert_eq!(buffer[1].target, mid);
    }

    #[test]
    fn test_cone_cast_through_a_scene() {
        let mut scene = SweepScene::new();
        let ahead = ball_at(&mut scene, 0.5, 8.0, 0.0);
        // Roughly 45° off axis: swept by the bounding circle, outside the cone.
        ball_at(&mut scene, 0.5, 6.0, 6.0);

        let cone = Cone2::from_half_angle(
            Point2::origin(),
            Vector2::x(),
            20.0_f32.to_radians(),
            20.0,
        )
        .unwrap();
        let hits = scene.cone_cast_all(&cone, &SweepFilter::default());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].target, ahead);

        let nearest = scene.cone_cast(&cone, &SweepFilter::default()).unwrap();
        assert_eq!(nearest.target, ahead);
        assert!((nearest.point - Point2::new(7.5, 0.0)).norm() < 1e-3);
    }
}
