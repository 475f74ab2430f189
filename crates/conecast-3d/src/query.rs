//! The three-tier cone query API.

use conecast_core::{consolidate, SweepFilter};
use nalgebra::Point3;

use crate::sweep::{SphereSweep, SweepHit};
use crate::Cone3;

/// Where the bounding sweep starts: one radius behind the apex, so the
/// sphere's leading surface begins at the apex instead of the sphere's
/// center. The 2D family does not apply this offset; the asymmetry is part
/// of the observable cone placement and is kept as-is.
fn sweep_start(cone: &Cone3) -> Point3<f32> {
    cone.origin() - cone.direction().normalize() * cone.max_radius()
}

/// Cone queries, available on every [`SphereSweep`] implementation.
///
/// Each method derives the bounding sweep radius from the cone, delegates to
/// the sweep, and consolidates the candidates in place, so the three tiers
/// share one filtering pass. Build the [`Cone3`] with
/// [`Cone3::from_half_angle`] or [`Cone3::from_max_radius`] depending on
/// which description of the cone's width you have; invalid cones are caught
/// there, before any sweeping happens.
pub trait ConeCast: SphereSweep {
    /// The nearest hit inside the cone, or `None` when nothing qualifies.
    fn cone_cast(&self, cone: &Cone3, filter: &SweepFilter) -> Option<SweepHit<Self::Target>> {
        self.cone_cast_all(cone, filter).into_iter().next()
    }

    /// Every hit inside the cone, nearest first, sized to the accepted count.
    fn cone_cast_all(&self, cone: &Cone3, filter: &SweepFilter) -> Vec<SweepHit<Self::Target>> {
        let mut hits = self.sweep_all(
            sweep_start(cone),
            cone.max_radius(),
            cone.direction(),
            cone.max_distance(),
            filter,
        );
        let kept = consolidate(cone, &mut hits);
        hits.truncate(kept);
        hits
    }

    /// Like [`ConeCast::cone_cast_all`], but writes the accepted hits into
    /// the front of `out` and returns their count, allocating nothing. The
    /// sweep fills the buffer first and the cone filter then compacts it in
    /// place, so capacity bounds the raw candidates considered (see
    /// [`SphereSweep::sweep_into`]).
    fn cone_cast_into(
        &self,
        cone: &Cone3,
        filter: &SweepFilter,
        out: &mut [SweepHit<Self::Target>],
    ) -> usize {
        let swept = self.sweep_into(
            sweep_start(cone),
            cone.max_radius(),
            cone.direction(),
            cone.max_distance(),
            filter,
            out,
        );
        consolidate(cone, &mut out[..swept])
    }
}

impl<S: SphereSweep + ?Sized> ConeCast for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use conecast_core::ConeCastError;
    use nalgebra::Vector3;
    use std::cell::RefCell;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Recorded {
        origin: Point3<f32>,
        radius: f32,
        direction: Vector3<f32>,
        max_distance: f32,
        filter: SweepFilter,
        capacity: Option<usize>,
    }

    /// Sweep that replays scripted hits and records what it was asked to do.
    struct Scripted {
        hits: Vec<SweepHit<u32>>,
        calls: RefCell<Vec<Recorded>>,
    }

    impl Scripted {
        fn new(hits: Vec<SweepHit<u32>>) -> Self {
            Self {
                hits,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl SphereSweep for Scripted {
        type Target = u32;

        fn sweep_all(
            &self,
            origin: Point3<f32>,
            radius: f32,
            direction: Vector3<f32>,
            max_distance: f32,
            filter: &SweepFilter,
        ) -> Vec<SweepHit<u32>> {
            self.calls.borrow_mut().push(Recorded {
                origin,
                radius,
                direction,
                max_distance,
                filter: *filter,
                capacity: None,
            });
            self.hits.clone()
        }

        fn sweep_into(
            &self,
            origin: Point3<f32>,
            radius: f32,
            direction: Vector3<f32>,
            max_distance: f32,
            filter: &SweepFilter,
            out: &mut [SweepHit<u32>],
        ) -> usize {
            self.calls.borrow_mut().push(Recorded {
                origin,
                radius,
                direction,
                max_distance,
                filter: *filter,
                capacity: Some(out.len()),
            });
            let n = self.hits.len().min(out.len());
            out[..n].copy_from_slice(&self.hits[..n]);
            n
        }
    }

    fn hit(target: u32, x: f32, y: f32, z: f32, distance: f32) -> SweepHit<u32> {
        SweepHit {
            target,
            point: Point3::new(x, y, z),
            normal: -Vector3::z(),
            distance,
        }
    }

    fn empty_hit() -> SweepHit<u32> {
        hit(0, 0.0, 0.0, 0.0, 0.0)
    }

    fn thirty_degree_cone() -> Cone3 {
        Cone3::from_half_angle(Point3::origin(), Vector3::z(), 30.0_f32.to_radians(), 10.0)
            .unwrap()
    }

    /// Nearest-first candidates at 0°, ~30.96°, and ~11.3° off axis.
    fn scripted_three() -> Scripted {
        Scripted::new(vec![
            hit(1, 0.0, 0.0, 5.0, 5.0),
            hit(2, 3.0, 0.0, 5.0, 5.83),
            hit(3, 1.0, 0.0, 5.0, 5.1),
        ])
    }

    #[test]
    fn test_cone_cast_all_filters_and_keeps_order() {
        let sweep = scripted_three();
        let hits = sweep.cone_cast_all(&thirty_degree_cone(), &SweepFilter::default());
        let targets: Vec<u32> = hits.iter().map(|h| h.target).collect();
        assert_eq!(targets, [1, 3]);
    }

    #[test]
    fn test_cone_cast_returns_nearest_accepted() {
        let sweep = scripted_three();
        let hit = sweep
            .cone_cast(&thirty_degree_cone(), &SweepFilter::default())
            .unwrap();
        assert_eq!(hit.target, 1);
        assert_eq!(hit.point, Point3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn test_cone_cast_misses_when_everything_is_outside() {
        let sweep = Scripted::new(vec![hit(1, 9.0, 0.0, 1.0, 5.0)]);
        assert!(sweep
            .cone_cast(&thirty_degree_cone(), &SweepFilter::default())
            .is_none());
    }

    #[test]
    fn test_buffer_tier_matches_allocating_tier() {
        let sweep = scripted_three();
        let cone = thirty_degree_cone();
        let filter = SweepFilter::default();

        let allocated = sweep.cone_cast_all(&cone, &filter);
        let mut buffer = [empty_hit(); 8];
        let count = sweep.cone_cast_into(&cone, &filter, &mut buffer);

        assert_eq!(count, allocated.len());
        assert_eq!(&buffer[..count], &allocated[..]);
    }

    #[test]
    fn test_buffer_capacity_truncates_before_filtering() {
        // The only in-cone candidate arrives third; a two-slot buffer drops
        // it at the sweep, so the query under-reports.
        let sweep = Scripted::new(vec![
            hit(1, 9.0, 0.0, 1.0, 5.0),
            hit(2, 0.0, 9.0, 1.0, 5.5),
            hit(3, 0.0, 0.0, 6.0, 6.0),
        ]);
        let mut buffer = [empty_hit(); 2];
        let count =
            sweep.cone_cast_into(&thirty_degree_cone(), &SweepFilter::default(), &mut buffer);
        assert_eq!(count, 0);
        assert_eq!(sweep.calls.borrow()[0].capacity, Some(2));
    }

    #[test]
    fn test_sweep_starts_one_radius_behind_apex() {
        let sweep = Scripted::new(Vec::new());
        let cone = Cone3::from_max_radius(
            Point3::new(1.0, 2.0, 3.0),
            Vector3::new(0.0, 0.0, 2.0),
            3.0,
            6.0,
        )
        .unwrap();
        let filter = SweepFilter::on_layers(0b100).with_depth_range(-1.0, 1.0);

        sweep.cone_cast_all(&cone, &filter);

        let call = sweep.calls.borrow()[0];
        assert_eq!(call.origin, Point3::new(1.0, 2.0, 0.0));
        assert_eq!(call.radius, 3.0);
        // Direction, distance, and filter pass through untouched.
        assert_eq!(call.direction, Vector3::new(0.0, 0.0, 2.0));
        assert_eq!(call.max_distance, 6.0);
        assert_eq!(call.filter, filter);
    }

    #[test]
    fn test_infinite_distance_fails_before_any_sweep() {
        let sweep = Scripted::new(Vec::new());
        let cone = Cone3::from_half_angle(Point3::origin(), Vector3::z(), 0.5, f32::INFINITY);
        assert!(matches!(cone, Err(ConeCastError::InvalidMaxDistance(_))));
        assert!(sweep.calls.borrow().is_empty());
    }

    #[test]
    fn test_empty_broad_phase_yields_empty_results() {
        let sweep = Scripted::new(Vec::new());
        let cone = thirty_degree_cone();
        let filter = SweepFilter::default();

        assert!(sweep.cone_cast(&cone, &filter).is_none());
        assert!(sweep.cone_cast_all(&cone, &filter).is_empty());
        let mut buffer = [empty_hit(); 4];
        assert_eq!(sweep.cone_cast_into(&cone, &filter, &mut buffer), 0);
    }
}
