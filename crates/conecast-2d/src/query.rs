//! The three-tier cone query API.

use conecast_core::{consolidate, SweepFilter};

use crate::sweep::{CircleSweep, SweepHit};
use crate::Cone2;

/// Cone queries, available on every [`CircleSweep`] implementation.
///
/// Each method derives the bounding sweep radius from the cone, delegates to
/// the sweep, and consolidates the candidates in place, so the three tiers
/// share one filtering pass. Build the [`Cone2`] with
/// [`Cone2::from_half_angle`] or [`Cone2::from_max_radius`] depending on
/// which description of the cone's width you have; invalid cones are caught
/// there, before any sweeping happens.
///
/// The sweep starts at the cone apex. The 3D family instead pre-offsets the
/// start one radius backward; the asymmetry is part of each family's
/// observable cone placement and is kept as-is.
pub trait ConeCast: CircleSweep {
    /// The nearest hit inside the cone, or `None` when nothing qualifies.
    fn cone_cast(&self, cone: &Cone2, filter: &SweepFilter) -> Option<SweepHit<Self::Target>> {
        self.cone_cast_all(cone, filter).into_iter().next()
    }

    /// Every hit inside the cone, nearest first, sized to the accepted count.
    fn cone_cast_all(&self, cone: &Cone2, filter: &SweepFilter) -> Vec<SweepHit<Self::Target>> {
        let mut hits = self.sweep_all(
            cone.origin(),
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
    /// [`CircleSweep::sweep_into`]).
    fn cone_cast_into(
        &self,
        cone: &Cone2,
        filter: &SweepFilter,
        out: &mut [SweepHit<Self::Target>],
    ) -> usize {
        let swept = self.sweep_into(
            cone.origin(),
            cone.max_radius(),
            cone.direction(),
            cone.max_distance(),
            filter,
            out,
        );
        consolidate(cone, &mut out[..swept])
    }
}

impl<S: CircleSweep + ?Sized> ConeCast for S {}
