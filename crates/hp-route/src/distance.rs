//! Along-route distance between two near-route points.

use hp_core::Located;
use hp_spatial::RoutePolyline;

use crate::RouteResult;

/// Measures distances along one route.
///
/// Both endpoints are projected onto the route and the sub-path between their
/// fractions is measured.  Inputs must already be in route order: a reversed
/// pair fails with [`GeoError::FractionOrder`][hp_core::GeoError::FractionOrder]
/// instead of being swapped.
#[derive(Clone, Copy, Debug)]
pub struct SegmentDistanceCalculator<'r> {
    route: &'r RoutePolyline,
}

impl<'r> SegmentDistanceCalculator<'r> {
    pub fn new(route: &'r RoutePolyline) -> Self {
        Self { route }
    }

    /// Kilometres along the route from `a` to `b`.
    pub fn distance_km<A, B>(&self, a: &A, b: &B) -> RouteResult<f64>
    where
        A: Located + ?Sized,
        B: Located + ?Sized,
    {
        let pa = a.position();
        let pb = b.position();
        pa.validate()?;
        pb.validate()?;
        let from = self.route.project(pa).fraction;
        let to = self.route.project(pb).fraction;
        self.between_fractions(from, to)
    }

    /// Kilometres along the route between two arc positions, `from <= to`.
    pub fn between_fractions(&self, from: f64, to: f64) -> RouteResult<f64> {
        Ok(self.route.arc_length_km(from, to)?)
    }
}
