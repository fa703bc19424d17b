//! Corridor search: which candidates lie within a buffer of the route.

use tracing::debug;

use hp_core::{GeoError, GeoResult, Located};

use crate::polyline::RoutePolyline;

/// A candidate retained by [`find_nearby`], with its arc position.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NearbyHit<P> {
    pub item:       P,
    /// Arc position of the candidate's foot on the route, in `[0, 1]`.
    pub fraction:   f64,
    /// Distance from the candidate to the route, metres.
    pub distance_m: f64,
}

/// Keep the candidates whose distance to the route is at most `buffer_m`,
/// ordered by arc position from the route start.
///
/// Ordering is by `fraction`, not by raw distance: direction inference reads
/// the first and last marker of each road from this order.  Equal fractions
/// keep their input order.  Nothing in range is an empty result, not an
/// error.
///
/// Fails with [`GeoError::InvalidBuffer`] for a negative or non-finite buffer
/// and [`GeoError::InvalidCoordinate`] for a malformed candidate position.
pub fn find_nearby<P, I>(
    polyline:   &RoutePolyline,
    candidates: I,
    buffer_m:   f64,
) -> GeoResult<Vec<NearbyHit<P>>>
where
    P: Located,
    I: IntoIterator<Item = P>,
{
    check_buffer(buffer_m)?;

    let mut hits = Vec::new();
    let mut scanned = 0usize;
    for item in candidates {
        scanned += 1;
        let position = item.position();
        position.validate()?;
        if let Some(p) = polyline.project_within(position, buffer_m) {
            hits.push(NearbyHit { item, fraction: p.fraction, distance_m: p.distance_m });
        }
    }

    // `sort_by` is stable, which keeps input order on equal fractions.
    hits.sort_by(|a, b| a.fraction.total_cmp(&b.fraction));

    debug!(scanned, retained = hits.len(), buffer_m, "corridor search");
    Ok(hits)
}

/// Validate a corridor half-width.
pub fn check_buffer(buffer_m: f64) -> GeoResult<()> {
    if buffer_m.is_finite() && buffer_m >= 0.0 {
        Ok(())
    } else {
        Err(GeoError::InvalidBuffer(buffer_m))
    }
}
