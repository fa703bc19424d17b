//! R-tree over polyline segments.
//!
//! Each entry is a segment's `[lon, lat]` bounding box.  A corridor query
//! inflates the probe point into a box of roughly `radius_m` on each side and
//! returns the segments whose boxes intersect it; exact projection then
//! decides.  The box is padded so the prefilter never drops a segment that
//! the exact test would accept.

use std::fmt;

use rstar::{AABB, RTree, RTreeObject};

use hp_core::Coordinate;

use crate::polyline::M_PER_DEG_LAT;

/// Extra room on the query box to absorb the haversine vs. local-frame gap.
const QUERY_PAD: f64 = 1.1;

/// Absolute slack in degrees so a zero radius still finds touching segments.
const QUERY_EPS_DEG: f64 = 1e-9;

/// Floor on `cos(lat)` so the longitude half-width stays finite near the poles.
const MIN_COS_LAT: f64 = 0.01;

// ── R-tree segment entry ──────────────────────────────────────────────────────

#[derive(Clone, Debug)]
struct SegmentEntry {
    envelope: AABB<[f64; 2]>, // [lon, lat]
    segment:  usize,
}

impl RTreeObject for SegmentEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

// ── SegmentIndex ──────────────────────────────────────────────────────────────

/// Bounding-box index of a polyline's segments.
pub struct SegmentIndex {
    tree: RTree<SegmentEntry>,
}

impl fmt::Debug for SegmentIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentIndex")
            .field("segments", &self.tree.size())
            .finish()
    }
}

impl SegmentIndex {
    /// Bulk-load the index for the segments joining consecutive `points`.
    pub fn build(points: &[Coordinate]) -> Self {
        let entries: Vec<SegmentEntry> = points
            .windows(2)
            .enumerate()
            .map(|(i, w)| SegmentEntry {
                envelope: AABB::from_corners([w[0].lon, w[0].lat], [w[1].lon, w[1].lat]),
                segment:  i,
            })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Segment indices whose boxes come within about `radius_m` of `center`,
    /// in ascending order.
    pub fn candidates(&self, center: Coordinate, radius_m: f64) -> Vec<usize> {
        let half_lat = radius_m / M_PER_DEG_LAT * QUERY_PAD + QUERY_EPS_DEG;
        let cos_lat = center.lat.to_radians().cos().max(MIN_COS_LAT);
        let half_lon = radius_m / (M_PER_DEG_LAT * cos_lat) * QUERY_PAD + QUERY_EPS_DEG;

        let query = AABB::from_corners(
            [center.lon - half_lon, center.lat - half_lat],
            [center.lon + half_lon, center.lat + half_lat],
        );

        let mut hits: Vec<usize> = self
            .tree
            .locate_in_envelope_intersecting(&query)
            .map(|e| e.segment)
            .collect();
        hits.sort_unstable();
        hits
    }
}
